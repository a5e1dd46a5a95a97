//! Demo shell: load an OBJ/MTL model and report mesh statistics.
//! Falls back to the procedural cube when the model cannot be loaded.

use std::path::PathBuf;

use anyhow::Result;

use asset::cube::unit_cube;
use asset::mesh::MeshData;
use asset::obj::{self, LoadOptions, MaterialPolicy};

fn parse_material_policy_arg() -> MaterialPolicy {
    // Accept: --materials=strict|fallback
    let mut policy = MaterialPolicy::Strict;
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--materials=") {
            policy = match val.to_ascii_lowercase().as_str() {
                "strict" => MaterialPolicy::Strict,
                "fallback" | "red" => MaterialPolicy::FallbackRed,
                other => {
                    eprintln!("[warn] Unknown material policy '{}', using strict.", other);
                    MaterialPolicy::Strict
                }
            };
        }
    }
    policy
}

fn parse_scale_arg() -> Option<f32> {
    // --scale=<factor>, applied to positions after loading
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--scale=") {
            match val.parse::<f32>() {
                Ok(factor) => return Some(factor),
                Err(_) => eprintln!("[warn] Invalid scale '{}', ignoring.", val),
            }
        }
    }
    None
}

fn parse_mtl_arg() -> Option<PathBuf> {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--mtl=") {
            return Some(PathBuf::from(val));
        }
    }
    None
}

fn parse_obj_path_arg() -> Option<PathBuf> {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(PathBuf::from)
}

fn report(mesh: &MeshData) {
    log::info!(
        "Mesh: {} vertices, {} indices ({} triangles)",
        mesh.vertices.len(),
        mesh.indices.len(),
        mesh.indices.len() / 3
    );
    log::info!(
        "Absolute extents: max={:?}, min={:?}",
        mesh.extents.max,
        mesh.extents.min
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = LoadOptions {
        material_policy: parse_material_policy_arg(),
    };
    let scale = parse_scale_arg();
    let mtl_path = parse_mtl_arg();

    let mesh = match parse_obj_path_arg() {
        Some(obj_path) => {
            log::info!(
                "Loading model '{}' (materials: {:?})",
                obj_path.display(),
                options.material_policy
            );
            match obj::load_model_from_path(&obj_path, mtl_path.as_deref(), options) {
                Ok(mesh) => mesh,
                Err(err) => {
                    // Load failure means "this model is unavailable"; show
                    // the default primitive instead of aborting.
                    log::error!("Model load failed: {err}. Falling back to the cube.");
                    unit_cube()
                }
            }
        }
        None => {
            log::info!("No OBJ path given, using the procedural cube.");
            unit_cube()
        }
    };

    let mesh = match scale {
        Some(factor) => {
            log::info!("Applying uniform scale {factor}");
            mesh.scaled(factor)
        }
        None => mesh,
    };

    report(&mesh);
    Ok(())
}
