//! Wavefront OBJ geometry parsing and mesh assembly.
//!
//! One sequential pass over the text: `v`/`vn` lines accumulate raw arrays,
//! `usemtl` switches the active material, and each `f` line resolves its
//! 1-based references into freshly emitted vertices plus index-buffer
//! entries. Vertices are never deduplicated; every face occurrence emits
//! fresh entries and the index buffer alone expresses topology.

use std::fs;
use std::path::Path;

use glam::Vec3;

use crate::error::{LoadError, Result};
use crate::mesh::{Extents, MeshData, Vertex};
use crate::mtl::MaterialLibrary;

/// Most vertices a 16-bit index buffer can address.
const MAX_VERTICES: usize = 1 << 16;

/// Diffuse substituted by [`MaterialPolicy::FallbackRed`].
const FALLBACK_DIFFUSE: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// What to do when a face has no resolvable material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterialPolicy {
    /// Unknown `usemtl` names and faces before any `usemtl` are data errors.
    #[default]
    Strict,
    /// Substitute a default red diffuse instead of failing.
    FallbackRed,
}

/// Loader configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub material_policy: MaterialPolicy,
}

/// Load a model from an OBJ file path and an optional companion
/// material-library path.
pub fn load_model_from_path(
    obj_path: impl AsRef<Path>,
    mtl_path: Option<&Path>,
    options: LoadOptions,
) -> Result<MeshData> {
    let obj_text = read_input(obj_path.as_ref())?;
    let mtl_text = match mtl_path {
        Some(path) => Some(read_input(path)?),
        None => None,
    };
    load_model_from_str(&obj_text, mtl_text.as_deref(), options)
}

/// Load a model from in-memory OBJ and material-library text.
pub fn load_model_from_str(
    obj_text: &str,
    mtl_text: Option<&str>,
    options: LoadOptions,
) -> Result<MeshData> {
    let library = match mtl_text {
        Some(text) => MaterialLibrary::parse(text)?,
        None => MaterialLibrary::default(),
    };
    parse_obj(obj_text, &library, options)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoadError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_obj(text: &str, library: &MaterialLibrary, options: LoadOptions) -> Result<MeshData> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    // Diffuse of the material currently in effect, set by usemtl.
    let mut active: Option<Vec3> = None;

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u16> = Vec::new();
    let mut extents = Extents::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let mut parts = line.split_whitespace();
        let Some(tag) = parts.next() else { continue };

        match tag {
            "v" => {
                let x = parse_f32(parts.next(), line_no, line)?;
                let y = parse_f32(parts.next(), line_no, line)?;
                let z = parse_f32(parts.next(), line_no, line)?;
                let position = Vec3::new(x, y, z);
                extents.update(position);
                positions.push(position);
            }
            "vn" => {
                let nx = parse_f32(parts.next(), line_no, line)?;
                let ny = parse_f32(parts.next(), line_no, line)?;
                let nz = parse_f32(parts.next(), line_no, line)?;
                normals.push(Vec3::new(nx, ny, nz));
            }
            "usemtl" => {
                let Some(name) = parts.last() else {
                    return Err(LoadError::Parse {
                        line: line_no,
                        text: line.to_string(),
                    });
                };
                active = Some(match library.get(name) {
                    Some(material) => material.diffuse,
                    None => match options.material_policy {
                        MaterialPolicy::Strict => {
                            return Err(LoadError::MaterialNotFound {
                                line: line_no,
                                name: name.to_string(),
                            });
                        }
                        MaterialPolicy::FallbackRed => {
                            log::warn!("line {line_no}: unknown material '{name}', using fallback");
                            FALLBACK_DIFFUSE
                        }
                    },
                });
            }
            "f" => {
                let refs: Vec<&str> = parts.collect();
                if refs.len() != 3 && refs.len() != 4 {
                    return Err(LoadError::UnsupportedFaceArity {
                        line: line_no,
                        count: refs.len(),
                        text: line.to_string(),
                    });
                }

                let color = match active {
                    Some(color) => color,
                    None => match options.material_policy {
                        MaterialPolicy::Strict => {
                            return Err(LoadError::NoActiveMaterial {
                                line: line_no,
                                text: line.to_string(),
                            });
                        }
                        MaterialPolicy::FallbackRed => FALLBACK_DIFFUSE,
                    },
                };

                // Every vertex of the face shares one normal: the last
                // slash field of the face's last reference (faceted
                // shading). Per-vertex normal fields are not consulted.
                let last_ref = refs[refs.len() - 1];
                let normal_idx =
                    resolve_index(last_ref.split('/').next_back(), normals.len(), line_no, line)?;
                let normal = normals[normal_idx];

                if vertices.len() + refs.len() > MAX_VERTICES {
                    return Err(LoadError::MeshTooLarge);
                }
                let offset = vertices.len() as u16;
                for face_ref in &refs {
                    // First slash field is the position index; a texcoord
                    // field in the middle is skipped over entirely.
                    let pos_idx =
                        resolve_index(face_ref.split('/').next(), positions.len(), line_no, line)?;
                    vertices.push(Vertex::new(positions[pos_idx], normal, color));
                }
                // Quads triangulate on the fixed 0-2 diagonal.
                let fan: &[u16] = if refs.len() == 3 {
                    &[0, 1, 2]
                } else {
                    &[0, 1, 2, 0, 2, 3]
                };
                indices.extend(fan.iter().map(|i| i + offset));
            }
            _ => {
                // o/g/s/mtllib/vt and comments are no-ops.
            }
        }
    }

    log::debug!(
        "Parsed OBJ: {} vertices, {} indices ({} positions, {} normals)",
        vertices.len(),
        indices.len(),
        positions.len(),
        normals.len()
    );
    Ok(MeshData::new(vertices, indices, extents))
}

fn parse_f32(token: Option<&str>, line: usize, text: &str) -> Result<f32> {
    let err = || LoadError::Parse {
        line,
        text: text.to_string(),
    };
    token.ok_or_else(err)?.parse::<f32>().map_err(|_| err())
}

/// Translate a 1-based OBJ index field to a 0-based array index. Zero,
/// negative, non-numeric and out-of-range fields are all rejected.
fn resolve_index(field: Option<&str>, len: usize, line: usize, text: &str) -> Result<usize> {
    let err = || LoadError::InvalidFaceIndex {
        line,
        text: text.to_string(),
    };
    let raw: usize = field.ok_or_else(err)?.parse().map_err(|_| err())?;
    if raw == 0 || raw > len {
        return Err(err());
    }
    Ok(raw - 1)
}
