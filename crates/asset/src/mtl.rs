//! Wavefront material-library parser (`newmtl` / `Kd` directives).

use glam::Vec3;

use crate::error::{LoadError, Result};

/// Named material with a diffuse RGB color.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub diffuse: Vec3,
}

/// Materials in first-declaration order, looked up by name on `usemtl`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    /// Parse material-library text. Lines whose first token is neither
    /// `newmtl` nor `Kd` are ignored, which keeps the parser forward
    /// compatible with directives it does not model (Ns, illum, maps, ...).
    pub fn parse(text: &str) -> Result<Self> {
        let mut materials: Vec<Material> = Vec::new();
        // Index the next Kd applies to.
        let mut current: Option<usize> = None;

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let mut parts = line.split_whitespace();
            let Some(tag) = parts.next() else { continue };

            match tag {
                "newmtl" => {
                    let Some(name) = parts.next() else {
                        return Err(LoadError::Parse {
                            line: line_no,
                            text: line.to_string(),
                        });
                    };
                    // Duplicate names: last write wins, first-declaration
                    // position kept.
                    current = Some(match materials.iter().position(|m| m.name == name) {
                        Some(slot) => slot,
                        None => {
                            materials.push(Material {
                                name: name.to_string(),
                                diffuse: Vec3::ONE,
                            });
                            materials.len() - 1
                        }
                    });
                }
                "Kd" => {
                    let Some(slot) = current else {
                        // Kd with no preceding newmtl has nothing to color.
                        return Err(LoadError::Parse {
                            line: line_no,
                            text: line.to_string(),
                        });
                    };
                    let r = parse_f32(parts.next(), line_no, line)?;
                    let g = parse_f32(parts.next(), line_no, line)?;
                    let b = parse_f32(parts.next(), line_no, line)?;
                    materials[slot].diffuse = Vec3::new(r, g, b);
                }
                _ => {}
            }
        }

        log::debug!("Parsed material library: {} material(s)", materials.len());
        Ok(Self { materials })
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }
}

fn parse_f32(token: Option<&str>, line: usize, text: &str) -> Result<f32> {
    let err = || LoadError::Parse {
        line,
        text: text.to_string(),
    };
    token.ok_or_else(err)?.parse::<f32>().map_err(|_| err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn parses_named_diffuse_colors_in_order() {
        let src = "newmtl Red\nKd 1 0 0\nnewmtl Sky\nKd 0.2 0.4 1.0\n";
        let lib = MaterialLibrary::parse(src).expect("parse library");
        assert_eq!(lib.materials().len(), 2);
        assert_eq!(lib.materials()[0].name, "Red");
        assert_eq!(lib.materials()[1].name, "Sky");
        assert_eq!(lib.get("Red").unwrap().diffuse, vec3(1.0, 0.0, 0.0));
        assert_eq!(lib.get("Sky").unwrap().diffuse, vec3(0.2, 0.4, 1.0));
        assert!(lib.get("Missing").is_none());
    }

    #[test]
    fn ignores_unsupported_directives_and_blank_lines() {
        let src = r#"
            # exported material
            newmtl Shiny
            Ns 96.0
            Ka 1 1 1
            Kd 0.5 0.5 0.5
            illum 2
        "#;
        let lib = MaterialLibrary::parse(src).expect("parse library");
        assert_eq!(lib.materials().len(), 1);
        assert_eq!(lib.get("Shiny").unwrap().diffuse, Vec3::splat(0.5));
    }

    #[test]
    fn duplicate_newmtl_is_last_write_wins() {
        let src = "newmtl A\nKd 1 0 0\nnewmtl B\nKd 0 1 0\nnewmtl A\nKd 0 0 1\n";
        let lib = MaterialLibrary::parse(src).expect("parse library");
        assert_eq!(lib.materials().len(), 2);
        // Order position of the first declaration is retained.
        assert_eq!(lib.materials()[0].name, "A");
        assert_eq!(lib.get("A").unwrap().diffuse, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn malformed_kd_fails_with_line_number() {
        let err = MaterialLibrary::parse("newmtl A\nKd 1 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let err = MaterialLibrary::parse("newmtl A\nKd 1 zero 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn stray_kd_before_newmtl_fails() {
        let err = MaterialLibrary::parse("Kd 1 0 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }
}
