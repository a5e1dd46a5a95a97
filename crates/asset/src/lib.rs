//! Asset loading/parsers (OBJ geometry, MTL material libraries).
//! Produces flat vertex/index buffers ready for indexed GPU draws, plus a
//! procedural cube primitive for callers that need a fallback model.

pub mod cube;
pub mod error;
pub mod mesh;
pub mod mtl;
pub mod obj;
