//! Per-body world matrix handed to a renderer

use nalgebra::{Matrix4, Vector3};

use crate::simulation::states::{Body, PVec2};

/// Identity translated to `(x, y, 0)` then uniformly scaled by `scale`.
/// Position is narrowed to f32, the precision a GPU uniform takes
pub fn translation_matrix(position: PVec2, scale: f32) -> Matrix4<f32> {
    let p = nalgebra::Vector2::from(position.cast::<f32>());
    Matrix4::new_translation(&Vector3::new(p.x, p.y, 0.0)) * Matrix4::new_nonuniform_scaling(&Vector3::new(scale, scale, scale))
}

impl Body {
    /// World matrix for drawing this body at its current position
    pub fn translation_matrix(&self, scale: f32) -> Matrix4<f32> {
        translation_matrix(self.position(), scale)
    }
}
