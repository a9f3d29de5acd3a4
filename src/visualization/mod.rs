pub mod transform;
#[cfg(feature = "viewer")]
pub mod viewer2d;
