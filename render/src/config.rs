#![allow(dead_code)]

/// Winding order used by the back-face test. CCW matches STL's convention
/// and is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalOrder {
    Cw,
    Ccw,
}

/// The handful of values every demo harness needs to agree on with the core:
/// sign dimensions, the scanout file pair, projection parameters, and
/// winding order. A plain struct passed by reference, not a global -- this
/// fills the `use crate::config::Config;` gap left by the teacher's own
/// `model.rs`/`tri_mesh.rs`, which reference a `Config` type whose source
/// file was never committed.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub fov: f64,
    pub z_near: f64,
    pub z_far: f64,
    pub normal_order: NormalOrder,
    pub frame_path: String,
    pub vsync_path: String,
}

impl RenderConfig {
    /// The physical sign's native dimensions and the scanout file pair it
    /// shares with the GPIO driver.
    pub fn sign_default() -> RenderConfig {
        RenderConfig {
            width: 128,
            height: 64,
            fov: 90.0,
            z_near: 1.0,
            z_far: 1000.0,
            normal_order: NormalOrder::Ccw,
            frame_path: "/sign/frame.bin".to_string(),
            vsync_path: "/sign/lastframe".to_string(),
        }
    }
}
