pub mod config;
pub mod error;
pub mod frustum;
pub mod matrix;
pub mod model;
pub mod point;
pub mod polygon;
pub mod screen;
pub mod texture;

pub use config::{NormalOrder, RenderConfig};
pub use error::RenderError;
pub use frustum::{Frustum, Plane};
pub use matrix::Matrix;
pub use model::Model;
pub use point::{cross_product, Point};
pub use polygon::{Polygon, RenderMode};
pub use screen::{Screen, Uv};
pub use texture::{ClampMode, Texture};
