//! Scene data containers for the orb ray caster.
//!
//! Everything here is a plain value type the renderer reads during a
//! render pass: spheres with Phong material coefficients, point lights,
//! and the image buffer the pass writes into.

mod image;
mod light;
mod material;
mod scene;
mod sphere;

pub use crate::image::{color_to_rgba, Image, ImageError};
pub use light::Light;
pub use material::{Color, Material};
pub use scene::Scene;
pub use sphere::Sphere;
