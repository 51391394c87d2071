//! Orb - offline Phong ray caster
//!
//! Casts one primary ray per pixel from a pinhole camera into a scene of
//! spheres, shades the nearest hit with a Phong illumination model, and
//! resolves hard shadows with per-light shadow rays.

mod camera;
mod renderer;

pub use camera::Camera;
pub use renderer::{render, DiffusePolicy, RenderConfig, SpecularPolicy};

/// Re-export scene containers and math types for callers
pub use orb_core::{color_to_rgba, Color, Image, ImageError, Light, Material, Scene, Sphere};
pub use orb_math::{Interval, Ray, Vec3};
