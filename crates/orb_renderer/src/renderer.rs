//! Core ray-casting render pass.
//!
//! For every pixel: build a primary ray from the eye through the
//! viewport, find the nearest sphere intersection with a linear scan,
//! and shade the hit with a Phong model plus hard shadow rays. No
//! acceleration structure, no bounces, single-threaded.

use orb_core::{Color, Light, Scene, Sphere};
use orb_math::{Interval, Ray, Vec3};

use crate::Camera;

/// How to treat a negative diffuse dot product (light behind surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusePolicy {
    /// Keep the negative contribution; back-facing lights darken the
    /// surface. This is the default.
    AllowNegative,
    /// Clamp the Lambert factor to zero, as most Phong implementations do.
    ClampToZero,
}

/// How to treat a negative base in the specular power term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecularPolicy {
    /// Raise the possibly-negative base as-is. With a fractional
    /// shininess exponent this yields NaN, which then flows into the
    /// pixel. This is the default.
    PropagateNan,
    /// Clamp the base to zero before exponentiation.
    ClampBase,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Global ambient intensity applied to every hit
    pub ambient_light: f32,
    /// Color of pixels no primary ray hits
    pub background: Color,
    /// Negative-diffuse handling
    pub diffuse_policy: DiffusePolicy,
    /// Negative-specular-base handling
    pub specular_policy: SpecularPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ambient_light: 0.5,
            background: Color::ZERO,
            diffuse_policy: DiffusePolicy::AllowNegative,
            specular_policy: SpecularPolicy::PropagateNan,
        }
    }
}

/// Render the scene into the camera's owned image buffer.
///
/// Scene and lights are read-only for the duration of the pass. Every
/// pixel is overwritten: misses get `config.background`.
pub fn render(camera: &mut Camera, scene: &Scene, lights: &[Light], config: &RenderConfig) {
    let (pixels_w, pixels_h) = (camera.pixels_w, camera.pixels_h);
    log::info!(
        "rendering {}x{} pixels, {} spheres, {} lights",
        pixels_w,
        pixels_h,
        scene.len(),
        lights.len()
    );

    // Viewport is centered on the look-at point.
    let top_left = camera.target + (camera.height / 2.0) * camera.up
        - (camera.width / 2.0) * camera.right;

    let step_right = (camera.width / pixels_w as f32) * camera.right;
    let step_down = (-camera.height / pixels_h as f32) * camera.up;

    let eye = camera.eye;
    camera.image_mut().fill(config.background);

    for i in 0..pixels_h {
        // Accumulate the direction across the row instead of recomputing
        // it per pixel; equivalent to top_left - eye + i*down + j*right.
        let mut direction = top_left - eye + i as f32 * step_down;

        for j in 0..pixels_w {
            let ray = Ray::new(eye, direction);

            if let Some((index, point)) = nearest_hit(scene, &ray, eye) {
                let color = shade(scene, index, point, eye, lights, config);
                camera.image_mut().set_pixel(i, j, color);
            }

            direction += step_right;
        }
    }
}

/// Find the sphere whose intersection point lies closest to `eye`.
///
/// Returns the sphere's scene index and the intersection point. Ties in
/// distance go to the first-encountered sphere.
fn nearest_hit(scene: &Scene, ray: &Ray, eye: Vec3) -> Option<(usize, Vec3)> {
    let mut nearest: Option<(usize, Vec3)> = None;
    let mut nearest_distance = f32::INFINITY;

    for (index, sphere) in scene.spheres().iter().enumerate() {
        if let Some(t) = sphere.hit(ray, Interval::POSITIVE) {
            let point = ray.at(t);
            let distance = eye.distance(point);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = Some((index, point));
            }
        }
    }

    nearest
}

/// Shade a hit point: ambient floor plus each unoccluded light's Phong
/// contribution.
fn shade(
    scene: &Scene,
    sphere_index: usize,
    point: Vec3,
    eye: Vec3,
    lights: &[Light],
    config: &RenderConfig,
) -> Color {
    let sphere = &scene.spheres()[sphere_index];
    let mut total = sphere.material.ambient * config.ambient_light;

    for light in lights {
        if in_shadow(scene, sphere_index, point, light) {
            continue;
        }
        total += phong(sphere, point, eye, light, config);
    }

    total
}

/// Test whether any other sphere occludes `light` as seen from `point`.
///
/// The shadow ray is cast from the light toward the point; an occluder
/// counts only if its hit lies strictly closer to the light than the
/// point itself. The shaded sphere is excluded by index so grazing
/// intersections at the hit point never self-shadow.
fn in_shadow(scene: &Scene, sphere_index: usize, point: Vec3, light: &Light) -> bool {
    let ray = Ray::new(light.position, point - light.position);
    let point_distance = light.position.distance(point);

    for (index, sphere) in scene.spheres().iter().enumerate() {
        if index == sphere_index {
            continue;
        }
        if let Some(t) = sphere.hit(&ray, Interval::POSITIVE) {
            if light.position.distance(ray.at(t)) < point_distance {
                return true;
            }
        }
    }

    false
}

/// One light's Phong contribution at a point on a sphere.
fn phong(sphere: &Sphere, point: Vec3, eye: Vec3, light: &Light, config: &RenderConfig) -> Color {
    let n = sphere.normal_at(point);
    let l = (light.position - point).normalize();
    let v = (eye - point).normalize();
    // Mirror reflection of the light direction about the normal; unit
    // length already since l and n are unit.
    let r = 2.0 * l.dot(n) * n - l;

    let mut lambert = l.dot(n);
    if config.diffuse_policy == DiffusePolicy::ClampToZero {
        lambert = lambert.max(0.0);
    }

    let mut base = r.dot(v);
    if config.specular_policy == SpecularPolicy::ClampBase {
        base = base.max(0.0);
    }

    let diffuse = lambert * (sphere.material.diffuse * light.diffuse);
    let specular = base.powf(sphere.material.shininess) * (sphere.material.specular * light.specular);

    diffuse + specular
}
