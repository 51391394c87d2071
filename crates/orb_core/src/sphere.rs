//! Sphere primitive for ray casting.

use crate::Material;
use orb_math::{Interval, Ray, Vec3};

/// A sphere with Phong material coefficients.
///
/// Spheres are identified by their index in the [`Scene`](crate::Scene)
/// that holds them, never by structural equality; two coincident spheres
/// are still distinct objects to the shadow pass.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Test the ray against this sphere.
    ///
    /// Returns the smallest ray parameter t inside `ray_t` at which the
    /// ray pierces the surface, or `None` if it misses. Works with
    /// unnormalized ray directions.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        Some(root)
    }

    /// Outward surface normal at a point assumed to lie on the sphere.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, Material::default());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = sphere.hit(&ray, Interval::POSITIVE).expect("should hit");

        // Near surface is at z = -1.5
        assert!((t - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, Material::default());

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_hit_point_lies_on_surface() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -4.0), 1.25, Material::default());

        // Unnormalized direction toward the center
        let origin = Vec3::new(0.0, 0.0, 3.0);
        let ray = Ray::new(origin, sphere.center - origin);
        let t = sphere.hit(&ray, Interval::POSITIVE).expect("should hit");

        let point = ray.at(t);
        assert!((point.distance(sphere.center) - sphere.radius).abs() < 1e-3);
    }

    #[test]
    fn test_closest_approach_inside_radius() {
        // Ray passes 0.4 units from the center of a 0.5-radius sphere: hit.
        let sphere = Sphere::new(Vec3::new(0.0, 0.4, -3.0), 0.5, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_some());

        // 0.6 units away: miss.
        let sphere = Sphere::new(Vec3::new(0.0, 0.6, -3.0), 0.5, Material::default());
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_hit_behind_origin_rejected() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }
}
