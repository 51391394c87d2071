//! Scene: the unordered collection of spheres a render pass scans.

use crate::Sphere;

/// A collection of spheres.
///
/// Iteration order is insertion order; the renderer relies on indices
/// into this collection as stable sphere identities for the duration of
/// a render pass.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// All spheres, in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use orb_math::Vec3;

    #[test]
    fn test_scene_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        scene.add(Sphere::new(Vec3::X, 2.0, Material::default()));

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.spheres()[0].radius, 1.0);
        assert_eq!(scene.spheres()[1].radius, 2.0);
    }
}
