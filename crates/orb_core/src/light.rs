//! Point light source.

use crate::Color;
use orb_math::Vec3;

/// A point light with separate diffuse and specular intensities.
///
/// Read-only during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position of the light
    pub position: Vec3,

    /// Diffuse intensity (RGB)
    pub diffuse: Color,

    /// Specular intensity (RGB)
    pub specular: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }

    /// Create a white light with identical diffuse and specular intensity.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Color::ONE, Color::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_light() {
        let light = Light::white(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(light.diffuse, Color::ONE);
        assert_eq!(light.specular, Color::ONE);
        assert_eq!(light.position, Vec3::new(5.0, 5.0, 5.0));
    }
}
