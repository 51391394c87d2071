//! Phong material coefficients.

use orb_math::Vec3;

/// Color type alias (RGB values typically 0-1).
///
/// Colors add channel-wise and multiply channel-wise via glam's
/// component-wise `Mul`.
pub type Color = Vec3;

/// Phong reflectance coefficients for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance (RGB, 0-1)
    pub ambient: Color,

    /// Diffuse reflectance (RGB, 0-1)
    pub diffuse: Color,

    /// Specular reflectance (RGB, 0-1)
    pub specular: Color,

    /// Specular exponent controlling highlight sharpness
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::new(0.1, 0.1, 0.1),
            diffuse: Color::new(0.5, 0.5, 0.5), // Grey default
            specular: Color::new(0.5, 0.5, 0.5),
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a material with the given diffuse color and default
    /// ambient/specular terms.
    pub fn new(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// Set the ambient reflectance.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the specular reflectance and shininess exponent.
    pub fn with_specular(mut self, specular: Color, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_builder() {
        let m = Material::new(Color::new(0.8, 0.2, 0.2))
            .with_ambient(Color::new(0.2, 0.05, 0.05))
            .with_specular(Color::ONE, 64.0);

        assert_eq!(m.diffuse, Color::new(0.8, 0.2, 0.2));
        assert_eq!(m.ambient, Color::new(0.2, 0.05, 0.05));
        assert_eq!(m.specular, Color::ONE);
        assert_eq!(m.shininess, 64.0);
    }
}
