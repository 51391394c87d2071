//! Pinhole camera: viewing basis, viewport extent, and the owned image
//! buffer a render pass writes into.

use std::fmt;

use orb_core::Image;
use orb_math::Vec3;

/// Camera for generating primary rays into the scene.
///
/// The viewport is a `width` x `height` world-space rectangle centered on
/// `target` and spanned by the `right`/`up` basis. Viewport placement is
/// coupled to the look-at point rather than to a distance along the view
/// direction, so viewport size is independent of the eye-to-target
/// distance. This is not a typical perspective projection; moving the
/// eye changes ray convergence but not the framed rectangle.
pub struct Camera {
    /// Ray origin
    pub eye: Vec3,
    /// Look-at point; also the viewport center
    pub target: Vec3,
    /// Unit up vector
    pub up: Vec3,
    /// Unit right vector, derived as (target - eye) x up
    pub right: Vec3,

    /// Viewport width in scene units
    pub width: f32,
    /// Viewport height in scene units
    pub height: f32,

    /// Horizontal resolution in pixels
    pub pixels_w: u32,
    /// Vertical resolution in pixels
    pub pixels_h: u32,

    image: Image,
}

impl Camera {
    /// Default resolution on both axes when none is requested.
    pub const DEFAULT_RESOLUTION: u32 = 3000;

    /// Create a camera looking from `eye` toward `target`.
    ///
    /// `up_hint` is normalized; `right` is the normalized cross product
    /// of the view direction and up (right-handed convention). Inputs
    /// are not validated: an up hint parallel to the view direction
    /// produces a degenerate basis and garbage output. A warning is
    /// logged in that case since the failure is otherwise silent.
    pub fn new(eye: Vec3, target: Vec3, up_hint: Vec3, width: f32, height: f32) -> Self {
        let up = up_hint.normalize();

        let cross = (target - eye).cross(up);
        if cross.length_squared() < 1e-12 {
            log::warn!(
                "degenerate camera basis: view direction {:?} is parallel to up {:?}",
                target - eye,
                up
            );
        }
        let right = cross.normalize();

        let pixels = Self::DEFAULT_RESOLUTION;
        Self {
            eye,
            target,
            up,
            right,
            width,
            height,
            pixels_w: pixels,
            pixels_h: pixels,
            image: Image::new(pixels, pixels),
        }
    }

    /// Override the default resolution, reallocating the image buffer.
    pub fn with_resolution(mut self, pixels_w: u32, pixels_h: u32) -> Self {
        self.pixels_w = pixels_w;
        self.pixels_h = pixels_h;
        self.image.resize(pixels_w, pixels_h);
        self
    }

    /// The rendered image.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Mutable access to the owned image buffer.
    pub(crate) fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    /// Consume the camera, keeping only its image.
    pub fn into_image(self) -> Image {
        self.image
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera[{}; {}; {}; {}x{}]",
            self.eye, self.target, self.up, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis_orthonormal() {
        // View along -Z with +Y up gives right = +X
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            2.0,
            2.0,
        );

        assert!((camera.right - Vec3::X).length() < 1e-6);
        assert!((camera.right.length() - 1.0).abs() < 1e-6);
        assert!((camera.up.length() - 1.0).abs() < 1e-6);
        assert!(camera.right.dot(camera.up).abs() < 1e-6);
    }

    #[test]
    fn test_camera_normalizes_up_hint() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::new(0.0, 7.5, 0.0),
            2.0,
            2.0,
        );
        assert!((camera.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_camera_default_resolution() {
        let camera = Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 1.0);
        assert_eq!(camera.pixels_w, Camera::DEFAULT_RESOLUTION);
        assert_eq!(camera.pixels_h, Camera::DEFAULT_RESOLUTION);
        assert_eq!(camera.image().width(), Camera::DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_with_resolution_resizes_image() {
        let camera = Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 1.0).with_resolution(8, 4);
        assert_eq!(camera.pixels_w, 8);
        assert_eq!(camera.pixels_h, 4);
        assert_eq!(camera.image().width(), 8);
        assert_eq!(camera.image().height(), 4);
    }

    #[test]
    fn test_camera_display() {
        let camera =
            Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 2.0, 3.0).with_resolution(4, 4);
        let text = format!("{}", camera);
        assert!(text.starts_with("Camera["));
        assert!(text.contains("2x3"));
    }
}
