//! Simple ray caster example.
//!
//! Renders a three-sphere scene with two lights and saves a PNG.

use anyhow::Context;
use orb_renderer::{
    render, Camera, Color, Light, Material, RenderConfig, Scene, Sphere, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene = build_scene();
    let lights = vec![
        Light::white(Vec3::new(8.0, 10.0, 6.0)),
        Light::new(
            Vec3::new(-6.0, 4.0, 8.0),
            Color::new(0.3, 0.3, 0.5),
            Color::new(0.2, 0.2, 0.4),
        ),
    ];

    // Full size is Camera::DEFAULT_RESOLUTION; keep the demo quick.
    let mut camera = Camera::new(
        Vec3::new(0.0, 1.0, 10.0), // eye
        Vec3::new(0.0, 0.5, 0.0),  // target
        Vec3::Y,                   // up
        8.0,
        8.0,
    )
    .with_resolution(800, 800);

    println!("{}", camera);
    println!(
        "Rendering {}x{}, {} spheres, {} lights...",
        camera.pixels_w,
        camera.pixels_h,
        scene.len(),
        lights.len()
    );

    let start = std::time::Instant::now();
    render(&mut camera, &scene, &lights, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    camera
        .image()
        .save_png(filename)
        .with_context(|| format!("failed to save {filename}"))?;
    println!("Saved to {filename}");

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.add(Sphere::new(
        Vec3::new(0.0, -1001.0, 0.0),
        1000.0,
        Material::new(Color::new(0.4, 0.4, 0.4)).with_ambient(Color::new(0.15, 0.15, 0.15)),
    ));

    // Red sphere, strong highlight
    scene.add(Sphere::new(
        Vec3::new(-1.6, 0.0, 0.0),
        1.0,
        Material::new(Color::new(0.8, 0.15, 0.1))
            .with_ambient(Color::new(0.2, 0.05, 0.02))
            .with_specular(Color::new(0.9, 0.9, 0.9), 64.0),
    ));

    // Blue sphere, soft highlight
    scene.add(Sphere::new(
        Vec3::new(1.6, 0.0, 0.0),
        1.0,
        Material::new(Color::new(0.1, 0.2, 0.8))
            .with_ambient(Color::new(0.02, 0.05, 0.2))
            .with_specular(Color::new(0.5, 0.5, 0.5), 16.0),
    ));

    // Small green sphere floating between them, casting shadows
    scene.add(Sphere::new(
        Vec3::new(0.0, 1.4, 1.0),
        0.5,
        Material::new(Color::new(0.2, 0.7, 0.2)).with_specular(Color::new(0.6, 0.6, 0.6), 32.0),
    ));

    scene
}
