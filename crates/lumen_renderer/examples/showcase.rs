//! Small showcase render.
//!
//! One of every primitive and material on a diffuse ground, saved to PPM.

use lumen_renderer::{
    render, Camera, Color, Cylinder, Dielectric, Ellipsoid, Lambertian, Metal, RenderConfig,
    Scene, Sphere, Vec3,
};
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = std::time::Instant::now();
    let world = build_scene();
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::default()
        .with_resolution(400, 225)
        .with_quality(50, 10)
        .with_seed(2024);

    let look_from = Vec3::new(0.0, 1.5, 6.0);
    let look_at = Vec3::new(0.0, 0.5, 0.0);
    let mut camera = Camera::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(35.0, 0.1, (look_from - look_at).length())
        .with_aspect_ratio(config.aspect_ratio());
    camera.initialize().expect("Invalid camera");

    let mut rng = config.rng();
    let image = render(&camera, &world, &config, &mut rng).expect("Render failed");

    let filename = "showcase.ppm";
    let file = File::create(filename).expect("Failed to create output file");
    image
        .write_ppm(BufWriter::new(file))
        .expect("Failed to save image");
    log::info!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.push(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
    ));

    // Glass sphere in the middle
    scene.push(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    ));

    // Squashed diffuse ellipsoid on the left
    scene.push(Ellipsoid::new(
        Vec3::new(-2.5, 0.6, 0.0),
        1.0,
        0.6,
        0.8,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    ));

    // Brushed metal tube on the right, lying along z
    scene.push(Cylinder::new(
        Vec3::new(2.5, 0.7, 0.0),
        0.7,
        1.5,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.2)),
    ));

    log::info!("Created {} objects", scene.len());
    scene
}
