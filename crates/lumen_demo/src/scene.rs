//! The demo scene: a figure curling a dumbbell on a grassy hill.

use lumen_renderer::{
    Camera, Color, Cylinder, Lambertian, Material, Metal, RenderConfig, RenderError, Scene,
    Sphere, Vec3,
};
use std::sync::Arc;

/// Image aspect ratio (width / height); the figure stands upright.
pub const ASPECT_RATIO: f32 = 2.0 / 4.0;
pub const IMAGE_WIDTH: u32 = 1000;
pub const SAMPLES_PER_PIXEL: u32 = 100;
pub const MAX_DEPTH: u32 = 50;

/// Render settings for the demo.
pub fn render_config() -> RenderConfig {
    let image_height = (IMAGE_WIDTH as f32 / ASPECT_RATIO) as u32;
    RenderConfig::default()
        .with_resolution(IMAGE_WIDTH, image_height)
        .with_quality(SAMPLES_PER_PIXEL, MAX_DEPTH)
}

/// Camera looking at the figure from the side with a little depth of field.
pub fn camera() -> Result<Camera, RenderError> {
    let look_from = Vec3::new(90.0, 0.0, 0.0);
    let look_at = Vec3::ZERO;
    let dist_to_focus = (look_from - look_at).length();
    let aperture = 0.2;

    let mut camera = Camera::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(50.0, aperture, dist_to_focus)
        .with_aspect_ratio(ASPECT_RATIO);
    camera.initialize()?;
    Ok(camera)
}

/// Build the scene.
pub fn build_scene() -> Scene {
    // Fuzz above 1 saturates, so the dumbbell and sun are fully rough metal
    let dumbbell: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.6, 0.6, 0.6), 2.0));
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.2, 1.0, 0.2)));
    let pants: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.2, 0.1)));
    let shirt: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(1.0, 0.3, 0.3)));
    let skin: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.9, 0.5, 0.4)));
    let shoes: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.0, 0.0, 0.0)));
    let sun: Arc<dyn Material> = Arc::new(Metal::new(Color::new(1.0, 1.0, 0.0), 20.0));

    let mut scene = Scene::new();
    let mut sphere = |x: f32, y: f32, z: f32, radius: f32, material: &Arc<dyn Material>| {
        scene.push(Sphere::new(Vec3::new(x, y, z), radius, Arc::clone(material)));
    };

    // Dumbbell plates
    sphere(0.0, 0.0, -14.0, 4.0, &dumbbell);
    sphere(0.0, 0.0, 14.0, 4.0, &dumbbell);

    // Hands
    sphere(0.0, 0.0, 7.0, 1.3, &skin);
    sphere(0.0, 0.0, -7.0, 1.3, &skin);

    // Arms, shoulder sleeves in shirt color
    for (y, z) in [(-3.0, 7.0), (-6.0, 6.7), (-9.0, 6.0)] {
        sphere(0.0, y, z, 0.8, &skin);
        sphere(0.0, y, -z, 0.8, &skin);
    }
    sphere(0.0, -12.0, -5.0, 0.8, &shirt);
    sphere(0.0, -12.0, 5.0, 0.8, &shirt);

    // Head and neck
    sphere(0.0, -7.0, 0.0, 2.5, &skin);
    sphere(0.0, -10.0, 0.0, 0.8, &skin);

    // Torso
    sphere(0.0, -14.0, 0.0, 4.0, &shirt);
    sphere(0.0, -16.0, 0.0, 4.0, &shirt);
    sphere(0.0, -18.0, 0.0, 4.0, &pants);

    // Legs
    for (y, z) in [(-23.0, 2.0), (-26.0, 2.3), (-29.0, 2.5)] {
        sphere(0.0, y, z, 0.8, &pants);
        sphere(0.0, y, -z, 0.8, &pants);
    }

    // Feet
    sphere(0.0, -33.0, 2.8, 1.5, &shoes);
    sphere(0.0, -33.0, -2.8, 1.5, &shoes);

    // Floor and sun
    sphere(0.0, -234.5, 0.0, 200.0, &ground);
    sphere(-1000.0, 400.0, -80.0, 80.0, &sun);

    // Dumbbell bar
    scene.push(Cylinder::new(Vec3::ZERO, 0.5, 12.0, Arc::clone(&dumbbell)));

    log::debug!("Built demo scene with {} objects", scene.len());
    scene
}
