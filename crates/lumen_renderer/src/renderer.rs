//! Core ray tracing renderer.
//!
//! Implements stochastic ray tracing with:
//! - Multiplicative attenuation over a bounded number of bounces
//! - Vertical sky gradient for rays that escape the scene
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization

use crate::{error::RenderError, material::ScatterResult, Camera, Color, Hittable, Ray};
use lumen_math::{gen_f32, Interval};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;
use std::time::Instant;

/// Smallest ray parameter accepted for a hit; avoids shadow acne.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Sky color for rays pointing straight down
    pub sky_bottom: Color,
    /// Sky color for rays pointing straight up
    pub sky_top: Color,
    /// Seed for the random generator; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 200,
            samples_per_pixel: 100,
            max_depth: 50,
            sky_bottom: Color::new(0.2, 0.2, 1.0),
            sky_top: Color::new(0.5, 0.7, 1.0),
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set the sky gradient colors.
    pub fn with_sky(mut self, bottom: Color, top: Color) -> Self {
        self.sky_bottom = bottom;
        self.sky_top = top;
        self
    }

    /// Fix the random seed for reproducible renders.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Image width divided by image height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Check that the configuration can be rendered.
    pub fn validate(&self) -> Result<(), RenderError> {
        // Sample coordinates divide by (size - 1)
        if self.image_width < 2 || self.image_height < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Create the random generator for a render.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Compute the color seen by a ray.
///
/// Follows the ray through at most `depth` bounces, multiplying the
/// attenuation of every surface it scatters from. Escaping rays pick up the
/// sky color; absorbed rays and rays that run out of bounces carry no light.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(T_MIN, f32::INFINITY)) else {
            return throughput * sky_gradient(&ray, config);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(ScatterResult {
                attenuation,
                scattered,
            }) => {
                throughput *= attenuation;
                ray = scattered;
            }
            None => return Color::ZERO,
        }
    }

    // Bounce budget exhausted
    Color::ZERO
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray, config: &RenderConfig) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    config.sky_bottom * (1.0 - a) + config.sky_top * a
}

/// Sum `samples_per_pixel` jittered samples for pixel (i, j).
///
/// `j` counts rows from the bottom of the image. The result is the raw sum;
/// pass it to [`finalize_color`] to average and quantize.
pub fn sample_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width_span = (config.image_width - 1) as f32;
    let height_span = (config.image_height - 1) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f32 + gen_f32(rng)) / width_span;
        let t = (j as f32 + gen_f32(rng)) / height_span;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    pixel_color
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Average a summed sample color and convert it to 8-bit RGB.
pub fn finalize_color(pixel_color: Color, samples_per_pixel: u32) -> [u8; 3] {
    let scale = 1.0 / samples_per_pixel as f32;
    let intensity = Interval::new(0.0, 0.999);
    let to_byte = |c: f32| (256.0 * intensity.clamp(linear_to_gamma(scale * c))) as u8;

    [
        to_byte(pixel_color.x),
        to_byte(pixel_color.y),
        to_byte(pixel_color.z),
    ]
}

/// Finished 8-bit image, stored row-major with row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), with y = 0 at the top.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), with y = 0 at the top.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.pixels[(y * self.width + x) as usize] = rgb;
    }

    /// Encode as plain-text PPM (P3), top row first.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> Result<(), RenderError> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for [r, g, b] in &self.pixels {
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; rows are traced from the top of the image down.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height;
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for j in (0..height).rev() {
        log::debug!("Scanlines remaining: {}", j);
        let row = height - 1 - j;
        for i in 0..width {
            let sum = sample_pixel(camera, world, i, j, config, rng);
            image.set(i, row, finalize_color(sum, config.samples_per_pixel));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Metal, Scene, Sphere, Vec3};
    use std::sync::Arc;

    fn single_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Sphere::new(
            Vec3::ZERO,
            1.0,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        ));
        scene
    }

    fn camera_on_z(aspect_ratio: f32) -> Camera {
        let mut camera = Camera::new()
            .with_position(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_lens(90.0, 0.0, 1.0)
            .with_aspect_ratio(aspect_ratio);
        camera.initialize().expect("valid camera");
        camera
    }

    #[test]
    fn test_sky_gradient() {
        let config = RenderConfig::default();

        let up = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0)), &config);
        let down = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::NEG_Y), &config);
        let level = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::X), &config);

        assert!((up - config.sky_top).length() < 1e-6);
        assert!((down - config.sky_bottom).length() < 1e-6);
        assert!((level - (config.sky_bottom + config.sky_top) * 0.5).length() < 1e-6);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_finalize_color() {
        assert_eq!(finalize_color(Color::splat(100.0), 100), [255, 255, 255]);
        assert_eq!(finalize_color(Color::ZERO, 100), [0, 0, 0]);
        // 25 / 100 = 0.25 -> gamma 0.5 -> 128
        assert_eq!(finalize_color(Color::new(25.0, 0.0, 400.0), 100), [128, 0, 255]);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let scene = Scene::new();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&ray, &scene, 0, &config, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_miss_returns_sky() {
        let scene = Scene::new();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        let color = ray_color(&ray, &scene, 5, &config, &mut rng);
        assert!((color - config.sky_bottom).length() < 1e-6);
    }

    #[test]
    fn test_attenuation_multiplies_per_bounce() {
        // Mirror floor below the origin: one bounce, then the sky above
        let albedo = Color::new(0.8, 0.5, 0.25);
        let mut scene = Scene::new();
        scene.push(Sphere::new(
            Vec3::new(0.0, -101.0, 0.0),
            100.0,
            Arc::new(Metal::new(albedo, 0.0)),
        ));
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        let color = ray_color(&ray, &scene, 2, &config, &mut rng);
        assert!((color - albedo * config.sky_top).length() < 1e-5);

        // Same path with one bounce of budget never reaches the sky
        let color = ray_color(&ray, &scene, 1, &config, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_center_pixel_darker_than_corner() {
        let scene = single_sphere_scene();
        let config = RenderConfig::default()
            .with_resolution(11, 11)
            .with_quality(1, 1);
        let camera = camera_on_z(config.aspect_ratio());
        let mut rng = StdRng::seed_from_u64(42);

        let center = sample_pixel(&camera, &scene, 5, 5, &config, &mut rng);
        let corner = sample_pixel(&camera, &scene, 0, 0, &config, &mut rng);

        assert!(center.x < corner.x);
        assert!(center.y < corner.y);
        assert!(center.z < corner.z);
    }

    #[test]
    fn test_sample_pixel_sums_samples() {
        // Every sample escapes to a uniform sky, so the sum is exact
        let scene = Scene::new();
        let sky = Color::new(0.25, 0.5, 1.0);
        let config = RenderConfig::default()
            .with_resolution(4, 4)
            .with_quality(8, 3)
            .with_sky(sky, sky);
        let camera = camera_on_z(1.0);
        let mut rng = StdRng::seed_from_u64(3);

        let sum = sample_pixel(&camera, &scene, 1, 2, &config, &mut rng);
        assert!((sum - sky * 8.0).length() < 1e-4);
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let scene = single_sphere_scene();
        let config = RenderConfig::default()
            .with_resolution(10, 10)
            .with_quality(4, 5);
        let camera = camera_on_z(1.0);
        let mut rng = StdRng::seed_from_u64(42);

        // Diffuse bounces still gather some sky light
        let color = sample_pixel(&camera, &scene, 5, 5, &config, &mut rng);
        assert!(color.length() > 0.0);
    }

    #[test]
    fn test_render_rows_top_to_bottom() {
        let scene = Scene::new();
        let config = RenderConfig::default()
            .with_resolution(4, 6)
            .with_quality(2, 2)
            .with_sky(Color::ZERO, Color::ONE)
            .with_seed(11);
        let camera = camera_on_z(config.aspect_ratio());
        let mut rng = config.rng();

        let image = render(&camera, &scene, &config, &mut rng).expect("render");
        assert_eq!(image.pixels.len(), 24);

        // Upward-looking top row is brighter than the bottom row
        let top = image.get(0, 0);
        let bottom = image.get(0, 5);
        assert!(top[0] > bottom[0]);
    }

    #[test]
    fn test_seeded_renders_repeat() {
        let scene = single_sphere_scene();
        let config = RenderConfig::default()
            .with_resolution(6, 4)
            .with_quality(3, 4)
            .with_seed(99);
        let camera = camera_on_z(config.aspect_ratio());

        let first = render(&camera, &scene, &config, &mut config.rng()).expect("render");
        let second = render(&camera, &scene, &config, &mut config.rng()).expect("render");
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let scene = Scene::new();
        let camera = camera_on_z(1.0);
        let mut rng = StdRng::seed_from_u64(0);

        let too_small = RenderConfig::default().with_resolution(1, 10);
        assert!(matches!(
            render(&camera, &scene, &too_small, &mut rng),
            Err(RenderError::InvalidConfig(_))
        ));

        let no_samples = RenderConfig::default().with_quality(0, 10);
        assert!(matches!(
            no_samples.validate(),
            Err(RenderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(1, 0, [255, 128, 0]);

        let mut out = Vec::new();
        image.write_ppm(&mut out).expect("write to vec");
        let text = String::from_utf8(out).expect("ascii output");

        assert_eq!(text, "P3\n2 2\n255\n0 0 0\n255 128 0\n0 0 0\n0 0 0\n");
    }
}
