//! Lumen renderer - CPU ray tracing
//!
//! A stochastic ray tracer for spheres, ellipsoids and z-aligned cylinders
//! with diffuse, metal and glass materials, a thin-lens camera, and 8-bit
//! gamma-corrected output.

mod camera;
mod cylinder;
mod ellipsoid;
mod error;
mod hittable;
mod material;
mod renderer;
mod scene;
mod sphere;

#[cfg(test)]
mod test_support;

pub use camera::Camera;
pub use cylinder::Cylinder;
pub use ellipsoid::Ellipsoid;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    finalize_color, linear_to_gamma, ray_color, render, sample_pixel, ImageBuffer, RenderConfig,
    T_MIN,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Point3, Ray, Vec3};
