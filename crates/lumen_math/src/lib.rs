// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub mod sampling;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use sampling::{
    gen_f32, gen_range_f32, random_in_hemisphere, random_in_unit_disk, random_in_unit_sphere,
    random_unit_vector, random_vec, random_vec_range,
};
pub use vector::{near_zero, reflect, refract, NEAR_ZERO_EPSILON};

/// A position in world space. Same representation as [`Vec3`].
pub type Point3 = Vec3;
