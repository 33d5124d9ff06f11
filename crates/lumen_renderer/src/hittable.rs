//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lumen_math::{Interval, Point3, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Create a record for a hit at `p`.
    ///
    /// The orientation is unset until [`HitRecord::set_face_normal`] is called.
    pub fn new(p: Point3, t: f32, material: &'a dyn Material) -> Self {
        Self {
            p,
            normal: Vec3::ZERO,
            material,
            t,
            front_face: false,
        }
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    /// `outward_normal` must be unit length.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        // Normal always points against the ray
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection of `ray` with this object whose
    /// parameter lies in `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// Pick the nearest root of `a*t^2 + 2*half_b*t + c = 0` inside `ray_t`.
///
/// The closer root is tried first, then the farther one. Returns `None` for a
/// negative discriminant, when neither root is in range, or when `a` is not
/// strictly positive (zero-length direction or a ray parallel to an axis the
/// quadric ignores).
pub(crate) fn nearest_root(a: f32, half_b: f32, c: f32, ray_t: Interval) -> Option<f32> {
    if a <= 0.0 {
        return None;
    }

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let mut root = (-half_b - sqrtd) / a;
    if !ray_t.contains(root) {
        root = (-half_b + sqrtd) / a;
        if !ray_t.contains(root) {
            return None;
        }
    }

    Some(root)
}
