//! Finite open cylinder aligned with the z axis.

use crate::{
    hittable::{nearest_root, HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Point3, Vec3};
use std::sync::Arc;

/// A z-aligned tube of `radius` spanning `center.z ± half_length`.
///
/// Only the curved side is a surface; the ends are open.
pub struct Cylinder {
    center: Point3,
    radius: f32,
    half_length: f32,
    material: Arc<dyn Material>,
}

impl Cylinder {
    /// Create a new cylinder. Negative sizes are clamped to zero.
    pub fn new(center: Point3, radius: f32, half_length: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            half_length: half_length.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn half_length(&self) -> f32 {
        self.half_length
    }

    /// The z range covered by the side wall, bounds excluded.
    pub fn extent(&self) -> Interval {
        Interval::new(
            self.center.z - self.half_length,
            self.center.z + self.half_length,
        )
    }
}

impl Hittable for Cylinder {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if self.radius <= 0.0 {
            return None;
        }

        // Infinite cylinder: only the x/y components take part
        let oc = ray.origin() - self.center;
        let direction = ray.direction();

        let a = direction.x * direction.x + direction.y * direction.y;
        let half_b = oc.x * direction.x + oc.y * direction.y;
        let c = oc.x * oc.x + oc.y * oc.y - self.radius * self.radius;

        let t = nearest_root(a, half_b, c, ray_t)?;
        let p = ray.at(t);

        // Truncate to the finite segment
        if !self.extent().surrounds(p.z) {
            return None;
        }

        let radial = p - self.center;
        let magnitude = (radial.x * radial.x + radial.y * radial.y).sqrt();
        let outward_normal = Vec3::new(radial.x / magnitude, radial.y / magnitude, 0.0);

        let mut rec = HitRecord::new(p, t, self.material.as_ref());
        rec.set_face_normal(ray, outward_normal);
        Some(rec)
    }
}
