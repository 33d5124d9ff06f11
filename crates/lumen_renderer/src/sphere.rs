//! Sphere primitive for ray tracing.

use crate::{
    hittable::{nearest_root, HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Point3};
use std::sync::Arc;

/// A sphere primitive.
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let t = nearest_root(a, half_b, c, ray_t)?;
        let p = ray.at(t);
        let outward_normal = (p - self.center) / self.radius;

        let mut rec = HitRecord::new(p, t, self.material.as_ref());
        rec.set_face_normal(ray, outward_normal);
        Some(rec)
    }
}
