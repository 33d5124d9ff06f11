//! Axis-aligned ellipsoid primitive.

use crate::{
    hittable::{nearest_root, HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Point3, Vec3};
use std::sync::Arc;

/// An ellipsoid `(x/a)^2 + (y/b)^2 + (z/c)^2 = 1` centered at `center`.
pub struct Ellipsoid {
    center: Point3,
    semi_axes: Vec3,
    material: Arc<dyn Material>,
}

impl Ellipsoid {
    /// Create a new ellipsoid from its semi-axis lengths along x, y and z.
    ///
    /// Negative lengths are clamped to zero; an ellipsoid with any zero axis
    /// is never hit.
    pub fn new(center: Point3, a: f32, b: f32, c: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            semi_axes: Vec3::new(a, b, c).max(Vec3::ZERO),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn semi_axes(&self) -> Vec3 {
        self.semi_axes
    }

    /// Unit outward normal at a point on the surface.
    fn outward_normal(&self, p: Point3) -> Vec3 {
        let axes_sq = self.semi_axes * self.semi_axes;
        // Gradient of the implicit surface, up to a factor of 2
        ((p - self.center) / axes_sq).normalize()
    }
}

impl Hittable for Ellipsoid {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if self.semi_axes.min_element() <= 0.0 {
            return None;
        }

        // Multiply the implicit equation through by a^2 b^2 c^2 so the
        // coefficients stay division free.
        let axes_sq = self.semi_axes * self.semi_axes;
        let (a2, b2, c2) = (axes_sq.x, axes_sq.y, axes_sq.z);
        let weights = Vec3::new(b2 * c2, a2 * c2, a2 * b2);

        let oc = ray.origin() - self.center;
        let direction = ray.direction();

        let a = (weights * direction).dot(direction);
        let half_b = (weights * oc).dot(direction);
        let c = (weights * oc).dot(oc) - a2 * b2 * c2;

        let t = nearest_root(a, half_b, c, ray_t)?;
        let p = ray.at(t);

        let mut rec = HitRecord::new(p, t, self.material.as_ref());
        rec.set_face_normal(ray, self.outward_normal(p));
        Some(rec)
    }
}
