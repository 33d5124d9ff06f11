//! Scene aggregate: the flat list of everything a ray can hit.

use crate::{HitRecord, Hittable, Ray};
use lumen_math::Interval;

/// An unordered collection of hittable objects.
///
/// Queries scan every object; there is no acceleration structure.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Add an object by value.
    pub fn push(&mut self, object: impl Hittable + 'static) {
        self.add(Box::new(object));
    }

    /// Clear all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut search = ray_t;

        // Each hit shrinks the range so later objects must be closer to win
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, search) {
                search = search.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}
