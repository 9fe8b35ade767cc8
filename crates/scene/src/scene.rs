//! Ordered collection of scene objects.

use crate::SceneObject;

/// Scene objects in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object.
    pub fn push(&mut self, object: SceneObject) {
        tracing::trace!(name = object.name(), faces = object.face_count(), "scene object added");
        self.objects.push(object);
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// First object with the given name.
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<SceneObject> for Scene {
    fn from_iter<I: IntoIterator<Item = SceneObject>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec3;

    #[test]
    fn keeps_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.push(SceneObject::triangle("first", Vec3::ZERO, Vec3::X, Vec3::Y, Color::WHITE));
        scene.push(SceneObject::square("second", Vec3::ONE, 1.0, Color::WHITE).unwrap());

        let names: Vec<_> = scene.objects().iter().map(SceneObject::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(scene.len(), 2);
        assert!(scene.find("second").is_some());
        assert!(scene.find("third").is_none());
    }
}
