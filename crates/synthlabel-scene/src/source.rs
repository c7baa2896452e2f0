use glam::{DMat4, DVec3};

use synthlabel_camera::CameraParams;

/// A vertex-bearing object reported by the renderer for one frame.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Transform from object-local to world coordinates.
    pub world_from_local: DMat4,
    /// Object-local vertex positions.
    pub vertices: Vec<DVec3>,
}

impl SceneObject {
    /// The object's vertices in world coordinates.
    pub fn world_vertices(&self) -> Vec<DVec3> {
        self.vertices
            .iter()
            .map(|&vertex| self.world_from_local.transform_point3(vertex))
            .collect()
    }
}

/// Per-frame view of the external renderer.
///
/// The renderer poses the scene from a frame plan, renders the image, and
/// reports back the camera settings and the geometry of the objects to
/// label. Both are snapshots for the current frame only.
pub trait RenderSource {
    /// Camera settings for the current frame.
    fn camera_params(&self) -> CameraParams;

    /// Vertex-bearing target objects in the current frame.
    fn objects(&self) -> Vec<SceneObject>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_vertices_apply_the_object_transform() {
        let object = SceneObject {
            world_from_local: DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)),
            vertices: vec![DVec3::ZERO, DVec3::new(0.5, 0.0, -0.5)],
        };

        let world = object.world_vertices();
        assert_eq!(world.len(), 2);
        assert_relative_eq!(world[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(world[1].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(world[1].z, 2.5, epsilon = 1e-12);
    }
}
