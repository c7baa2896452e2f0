use glam::DVec3;

use synthlabel_camera::{project_point, Camera, ProjectedPoint};

/// Axis-aligned box extremes in normalized image coordinates.
///
/// Center and size are derived from the extremes, so the two representations
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2d {
    /// Smallest horizontal coordinate.
    pub min_x: f64,
    /// Smallest vertical coordinate.
    pub min_y: f64,
    /// Largest horizontal coordinate.
    pub max_x: f64,
    /// Largest vertical coordinate.
    pub max_y: f64,
}

impl Box2d {
    /// Build a box from its extreme coordinates.
    pub fn from_extremes(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal center, the midpoint of the extremes.
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Vertical center, the midpoint of the extremes.
    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Horizontal span of the extremes.
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).abs()
    }

    /// Vertical span of the extremes.
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).abs()
    }
}

/// Result of reducing an object's projected vertices.
///
/// `Empty` stands for every unusable outcome: no vertices, a vertex behind
/// the camera plane, a fully off-screen object, or a box that degenerates to
/// a line after viewport clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingBox {
    /// No usable box for this object in this frame.
    Empty,
    /// A non-degenerate clipped box.
    Valid(Box2d),
}

impl BoundingBox {
    /// Reduce projected vertices to a clipped bounding box.
    ///
    /// Extremes are clamped to `[0, 1]`, so an object partly outside the
    /// frame yields a box truncated to the visible region. Any vertex behind
    /// the camera plane makes the whole object unusable. A box that hugs a
    /// frame edge closer than a quarter of its own clipped size is rejected
    /// as a poor training example; the threshold intentionally uses the
    /// clipped size, not the pre-clip extent.
    pub fn from_projected(points: &[ProjectedPoint]) -> Self {
        if points.is_empty() {
            return Self::Empty;
        }

        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;

        for point in points {
            match *point {
                ProjectedPoint::BehindCamera => return Self::Empty,
                ProjectedPoint::Visible { u, v } => {
                    min_u = min_u.min(u);
                    max_u = max_u.max(u);
                    min_v = min_v.min(v);
                    max_v = max_v.max(v);
                }
            }
        }

        let bounds = Box2d::from_extremes(
            min_u.clamp(0.0, 1.0),
            min_v.clamp(0.0, 1.0),
            max_u.clamp(0.0, 1.0),
            max_v.clamp(0.0, 1.0),
        );

        if hugs_frame_edge(&bounds) {
            return Self::Empty;
        }
        if bounds.width() == 0.0 || bounds.height() == 0.0 {
            return Self::Empty;
        }

        Self::Valid(bounds)
    }

    /// Project an object's world-space vertices and reduce them.
    pub fn of_object(camera: &Camera, world_vertices: &[DVec3]) -> Self {
        let projected: Vec<ProjectedPoint> = world_vertices
            .iter()
            .map(|&vertex| project_point(camera, vertex))
            .collect();
        Self::from_projected(&projected)
    }

    /// The box extremes, unless the box is empty.
    pub fn as_box(&self) -> Option<&Box2d> {
        match self {
            Self::Valid(bounds) => Some(bounds),
            Self::Empty => None,
        }
    }

    /// Returns `true` when no usable box was produced.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The visible portion covers less than a quarter of the box's own size near
/// a frame edge.
fn hugs_frame_edge(bounds: &Box2d) -> bool {
    let quarter_width = bounds.width() / 4.0;
    let quarter_height = bounds.height() / 4.0;

    bounds.max_x < quarter_width
        || bounds.min_x > 1.0 - quarter_width
        || bounds.max_y < quarter_height
        || bounds.min_y > 1.0 - quarter_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn visible(points: &[(f64, f64)]) -> Vec<ProjectedPoint> {
        points
            .iter()
            .map(|&(u, v)| ProjectedPoint::Visible { u, v })
            .collect()
    }

    #[test]
    fn reduces_four_corners_to_expected_box() {
        let points = visible(&[(0.2, 0.3), (0.8, 0.3), (0.2, 0.7), (0.8, 0.7)]);
        let bbox = BoundingBox::from_projected(&points);

        let bounds = bbox.as_box().expect("valid box");
        assert_relative_eq!(bounds.center_x(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(bounds.center_y(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(bounds.width(), 0.6, epsilon = 1e-12);
        assert_relative_eq!(bounds.height(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn clips_partially_visible_object_to_viewport() {
        let points = visible(&[(-0.5, 0.2), (0.5, 0.8)]);
        let bounds = *BoundingBox::from_projected(&points)
            .as_box()
            .expect("valid box");

        assert_relative_eq!(bounds.min_x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(bounds.width(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn fully_off_screen_object_is_empty() {
        let points = visible(&[(-0.1, 0.4), (-0.1, 0.6), (-0.3, 0.5)]);
        assert!(BoundingBox::from_projected(&points).is_empty());
    }

    #[test]
    fn vertex_behind_camera_empties_the_box() {
        let mut points = visible(&[(0.2, 0.3), (0.8, 0.7)]);
        points.push(ProjectedPoint::BehindCamera);
        assert!(BoundingBox::from_projected(&points).is_empty());
    }

    #[test]
    fn no_vertices_is_empty() {
        assert!(BoundingBox::from_projected(&[]).is_empty());
    }

    #[test]
    fn degenerate_vertical_line_is_empty() {
        let points = visible(&[(0.5, 0.2), (0.5, 0.8)]);
        assert!(BoundingBox::from_projected(&points).is_empty());
    }

    #[test]
    fn edge_sliver_survives_after_clipping() {
        // Clipping runs before the edge heuristic, so a thin box pinned to
        // the frame edge still passes the quarter-size check.
        let points = visible(&[(0.0, 0.4), (0.001, 0.6)]);
        assert!(!BoundingBox::from_projected(&points).is_empty());
    }

    #[test]
    fn extremes_and_center_size_round_trip() {
        let bounds = Box2d::from_extremes(0.125, 0.25, 0.875, 0.75);

        let min_x = bounds.center_x() - bounds.width() / 2.0;
        let max_x = bounds.center_x() + bounds.width() / 2.0;
        let min_y = bounds.center_y() - bounds.height() / 2.0;
        let max_y = bounds.center_y() + bounds.height() / 2.0;

        assert_relative_eq!(min_x, bounds.min_x, epsilon = 1e-12);
        assert_relative_eq!(max_x, bounds.max_x, epsilon = 1e-12);
        assert_relative_eq!(min_y, bounds.min_y, epsilon = 1e-12);
        assert_relative_eq!(max_y, bounds.max_y, epsilon = 1e-12);
    }

    #[test]
    fn clamp_is_idempotent() {
        for value in [-2.5, -0.1, 0.0, 0.3, 1.0, 1.7, 42.0] {
            let once = f64::clamp(value, 0.0, 1.0);
            assert_eq!(once, f64::clamp(once, 0.0, 1.0));
        }
    }
}
