use std::fmt;

use crate::bbox::BoundingBox;

/// Class identifier carried by every label line. The generator produces a
/// single target class.
pub const TARGET_CLASS_ID: u32 = 0;

/// One label line: a class identifier and a normalized box.
///
/// An empty bounding box renders as the all-zero line so that unfiltered
/// label sets keep one line per object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRecord {
    /// Object class identifier.
    pub class_id: u32,
    /// Normalized horizontal box center.
    pub center_x: f64,
    /// Normalized vertical box center.
    pub center_y: f64,
    /// Normalized box width.
    pub width: f64,
    /// Normalized box height.
    pub height: f64,
}

impl LabelRecord {
    /// Build the label record for a reduced bounding box.
    pub fn from_bounding_box(bbox: &BoundingBox) -> Self {
        match bbox.as_box() {
            Some(bounds) => Self {
                class_id: TARGET_CLASS_ID,
                center_x: bounds.center_x(),
                center_y: bounds.center_y(),
                width: bounds.width(),
                height: bounds.height(),
            },
            None => Self {
                class_id: TARGET_CLASS_ID,
                center_x: 0.0,
                center_y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// Whether this record qualifies for a filtered training set.
    ///
    /// Both dimensions must be strictly inside `(0, 1)`: zero-size boxes are
    /// degenerate and full-frame boxes mean the projection failed.
    pub fn is_trainable(&self) -> bool {
        self.width > 0.0 && self.width < 1.0 && self.height > 0.0 && self.height < 1.0
    }
}

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6}",
            self.class_id, self.center_x, self.center_y, self.width, self.height
        )
    }
}
