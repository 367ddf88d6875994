use serde::{Deserialize, Serialize};

/// A rotation about an arbitrary axis through an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Point the rotation axis passes through.
    pub anchor: [f64; 3],
    /// Axis direction. Must be non-degenerate; kernels reject near-zero axes.
    pub axis: [f64; 3],
    /// Signed rotation angle in radians.
    pub angle_rad: f64,
}

/// A rigid transform: an optional rotation followed by a translation.
///
/// Placements are pure data. They are produced once per part by the planner
/// and consumed once by `Kernel::transform`; equality is exact so that
/// identical parameters provably yield identical placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Rotation applied first, if any.
    pub rotation: Option<Rotation>,
    /// Translation applied after the rotation.
    pub translation: [f64; 3],
}

impl Placement {
    /// The identity placement.
    pub fn identity() -> Self {
        Self::translation([0.0, 0.0, 0.0])
    }

    /// A pure translation.
    pub fn translation(translation: [f64; 3]) -> Self {
        Self {
            rotation: None,
            translation,
        }
    }

    /// A rotation about `axis` through `anchor`, then a translation.
    pub fn rotation_then_translation(
        anchor: [f64; 3],
        axis: [f64; 3],
        angle_rad: f64,
        translation: [f64; 3],
    ) -> Self {
        Self {
            rotation: Some(Rotation {
                anchor,
                axis,
                angle_rad,
            }),
            translation,
        }
    }

    /// Whether this placement moves anything at all.
    pub fn is_identity(&self) -> bool {
        self.rotation.is_none() && self.translation == [0.0, 0.0, 0.0]
    }
}
