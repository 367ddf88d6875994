use serde::{Deserialize, Serialize};

/// The ten scalars that define a portal frame.
///
/// All lengths share one model unit (millimetres in the reference set).
/// The record itself is plain data: dimension validation happens in the
/// kernel factories so that a bad value fails at the step that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParameters {
    /// Height of both columns.
    pub column_height: f64,
    /// Overall width and depth of the column I-section profile.
    pub column_thickness: f64,
    /// Length of each rafter along its long axis.
    pub rafter_length: f64,
    /// Overall width and depth of the rafter I-section profile.
    pub rafter_thickness: f64,
    /// Length of each purlin along X.
    pub purlin_length: f64,
    /// Width of each purlin along Y.
    pub purlin_width: f64,
    /// Height of each purlin along Z.
    pub purlin_height: f64,
    /// Flange thickness shared by both I-section profiles.
    pub flange_thickness: f64,
    /// Web thickness shared by both I-section profiles.
    pub web_thickness: f64,
    /// Rafter inclination from horizontal, in degrees.
    pub rafter_angle_deg: f64,
}

impl FrameParameters {
    /// Rafter inclination in radians.
    pub fn rafter_angle_rad(&self) -> f64 {
        self.rafter_angle_deg.to_radians()
    }
}

impl Default for FrameParameters {
    /// The reference frame: a 4 m column, 5 m rafters at 60 degrees.
    fn default() -> Self {
        Self {
            column_height: 4000.0,
            column_thickness: 100.0,
            rafter_length: 5000.0,
            rafter_thickness: 100.0,
            purlin_length: 1000.0,
            purlin_width: 40.0,
            purlin_height: 20.0,
            flange_thickness: 10.0,
            web_thickness: 5.0,
            rafter_angle_deg: 60.0,
        }
    }
}

/// How purlins are arrayed along the frame's Y axis.
///
/// Historically these were literals buried in the assembly routine. They are
/// deliberately independent of the frame dimensions: nothing here scales with
/// rafter length or column height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurlinLayout {
    /// Number of purlins in the array.
    pub count: u32,
    /// Centre-to-centre spacing along Y.
    pub spacing: f64,
}

impl Default for PurlinLayout {
    /// Five purlins at 150-unit spacing, straddling y = 0.
    fn default() -> Self {
        Self {
            count: 5,
            spacing: 150.0,
        }
    }
}
