//! Cross-section outlines and dimension checks shared by both kernels.

use crate::types::KernelError;

/// Validate I-section dimensions before any geometry is built.
///
/// Rejects non-positive dimensions, flanges thicker than half the section
/// height, and webs thicker than half the section width.
pub fn validate_i_section(
    width: f64,
    height: f64,
    length: f64,
    flange_thickness: f64,
    web_thickness: f64,
) -> Result<(), KernelError> {
    for (name, value) in [
        ("width", width),
        ("height", height),
        ("length", length),
        ("flange thickness", flange_thickness),
        ("web thickness", web_thickness),
    ] {
        if !(value > 0.0) {
            return Err(KernelError::InvalidCrossSection {
                reason: format!("I-section {name} must be positive, got {value}"),
            });
        }
    }
    if flange_thickness > height / 2.0 {
        return Err(KernelError::InvalidCrossSection {
            reason: format!(
                "flange thickness {flange_thickness} exceeds half the section height {height}"
            ),
        });
    }
    if web_thickness > width / 2.0 {
        return Err(KernelError::InvalidCrossSection {
            reason: format!(
                "web thickness {web_thickness} exceeds half the section width {width}"
            ),
        });
    }
    Ok(())
}

/// Validate rectangular-prism dimensions.
pub fn validate_rect_prism(length: f64, width: f64, height: f64) -> Result<(), KernelError> {
    for (name, value) in [("length", length), ("width", width), ("height", height)] {
        if !(value > 0.0) {
            return Err(KernelError::InvalidCrossSection {
                reason: format!("prism {name} must be positive, got {value}"),
            });
        }
    }
    Ok(())
}

/// The 12-point closed outline of an I profile, counter-clockwise, centered
/// on the origin. `width` spans X, `height` spans Y.
pub fn i_section_outline(
    width: f64,
    height: f64,
    flange_thickness: f64,
    web_thickness: f64,
) -> [(f64, f64); 12] {
    let a = width / 2.0;
    let b = height / 2.0;
    let c = web_thickness / 2.0;
    let t = flange_thickness;
    [
        (-a, -b),
        (a, -b),
        (a, -b + t),
        (c, -b + t),
        (c, b - t),
        (a, b - t),
        (a, b),
        (-a, b),
        (-a, b - t),
        (-c, b - t),
        (-c, -b + t),
        (-a, -b + t),
    ]
}
