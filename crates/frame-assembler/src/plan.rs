//! Placement planning: ten scalars in, nine positioned part requests out.
//!
//! Planning is pure arithmetic with no kernel involvement, so every placement
//! can be asserted exactly in tests before any geometry exists.

use frame_types::{FrameParameters, PartLabel, Placement, PurlinLayout};

/// Cross-section request for an I-section prototype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ISectionSpec {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub flange_thickness: f64,
    pub web_thickness: f64,
}

/// Dimension request for the purlin prism prototype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Which prototype shape a part is an instance of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prototype {
    Column,
    Rafter,
    Purlin,
}

/// One positioned part of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRequest {
    pub label: PartLabel,
    pub prototype: Prototype,
    pub placement: Placement,
}

/// The complete assembly plan: three prototype shapes and the ordered list
/// of parts to instantiate from them. Part order is the fuse order.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub column: ISectionSpec,
    pub rafter: ISectionSpec,
    pub purlin: PrismSpec,
    pub parts: Vec<PartRequest>,
}

impl FramePlan {
    /// The parts instantiated from one prototype, in plan order.
    pub fn parts_of(&self, prototype: Prototype) -> impl Iterator<Item = &PartRequest> {
        self.parts.iter().filter(move |p| p.prototype == prototype)
    }
}

/// Compute all placements for a frame.
///
/// Both columns share the same X/Y footprint, one sitting `column_height`
/// above the other. A real portal frame would separate the columns by the
/// frame span; the shared footprint is a known modeling simplification and
/// is kept deliberately.
pub fn plan(params: &FrameParameters, layout: &PurlinLayout) -> FramePlan {
    let h = params.column_height;
    let angle_rad = params.rafter_angle_rad();
    let half_span = params.rafter_length / 2.0;

    let mut parts = Vec::with_capacity(4 + layout.count as usize);

    parts.push(PartRequest {
        label: PartLabel::Column { index: 1 },
        prototype: Prototype::Column,
        placement: Placement::identity(),
    });
    parts.push(PartRequest {
        label: PartLabel::Column { index: 2 },
        prototype: Prototype::Column,
        placement: Placement::translation([0.0, 0.0, h]),
    });

    // The rafters are equal-magnitude, opposite-sign rotations about the X
    // axis anchored at the column top, peaking at x = 0. Endpoints are not
    // snapped to the column tops: the visual joint only closes when the
    // caller supplies a consistent length/angle/height triple.
    parts.push(PartRequest {
        label: PartLabel::RafterA,
        prototype: Prototype::Rafter,
        placement: Placement::rotation_then_translation(
            [0.0, 0.0, h],
            [1.0, 0.0, 0.0],
            -angle_rad,
            [-half_span, 0.0, h],
        ),
    });
    parts.push(PartRequest {
        label: PartLabel::RafterB,
        prototype: Prototype::Rafter,
        placement: Placement::rotation_then_translation(
            [0.0, 0.0, h],
            [1.0, 0.0, 0.0],
            angle_rad,
            [half_span, 0.0, h],
        ),
    });

    // Purlins straddle y = 0 at half column height. The offset formula uses
    // the real-valued half count, so an odd count is centered between grid
    // points rather than on one.
    for i in 0..layout.count {
        let y = i as f64 * layout.spacing - (layout.count as f64 / 2.0) * layout.spacing;
        parts.push(PartRequest {
            label: PartLabel::Purlin { index: i as u8 },
            prototype: Prototype::Purlin,
            placement: Placement::translation([0.0, y, h / 2.0]),
        });
    }

    FramePlan {
        column: ISectionSpec {
            width: params.column_thickness,
            height: params.column_thickness,
            length: params.column_height,
            flange_thickness: params.flange_thickness,
            web_thickness: params.web_thickness,
        },
        rafter: ISectionSpec {
            width: params.rafter_thickness,
            height: params.rafter_thickness,
            length: params.rafter_length,
            flange_thickness: params.flange_thickness,
            web_thickness: params.web_thickness,
        },
        purlin: PrismSpec {
            length: params.purlin_length,
            width: params.purlin_width,
            height: params.purlin_height,
        },
        parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_plan_has_nine_parts_in_fixed_order() {
        let plan = plan(&FrameParameters::default(), &PurlinLayout::default());
        assert_eq!(plan.parts.len(), 9);

        let labels: Vec<PartLabel> = plan.parts.iter().map(|p| p.label).collect();
        assert_eq!(labels[0], PartLabel::Column { index: 1 });
        assert_eq!(labels[1], PartLabel::Column { index: 2 });
        assert_eq!(labels[2], PartLabel::RafterA);
        assert_eq!(labels[3], PartLabel::RafterB);
        for i in 0..5u8 {
            assert_eq!(labels[4 + i as usize], PartLabel::Purlin { index: i });
        }
    }

    #[test]
    fn columns_share_footprint_one_column_height_apart() {
        let params = FrameParameters::default();
        let plan = plan(&params, &PurlinLayout::default());

        let c1 = plan.parts[0].placement;
        let c2 = plan.parts[1].placement;
        assert!(c1.rotation.is_none() && c2.rotation.is_none());
        assert_eq!(c1.translation[0], c2.translation[0]);
        assert_eq!(c1.translation[1], c2.translation[1]);
        assert_eq!(c2.translation[2] - c1.translation[2], params.column_height);
    }

    #[test]
    fn rafters_mirror_about_the_yz_plane() {
        let plan = plan(&FrameParameters::default(), &PurlinLayout::default());
        let a = plan.parts[2].placement;
        let b = plan.parts[3].placement;

        let rot_a = a.rotation.unwrap();
        let rot_b = b.rotation.unwrap();
        assert_eq!(rot_a.angle_rad, -rot_b.angle_rad);
        assert_eq!(rot_a.anchor, rot_b.anchor);
        assert_eq!(rot_a.axis, [1.0, 0.0, 0.0]);
        assert_eq!(a.translation[0], -b.translation[0]);
        assert_eq!(a.translation[1], b.translation[1]);
        assert_eq!(a.translation[2], b.translation[2]);
    }

    #[test]
    fn rafter_rotation_magnitude_is_the_angle_in_radians() {
        let plan = plan(&FrameParameters::default(), &PurlinLayout::default());
        let rot = plan.parts[3].placement.rotation.unwrap();
        assert!((rot.angle_rad - 60.0_f64.to_radians()).abs() < 1e-15);
        assert!((rot.angle_rad - 1.047).abs() < 1e-3);
    }

    #[test]
    fn default_purlin_offsets_straddle_y_zero() {
        let plan = plan(&FrameParameters::default(), &PurlinLayout::default());
        let offsets: Vec<f64> = plan
            .parts_of(Prototype::Purlin)
            .map(|p| p.placement.translation[1])
            .collect();
        assert_eq!(offsets, vec![-375.0, -225.0, -75.0, 75.0, 225.0]);
    }

    #[test]
    fn purlin_offsets_ignore_purlin_dimensions() {
        let mut params = FrameParameters::default();
        params.purlin_length = 1.0;
        params.purlin_width = 999.0;
        let offsets: Vec<f64> = plan(&params, &PurlinLayout::default())
            .parts_of(Prototype::Purlin)
            .map(|p| p.placement.translation[1])
            .collect();
        assert_eq!(offsets, vec![-375.0, -225.0, -75.0, 75.0, 225.0]);
    }

    #[test]
    fn purlins_sit_at_half_column_height() {
        let params = FrameParameters::default();
        let plan = plan(&params, &PurlinLayout::default());
        for part in plan.parts_of(Prototype::Purlin) {
            assert_eq!(part.placement.translation[0], 0.0);
            assert_eq!(part.placement.translation[2], params.column_height / 2.0);
        }
    }

    #[test]
    fn planning_is_bit_for_bit_idempotent() {
        let params = FrameParameters::default();
        let layout = PurlinLayout::default();
        assert_eq!(plan(&params, &layout), plan(&params, &layout));
    }

    #[test]
    fn custom_layout_changes_count_and_spacing() {
        let layout = PurlinLayout {
            count: 2,
            spacing: 100.0,
        };
        let plan = plan(&FrameParameters::default(), &layout);
        assert_eq!(plan.parts.len(), 6);
        let offsets: Vec<f64> = plan
            .parts_of(Prototype::Purlin)
            .map(|p| p.placement.translation[1])
            .collect();
        assert_eq!(offsets, vec![-100.0, 0.0]);
    }
}
