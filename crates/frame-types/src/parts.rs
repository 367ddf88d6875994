use serde::{Deserialize, Serialize};
use std::fmt;

/// Which frame member a kernel request belongs to.
///
/// Carried through every factory, transform, and fuse call so a failure can
/// be surfaced with the step that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PartLabel {
    /// One of the two columns, numbered 1 and 2.
    Column { index: u8 },
    /// The rafter rotated by the negative angle, on the -X side.
    RafterA,
    /// The rafter rotated by the positive angle, on the +X side.
    RafterB,
    /// One of the purlins, numbered from 0.
    Purlin { index: u8 },
}

impl fmt::Display for PartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartLabel::Column { index } => write!(f, "column {index}"),
            PartLabel::RafterA => write!(f, "rafter A"),
            PartLabel::RafterB => write!(f, "rafter B"),
            PartLabel::Purlin { index } => write!(f, "purlin {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_display_by_member() {
        assert_eq!(PartLabel::Column { index: 2 }.to_string(), "column 2");
        assert_eq!(PartLabel::RafterA.to_string(), "rafter A");
        assert_eq!(PartLabel::Purlin { index: 4 }.to_string(), "purlin 4");
    }
}
