use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Comparison tolerance for slot arithmetic.
pub const EPSILON: f64 = 1e-9;

/// Result of checking whether a VM can be placed on a server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlacementVerdict {
    Success,
    ZeroCapacity,
    NotEnoughCapacity,
    AlreadyHosted,
}

impl Display for PlacementVerdict {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PlacementVerdict::Success => write!(f, "success"),
            PlacementVerdict::ZeroCapacity => write!(f, "zero_capacity"),
            PlacementVerdict::NotEnoughCapacity => write!(f, "not_enough_capacity"),
            PlacementVerdict::AlreadyHosted => write!(f, "already_hosted"),
        }
    }
}
