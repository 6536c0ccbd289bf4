//! Representation of virtual machine.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Represents virtual machine (VM) waiting for placement.
///
/// VM is characterized by its ID and size, i.e. the number of server slots it occupies.
/// Both are fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Vm {
    id: u32,
    size: u32,
}

impl Vm {
    /// Creates VM with specified ID and size.
    pub fn new(id: u32, size: u32) -> Self {
        Self { id, size }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the number of slots required by VM.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Display for Vm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "vm_{} (size {})", self.id, self.size)
    }
}
