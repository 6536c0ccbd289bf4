//! Record of placement decisions made during a balancing run.

use std::fs::File;

use serde::Serialize;

use crate::core::error::BalancerError;

/// Outcome of balancing a single VM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    Placed,
    /// No server had enough free capacity.
    Unplaced,
    /// VM with the same ID is already hosted by some server.
    Duplicate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub vm_id: u32,
    pub vm_size: u32,
    pub outcome: PlacementOutcome,
    /// Index of selected server in the input slice.
    pub server: Option<usize>,
    pub server_name: Option<String>,
    /// Load percentage of selected server right after the placement.
    pub load_after: Option<f64>,
}

/// Holds one entry per input VM, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalanceReport {
    placements: Vec<Placement>,
}

impl BalanceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placed_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.outcome == PlacementOutcome::Placed)
            .count()
    }

    /// Returns IDs of VMs left without a server.
    pub fn unplaced(&self) -> Vec<u32> {
        self.placements
            .iter()
            .filter(|p| p.outcome == PlacementOutcome::Unplaced)
            .map(|p| p.vm_id)
            .collect()
    }

    /// Returns the index of server hosting the specified VM.
    pub fn location(&self, vm_id: u32) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.vm_id == vm_id && p.outcome == PlacementOutcome::Placed)
            .and_then(|p| p.server)
    }

    /// Writes the report to CSV file.
    pub fn save_csv(&self, path: &str) -> Result<(), BalancerError> {
        let file = File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for placement in &self.placements {
            wtr.serialize(placement)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
