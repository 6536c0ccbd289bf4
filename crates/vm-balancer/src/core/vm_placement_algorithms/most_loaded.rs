//! Most Loaded algorithm.

use crate::core::common::EPSILON;
use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithm::VmPlacementAlgorithm;

/// Uses the most loaded (by load percentage) suitable server, packing VMs onto as few servers as possible.
/// Among equally loaded servers (loads within `EPSILON`) the first one is selected.
#[derive(Default)]
pub struct MostLoaded;

impl MostLoaded {
    pub fn new() -> Self {
        Default::default()
    }
}

impl VmPlacementAlgorithm for MostLoaded {
    fn select_server(&self, vm: &Vm, servers: &[Server]) -> Option<usize> {
        let mut result: Option<usize> = None;
        let mut max_load = f64::NEG_INFINITY;

        for (idx, server) in servers.iter().enumerate() {
            if server.can_host(vm) && server.load_percentage() > max_load + EPSILON {
                max_load = server.load_percentage();
                result = Some(idx);
            }
        }
        result
    }
}
