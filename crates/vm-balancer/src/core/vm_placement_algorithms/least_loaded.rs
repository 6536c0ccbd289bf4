//! Least Loaded algorithm.

use crate::core::common::EPSILON;
use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithm::VmPlacementAlgorithm;

/// Uses the least loaded (by load percentage) suitable server.
/// Among equally loaded servers (loads within `EPSILON`) the first one is selected.
#[derive(Default)]
pub struct LeastLoaded;

impl LeastLoaded {
    pub fn new() -> Self {
        Default::default()
    }
}

impl VmPlacementAlgorithm for LeastLoaded {
    fn select_server(&self, vm: &Vm, servers: &[Server]) -> Option<usize> {
        let mut result: Option<usize> = None;
        let mut min_load = f64::INFINITY;

        for (idx, server) in servers.iter().enumerate() {
            if server.can_host(vm) && server.load_percentage() < min_load - EPSILON {
                min_load = server.load_percentage();
                result = Some(idx);
            }
        }
        result
    }
}
