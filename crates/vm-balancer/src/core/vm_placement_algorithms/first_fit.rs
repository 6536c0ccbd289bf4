//! First Fit algorithm.

use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithm::VmPlacementAlgorithm;

/// Uses the first suitable server.
#[derive(Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Default::default()
    }
}

impl VmPlacementAlgorithm for FirstFit {
    fn select_server(&self, vm: &Vm, servers: &[Server]) -> Option<usize> {
        servers.iter().position(|server| server.can_host(vm))
    }
}
