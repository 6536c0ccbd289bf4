//! Balancing of VM batches over a pool of servers.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::core::report::{BalanceReport, Placement, PlacementOutcome};
use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithm::VmPlacementAlgorithm;
use crate::core::vm_placement_algorithms::least_loaded::LeastLoaded;

const LOG_TARGET: &str = "balancer";

/// Places VMs on servers one by one using the configured placement algorithm.
///
/// VMs are processed in input order. Each decision is applied to the server state immediately, so the next VM
/// sees the updated loads. A VM which doesn't fit anywhere is left unplaced and doesn't change any server.
/// A VM already hosted by one of the servers, e.g. from a previous run, is not placed again.
/// The run is a single pass without retries.
pub struct Balancer {
    algorithm: Box<dyn VmPlacementAlgorithm>,
}

impl Default for Balancer {
    fn default() -> Self {
        Self::new(Box::new(LeastLoaded::new()))
    }
}

impl Balancer {
    pub fn new(algorithm: Box<dyn VmPlacementAlgorithm>) -> Self {
        Self { algorithm }
    }

    /// Distributes `vms` over `servers`, mutating the servers in place.
    pub fn balance(&self, servers: &mut [Server], vms: &[Vm]) -> BalanceReport {
        let mut report = BalanceReport::new();
        let mut placed: HashSet<u32> = servers.iter().flat_map(|server| server.hosted_vms()).collect();

        for vm in vms {
            if placed.contains(&vm.id()) {
                warn!(target: LOG_TARGET, "vm {} is already hosted, skipping", vm.id());
                report.push(Self::entry(vm, PlacementOutcome::Duplicate, None, servers));
                continue;
            }

            let selected = self
                .algorithm
                .select_server(vm, servers)
                .and_then(|idx| Self::apply(vm, idx, servers));

            match selected {
                Some(idx) => {
                    debug!(
                        target: LOG_TARGET,
                        "placed vm {} on server {}, load is now {:.2}%",
                        vm.id(),
                        servers[idx].name(),
                        servers[idx].load_percentage()
                    );
                    placed.insert(vm.id());
                    report.push(Self::entry(vm, PlacementOutcome::Placed, Some(idx), servers));
                }
                None => {
                    debug!(target: LOG_TARGET, "no server can host vm {} of size {}", vm.id(), vm.size());
                    report.push(Self::entry(vm, PlacementOutcome::Unplaced, None, servers));
                }
            }
        }

        info!(
            target: LOG_TARGET,
            "placed {} of {} vms on {} servers",
            report.placed_count(),
            vms.len(),
            servers.len()
        );
        report
    }

    /// Commits the algorithm decision, guarding against algorithms that return an unsuitable server.
    fn apply(vm: &Vm, idx: usize, servers: &mut [Server]) -> Option<usize> {
        let Some(server) = servers.get_mut(idx) else {
            warn!(target: LOG_TARGET, "placement algorithm returned unknown server {}", idx);
            return None;
        };
        match server.host(vm) {
            Ok(()) => Some(idx),
            Err(e) => {
                warn!(target: LOG_TARGET, "{}", e);
                None
            }
        }
    }

    fn entry(vm: &Vm, outcome: PlacementOutcome, server: Option<usize>, servers: &[Server]) -> Placement {
        Placement {
            vm_id: vm.id(),
            vm_size: vm.size(),
            outcome,
            server,
            server_name: server.map(|idx| servers[idx].name().to_string()),
            load_after: server.map(|idx| servers[idx].load_percentage()),
        }
    }
}

/// Distributes `vms` over `servers` placing each VM on the least loaded server that can host it.
pub fn balance(servers: &mut [Server], vms: &[Vm]) -> BalanceReport {
    Balancer::default().balance(servers, vms)
}
