//! Virtual machine placement algorithms.

use crate::core::config::parse_config_value;
use crate::core::error::BalancerError;
use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithms::first_fit::FirstFit;
use crate::core::vm_placement_algorithms::least_loaded::LeastLoaded;
use crate::core::vm_placement_algorithms::most_loaded::MostLoaded;

/// Trait for implementation of VM placement algorithms.
///
/// The algorithm is defined as a function of VM and current server states, which returns the index of server
/// selected for VM placement or `None` if there is no suitable server. The returned server must be able to host
/// the VM.
pub trait VmPlacementAlgorithm {
    fn select_server(&self, vm: &Vm, servers: &[Server]) -> Option<usize>;
}

/// Resolves algorithm from its config value, e.g. `LeastLoaded`.
pub fn placement_algorithm_resolver(config_str: &str) -> Result<Box<dyn VmPlacementAlgorithm>, BalancerError> {
    let (algorithm_name, options) = parse_config_value(config_str);
    if options.map_or(false, |o| !o.trim().is_empty()) {
        return Err(BalancerError::UnknownAlgorithm(format!(
            "{} (algorithm {} has no options)",
            config_str, algorithm_name
        )));
    }
    match algorithm_name.trim() {
        "LeastLoaded" => Ok(Box::new(LeastLoaded::new())),
        "FirstFit" => Ok(Box::new(FirstFit::new())),
        "MostLoaded" => Ok(Box::new(MostLoaded::new())),
        _ => Err(BalancerError::UnknownAlgorithm(config_str.to_string())),
    }
}
