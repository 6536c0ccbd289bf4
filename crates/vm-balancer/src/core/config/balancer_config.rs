//! Balancing run configuration.

use serde::{Deserialize, Serialize};

use crate::core::error::BalancerError;
use crate::core::server::Server;
use crate::core::vm::Vm;
use crate::core::vm_placement_algorithm::{placement_algorithm_resolver, VmPlacementAlgorithm};

/// Holds raw config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawBalancerConfig {
    pub algorithm: Option<String>,
    pub servers: Option<Vec<ServerConfig>>,
    pub vms: Option<Vec<VmConfig>>,
}

/// Holds configuration of a single server or a set of identical servers.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server name.
    /// Should be set if count = 1.
    pub name: Option<String>,
    /// Server name prefix.
    /// Full name is produced by appending server instance number (starting from 1) to the prefix.
    /// Should be set if count > 1.
    pub name_prefix: Option<String>,
    /// Server capacity in slots.
    pub capacity: u32,
    /// Initial load in percents.
    pub load: Option<f64>,
    /// Number of such servers.
    pub count: Option<u32>,
}

/// Holds configuration of a single VM or a series of identical VMs.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct VmConfig {
    /// VM size in slots.
    pub size: u32,
    /// Number of such VMs.
    pub count: Option<u32>,
}

/// Represents balancing run configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BalancerConfig {
    /// VM placement algorithm, `LeastLoaded` by default.
    pub algorithm: String,
    /// Configurations of servers, in balancing order.
    pub servers: Vec<ServerConfig>,
    /// Configurations of VMs, in balancing order.
    pub vms: Vec<VmConfig>,
}

impl BalancerConfig {
    /// Creates config by reading parameter values from YAML file
    /// (uses default values if some parameters are absent).
    pub fn from_file(file_name: &str) -> Result<Self, BalancerError> {
        Self::from_str(&std::fs::read_to_string(file_name)?)
    }

    /// Creates config from YAML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, BalancerError> {
        let raw: RawBalancerConfig = serde_yaml::from_str(yaml)?;
        Ok(Self {
            algorithm: raw.algorithm.unwrap_or_else(|| "LeastLoaded".to_string()),
            servers: raw.servers.unwrap_or_default(),
            vms: raw.vms.unwrap_or_default(),
        })
    }

    /// Builds servers described by config, expanding server groups.
    pub fn build_servers(&self) -> Result<Vec<Server>, BalancerError> {
        let mut servers = Vec::new();
        for config in &self.servers {
            let count = config.count.unwrap_or(1);
            let load = config.load.unwrap_or(0.);
            if count == 0 {
                continue;
            }
            if count == 1 {
                let name = config.name.as_ref().or(config.name_prefix.as_ref()).ok_or_else(|| {
                    BalancerError::InvalidConfig(format!("server with capacity {} has no name", config.capacity))
                })?;
                servers.push(Server::with_load(name, config.capacity, load)?);
            } else {
                let prefix = config.name_prefix.as_ref().ok_or_else(|| {
                    BalancerError::InvalidConfig(format!(
                        "group of {} servers with capacity {} has no name prefix",
                        count, config.capacity
                    ))
                })?;
                for i in 1..=count {
                    servers.push(Server::with_load(&format!("{}{}", prefix, i), config.capacity, load)?);
                }
            }
        }
        Ok(servers)
    }

    /// Builds VMs described by config. VM IDs are assigned sequentially starting from 0.
    ///
    /// Returns an error if the total number of VMs doesn't fit into the ID range.
    pub fn build_vms(&self) -> Result<Vec<Vm>, BalancerError> {
        let total: u64 = self.vms.iter().map(|config| config.count.unwrap_or(1) as u64).sum();
        if total > u32::MAX as u64 {
            return Err(BalancerError::InvalidConfig(format!(
                "{} vms exceed the limit of {} vms",
                total,
                u32::MAX
            )));
        }
        self.vms
            .iter()
            .flat_map(|config| std::iter::repeat(config.size).take(config.count.unwrap_or(1) as usize))
            .enumerate()
            .map(|(id, size)| {
                let id = u32::try_from(id)
                    .map_err(|_| BalancerError::InvalidConfig(format!("vm id {} is too large", id)))?;
                Ok(Vm::new(id, size))
            })
            .collect()
    }

    /// Resolves configured placement algorithm.
    pub fn placement_algorithm(&self) -> Result<Box<dyn VmPlacementAlgorithm>, BalancerError> {
        placement_algorithm_resolver(&self.algorithm)
    }
}
