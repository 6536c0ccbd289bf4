//! Error type shared by the crate.

use thiserror::Error;

use crate::core::common::PlacementVerdict;

#[derive(Debug, Error)]
pub enum BalancerError {
    #[error("invalid load {load} for server {server}: expected a percentage in [0, 100]")]
    InvalidLoad { server: String, load: f64 },

    #[error("vm {vm_id} can't be placed on server {server}: {verdict}")]
    PlacementRejected {
        server: String,
        vm_id: u32,
        verdict: PlacementVerdict,
    },

    #[error("can't resolve placement algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
