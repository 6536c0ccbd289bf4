//! Balancer configuration.

pub mod balancer_config;
pub mod options;

pub use balancer_config::{BalancerConfig, ServerConfig, VmConfig};
pub use options::parse_config_value;
