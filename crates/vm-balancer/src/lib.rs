#![doc = include_str!("../readme.md")]

pub mod core;

pub use crate::core::balancer::{balance, Balancer};
pub use crate::core::error::BalancerError;
pub use crate::core::server::Server;
pub use crate::core::vm::Vm;
