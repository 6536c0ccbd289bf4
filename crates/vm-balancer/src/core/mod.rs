pub mod balancer;
pub mod common;
pub mod config;
pub mod error;
pub mod report;
pub mod server;
pub mod vm;
pub mod vm_placement_algorithm;
pub mod vm_placement_algorithms;
