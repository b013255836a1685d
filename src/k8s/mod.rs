//! Kubernetes integration module
//!
//! This module provides the pod sources the service reads from:
//! - A live cluster client built on `kube`
//! - An in-memory source pre-loaded with synthetic pods
//!
//! and the inventory that turns their pods into views and counts.

mod client;
mod inventory;
mod memory;
mod source;

pub use client::K8sClient;
pub use inventory::PodInventory;
pub use memory::InMemoryPodSource;
pub use source::PodSource;
