//! Decision support for Forest Rights Act (FRA) administration.
//!
//! Three independent capabilities share one crate: ranking development schemes for a village,
//! extracting structured fields from claim form text, and summarising the claim registry.

pub mod catalog;
pub mod config;
pub mod decision_support;
pub mod error;
pub mod telemetry;
pub mod workflows;
