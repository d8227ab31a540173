//! Shared test fixtures for capacity planner crates.
//!
//! This crate provides data builders and canonical problem instances.
//! It does NOT depend on `capacity-scoring` so the scoring crate can use it
//! as a dev-dependency.
//!
//! - [`reference`] - the three zones and three node types of the sample data
//! - [`builder`] - `NodeBuilder` and `ProcessBuilder`
//! - [`instances`] - small solutions used across the test suites
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! capacity-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use capacity_test::{single_node_instance, ProcessBuilder};
//!
//! let solution = single_node_instance(vec![
//!     ProcessBuilder::new(1).cpu(1).on(1).build(),
//! ]);
//! assert_eq!(solution.assigned_count(), 1);
//! ```

pub mod builder;
pub mod instances;
pub mod reference;

pub use builder::{NodeBuilder, ProcessBuilder};
pub use instances::{cost_instance, single_node_instance, two_zone_instance};
pub use reference::{node_types, zones, COMPUTE, EDGE, STORAGE, ZONE_1, ZONE_2, ZONE_3};
