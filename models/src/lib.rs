//! Client models for the mesh cluster-management REST API.
//!
//! [`catalog`] holds the closed enumerations that constrain model fields, [`resources`] holds the
//! model objects themselves, and [`telemetry`] configures logging for binaries that use them.
pub mod catalog;
pub mod resources;
pub mod telemetry;

pub use catalog::{
    AutoScalingMetricKind, CatalogError, ContainerEventKind, HeaderMatchType, Ordering,
    SecretKind, VolumeProvider, WireEnum,
};
