//! # Domain
//!
//! Event selection by particle multiplicity.
//!
//! - [`config`]: the named-option surface (`particleIDs`, `multipleOf`, ...)
//!   and its self-description
//! - [`model`]: the normalized target set and the [`MultiplicityFilter`]
//!   predicate itself
//!
//! Nothing in this crate performs I/O. Particle records arrive as slices that
//! the caller has already fetched.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;

pub use config::{FilterDescriptor, FilterSettings, OptionDescription};
pub use model::{FilterConfig, MultiplicityFilter, TargetIds};
