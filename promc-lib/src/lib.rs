#![doc(hidden)]

//! Core library for promc
//!
//! promc turns a declarative metrics configuration into a Rust module of strongly typed
//! Prometheus wrappers: one registered static, one recording function, and, where labels are
//! declared, one label struct per metric.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`schema`]: Document parsing and structural validation against the embedded schema
//! - [`model`]: The validated entity graph and cross-metric rules
//! - [`codegen`]: Template-based rendering of the entity graph into Rust source
//! - [`emit`]: Canonical formatting and atomic persistence of the result
//! - [`pipeline`]: The ordered stages tying the above together
//! - [`error`]: The pipeline error taxonomy

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod codegen;
#[cfg(not(any(debug_assertions, test)))]
mod codegen;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod emit;
#[cfg(not(any(debug_assertions, test)))]
mod emit;

pub mod error;

#[cfg(any(debug_assertions, test))]
pub mod model;
#[cfg(not(any(debug_assertions, test)))]
mod model;

pub mod pipeline;

#[cfg(any(debug_assertions, test))]
pub mod schema;
#[cfg(not(any(debug_assertions, test)))]
mod schema;

pub use crate::commands::{Host, run};
pub use crate::error::{GenerateError, Stage};
pub use crate::pipeline::compile;
pub use crate::schema::InputFormat;
