//! # sectional-core
//!
//! Core traits and value types for the Sectional section routing framework.
//!
//! This crate has minimal dependencies and is meant to be imported by section
//! controllers that only need to implement the capability set, without pulling
//! in the registry and dispatcher from `sectional-std`.
//!
//! # Building Blocks
//!
//! ## Capability Set ([`SectionController`])
//!
//! Every query a list/table widget issues about its sections and rows: row
//! counts, cells, headers and footers, sizing, selection and editing. Section
//! controllers implement it for the sections they own; the router exposes the
//! same surface to the widget.
//!
//! ## Handles ([`ControllerRef`])
//!
//! Controllers are owned by the host. The router keeps weak handles only and
//! never decides when a controller goes away.
//!
//! ## Bindings and Translation ([`SectionBinding`], [`Translation`])
//!
//! A binding ties an inclusive [`SectionRange`] to a controller. Its
//! [`Translation`] converts the widget's section numbers into the controller's
//! own numbering and back.
//!
//! # Error Types
//!
//! - [`RouterError`] - Registration and dispatch failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binding;
mod controller;
mod error;
mod handle;
mod index;

// Re-exports
pub use binding::{Numbering, SectionBinding, SectionRange, Translation};
pub use controller::{EditingStyle, SectionController, TableView};
pub use error::RouterError;
pub use handle::{ControllerRef, SharedController};
pub use index::IndexPath;
