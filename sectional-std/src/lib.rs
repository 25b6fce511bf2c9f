//! # sectional-std
//!
//! Standard implementations for the Sectional section routing framework.
//!
//! This crate provides:
//! - **Registry**: [`SectionRegistry`], the section → controller table
//! - **Dispatcher**: [`SectionRouter`], the widget-facing capability surface
//! - **Builder**: [`SectionRouterBuilder`]
//! - **Testing**: stand-in widget and recording controllers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use sectional_core;

// Modules
pub mod builder;
pub mod registry;
pub mod router;
pub mod testing;

pub use builder::SectionRouterBuilder;
pub use registry::{Resolved, Route, SectionRegistry};
pub use router::SectionRouter;
