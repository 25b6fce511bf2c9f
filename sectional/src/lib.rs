//! # sectional - Per-Section Controllers for List and Table Widgets
//!
//! `sectional` lets one list/table widget be driven by several independent
//! controllers, each owning a contiguous range of sections. A
//! [`SectionRouter`] sits between the widget and the controllers: it decides
//! which controller owns the section a query is about, renumbers the section
//! into that controller's frame and forwards the call.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sectional::prelude::*;
//! use std::rc::Rc;
//!
//! let summary = Rc::new(SummaryController::new());
//! let tasks = Rc::new(TaskListController::new());
//!
//! let mut router = SectionRouter::<MyTable>::with_section_count(4);
//! router.add_binding_for_section(&summary, 0);
//! router.add_binding(&tasks, 1, 3)?; // tasks sees sections 0..=2
//!
//! let rows = router.number_of_rows(&table, 2)?; // TaskListController, section 1
//! ```
//!
//! ## Mixed Mode
//!
//! A view controller can keep some sections for itself by registering as the
//! default controller. It then sees the widget's own section numbers, and the
//! section count becomes the bound sections plus whatever it reports.
//!
//! ## Ownership
//!
//! Controllers belong to the host. The router holds weak handles only; a
//! section whose controller has been dropped fails with
//! [`RouterError::ReleasedController`].
//!
//! ## Logging
//!
//! Enable the `tracing` feature to get registration, overlap and resolution
//! events through `tracing`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use sectional_core::{
    // Handles
    ControllerRef,
    // Capability set
    EditingStyle,
    IndexPath,
    // Bindings
    Numbering,
    // Errors
    RouterError,
    SectionBinding,
    SectionController,
    SectionRange,
    SharedController,
    TableView,
    Translation,
};

// Registry and dispatch
pub use sectional_std::{Resolved, Route, SectionRegistry, SectionRouter, SectionRouterBuilder};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use sectional_std::testing::*;
}

/// Prelude module - common imports for Sectional.
///
/// # Usage
///
/// ```rust,ignore
/// use sectional::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        EditingStyle,
        IndexPath,
        Numbering,
        // Errors
        RouterError,
        SectionController,
        // Dispatch
        SectionRouter,
        SectionRouterBuilder,
        TableView,
    };
}
