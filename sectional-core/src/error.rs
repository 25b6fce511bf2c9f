//! Error types for Sectional.
//!
//! All registration and dispatch failures are reported through a single
//! [`RouterError`] built with `thiserror`. None of them are transient: each one
//! points at a setup bug (a malformed range, a section nobody owns, or a
//! controller the host dropped too early).

use thiserror::Error;

/// Errors raised while configuring a router or dispatching a widget query.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterError {
    /// A binding was registered with `start > stop`.
    #[error("invalid section range: start {start} is greater than stop {stop}")]
    InvalidRange {
        /// First section of the rejected range.
        start: usize,
        /// Last section of the rejected range.
        stop: usize,
    },

    /// No binding covers the section and there is no default controller.
    #[error("no controller owns section {section} and no default controller is set")]
    UnresolvedSection {
        /// The widget-level section that failed to resolve.
        section: usize,
    },

    /// The controller owning the section has been dropped by its host.
    #[error("the controller owning section {section} has been released")]
    ReleasedController {
        /// The widget-level section whose controller is gone.
        section: usize,
    },

    /// The default controller has been dropped by its host.
    #[error("the default controller has been released")]
    DefaultReleased,

    /// A row move whose ends belong to two different controllers.
    #[error("cannot move a row from section {from} to section {to}: they belong to different controllers")]
    CrossBindingMove {
        /// Section the row is moved out of.
        from: usize,
        /// Section the row is moved into.
        to: usize,
    },
}

impl RouterError {
    /// Returns the widget-level section the error is about, if it names one.
    pub fn section(&self) -> Option<usize> {
        match self {
            RouterError::UnresolvedSection { section }
            | RouterError::ReleasedController { section } => Some(*section),
            RouterError::CrossBindingMove { from, .. } => Some(*from),
            RouterError::InvalidRange { .. } | RouterError::DefaultReleased => None,
        }
    }
}
