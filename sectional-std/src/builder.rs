//! Builder for constructing a router in one expression.

use crate::router::SectionRouter;
use sectional_core::{ControllerRef, Numbering, RouterError, TableView};

struct PendingBinding<T: TableView + ?Sized> {
    controller: ControllerRef<T>,
    start: usize,
    stop: usize,
    numbering: Numbering,
}

/// Builder for a [`SectionRouter`].
///
/// Registrations are replayed in order by [`build`](Self::build), which stops
/// at the first malformed range.
///
/// # Example
///
/// ```rust,ignore
/// let router = SectionRouterBuilder::new()
///     .default_controller(&view_controller)
///     .bind(&header_controller, 0, 0)
///     .bind(&tasks_controller, 1, 3)
///     .build()?;
/// ```
pub struct SectionRouterBuilder<T: TableView + ?Sized> {
    section_count: usize,
    default_controller: Option<ControllerRef<T>>,
    bindings: Vec<PendingBinding<T>>,
}

impl<T: TableView + ?Sized> Default for SectionRouterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableView + ?Sized> SectionRouterBuilder<T> {
    /// Create a builder for a single-section router.
    pub fn new() -> Self {
        Self {
            section_count: 1,
            default_controller: None,
            bindings: Vec::new(),
        }
    }

    /// Explicit section count, used when no default controller is set.
    pub fn section_count(mut self, section_count: usize) -> Self {
        self.section_count = section_count;
        self
    }

    /// Controller serving every unbound section.
    pub fn default_controller(mut self, controller: impl Into<ControllerRef<T>>) -> Self {
        self.default_controller = Some(controller.into());
        self
    }

    /// Bind a controller to `start..=stop`.
    pub fn bind(self, controller: impl Into<ControllerRef<T>>, start: usize, stop: usize) -> Self {
        self.bind_with(controller, start, stop, Numbering::Local)
    }

    /// Bind a controller to a single section.
    pub fn bind_section(self, controller: impl Into<ControllerRef<T>>, section: usize) -> Self {
        self.bind(controller, section, section)
    }

    /// Bind a controller to `start..=stop` with an explicit numbering.
    pub fn bind_with(
        mut self,
        controller: impl Into<ControllerRef<T>>,
        start: usize,
        stop: usize,
        numbering: Numbering,
    ) -> Self {
        self.bindings.push(PendingBinding {
            controller: controller.into(),
            start,
            stop,
            numbering,
        });
        self
    }

    /// Build the router.
    pub fn build(self) -> Result<SectionRouter<T>, RouterError> {
        let mut router = SectionRouter::with_section_count(self.section_count);
        if let Some(controller) = self.default_controller {
            router.set_default_controller(controller);
        }
        for binding in self.bindings {
            router.add_binding_with(
                binding.controller,
                binding.start,
                binding.stop,
                binding.numbering,
            )?;
        }
        Ok(router)
    }
}
