//! # Dispatcher (SectionRouter)
//!
//! The widget-facing side of the framework. A `SectionRouter` answers every
//! query of the [`SectionController`] capability set by resolving the section
//! the query is about, translating it into the owning controller's numbering
//! and forwarding the call.
//!
//! # Results
//!
//! Results are returned as the controller produced them. The only exception
//! is a result that is itself a position in the widget (a row to select, a
//! drop target, a section to scroll to): those are translated back into the
//! widget's numbering through the same binding they came from.
//!
//! # Errors
//!
//! Every query returns `Result<_, RouterError>`. An unresolved section means
//! the bindings and the reported section count disagree; it is surfaced, never
//! papered over with some other controller.

use crate::registry::{Resolved, SectionRegistry};
use sectional_core::{
    ControllerRef, EditingStyle, IndexPath, Numbering, RouterError, SectionController,
    SharedController, TableView,
};
use std::fmt;

/// Routes widget queries to per-section controllers.
pub struct SectionRouter<T: TableView + ?Sized> {
    registry: SectionRegistry<T>,
}

impl<T: TableView + ?Sized> Default for SectionRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableView + ?Sized> From<SectionRegistry<T>> for SectionRouter<T> {
    fn from(registry: SectionRegistry<T>) -> Self {
        Self { registry }
    }
}

impl<T: TableView + ?Sized> SectionRouter<T> {
    /// Create a router for a single section.
    pub fn new() -> Self {
        Self::with_section_count(1)
    }

    /// Create a router for `section_count` sections.
    pub fn with_section_count(section_count: usize) -> Self {
        Self {
            registry: SectionRegistry::with_section_count(section_count),
        }
    }

    // ------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------

    /// Set the controller serving every unbound section.
    ///
    /// A view controller that handles some sections itself registers here.
    pub fn set_default_controller(&mut self, controller: impl Into<ControllerRef<T>>) {
        self.registry.set_default_controller(controller);
    }

    /// Bind `controller` to sections `start..=stop`.
    pub fn add_binding(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        start: usize,
        stop: usize,
    ) -> Result<(), RouterError> {
        self.registry.add_binding(controller, start, stop)
    }

    /// Bind `controller` to one section.
    pub fn add_binding_for_section(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        section: usize,
    ) {
        self.registry.add_binding_for_section(controller, section);
    }

    /// Bind `controller` to sections `start..=stop` with an explicit numbering.
    pub fn add_binding_with(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        start: usize,
        stop: usize,
        numbering: Numbering,
    ) -> Result<(), RouterError> {
        self.registry
            .add_binding_with(controller, start, stop, numbering)
    }

    /// The controller owning `section`.
    pub fn controller_for(&self, section: usize) -> Result<SharedController<T>, RouterError> {
        self.registry.resolve(section).map(Resolved::into_controller)
    }

    /// Resolve `section` without dispatching anything.
    pub fn resolve(&self, section: usize) -> Result<Resolved<T>, RouterError> {
        self.registry.resolve(section)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &SectionRegistry<T> {
        &self.registry
    }

    /// Check that every section the widget will ask about resolves.
    pub fn validate(&self, table: &T) -> Result<(), RouterError> {
        self.registry.validate(table)
    }

    fn on_section<R>(
        &self,
        section: usize,
        f: impl FnOnce(&dyn SectionController<T>, usize) -> R,
    ) -> Result<R, RouterError> {
        let resolved = self.registry.resolve(section)?;
        Ok(f(&**resolved.controller(), resolved.local_section()))
    }

    fn on_row<R>(
        &self,
        index: IndexPath,
        f: impl FnOnce(&dyn SectionController<T>, IndexPath) -> R,
    ) -> Result<R, RouterError> {
        let resolved = self.registry.resolve(index.section)?;
        Ok(f(&**resolved.controller(), resolved.local_path(index)))
    }

    fn default_controller(&self) -> Result<Option<SharedController<T>>, RouterError> {
        self.registry
            .default_controller()
            .map(|handle| handle.upgrade().ok_or(RouterError::DefaultReleased))
            .transpose()
    }

    // ------------------------------------------------------------------
    // Data source
    // ------------------------------------------------------------------

    /// Number of sections in the widget.
    pub fn number_of_sections(&self, table: &T) -> Result<usize, RouterError> {
        self.registry.total_section_count(table)
    }

    /// Number of rows in `section`.
    pub fn number_of_rows(&self, table: &T, section: usize) -> Result<usize, RouterError> {
        self.on_section(section, |c, local| c.number_of_rows(table, local))
    }

    /// The cell displayed at `index`.
    pub fn cell_for_row(&self, table: &T, index: IndexPath) -> Result<T::Cell, RouterError> {
        self.on_row(index, |c, local| c.cell_for_row(table, local))
    }

    /// Plain-text header title of `section`.
    pub fn title_for_header(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<String>, RouterError> {
        self.on_section(section, |c, local| c.title_for_header(table, local))
    }

    /// Plain-text footer title of `section`.
    pub fn title_for_footer(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<String>, RouterError> {
        self.on_section(section, |c, local| c.title_for_footer(table, local))
    }

    /// Whether the row at `index` can enter editing mode.
    pub fn can_edit_row(&self, table: &T, index: IndexPath) -> Result<bool, RouterError> {
        self.on_row(index, |c, local| c.can_edit_row(table, local))
    }

    /// Whether the row at `index` shows a reorder control.
    pub fn can_move_row(&self, table: &T, index: IndexPath) -> Result<bool, RouterError> {
        self.on_row(index, |c, local| c.can_move_row(table, local))
    }

    /// Forward a confirmed insert or delete.
    pub fn commit_edit(
        &self,
        table: &T,
        style: EditingStyle,
        index: IndexPath,
    ) -> Result<(), RouterError> {
        self.on_row(index, |c, local| c.commit_edit(table, style, local))
    }

    /// Forward a finished row move.
    ///
    /// Both ends must belong to the same binding; a move between controllers
    /// fails with [`RouterError::CrossBindingMove`] and nothing is forwarded.
    pub fn move_row(&self, table: &T, from: IndexPath, to: IndexPath) -> Result<(), RouterError> {
        let source = self.registry.resolve(from.section)?;
        let destination = self.registry.resolve(to.section)?;
        if !source.same_route(&destination) {
            return Err(RouterError::CrossBindingMove {
                from: from.section,
                to: to.section,
            });
        }
        source
            .controller()
            .move_row(table, source.local_path(from), source.local_path(to));
        Ok(())
    }

    /// Titles for the widget's section index, asked of the default controller.
    pub fn section_index_titles(&self, table: &T) -> Result<Option<Vec<String>>, RouterError> {
        Ok(self
            .default_controller()?
            .and_then(|c| c.section_index_titles(table)))
    }

    /// Section to jump to for a section index entry.
    ///
    /// Without a default controller there is no section index, and the entry
    /// position is returned as is.
    pub fn section_for_index_title(
        &self,
        table: &T,
        title: &str,
        index: usize,
    ) -> Result<usize, RouterError> {
        Ok(match self.default_controller()? {
            Some(c) => c.section_for_index_title(table, title, index),
            None => index,
        })
    }

    // ------------------------------------------------------------------
    // Delegate
    // ------------------------------------------------------------------

    /// Row height at `index`.
    pub fn height_for_row(&self, table: &T, index: IndexPath) -> Result<Option<f64>, RouterError> {
        self.on_row(index, |c, local| c.height_for_row(table, local))
    }

    /// Estimated row height at `index`.
    pub fn estimated_height_for_row(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<Option<f64>, RouterError> {
        self.on_row(index, |c, local| c.estimated_height_for_row(table, local))
    }

    /// Header height of `section`.
    pub fn height_for_header(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<f64>, RouterError> {
        self.on_section(section, |c, local| c.height_for_header(table, local))
    }

    /// Footer height of `section`.
    pub fn height_for_footer(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<f64>, RouterError> {
        self.on_section(section, |c, local| c.height_for_footer(table, local))
    }

    /// Custom header view of `section`.
    pub fn view_for_header(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<T::View>, RouterError> {
        self.on_section(section, |c, local| c.view_for_header(table, local))
    }

    /// Custom footer view of `section`.
    pub fn view_for_footer(
        &self,
        table: &T,
        section: usize,
    ) -> Result<Option<T::View>, RouterError> {
        self.on_section(section, |c, local| c.view_for_footer(table, local))
    }

    /// The cell at `index` is about to appear.
    pub fn will_display_cell(
        &self,
        table: &T,
        cell: &T::Cell,
        index: IndexPath,
    ) -> Result<(), RouterError> {
        self.on_row(index, |c, local| c.will_display_cell(table, cell, local))
    }

    /// The cell at `index` scrolled off screen.
    pub fn did_end_displaying_cell(
        &self,
        table: &T,
        cell: &T::Cell,
        index: IndexPath,
    ) -> Result<(), RouterError> {
        self.on_row(index, |c, local| {
            c.did_end_displaying_cell(table, cell, local)
        })
    }

    /// Whether touching the row at `index` highlights it.
    pub fn should_highlight_row(&self, table: &T, index: IndexPath) -> Result<bool, RouterError> {
        self.on_row(index, |c, local| c.should_highlight_row(table, local))
    }

    /// The row that will actually be selected, in widget numbering.
    pub fn will_select_row(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<Option<IndexPath>, RouterError> {
        let resolved = self.registry.resolve(index.section)?;
        Ok(resolved
            .controller()
            .will_select_row(table, resolved.local_path(index))
            .map(|local| resolved.global_path(local)))
    }

    /// The row at `index` was selected.
    pub fn did_select_row(&self, table: &T, index: IndexPath) -> Result<(), RouterError> {
        self.on_row(index, |c, local| c.did_select_row(table, local))
    }

    /// The row that will actually be deselected, in widget numbering.
    pub fn will_deselect_row(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<Option<IndexPath>, RouterError> {
        let resolved = self.registry.resolve(index.section)?;
        Ok(resolved
            .controller()
            .will_deselect_row(table, resolved.local_path(index))
            .map(|local| resolved.global_path(local)))
    }

    /// The row at `index` was deselected.
    pub fn did_deselect_row(&self, table: &T, index: IndexPath) -> Result<(), RouterError> {
        self.on_row(index, |c, local| c.did_deselect_row(table, local))
    }

    /// The accessory button of the row at `index` was tapped.
    pub fn accessory_button_tapped(&self, table: &T, index: IndexPath) -> Result<(), RouterError> {
        self.on_row(index, |c, local| c.accessory_button_tapped(table, local))
    }

    /// Editing control for the row at `index`.
    pub fn editing_style_for_row(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<EditingStyle, RouterError> {
        self.on_row(index, |c, local| c.editing_style_for_row(table, local))
    }

    /// Delete confirmation label for the row at `index`.
    pub fn title_for_delete_confirmation(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<Option<String>, RouterError> {
        self.on_row(index, |c, local| {
            c.title_for_delete_confirmation(table, local)
        })
    }

    /// Whether the row at `index` is indented while editing.
    pub fn should_indent_while_editing(
        &self,
        table: &T,
        index: IndexPath,
    ) -> Result<bool, RouterError> {
        self.on_row(index, |c, local| c.should_indent_while_editing(table, local))
    }

    /// Drop target for a row dragged from `source` over `proposed`.
    ///
    /// A drag that leaves its own binding is pinned back to `source` without
    /// asking any controller.
    pub fn target_index_path_for_move(
        &self,
        table: &T,
        source: IndexPath,
        proposed: IndexPath,
    ) -> Result<IndexPath, RouterError> {
        let from = self.registry.resolve(source.section)?;
        let over = self.registry.resolve(proposed.section)?;
        if !from.same_route(&over) {
            return Ok(source);
        }
        let target = from.controller().target_index_path_for_move(
            table,
            from.local_path(source),
            from.local_path(proposed),
        );
        Ok(from.global_path(target))
    }
}

impl<T: TableView + ?Sized> Clone for SectionRouter<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T: TableView + ?Sized> fmt::Debug for SectionRouter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRouter")
            .field("registry", &self.registry)
            .finish()
    }
}
