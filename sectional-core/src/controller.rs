//! # Capability Set (SectionController)
//!
//! The full set of data-source and delegate queries a list/table widget issues
//! about its sections and rows. Every section controller implements it, and the
//! router exposes the same surface to the widget.
//!
//! # Frames of Reference
//!
//! A controller registered for a range of sections sees those sections through
//! the binding's numbering: with the default
//! [`Numbering::Local`](crate::Numbering::Local) the first section of its range
//! is `0`. The default controller always sees the widget's own section indices.
//! Row indices are never rewritten.
//!
//! # Optional Queries
//!
//! Only [`number_of_rows`](SectionController::number_of_rows) and
//! [`cell_for_row`](SectionController::cell_for_row) are required. Every other
//! query has a default that matches what a widget assumes when a controller
//! does not answer it.

use crate::index::IndexPath;

/// The widget being driven.
///
/// Ties together the concrete types a widget hands out and receives. The router
/// never inspects these values, it only carries them between the widget and the
/// controllers.
pub trait TableView: 'static {
    /// A reusable row cell.
    type Cell;
    /// A header or footer view.
    type View;
}

/// How a row reacts to the widget's editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingStyle {
    /// The row cannot be edited.
    None,
    /// The row shows a delete control.
    #[default]
    Delete,
    /// The row shows an insert control.
    Insert,
}

/// The capability set of a section controller.
///
/// `T` is the widget type. Every call receives the widget so controllers can
/// dequeue cells or read widget state, the way a data source would.
pub trait SectionController<T: TableView + ?Sized> {
    // ------------------------------------------------------------------
    // Data source
    // ------------------------------------------------------------------

    /// Number of sections this controller reports.
    ///
    /// Only consulted for the default controller, where it sizes the unbound
    /// part of the widget.
    fn number_of_sections(&self, _table: &T) -> usize {
        1
    }

    /// Number of rows in `section`.
    fn number_of_rows(&self, table: &T, section: usize) -> usize;

    /// The cell displayed at `index`.
    fn cell_for_row(&self, table: &T, index: IndexPath) -> T::Cell;

    /// Plain-text header title.
    fn title_for_header(&self, _table: &T, _section: usize) -> Option<String> {
        None
    }

    /// Plain-text footer title.
    fn title_for_footer(&self, _table: &T, _section: usize) -> Option<String> {
        None
    }

    /// Whether the row at `index` can enter editing mode.
    fn can_edit_row(&self, _table: &T, _index: IndexPath) -> bool {
        true
    }

    /// Whether the row at `index` shows a reorder control.
    fn can_move_row(&self, _table: &T, _index: IndexPath) -> bool {
        false
    }

    /// Apply an insert or delete the user confirmed on the row at `index`.
    fn commit_edit(&self, _table: &T, _style: EditingStyle, _index: IndexPath) {}

    /// Move the data backing a row from `from` to `to`.
    fn move_row(&self, _table: &T, _from: IndexPath, _to: IndexPath) {}

    /// Titles for the widget's quick-jump section index.
    fn section_index_titles(&self, _table: &T) -> Option<Vec<String>> {
        None
    }

    /// Section to scroll to when the index entry `title` at `index` is tapped.
    fn section_for_index_title(&self, _table: &T, _title: &str, index: usize) -> usize {
        index
    }

    // ------------------------------------------------------------------
    // Delegate
    // ------------------------------------------------------------------

    /// Row height. `None` leaves it to the widget.
    fn height_for_row(&self, _table: &T, _index: IndexPath) -> Option<f64> {
        None
    }

    /// Estimated row height used before layout. `None` leaves it to the widget.
    fn estimated_height_for_row(&self, _table: &T, _index: IndexPath) -> Option<f64> {
        None
    }

    /// Header height. `None` leaves it to the widget.
    fn height_for_header(&self, _table: &T, _section: usize) -> Option<f64> {
        None
    }

    /// Footer height. `None` leaves it to the widget.
    fn height_for_footer(&self, _table: &T, _section: usize) -> Option<f64> {
        None
    }

    /// Custom header view.
    fn view_for_header(&self, _table: &T, _section: usize) -> Option<T::View> {
        None
    }

    /// Custom footer view.
    fn view_for_footer(&self, _table: &T, _section: usize) -> Option<T::View> {
        None
    }

    /// The cell at `index` is about to appear.
    fn will_display_cell(&self, _table: &T, _cell: &T::Cell, _index: IndexPath) {}

    /// The cell at `index` scrolled off screen.
    fn did_end_displaying_cell(&self, _table: &T, _cell: &T::Cell, _index: IndexPath) {}

    /// Whether touching the row highlights it.
    fn should_highlight_row(&self, _table: &T, _index: IndexPath) -> bool {
        true
    }

    /// The row that will actually be selected, or `None` to refuse selection.
    fn will_select_row(&self, _table: &T, index: IndexPath) -> Option<IndexPath> {
        Some(index)
    }

    /// The row at `index` was selected.
    fn did_select_row(&self, _table: &T, _index: IndexPath) {}

    /// The row that will actually be deselected, or `None` to keep it.
    fn will_deselect_row(&self, _table: &T, index: IndexPath) -> Option<IndexPath> {
        Some(index)
    }

    /// The row at `index` was deselected.
    fn did_deselect_row(&self, _table: &T, _index: IndexPath) {}

    /// The accessory button of the row at `index` was tapped.
    fn accessory_button_tapped(&self, _table: &T, _index: IndexPath) {}

    /// Editing control shown for the row in editing mode.
    fn editing_style_for_row(&self, _table: &T, _index: IndexPath) -> EditingStyle {
        EditingStyle::Delete
    }

    /// Label of the delete confirmation button. `None` uses the widget's.
    fn title_for_delete_confirmation(&self, _table: &T, _index: IndexPath) -> Option<String> {
        None
    }

    /// Whether the row is indented while editing.
    fn should_indent_while_editing(&self, _table: &T, _index: IndexPath) -> bool {
        true
    }

    /// Where a row dragged from `source` lands when hovering over `proposed`.
    fn target_index_path_for_move(
        &self,
        _table: &T,
        _source: IndexPath,
        proposed: IndexPath,
    ) -> IndexPath {
        proposed
    }
}
