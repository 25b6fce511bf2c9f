//! Testing utilities for Sectional.
//!
//! This module provides a stand-in widget and controllers that make routing
//! observable from tests.
//!
//! # Features
//!
//! - [`TestTable`]: A widget type with simple cell and view types
//! - [`RecordingController`]: A controller that records every call and the
//!   section numbers it was given
//! - [`FixedController`]: A controller with fixed row counts, handy as a
//!   default controller

use sectional_core::{EditingStyle, IndexPath, SectionController, TableView};
use std::cell::RefCell;

// ============================================================================
// Test Table
// ============================================================================

/// A widget with no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestTable;

impl TableView for TestTable {
    type Cell = TestCell;
    type View = String;
}

/// A cell that remembers who built it and for which local index path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCell {
    /// Label of the controller that produced the cell.
    pub owner: String,
    /// Index path as the controller saw it.
    pub index: IndexPath,
}

// ============================================================================
// Recorded Calls
// ============================================================================

/// One call received by a [`RecordingController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Capability method name.
    pub method: &'static str,
    /// Section argument as received, if the call had one.
    pub section: Option<usize>,
    /// Row argument as received, if the call had one.
    pub row: Option<usize>,
}

impl RecordedCall {
    /// A call that only received the widget.
    pub const fn table(method: &'static str) -> Self {
        Self {
            method,
            section: None,
            row: None,
        }
    }

    /// A call scoped to a section.
    pub const fn section(method: &'static str, section: usize) -> Self {
        Self {
            method,
            section: Some(section),
            row: None,
        }
    }

    /// A call scoped to a row.
    pub const fn row(method: &'static str, index: IndexPath) -> Self {
        Self {
            method,
            section: Some(index.section),
            row: Some(index.row),
        }
    }
}

// ============================================================================
// Recording Controller
// ============================================================================

/// A controller that records every call it receives.
///
/// Answers are derived from its label so tests can tell which controller
/// produced a value.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Rc::new(RecordingController::new("tasks"));
/// router.add_binding(&recorder, 2, 4)?;
///
/// router.did_select_row(&TestTable, IndexPath::new(3, 0))?;
/// assert_eq!(
///     recorder.last_call(),
///     Some(RecordedCall::row("did_select_row", IndexPath::new(1, 0)))
/// );
/// ```
#[derive(Debug)]
pub struct RecordingController {
    label: String,
    sections: usize,
    rows: usize,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingController {
    /// Create a recorder reporting one section of three rows.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sections: 1,
            rows: 3,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Set the number of rows reported for every section.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of sections reported when used as a default controller.
    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = sections;
        self
    }

    /// The label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// The most recent call.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.borrow().last().cloned()
    }

    /// Get the number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: RecordedCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl<T: TableView<Cell = TestCell, View = String> + ?Sized> SectionController<T>
    for RecordingController
{
    fn number_of_sections(&self, _table: &T) -> usize {
        self.record(RecordedCall::table("number_of_sections"));
        self.sections
    }

    fn number_of_rows(&self, _table: &T, section: usize) -> usize {
        self.record(RecordedCall::section("number_of_rows", section));
        self.rows
    }

    fn cell_for_row(&self, _table: &T, index: IndexPath) -> TestCell {
        self.record(RecordedCall::row("cell_for_row", index));
        TestCell {
            owner: self.label.clone(),
            index,
        }
    }

    fn title_for_header(&self, _table: &T, section: usize) -> Option<String> {
        self.record(RecordedCall::section("title_for_header", section));
        Some(format!("{}:header:{section}", self.label))
    }

    fn title_for_footer(&self, _table: &T, section: usize) -> Option<String> {
        self.record(RecordedCall::section("title_for_footer", section));
        Some(format!("{}:footer:{section}", self.label))
    }

    fn can_edit_row(&self, _table: &T, index: IndexPath) -> bool {
        self.record(RecordedCall::row("can_edit_row", index));
        true
    }

    fn can_move_row(&self, _table: &T, index: IndexPath) -> bool {
        self.record(RecordedCall::row("can_move_row", index));
        true
    }

    fn commit_edit(&self, _table: &T, _style: EditingStyle, index: IndexPath) {
        self.record(RecordedCall::row("commit_edit", index));
    }

    fn move_row(&self, _table: &T, from: IndexPath, to: IndexPath) {
        self.record(RecordedCall::row("move_row", from));
        self.record(RecordedCall::row("move_row", to));
    }

    fn section_index_titles(&self, _table: &T) -> Option<Vec<String>> {
        self.record(RecordedCall::table("section_index_titles"));
        Some(vec![self.label.clone()])
    }

    fn section_for_index_title(&self, _table: &T, _title: &str, index: usize) -> usize {
        self.record(RecordedCall::table("section_for_index_title"));
        index
    }

    fn height_for_row(&self, _table: &T, index: IndexPath) -> Option<f64> {
        self.record(RecordedCall::row("height_for_row", index));
        Some(44.0)
    }

    fn estimated_height_for_row(&self, _table: &T, index: IndexPath) -> Option<f64> {
        self.record(RecordedCall::row("estimated_height_for_row", index));
        Some(40.0)
    }

    fn height_for_header(&self, _table: &T, section: usize) -> Option<f64> {
        self.record(RecordedCall::section("height_for_header", section));
        Some(28.0)
    }

    fn height_for_footer(&self, _table: &T, section: usize) -> Option<f64> {
        self.record(RecordedCall::section("height_for_footer", section));
        Some(12.0)
    }

    fn view_for_header(&self, _table: &T, section: usize) -> Option<String> {
        self.record(RecordedCall::section("view_for_header", section));
        Some(format!("{}:header-view:{section}", self.label))
    }

    fn view_for_footer(&self, _table: &T, section: usize) -> Option<String> {
        self.record(RecordedCall::section("view_for_footer", section));
        Some(format!("{}:footer-view:{section}", self.label))
    }

    fn will_display_cell(&self, _table: &T, _cell: &TestCell, index: IndexPath) {
        self.record(RecordedCall::row("will_display_cell", index));
    }

    fn did_end_displaying_cell(&self, _table: &T, _cell: &TestCell, index: IndexPath) {
        self.record(RecordedCall::row("did_end_displaying_cell", index));
    }

    fn should_highlight_row(&self, _table: &T, index: IndexPath) -> bool {
        self.record(RecordedCall::row("should_highlight_row", index));
        true
    }

    fn will_select_row(&self, _table: &T, index: IndexPath) -> Option<IndexPath> {
        self.record(RecordedCall::row("will_select_row", index));
        Some(index)
    }

    fn did_select_row(&self, _table: &T, index: IndexPath) {
        self.record(RecordedCall::row("did_select_row", index));
    }

    fn will_deselect_row(&self, _table: &T, index: IndexPath) -> Option<IndexPath> {
        self.record(RecordedCall::row("will_deselect_row", index));
        Some(index)
    }

    fn did_deselect_row(&self, _table: &T, index: IndexPath) {
        self.record(RecordedCall::row("did_deselect_row", index));
    }

    fn accessory_button_tapped(&self, _table: &T, index: IndexPath) {
        self.record(RecordedCall::row("accessory_button_tapped", index));
    }

    fn editing_style_for_row(&self, _table: &T, index: IndexPath) -> EditingStyle {
        self.record(RecordedCall::row("editing_style_for_row", index));
        EditingStyle::Delete
    }

    fn title_for_delete_confirmation(&self, _table: &T, index: IndexPath) -> Option<String> {
        self.record(RecordedCall::row("title_for_delete_confirmation", index));
        Some(format!("{}:delete", self.label))
    }

    fn should_indent_while_editing(&self, _table: &T, index: IndexPath) -> bool {
        self.record(RecordedCall::row("should_indent_while_editing", index));
        false
    }

    fn target_index_path_for_move(
        &self,
        _table: &T,
        source: IndexPath,
        proposed: IndexPath,
    ) -> IndexPath {
        self.record(RecordedCall::row("target_index_path_for_move", source));
        proposed
    }
}

// ============================================================================
// Fixed Controller
// ============================================================================

/// A controller with a fixed number of rows per section.
///
/// Reports as many sections as it has row counts, which makes it a convenient
/// default controller.
#[derive(Debug, Clone, Default)]
pub struct FixedController {
    rows: Vec<usize>,
    index_titles: Option<Vec<String>>,
}

impl FixedController {
    /// Create a controller with one section per entry of `rows`.
    pub fn new(rows: Vec<usize>) -> Self {
        Self {
            rows,
            index_titles: None,
        }
    }

    /// Titles reported for the widget's section index.
    pub fn with_index_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_titles = Some(titles.into_iter().map(Into::into).collect());
        self
    }
}

impl<T: TableView<Cell = TestCell> + ?Sized> SectionController<T> for FixedController {
    fn number_of_sections(&self, _table: &T) -> usize {
        self.rows.len()
    }

    fn number_of_rows(&self, _table: &T, section: usize) -> usize {
        self.rows.get(section).copied().unwrap_or(0)
    }

    fn cell_for_row(&self, _table: &T, index: IndexPath) -> TestCell {
        TestCell {
            owner: "fixed".to_string(),
            index,
        }
    }

    fn section_index_titles(&self, _table: &T) -> Option<Vec<String>> {
        self.index_titles.clone()
    }

    fn section_for_index_title(&self, _table: &T, title: &str, index: usize) -> usize {
        self.index_titles
            .as_ref()
            .and_then(|titles| titles.iter().position(|t| t == title))
            .unwrap_or(index)
    }
}
