#![allow(dead_code)]

use sectional::{EditingStyle, IndexPath, SectionController, TableView};
use std::cell::RefCell;

// ============================================================================
// Test Widget
// ============================================================================

#[derive(Debug, Default)]
pub struct ListView;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner(pub String);

impl TableView for ListView {
    type Cell = Row;
    type View = Banner;
}

// ============================================================================
// Controllers
// ============================================================================

/// One section holding a count of open tasks.
pub struct SummaryController {
    pub open: usize,
}

impl SectionController<ListView> for SummaryController {
    fn number_of_rows(&self, _table: &ListView, _section: usize) -> usize {
        1
    }

    fn cell_for_row(&self, _table: &ListView, _index: IndexPath) -> Row {
        Row {
            text: format!("{} open", self.open),
        }
    }

    fn height_for_row(&self, _table: &ListView, _index: IndexPath) -> Option<f64> {
        Some(60.0)
    }

    fn can_edit_row(&self, _table: &ListView, _index: IndexPath) -> bool {
        false
    }
}

/// Several lists of tasks, one per section, numbered from zero.
pub struct TaskListController {
    pub lists: RefCell<Vec<(String, Vec<String>)>>,
}

impl TaskListController {
    pub fn new(lists: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            lists: RefCell::new(
                lists
                    .into_iter()
                    .map(|(name, tasks)| {
                        (
                            name.to_string(),
                            tasks.iter().map(|t| t.to_string()).collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }

    pub fn tasks(&self, section: usize) -> Vec<String> {
        self.lists.borrow()[section].1.clone()
    }
}

impl SectionController<ListView> for TaskListController {
    fn number_of_rows(&self, _table: &ListView, section: usize) -> usize {
        self.lists.borrow()[section].1.len()
    }

    fn cell_for_row(&self, _table: &ListView, index: IndexPath) -> Row {
        Row {
            text: self.lists.borrow()[index.section].1[index.row].clone(),
        }
    }

    fn title_for_header(&self, _table: &ListView, section: usize) -> Option<String> {
        Some(self.lists.borrow()[section].0.clone())
    }

    fn can_move_row(&self, _table: &ListView, _index: IndexPath) -> bool {
        true
    }

    fn commit_edit(&self, _table: &ListView, style: EditingStyle, index: IndexPath) {
        if style == EditingStyle::Delete {
            self.lists.borrow_mut()[index.section].1.remove(index.row);
        }
    }

    fn move_row(&self, _table: &ListView, from: IndexPath, to: IndexPath) {
        let mut lists = self.lists.borrow_mut();
        let task = lists[from.section].1.remove(from.row);
        lists[to.section].1.insert(to.row, task);
    }

    fn will_select_row(&self, _table: &ListView, index: IndexPath) -> Option<IndexPath> {
        // Selecting a list's first task selects its second one instead.
        if index.row == 0 && self.lists.borrow()[index.section].1.len() > 1 {
            Some(IndexPath::new(index.section, 1))
        } else {
            Some(index)
        }
    }
}

/// The screen itself, serving every section nobody else claims.
pub struct ScreenController {
    pub sections: Vec<&'static str>,
    pub selected: RefCell<Vec<IndexPath>>,
}

impl ScreenController {
    pub fn new(sections: Vec<&'static str>) -> Self {
        Self {
            sections,
            selected: RefCell::new(Vec::new()),
        }
    }
}

impl SectionController<ListView> for ScreenController {
    fn number_of_sections(&self, _table: &ListView) -> usize {
        self.sections.len()
    }

    fn number_of_rows(&self, _table: &ListView, _section: usize) -> usize {
        1
    }

    fn cell_for_row(&self, _table: &ListView, index: IndexPath) -> Row {
        Row {
            text: format!("screen {}", index),
        }
    }

    fn view_for_header(&self, _table: &ListView, section: usize) -> Option<Banner> {
        Some(Banner(format!("screen section {section}")))
    }

    fn did_select_row(&self, _table: &ListView, index: IndexPath) {
        self.selected.borrow_mut().push(index);
    }

    fn section_index_titles(&self, _table: &ListView) -> Option<Vec<String>> {
        Some(self.sections.iter().map(|s| s.to_string()).collect())
    }
}
