use std::collections::{BTreeMap, BTreeSet};

use crate::pagination::PagedView;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<String>,
    pub data: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Set once a pagination widget has enhanced the table.
    pub pagination: Option<PagedView>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn is_enhanced(&self) -> bool {
        self.pagination.is_some()
    }

    /// Indices into `rows` of the rows currently on screen, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        match &self.pagination {
            Some(view) => view.visible_indices(&self.rows),
            None => (0..self.rows.len()).collect(),
        }
    }

    pub fn selected_index(&self, class: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.has_class(class))
    }
}
