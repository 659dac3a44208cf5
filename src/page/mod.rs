//! In-memory page model. Elements are addressed by the same ids the HTML templates use,
//! and every accessor tolerates a missing element.

pub mod select;
pub mod table;
pub mod template;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

pub use select::{Select, SelectOption};
pub use table::{Row, Table};
pub use template::PageTemplate;

pub type SharedPage = Arc<Mutex<Page>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Red,
}

/// The `responseMessage` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub color: Option<StatusColor>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    tables: BTreeMap<String, Table>,
    selects: BTreeMap<String, Select>,
    inputs: BTreeMap<String, String>,
    forms: BTreeSet<String>,
    status: Option<StatusLine>,
}

impl Page {
    pub fn builder() -> PageBuilder {
        PageBuilder::default()
    }

    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.get_mut(id)
    }

    pub fn select(&self, id: &str) -> Option<&Select> {
        self.selects.get(id)
    }

    pub fn select_mut(&mut self, id: &str) -> Option<&mut Select> {
        self.selects.get_mut(id)
    }

    /// Value of an input or, failing that, of a select with this id.
    pub fn field_value(&self, id: &str) -> Option<&str> {
        self.inputs
            .get(id)
            .map(String::as_str)
            .or_else(|| self.selects.get(id).map(Select::value))
    }

    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.inputs.get(id).map(String::as_str)
    }

    /// Returns false when the input does not exist.
    pub fn set_input_value(&mut self, id: &str, value: &str) -> bool {
        match self.inputs.get_mut(id) {
            Some(current) => {
                *current = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut String> {
        self.inputs.get_mut(id)
    }

    pub fn has_form(&self, id: &str) -> bool {
        self.forms.contains(id)
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, color: StatusColor, text: &str) {
        if let Some(status) = self.status.as_mut() {
            status.color = Some(color);
            status.text = text.to_string();
        }
    }
}

#[derive(Debug, Default)]
pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    pub fn table(mut self, id: &str, table: Table) -> Self {
        self.page.tables.insert(id.to_string(), table);
        self
    }

    pub fn select(mut self, id: &str) -> Self {
        self.page.selects.insert(id.to_string(), Select::default());
        self
    }

    pub fn input(mut self, id: &str, value: &str) -> Self {
        self.page.inputs.insert(id.to_string(), value.to_string());
        self
    }

    pub fn form(mut self, id: &str) -> Self {
        self.page.forms.insert(id.to_string());
        self
    }

    pub fn status_line(mut self) -> Self {
        self.page.status = Some(StatusLine::default());
        self
    }

    pub fn build(self) -> Page {
        self.page
    }
}
