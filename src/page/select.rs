#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            disabled: false,
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        }
    }
}

/// A dropdown: its options and the index of the selected one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub options: Vec<SelectOption>,
    pub selected: Option<usize>,
}

impl Select {
    /// Value of the selected option, or an empty string when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|option| option.value.as_str())
            .unwrap_or("")
    }

    /// Drop every option and leave only a disabled, selected placeholder.
    pub fn reset_to_placeholder(&mut self, label: &str) {
        self.options = vec![SelectOption::placeholder(label)];
        self.selected = Some(0);
    }

    pub fn push_option(&mut self, value: &str) {
        self.options.push(SelectOption::new(value));
    }

    /// Select an enabled option by index. Disabled options cannot be chosen.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.options.get(index) {
            Some(option) if !option.disabled => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn select_value(&mut self, value: &str) -> bool {
        match self
            .options
            .iter()
            .position(|option| !option.disabled && option.value == value)
        {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Values of the enabled options, in order.
    pub fn values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| !option.disabled)
            .map(|option| option.value.as_str())
            .collect()
    }
}
