//! Form field value objects

/// A single labeled text input with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
    /// Render the value masked (password inputs)
    pub masked: bool,
}

impl FormField {
    /// Create an optional text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: String::new(),
            required: false,
            masked: false,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mask the value when rendering
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Presence check; optional fields are always satisfied
    pub fn is_satisfied(&self) -> bool {
        !self.required || !self.value.is_empty()
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Value as it should appear on screen
    pub fn display_value(&self, mask_char: char) -> String {
        if self.masked {
            std::iter::repeat(mask_char)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
