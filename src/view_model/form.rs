//! Editable forms behind the create/edit/password modals.
//!
//! Forms hold plain text only; turning them into requests lives in `modal`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Masked when displayed.
    pub secret: bool,
    /// When set, the value can only be one of these and is cycled, not typed.
    pub choices: Option<&'static [&'static str]>,
}

impl FormField {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            secret: false,
            choices: None,
        }
    }

    pub fn secret(key: &'static str, label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::text(key, label)
        }
    }

    pub fn choice(key: &'static str, label: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            value: choices.first().copied().unwrap_or_default().to_string(),
            choices: Some(choices),
            ..Self::text(key, label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Builder-style setter used to pre-fill forms from records.
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    /// Trimmed value of a field; empty when the key does not exist.
    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.trim())
            .unwrap_or_default()
    }

    /// Raw value, for passwords where spaces count.
    pub fn raw_value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or_default()
    }

    /// `None` for blank fields.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.value(key))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if field.choices.is_none() {
                field.value.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if field.choices.is_none() {
                field.value.pop();
            }
        }
    }

    /// Moves a choice field to its next (or previous) allowed value.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        let Some(choices) = field.choices else {
            return;
        };
        if choices.is_empty() {
            return;
        }
        let current = choices
            .iter()
            .position(|c| c.eq_ignore_ascii_case(field.value.trim()));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
            (None, _) => 0,
        };
        field.value = choices[next].to_string();
    }
}
