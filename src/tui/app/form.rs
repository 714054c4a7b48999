/// Editable value of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldValue {
    Text(String),
    /// Digits only; parsed on submit.
    Number(String),
    Choice { options: &'static [&'static str], selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(label: &'static str, value: &str) -> Self {
        Self { label, value: FieldValue::Text(value.to_string()) }
    }

    pub fn number(label: &'static str, value: u32) -> Self {
        Self { label, value: FieldValue::Number(value.to_string()) }
    }

    pub fn choice(label: &'static str, options: &'static [&'static str], selected: usize) -> Self {
        Self { label, value: FieldValue::Choice { options, selected } }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s.clone(),
            FieldValue::Choice { options, selected } => {
                format!("< {} >", options.get(*selected).copied().unwrap_or(""))
            }
        }
    }
}

/// A small multi-field input form with one focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
}

impl Form {
    const MAX_LEN: usize = 80;
    const MAX_DIGITS: usize = 9;

    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self { title: title.into(), fields, focus: 0, error: None }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            let n = self.fields.len();
            self.focus = (self.focus + n - 1) % n;
        }
    }

    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        match &mut field.value {
            FieldValue::Text(s) => {
                if s.chars().count() < Self::MAX_LEN && !c.is_control() {
                    s.push(c);
                }
            }
            FieldValue::Number(s) => {
                if c.is_ascii_digit() && s.len() < Self::MAX_DIGITS {
                    s.push(c);
                }
            }
            FieldValue::Choice { .. } => {}
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if let FieldValue::Text(s) | FieldValue::Number(s) = &mut field.value {
                s.pop();
            }
        }
        self.error = None;
    }

    /// Move the focused choice field by `delta`, wrapping.
    pub fn cycle(&mut self, delta: isize) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if let FieldValue::Choice { options, selected } = &mut field.value {
                let n = options.len() as isize;
                if n > 0 {
                    *selected = (*selected as isize + delta).rem_euclid(n) as usize;
                }
            }
        }
    }

    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Text(s)) | Some(FieldValue::Number(s)) => s,
            _ => "",
        }
    }

    pub fn number(&self, index: usize) -> Result<u32, String> {
        let label = self.fields.get(index).map_or("value", |f| f.label);
        self.text(index).parse::<u32>().map_err(|_| format!("{label} must be a number"))
    }

    pub fn choice(&self, index: usize) -> usize {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Choice { selected, .. }) => *selected,
            _ => 0,
        }
    }
}
