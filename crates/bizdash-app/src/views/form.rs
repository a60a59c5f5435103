//! Creation form plumbing shared by every modal draft

use bizdash_core::prelude::*;
use chrono::NaiveDate;

/// Edit applied to the focused field of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    /// Next value of a choice field
    CycleNext,
    /// Previous value of a choice field
    CyclePrev,
}

/// One rendered form line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: &'static str,
    pub value: String,
    /// Choice fields cycle with Left/Right instead of taking text
    pub is_choice: bool,
}

impl FormRow {
    pub fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            is_choice: false,
        }
    }

    pub fn choice(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            is_choice: true,
        }
    }
}

/// Draft state behind a creation modal.
///
/// A draft is transient: it is replaced with a fresh one when the modal is
/// cancelled or a submit succeeds. A failed submit keeps the typed values
/// and records the error for inline display.
pub trait Form {
    type Output;

    /// Modal title
    const TITLE: &'static str;

    fn rows(&self) -> Vec<FormRow>;

    fn focus(&self) -> usize;

    fn set_focus(&mut self, focus: usize);

    /// Text buffer for the focused field; `None` on choice fields
    fn focused_text(&mut self) -> Option<&mut String>;

    /// Cycle the focused choice field; no-op on text fields
    fn cycle(&mut self, forward: bool);

    /// Validate the draft and build the record it describes
    fn build(&self, today: NaiveDate) -> Result<Self::Output>;

    fn error(&self) -> Option<&str>;

    fn set_error(&mut self, error: Option<String>);

    fn field_count(&self) -> usize {
        self.rows().len()
    }

    fn apply(&mut self, input: FormInput) {
        let count = self.field_count().max(1);
        match input {
            FormInput::NextField => self.set_focus((self.focus() + 1) % count),
            FormInput::PrevField => self.set_focus((self.focus() + count - 1) % count),
            FormInput::CycleNext => self.cycle(true),
            FormInput::CyclePrev => self.cycle(false),
            FormInput::Char(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                } else if c == ' ' {
                    self.cycle(true);
                }
            }
            FormInput::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
        }
    }

    /// Validate and build, storing the error message on failure
    fn submit(&mut self, today: NaiveDate) -> Result<Self::Output> {
        match self.build(today) {
            Ok(output) => {
                self.set_error(None);
                Ok(output)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }
}

/// Parse an optional `YYYY-MM-DD` field
pub(crate) fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| Error::validation(field, format!("'{}' is not a YYYY-MM-DD date", raw.trim())))
}

/// Error for a blank required text field
pub(crate) fn require(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("date", " 2024-03-09 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
        assert!(matches!(
            parse_date("date", "09/03/2024"),
            Err(Error::Validation { field: "date", .. })
        ));
    }

    #[test]
    fn test_require_trims() {
        assert_eq!(require("name", "  Q3  ").unwrap(), "Q3");
        assert!(require("name", "   ").is_err());
    }
}
