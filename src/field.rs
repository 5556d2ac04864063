//! Bindings between the inputs and a form-state library.
//!
//! The form library owns the value and the validation result; an input only
//! reads the value once when bound and writes every change back.

use crate::{DateInput, DateInputOptions, Part, SsnInput, ValidationRange};

/// One field of a form, as seen by an input.
pub trait FormField {
    /// Current value
    fn value(&self) -> &str;

    /// Validation message, if the field is currently invalid
    fn error(&self) -> Option<&str>;

    /// Stores a new value
    fn set_value(&mut self, value: String);
}

/// Minimal in-memory field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl FormField for FieldState {
    fn value(&self) -> &str {
        &self.value
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// A [`DateInput`] wired to a form field.
#[derive(Debug)]
pub struct DateField<F> {
    field: F,
    input: DateInput,
}

impl<F: FormField> DateField<F> {
    /// Seeds the selects from the field's value and writes the normalized
    /// value straight back, so the form never holds a seed the selects do
    /// not show (`"2024-3-7"` becomes `"2024-03-07"`, `"2024-03"` becomes
    /// `""`). `options.has_error` is replaced by whether the field currently
    /// has an error.
    pub fn bind(field: F, range: ValidationRange, options: DateInputOptions) -> Self {
        let mut input = DateInput::new(field.value(), range, options);
        input.set_has_error(field.error().is_some());
        let mut bound = Self { field, input };
        bound.push();
        bound
    }

    pub const fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access for the form library, e.g. to record a validation
    /// error. Call [`refresh`](Self::refresh) afterwards.
    pub const fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub const fn input(&self) -> &DateInput {
        &self.input
    }

    /// Re-reads the field's error state
    pub fn refresh(&mut self) {
        self.input.set_has_error(self.field.error().is_some());
    }

    pub fn set_part(&mut self, part: Part, value: u16) -> bool {
        let changed = self.input.set_part(part, value);
        if changed {
            self.push();
        }
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.input.clear();
        if changed {
            self.push();
        }
        changed
    }

    pub fn into_inner(self) -> F {
        self.field
    }

    fn push(&mut self) {
        self.field.set_value(self.input.serialize());
    }
}

/// An [`SsnInput`] wired to a form field.
#[derive(Debug)]
pub struct SsnField<F> {
    field: F,
    input: SsnInput,
}

impl<F: FormField> SsnField<F> {
    /// Seeds the input from the field's value and reports the raw value
    /// back once, as every later change does.
    pub fn bind(mut field: F, masker: char, separator: &str) -> Self {
        let input = SsnInput::new(field.value())
            .with_masker(masker)
            .with_separator(separator);
        field.set_value(input.raw().to_owned());
        Self { field, input }
    }

    pub const fn field(&self) -> &F {
        &self.field
    }

    pub const fn input(&self) -> &SsnInput {
        &self.input
    }

    /// Whether the input should be drawn in its error state
    pub fn has_error(&self) -> bool {
        self.field.error().is_some()
    }

    pub fn focus(&mut self) {
        self.input.focus();
    }

    pub fn blur(&mut self) {
        self.input.blur();
    }

    pub fn input_text(&mut self, text: &str) -> bool {
        let changed = self.input.input(text);
        if changed {
            self.field.set_value(self.input.raw().to_owned());
        }
        changed
    }

    pub fn into_inner(self) -> F {
        self.field
    }
}
