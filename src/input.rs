use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_LABEL, DateValue, Part, SelectOption, ValidationRange};

/// Receives the composite date string after every change
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// Per-instance settings that are not bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateInputOptions {
    /// Base name of the selects (`{name}-month`, `{name}-day`, `{name}-year`)
    pub name: String,
    /// Accessible label prefix
    pub label: String,
    /// Suppresses all interaction
    pub disabled: bool,
    /// Presentation only
    pub has_error: bool,
}

impl Default for DateInputOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: DEFAULT_LABEL.to_owned(),
            disabled: false,
            has_error: false,
        }
    }
}

/// Everything needed to render one of the three selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub part: Part,
    pub name: String,
    pub aria_label: String,
    /// Disabled first option shown while the part is unset
    pub placeholder: &'static str,
    /// Selected value, `0` for the placeholder
    pub value: u16,
    pub has_value: bool,
    pub has_error: bool,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
}

/// Month/day/year select triplet kept in sync with one `YYYY-MM-DD` string.
///
/// [`set_part`](Self::set_part) and [`clear`](Self::clear) are the only ways
/// to change the value; each call that changes anything notifies the
/// listener exactly once with [`DateValue::serialize`]. A day left out of
/// range by a later month or year change stays selected.
pub struct DateInput {
    value: DateValue,
    range: ValidationRange,
    options: DateInputOptions,
    on_change: Option<ChangeListener>,
}

impl DateInput {
    /// Seeds the selects from `seed` (see [`DateValue::initialize`]).
    /// No notification is sent for the initial value; [`DateField::bind`]
    /// writes the normalized seed back to the form instead.
    ///
    /// [`DateField::bind`]: crate::DateField::bind
    pub fn new(seed: &str, range: ValidationRange, options: DateInputOptions) -> Self {
        let value = DateValue::initialize(seed);
        log::trace!("Date input '{}' seeded with {value:?} from {seed:?}", options.name);
        Self {
            value,
            range,
            options,
            on_change: None,
        }
    }

    /// Registers the listener called after every change
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub const fn value(&self) -> &DateValue {
        &self.value
    }

    pub const fn range(&self) -> &ValidationRange {
        &self.range
    }

    pub const fn options(&self) -> &DateInputOptions {
        &self.options
    }

    pub fn serialize(&self) -> String {
        self.value.serialize()
    }

    /// Overwrites one part and notifies the listener.
    ///
    /// Returns `false` without touching anything when the input is disabled.
    pub fn set_part(&mut self, part: Part, value: u16) -> bool {
        if self.options.disabled {
            log::debug!("Date input '{}' is disabled, ignoring {part} = {value}", self.options.name);
            return false;
        }
        log::debug!("Date input '{}': {part} = {value}", self.options.name);
        self.value.set(part, value);
        self.notify();
        true
    }

    /// Resets all three parts and notifies the listener once.
    ///
    /// Returns `false` without touching anything when the input is disabled.
    pub fn clear(&mut self) -> bool {
        if self.options.disabled {
            log::debug!("Date input '{}' is disabled, ignoring clear", self.options.name);
            return false;
        }
        log::debug!("Date input '{}' cleared", self.options.name);
        self.value.clear();
        self.notify();
        true
    }

    /// The clear button is shown once any part has a value, unless the
    /// input is disabled
    pub const fn show_clear(&self) -> bool {
        !self.options.disabled
            && (self.value.is_set(Part::Month)
                || self.value.is_set(Part::Day)
                || self.value.is_set(Part::Year))
    }

    pub fn month_options(&self) -> Vec<u8> {
        self.range.months()
    }

    /// Days offered for the current year and month
    pub fn day_options(&self) -> Vec<u8> {
        self.range.days(self.value.year(), self.value.month())
    }

    pub fn year_options(&self) -> Vec<u16> {
        self.range.years()
    }

    pub fn select(&self, part: Part) -> SelectView {
        let value = self.value.get(part);
        SelectView {
            part,
            name: format!("{}-{part}", self.options.name),
            aria_label: format!("{}: {}", self.options.label, part.title()),
            placeholder: part.placeholder(),
            value,
            has_value: self.value.is_set(part),
            has_error: self.options.has_error,
            disabled: self.options.disabled,
            options: self.range.options(part, self.value.year(), self.value.month()),
        }
    }

    /// The three selects in layout order
    pub fn selects(&self) -> [SelectView; 3] {
        Part::ALL.map(|part| self.select(part))
    }

    pub(crate) fn set_has_error(&mut self, has_error: bool) {
        self.options.has_error = has_error;
    }

    fn notify(&mut self) {
        let serialized = self.value.serialize();
        log::trace!("Date input '{}' reporting {serialized:?}", self.options.name);
        if let Some(listener) = self.on_change.as_mut() {
            listener(&serialized);
        }
    }
}

impl fmt::Debug for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateInput")
            .field("value", &self.value)
            .field("range", &self.range)
            .field("options", &self.options)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
