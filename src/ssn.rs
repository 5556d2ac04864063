//! Social security number input that hides all but the last four digits
//! while it is not being edited.

use std::fmt;

use crate::consts::SSN_GROUPS;
use crate::{ChangeListener, DEFAULT_MASKER, DEFAULT_SSN_SEPARATOR, SSN_DIGITS, SSN_MASKED_DIGITS};

/// Keeps ASCII digits only, at most nine of them
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(SSN_DIGITS).collect()
}

/// Replaces the first five characters with `masker`.
///
/// Separators are dropped first. Characters that are already `masker` are
/// kept, so a value that arrives masked from a server masks to itself.
pub fn mask(input: &str, masker: char) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == masker)
        .take(SSN_DIGITS)
        .enumerate()
        .map(|(i, c)| if i < SSN_MASKED_DIGITS { masker } else { c })
        .collect()
}

/// Groups characters as `AAA{sep}GG{sep}SSSS`, only separating groups that
/// are present. Existing separators are not stripped; pass the output of
/// [`clean`] or [`mask`].
pub fn format(input: &str, separator: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut groups = Vec::with_capacity(SSN_GROUPS.len());
    let mut start = 0;
    for len in SSN_GROUPS {
        if start >= chars.len() {
            break;
        }
        let end = (start + len).min(chars.len());
        groups.push(chars[start..end].iter().collect::<String>());
        start = end;
    }
    // Anything past nine characters stays in the last group
    if let Some(last) = groups.last_mut() {
        last.extend(&chars[start..]);
    }
    groups.join(separator)
}

/// Text input holding an SSN.
///
/// While focused the raw value is shown for editing; otherwise the masked,
/// formatted value is shown. Editing a masked value (one containing two
/// consecutive mask characters) clears it.
pub struct SsnInput {
    raw: String,
    active: bool,
    masker: char,
    separator: String,
    on_change: Option<ChangeListener>,
}

impl SsnInput {
    /// The initial value is kept as given; it may already be masked.
    pub fn new(initial: &str) -> Self {
        Self {
            raw: initial.to_owned(),
            active: false,
            masker: DEFAULT_MASKER,
            separator: DEFAULT_SSN_SEPARATOR.to_owned(),
            on_change: None,
        }
    }

    #[must_use]
    pub fn with_masker(mut self, masker: char) -> Self {
        self.masker = masker;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Registers the listener called with the raw value whenever it changes
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Text shown in the input box
    pub fn value(&self) -> String {
        if self.active {
            self.raw.clone()
        } else {
            format(&mask(&self.raw, self.masker), &self.separator)
        }
    }

    /// Called on focus and click
    pub fn focus(&mut self) {
        self.active = true;
    }

    pub fn blur(&mut self) {
        self.active = false;
    }

    /// Handles the text typed into the box. Returns whether the raw value
    /// changed.
    pub fn input(&mut self, text: &str) -> bool {
        let masked_run: String = [self.masker; 2].iter().collect();
        let next = if text.contains(&masked_run) {
            log::debug!("Masked SSN edited, clearing");
            String::new()
        } else {
            clean(text)
        };

        if next == self.raw {
            return false;
        }
        self.raw = next;
        log::trace!("SSN input reporting {} digit(s)", self.raw.len());
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.raw);
        }
        true
    }
}

impl fmt::Debug for SsnInput {
    // Never print the raw number
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsnInput")
            .field("value", &format(&mask(&self.raw, self.masker), &self.separator))
            .field("active", &self.active)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_clean() {
        assert_eq!(clean("123-45-6789"), "123456789");
        assert_eq!(clean(" 12a3 "), "123");
        assert_eq!(clean("1234567890"), "123456789");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("123456789", '*'), "*****6789");
        assert_eq!(mask("123-45-6789", '#'), "#####6789");
        assert_eq!(mask("123", '*'), "***");
        assert_eq!(mask("***-**-6789", '*'), "*****6789");
    }

    #[test]
    fn test_format() {
        assert_eq!(format("123456789", "-"), "123-45-6789");
        assert_eq!(format("*****6789", " "), "*** ** 6789");
        assert_eq!(format("1234", "-"), "123-4");
        assert_eq!(format("123", "-"), "123");
        assert_eq!(format("", "-"), "");
    }

    #[test]
    fn test_display_depends_on_focus() {
        let mut input = SsnInput::new("123456789");
        assert_eq!(input.value(), "***-**-6789");

        input.focus();
        assert!(input.is_active());
        assert_eq!(input.value(), "123456789");

        input.blur();
        assert_eq!(input.value(), "***-**-6789");
    }

    #[test]
    fn test_server_masked_value_displays_masked() {
        let input = SsnInput::new("***-**-6789");
        assert_eq!(input.value(), "***-**-6789");
    }

    #[test]
    fn test_input_cleans_and_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut input = SsnInput::new("").on_change(move |ssn| sink.borrow_mut().push(ssn.to_owned()));

        input.focus();
        assert!(input.input("123-45"));
        assert!(!input.input("123-45"));
        assert!(input.input("123-45-6789"));
        assert_eq!(input.raw(), "123456789");
        assert_eq!(*log.borrow(), ["12345", "123456789"]);
    }

    #[test]
    fn test_editing_masked_value_clears() {
        let mut input = SsnInput::new("***-**-6789");
        input.focus();
        assert!(input.input("***-**-67890"));
        assert_eq!(input.raw(), "");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_custom_masker_and_separator() {
        let input = SsnInput::new("123456789").with_masker('x').with_separator(" ");
        assert_eq!(input.value(), "xxx xx 6789");
    }

    #[test]
    fn test_debug_hides_digits() {
        let input = SsnInput::new("123456789");
        let debug = format!("{input:?}");
        assert!(!debug.contains("12345"));
        assert!(debug.contains("6789"));
    }
}
