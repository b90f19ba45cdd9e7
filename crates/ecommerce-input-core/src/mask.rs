//! Input masks
//!
//! A [`MaskPattern`] is a fixed sequence of literal characters and
//! placeholders. [`MaskPattern::conform`] fills it greedily, left to right,
//! with whatever the user typed. [`MaskedValue`] holds the conformed text of
//! one field and applies edits to it.
//!
//! ## Template syntax
//!
//! | Char | Slot |
//! |------|------|
//! | `9`  | any digit |
//! | `a`  | any letter |
//! | `*`  | any letter or digit |
//! | `\x` | the literal `x` |
//! | other | that literal character |

use std::fmt;
use std::str::FromStr;

use crate::error::{InputError, Result};

/// Character class a placeholder slot accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceholderClass {
    /// ASCII digit `0-9`
    Digit,
    /// Any alphabetic character
    Letter,
    /// Any alphabetic character or digit
    Alphanumeric,
}

impl PlaceholderClass {
    /// Whether `c` may be typed into a slot of this class
    pub fn matches(&self, c: char) -> bool {
        match self {
            PlaceholderClass::Digit => c.is_ascii_digit(),
            PlaceholderClass::Letter => c.is_alphabetic(),
            PlaceholderClass::Alphanumeric => c.is_alphanumeric(),
        }
    }

    /// Template character for this class
    pub fn symbol(&self) -> char {
        match self {
            PlaceholderClass::Digit => '9',
            PlaceholderClass::Letter => 'a',
            PlaceholderClass::Alphanumeric => '*',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '9' => Some(PlaceholderClass::Digit),
            'a' => Some(PlaceholderClass::Letter),
            '*' => Some(PlaceholderClass::Alphanumeric),
            _ => None,
        }
    }
}

/// One position of a mask pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskSlot {
    /// Fixed character, inserted automatically
    Literal(char),
    /// User-typed character of the given class
    Placeholder(PlaceholderClass),
}

impl MaskSlot {
    /// Whether `c` may occupy this slot
    pub fn accepts(&self, c: char) -> bool {
        match self {
            MaskSlot::Literal(literal) => *literal == c,
            MaskSlot::Placeholder(class) => class.matches(c),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, MaskSlot::Placeholder(_))
    }
}

/// Ordered sequence of literals and placeholders, e.g. `99/99/9999`.
///
/// Always holds at least one placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskPattern {
    slots: Vec<MaskSlot>,
}

/// Result of running raw text through a [`MaskPattern`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conformed {
    /// The displayable, pattern-conforming text
    pub value: String,
    /// Number of characters dropped because their placeholder refused them
    pub rejected: usize,
    /// Whether input was left over once the pattern was full
    pub truncated: bool,
}

impl MaskPattern {
    /// Build a pattern from explicit slots.
    pub fn new(slots: Vec<MaskSlot>) -> Result<Self> {
        if slots.is_empty() {
            return Err(InputError::EmptyPattern);
        }
        let pattern = Self { slots };
        if pattern.placeholder_count() == 0 {
            return Err(InputError::NoPlaceholders(pattern.to_string()));
        }
        Ok(pattern)
    }

    /// Day/month/year: two digits, `/`, two digits, `/`, four digits.
    ///
    /// No calendar checking happens here; `32/13/0000` conforms.
    pub fn date() -> Self {
        const D: MaskSlot = MaskSlot::Placeholder(PlaceholderClass::Digit);
        const SLASH: MaskSlot = MaskSlot::Literal('/');
        Self {
            slots: vec![D, D, SLASH, D, D, SLASH, D, D, D, D],
        }
    }

    /// Parse a template such as `"(999) 999-9999"`.
    pub fn parse(template: &str) -> Result<Self> {
        let mut slots = Vec::with_capacity(template.len());
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            let slot = match c {
                '\\' => match chars.next() {
                    Some(escaped) => MaskSlot::Literal(escaped),
                    None => return Err(InputError::DanglingEscape(template.to_string())),
                },
                c => PlaceholderClass::from_symbol(c)
                    .map_or(MaskSlot::Literal(c), MaskSlot::Placeholder),
            };
            slots.push(slot);
        }
        Self::new(slots)
    }

    pub fn slots(&self) -> &[MaskSlot] {
        &self.slots
    }

    /// Maximum number of characters a conforming value can hold
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }

    /// Fill the pattern greedily from `raw`.
    ///
    /// Characters are taken left to right. Literal slots are skipped over
    /// automatically, or consumed when the typed character is that literal.
    /// A character a placeholder refuses is dropped and the pattern cursor
    /// stays where it was. Skipped literals are only emitted once an accepted
    /// character follows them, so empty input conforms to an empty string.
    /// Input beyond the end of the pattern is cut off.
    pub fn conform(&self, raw: &str) -> Conformed {
        let mut value = String::with_capacity(self.slots.len());
        let mut pending = String::new();
        let mut rejected = 0;
        let mut truncated = false;
        let mut cursor = 0;

        'chars: for c in raw.chars() {
            loop {
                match self.slots.get(cursor) {
                    None => {
                        truncated = true;
                        break 'chars;
                    }
                    Some(MaskSlot::Literal(literal)) => {
                        cursor += 1;
                        if *literal == c {
                            value.push_str(&pending);
                            pending.clear();
                            value.push(c);
                            continue 'chars;
                        }
                        pending.push(*literal);
                    }
                    Some(MaskSlot::Placeholder(class)) => {
                        if class.matches(c) {
                            value.push_str(&pending);
                            pending.clear();
                            value.push(c);
                            cursor += 1;
                        } else {
                            rejected += 1;
                        }
                        continue 'chars;
                    }
                }
            }
        }

        Conformed {
            value,
            rejected,
            truncated,
        }
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                MaskSlot::Placeholder(class) => write!(f, "{}", class.symbol())?,
                MaskSlot::Literal(c) if *c == '\\' || PlaceholderClass::from_symbol(*c).is_some() => {
                    write!(f, "\\{}", c)?
                }
                MaskSlot::Literal(c) => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

impl FromStr for MaskPattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Outcome of an edit on a [`MaskedValue`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// The displayed value changed
    Changed,
    /// The edit was rejected or had no effect
    Unchanged,
}

impl Edit {
    pub fn is_changed(&self) -> bool {
        matches!(self, Edit::Changed)
    }
}

/// Displayed text of one masked field, always conforming to its pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedValue {
    pattern: MaskPattern,
    value: String,
}

impl MaskedValue {
    /// Create a masked value, conforming `initial` to `pattern`.
    pub fn new(pattern: MaskPattern, initial: &str) -> Self {
        let value = pattern.conform(initial).value;
        Self { pattern, value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn pattern(&self) -> &MaskPattern {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Every slot of the pattern is filled
    pub fn is_complete(&self) -> bool {
        self.value.chars().count() == self.pattern.len()
    }

    /// Only the characters typed into placeholder slots, e.g. `25122021`
    pub fn unmasked(&self) -> String {
        self.value
            .chars()
            .zip(self.pattern.slots())
            .filter(|(_, slot)| slot.is_placeholder())
            .map(|(c, _)| c)
            .collect()
    }

    /// Replace the value with the full text of the field after an edit.
    ///
    /// This is what an `input` event delivers. When `raw` is the current
    /// value with a single literal removed, the placeholder character in
    /// front of that literal is removed too, so deleting a `/` eats the
    /// digit before it instead of the literal reappearing.
    pub fn apply_input(&mut self, raw: &str) -> Edit {
        match self.deleted_literal(raw) {
            Some(index) => {
                let raw = self.remove_literal_with_placeholder(index);
                self.replace(&raw)
            }
            None => self.replace(raw),
        }
    }

    /// Append one keystroke at the end.
    pub fn type_char(&mut self, c: char) -> Edit {
        let mut raw = self.value.clone();
        raw.push(c);
        self.replace(&raw)
    }

    /// Append pasted text at the end; anything past the pattern is dropped.
    pub fn paste(&mut self, text: &str) -> Edit {
        let mut raw = self.value.clone();
        raw.push_str(text);
        self.replace(&raw)
    }

    /// Remove the last character.
    pub fn backspace(&mut self) -> Edit {
        let mut raw = self.value.clone();
        if raw.pop().is_none() {
            return Edit::Unchanged;
        }
        self.apply_input(&raw)
    }

    /// Replace the value outright, as when the field is set from outside.
    ///
    /// Unlike [`apply_input`](Self::apply_input) this never treats the new
    /// text as a deletion.
    pub fn reset(&mut self, raw: &str) -> Edit {
        if raw.is_empty() {
            let edit = if self.is_empty() {
                Edit::Unchanged
            } else {
                Edit::Changed
            };
            self.clear();
            return edit;
        }
        self.replace(raw)
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn replace(&mut self, raw: &str) -> Edit {
        let conformed = self.pattern.conform(raw);
        if conformed.rejected > 0 {
            tracing::trace!(
                pattern = %self.pattern,
                rejected = conformed.rejected,
                "Mask rejected input characters"
            );
        }
        if conformed.truncated {
            tracing::trace!(pattern = %self.pattern, "Input truncated at mask length");
        }

        if conformed.value == self.value {
            Edit::Unchanged
        } else {
            self.value = conformed.value;
            Edit::Changed
        }
    }

    /// Index of the literal missing from `raw`, if `raw` is the current
    /// value with exactly one literal character deleted.
    fn deleted_literal(&self, raw: &str) -> Option<usize> {
        let current: Vec<char> = self.value.chars().collect();
        let raw: Vec<char> = raw.chars().collect();
        if raw.len() + 1 != current.len() {
            return None;
        }

        let index = current
            .iter()
            .zip(&raw)
            .position(|(a, b)| a != b)
            .unwrap_or(raw.len());
        if current[index + 1..] != raw[index..] {
            return None;
        }

        match self.pattern.slots().get(index) {
            Some(MaskSlot::Literal(_)) => Some(index),
            _ => None,
        }
    }

    /// Drop the literal at `index` together with the placeholder character
    /// in front of it. A leading literal has nothing in front, so the first
    /// placeholder character after it goes instead.
    fn remove_literal_with_placeholder(&self, index: usize) -> String {
        let slots = self.pattern.slots();
        let filled = self.value.chars().count();
        let placeholder = (0..index)
            .rev()
            .find(|&i| slots[i].is_placeholder())
            .or_else(|| (index + 1..filled).find(|&i| slots[i].is_placeholder()));

        self.value
            .chars()
            .enumerate()
            .filter(|&(i, _)| i != index && Some(i) != placeholder)
            .map(|(_, c)| c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(pattern: MaskPattern, keys: &str) -> MaskedValue {
        let mut value = MaskedValue::new(pattern, "");
        for c in keys.chars() {
            let _ = value.type_char(c);
        }
        value
    }

    #[test]
    fn date_pattern_shape() {
        let date = MaskPattern::date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.placeholder_count(), 8);
        assert_eq!(date.to_string(), "99/99/9999");
    }

    #[test]
    fn parse_matches_date() {
        assert_eq!(MaskPattern::parse("99/99/9999").unwrap(), MaskPattern::date());
        assert_eq!("99/99/9999".parse::<MaskPattern>().unwrap(), MaskPattern::date());
    }

    #[test]
    fn parse_escapes_and_classes() {
        let pattern = MaskPattern::parse(r"\9a-*").unwrap();
        assert_eq!(
            pattern.slots(),
            &[
                MaskSlot::Literal('9'),
                MaskSlot::Placeholder(PlaceholderClass::Letter),
                MaskSlot::Literal('-'),
                MaskSlot::Placeholder(PlaceholderClass::Alphanumeric),
            ]
        );
        assert_eq!(pattern.to_string(), r"\9a-*");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(MaskPattern::parse(""), Err(InputError::EmptyPattern)));
        assert!(matches!(
            MaskPattern::parse("--/--"),
            Err(InputError::NoPlaceholders(_))
        ));
        assert!(matches!(
            MaskPattern::parse("99\\"),
            Err(InputError::DanglingEscape(_))
        ));
        assert!(matches!(MaskPattern::new(vec![]), Err(InputError::EmptyPattern)));
    }

    #[test]
    fn typing_full_date() {
        assert_eq!(typed(MaskPattern::date(), "25122021").as_str(), "25/12/2021");
    }

    #[test]
    fn letter_is_rejected_and_fill_continues_greedily() {
        let value = typed(MaskPattern::date(), "2a122021");
        assert_eq!(value.as_str(), "21/22/021");

        let conformed = MaskPattern::date().conform("2a122021");
        assert_eq!(conformed.value, "21/22/021");
        assert_eq!(conformed.rejected, 1);
        assert!(!conformed.truncated);
    }

    #[test]
    fn rejected_keystroke_leaves_value_unchanged() {
        let mut value = MaskedValue::new(MaskPattern::date(), "2");
        assert_eq!(value.type_char('a'), Edit::Unchanged);
        assert_eq!(value.as_str(), "2");
    }

    #[test]
    fn empty_input_has_no_literals() {
        let value = MaskedValue::new(MaskPattern::date(), "");
        assert!(value.is_empty());
        assert_eq!(MaskPattern::date().conform("").value, "");
        assert_eq!(MaskPattern::date().conform("x/").value, "");
    }

    #[test]
    fn trailing_literal_waits_for_next_character() {
        assert_eq!(typed(MaskPattern::date(), "25").as_str(), "25");
        assert_eq!(typed(MaskPattern::date(), "251").as_str(), "25/1");
    }

    #[test]
    fn typed_literal_is_consumed() {
        assert_eq!(typed(MaskPattern::date(), "25/").as_str(), "25/");
        assert_eq!(typed(MaskPattern::date(), "25/12/2021").as_str(), "25/12/2021");
    }

    #[test]
    fn leading_literal_appears_with_first_character() {
        let phone = MaskPattern::parse("(999) 999").unwrap();
        assert_eq!(phone.conform("").value, "");
        assert_eq!(phone.conform("5").value, "(5");
        assert_eq!(phone.conform("555123").value, "(555) 123");
    }

    #[test]
    fn paste_truncates_at_pattern_length() {
        let mut value = MaskedValue::new(MaskPattern::date(), "");
        assert_eq!(value.paste("251220219999"), Edit::Changed);
        assert_eq!(value.as_str(), "25/12/2021");
        assert!(value.is_complete());
        assert!(MaskPattern::date().conform("251220219999").truncated);
    }

    #[test]
    fn paste_into_complete_value_is_unchanged() {
        let mut value = MaskedValue::new(MaskPattern::date(), "25122021");
        assert_eq!(value.paste("7"), Edit::Unchanged);
        assert_eq!(value.as_str(), "25/12/2021");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut value = MaskedValue::new(MaskPattern::date(), "25/1");
        assert_eq!(value.backspace(), Edit::Changed);
        assert_eq!(value.as_str(), "25/");
    }

    #[test]
    fn backspace_over_literal_removes_digit_before_it() {
        let mut value = MaskedValue::new(MaskPattern::date(), "25/");
        assert_eq!(value.backspace(), Edit::Changed);
        assert_eq!(value.as_str(), "2");
    }

    #[test]
    fn backspace_on_empty_is_unchanged() {
        let mut value = MaskedValue::new(MaskPattern::date(), "");
        assert_eq!(value.backspace(), Edit::Unchanged);
    }

    #[test]
    fn deleting_inner_literal_shifts_digits_left() {
        let mut value = MaskedValue::new(MaskPattern::date(), "21/12");
        assert_eq!(value.apply_input("2112"), Edit::Changed);
        assert_eq!(value.as_str(), "21/2");
    }

    #[test]
    fn apply_input_inserts_in_middle() {
        let mut value = MaskedValue::new(MaskPattern::date(), "21/12");
        assert_eq!(value.apply_input("215/12"), Edit::Changed);
        // The typed `/` now lands on a digit slot and is dropped
        assert_eq!(value.as_str(), "21/51/2");
    }

    #[test]
    fn apply_input_with_rejected_character_is_unchanged() {
        let mut value = MaskedValue::new(MaskPattern::date(), "21");
        assert_eq!(value.apply_input("21x"), Edit::Unchanged);
        assert_eq!(value.as_str(), "21");
    }

    #[test]
    fn unmasked_drops_literals() {
        let value = MaskedValue::new(MaskPattern::date(), "25/12/2021");
        assert_eq!(value.unmasked(), "25122021");
    }

    #[test]
    fn deleting_leading_literal_removes_first_digit() {
        let phone = MaskPattern::parse("(999) 999").unwrap();
        let mut value = MaskedValue::new(phone.clone(), "5");
        assert_eq!(value.as_str(), "(5");
        assert_eq!(value.apply_input("5"), Edit::Changed);
        assert_eq!(value.as_str(), "");

        let mut value = MaskedValue::new(phone, "555123");
        assert_eq!(value.apply_input("555) 123"), Edit::Changed);
        assert_eq!(value.as_str(), "(551) 23");
    }

    #[test]
    fn backspace_over_lone_leading_literal_empties_value() {
        let mut value = MaskedValue::new(MaskPattern::parse("(999)").unwrap(), "(");
        assert_eq!(value.as_str(), "(");
        assert_eq!(value.backspace(), Edit::Changed);
        assert!(value.is_empty());
    }

    #[test]
    fn reset_conforms_without_deletion_rules() {
        let mut value = MaskedValue::new(MaskPattern::date(), "21/12");
        // `2112` would be read as a deleted `/` by apply_input
        assert_eq!(value.reset("2112"), Edit::Unchanged);
        assert_eq!(value.as_str(), "21/12");

        assert_eq!(value.reset("25122021"), Edit::Changed);
        assert_eq!(value.as_str(), "25/12/2021");

        assert_eq!(value.reset(""), Edit::Changed);
        assert!(value.is_empty());
        assert_eq!(value.reset(""), Edit::Unchanged);
    }

    #[test]
    fn clear_empties_value() {
        let mut value = MaskedValue::new(MaskPattern::date(), "25/12");
        value.clear();
        assert!(value.is_empty());
        assert_eq!(value.pattern(), &MaskPattern::date());
    }

    #[test]
    fn placeholder_classes() {
        assert!(PlaceholderClass::Digit.matches('7'));
        assert!(!PlaceholderClass::Digit.matches('x'));
        assert!(PlaceholderClass::Letter.matches('x'));
        assert!(!PlaceholderClass::Letter.matches('7'));
        assert!(PlaceholderClass::Alphanumeric.matches('7'));
        assert!(PlaceholderClass::Alphanumeric.matches('x'));
        assert!(!PlaceholderClass::Alphanumeric.matches('-'));
    }
}
