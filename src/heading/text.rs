//! Casing predicates over heading text.
//!
//! A character is *cased* when it has an uppercase or lowercase form. Digits,
//! punctuation and whitespace are uncased and never affect these checks except
//! as word separators.

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// True if the text has at least one cased character and none is uppercase.
pub fn is_lowercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            return false;
        }
        cased |= c.is_lowercase();
    }
    cased
}

/// True if the text has at least one cased character and none is lowercase.
pub fn is_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}

/// True if every run of cased characters starts uppercase and continues
/// lowercase, and there is at least one cased character.
///
/// `"1.1 Background"` and `"Annual Report"` qualify; `"Table of Contents"` and
/// `"RESULTS"` do not.
pub fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut previous_is_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_is_cased {
                return false;
            }
            previous_is_cased = true;
            cased = true;
        } else {
            previous_is_cased = false;
        }
    }
    cased
}

/// Uppercase the first cased character of every run, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_cased = false;
    for c in text.chars() {
        if previous_is_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_cased = is_cased(c);
    }
    result
}

/// True if the word's first character is uppercase.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
