use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Source encodings the devolver understands.
///
/// Parsing is lenient about case and punctuation, see [`names_match`].
///
/// # Example
/// ```
/// use dv_core::charset::Charset;
/// assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::Utf8);
/// assert_eq!("ISO_8859_1".parse::<Charset>().unwrap(), Charset::Latin1);
/// assert!("ebcdic".parse::<Charset>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum Charset {
    /// UTF-8, decoded rune by rune.
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    /// ISO-8859-1, one byte per character.
    #[serde(rename = "latin1")]
    Latin1,
}

/// How a reference name is compared against user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameStyle {
    /// Word lists must be equal: `iso-8859-1` matches `ISO_8859_1` but not `iso8859-1`.
    Words,
    /// Separators are ignored entirely: `utf-8` matches `UTF8` and `Utf_8`.
    Acronym,
}

/// Accepted spellings, in lookup order.
const ALIASES: &[(&str, NameStyle, Charset)] = &[
    ("utf-8", NameStyle::Acronym, Charset::Utf8),
    ("latin-1", NameStyle::Acronym, Charset::Latin1),
    ("iso-8859-1", NameStyle::Words, Charset::Latin1),
];

impl Charset {
    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALIASES
            .iter()
            .find(|(reference, style, _)| names_match(s, reference, *style))
            .map(|&(_, _, charset)| charset)
            .ok_or_else(|| CoreError::UnknownCharset { name: s.to_string() })
    }
}

impl TryFrom<String> for Charset {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Split a name into lowercase words.
///
/// Word boundaries are runs of non-alphanumeric characters and
/// lowercase→uppercase transitions (`CamelCase`).
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if prev_lower && ch.is_ascii_uppercase() {
                words.push(std::mem::take(&mut current));
            }
            current.push(ch.to_ascii_lowercase());
            prev_lower = ch.is_ascii_lowercase();
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Compare a user-supplied name with a reference spelling.
///
/// # Example
/// ```
/// use dv_core::charset::{names_match, NameStyle};
/// assert!(names_match("My_Option", "my-option", NameStyle::Words));
/// assert!(names_match("MyOption", "my-option", NameStyle::Words));
/// assert!(!names_match("myoption", "my-option", NameStyle::Words));
/// assert!(names_match("UTF8", "utf-8", NameStyle::Acronym));
/// ```
#[must_use]
pub fn names_match(given: &str, reference: &str, style: NameStyle) -> bool {
    let given = split_words(given);
    let reference = split_words(reference);
    match style {
        NameStyle::Words => given == reference,
        NameStyle::Acronym => !given.is_empty() && given.concat() == reference.concat(),
    }
}
