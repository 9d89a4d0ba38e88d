// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{construct::ConstructKind, error::ExplainError};

// (kind, literal text, explanation)
pub type CatalogEntry = (ConstructKind, &'static str, &'static str);

// (member text, explanation)
pub type BracketItemEntry = (&'static str, &'static str);

// Besides the fragments of the email pattern, the builtin tables also know
// the lazy quantifiers, `\w`, `\s` and `A-Z`. `annotate` never produces them,
// they serve catalogs composed with `ConstructCatalog::from_entries`.
const BUILTIN_ENTRIES: &[CatalogEntry] = &[
    // anchors
    (
        ConstructKind::Anchor,
        "^",
        "matches the position at the start of the string, so nothing may come before the username",
    ),
    (
        ConstructKind::Anchor,
        "$",
        "matches the position at the end of the string, so nothing may come after the extension",
    ),
    // greedy quantifiers
    (
        ConstructKind::Quantifier,
        "+",
        "matches the preceding item one or more times",
    ),
    (
        ConstructKind::Quantifier,
        "*",
        "matches the preceding item zero or more times",
    ),
    (
        ConstructKind::Quantifier,
        "?",
        "matches the preceding item zero or one time, making it optional",
    ),
    (
        ConstructKind::Quantifier,
        "{2,6}",
        "matches the preceding item between 2 to 6 characters in length, at least 2 and at most 6 times",
    ),
    // lazy quantifiers
    (
        ConstructKind::Quantifier,
        "+?",
        "matches the preceding item one or more times, as few times as possible",
    ),
    (
        ConstructKind::Quantifier,
        "*?",
        "matches the preceding item zero or more times, as few times as possible",
    ),
    (
        ConstructKind::Quantifier,
        "??",
        "matches the preceding item zero or one time, preferring zero",
    ),
    (
        ConstructKind::Quantifier,
        "{2,6}?",
        "matches the preceding item between 2 to 6 characters in length, as few as possible",
    ),
    // character classes
    (
        ConstructKind::CharacterClass,
        r"[a-z0-9_\.-]",
        "matches one lowercase letter, digit, underscore, dot or hyphen",
    ),
    (
        ConstructKind::CharacterClass,
        r"[\da-z\.-]",
        "matches one digit, lowercase letter, dot or hyphen",
    ),
    (
        ConstructKind::CharacterClass,
        r"[a-z\.]",
        "matches one lowercase letter or dot",
    ),
    (
        ConstructKind::CharacterClass,
        r"\d",
        "matches one digit, the same as [0-9]",
    ),
    (
        ConstructKind::CharacterClass,
        r"\w",
        "matches one word character, the same as [A-Za-z0-9_]",
    ),
    (
        ConstructKind::CharacterClass,
        r"\s",
        "matches one whitespace character such as a space, tab or line break",
    ),
    // groups
    (
        ConstructKind::Group,
        "(",
        "opens a capturing group, the text matched inside it is kept so it can be referenced later",
    ),
    (ConstructKind::Group, ")", "closes the capturing group"),
    // literals
    (
        ConstructKind::Literal,
        "@",
        "matches the literal \"@\" that separates the username from the domain name",
    ),
    (
        ConstructKind::Literal,
        r"\.",
        "matches a literal dot; the backslash escapes the dot, which would otherwise match any character",
    ),
];

const BUILTIN_BRACKET_ITEMS: &[BracketItemEntry] = &[
    ("a-z", "any lowercase letter from a to z"),
    ("A-Z", "any uppercase letter from A to Z"),
    ("0-9", "any digit from 0 to 9"),
    (r"\d", "any digit, the same as 0-9"),
    ("_", "an underscore"),
    (
        r"\.",
        "a literal dot (the escape is optional, a dot has no special meaning inside brackets)",
    ),
    (
        "-",
        "a literal hyphen (it is the last member, so it cannot be read as a range)",
    ),
];

/// A read-only table of construct meanings.
#[derive(Debug, Clone)]
pub struct ConstructCatalog {
    entries: Vec<CatalogEntry>,
    bracket_items: Vec<BracketItemEntry>,
}

impl ConstructCatalog {
    /// The builtin catalog which covers the email pattern.
    pub fn new() -> Self {
        Self::from_entries(BUILTIN_ENTRIES, BUILTIN_BRACKET_ITEMS)
    }

    pub fn from_entries(entries: &[CatalogEntry], bracket_items: &[BracketItemEntry]) -> Self {
        Self {
            entries: entries.to_vec(),
            bracket_items: bracket_items.to_vec(),
        }
    }

    pub fn lookup(
        &self,
        kind: ConstructKind,
        literal_text: &str,
    ) -> Result<&'static str, ExplainError> {
        self.entries
            .iter()
            .find(|(entry_kind, text, _)| *entry_kind == kind && *text == literal_text)
            .map(|(_, _, explanation)| *explanation)
            .ok_or_else(|| ExplainError::UnknownConstruct(kind, literal_text.to_owned()))
    }

    pub fn lookup_bracket_item(&self, text: &str) -> Result<&'static str, ExplainError> {
        self.bracket_items
            .iter()
            .find(|(item_text, _)| *item_text == text)
            .map(|(_, explanation)| *explanation)
            .ok_or_else(|| {
                ExplainError::UnknownConstruct(ConstructKind::CharacterClass, text.to_owned())
            })
    }
}

impl Default for ConstructCatalog {
    fn default() -> Self {
        Self::new()
    }
}
