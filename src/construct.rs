// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::location::Location;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ConstructKind {
    Anchor,
    Quantifier,
    CharacterClass,
    Group,

    // plain or escaped chars between the other constructs, e.g. `@` and `\.`
    Literal,
}

impl Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_str = match self {
            ConstructKind::Anchor => "anchor",
            ConstructKind::Quantifier => "quantifier",
            ConstructKind::CharacterClass => "character class",
            ConstructKind::Group => "group",
            ConstructKind::Literal => "literal",
        };
        f.write_str(name_str)
    }
}

/// A member of a bracket expression, e.g. `a-z` or `\d` in `[\da-z]`.
#[derive(Debug, PartialEq, Clone)]
pub struct BracketItem {
    pub text: String,
    pub explanation: &'static str,
}

/// One fragment of the source expression bound to its explanation.
#[derive(Debug, PartialEq, Clone)]
pub struct Construct {
    pub kind: ConstructKind,
    pub literal_text: String,
    pub explanation: &'static str,
    pub range: Location,

    // the number of the innermost capturing group this fragment belongs to,
    // `(` and `)` belong to the group they delimit.
    pub group: Option<usize>,

    // members of the bracket expression, only for `ConstructKind::CharacterClass`
    pub items: Vec<BracketItem>,
}

impl Construct {
    /// A quantifier followed by `?` matches as few as possible, e.g. `+?`, `{2,6}?`.
    pub fn is_lazy_quantifier(&self) -> bool {
        self.kind == ConstructKind::Quantifier
            && self.literal_text.len() > 1
            && self.literal_text.ends_with('?')
    }

    /// The greedy counterpart of a lazy quantifier and vice versa.
    pub fn toggled_quantifier(&self) -> String {
        if self.is_lazy_quantifier() {
            let mut text = self.literal_text.clone();
            text.pop();
            text
        } else {
            format!("{}?", self.literal_text)
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CaptureGroup {
    pub number: usize,
    pub topic: &'static str,

    // the range from `(` to `)`, both included
    pub range: Location,
}

/// The constructs of an expression in left-to-right order.
///
/// Concatenating the `literal_text` of all constructs reproduces `source`.
#[derive(Debug, PartialEq, Clone)]
pub struct AnnotatedPattern {
    pub source: String,
    pub constructs: Vec<Construct>,
    pub groups: Vec<CaptureGroup>,
}

impl AnnotatedPattern {
    pub fn text(&self) -> String {
        self.constructs
            .iter()
            .map(|c| c.literal_text.as_str())
            .collect()
    }

    pub fn group_text(&self, group: &CaptureGroup) -> String {
        self.constructs
            .iter()
            .filter(|c| group.range.contains(&c.range))
            .map(|c| c.literal_text.as_str())
            .collect()
    }

    pub fn constructs_of_kind(&self, kind: ConstructKind) -> impl Iterator<Item = &Construct> {
        self.constructs.iter().filter(move |c| c.kind == kind)
    }

    /// The construct right before the one at `index`, i.e. the target of a quantifier.
    pub fn preceding(&self, index: usize) -> Option<&Construct> {
        index.checked_sub(1).and_then(|i| self.constructs.get(i))
    }
}
