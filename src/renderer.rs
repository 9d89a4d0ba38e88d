// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::construct::{AnnotatedPattern, Construct, ConstructKind};

pub const REPORT_TITLE: &str = "Regex Tutorial: Matching an Email";

pub const SECTION_ANCHORS: &str = "Anchors";
pub const SECTION_QUANTIFIERS: &str = "Quantifiers";
pub const SECTION_CHARACTER_CLASSES: &str = "Character Classes";
pub const SECTION_GROUPING: &str = "Grouping and Capturing";
pub const SECTION_BRACKET_EXPRESSIONS: &str = "Bracket Expressions";
pub const SECTION_GREEDY_AND_LAZY: &str = "Greedy and Lazy Match";

#[derive(Debug, PartialEq, Clone)]
pub struct Section {
    pub title: &'static str,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub title: String,
    pub summary: String,
    pub pattern: String,
    pub sections: Vec<Section>,
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(self.title.chars().count()))?;
        for paragraph in &self.paragraphs {
            writeln!(f)?;
            writeln!(f, "{}", paragraph)?;
        }
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "    {}", self.pattern)?;
        writeln!(f)?;
        writeln!(f, "Table of Contents")?;
        writeln!(f)?;
        for section in &self.sections {
            writeln!(f, "- {}", section.title)?;
        }
        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// Renders the explanation of an annotated pattern as plain text.
pub fn render(pattern: &AnnotatedPattern) -> String {
    build_report(pattern).to_string()
}

pub fn build_report(pattern: &AnnotatedPattern) -> Report {
    Report {
        title: REPORT_TITLE.to_owned(),
        summary: build_summary(pattern),
        pattern: pattern.source.clone(),
        sections: vec![
            build_anchors_section(pattern),
            build_quantifiers_section(pattern),
            build_character_classes_section(pattern),
            build_grouping_section(pattern),
            build_bracket_expressions_section(pattern),
            build_greedy_and_lazy_section(pattern),
        ],
    }
}

fn join_topics(topics: &[&str]) -> String {
    match topics {
        [] => String::new(),
        [only] => format!("the {}", only),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|t| format!("the {}", t)).collect();
            format!("{} and the {}", head.join(", "), last)
        }
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn build_summary(pattern: &AnnotatedPattern) -> String {
    let topics: Vec<&str> = pattern.groups.iter().map(|g| g.topic).collect();
    let mut summary = format!(
        "The regular expression below is made of {}. Each one is explained in the sections that follow.",
        plural(pattern.constructs.len(), "construct", "constructs")
    );
    if !topics.is_empty() {
        summary.push_str(&format!(" It captures {}.", join_topics(&topics)));
    }
    summary
}

fn describe(construct: &Construct) -> String {
    format!("`{}` {}.", construct.literal_text, construct.explanation)
}

// quantifiers paired with the construct they repeat
fn quantifiers_with_targets(pattern: &AnnotatedPattern) -> Vec<(&Construct, Option<&Construct>)> {
    pattern
        .constructs
        .iter()
        .enumerate()
        .filter(|(_, c)| c.kind == ConstructKind::Quantifier)
        .map(|(idx, c)| (c, pattern.preceding(idx)))
        .collect()
}

fn build_anchors_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs: Vec<String> = pattern
        .constructs_of_kind(ConstructKind::Anchor)
        .map(describe)
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push("The pattern has no anchors.".to_owned());
    }

    Section {
        title: SECTION_ANCHORS,
        paragraphs,
    }
}

fn build_quantifiers_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs: Vec<String> = quantifiers_with_targets(pattern)
        .into_iter()
        .map(|(quantifier, target)| match target {
            Some(target) => format!(
                "`{}` after `{}` {}.",
                quantifier.literal_text, target.literal_text, quantifier.explanation
            ),
            None => describe(quantifier),
        })
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push("The pattern has no quantifiers.".to_owned());
    }

    Section {
        title: SECTION_QUANTIFIERS,
        paragraphs,
    }
}

fn build_character_classes_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs: Vec<String> = pattern
        .constructs_of_kind(ConstructKind::CharacterClass)
        .map(describe)
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push("The pattern has no character classes.".to_owned());
    }

    Section {
        title: SECTION_CHARACTER_CLASSES,
        paragraphs,
    }
}

fn build_grouping_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs = vec![format!(
        "The pattern has {}. The text matched inside each pair of parentheses is captured and can be referenced by the group number.",
        plural(pattern.groups.len(), "capturing group", "capturing groups")
    )];

    for group in &pattern.groups {
        let mut lines = vec![format!(
            "Group {} `{}` captures the {}:",
            group.number,
            pattern.group_text(group),
            group.topic
        )];

        lines.extend(
            pattern
                .constructs
                .iter()
                .filter(|c| c.group == Some(group.number) && c.kind != ConstructKind::Group)
                .map(|c| format!("- {}", describe(c))),
        );

        paragraphs.push(lines.join("\n"));
    }

    paragraphs.extend(
        pattern
            .constructs_of_kind(ConstructKind::Literal)
            .filter(|c| c.group.is_none())
            .map(|c| format!("Outside the groups, {}", describe(c))),
    );

    Section {
        title: SECTION_GROUPING,
        paragraphs,
    }
}

fn build_bracket_expressions_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs = vec![
        "A bracket expression lists the characters allowed at a single position. \
A range such as `a-z` stands for every character between its two ends."
            .to_owned(),
    ];

    for construct in pattern
        .constructs_of_kind(ConstructKind::CharacterClass)
        .filter(|c| !c.items.is_empty())
    {
        let mut lines = vec![format!("`{}` allows:", construct.literal_text)];
        lines.extend(
            construct
                .items
                .iter()
                .map(|item| format!("- `{}` {}", item.text, item.explanation)),
        );
        paragraphs.push(lines.join("\n"));
    }

    Section {
        title: SECTION_BRACKET_EXPRESSIONS,
        paragraphs,
    }
}

fn build_greedy_and_lazy_section(pattern: &AnnotatedPattern) -> Section {
    let mut paragraphs = vec![
        "Quantifiers are greedy by default: they match as many characters as they can and \
give some back only when the rest of the pattern would otherwise fail. \
Adding `?` after a quantifier makes it lazy, so it matches as few characters as it can."
            .to_owned(),
    ];

    paragraphs.extend(
        quantifiers_with_targets(pattern)
            .into_iter()
            .map(|(quantifier, target)| {
                let (mode, other_mode) = if quantifier.is_lazy_quantifier() {
                    ("lazy", "greedy")
                } else {
                    ("greedy", "lazy")
                };

                let subject = match target {
                    Some(target) => format!(
                        "`{}` after `{}`",
                        quantifier.literal_text, target.literal_text
                    ),
                    None => format!("`{}`", quantifier.literal_text),
                };

                format!(
                    "{} is {}, the {} form would be `{}`.",
                    subject,
                    mode,
                    other_mode,
                    quantifier.toggled_quantifier()
                )
            }),
    );

    Section {
        title: SECTION_GREEDY_AND_LAZY,
        paragraphs,
    }
}
