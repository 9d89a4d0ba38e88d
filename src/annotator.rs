// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    catalog::ConstructCatalog,
    construct::{AnnotatedPattern, BracketItem, CaptureGroup, Construct},
    error::ExplainError,
    lexer::lex_from_str,
    location::Location,
    token::{Token, TokenWithRange},
};

/// The email pattern this crate explains.
pub const REFERENCE_PATTERN: &str = r"^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,6})$";

// what each capturing group of the reference pattern captures, by group number
const GROUP_TOPICS: &[&str] = &["username", "domain name", "extension"];

const DEFAULT_GROUP_TOPIC: &str = "sub-pattern";

/// Splits the expression into constructs and binds each one to
/// its explanation from the builtin catalog.
pub fn annotate(expression: &str) -> Result<AnnotatedPattern, ExplainError> {
    annotate_with_catalog(expression, &ConstructCatalog::new())
}

pub fn annotate_with_catalog(
    expression: &str,
    catalog: &ConstructCatalog,
) -> Result<AnnotatedPattern, ExplainError> {
    check_reference_pattern(expression)?;
    decompose(expression, catalog)
}

fn check_reference_pattern(expression: &str) -> Result<(), ExplainError> {
    if expression == REFERENCE_PATTERN {
        return Ok(());
    }

    if expression.is_empty() {
        return Err(ExplainError::UnsupportedPattern(
            "Empty expression.".to_owned(),
            None,
        ));
    }

    let actual_length = expression.chars().count();

    // the first char which differs from the reference pattern
    let index = expression
        .chars()
        .zip(REFERENCE_PATTERN.chars())
        .position(|(actual, expected)| actual != expected)
        .unwrap_or_else(|| actual_length.min(REFERENCE_PATTERN.chars().count()));

    let message = match REFERENCE_PATTERN.chars().nth(index) {
        Some(expected) => format!(
            "Only the pattern \"{}\" is supported, expect char '{}'.",
            REFERENCE_PATTERN, expected
        ),
        None => format!(
            "Only the pattern \"{}\" is supported, unexpected trailing chars.",
            REFERENCE_PATTERN
        ),
    };

    let location = if index < actual_length {
        Location::new_range(index, 1)
    } else {
        Location::new_position(index)
    };

    Err(ExplainError::UnsupportedPattern(message, Some(location)))
}

fn slice_text(chars: &[char], range: &Location) -> String {
    chars[range.index..range.end_index()].iter().collect()
}

// the decomposition itself, without the reference pattern check
fn decompose(
    expression: &str,
    catalog: &ConstructCatalog,
) -> Result<AnnotatedPattern, ExplainError> {
    let chars: Vec<char> = expression.chars().collect();
    let token_with_ranges = lex_from_str(expression)?;

    let mut constructs: Vec<Construct> = vec![];
    let mut groups: Vec<CaptureGroup> = vec![];

    // (group number, location of the `(`)
    let mut open_groups: Vec<(usize, Location)> = vec![];
    let mut next_group_number = 1;

    for TokenWithRange { token, range } in token_with_ranges {
        let literal_text = slice_text(&chars, &range);
        let kind = token.construct_kind();
        let explanation = catalog.lookup(kind, &literal_text)?;

        let group = match &token {
            Token::GroupStart => {
                let number = next_group_number;
                next_group_number += 1;
                open_groups.push((number, range));
                Some(number)
            }
            Token::GroupEnd => {
                let (number, start) = open_groups.pop().ok_or_else(|| {
                    ExplainError::UnsupportedPattern(
                        "Unmatched right parenthesis \")\".".to_owned(),
                        Some(range),
                    )
                })?;

                groups.push(CaptureGroup {
                    number,
                    topic: GROUP_TOPICS
                        .get(number - 1)
                        .copied()
                        .unwrap_or(DEFAULT_GROUP_TOPIC),
                    range: Location::from_range_pair(&start, &range),
                });

                Some(number)
            }
            _ => open_groups.last().map(|(number, _)| *number),
        };

        let items = match &token {
            Token::CharSet(items) => items
                .iter()
                .map(|item| {
                    let text = slice_text(&chars, &item.range);
                    let explanation = catalog.lookup_bracket_item(&text)?;
                    Ok(BracketItem { text, explanation })
                })
                .collect::<Result<Vec<BracketItem>, ExplainError>>()?,
            _ => vec![],
        };

        constructs.push(Construct {
            kind,
            literal_text,
            explanation,
            range,
            group,
            items,
        });
    }

    if let Some((_, start)) = open_groups.first() {
        return Err(ExplainError::UnsupportedPattern(
            "Unclosed group, expect \")\".".to_owned(),
            Some(*start),
        ));
    }

    // inner groups close first
    groups.sort_by_key(|g| g.number);

    Ok(AnnotatedPattern {
        source: expression.to_owned(),
        constructs,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        catalog::ConstructCatalog, construct::ConstructKind, error::ExplainError,
        location::Location,
    };

    use super::{annotate, annotate_with_catalog, decompose, REFERENCE_PATTERN};

    fn unsupported_location(expression: &str) -> Option<Location> {
        match annotate(expression) {
            Err(ExplainError::UnsupportedPattern(_, location)) => location,
            other => panic!("expect an unsupported pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_annotate_reference_pattern() {
        let pattern = annotate(REFERENCE_PATTERN).unwrap();

        let fragments: Vec<(ConstructKind, &str)> = pattern
            .constructs
            .iter()
            .map(|c| (c.kind, c.literal_text.as_str()))
            .collect();

        assert_eq!(
            fragments,
            vec![
                (ConstructKind::Anchor, "^"),
                (ConstructKind::Group, "("),
                (ConstructKind::CharacterClass, r"[a-z0-9_\.-]"),
                (ConstructKind::Quantifier, "+"),
                (ConstructKind::Group, ")"),
                (ConstructKind::Literal, "@"),
                (ConstructKind::Group, "("),
                (ConstructKind::CharacterClass, r"[\da-z\.-]"),
                (ConstructKind::Quantifier, "+"),
                (ConstructKind::Group, ")"),
                (ConstructKind::Literal, r"\."),
                (ConstructKind::Group, "("),
                (ConstructKind::CharacterClass, r"[a-z\.]"),
                (ConstructKind::Quantifier, "{2,6}"),
                (ConstructKind::Group, ")"),
                (ConstructKind::Anchor, "$"),
            ]
        );

        assert_eq!(pattern.source, REFERENCE_PATTERN);
    }

    #[test]
    fn test_concatenation_reproduces_source() {
        let pattern = annotate(REFERENCE_PATTERN).unwrap();
        assert_eq!(pattern.text(), REFERENCE_PATTERN);

        // ranges are contiguous
        let mut expected_index = 0;
        for construct in &pattern.constructs {
            assert_eq!(construct.range.index, expected_index);
            expected_index = construct.range.end_index();
        }
        assert_eq!(expected_index, REFERENCE_PATTERN.chars().count());
    }

    #[test]
    fn test_annotate_groups() {
        let pattern = annotate(REFERENCE_PATTERN).unwrap();

        let groups: Vec<(usize, &str, String)> = pattern
            .groups
            .iter()
            .map(|g| (g.number, g.topic, pattern.group_text(g)))
            .collect();

        assert_eq!(
            groups,
            vec![
                (1, "username", r"([a-z0-9_\.-]+)".to_owned()),
                (2, "domain name", r"([\da-z\.-]+)".to_owned()),
                (3, "extension", r"([a-z\.]{2,6})".to_owned()),
            ]
        );

        let membership: Vec<Option<usize>> = pattern.constructs.iter().map(|c| c.group).collect();
        assert_eq!(
            membership,
            vec![
                None,
                Some(1),
                Some(1),
                Some(1),
                Some(1),
                None,
                Some(2),
                Some(2),
                Some(2),
                Some(2),
                None,
                Some(3),
                Some(3),
                Some(3),
                Some(3),
                None,
            ]
        );
    }

    #[test]
    fn test_annotate_bracket_items() {
        let pattern = annotate(REFERENCE_PATTERN).unwrap();

        let items: Vec<Vec<&str>> = pattern
            .constructs_of_kind(ConstructKind::CharacterClass)
            .map(|c| c.items.iter().map(|i| i.text.as_str()).collect())
            .collect();

        assert_eq!(
            items,
            vec![
                vec!["a-z", "0-9", "_", r"\.", "-"],
                vec![r"\d", "a-z", r"\.", "-"],
                vec!["a-z", r"\."],
            ]
        );

        // the other kinds have no members
        assert!(pattern
            .constructs
            .iter()
            .filter(|c| c.kind != ConstructKind::CharacterClass)
            .all(|c| c.items.is_empty()));
    }

    #[test]
    fn test_annotate_unsupported() {
        assert_eq!(
            annotate(""),
            Err(ExplainError::UnsupportedPattern(
                "Empty expression.".to_owned(),
                None
            ))
        );

        // a different extension length
        let expression = r"^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,8})$";
        assert_eq!(
            unsupported_location(expression),
            Some(Location::new_range(43, 1))
        );

        // trailing chars
        let expression = format!("{} ", REFERENCE_PATTERN);
        assert_eq!(
            unsupported_location(&expression),
            Some(Location::new_range(47, 1))
        );

        // truncated
        let expression = &REFERENCE_PATTERN[..REFERENCE_PATTERN.len() - 1];
        assert_eq!(
            unsupported_location(expression),
            Some(Location::new_position(46))
        );

        // simple patterns are rejected too, even when the catalog knows them
        let location = unsupported_location("a+");
        assert_eq!(location, Some(Location::new_range(0, 1)));

        // only the differing char is marked
        assert_eq!(
            unsupported_location(r"^([A-Z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,6})$"),
            Some(Location::new_range(3, 1))
        );
    }

    #[test]
    fn test_annotate_unknown_construct() {
        // a catalog without the bounded quantifier
        let catalog = ConstructCatalog::from_entries(
            &[
                (ConstructKind::Anchor, "^", "start"),
                (ConstructKind::Anchor, "$", "end"),
                (ConstructKind::Quantifier, "+", "one or more"),
                (ConstructKind::CharacterClass, r"[a-z0-9_\.-]", "user"),
                (ConstructKind::CharacterClass, r"[\da-z\.-]", "domain"),
                (ConstructKind::CharacterClass, r"[a-z\.]", "ext"),
                (ConstructKind::Group, "(", "open"),
                (ConstructKind::Group, ")", "close"),
                (ConstructKind::Literal, "@", "at"),
                (ConstructKind::Literal, r"\.", "dot"),
            ],
            &[
                ("a-z", "lowercase"),
                ("0-9", "digit"),
                (r"\d", "digit"),
                ("_", "underscore"),
                (r"\.", "dot"),
                ("-", "hyphen"),
            ],
        );

        assert_eq!(
            annotate_with_catalog(REFERENCE_PATTERN, &catalog),
            Err(ExplainError::UnknownConstruct(
                ConstructKind::Quantifier,
                "{2,6}".to_owned()
            ))
        );

        // a catalog without bracket members
        let catalog = ConstructCatalog::from_entries(
            &[
                (ConstructKind::Anchor, "^", "start"),
                (ConstructKind::Group, "(", "open"),
                (ConstructKind::CharacterClass, r"[a-z0-9_\.-]", "user"),
            ],
            &[],
        );

        assert_eq!(
            annotate_with_catalog(REFERENCE_PATTERN, &catalog),
            Err(ExplainError::UnknownConstruct(
                ConstructKind::CharacterClass,
                "a-z".to_owned()
            ))
        );
    }

    #[test]
    fn test_decompose_nested_groups() {
        let catalog = ConstructCatalog::from_entries(
            &[
                (ConstructKind::Group, "(", "open"),
                (ConstructKind::Group, ")", "close"),
                (ConstructKind::Literal, "a", "letter a"),
                (ConstructKind::Literal, "b", "letter b"),
            ],
            &[],
        );

        let pattern = decompose("((a)b)", &catalog).unwrap();

        let groups: Vec<(usize, Location)> =
            pattern.groups.iter().map(|g| (g.number, g.range)).collect();
        assert_eq!(
            groups,
            vec![
                (1, Location::new_range(0, 6)),
                (2, Location::new_range(1, 3))
            ]
        );

        let membership: Vec<Option<usize>> = pattern.constructs.iter().map(|c| c.group).collect();
        assert_eq!(
            membership,
            vec![Some(1), Some(2), Some(2), Some(2), Some(1), Some(1)]
        );
    }

    #[test]
    fn test_decompose_unbalanced_groups() {
        let catalog = ConstructCatalog::from_entries(
            &[
                (ConstructKind::Group, "(", "open"),
                (ConstructKind::Group, ")", "close"),
                (ConstructKind::Literal, "a", "letter a"),
            ],
            &[],
        );

        assert_eq!(
            decompose("a)", &catalog),
            Err(ExplainError::UnsupportedPattern(
                "Unmatched right parenthesis \")\".".to_owned(),
                Some(Location::new_range(1, 1))
            ))
        );

        assert_eq!(
            decompose("(a", &catalog),
            Err(ExplainError::UnsupportedPattern(
                "Unclosed group, expect \")\".".to_owned(),
                Some(Location::new_range(0, 1))
            ))
        );
    }
}
