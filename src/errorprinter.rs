// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::error::ExplainError;

impl ExplainError {
    /// Formats the error together with the expression it refers to.
    ///
    /// When the error carries a location, a line of `^` markers is printed
    /// under the offending chars, e.g.
    ///
    /// ```text
    /// Unsupported pattern at position 43..44: Only the pattern "^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,6})$" is supported, expect char '6'.
    /// ^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,8})$
    ///                                            ^
    /// ```
    pub fn with_source(&self, source: &str) -> String {
        match self {
            ExplainError::UnsupportedPattern(_, Some(location)) => {
                let total = source.chars().count();
                let indent = location.index.min(total);
                let width = location.length.max(1);
                format!(
                    "{}\n{}\n{}{}",
                    self,
                    source,
                    " ".repeat(indent),
                    "^".repeat(width)
                )
            }
            _ => format!("{}\n{}", self, source),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        annotator::annotate, construct::ConstructKind, error::ExplainError, location::Location,
    };

    #[test]
    fn test_with_source_marks_location() {
        let err = ExplainError::UnsupportedPattern(
            "Unsupported construct \"|\".".to_owned(),
            Some(Location::new_range(2, 1)),
        );

        assert_eq!(
            err.with_source("ab|cd"),
            "Unsupported pattern at position 2..3: Unsupported construct \"|\".\nab|cd\n  ^"
        );

        let err = ExplainError::UnsupportedPattern(
            "Unexpected end of expression.".to_owned(),
            Some(Location::new_position(3)),
        );

        assert_eq!(
            err.with_source("[ab"),
            "Unsupported pattern at position 3: Unexpected end of expression.\n[ab\n   ^"
        );

        let err = ExplainError::UnsupportedPattern(
            "Incomplete charset.".to_owned(),
            Some(Location::new_range(1, 3)),
        );

        assert_eq!(
            err.with_source("a[bc"),
            "Unsupported pattern at position 1..4: Incomplete charset.\na[bc\n ^^^"
        );
    }

    #[test]
    fn test_with_source_for_annotate_error() {
        let expression = r"^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,8})$";
        let err = annotate(expression).unwrap_err();
        let printed = err.with_source(expression);
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Unsupported pattern at position 43..44:"));
        assert!(lines[0].ends_with("expect char '6'."));
        assert_eq!(lines[1], expression);
        assert_eq!(lines[2], format!("{}^", " ".repeat(43)));

        // the marker sits under the differing char
        assert_eq!(expression.chars().nth(43), Some('8'));
    }

    #[test]
    fn test_with_source_without_location() {
        let err = ExplainError::UnknownConstruct(ConstructKind::Literal, "#".to_owned());
        assert_eq!(
            err.with_source("a#b"),
            "Unknown literal construct: \"#\".\na#b"
        );
    }
}
