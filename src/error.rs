// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{construct::ConstructKind, location::Location};

#[derive(Debug, PartialEq, Clone)]
pub enum ExplainError {
    /// The expression is not one this crate can explain.
    /// The location, when known, points at the first offending char.
    UnsupportedPattern(String, Option<Location>),

    /// The catalog has no entry for the given fragment text.
    UnknownConstruct(ConstructKind, String),
}

impl Display for ExplainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExplainError::UnsupportedPattern(msg, Some(location)) => {
                write!(f, "Unsupported pattern at {}: {}", location, msg)
            }
            ExplainError::UnsupportedPattern(msg, None) => {
                write!(f, "Unsupported pattern: {}", msg)
            }
            ExplainError::UnknownConstruct(kind, text) => {
                write!(f, "Unknown {} construct: \"{}\".", kind, text)
            }
        }
    }
}

impl std::error::Error for ExplainError {}
