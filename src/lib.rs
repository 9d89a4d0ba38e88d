// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Explains the email-matching regular expression fragment by fragment.
//!
//! ```rust
//! use regex_explain::{annotate, render, REFERENCE_PATTERN};
//!
//! let pattern = annotate(REFERENCE_PATTERN).unwrap();
//! assert_eq!(pattern.text(), REFERENCE_PATTERN);
//!
//! let text = render(&pattern);
//! assert!(text.contains("between 2 to 6 characters"));
//!
//! // only the reference pattern is supported
//! assert!(annotate("[a-z]+").is_err());
//! ```

mod charwithposition;
mod errorprinter;
mod lexer;
mod location;
mod token;

pub mod annotator;
pub mod catalog;
pub mod construct;
pub mod error;
pub mod renderer;

pub use annotator::{annotate, annotate_with_catalog, REFERENCE_PATTERN};
pub use catalog::ConstructCatalog;
pub use construct::{AnnotatedPattern, BracketItem, CaptureGroup, Construct, ConstructKind};
pub use error::ExplainError;
pub use location::Location;
pub use renderer::{build_report, render, Report, Section};
