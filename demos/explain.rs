// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::process::ExitCode;

use regex_explain::{annotate, render, REFERENCE_PATTERN};

// usage: cargo run --example explain [PATTERN]
pub fn main() -> ExitCode {
    let expression = std::env::args()
        .nth(1)
        .unwrap_or_else(|| REFERENCE_PATTERN.to_owned());

    match annotate(&expression) {
        Ok(pattern) => {
            print!("{}", render(&pattern));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.with_source(&expression));
            ExitCode::FAILURE
        }
    }
}
