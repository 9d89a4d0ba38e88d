// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::location::Location;

#[derive(Debug, PartialEq)]
pub struct CharWithPosition {
    pub character: char,
    pub position: Location,
}

impl CharWithPosition {
    pub fn new(character: char, position: Location) -> Self {
        Self {
            character,
            position,
        }
    }
}

/// Pairs every char of an expression with its char index.
pub struct CharsWithPositionIter<'a> {
    upstream: &'a mut dyn Iterator<Item = char>,
    current_position: Location,
}

impl<'a> CharsWithPositionIter<'a> {
    pub fn new(upstream: &'a mut dyn Iterator<Item = char>) -> Self {
        Self {
            upstream,
            current_position: Location::new_position(0),
        }
    }
}

impl Iterator for CharsWithPositionIter<'_> {
    type Item = CharWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        match self.upstream.next() {
            Some(c) => {
                let last_position = self.current_position;
                self.current_position.index += 1;
                Some(CharWithPosition::new(c, last_position))
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        charwithposition::{CharWithPosition, CharsWithPositionIter},
        location::Location,
    };

    #[test]
    fn test_chars_with_position_iter() {
        let mut chars = r"a\.文".chars();
        let mut char_position_iter = CharsWithPositionIter::new(&mut chars);

        assert_eq!(
            char_position_iter.next(),
            Some(CharWithPosition::new('a', Location::new_position(0)))
        );

        assert_eq!(
            char_position_iter.next(),
            Some(CharWithPosition::new('\\', Location::new_position(1)))
        );

        assert_eq!(
            char_position_iter.next(),
            Some(CharWithPosition::new('.', Location::new_position(2)))
        );

        // positions count chars, not utf-8 bytes
        assert_eq!(
            char_position_iter.next(),
            Some(CharWithPosition::new('文', Location::new_position(3)))
        );

        assert!(char_position_iter.next().is_none());
    }
}
