// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Splits an expression into contiguous fragments.
//
// Recognized fragments:
//
// - ^ $        start and end anchors
// - ( )        capturing group delimiters
// - [ ]        bracket expression, lexed as a single fragment with its members:
//              chars, escaped chars, char ranges (e.g. `a-z`) and preset charsets
// - * + ?      quantifiers, each with an optional lazy suffix `?`
// - {m}        repeat
// - {m,}       at least
// - {m,n}      repeat range, also with an optional lazy suffix `?`
// - \d \w \s   preset charsets (and their upper-case negations)
// - \.         escaped meta chars, e.g. `\.`, `\(`, `\+`
// - x          any other char is a plain literal
//
// `|`, `.`, `(?...)`, negated brackets `[^...]`, back references and
// boundary assertions are rejected as unsupported.
//
// The hyphen `-` inside brackets is a literal when it is the first or
// the last member, e.g. `[ab-]`.
//
// The vocabulary is wider than the email pattern needs (lazy quantifiers,
// `{m}`, `{m,}`, preset charsets). The annotator only hands it the email
// pattern, the wider forms are covered by the tests below.

use std::iter::Peekable;

use crate::{
    charwithposition::{CharWithPosition, CharsWithPositionIter},
    error::ExplainError,
    location::Location,
    token::{CharSetItem, CharSetItemWithRange, Repetition, Token, TokenWithRange},
};

pub fn lex_from_str(s: &str) -> Result<Vec<TokenWithRange>, ExplainError> {
    let mut chars = s.chars();
    let char_position_iter = CharsWithPositionIter::new(&mut chars);
    let mut lexer = Lexer::new(char_position_iter.peekable());
    lexer.lex()
}

struct Lexer<'a> {
    upstream: Peekable<CharsWithPositionIter<'a>>,
    last_position: Option<Location>, // last position consumed
}

impl<'a> Lexer<'a> {
    fn new(upstream: Peekable<CharsWithPositionIter<'a>>) -> Self {
        Self {
            upstream,
            last_position: None,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.upstream.next() {
            Some(CharWithPosition {
                character,
                position,
            }) => {
                self.last_position = Some(position);
                Some(character)
            }
            None => None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.upstream.peek().map(|cwp| cwp.character)
    }

    fn peek_char_and_equals(&mut self, expected_char: char) -> bool {
        matches!(
            self.upstream.peek(),
            Some(CharWithPosition { character, .. }) if *character == expected_char)
    }

    // the position of the next char, or the end of the expression
    fn peek_position(&mut self) -> Location {
        let next_position = self.upstream.peek().map(|cwp| cwp.position);
        next_position.unwrap_or_else(|| self.end_position())
    }

    fn end_position(&self) -> Location {
        match &self.last_position {
            Some(position) => position.move_position_forward(),
            None => Location::new_position(0),
        }
    }

    // the range from `start` to the last consumed char (inclusive)
    fn range_from(&self, start: &Location) -> Location {
        match &self.last_position {
            Some(end) => Location::from_position_pair_with_end_included(start, end),
            None => Location::from_position_and_length(start, 0),
        }
    }

    fn expect_char(
        &mut self,
        expected_char: char,
        char_description: &str,
    ) -> Result<(), ExplainError> {
        let position = self.peek_position();
        match self.next_char() {
            Some(ch) if ch == expected_char => Ok(()),
            Some(_) => Err(ExplainError::UnsupportedPattern(
                format!("Expect char: {}.", char_description),
                Some(Location::from_position_and_length(&position, 1)),
            )),
            None => Err(ExplainError::UnsupportedPattern(
                format!(
                    "Unexpected end of expression, expect char: {}.",
                    char_description
                ),
                Some(position),
            )),
        }
    }

    fn unsupported(&self, message: &str, start: &Location, length: usize) -> ExplainError {
        ExplainError::UnsupportedPattern(
            message.to_owned(),
            Some(Location::from_position_and_length(start, length)),
        )
    }
}

impl Lexer<'_> {
    fn lex(&mut self) -> Result<Vec<TokenWithRange>, ExplainError> {
        let mut token_with_ranges = vec![];

        while let Some(current_char) = self.peek_char() {
            let start = self.peek_position();

            match current_char {
                '[' => {
                    let twr = self.lex_charset()?;
                    token_with_ranges.push(twr);
                }
                ']' => {
                    return Err(self.unsupported("Unmatched right bracket \"]\".", &start, 1));
                }
                '{' => {
                    let twr = self.lex_repetition()?;
                    token_with_ranges.push(twr);
                }
                '}' => {
                    return Err(self.unsupported("Unmatched right brace \"}\".", &start, 1));
                }
                '(' => {
                    self.next_char(); // consume '('

                    if self.peek_char_and_equals('?') {
                        return Err(self.unsupported(
                            "Non-capturing groups and lookaround assertions are not supported.",
                            &start,
                            2,
                        ));
                    }

                    token_with_ranges.push(TokenWithRange::from_position_and_length(
                        Token::GroupStart,
                        &start,
                        1,
                    ));
                }
                ')' => {
                    self.next_char(); // consume ')'
                    token_with_ranges.push(TokenWithRange::from_position_and_length(
                        Token::GroupEnd,
                        &start,
                        1,
                    ));
                }
                '?' | '+' | '*' => {
                    self.next_char(); // consume the quantifier char

                    let lazy = if self.peek_char_and_equals('?') {
                        self.next_char(); // consume '?'
                        true
                    } else {
                        false
                    };

                    let token = match (current_char, lazy) {
                        ('?', false) => Token::Optional,
                        ('?', true) => Token::OptionalLazy,
                        ('+', false) => Token::OneOrMore,
                        ('+', true) => Token::OneOrMoreLazy,
                        ('*', false) => Token::ZeroOrMore,
                        _ => Token::ZeroOrMoreLazy,
                    };

                    token_with_ranges.push(TokenWithRange::new(token, self.range_from(&start)));
                }
                '^' => {
                    self.next_char(); // consume '^'
                    token_with_ranges.push(TokenWithRange::from_position_and_length(
                        Token::StartAssertion,
                        &start,
                        1,
                    ));
                }
                '$' => {
                    self.next_char(); // consume '$'
                    token_with_ranges.push(TokenWithRange::from_position_and_length(
                        Token::EndAssertion,
                        &start,
                        1,
                    ));
                }
                '.' => {
                    return Err(self.unsupported(
                        "The wildcard \".\" is not supported, use \"\\.\" for a literal dot.",
                        &start,
                        1,
                    ));
                }
                '|' => {
                    return Err(self.unsupported("Alternation \"|\" is not supported.", &start, 1));
                }
                '\\' => {
                    let twr = self.lex_main_escaping()?;
                    token_with_ranges.push(twr);
                }
                _ => {
                    self.next_char(); // consume current char
                    token_with_ranges.push(TokenWithRange::from_position_and_length(
                        Token::Char(current_char),
                        &start,
                        1,
                    ));
                }
            }
        }

        Ok(token_with_ranges)
    }

    fn lex_main_escaping(&mut self) -> Result<TokenWithRange, ExplainError> {
        // \x?  //
        // ^ ^__// to here
        // |____// current char, validated

        let start = self.peek_position();
        self.next_char(); // consume '\'

        let token = match self.peek_char() {
            Some(c) => match c {
                // meta chars
                '(' | ')' | '{' | '}' | '[' | ']' | '+' | '*' | '?' | '.' | '|' | '^' | '$'
                | '\\' | '-' | '@' | '/' => {
                    self.next_char();
                    Token::EscapedChar(c)
                }
                // preset charsets
                'w' | 'W' | 'd' | 'D' | 's' | 'S' => {
                    self.next_char();
                    Token::PresetCharSet(c)
                }
                _ => {
                    return Err(self.unsupported(
                        &format!("Unsupported escape sequence \"\\{}\".", c),
                        &start,
                        2,
                    ));
                }
            },
            None => {
                return Err(self.unsupported("Incomplete escape sequence.", &start, 1));
            }
        };

        Ok(TokenWithRange::new(token, self.range_from(&start)))
    }

    fn lex_charset(&mut self) -> Result<TokenWithRange, ExplainError> {
        // [.....]  //
        // ^      ^_// to here
        // |________// current char, validated

        let start = self.peek_position();
        self.next_char(); // consume '['

        if self.peek_char_and_equals('^') {
            return Err(self.unsupported(
                "Negated bracket expressions are not supported.",
                &start,
                2,
            ));
        }

        let mut items: Vec<CharSetItemWithRange> = vec![];

        loop {
            let item_start = self.peek_position();

            match self.peek_char() {
                Some(']') => {
                    break;
                }
                Some('\\') => {
                    self.next_char(); // consume '\'

                    let item = match self.peek_char() {
                        Some(c @ ('w' | 'W' | 'd' | 'D' | 's' | 'S')) => {
                            self.next_char();
                            CharSetItem::PresetCharSet(c)
                        }
                        Some(
                            c @ ('[' | ']' | '\\' | '-' | '.' | '^' | '$' | '+' | '*' | '?' | '('
                            | ')' | '{' | '}' | '|'),
                        ) => {
                            self.next_char();
                            CharSetItem::EscapedChar(c)
                        }
                        Some(c) => {
                            return Err(self.unsupported(
                                &format!("Unsupported escape sequence \"\\{}\".", c),
                                &item_start,
                                2,
                            ));
                        }
                        None => {
                            return Err(self.unsupported(
                                "Incomplete escape sequence.",
                                &item_start,
                                1,
                            ));
                        }
                    };

                    items.push(CharSetItemWithRange::new(
                        item,
                        self.range_from(&item_start),
                    ));
                }
                Some(c) => {
                    self.next_char(); // consume current char
                    items.push(CharSetItemWithRange::new(
                        CharSetItem::Char(c),
                        Location::from_position_and_length(&item_start, 1),
                    ));
                }
                None => {
                    return Err(self.unsupported(
                        "Incomplete bracket expression, expect \"]\".",
                        &start,
                        self.end_position().index - start.index,
                    ));
                }
            }
        }

        if items.is_empty() {
            return Err(self.unsupported("Empty bracket expression.", &start, 2));
        }

        self.next_char(); // consume ']'

        merge_char_ranges(&mut items)?;

        Ok(TokenWithRange::new(
            Token::CharSet(items),
            self.range_from(&start),
        ))
    }

    fn lex_number(&mut self) -> Result<usize, ExplainError> {
        // 123456N  //
        // ^     ^__// to here
        // |________// current char

        let start = self.peek_position();
        let mut num_string = String::new();

        while let Some(current_char) = self.peek_char() {
            match current_char {
                '0'..='9' => {
                    num_string.push(current_char);
                    self.next_char(); // consume digit
                }
                _ => {
                    break;
                }
            }
        }

        if num_string.is_empty() {
            return Err(self.unsupported("Expect a number.", &start, 1));
        }

        num_string.parse::<usize>().map_err(|_| {
            ExplainError::UnsupportedPattern(
                format!("Can not convert \"{}\" to integer number.", num_string),
                Some(self.range_from(&start)),
            )
        })
    }

    fn lex_repetition(&mut self) -> Result<TokenWithRange, ExplainError> {
        // {...}?  //
        // ^    ^__// to here
        // |_______// from here, validated

        let start = self.peek_position();
        self.next_char(); // consume '{'

        let from = self.lex_number()?;

        let repetition = if self.peek_char_and_equals(',') {
            self.next_char(); // consume ','
            if self.peek_char_and_equals('}') {
                self.next_char(); // consume '}'
                Repetition::AtLeast(from)
            } else {
                let to = self.lex_number()?;
                self.expect_char('}', "right brace \"}\"")?;

                if to < from {
                    return Err(ExplainError::UnsupportedPattern(
                        format!("Repetition range {{{},{}}} is out of order.", from, to),
                        Some(self.range_from(&start)),
                    ));
                }

                Repetition::Range(from, to)
            }
        } else {
            self.expect_char('}', "right brace \"}\"")?;
            Repetition::Specified(from)
        };

        let lazy = if self.peek_char_and_equals('?') {
            self.next_char(); // consume '?'
            true
        } else {
            false
        };

        Ok(TokenWithRange::new(
            Token::Repetition(repetition, lazy),
            self.range_from(&start),
        ))
    }
}

// merge `x`, `-`, `y` into the char range `x-y`, e.g.
// [a-z]
//  ^ ^__ // to here
//  |____ // merge from here
//
// a hyphen at the first or last position stays a literal.
fn merge_char_ranges(items: &mut Vec<CharSetItemWithRange>) -> Result<(), ExplainError> {
    if items.len() < 3 {
        return Ok(());
    }

    let mut idx = items.len() - 2;
    while idx > 0 {
        if items[idx].item == CharSetItem::Char('-') {
            let range_start = items[idx - 1].range;
            let range_end = items[idx + 1].range;

            let char_start = if let CharSetItem::Char(c) = items[idx - 1].item {
                c
            } else {
                return Err(ExplainError::UnsupportedPattern(
                    "Expect a char for char range, e.g. \"a-z\".".to_owned(),
                    Some(range_start),
                ));
            };

            let char_end = if let CharSetItem::Char(c) = items[idx + 1].item {
                c
            } else {
                return Err(ExplainError::UnsupportedPattern(
                    "Expect a char for char range, e.g. \"a-z\".".to_owned(),
                    Some(range_end),
                ));
            };

            if char_end < char_start {
                return Err(ExplainError::UnsupportedPattern(
                    format!(
                        "Char range \"{}-{}\" is out of order.",
                        char_start, char_end
                    ),
                    Some(Location::from_range_pair(&range_start, &range_end)),
                ));
            }

            let merged = CharSetItemWithRange::new(
                CharSetItem::CharRange(char_start, char_end),
                Location::from_range_pair(&range_start, &range_end),
            );

            let pos = idx - 1;
            items.drain(pos..(pos + 3));
            items.insert(pos, merged);

            idx = idx.saturating_sub(2);
        } else {
            idx -= 1;
        }
    }

    Ok(())
}
