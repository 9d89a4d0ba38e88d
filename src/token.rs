// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{construct::ConstructKind, location::Location};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    StartAssertion, // ^
    EndAssertion,   // $

    GroupStart, // (
    GroupEnd,   // )

    // the whole bracket expression, e.g. `[a-z0-9_\.-]`
    CharSet(Vec<CharSetItemWithRange>),

    // preset charset outside of brackets, e.g. `\d`
    PresetCharSet(char),

    ZeroOrMore,     // *
    ZeroOrMoreLazy, // *?
    OneOrMore,      // +
    OneOrMoreLazy,  // +?
    Optional,       // ?
    OptionalLazy,   // ??

    // {N}, {M,}, {M,N}, the bool indicates lazy, e.g. `{2,6}?`
    Repetition(Repetition, bool),

    Char(char),        // plain char, e.g. `@`
    EscapedChar(char), // escaped meta char, e.g. `\.`
}

impl Token {
    pub fn construct_kind(&self) -> ConstructKind {
        match self {
            Token::StartAssertion | Token::EndAssertion => ConstructKind::Anchor,
            Token::GroupStart | Token::GroupEnd => ConstructKind::Group,
            Token::CharSet(_) | Token::PresetCharSet(_) => ConstructKind::CharacterClass,
            Token::ZeroOrMore
            | Token::ZeroOrMoreLazy
            | Token::OneOrMore
            | Token::OneOrMoreLazy
            | Token::Optional
            | Token::OptionalLazy
            | Token::Repetition(_, _) => ConstructKind::Quantifier,
            Token::Char(_) | Token::EscapedChar(_) => ConstructKind::Literal,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Repetition {
    Specified(usize),
    AtLeast(usize),
    Range(usize, usize),
}

#[derive(Debug, PartialEq, Clone)]
pub enum CharSetItem {
    Char(char),
    EscapedChar(char),
    CharRange(char, char), // e.g. a-z
    PresetCharSet(char),   // e.g. \d
}

#[derive(Debug, PartialEq, Clone)]
pub struct CharSetItemWithRange {
    pub item: CharSetItem,
    pub range: Location,
}

impl CharSetItemWithRange {
    pub fn new(item: CharSetItem, range: Location) -> Self {
        Self { item, range }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenWithRange {
    pub token: Token,
    pub range: Location,
}

impl TokenWithRange {
    pub fn new(token: Token, range: Location) -> Self {
        Self { token, range }
    }

    pub fn from_position_and_length(token: Token, position: &Location, length: usize) -> Self {
        Self {
            token,
            range: Location::from_position_and_length(position, length),
        }
    }
}
