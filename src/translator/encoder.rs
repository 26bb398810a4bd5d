//! Forward translation from text to braille cells

use std::{iter::Peekable, str::Chars};

use log::debug;

use crate::{
    braille::{Cell, to_markers},
    symbol::{CAPITAL_SHIFT, NUMBER_SHIFT, SPACE, Symbol, symbol_table},
};

/// Translate `input` from text to braille cell markers.
///
/// The input is split into words at every single space. Each pair of
/// adjacent words is separated by a blank cell, even if one of them is empty,
/// so runs of spaces are preserved. A run of digits is preceded by one number
/// shift, each uppercase letter by a capital shift. Any other character is
/// dropped.
pub fn encode(input: &str) -> String {
    let mut cells = Vec::new();
    let mut words = input.split(' ').peekable();
    while let Some(word) = words.next() {
        encode_word(word, &mut cells);
        if words.peek().is_some() {
            cells.push(SPACE);
        }
    }
    to_markers(&cells).trim().to_string()
}

fn encode_word(word: &str, cells: &mut Vec<Cell>) {
    let table = symbol_table();
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            cells.push(NUMBER_SHIFT);
            cells.extend(table.encode(Symbol::Digit(c)));
            encode_digit_run(&mut chars, cells);
        } else if c.is_ascii_alphabetic() {
            if c.is_ascii_uppercase() {
                cells.push(CAPITAL_SHIFT);
            }
            cells.extend(table.encode(Symbol::Letter(c.to_ascii_lowercase())));
        } else {
            debug!("Dropping untranslatable character {:?}", c);
        }
    }
}

fn encode_digit_run(chars: &mut Peekable<Chars<'_>>, cells: &mut Vec<Cell>) {
    let table = symbol_table();
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        cells.extend(table.encode(Symbol::Digit(digit)));
    }
}
