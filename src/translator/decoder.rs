//! Backward translation from braille cells to text
//!
//! The decoder walks the input one cell at a time and keeps track of two
//! indicators in a [`DecoderState`]:
//! * a capital shift makes the next letter uppercase,
//! * a number shift makes the next cell a digit.
//!
//! Both are independent of each other. A pending capital shift survives a
//! number shift and the digit that follows it, and only a letter consumes it.

use log::{debug, trace};

use crate::{
    braille::{CELL_WIDTH, Cell},
    symbol::{CAPITAL_SHIFT, NUMBER_SHIFT, SPACE, Symbol, symbol_table},
};

/// Replacement for a cell that cannot be translated
pub const UNKNOWN: char = '?';

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DecoderState {
    capitalize_next: bool,
    number_mode: bool,
}

impl DecoderState {
    pub fn capitalize_next(&self) -> bool {
        self.capitalize_next
    }

    pub fn number_mode(&self) -> bool {
        self.number_mode
    }

    /// The transition method of the decoder.
    ///
    /// Takes the next cell, or `None` if the next group of markers does not
    /// form a valid cell, and returns the character to emit for it. Shift
    /// cells only change the state and emit nothing.
    pub fn next(&mut self, cell: Option<&Cell>) -> Option<char> {
        let table = symbol_table();
        match cell {
            Some(c) if *c == CAPITAL_SHIFT => {
                self.capitalize_next = true;
                None
            }
            Some(c) if *c == NUMBER_SHIFT => {
                self.number_mode = true;
                None
            }
            _ if self.number_mode => {
                // a number shift only applies to a single cell
                self.number_mode = false;
                let digit = cell
                    .and_then(|c| find(table.candidates(c), Symbol::is_digit))
                    .unwrap_or(UNKNOWN);
                Some(digit)
            }
            Some(c) if *c == SPACE => Some(' '),
            _ => match cell.and_then(|c| find(table.candidates(c), Symbol::is_letter)) {
                Some(letter) if self.capitalize_next => {
                    self.capitalize_next = false;
                    Some(letter.to_ascii_uppercase())
                }
                Some(letter) => Some(letter),
                None => Some(UNKNOWN),
            },
        }
    }
}

fn find(candidates: &[Symbol], predicate: fn(&Symbol) -> bool) -> Option<char> {
    candidates
        .iter()
        .find(|s| predicate(*s))
        .and_then(Symbol::as_char)
}

/// Translate `input` from braille cell markers to text.
///
/// The input is consumed [`CELL_WIDTH`] markers at a time. A trailing
/// fragment that is too short for a cell, or a group containing anything
/// but markers, is translated as [`UNKNOWN`]. Leading and trailing
/// whitespace is trimmed from the result.
pub fn decode(input: &str) -> String {
    let markers: Vec<char> = input.chars().collect();
    let mut state = DecoderState::default();
    let mut output = String::new();
    for chunk in markers.chunks(CELL_WIDTH) {
        let fragment: String = chunk.iter().collect();
        let cell = match fragment.parse::<Cell>() {
            Ok(cell) => Some(cell),
            Err(e) => {
                debug!("Cannot decode {:?}: {}", fragment, e);
                None
            }
        };
        let emitted = state.next(cell.as_ref());
        trace!("{} -> {:?} ({:?})", fragment, emitted, state);
        output.extend(emitted);
    }
    output.trim().to_string()
}
