//! Translation between English text and six-dot braille
//!
//! Forward translation ([`encode`]) turns text into a sequence of cells,
//! backward translation ([`decode`]) turns cells back into text. Which of the
//! two applies to a given input is decided by [`Direction::detect`].

mod decoder;
mod detector;
mod encoder;

pub use decoder::{DecoderState, UNKNOWN, decode};
pub use detector::is_braille;
pub use encoder::encode;

use enumset::EnumSetType;

#[derive(EnumSetType, Debug)]
pub enum Direction {
    /// From text to braille
    Forward,
    /// From braille to text
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}
