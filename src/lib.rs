//! Translation between English text and six-dot braille
//!
//! Braille is written as a sequence of fixed width cells of six dot
//! markers, `O` for a raised and `.` for a flat dot, see [`braille::Cell`].
//! [`translate`] detects which way an input needs to go and returns the
//! translation in the opposite representation:
//!
//! ```
//! assert_eq!(brailler::translate("Hi"), ".....OO.OO...OO...");
//! assert_eq!(brailler::translate(".....OO.OO...OO..."), "Hi");
//! ```

pub mod braille;
pub mod symbol;
pub mod translator;
pub mod yaml;

pub use translator::Direction;

/// Translate `input` to or from braille depending on whether it consists of
/// braille cell markers only.
pub fn translate(input: &str) -> String {
    translate_with(input, Direction::detect(input))
}

/// Translate `input` in the given `direction`
pub fn translate_with(input: &str, direction: Direction) -> String {
    match direction {
        Direction::Forward => translator::encode(input),
        Direction::Backward => translator::decode(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_text() {
        assert_eq!(translate("abc"), "O.....O.O...OO....");
        assert_eq!(translate("42"), ".O.OOOOO.O..O.O...");
    }

    #[test]
    fn translate_braille() {
        assert_eq!(translate("O.....O.O...OO...."), "abc");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn round_trip() {
        for text in ["Hello World", "abc", "x y z", "Braille"] {
            assert_eq!(translate(&translate(text)), text);
        }
    }

    #[test]
    fn forced_direction() {
        // "O" is braille by detection but can be forced through the encoder
        assert_eq!(translate_with("O", Direction::Forward), ".....OO..OO.");
        assert_eq!(translate_with("O", Direction::Backward), "?");
    }
}
