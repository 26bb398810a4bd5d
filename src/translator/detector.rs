use log::debug;

use crate::{braille::is_marker, translator::Direction};

/// Is `input` written in braille cell markers only?
///
/// The empty string counts as braille.
pub fn is_braille(input: &str) -> bool {
    input.chars().all(is_marker)
}

impl Direction {
    /// The direction in which `input` needs to be translated
    pub fn detect(input: &str) -> Self {
        let direction = if is_braille(input) {
            Direction::Backward
        } else {
            Direction::Forward
        };
        debug!("Detected {} translation for {:?}", direction, input);
        direction
    }
}
