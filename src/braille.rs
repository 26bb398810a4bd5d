//! Six-dot braille cells
//!
//! A [`Cell`] is the set of raised dots of a six-dot braille character. Its
//! textual form is a fixed-width string of six markers, [`RAISED`] or [`FLAT`],
//! reading the cell row by row:
//!
//! ```text
//! 1 4      positions 0 1
//! 2 5  =>  positions 2 3
//! 3 6      positions 4 5
//! ```
//!
//! so that `"O.O..."` are dots 1 and 2 (the letter b).

use std::str::FromStr;

use enumset::{EnumSet, EnumSetType};

/// Marker for a raised dot in the textual form of a cell
pub const RAISED: char = 'O';
/// Marker for a flat dot in the textual form of a cell
pub const FLAT: char = '.';
/// Number of markers in the textual form of a cell
pub const CELL_WIDTH: usize = 6;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid cell length {length}, expected {CELL_WIDTH} markers")]
    InvalidLength { length: usize },
    #[error("Invalid dot marker {character:?}")]
    InvalidMarker { character: char },
}

#[derive(EnumSetType, Debug)]
pub enum Dot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// The dot at each position of the textual form
const POSITIONS: [Dot; CELL_WIDTH] = [
    Dot::Dot1,
    Dot::Dot4,
    Dot::Dot2,
    Dot::Dot5,
    Dot::Dot3,
    Dot::Dot6,
];

pub fn is_marker(c: char) -> bool {
    c == RAISED || c == FLAT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(EnumSet<Dot>);

impl Cell {
    pub const fn new(dots: EnumSet<Dot>) -> Self {
        Cell(dots)
    }

    /// The dot numbers of the cell in ascending order, e.g. `"145"` for d.
    /// The blank cell is `"0"`, as braille tables usually write it.
    pub fn dot_numbers(&self) -> String {
        if self.0.is_empty() {
            return "0".to_string();
        }
        self.0.iter().map(dot_to_number).collect()
    }

    /// The cell as a character of the Unicode braille patterns block
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| dot_to_hex(&dot))
            .fold(0x2800, |acc, x| acc | x);
        // every six-dot combination lies within U+2800..U+283F
        char::from_u32(unicode).unwrap_or('\u{2800}')
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != CELL_WIDTH {
            return Err(ParseError::InvalidLength { length });
        }
        let mut dots = EnumSet::new();
        for (c, dot) in s.chars().zip(POSITIONS) {
            match c {
                RAISED => {
                    dots.insert(dot);
                }
                FLAT => (),
                character => return Err(ParseError::InvalidMarker { character }),
            }
        }
        Ok(Cell(dots))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let markers: String = POSITIONS
            .iter()
            .map(|dot| if self.0.contains(*dot) { RAISED } else { FLAT })
            .collect();
        write!(f, "{}", markers)
    }
}

fn dot_to_number(dot: Dot) -> char {
    match dot {
        Dot::Dot1 => '1',
        Dot::Dot2 => '2',
        Dot::Dot3 => '3',
        Dot::Dot4 => '4',
        Dot::Dot5 => '5',
        Dot::Dot6 => '6',
    }
}

fn dot_to_hex(dot: &Dot) -> u32 {
    match dot {
        Dot::Dot1 => 0x0001,
        Dot::Dot2 => 0x0002,
        Dot::Dot3 => 0x0004,
        Dot::Dot4 => 0x0008,
        Dot::Dot5 => 0x0010,
        Dot::Dot6 => 0x0020,
    }
}

/// Render a sequence of cells in the textual marker form
pub fn to_markers(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Re-render a marker string as Unicode braille patterns.
///
/// Complete cells are converted, anything that does not parse as a cell (a
/// short trailing fragment) is kept as is.
pub fn markers_to_unicode(markers: &str) -> String {
    let chars: Vec<char> = markers.chars().collect();
    chars
        .chunks(CELL_WIDTH)
        .map(|chunk| {
            let text: String = chunk.iter().collect();
            match text.parse::<Cell>() {
                Ok(cell) => cell.to_unicode().to_string(),
                Err(_) => text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use enumset::enum_set;

    #[test]
    fn parse_cell() {
        assert_eq!("O.....".parse::<Cell>(), Ok(Cell(enum_set!(Dot::Dot1))));
        assert_eq!(
            "O.O...".parse::<Cell>(),
            Ok(Cell(enum_set!(Dot::Dot1 | Dot::Dot2)))
        );
        assert_eq!(
            ".O.OOO".parse::<Cell>(),
            Ok(Cell(enum_set!(Dot::Dot3 | Dot::Dot4 | Dot::Dot5 | Dot::Dot6)))
        );
        assert_eq!("......".parse::<Cell>(), Ok(Cell(EnumSet::empty())));
    }

    #[test]
    fn parse_invalid_cell() {
        assert_eq!(
            "O...".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 4 })
        );
        assert_eq!(
            "".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 0 })
        );
        assert_eq!(
            "O..x..".parse::<Cell>(),
            Err(ParseError::InvalidMarker { character: 'x' })
        );
    }

    #[test]
    fn display_cell() {
        for markers in ["O.....", "OO.OOO", ".....O", "......", "OOOOOO"] {
            assert_eq!(markers.parse::<Cell>().unwrap().to_string(), markers);
        }
    }

    #[test]
    fn dot_numbers() {
        assert_eq!("OO.O..".parse::<Cell>().unwrap().dot_numbers(), "145");
        assert_eq!("......".parse::<Cell>().unwrap().dot_numbers(), "0");
    }

    #[test]
    fn unicode() {
        assert_eq!("O.....".parse::<Cell>().unwrap().to_unicode(), '⠁');
        assert_eq!(".O.OOO".parse::<Cell>().unwrap().to_unicode(), '⠼');
        assert_eq!(".....O".parse::<Cell>().unwrap().to_unicode(), '⠠');
        assert_eq!("......".parse::<Cell>().unwrap().to_unicode(), '⠀');
    }

    #[test]
    fn unicode_markers() {
        assert_eq!(markers_to_unicode(".....OO.O..."), "⠠⠃");
        assert_eq!(markers_to_unicode("O.....O."), "⠁O.");
        assert_eq!(markers_to_unicode(""), "");
    }
}
