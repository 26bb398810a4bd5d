//! The symbol table mapping letters, digits and indicators to braille cells
//!
//! There is a single table for the whole process. Digits do not have cells
//! of their own, `1` to `9` and `0` share the cells of the letters `a` to
//! `j`. Which of the two a cell stands for is only known to a decoder that
//! keeps track of the number mode, so the reverse lookup keeps all
//! [`candidates`](SymbolTable::candidates) of a cell.

use std::collections::HashMap;

use enumset::enum_set;
use once_cell::sync::Lazy;

use crate::braille::{Cell, Dot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A lowercase ASCII letter
    Letter(char),
    /// An ASCII digit
    Digit(char),
    /// Indicates that the next letter is uppercase
    CapitalShift,
    /// Indicates that the next cell is a digit
    NumberShift,
    Space,
}

impl Symbol {
    pub fn is_letter(&self) -> bool {
        matches!(self, Symbol::Letter(_))
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    /// The plain text character of the symbol, `None` for indicators
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Letter(c) | Symbol::Digit(c) => Some(*c),
            Symbol::Space => Some(' '),
            Symbol::CapitalShift | Symbol::NumberShift => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Letter(c) | Symbol::Digit(c) => write!(f, "{}", c),
            Symbol::CapitalShift => write!(f, "capital"),
            Symbol::NumberShift => write!(f, "number"),
            Symbol::Space => write!(f, "space"),
        }
    }
}

pub const CAPITAL_SHIFT: Cell = Cell::new(enum_set!(Dot::Dot6));
pub const NUMBER_SHIFT: Cell = Cell::new(enum_set!(Dot::Dot3 | Dot::Dot4 | Dot::Dot5 | Dot::Dot6));
pub const SPACE: Cell = Cell::new(enum_set!());

const LETTERS: [(char, Cell); 26] = [
    ('a', Cell::new(enum_set!(Dot::Dot1))),
    ('b', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2))),
    ('c', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot4))),
    ('d', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot4 | Dot::Dot5))),
    ('e', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot5))),
    ('f', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot4))),
    (
        'g',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot4 | Dot::Dot5)),
    ),
    ('h', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot5))),
    ('i', Cell::new(enum_set!(Dot::Dot2 | Dot::Dot4))),
    ('j', Cell::new(enum_set!(Dot::Dot2 | Dot::Dot4 | Dot::Dot5))),
    ('k', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3))),
    ('l', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot3))),
    ('m', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot4))),
    (
        'n',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot4 | Dot::Dot5)),
    ),
    ('o', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot5))),
    (
        'p',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot3 | Dot::Dot4)),
    ),
    (
        'q',
        Cell::new(enum_set!(
            Dot::Dot1 | Dot::Dot2 | Dot::Dot3 | Dot::Dot4 | Dot::Dot5
        )),
    ),
    (
        'r',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot3 | Dot::Dot5)),
    ),
    ('s', Cell::new(enum_set!(Dot::Dot2 | Dot::Dot3 | Dot::Dot4))),
    (
        't',
        Cell::new(enum_set!(Dot::Dot2 | Dot::Dot3 | Dot::Dot4 | Dot::Dot5)),
    ),
    ('u', Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot6))),
    (
        'v',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot3 | Dot::Dot6)),
    ),
    (
        'w',
        Cell::new(enum_set!(Dot::Dot2 | Dot::Dot4 | Dot::Dot5 | Dot::Dot6)),
    ),
    (
        'x',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot4 | Dot::Dot6)),
    ),
    (
        'y',
        Cell::new(enum_set!(
            Dot::Dot1 | Dot::Dot3 | Dot::Dot4 | Dot::Dot5 | Dot::Dot6
        )),
    ),
    (
        'z',
        Cell::new(enum_set!(Dot::Dot1 | Dot::Dot3 | Dot::Dot5 | Dot::Dot6)),
    ),
];

/// Digits in the order of the letters whose cells they share
const DIGITS: &str = "1234567890";

static SYMBOL_TABLE: Lazy<SymbolTable> = Lazy::new(SymbolTable::compile);

/// The process wide symbol table
pub fn symbol_table() -> &'static SymbolTable {
    &SYMBOL_TABLE
}

#[derive(Debug)]
pub struct SymbolTable {
    /// All entries in insertion order
    entries: Vec<(Symbol, Cell)>,
    cells: HashMap<Symbol, Cell>,
    /// All symbols sharing a cell, in insertion order
    symbols: HashMap<Cell, Vec<Symbol>>,
}

impl SymbolTable {
    fn compile() -> Self {
        let letters = LETTERS.iter().map(|(c, cell)| (Symbol::Letter(*c), *cell));
        let digits = DIGITS
            .chars()
            .zip(LETTERS.iter())
            .map(|(d, (_, cell))| (Symbol::Digit(d), *cell));
        let indicators = [
            (Symbol::CapitalShift, CAPITAL_SHIFT),
            (Symbol::NumberShift, NUMBER_SHIFT),
            (Symbol::Space, SPACE),
        ];

        let mut table = SymbolTable {
            entries: Vec::new(),
            cells: HashMap::new(),
            symbols: HashMap::new(),
        };
        for (symbol, cell) in letters.chain(digits).chain(indicators) {
            table.insert(symbol, cell);
        }
        table
    }

    fn insert(&mut self, symbol: Symbol, cell: Cell) {
        self.entries.push((symbol, cell));
        self.cells.insert(symbol, cell);
        self.symbols.entry(cell).or_default().push(symbol);
    }

    /// The cell for `symbol`, or `None` if the symbol is not part of the table
    /// (such as a letter outside of `a` to `z`).
    pub fn encode(&self, symbol: Symbol) -> Option<Cell> {
        self.cells.get(&symbol).copied()
    }

    /// The symbol that was inserted last for `cell`. For the cells of the
    /// letters `a` to `j` this is the digit.
    pub fn decode(&self, cell: &Cell) -> Option<Symbol> {
        self.candidates(cell).last().copied()
    }

    /// All symbols that share `cell`
    pub fn candidates(&self, cell: &Cell) -> &[Symbol] {
        self.symbols.get(cell).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Symbol, Cell)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(markers: &str) -> Cell {
        markers.parse().unwrap()
    }

    #[test]
    fn encode_letters() {
        let table = symbol_table();
        assert_eq!(table.encode(Symbol::Letter('a')), Some(cell("O.....")));
        assert_eq!(table.encode(Symbol::Letter('k')), Some(cell("O...O.")));
        assert_eq!(table.encode(Symbol::Letter('w')), Some(cell(".OOO.O")));
        assert_eq!(table.encode(Symbol::Letter('y')), Some(cell("OO.OOO")));
        assert_eq!(table.encode(Symbol::Letter('z')), Some(cell("O..OOO")));
        assert_eq!(table.encode(Symbol::Letter('A')), None);
    }

    #[test]
    fn encode_digits() {
        let table = symbol_table();
        assert_eq!(table.encode(Symbol::Digit('1')), Some(cell("O.....")));
        assert_eq!(table.encode(Symbol::Digit('9')), Some(cell(".OO...")));
        assert_eq!(table.encode(Symbol::Digit('0')), Some(cell(".OOO..")));
    }

    #[test]
    fn encode_indicators() {
        let table = symbol_table();
        assert_eq!(table.encode(Symbol::CapitalShift), Some(cell(".....O")));
        assert_eq!(table.encode(Symbol::NumberShift), Some(cell(".O.OOO")));
        assert_eq!(table.encode(Symbol::Space), Some(cell("......")));
    }

    #[test]
    fn letter_and_indicator_cells_are_distinct() {
        let table = symbol_table();
        let mut cells: Vec<Cell> = LETTERS.iter().map(|(_, c)| *c).collect();
        cells.extend([CAPITAL_SHIFT, NUMBER_SHIFT, SPACE]);
        let count = cells.len();
        cells.sort_by_key(|c| c.to_string());
        cells.dedup();
        assert_eq!(cells.len(), count);
        assert_eq!(table.iter().count(), 26 + 10 + 3);
    }

    #[test]
    fn digits_share_letter_cells() {
        let table = symbol_table();
        assert_eq!(
            table.candidates(&cell("O.....")),
            &[Symbol::Letter('a'), Symbol::Digit('1')]
        );
        assert_eq!(
            table.candidates(&cell(".OOO..")),
            &[Symbol::Letter('j'), Symbol::Digit('0')]
        );
        assert_eq!(table.candidates(&cell("O...O.")), &[Symbol::Letter('k')]);
        assert!(table.candidates(&cell("OOOOOO")).is_empty());
    }

    #[test]
    fn decode_returns_last_inserted() {
        let table = symbol_table();
        assert_eq!(table.decode(&cell("O.....")), Some(Symbol::Digit('1')));
        assert_eq!(table.decode(&cell("O..OOO")), Some(Symbol::Letter('z')));
        assert_eq!(table.decode(&cell(".....O")), Some(Symbol::CapitalShift));
        assert_eq!(table.decode(&cell("OOOOOO")), None);
    }
}
