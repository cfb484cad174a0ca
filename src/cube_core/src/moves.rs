//! The fourteen legal moves and the exact sticker transfer each one performs.

use crate::faces::{
    Face::{Back, Down, Front, Left, Right, Up},
    Faces, Grid,
};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A legal move. The discriminant is the move identifier used by history,
/// oracles, and any serialized scramble or solution.
///
/// Moves come in inverse pairs `(0, 1), (2, 3), ... (12, 13)`: the even
/// member of a pair is undone by the odd one and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Move {
    R = 0,
    RPrime = 1,
    L = 2,
    LPrime = 3,
    F = 4,
    FPrime = 5,
    B = 6,
    BPrime = 7,
    U = 8,
    UPrime = 9,
    D = 10,
    DPrime = 11,
    M = 12,
    MPrime = 13,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Move identifier {0} is out of range, expected a value between 0 and 13")]
pub struct InvalidMoveError(pub u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown move {0:?}, expected one of R R' L L' F F' B B' U U' D D' M M'")]
pub struct MoveParseError(pub String);

impl Move {
    pub const COUNT: usize = 14;

    /// Every move in identifier order.
    pub const ALL: [Move; Move::COUNT] = [
        Move::R,
        Move::RPrime,
        Move::L,
        Move::LPrime,
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
        Move::M,
        Move::MPrime,
    ];

    /// The quarter turns of the six outer faces. Scrambles are drawn from
    /// this set.
    pub const FACE_TURNS: [Move; 12] = [
        Move::R,
        Move::RPrime,
        Move::L,
        Move::LPrime,
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::ALL[inverse_of_valid_id(self.id()) as usize]
    }

    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Move::M | Move::MPrime)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::R => "R",
            Move::RPrime => "R'",
            Move::L => "L",
            Move::LPrime => "L'",
            Move::F => "F",
            Move::FPrime => "F'",
            Move::B => "B",
            Move::BPrime => "B'",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::D => "D",
            Move::DPrime => "D'",
            Move::M => "M",
            Move::MPrime => "M'",
        }
    }
}

// Only ever called with ids below `Move::COUNT`.
const fn inverse_of_valid_id(id: u8) -> u8 {
    if id % 2 == 0 { id + 1 } else { id - 1 }
}

/// Invert a raw move identifier by the even/odd pairing rule.
///
/// # Errors
///
/// If `id` does not name one of the fourteen moves.
pub fn inverse_id(id: u8) -> Result<u8, InvalidMoveError> {
    Move::try_from(id).map(|move_| move_.inverse().id())
}

impl TryFrom<u8> for Move {
    type Error = InvalidMoveError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(InvalidMoveError(id))
    }
}

impl From<Move> for u8 {
    fn from(move_: Move) -> u8 {
        move_.id()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|move_| move_.name() == s)
            .ok_or_else(|| MoveParseError(s.to_owned()))
    }
}

/// Parse a whitespace separated sequence of move names such as `"R U' M"`.
///
/// # Errors
///
/// If any token is not a move name.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// The sequence that undoes `moves`: every move inverted, in reverse order.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

fn col<T: Copy>(grid: &Grid<T>, c: usize) -> [T; 3] {
    [grid[0][c], grid[1][c], grid[2][c]]
}

fn row<T: Copy>(grid: &Grid<T>, r: usize) -> [T; 3] {
    grid[r]
}

fn set_col<T: Copy>(grid: &mut Grid<T>, c: usize, values: [T; 3]) {
    for (cells, value) in grid.iter_mut().zip(values) {
        cells[c] = value;
    }
}

fn set_row<T: Copy>(grid: &mut Grid<T>, r: usize, values: [T; 3]) {
    grid[r] = values;
}

fn rev<T>(mut values: [T; 3]) -> [T; 3] {
    values.reverse();
    values
}

/// Quarter rotation with `k = 1`: `out[i][j] = grid[j][2 - i]`.
fn rot90<T: Copy>(grid: &Grid<T>) -> Grid<T> {
    std::array::from_fn(|i| std::array::from_fn(|j| grid[j][2 - i]))
}

/// Quarter rotation with `k = 3`: `out[i][j] = grid[2 - j][i]`.
fn rot270<T: Copy>(grid: &Grid<T>) -> Grid<T> {
    std::array::from_fn(|i| std::array::from_fn(|j| grid[2 - j][i]))
}

/// Apply `move_` to a snapshot of all six faces, producing the next faces.
///
/// Faces feed each other's edges, so every read below goes to `s`, the
/// untouched snapshot, and every write goes to `out`. Reading from `out`
/// would pick up stickers already moved by the same turn.
#[must_use]
pub fn transform<T: Copy>(s: &Faces<T>, move_: Move) -> Faces<T> {
    let mut out = *s;
    match move_ {
        Move::R => {
            set_col(&mut out[Up], 2, col(&s[Front], 2));
            set_col(&mut out[Down], 2, col(&s[Back], 2));
            out[Right] = rot90(&s[Right]);
            set_col(&mut out[Front], 2, col(&s[Down], 2));
            set_col(&mut out[Back], 2, col(&s[Up], 2));
        }
        Move::RPrime => {
            set_col(&mut out[Up], 2, col(&s[Back], 2));
            set_col(&mut out[Down], 2, col(&s[Front], 2));
            out[Right] = rot270(&s[Right]);
            set_col(&mut out[Front], 2, col(&s[Up], 2));
            set_col(&mut out[Back], 2, col(&s[Down], 2));
        }
        Move::L => {
            set_col(&mut out[Up], 0, col(&s[Back], 0));
            set_col(&mut out[Down], 0, col(&s[Front], 0));
            out[Left] = rot90(&s[Left]);
            set_col(&mut out[Front], 0, col(&s[Up], 0));
            set_col(&mut out[Back], 0, col(&s[Down], 0));
        }
        Move::LPrime => {
            set_col(&mut out[Up], 0, col(&s[Front], 0));
            set_col(&mut out[Down], 0, col(&s[Back], 0));
            out[Left] = rot270(&s[Left]);
            set_col(&mut out[Front], 0, col(&s[Down], 0));
            set_col(&mut out[Back], 0, col(&s[Up], 0));
        }
        Move::F => {
            set_row(&mut out[Up], 0, col(&s[Left], 2));
            set_row(&mut out[Down], 2, col(&s[Right], 0));
            set_col(&mut out[Left], 2, rev(row(&s[Down], 2)));
            set_col(&mut out[Right], 0, rev(row(&s[Up], 0)));
            out[Front] = rot90(&s[Front]);
        }
        Move::FPrime => {
            set_row(&mut out[Up], 0, rev(col(&s[Right], 0)));
            set_row(&mut out[Down], 2, rev(col(&s[Left], 2)));
            set_col(&mut out[Left], 2, row(&s[Up], 0));
            set_col(&mut out[Right], 0, row(&s[Down], 2));
            out[Front] = rot270(&s[Front]);
        }
        Move::B => {
            set_row(&mut out[Up], 2, rev(col(&s[Right], 2)));
            set_row(&mut out[Down], 0, rev(col(&s[Left], 0)));
            set_col(&mut out[Left], 0, row(&s[Up], 2));
            set_col(&mut out[Right], 2, row(&s[Down], 0));
            out[Back] = rot90(&s[Back]);
        }
        Move::BPrime => {
            set_row(&mut out[Up], 2, col(&s[Left], 0));
            set_row(&mut out[Down], 0, col(&s[Right], 2));
            set_col(&mut out[Left], 0, rev(row(&s[Down], 0)));
            set_col(&mut out[Right], 2, rev(row(&s[Up], 2)));
            out[Back] = rot270(&s[Back]);
        }
        Move::U => {
            out[Up] = rot90(&s[Up]);
            set_row(&mut out[Left], 2, row(&s[Front], 2));
            set_row(&mut out[Right], 2, rev(row(&s[Back], 0)));
            set_row(&mut out[Front], 2, row(&s[Right], 2));
            set_row(&mut out[Back], 0, rev(row(&s[Left], 2)));
        }
        Move::UPrime => {
            out[Up] = rot270(&s[Up]);
            set_row(&mut out[Left], 2, rev(row(&s[Back], 0)));
            set_row(&mut out[Right], 2, row(&s[Front], 2));
            set_row(&mut out[Front], 2, row(&s[Left], 2));
            set_row(&mut out[Back], 0, rev(row(&s[Right], 2)));
        }
        Move::D => {
            out[Down] = rot90(&s[Down]);
            set_row(&mut out[Left], 0, rev(row(&s[Back], 2)));
            set_row(&mut out[Right], 0, row(&s[Front], 0));
            set_row(&mut out[Front], 0, row(&s[Left], 0));
            set_row(&mut out[Back], 2, rev(row(&s[Right], 0)));
        }
        Move::DPrime => {
            out[Down] = rot270(&s[Down]);
            set_row(&mut out[Left], 0, row(&s[Front], 0));
            set_row(&mut out[Right], 0, rev(row(&s[Back], 2)));
            set_row(&mut out[Front], 0, row(&s[Right], 0));
            set_row(&mut out[Back], 2, rev(row(&s[Left], 0)));
        }
        // The middle slice never rotates a face, and Left/Right stay put
        Move::M => {
            set_col(&mut out[Up], 1, col(&s[Back], 1));
            set_col(&mut out[Down], 1, col(&s[Front], 1));
            set_col(&mut out[Front], 1, col(&s[Up], 1));
            set_col(&mut out[Back], 1, col(&s[Down], 1));
        }
        Move::MPrime => {
            set_col(&mut out[Up], 1, col(&s[Front], 1));
            set_col(&mut out[Down], 1, col(&s[Back], 1));
            set_col(&mut out[Front], 1, col(&s[Down], 1));
            set_col(&mut out[Back], 1, col(&s[Up], 1));
        }
    }
    out
}

/// The permutation a move performs on the 54 sticker positions. Position
/// `face * 9 + row * 3 + column` receives the sticker previously at
/// `permutation[position]`.
#[must_use]
pub fn sticker_permutation(move_: Move) -> [u8; 54] {
    let positions = Faces::from_fn(|face, row, col| face as u8 * 9 + row as u8 * 3 + col as u8);
    let moved = transform(&positions, move_);
    let mut permutation = [0; 54];
    for (slot, (.., source)) in permutation.iter_mut().zip(moved.iter()) {
        *slot = source;
    }
    permutation
}
