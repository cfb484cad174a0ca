//! Faces, sticker colors, and the six-face grid every move operates on.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// One of the six outer faces. The discriminant doubles as the face's
/// position in a [`Faces`] grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

/// A sticker color. Color `i` is the canonical color of face `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Red = 2,
    Orange = 3,
    Blue = 4,
    Green = 5,
}

/// A 3x3 face, indexed `[row][column]`.
pub type Grid<T> = [[T; 3]; 3];

/// A value for every one of the 54 sticker positions, grouped by face.
///
/// Moves are defined over any `Copy` payload so the same transfer rules can
/// move colors around (see [`crate::Stickers`]) or track where each position
/// ends up (see [`crate::moves::sticker_permutation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faces<T>(pub [Grid<T>; 6]);

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// The color every sticker of this face carries when the cube is solved.
    #[must_use]
    pub const fn canonical_color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }
}

impl Color {
    pub const COUNT: usize = 6;
    pub const ALL: [Color; Color::COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Single letter used by the plain text dump.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl<T> Index<Face> for Faces<T> {
    type Output = Grid<T>;

    fn index(&self, face: Face) -> &Grid<T> {
        &self.0[face as usize]
    }
}

impl<T> IndexMut<Face> for Faces<T> {
    fn index_mut(&mut self, face: Face) -> &mut Grid<T> {
        &mut self.0[face as usize]
    }
}

impl<T: Copy> Faces<T> {
    /// Build a grid by evaluating `f(face, row, column)` at every position.
    pub fn from_fn(f: impl Fn(Face, usize, usize) -> T) -> Self {
        Faces(std::array::from_fn(|face| {
            std::array::from_fn(|row| std::array::from_fn(|col| f(Face::ALL[face], row, col)))
        }))
    }

    /// Iterate over `(face, row, column, value)` in face-major, row-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, usize, usize, T)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self[face].iter().enumerate().flat_map(move |(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &value)| (face, row, col, value))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_colors_are_distinct() {
        let mut colors = Face::ALL.map(Face::canonical_color).to_vec();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), Color::COUNT);
        assert_eq!(Face::Front.canonical_color(), Color::Blue);
    }

    #[test]
    fn test_iter_order() {
        let labels = Faces::from_fn(|face, row, col| face as usize * 9 + row * 3 + col);
        assert!(labels.iter().map(|(.., label)| label).eq(0..54));
        let (face, row, col, _) = labels.iter().nth(40).unwrap();
        assert_eq!((face, row, col), (Face::Front, 1, 1));
    }
}
