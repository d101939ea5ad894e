//! Piece values and their categories

use crossterm::style::Color;
use std::fmt;

/// The four piece categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // Cyan - bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl PieceKind {
    /// Get the display color for this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            }, // Orange
        }
    }

    /// Get all kinds, for uniform random draws
    pub fn all() -> [PieceKind; 4] {
        [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        };
        write!(f, "{}", letter)
    }
}

/// One puzzle piece: a category plus a process-unique id
///
/// Pieces are plain values. They are created by the generator, copied between
/// containers and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}
