use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Цвет фигур в партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Подсчёт цветов по истории участника.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorTally {
    pub white: u32,
    pub black: u32,
}

impl ColorTally {
    pub fn from_history(history: &[Color]) -> Self {
        let mut tally = ColorTally::default();
        for color in history {
            match color {
                Color::White => tally.white += 1,
                Color::Black => tally.black += 1,
            }
        }
        tally
    }

    /// Перекос в сторону белых (отрицательный – в сторону чёрных).
    pub fn imbalance(&self) -> i64 {
        i64::from(self.white) - i64::from(self.black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{ch}")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" | "w" => Ok(Color::White),
            "B" | "b" => Ok(Color::Black),
            other => Err(format!("unknown color token: {other:?}")),
        }
    }
}
