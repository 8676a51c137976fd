use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Турнирные очки в полуочках: победа = 2, ничья = 1.
///
/// Храним целым числом, чтобы сравнения и суммы Бухгольца были точными
/// (без плавающей точки).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(pub u32);

impl Points {
    pub const ZERO: Points = Points(0);
    /// Ничья.
    pub const HALF: Points = Points(1);
    /// Победа или бай.
    pub const ONE: Points = Points(2);

    pub const fn from_halves(halves: u32) -> Self {
        Points(halves)
    }

    /// Целые очки (без половинок): `Points::whole(3)` = 3.0.
    pub const fn whole(points: u32) -> Self {
        Points(points.saturating_mul(2))
    }

    pub fn halves(self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Для отображения / экспорта во фронт.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

/// `3`, `2.5`, `0.5` – как в таблице результатов.
impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}
