use serde::{Deserialize, Serialize};

use crate::domain::color::{Color, ColorTally};
use crate::domain::points::Points;
use crate::domain::ParticipantId;

/// Участник турнира.
///
/// `id`, `name`, `affiliation` задаются при регистрации и не меняются.
/// Остальные поля – производные от истории туров: их целиком
/// пересчитывает `engine::standings::recompute_standings`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Школа / клуб / сообщество.
    pub affiliation: String,

    /// Сумма очков (победы, ничьи, баи).
    pub score: Points,
    /// С кем уже играл, в порядке туров. Повторы запрещены.
    pub opponents_played: Vec<ParticipantId>,
    /// Сколько раз получал бай.
    pub byes: u32,
    /// Сумма текущих очков всех соперников.
    pub buchholz: Points,
    /// Цвета по сыгранным партиям (баи сюда не попадают).
    pub color_history: Vec<Color>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            affiliation: affiliation.into(),
            score: Points::ZERO,
            opponents_played: Vec::new(),
            byes: 0,
            buchholz: Points::ZERO,
            color_history: Vec::new(),
        }
    }

    /// Копия с обнулёнными турнирными полями.
    pub fn with_reset_standing(&self) -> Self {
        Self::new(self.id, self.name.clone(), self.affiliation.clone())
    }

    pub fn color_tally(&self) -> ColorTally {
        ColorTally::from_history(&self.color_history)
    }

    pub fn games_played(&self) -> usize {
        self.color_history.len()
    }
}
