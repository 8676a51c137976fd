use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::color::Color;
use crate::domain::points::Points;
use crate::domain::{MatchId, ParticipantId, RoundNumber};

/// Кто сидит за доской.
///
/// Вариант "никого нет" не выразим в принципе – раньше это был
/// некорректный матч с двумя пустыми сторонами.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchSides {
    /// Обычная партия.
    Paired {
        white: ParticipantId,
        black: ParticipantId,
    },
    /// Бай: участнику не нашлось пары (нечётное поле).
    Bye { participant: ParticipantId },
}

/// Итог партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// Победа указанного цвета.
    Decisive(Color),
    Draw,
    /// Партия ещё не сыграна / результат не внесён.
    AwaitingResult,
    /// Автоматическая победа по баю.
    ByeWin,
}

impl Outcome {
    pub const WHITE_WINS: Outcome = Outcome::Decisive(Color::White);
    pub const BLACK_WINS: Outcome = Outcome::Decisive(Color::Black);

    pub fn is_final(self) -> bool {
        !matches!(self, Outcome::AwaitingResult)
    }
}

/// Нотация результата: `1-0`, `0-1`, `1/2-1/2`, `*` (ждём), `+` (бай).
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Decisive(Color::White) => "1-0",
            Outcome::Decisive(Color::Black) => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::AwaitingResult => "*",
            Outcome::ByeWin => "+",
        };
        f.write_str(s)
    }
}

impl FromStr for Outcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-0" => Ok(Outcome::WHITE_WINS),
            "0-1" => Ok(Outcome::BLACK_WINS),
            "1/2-1/2" | "½-½" | "=" => Ok(Outcome::Draw),
            "*" => Ok(Outcome::AwaitingResult),
            "+" => Ok(Outcome::ByeWin),
            other => Err(DomainError::UnknownOutcome(other.to_string())),
        }
    }
}

/// Ошибки доменной модели (форма матча, внесение результата).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Match {match_id} has neither a white nor a black participant")]
    EmptyMatch { match_id: MatchId },

    #[error("Match {match_id} is a bye, its result cannot be changed")]
    ResultOnBye { match_id: MatchId },

    #[error("Bye outcome is not allowed on paired match {match_id}")]
    ByeOutcomeOnPairedMatch { match_id: MatchId },

    #[error("Participant {participant} cannot play against themselves in match {match_id}")]
    SelfPairing {
        match_id: MatchId,
        participant: ParticipantId,
    },

    #[error("Unknown result notation: {0:?}")]
    UnknownOutcome(String),
}

/// Одна запланированная партия тура.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    /// Номер тура, с 1.
    pub round: RoundNumber,
    pub sides: MatchSides,
    pub outcome: Outcome,
}

impl Match {
    /// Новая партия, результат ещё не внесён.
    pub fn paired(id: MatchId, round: RoundNumber, white: ParticipantId, black: ParticipantId) -> Self {
        Self {
            id,
            round,
            sides: MatchSides::Paired { white, black },
            outcome: Outcome::AwaitingResult,
        }
    }

    /// Бай сразу считается разрешённым.
    pub fn bye(id: MatchId, round: RoundNumber, participant: ParticipantId) -> Self {
        Self {
            id,
            round,
            sides: MatchSides::Bye { participant },
            outcome: Outcome::ByeWin,
        }
    }

    /// Сборка из "плоской" формы: две опциональные стороны + результат.
    ///
    /// Одна пустая сторона = бай; старая конвенция "бай с результатом
    /// в ожидании" нормализуется в `Outcome::ByeWin`.
    pub fn from_sides(
        id: MatchId,
        round: RoundNumber,
        white: Option<ParticipantId>,
        black: Option<ParticipantId>,
        outcome: Outcome,
    ) -> Result<Self, DomainError> {
        match (white, black) {
            (None, None) => Err(DomainError::EmptyMatch { match_id: id }),
            (Some(participant), None) | (None, Some(participant)) => {
                Ok(Match::bye(id, round, participant))
            }
            (Some(w), Some(b)) => {
                if w == b {
                    return Err(DomainError::SelfPairing {
                        match_id: id,
                        participant: w,
                    });
                }
                if outcome == Outcome::ByeWin {
                    return Err(DomainError::ByeOutcomeOnPairedMatch { match_id: id });
                }
                Ok(Self {
                    id,
                    round,
                    sides: MatchSides::Paired { white: w, black: b },
                    outcome,
                })
            }
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self.sides, MatchSides::Bye { .. })
    }

    /// Бай разрешён всегда, что бы ни лежало в `outcome`.
    pub fn is_resolved(&self) -> bool {
        self.is_bye() || self.outcome.is_final()
    }

    /// Привести бай к `Outcome::ByeWin` (записи из хранилища могут
    /// нести старое "ждём результат").
    pub fn normalize_bye(&mut self) {
        if self.is_bye() {
            self.outcome = Outcome::ByeWin;
        }
    }

    /// Соперник участника в этой партии (для бая – `None`).
    pub fn opponent_of(&self, participant: ParticipantId) -> Option<ParticipantId> {
        match self.sides {
            MatchSides::Paired { white, black } if white == participant => Some(black),
            MatchSides::Paired { white, black } if black == participant => Some(white),
            _ => None,
        }
    }

    pub fn color_of(&self, participant: ParticipantId) -> Option<Color> {
        match self.sides {
            MatchSides::Paired { white, .. } if white == participant => Some(Color::White),
            MatchSides::Paired { black, .. } if black == participant => Some(Color::Black),
            _ => None,
        }
    }

    /// Сколько очков партия принесла участнику.
    ///
    /// `None` – участник в партии не задействован.
    pub fn points_for(&self, participant: ParticipantId) -> Option<Points> {
        if let MatchSides::Bye { participant: p } = self.sides {
            return (p == participant).then_some(Points::ONE);
        }

        let color = self.color_of(participant)?;
        let points = match self.outcome {
            Outcome::Decisive(winner) if winner == color => Points::ONE,
            Outcome::Decisive(_) => Points::ZERO,
            Outcome::Draw => Points::HALF,
            Outcome::AwaitingResult => Points::ZERO,
            // Не должно встречаться на партии с двумя сторонами.
            Outcome::ByeWin => Points::ZERO,
        };
        Some(points)
    }

    /// Внести (или исправить) результат партии.
    pub fn set_outcome(&mut self, outcome: Outcome) -> Result<(), DomainError> {
        if self.is_bye() {
            return Err(DomainError::ResultOnBye { match_id: self.id });
        }
        if outcome == Outcome::ByeWin {
            return Err(DomainError::ByeOutcomeOnPairedMatch { match_id: self.id });
        }
        self.outcome = outcome;
        Ok(())
    }
}
