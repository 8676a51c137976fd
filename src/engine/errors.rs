use crate::domain::{ParticipantId, RoundNumber};

use thiserror::Error;

/// Ошибки движка жеребьёвки.
///
/// Это нарушения контракта со стороны вызывающего кода: "застрявший"
/// без пары участник или повторный бай ошибками не считаются.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Для жеребьёвки нужно минимум 2 участника, передано {found}")]
    NotEnoughParticipants { found: usize },

    #[error("Участник {0} передан дважды")]
    DuplicateParticipant(ParticipantId),

    #[error("В туре {round} встречается неизвестный участник {participant}")]
    UnknownParticipant {
        round: RoundNumber,
        participant: ParticipantId,
    },

    #[error("Участник {participant} посажен дважды в туре {round}")]
    ParticipantPairedTwice {
        round: RoundNumber,
        participant: ParticipantId,
    },
}
