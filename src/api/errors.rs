use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::tournament::TournamentError;
use crate::domain::{MatchId, TournamentId};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, пустое имя).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Турнир не найден.
    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),

    /// Партия не найдена в текущем туре.
    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    /// Команда не может быть выполнена в текущем состоянии.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Ошибка движка жеребьёвки.
    #[error("pairing engine error: {0}")]
    EngineError(String),

    /// Внутренняя ошибка сервера.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match err {
            TournamentError::TournamentNotFound { tournament_id } => {
                ApiError::TournamentNotFound(tournament_id)
            }
            TournamentError::MatchNotFound { match_id, .. } => ApiError::MatchNotFound(match_id),
            TournamentError::InvalidConfig(_) | TournamentError::InvalidParticipant(_) => {
                ApiError::BadRequest(err.to_string())
            }
            TournamentError::Engine(e) => ApiError::from(e),
            other => ApiError::InvalidCommand(other.to_string()),
        }
    }
}
