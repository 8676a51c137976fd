use serde::{Deserialize, Serialize};

use crate::domain::game::Outcome;
use crate::domain::{MatchId, ParticipantId, RoundNumber, TournamentId};

/// Короткая ссылка на участника: id + имя для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantRefDto {
    pub participant_id: ParticipantId,
    pub name: String,
}

/// Строка турнирной таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StandingRowDto {
    /// Место, с 1.
    pub rank: u32,
    pub participant_id: ParticipantId,
    pub name: String,
    pub affiliation: String,
    pub score: f64,
    pub buchholz: f64,
    pub byes: u32,
    pub games_played: u32,
}

/// DTO партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchViewDto {
    pub match_id: MatchId,
    pub round: RoundNumber,
    /// Для бая – `None`.
    pub white: Option<ParticipantRefDto>,
    /// Для бая – `None`.
    pub black: Option<ParticipantRefDto>,
    /// Получатель бая, если это бай.
    pub bye: Option<ParticipantRefDto>,
    pub outcome: Outcome,
    /// Нотация: "1-0", "0-1", "1/2-1/2", "*", "+".
    pub result: String,
}

/// DTO тура.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub round: RoundNumber,
    pub matches: Vec<MatchViewDto>,
    pub complete: bool,
    pub pending: u32,
}

/// DTO турнира (минимальное представление для лобби).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentViewDto {
    pub tournament_id: TournamentId,
    pub name: String,
    /// Статус в текстовом виде: "Registering", "Running", "Finished".
    pub status: String,
    pub participants_registered: u32,
    pub rounds_played: u32,
    pub total_rounds: u32,
    pub current_round_finished: bool,
    /// Только у завершённого турнира.
    pub winner: Option<ParticipantRefDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Создан новый турнир.
    TournamentCreated(TournamentViewDto),

    /// Участник зарегистрирован.
    ParticipantRegistered {
        tournament_id: TournamentId,
        participant: ParticipantRefDto,
    },

    /// Сформирован новый тур (старт турнира или следующий тур).
    RoundPaired(RoundViewDto),

    /// Состояние турнира после команды.
    TournamentState(TournamentViewDto),
}
