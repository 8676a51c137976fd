// src/domain/tournament.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::game::{DomainError, Outcome};
use crate::domain::participant::Participant;
use crate::domain::round::Round;
use crate::domain::{MatchId, ParticipantId, RoundNumber, TournamentId};
use crate::engine::pairing::PairingConfig;
use crate::engine::standings::rank_standings;
use crate::engine::EngineError;

/// Абсолютный минимум для швейцарки: меньше двух – некого спаривать.
pub const MIN_PARTICIPANTS: u32 = 2;

/// Конфигурация турнира.
/// Всё, что приходит при создании турнира через фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Название турнира.
    pub name: String,

    /// Краткое описание.
    pub description: Option<String>,

    /// Минимальное количество участников для старта (не меньше 2).
    pub min_participants: u32,

    /// Максимальное количество участников. 0 = без ограничения.
    pub max_participants: u32,

    /// Зафиксировать число туров вручную.
    ///
    /// `None` – считаем по размеру поля (`engine::total_rounds`).
    pub rounds_override: Option<u32>,

    /// Настройки жеребьёвки.
    pub pairing: PairingConfig,
}

impl TournamentConfig {
    /// Удобный пресет: только имя, остальное по умолчанию.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            min_participants: MIN_PARTICIPANTS,
            max_participants: 0,
            rounds_override: None,
            pairing: PairingConfig::default(),
        }
    }

    /// Жёсткая валидация конфига турнира.
    pub fn validate_full(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: name is empty".into(),
            ));
        }

        if self.min_participants < MIN_PARTICIPANTS {
            return Err(TournamentError::InvalidConfig(format!(
                "TournamentConfig: min_participants must be at least {MIN_PARTICIPANTS}"
            )));
        }

        if self.max_participants != 0 && self.min_participants > self.max_participants {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: min_participants > max_participants".into(),
            ));
        }

        if self.rounds_override == Some(0) {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: rounds_override = 0".into(),
            ));
        }

        Ok(())
    }
}

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    /// Идёт регистрация, туров ещё нет.
    Registering,
    /// Турнир идёт.
    Running,
    /// Последний тур сыгран полностью.
    Finished,
}

/// Состояние турнира: участники + история туров.
///
/// Очки в `participants` – производные: после каждого изменения истории
/// их пересчитывает рантайм (`tournament::TournamentRuntime`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tournament {
    pub id: TournamentId,
    pub config: TournamentConfig,
    pub status: TournamentStatus,

    /// В порядке регистрации.
    pub participants: Vec<Participant>,

    /// Туры по порядку, с 1-го.
    pub rounds: Vec<Round>,

    /// Сколько туров играем. 0 – пока не стартовали.
    pub total_rounds: u32,
}

impl Tournament {
    pub fn new(id: TournamentId, config: TournamentConfig) -> Result<Self, TournamentError> {
        config.validate_full()?;

        Ok(Self {
            id,
            config,
            status: TournamentStatus::Registering,
            participants: Vec::new(),
            rounds: Vec::new(),
            total_rounds: 0,
        })
    }

    /// Регистрируем участника (пока турнир в статусе Registering).
    pub fn register_participant(&mut self, participant: Participant) -> Result<(), TournamentError> {
        self.expect_status(TournamentStatus::Registering)?;

        if self.config.max_participants != 0
            && self.participants.len() as u32 >= self.config.max_participants
        {
            return Err(TournamentError::TournamentFull {
                tournament_id: self.id,
            });
        }

        if participant.name.trim().is_empty() {
            return Err(TournamentError::InvalidParticipant(
                "participant name is empty".into(),
            ));
        }

        if self.participant(participant.id).is_some() {
            return Err(TournamentError::AlreadyRegistered {
                participant_id: participant.id,
                tournament_id: self.id,
            });
        }

        self.participants.push(participant);
        Ok(())
    }

    /// Снять участника с регистрации (только до старта).
    pub fn unregister_participant(
        &mut self,
        participant_id: ParticipantId,
    ) -> Result<Participant, TournamentError> {
        self.expect_status(TournamentStatus::Registering)?;

        let idx = self
            .participants
            .iter()
            .position(|p| p.id == participant_id)
            .ok_or(TournamentError::NotRegistered {
                participant_id,
                tournament_id: self.id,
            })?;

        Ok(self.participants.remove(idx))
    }

    pub fn participant(&self, participant_id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Можно ли стартовать прямо сейчас.
    pub fn can_start(&self) -> bool {
        self.status == TournamentStatus::Registering
            && self.participants.len() as u32 >= self.config.min_participants.max(MIN_PARTICIPANTS)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn round(&self, number: RoundNumber) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Все результаты текущего тура внесены. Без туров – `false`.
    pub fn is_current_round_finished(&self) -> bool {
        self.current_round().is_some_and(Round::is_complete)
    }

    pub fn has_remaining_rounds(&self) -> bool {
        self.rounds_played() < self.total_rounds
    }

    /// Турнир стартовал, последний тур сыгран полностью.
    pub fn is_finished(&self) -> bool {
        self.status == TournamentStatus::Finished || self.last_round_resolved()
    }

    fn last_round_resolved(&self) -> bool {
        self.total_rounds > 0 && !self.has_remaining_rounds() && self.is_current_round_finished()
    }

    /// Внести результат партии текущего тура.
    ///
    /// Результаты прошлых туров закрыты; бай менять нельзя.
    /// Если этим результатом закрыт последний тур – турнир завершается.
    /// После завершения последний тур ещё можно исправить; сброс результата
    /// в `AwaitingResult` снова открывает турнир.
    pub fn record_result(&mut self, match_id: MatchId, outcome: Outcome) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Finished {
            self.expect_status(TournamentStatus::Running)?;
        }

        let tournament_id = self.id;
        let round = self
            .rounds
            .last_mut()
            .ok_or(TournamentError::NoRounds { tournament_id })?;

        let m = round
            .find_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound {
                match_id,
                tournament_id,
            })?;

        m.set_outcome(outcome)?;

        self.status = if self.last_round_resolved() {
            TournamentStatus::Finished
        } else {
            TournamentStatus::Running
        };

        Ok(())
    }

    /// Таблица: очки ↓, Бухгольц ↓, имя ↑.
    pub fn standings(&self) -> Vec<Participant> {
        rank_standings(&self.participants)
    }

    /// Победитель – только у завершённого турнира.
    pub fn winner(&self) -> Option<Participant> {
        if !self.is_finished() {
            return None;
        }
        self.standings().into_iter().next()
    }

    fn expect_status(&self, expected: TournamentStatus) -> Result<(), TournamentError> {
        if self.status != expected {
            return Err(TournamentError::InvalidStatus {
                expected,
                found: self.status,
            });
        }
        Ok(())
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Tournament not found: id={tournament_id}")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("Tournament is full: id={tournament_id}")]
    TournamentFull { tournament_id: TournamentId },

    #[error("Participant {participant_id} is already registered in tournament {tournament_id}")]
    AlreadyRegistered {
        participant_id: ParticipantId,
        tournament_id: TournamentId,
    },

    #[error("Participant {participant_id} is not registered in tournament {tournament_id}")]
    NotRegistered {
        participant_id: ParticipantId,
        tournament_id: TournamentId,
    },

    #[error("Invalid participant: {0}")]
    InvalidParticipant(String),

    #[error("Not enough participants to start: need {required}, have {found}")]
    NotEnoughParticipants { required: u32, found: usize },

    #[error("Invalid tournament status, expected {expected:?}, found {found:?}")]
    InvalidStatus {
        expected: TournamentStatus,
        found: TournamentStatus,
    },

    #[error("Tournament {tournament_id} has no rounds yet")]
    NoRounds { tournament_id: TournamentId },

    #[error("Match {match_id} not found in the current round of tournament {tournament_id}")]
    MatchNotFound {
        match_id: MatchId,
        tournament_id: TournamentId,
    },

    #[error("Round {round} still has {pending} pending result(s)")]
    RoundNotFinished { round: RoundNumber, pending: usize },

    #[error("All {total_rounds} rounds of tournament {tournament_id} are already paired")]
    AllRoundsPlayed {
        tournament_id: TournamentId,
        total_rounds: u32,
    },

    #[error("Invalid tournament config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
