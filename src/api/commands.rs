use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::game::Outcome;
use crate::domain::tournament::{Tournament, TournamentConfig};
use crate::domain::{MatchId, ParticipantId, TournamentId};
use crate::infra::mapping::{map_round_to_dto, map_tournament_to_dto};
use crate::tournament::TournamentLobby;

use super::dto::{CommandResponse, ParticipantRefDto};
use super::errors::ApiError;

/// Команда верхнего уровня.
///
/// Через них клиент управляет турниром:
/// - создаёт турнир;
/// - регистрирует участников;
/// - запускает турнир (жеребьёвка 1-го тура);
/// - вносит результаты;
/// - переходит к следующему туру.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    CreateTournament(CreateTournamentCommand),
    RegisterParticipant(RegisterParticipantCommand),
    /// Только до старта.
    UnregisterParticipant(UnregisterParticipantCommand),
    StartTournament(StartTournamentCommand),
    RecordResult(RecordResultCommand),
    /// Жеребьёвка следующего тура, когда текущий сыгран полностью.
    NextRound(NextRoundCommand),
}

/// Команда на создание турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTournamentCommand {
    /// Полная конфигурация турнира (см. `domain::tournament::TournamentConfig`).
    pub config: TournamentConfig,
}

/// Зарегистрировать участника в турнир. Id выдаёт турнир.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterParticipantCommand {
    pub tournament_id: TournamentId,
    pub name: String,
    /// Клуб / команда / страна; может быть пустым.
    #[serde(default)]
    pub affiliation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnregisterParticipantCommand {
    pub tournament_id: TournamentId,
    pub participant_id: ParticipantId,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartTournamentCommand {
    pub tournament_id: TournamentId,
}

/// Результат партии текущего тура.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordResultCommand {
    pub tournament_id: TournamentId,
    pub match_id: MatchId,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextRoundCommand {
    pub tournament_id: TournamentId,
}

/// Выполнить команду над лобби.
pub fn execute_command(
    lobby: &mut TournamentLobby,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    debug!("execute command: {command:?}");

    match command {
        Command::CreateTournament(cmd) => {
            let id = lobby.create_tournament(cmd.config)?;
            let runtime = lobby.get(id).ok_or(ApiError::TournamentNotFound(id))?;
            Ok(CommandResponse::TournamentCreated(map_tournament_to_dto(
                runtime.tournament(),
            )))
        }

        Command::RegisterParticipant(cmd) => {
            let name = cmd.name.trim().to_string();
            if name.is_empty() {
                return Err(ApiError::BadRequest("participant name is empty".into()));
            }

            let participant_id =
                lobby.register_participant(cmd.tournament_id, name.clone(), cmd.affiliation)?;

            Ok(CommandResponse::ParticipantRegistered {
                tournament_id: cmd.tournament_id,
                participant: ParticipantRefDto {
                    participant_id,
                    name,
                },
            })
        }

        Command::UnregisterParticipant(cmd) => {
            lobby
                .runtime_mut(cmd.tournament_id)?
                .unregister_participant(cmd.participant_id)?;
            Ok(CommandResponse::Ok)
        }

        Command::StartTournament(cmd) => {
            let runtime = lobby.runtime_mut(cmd.tournament_id)?;
            runtime.start()?;
            round_paired(runtime.tournament())
        }

        Command::RecordResult(cmd) => {
            let runtime = lobby.runtime_mut(cmd.tournament_id)?;
            runtime.record_result(cmd.match_id, cmd.outcome)?;
            Ok(CommandResponse::TournamentState(map_tournament_to_dto(
                runtime.tournament(),
            )))
        }

        Command::NextRound(cmd) => {
            let runtime = lobby.runtime_mut(cmd.tournament_id)?;
            runtime.next_round()?;
            round_paired(runtime.tournament())
        }
    }
}

fn round_paired(tournament: &Tournament) -> Result<CommandResponse, ApiError> {
    let round = tournament
        .current_round()
        .ok_or_else(|| ApiError::Internal(format!("tournament {} has no rounds", tournament.id)))?;

    Ok(CommandResponse::RoundPaired(map_round_to_dto(round, tournament)))
}
