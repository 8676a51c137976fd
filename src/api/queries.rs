use serde::{Deserialize, Serialize};

use crate::domain::{RoundNumber, TournamentId};
use crate::infra::mapping::{map_round_to_dto, map_standings_to_dto, map_tournament_to_dto};
use crate::tournament::TournamentLobby;

use super::dto::{RoundViewDto, StandingRowDto, TournamentViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить минимальную инфу о турнире.
    GetTournament { tournament_id: TournamentId },

    /// Получить список турниров (для лобби).
    ListTournaments,

    /// Турнирная таблица.
    GetStandings { tournament_id: TournamentId },

    /// Тур по номеру; `None` – текущий.
    GetRound {
        tournament_id: TournamentId,
        round: Option<RoundNumber>,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Tournament(TournamentViewDto),
    Tournaments(Vec<TournamentViewDto>),
    Standings(Vec<StandingRowDto>),
    Round(RoundViewDto),
}

pub fn execute_query(lobby: &TournamentLobby, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTournament { tournament_id } => {
            let runtime = lobby
                .get(tournament_id)
                .ok_or(ApiError::TournamentNotFound(tournament_id))?;
            Ok(QueryResponse::Tournament(map_tournament_to_dto(
                runtime.tournament(),
            )))
        }

        Query::ListTournaments => Ok(QueryResponse::Tournaments(
            lobby
                .all()
                .map(|(_, runtime)| map_tournament_to_dto(runtime.tournament()))
                .collect(),
        )),

        Query::GetStandings { tournament_id } => {
            let runtime = lobby
                .get(tournament_id)
                .ok_or(ApiError::TournamentNotFound(tournament_id))?;
            Ok(QueryResponse::Standings(map_standings_to_dto(
                runtime.tournament(),
            )))
        }

        Query::GetRound {
            tournament_id,
            round,
        } => {
            let tournament = lobby
                .get(tournament_id)
                .ok_or(ApiError::TournamentNotFound(tournament_id))?
                .tournament();

            let found = match round {
                Some(number) => tournament.round(number),
                None => tournament.current_round(),
            };

            let round = found.ok_or_else(|| match round {
                Some(number) => ApiError::BadRequest(format!(
                    "tournament {tournament_id} has no round {number}"
                )),
                None => ApiError::InvalidCommand(format!(
                    "tournament {tournament_id} has not started"
                )),
            })?;

            Ok(QueryResponse::Round(map_round_to_dto(round, tournament)))
        }
    }
}
