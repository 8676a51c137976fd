use crate::api::dto::{
    MatchViewDto, ParticipantRefDto, RoundViewDto, StandingRowDto, TournamentViewDto,
};
use crate::domain::game::{Match, MatchSides};
use crate::domain::round::Round;
use crate::domain::tournament::Tournament;
use crate::domain::ParticipantId;

/// Утилита: получить отображаемое имя участника.
pub trait ParticipantNameResolver {
    fn resolve_name(&self, participant_id: ParticipantId) -> String;
}

/// Простая реализация: отображаемое имя = "Participant {id}".
pub struct DefaultNameResolver;

impl ParticipantNameResolver for DefaultNameResolver {
    fn resolve_name(&self, participant_id: ParticipantId) -> String {
        format!("Participant {}", participant_id)
    }
}

/// Имена берём из самого турнира, неизвестные id – как у `DefaultNameResolver`.
impl ParticipantNameResolver for Tournament {
    fn resolve_name(&self, participant_id: ParticipantId) -> String {
        self.participant(participant_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| DefaultNameResolver.resolve_name(participant_id))
    }
}

fn participant_ref(
    participant_id: ParticipantId,
    resolver: &impl ParticipantNameResolver,
) -> ParticipantRefDto {
    ParticipantRefDto {
        participant_id,
        name: resolver.resolve_name(participant_id),
    }
}

/// Маппинг партии в DTO.
pub fn map_match_to_dto(m: &Match, resolver: &impl ParticipantNameResolver) -> MatchViewDto {
    let (white, black, bye) = match m.sides {
        MatchSides::Paired { white, black } => (
            Some(participant_ref(white, resolver)),
            Some(participant_ref(black, resolver)),
            None,
        ),
        MatchSides::Bye { participant } => (None, None, Some(participant_ref(participant, resolver))),
    };

    MatchViewDto {
        match_id: m.id,
        round: m.round,
        white,
        black,
        bye,
        outcome: m.outcome,
        result: m.outcome.to_string(),
    }
}

/// Маппинг тура в DTO.
pub fn map_round_to_dto(round: &Round, resolver: &impl ParticipantNameResolver) -> RoundViewDto {
    RoundViewDto {
        round: round.number,
        matches: round
            .matches
            .iter()
            .map(|m| map_match_to_dto(m, resolver))
            .collect(),
        complete: round.is_complete(),
        pending: round.pending_count() as u32,
    }
}

/// Турнирная таблица в порядке мест.
pub fn map_standings_to_dto(tournament: &Tournament) -> Vec<StandingRowDto> {
    tournament
        .standings()
        .into_iter()
        .enumerate()
        .map(|(idx, p)| StandingRowDto {
            rank: idx as u32 + 1,
            participant_id: p.id,
            score: p.score.as_f64(),
            buchholz: p.buchholz.as_f64(),
            byes: p.byes,
            games_played: p.games_played() as u32,
            name: p.name,
            affiliation: p.affiliation,
        })
        .collect()
}

/// Маппинг турнира в DTO для лобби.
pub fn map_tournament_to_dto(tournament: &Tournament) -> TournamentViewDto {
    TournamentViewDto {
        tournament_id: tournament.id,
        name: tournament.config.name.clone(),
        status: format!("{:?}", tournament.status),
        participants_registered: tournament.participant_count() as u32,
        rounds_played: tournament.rounds_played(),
        total_rounds: tournament.total_rounds,
        current_round_finished: tournament.is_current_round_finished(),
        winner: tournament.winner().map(|p| ParticipantRefDto {
            participant_id: p.id,
            name: p.name,
        }),
    }
}
