// src/tournament/runtime.rs

use log::{debug, info};

use crate::domain::game::{Match, MatchSides, Outcome};
use crate::domain::participant::Participant;
use crate::domain::round::Round;
use crate::domain::tournament::{
    Tournament, TournamentError, TournamentStatus, MIN_PARTICIPANTS,
};
use crate::domain::{MatchId, ParticipantId};
use crate::engine::{
    generate_pairings, recompute_standings, total_rounds, validate_round, RandomSource,
};
use crate::infra::ids::IdGenerator;

/// Рантайм одного турнира.
///
/// Связывает состояние `Tournament` с движком:
///   - выдаёт id участникам и партиям (монотонно, без времени);
///   - после каждого изменения истории пересчитывает таблицу;
///   - формирует туры через жеребьёвку.
///
/// Все операции берут `&mut self`, поэтому подсчёт очков и жеребьёвка
/// одного турнира никогда не идут параллельно.
#[derive(Debug)]
pub struct TournamentRuntime<R: RandomSource> {
    tournament: Tournament,
    ids: IdGenerator,
    rng: R,
    /// Кто остался без пары в последней жеребьёвке.
    last_unpaired: Vec<ParticipantId>,
}

impl<R: RandomSource> TournamentRuntime<R> {
    /// Обернуть турнир. Нумерация id продолжается после уже существующих.
    pub fn new(tournament: Tournament, rng: R) -> Self {
        let ids = ids_after(&tournament);
        Self {
            tournament,
            ids,
            rng,
            last_unpaired: Vec::new(),
        }
    }

    /// Поднять турнир из хранилища: проверить историю и пересчитать таблицу.
    pub fn resume(mut tournament: Tournament, rng: R) -> Result<Self, TournamentError> {
        for round in &mut tournament.rounds {
            validate_round(round, &tournament.participants)?;
            round.matches.iter_mut().for_each(Match::normalize_bye);
        }

        let mut runtime = Self::new(tournament, rng);
        runtime.refresh_standings();

        debug!(
            "tournament {} resumed at round {}/{}",
            runtime.tournament.id,
            runtime.tournament.rounds_played(),
            runtime.tournament.total_rounds
        );

        Ok(runtime)
    }

    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    pub fn into_tournament(self) -> Tournament {
        self.tournament
    }

    pub fn last_unpaired(&self) -> &[ParticipantId] {
        &self.last_unpaired
    }

    /// Зарегистрировать нового участника, id выдаёт рантайм.
    pub fn register_participant(
        &mut self,
        name: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Result<ParticipantId, TournamentError> {
        let participant = Participant::new(self.ids.next_participant_id(), name, affiliation);
        let id = participant.id;

        self.tournament.register_participant(participant)?;

        debug!("tournament {}: registered participant {id}", self.tournament.id);
        Ok(id)
    }

    pub fn unregister_participant(
        &mut self,
        participant_id: ParticipantId,
    ) -> Result<Participant, TournamentError> {
        self.tournament.unregister_participant(participant_id)
    }

    /// Старт турнира: фиксируем число туров и жеребьём первый тур.
    pub fn start(&mut self) -> Result<&Round, TournamentError> {
        if self.tournament.status != TournamentStatus::Registering {
            return Err(TournamentError::InvalidStatus {
                expected: TournamentStatus::Registering,
                found: self.tournament.status,
            });
        }

        let count = self.tournament.participant_count();
        let required = self.tournament.config.min_participants.max(MIN_PARTICIPANTS);
        if (count as u32) < required {
            return Err(TournamentError::NotEnoughParticipants {
                required,
                found: count,
            });
        }

        let total = self
            .tournament
            .config
            .rounds_override
            .unwrap_or_else(|| total_rounds(count));

        self.refresh_standings();
        self.pair_next_round()?;

        self.tournament.total_rounds = total;
        self.tournament.status = TournamentStatus::Running;
        self.finish_if_done();

        info!(
            "tournament {} '{}' started: {count} participants, {total} rounds",
            self.tournament.id, self.tournament.config.name
        );

        self.current_round()
    }

    /// Внести результат партии текущего тура и обновить таблицу.
    pub fn record_result(&mut self, match_id: MatchId, outcome: Outcome) -> Result<(), TournamentError> {
        self.tournament.record_result(match_id, outcome)?;
        self.refresh_standings();

        debug!(
            "tournament {}: match {match_id} -> {outcome}",
            self.tournament.id
        );

        if self.tournament.status == TournamentStatus::Finished {
            if let Some(winner) = self.tournament.winner() {
                info!(
                    "tournament {} finished, winner: {} ({} pts)",
                    self.tournament.id, winner.name, winner.score
                );
            }
        }

        Ok(())
    }

    /// Следующий тур: только когда текущий сыгран полностью и туры не кончились.
    pub fn next_round(&mut self) -> Result<&Round, TournamentError> {
        let tournament_id = self.tournament.id;

        if self.tournament.status == TournamentStatus::Finished {
            return Err(TournamentError::AllRoundsPlayed {
                tournament_id,
                total_rounds: self.tournament.total_rounds,
            });
        }

        if self.tournament.status != TournamentStatus::Running {
            return Err(TournamentError::InvalidStatus {
                expected: TournamentStatus::Running,
                found: self.tournament.status,
            });
        }

        let current = self
            .tournament
            .current_round()
            .ok_or(TournamentError::NoRounds { tournament_id })?;

        if !current.is_complete() {
            return Err(TournamentError::RoundNotFinished {
                round: current.number,
                pending: current.pending_count(),
            });
        }

        if !self.tournament.has_remaining_rounds() {
            return Err(TournamentError::AllRoundsPlayed {
                tournament_id,
                total_rounds: self.tournament.total_rounds,
            });
        }

        self.refresh_standings();
        self.pair_next_round()?;
        self.finish_if_done();

        info!(
            "tournament {tournament_id}: round {}/{} paired",
            self.tournament.rounds_played(),
            self.tournament.total_rounds
        );

        self.current_round()
    }

    /// Пересчитать очки, соперников, цвета и Бухгольц из истории.
    pub fn refresh_standings(&mut self) {
        self.tournament.participants =
            recompute_standings(&self.tournament.participants, &self.tournament.rounds);
    }

    fn pair_next_round(&mut self) -> Result<(), TournamentError> {
        let pairing = generate_pairings(
            &self.tournament.participants,
            &self.tournament.rounds,
            &self.tournament.config.pairing,
            &self.ids,
            &mut self.rng,
        )?;

        self.last_unpaired = pairing.unpaired.clone();

        let round = pairing.into_round();
        validate_round(&round, &self.tournament.participants)?;
        self.tournament.rounds.push(round);

        // Бай засчитывается сразу, соперники и цвета нового тура тоже.
        self.refresh_standings();

        Ok(())
    }

    /// Тур, где играть некому (только бай / все без пары), закрыт сразу.
    fn finish_if_done(&mut self) {
        if self.tournament.status == TournamentStatus::Running && self.tournament.is_finished() {
            self.tournament.status = TournamentStatus::Finished;
            info!("tournament {} finished", self.tournament.id);
        }
    }

    fn current_round(&self) -> Result<&Round, TournamentError> {
        self.tournament.current_round().ok_or(TournamentError::NoRounds {
            tournament_id: self.tournament.id,
        })
    }
}

/// Генератор id, продолжающий нумерацию существующего турнира.
fn ids_after(tournament: &Tournament) -> IdGenerator {
    let last_participant = tournament.participants.iter().map(|p| p.id).max().unwrap_or(0);

    let last_match = tournament
        .rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .map(|m| m.id)
        .max()
        .unwrap_or(0);

    // Участник мог быть снят с регистрации, но остаться в истории.
    let last_in_history = tournament
        .rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .flat_map(|m| match m.sides {
            MatchSides::Paired { white, black } => [Some(white), Some(black)],
            MatchSides::Bye { participant } => [Some(participant), None],
        })
        .flatten()
        .max()
        .unwrap_or(0);

    IdGenerator::resume_after(last_participant.max(last_in_history), last_match)
}
