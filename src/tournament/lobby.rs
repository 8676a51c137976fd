// src/tournament/lobby.rs

use std::collections::BTreeMap;

use log::info;

use crate::domain::tournament::{Tournament, TournamentConfig, TournamentError};
use crate::domain::{ParticipantId, TournamentId};
use crate::infra::persistence::TournamentStorage;
use crate::infra::rng::DeterministicRng;
use crate::infra::rng_seed::RngSeed;
use crate::tournament::runtime::TournamentRuntime;

/// Простое турнирное лобби:
/// - хранит турниры в памяти;
/// - выдаёт новые TournamentId;
/// - каждому турниру даёт свой RNG-поток из мастер-seed;
/// - умеет сохранять турниры в хранилище и поднимать их обратно.
#[derive(Debug)]
pub struct TournamentLobby {
    tournaments: BTreeMap<TournamentId, TournamentRuntime<DeterministicRng>>,
    next_tournament_id: TournamentId,
    master_seed: RngSeed,
}

impl TournamentLobby {
    /// Пустое лобби, без турниров.
    pub fn new(master_seed: RngSeed) -> Self {
        Self {
            tournaments: BTreeMap::new(),
            // id начинаем с 1.
            next_tournament_id: 1,
            master_seed,
        }
    }

    /// Создать новый турнир, вернуть его id.
    pub fn create_tournament(
        &mut self,
        config: TournamentConfig,
    ) -> Result<TournamentId, TournamentError> {
        let id = self.next_tournament_id;

        let tournament = Tournament::new(id, config)?;
        let rng = self.master_seed.derive(id, 0).to_rng();

        self.next_tournament_id += 1;
        info!("tournament {id} '{}' created", tournament.config.name);

        self.tournaments.insert(id, TournamentRuntime::new(tournament, rng));
        Ok(id)
    }

    /// Получить турнир по id (только чтение).
    pub fn get(&self, id: TournamentId) -> Option<&TournamentRuntime<DeterministicRng>> {
        self.tournaments.get(&id)
    }

    /// Получить турнир по id (для изменения).
    pub fn get_mut(&mut self, id: TournamentId) -> Option<&mut TournamentRuntime<DeterministicRng>> {
        self.tournaments.get_mut(&id)
    }

    /// Как `get_mut`, но с ошибкой вместо `None`.
    pub fn runtime_mut(
        &mut self,
        tournament_id: TournamentId,
    ) -> Result<&mut TournamentRuntime<DeterministicRng>, TournamentError> {
        self.tournaments
            .get_mut(&tournament_id)
            .ok_or(TournamentError::TournamentNotFound { tournament_id })
    }

    /// Все турниры по возрастанию id.
    pub fn all(&self) -> impl Iterator<Item = (&TournamentId, &TournamentRuntime<DeterministicRng>)> {
        self.tournaments.iter()
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Удобный метод для регистрации участника в турнир.
    pub fn register_participant(
        &mut self,
        tournament_id: TournamentId,
        name: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Result<ParticipantId, TournamentError> {
        self.runtime_mut(tournament_id)?
            .register_participant(name, affiliation)
    }

    /// Сохранить все турниры.
    pub fn persist(&self, storage: &mut impl TournamentStorage) {
        for runtime in self.tournaments.values() {
            storage.save_tournament(runtime.tournament());
        }
    }

    /// Поднять лобби из хранилища.
    ///
    /// RNG каждого турнира продолжается с потока, равного числу уже
    /// сыгранных туров, так что повторный запуск не повторяет жребий.
    pub fn restore(
        master_seed: RngSeed,
        storage: &impl TournamentStorage,
    ) -> Result<Self, TournamentError> {
        let mut lobby = Self::new(master_seed);

        for id in storage.tournament_ids() {
            let tournament = storage
                .load_tournament(id)
                .ok_or(TournamentError::TournamentNotFound { tournament_id: id })?;

            let stream = u64::from(tournament.rounds_played());
            let rng = lobby.master_seed.derive(id, stream).to_rng();

            lobby.tournaments.insert(id, TournamentRuntime::resume(tournament, rng)?);
            lobby.next_tournament_id = lobby.next_tournament_id.max(id + 1);
        }

        info!("lobby restored: {} tournament(s)", lobby.tournaments.len());
        Ok(lobby)
    }
}
