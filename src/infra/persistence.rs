use std::collections::BTreeMap;

use crate::domain::tournament::Tournament;
use crate::domain::TournamentId;

/// Абстракция хранилища турниров.
///
/// Ядро ничего не знает о формате хранения: оно получает участников
/// и историю туров и возвращает новые значения. Эта граница нужна
/// для тестов и для внешнего слоя (БД, файлы, что угодно).
pub trait TournamentStorage {
    /// Загрузить турнир.
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament>;

    /// Сохранить турнир (целиком, с историей туров).
    fn save_tournament(&mut self, tournament: &Tournament);

    /// Все сохранённые id, по возрастанию.
    fn tournament_ids(&self) -> Vec<TournamentId>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStorage {
    tournaments: BTreeMap<TournamentId, Tournament>,
}

impl InMemoryTournamentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }
}

impl TournamentStorage for InMemoryTournamentStorage {
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    fn save_tournament(&mut self, tournament: &Tournament) {
        self.tournaments.insert(tournament.id, tournament.clone());
    }

    fn tournament_ids(&self) -> Vec<TournamentId> {
        self.tournaments.keys().copied().collect()
    }
}
