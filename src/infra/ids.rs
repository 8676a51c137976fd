use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{MatchId, ParticipantId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Никаких меток времени: два вызова подряд никогда не дадут одинаковый id.
#[derive(Debug)]
pub struct IdGenerator {
    participant_counter: AtomicU64,
    match_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для участников и партий.
    pub fn new() -> Self {
        Self {
            participant_counter: AtomicU64::new(1),
            match_counter: AtomicU64::new(1),
        }
    }

    /// Продолжить нумерацию после восстановленного турнира:
    /// следующие id будут строго больше переданных максимумов.
    pub fn resume_after(last_participant: ParticipantId, last_match: MatchId) -> Self {
        Self {
            participant_counter: AtomicU64::new(last_participant.saturating_add(1)),
            match_counter: AtomicU64::new(last_match.saturating_add(1)),
        }
    }

    #[inline]
    pub fn next_participant_id(&self) -> ParticipantId {
        self.participant_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_match_id(&self) -> MatchId {
        self.match_counter.fetch_add(1, Ordering::Relaxed)
    }
}
