use serde::{Deserialize, Serialize};

use crate::domain::game::{Match, MatchSides};
use crate::domain::{MatchId, ParticipantId, RoundNumber};

/// Тур: набор партий с одним номером, выдаётся одним вызовом жеребьёвки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub number: RoundNumber,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(number: RoundNumber, matches: Vec<Match>) -> Self {
        Self { number, matches }
    }

    /// Все результаты внесены (баи считаются разрешёнными сразу).
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_resolved)
    }

    pub fn pending_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_resolved()).count()
    }

    /// Кто получил бай в этом туре.
    pub fn bye_recipient(&self) -> Option<ParticipantId> {
        self.matches.iter().find_map(|m| match m.sides {
            MatchSides::Bye { participant } => Some(participant),
            MatchSides::Paired { .. } => None,
        })
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }

    /// Все участники, задействованные в туре (включая бай).
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        let mut ids = Vec::with_capacity(self.matches.len() * 2);
        for m in &self.matches {
            match m.sides {
                MatchSides::Paired { white, black } => {
                    ids.push(white);
                    ids.push(black);
                }
                MatchSides::Bye { participant } => ids.push(participant),
            }
        }
        ids
    }
}
