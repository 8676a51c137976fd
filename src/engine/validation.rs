use std::collections::HashSet;

use crate::domain::game::MatchSides;
use crate::domain::participant::Participant;
use crate::domain::round::Round;
use crate::domain::ParticipantId;
use crate::engine::errors::EngineError;

/// Проверка тура: все участники известны, никто не сидит за двумя досками.
pub fn validate_round(round: &Round, participants: &[Participant]) -> Result<(), EngineError> {
    let known: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
    let mut seated = HashSet::new();

    for participant in round.participant_ids() {
        if !known.contains(&participant) {
            return Err(EngineError::UnknownParticipant {
                round: round.number,
                participant,
            });
        }
        if !seated.insert(participant) {
            return Err(EngineError::ParticipantPairedTwice {
                round: round.number,
                participant,
            });
        }
    }

    Ok(())
}

/// Все повторные встречи в истории, по порядку появления.
///
/// Пара возвращается в том виде, как она записана во второй (третьей, ...) партии.
pub fn find_rematches(rounds: &[Round]) -> Vec<(ParticipantId, ParticipantId)> {
    let mut ordered: Vec<&Round> = rounds.iter().collect();
    ordered.sort_by_key(|r| r.number);

    let mut seen = HashSet::new();
    let mut rematches = Vec::new();

    for round in ordered {
        for m in &round.matches {
            if let MatchSides::Paired { white, black } = m.sides {
                let key = if white <= black { (white, black) } else { (black, white) };
                if !seen.insert(key) {
                    rematches.push((white, black));
                }
            }
        }
    }

    rematches
}
