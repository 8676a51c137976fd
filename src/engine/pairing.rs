use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::game::{Match, MatchSides};
use crate::domain::participant::Participant;
use crate::domain::round::Round;
use crate::domain::{ParticipantId, RoundNumber};
use crate::engine::colors::assign_colors;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

/// Как разрешать полное равенство (очки + Бухгольц) при сортировке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TieBreak {
    /// Меньший id – выше. Полностью детерминированно.
    #[default]
    ParticipantId,
    /// Перед сортировкой пул перемешивается через `RandomSource`,
    /// равные остаются в перемешанном порядке.
    Shuffle,
}

/// Что делать с участником, которому жадный проход не нашёл нового соперника.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrandedPolicy {
    /// Оставить без партии в этом туре, вернуть в `RoundPairing::unpaired`.
    #[default]
    LeaveUnmatched,
    /// Спарить застрявших между собой по порядку рейтинга, допуская повторную встречу.
    AllowRematch,
}

/// Настройки жеребьёвки.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairingConfig {
    pub tie_break: TieBreak,
    pub stranded: StrandedPolicy,
}

/// Результат жеребьёвки тура.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundPairing {
    pub round: RoundNumber,
    /// Сначала бай (если есть), затем пары в порядке рейтинга.
    pub matches: Vec<Match>,
    /// Участники, оставшиеся без партии.
    pub unpaired: Vec<ParticipantId>,
    /// Пары, сведённые повторно (только при `StrandedPolicy::AllowRematch`).
    pub rematches: Vec<(ParticipantId, ParticipantId)>,
}

impl RoundPairing {
    pub fn into_round(self) -> Round {
        Round::new(self.round, self.matches)
    }
}

/// Жеребьёвка следующего тура с настройками по умолчанию.
///
/// Номер тура = `previous_rounds.len() + 1`.
/// Участники, которым не нашлось пары, просто не попадают в список
/// (подробности – в `generate_pairings`).
pub fn generate_round<R: RandomSource>(
    participants: &[Participant],
    previous_rounds: &[Round],
    ids: &IdGenerator,
    rng: &mut R,
) -> Result<Vec<Match>, EngineError> {
    generate_pairings(participants, previous_rounds, &PairingConfig::default(), ids, rng)
        .map(|pairing| pairing.matches)
}

/// Жеребьёвка следующего тура.
///
/// Вход:
///   - participants: участники с уже пересчитанными очками;
///   - previous_rounds: все прошлые туры.
///
/// Алгоритм:
///   1. Нечётное поле → бай: самый низкий по (очки, Бухгольц), кто ещё
///      не получал бай; если баи были у всех – просто самый низкий.
///   2. Остальных сортируем по (очки ↓, Бухгольц ↓).
///   3. Жадно: каждому свободному – первый свободный по списку,
///      с кем он ещё не играл. Без отката назад.
///   4. Цвета в паре – `assign_colors`.
pub fn generate_pairings<R: RandomSource>(
    participants: &[Participant],
    previous_rounds: &[Round],
    config: &PairingConfig,
    ids: &IdGenerator,
    rng: &mut R,
) -> Result<RoundPairing, EngineError> {
    ensure_pairable(participants)?;

    let round = previous_rounds.len() as RoundNumber + 1;
    let played = PlayedPairs::collect(participants, previous_rounds);

    let mut pool: Vec<&Participant> = participants.iter().collect();
    if config.tie_break == TieBreak::Shuffle {
        rng.shuffle(&mut pool);
    }

    let mut matches = Vec::with_capacity(pool.len() / 2 + 1);

    if pool.len() % 2 == 1 {
        let recipient = select_bye(&pool, config.tie_break);
        debug!("round {round}: bye -> {recipient}");
        pool.retain(|p| p.id != recipient);
        matches.push(Match::bye(ids.next_match_id(), round, recipient));
    }

    pool.sort_by(|a, b| ranking_order(a, b, config.tie_break));

    let mut paired = vec![false; pool.len()];
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(pool.len() / 2);

    for i in 0..pool.len() {
        if paired[i] {
            continue;
        }

        let opponent = (0..pool.len())
            .find(|&j| j != i && !paired[j] && !played.contains(pool[i].id, pool[j].id));

        if let Some(j) = opponent {
            paired[i] = true;
            paired[j] = true;
            pairs.push((i, j));
        }
    }

    let mut stranded: Vec<usize> = (0..pool.len()).filter(|&i| !paired[i]).collect();
    let mut rematches = Vec::new();

    if !stranded.is_empty() && config.stranded == StrandedPolicy::AllowRematch {
        let mut rest = Vec::new();
        for chunk in stranded.chunks(2) {
            match chunk {
                &[a, b] => {
                    rematches.push((pool[a].id, pool[b].id));
                    pairs.push((a, b));
                }
                _ => rest.extend_from_slice(chunk),
            }
        }
        stranded = rest;
    }

    for (a, b) in pairs {
        let (white, black) = assign_colors(pool[a], pool[b], rng);
        matches.push(Match::paired(ids.next_match_id(), round, white, black));
    }

    let unpaired: Vec<ParticipantId> = stranded.iter().map(|&i| pool[i].id).collect();

    if !rematches.is_empty() {
        warn!("round {round}: rematches allowed for stranded participants {rematches:?}");
    }
    if !unpaired.is_empty() {
        warn!("round {round}: no legal opponent left for {unpaired:?}, left unmatched");
    }

    Ok(RoundPairing {
        round,
        matches,
        unpaired,
        rematches,
    })
}

fn ensure_pairable(participants: &[Participant]) -> Result<(), EngineError> {
    if participants.len() < 2 {
        return Err(EngineError::NotEnoughParticipants {
            found: participants.len(),
        });
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.id) {
            return Err(EngineError::DuplicateParticipant(p.id));
        }
    }
    Ok(())
}

/// Порядок рейтинга: очки ↓, Бухгольц ↓, затем tie-break.
fn ranking_order(a: &Participant, b: &Participant, tie_break: TieBreak) -> Ordering {
    let by_standing = b.score.cmp(&a.score).then(b.buchholz.cmp(&a.buchholz));
    match tie_break {
        TieBreak::ParticipantId => by_standing.then(a.id.cmp(&b.id)),
        TieBreak::Shuffle => by_standing,
    }
}

/// Кандидаты на бай – рейтинг в обратном порядке (снизу вверх).
fn select_bye(pool: &[&Participant], tie_break: TieBreak) -> ParticipantId {
    let mut candidates: Vec<&Participant> = pool.to_vec();
    candidates.sort_by(|a, b| ranking_order(b, a, tie_break));

    if let Some(p) = candidates.iter().find(|p| p.byes == 0) {
        return p.id;
    }

    // Баи были у всех: отдаём самому низкому ещё раз.
    let lowest = candidates[0].id;
    warn!("every participant already had a bye, reusing it for {lowest}");
    lowest
}

/// Множество уже сыгранных пар (неупорядоченных).
struct PlayedPairs(HashSet<(ParticipantId, ParticipantId)>);

impl PlayedPairs {
    fn collect(participants: &[Participant], rounds: &[Round]) -> Self {
        let mut set = HashSet::new();

        for p in participants {
            for &opponent in &p.opponents_played {
                set.insert(Self::key(p.id, opponent));
            }
        }

        for round in rounds {
            for m in &round.matches {
                if let MatchSides::Paired { white, black } = m.sides {
                    set.insert(Self::key(white, black));
                }
            }
        }

        Self(set)
    }

    fn key(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    fn contains(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.0.contains(&Self::key(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::points::Points;

    fn p(id: ParticipantId, score: u32, buchholz: u32) -> Participant {
        let mut p = Participant::new(id, format!("P{id}"), "");
        p.score = Points::from_halves(score);
        p.buchholz = Points::from_halves(buchholz);
        p
    }

    #[test]
    fn ranking_breaks_full_ties_by_lower_id() {
        let a = p(7, 2, 0);
        let b = p(3, 2, 0);
        assert_eq!(ranking_order(&b, &a, TieBreak::ParticipantId), Ordering::Less);
        assert_eq!(ranking_order(&a, &b, TieBreak::Shuffle), Ordering::Equal);
    }

    #[test]
    fn bye_goes_to_highest_id_among_equal_bottom() {
        let pool = [p(1, 0, 0), p(2, 0, 0), p(3, 2, 0)];
        let refs: Vec<&Participant> = pool.iter().collect();
        assert_eq!(select_bye(&refs, TieBreak::ParticipantId), 2);
    }

    #[test]
    fn played_pairs_are_unordered() {
        let mut a = p(1, 0, 0);
        a.opponents_played.push(9);
        let played = PlayedPairs::collect(&[a], &[]);
        assert!(played.contains(9, 1));
        assert!(played.contains(1, 9));
        assert!(!played.contains(1, 2));
    }
}
