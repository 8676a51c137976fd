use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::game::{Match, MatchSides};
use crate::domain::participant::Participant;
use crate::domain::points::Points;
use crate::domain::round::Round;
use crate::domain::ParticipantId;

/// Пересчитать таблицу целиком из истории туров.
///
/// Вход:
///   - participants: зарегистрированные участники (их текущие очки игнорируются);
///   - rounds: вся история с 1-го тура, последний может быть сыгран частично.
///
/// Выход: новые записи участников в том же порядке, что и на входе.
///
/// Алгоритм:
///   1. Обнуляем очки, соперников, баи, цвета, Бухгольц.
///   2. Идём по турам в порядке номеров и сворачиваем каждую партию.
///   3. Бухгольц = сумма уже посчитанных очков всех соперников (один проход).
///
/// Функция идемпотентна: на одной и той же истории даёт один и тот же результат.
pub fn recompute_standings(participants: &[Participant], rounds: &[Round]) -> Vec<Participant> {
    let mut table: Vec<Participant> = participants
        .iter()
        .map(Participant::with_reset_standing)
        .collect();

    // При дубликатах id побеждает первая запись.
    let mut index: HashMap<ParticipantId, usize> = HashMap::with_capacity(table.len());
    for (i, p) in table.iter().enumerate() {
        index.entry(p.id).or_insert(i);
    }

    let mut ordered: Vec<&Round> = rounds.iter().collect();
    ordered.sort_by_key(|r| r.number);

    for round in ordered {
        for m in &round.matches {
            apply_match(&mut table, &index, m);
        }
    }

    let scores: HashMap<ParticipantId, Points> = table.iter().map(|p| (p.id, p.score)).collect();

    for p in &mut table {
        p.buchholz = p
            .opponents_played
            .iter()
            .filter_map(|id| scores.get(id))
            .copied()
            .sum();
    }

    table
}

/// Свернуть одну партию в таблицу.
///
/// Сторона с неизвестным id просто пропускается.
fn apply_match(table: &mut [Participant], index: &HashMap<ParticipantId, usize>, m: &Match) {
    match m.sides {
        MatchSides::Bye { participant } => {
            // Бай = победа, независимо от того, что записано в outcome.
            if let Some(&i) = index.get(&participant) {
                let p = &mut table[i];
                p.score += Points::ONE;
                p.byes += 1;
            }
        }
        MatchSides::Paired { white, black } => {
            for (id, opponent) in [(white, black), (black, white)] {
                let Some(&i) = index.get(&id) else {
                    continue;
                };
                let p = &mut table[i];
                if let Some(color) = m.color_of(id) {
                    p.color_history.push(color);
                }
                p.opponents_played.push(opponent);
                p.score += m.points_for(id).unwrap_or(Points::ZERO);
            }
        }
    }
}

/// Порядок итоговой таблицы: очки ↓, Бухгольц ↓, имя ↑, id ↑.
pub fn rank_standings(participants: &[Participant]) -> Vec<Participant> {
    let mut ranked = participants.to_vec();
    ranked.sort_by(standings_order);
    ranked
}

fn standings_order(a: &Participant, b: &Participant) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.buchholz.cmp(&a.buchholz))
        .then_with(|| a.name.cmp(&b.name))
        .then(a.id.cmp(&b.id))
}
