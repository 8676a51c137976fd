use log::trace;

use crate::domain::participant::Participant;
use crate::domain::ParticipantId;
use crate::engine::RandomSource;

/// Распределить цвета в паре. Возвращает `(белые, чёрные)`.
///
/// Правило (локальное, только для этой пары):
///   1. у кого строго больше партий белыми – играет чёрными;
///   2. иначе у кого строго больше партий чёрными – играет белыми;
///   3. иначе (поровну или истории нет) – жребий через `rng`.
///
/// `first` – участник, стоящий выше в рейтинге: при проигранном жребии он белыми.
pub fn assign_colors<R: RandomSource>(
    first: &Participant,
    second: &Participant,
    rng: &mut R,
) -> (ParticipantId, ParticipantId) {
    let a = first.color_tally();
    let b = second.color_tally();

    let (white, black) = if a.white != b.white {
        if a.white > b.white {
            (second.id, first.id)
        } else {
            (first.id, second.id)
        }
    } else if a.black != b.black {
        if a.black > b.black {
            (first.id, second.id)
        } else {
            (second.id, first.id)
        }
    } else if rng.flip_coin() {
        (second.id, first.id)
    } else {
        (first.id, second.id)
    };

    trace!(
        "colors: {} ({}W/{}B) vs {} ({}W/{}B) -> white={white}, black={black}",
        first.id,
        a.white,
        a.black,
        second.id,
        b.white,
        b.black,
    );

    (white, black)
}
