//! Движок швейцарской системы: очки и Бухгольц, число туров, жеребьёвка.
//!
//! Основные операции:
//!   - `total_rounds` – сколько туров играть при данном числе участников
//!   - `recompute_standings` – пересчитать таблицу из истории туров
//!   - `generate_round` / `generate_pairings` – жеребьёвка следующего тура
//!
//! Всё здесь – чистые функции: входы не мутируются, на выходе новые значения.

pub mod colors;
pub mod errors;
pub mod pairing;
pub mod round_policy;
pub mod standings;
pub mod validation;

pub use colors::assign_colors;
pub use errors::EngineError;
pub use pairing::{
    generate_pairings, generate_round, PairingConfig, RoundPairing, StrandedPolicy, TieBreak,
};
pub use round_policy::total_rounds;
pub use standings::{rank_standings, recompute_standings};
pub use validation::{find_rematches, validate_round};

/// RNG интерфейс для engine.
///
/// Вся случайность жеребьёвки (перемешивание при равенстве, жребий цвета)
/// идёт только через него, чтобы в тестах можно было зафиксировать seed.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Честная монетка.
    fn flip_coin(&mut self) -> bool;
}
