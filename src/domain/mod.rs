//! Доменная модель швейцарки: участники, партии, туры, турнир.

pub mod color;
pub mod game;
pub mod participant;
pub mod points;
pub mod round;
pub mod tournament;

// Базовые идентификаторы.
pub type ParticipantId = u64;
pub type MatchId = u64;
pub type TournamentId = u64;
/// Номер тура, с 1.
pub type RoundNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Participant и т.п.
pub use color::*;
pub use game::*;
pub use participant::*;
pub use points::*;
pub use round::*;
pub use tournament::*;
