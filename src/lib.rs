//! Движок швейцарской системы.
//!
//! Ядро (`engine`) – чистые функции:
//!   - `total_rounds` – число туров по размеру поля;
//!   - `recompute_standings` – очки, соперники, цвета и Бухгольц из истории;
//!   - `generate_round` – жеребьёвка следующего тура без повторных встреч.
//!
//! Вокруг ядра: доменная модель (`domain`), рантайм и лобби турниров
//! (`tournament`), инфраструктура (`infra`) и внешний API (`api`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod tournament;

pub use engine::{generate_round, recompute_standings, total_rounds, RandomSource};
