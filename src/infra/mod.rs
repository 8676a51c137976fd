//! Инфраструктурный слой вокруг движка жеребьёвки:
//! - генерация ID;
//! - RNG-реализации для движка и seed для них;
//! - абстракция хранения турниров;
//! - маппинги между API и domain;
//! - инициализация логгера для бинарей.

pub mod ids;
pub mod logging;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use logging::init_logger;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
