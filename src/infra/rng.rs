use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) – для живых турниров.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn flip_coin(&mut self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одну и ту же жеребьёвку при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    /// Для тестов: seed из одного числа.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn flip_coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// "Монетка" без случайности: всегда один и тот же ответ, перемешивания нет.
///
/// Удобно, когда в тесте нужно полностью выключить случайность.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCoin(pub bool);

impl RandomSource for FixedCoin {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn flip_coin(&mut self) -> bool {
        self.0
    }
}
