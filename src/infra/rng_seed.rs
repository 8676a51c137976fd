//! Seed жеребьёвки и его детерминированное расширение.
//!
//! У лобби один мастер-seed. Каждый турнир получает свой поток:
//!
//! ```text
//! seed(tournament, stream) = SHA-256(DOMAIN || master || tournament_id || stream)
//! ```
//!
//! `stream` – сколько туров уже сыграно к моменту создания RNG, поэтому
//! поднятый из хранилища турнир не повторяет жребий уже сыгранных туров.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::TournamentId;
use crate::infra::rng::DeterministicRng;

const DOMAIN: &[u8] = b"SWISS_PAIRING_RNG_V1";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Младшие 8 байт – число (little-endian), остальное нули.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self::from_bytes(bytes)
    }

    /// Seed потока `stream` турнира `tournament_id`.
    pub fn derive(&self, tournament_id: TournamentId, stream: u64) -> Self {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(DOMAIN)
            .chain_update(self.bytes)
            .chain_update(tournament_id.to_le_bytes())
            .chain_update(stream.to_le_bytes())
            .finalize()
            .into();

        Self::from_bytes(digest)
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
