//! Serializable view of a whole session.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRngState, IntentRecord, PlayerId, PublicState};

/// Board, observable state, intent log and dice at one point in time.
///
/// Cloning is cheap: state collections and the log are persistent.
/// Snapshots of sessions on seeded dice can be resumed with
/// `SessionBuilder::resume`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub state: PublicState,
    pub current_player: Option<PlayerId>,
    pub history: Vector<IntentRecord>,
    /// Dice position. `None` for scripted dice.
    pub dice: Option<GameRngState>,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot written by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
