//! Player intents and the session's intent log.
//!
//! Front ends forward three kinds of intent: roll the die, roll the
//! last-chance die, and rename a player. Every accepted intent is recorded
//! with its actor and the die face it produced, which is enough to replay a
//! session against loaded dice.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Something a front end asked the engine to do.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Take the current player's turn.
    Roll,
    /// Roll the pending player's last-chance die.
    LastChanceRoll,
    /// Change a player's display name.
    Rename { player: PlayerId, name: String },
}

/// An accepted intent with what it resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The player the intent acted on.
    pub player: PlayerId,

    pub intent: Intent,

    /// Die face, when the intent rolled one. `None` for skipped turns and renames.
    pub roll: Option<u8>,

    /// Position in the session log, starting at 0.
    pub sequence: u32,
}

impl IntentRecord {
    #[must_use]
    pub fn new(player: PlayerId, intent: Intent, roll: Option<u8>, sequence: u32) -> Self {
        Self {
            player,
            intent,
            roll,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_equality() {
        let a = Intent::Rename {
            player: PlayerId::new(0),
            name: "Ann".to_string(),
        };
        let b = Intent::Rename {
            player: PlayerId::new(0),
            name: "Ann".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(Intent::Roll, Intent::LastChanceRoll);
    }

    #[test]
    fn test_intent_record_serialization() {
        let record = IntentRecord::new(PlayerId::new(1), Intent::Roll, Some(4), 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: IntentRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert_eq!(deserialized.roll, Some(4));
    }
}
