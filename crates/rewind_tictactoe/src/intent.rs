//! Intents forwarded from the view layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Something the user asked for.
///
/// Serialized as `{"type": "place_mark", "cell": 4}` and so on, so a view
/// living outside the process can drive a session with JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// A board cell (0-8) was clicked.
    PlaceMark {
        /// Cell index, row-major.
        cell: usize,
    },
    /// A move-list entry was selected.
    JumpTo {
        /// History index to show.
        index: usize,
    },
    /// The move-list ordering checkbox changed.
    ToggleDisplayOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Intent::PlaceMark { cell: 4 }).expect("serializes");
        assert_eq!(json, r#"{"type":"place_mark","cell":4}"#);

        let parsed: Intent =
            serde_json::from_str(r#"{"type":"toggle_display_order"}"#).expect("parses");
        assert_eq!(parsed, Intent::ToggleDisplayOrder);
    }

    #[test]
    fn test_unknown_intent_rejected() {
        assert!(serde_json::from_str::<Intent>(r#"{"type":"undo"}"#).is_err());
    }
}
