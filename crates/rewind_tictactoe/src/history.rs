//! Ordered record of every snapshot in a game.

use crate::action::Move;
use crate::snapshot::Snapshot;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

/// Snapshots from the opening board onwards.
///
/// Never empty: index 0 is always the opening snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the opening snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of stored snapshots (at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// False for every history built through a session.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `index`, if stored.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Moves that produced each snapshot after the opening one.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.snapshots.iter().filter_map(|s| s.last_move)
    }

    /// Drops every snapshot after `cursor` and appends `next`.
    pub(crate) fn branch(mut self, cursor: usize, next: Snapshot) -> Self {
        let keep = cursor + 1;
        if self.snapshots.len() > keep {
            debug!(
                discarded = self.snapshots.len() - keep,
                cursor, "Discarding snapshots after cursor"
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(next);
        self
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
