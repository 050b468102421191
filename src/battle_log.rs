//! Append-only record of what happened during the battle.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Player;

/// One event in the move log. `Display` renders the text shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEntry {
    /// Both fleets are placed; player 1 opens fire.
    BattleStarted,
    Miss {
        attacker: Player,
        at: (usize, usize),
    },
    Hit {
        attacker: Player,
        target: Player,
        at: (usize, usize),
    },
    Sunk {
        attacker: Player,
        target: Player,
        at: (usize, usize),
    },
    Victory {
        winner: Player,
    },
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::BattleStarted => write!(f, "Batalha iniciada! Jogador 1 começa."),
            LogEntry::Miss { attacker, .. } => write!(f, "Jogador {} errou o tiro.", attacker),
            LogEntry::Hit {
                attacker, target, ..
            } => write!(f, "Jogador {} acertou um navio do Jogador {}!", attacker, target),
            LogEntry::Sunk {
                attacker, target, ..
            } => write!(f, "Jogador {} afundou um navio do Jogador {}!", attacker, target),
            LogEntry::Victory { winner } => write!(f, "🎉 Jogador {} venceu a batalha!", winner),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        log::info!("{}", entry);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
