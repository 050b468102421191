//! Common types for the hot-seat game: players, phases, attack results and
//! the errors every command can reject with.

use core::fmt;

use crate::bitboard::BitBoardError;

/// One of the two players sharing the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a player number.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Game phase. Moves strictly forward; only a new game returns to `Placement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Placement,
    Battle,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Battle => write!(f, "battle"),
            Phase::Ended => write!(f, "ended"),
        }
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Shot landed in open water; the turn passes.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship of the given size.
    Sunk { size: usize },
}

impl AttackResult {
    /// Whether the attacker keeps the turn.
    pub fn keeps_turn(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Reasons a command is rejected. A rejected command never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g., invalid index).
    BitBoard(BitBoardError),
    /// Command is not legal in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// Command issued by the player who does not hold the turn.
    NotYourTurn { expected: Player, actual: Player },
    /// Size is not part of the fleet.
    InvalidShipSize(usize),
    /// Inventory for this size is exhausted.
    NoShipsLeft(usize),
    /// Cell or ship extends outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement overlaps another ship.
    Overlaps,
    /// Ship placement touches another ship, diagonals included.
    TouchesShip,
    /// Cell was already attacked.
    AlreadyAttacked,
    /// Ships remain to be placed for the current player.
    PlacementIncomplete,
    /// Random placement could not find a valid layout.
    UnableToPlaceShip,
    /// A ship cell has no owning ship record.
    UnknownShipHit,
    /// Every cell of the target board has already been attacked.
    NoTargetsLeft,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Command requires the {} phase, game is in {}", expected, actual)
            }
            GameError::NotYourTurn { expected, actual } => {
                write!(f, "It is player {}'s turn, not player {}'s", expected, actual)
            }
            GameError::InvalidShipSize(size) => write!(f, "No ship of size {} in the fleet", size),
            GameError::NoShipsLeft(size) => write!(f, "No ships of size {} left to place", size),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::TouchesShip => write!(f, "Ship placement touches another ship"),
            GameError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            GameError::PlacementIncomplete => write!(f, "Placement incomplete"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::UnknownShipHit => write!(f, "Hit cell has no owning ship"),
            GameError::NoTargetsLeft => write!(f, "No unattacked cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
