use rand::Rng;

use crate::{
    battle_log::{BattleLog, LogEntry},
    board::Board,
    common::{AttackResult, GameError, Phase, Player},
    config::FLEET,
    fleet::FleetInventory,
    ship::{Orientation, Ship},
    view::{ships_visible, BoardView},
};

/// Whole-fleet layouts tried by [`GameEngine::auto_place`] before giving up.
const AUTO_PLACE_RETRIES: usize = 50;

/// Everything the game knows. Only [`GameEngine`] mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    phase: Phase,
    current_player: Player,
    selected_ship_size: usize,
    orientation: Orientation,
    boards: [Board; 2],
    fleets: [FleetInventory; 2],
    log: BattleLog,
    winner: Option<Player>,
}

impl GameState {
    /// Fresh state: empty boards, full fleets, player 1 placing.
    pub fn new() -> Self {
        Self {
            phase: Phase::Placement,
            current_player: Player::One,
            selected_ship_size: FLEET[0].size(),
            orientation: Orientation::Horizontal,
            boards: [Board::new(), Board::new()],
            fleets: [FleetInventory::full(), FleetInventory::full()],
            log: BattleLog::new(),
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn selected_ship_size(&self) -> usize {
        self.selected_ship_size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    pub fn fleet(&self, player: Player) -> FleetInventory {
        self.fleets[player.index()]
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Set only once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules engine for two players sharing one device.
///
/// Every command either applies completely or returns a [`GameError`] and
/// leaves the state as it was.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an engine at the start of placement.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Restore an engine from a previously taken state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Read access to the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard everything and start over in placement.
    pub fn new_game(&mut self) {
        log::debug!("new game");
        self.state = GameState::new();
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner
    }

    pub fn board(&self, player: Player) -> &Board {
        self.state.board(player)
    }

    pub fn ships(&self, player: Player) -> &[Ship] {
        self.state.board(player).ships()
    }

    pub fn fleet(&self, player: Player) -> FleetInventory {
        self.state.fleet(player)
    }

    pub fn log(&self) -> &BattleLog {
        &self.state.log
    }

    pub fn selected_ship_size(&self) -> usize {
        self.state.selected_ship_size
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// Whether `player` still has ships to place.
    pub fn has_ships_left(&self, player: Player) -> bool {
        self.state.fleet(player).has_ships_left()
    }

    /// Choose the ship size used by [`place_selected`](Self::place_selected).
    pub fn select_ship(&mut self, size: usize) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        self.state
            .fleet(self.state.current_player)
            .check(size)
            .inspect_err(|e| log::debug!("rejected ship selection: {}", e))?;
        self.state.selected_ship_size = size;
        Ok(())
    }

    /// Flip the placement orientation and return the new one.
    pub fn rotate(&mut self) -> Orientation {
        self.state.orientation = self.state.orientation.rotated();
        self.state.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.state.orientation = orientation;
    }

    /// Check a placement without applying it, e.g. for a hover preview.
    pub fn can_place(
        &self,
        player: Player,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        self.expect_turn(player)?;
        self.state.fleet(player).check(size)?;
        self.state
            .board(player)
            .check_placement(size, row, col, orientation)?;
        Ok(())
    }

    /// Place a ship of `size` for `player` and return the updated inventory.
    pub fn place_ship(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<FleetInventory, GameError> {
        if let Err(e) = self.can_place(player, row, col, size, orientation) {
            log::debug!(
                "rejected placement of size {} at ({}, {}) for player {}: {}",
                size,
                row,
                col,
                player,
                e
            );
            return Err(e);
        }
        let idx = player.index();
        self.state.boards[idx].place(size, row, col, orientation)?;
        self.state.fleets[idx].take(size)?;
        self.advance_selection();
        Ok(self.state.fleets[idx])
    }

    /// Place the selected ship size with the current orientation.
    pub fn place_selected(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<FleetInventory, GameError> {
        let (size, orientation) = (self.state.selected_ship_size, self.state.orientation);
        self.place_ship(player, row, col, size, orientation)
    }

    /// Fill the rest of `player`'s fleet with a random layout.
    ///
    /// Either every remaining ship is placed or nothing changes.
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<FleetInventory, GameError> {
        self.expect_phase(Phase::Placement)?;
        self.expect_turn(player)?;
        let idx = player.index();
        for _ in 0..AUTO_PLACE_RETRIES {
            let mut board = self.state.boards[idx].clone();
            let mut fleet = self.state.fleets[idx];
            if fill_fleet(&mut board, &mut fleet, rng).is_ok() {
                self.state.boards[idx] = board;
                self.state.fleets[idx] = fleet;
                self.advance_selection();
                return Ok(fleet);
            }
        }
        log::debug!("random placement failed for player {}", player);
        Err(GameError::UnableToPlaceShip)
    }

    /// Hand placement to player 2, or start the battle once player 2 is done.
    ///
    /// Returns the phase the game is in afterwards.
    pub fn finish_placement(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::Placement)?;
        let player = self.state.current_player;
        if self.has_ships_left(player) {
            log::debug!("player {} tried to finish with ships left", player);
            return Err(GameError::PlacementIncomplete);
        }
        match player {
            Player::One => {
                self.state.fleets[Player::Two.index()] = FleetInventory::full();
                self.state.current_player = Player::Two;
                self.state.selected_ship_size = FLEET[0].size();
            }
            Player::Two => {
                self.state.phase = Phase::Battle;
                self.state.current_player = Player::One;
                self.state.log.push(LogEntry::BattleStarted);
            }
        }
        Ok(self.state.phase)
    }

    /// Fire at the opponent's cell (row, col).
    ///
    /// A miss passes the turn; a hit or sink keeps it unless the shot wins
    /// the game.
    pub fn attack(
        &mut self,
        attacker: Player,
        row: usize,
        col: usize,
    ) -> Result<AttackResult, GameError> {
        self.expect_phase(Phase::Battle)?;
        self.expect_turn(attacker)?;
        let target = attacker.other();
        let result = self.state.boards[target.index()]
            .fire(row, col)
            .inspect_err(|e| {
                log::debug!("rejected attack by player {} at ({}, {}): {}", attacker, row, col, e)
            })?;

        let at = (row, col);
        match result {
            AttackResult::Miss => {
                self.state.log.push(LogEntry::Miss { attacker, at });
                self.state.current_player = target;
            }
            AttackResult::Hit | AttackResult::Sunk { .. } => {
                let entry = if matches!(result, AttackResult::Hit) {
                    LogEntry::Hit { attacker, target, at }
                } else {
                    LogEntry::Sunk { attacker, target, at }
                };
                self.state.log.push(entry);
                if self.state.boards[target.index()].all_sunk() {
                    self.state.phase = Phase::Ended;
                    self.state.winner = Some(attacker);
                    self.state.log.push(LogEntry::Victory { winner: attacker });
                }
            }
        }
        Ok(result)
    }

    /// What `viewer` may see of `owner`'s board right now.
    pub fn view(&self, viewer: Player, owner: Player) -> BoardView {
        let reveal = ships_visible(self.state.phase, viewer, owner);
        BoardView::new(self.state.board(owner), reveal)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        let actual = self.state.phase;
        if actual != expected {
            log::debug!("command needs {} phase, game is in {}", expected, actual);
            return Err(GameError::WrongPhase { expected, actual });
        }
        Ok(())
    }

    fn expect_turn(&self, player: Player) -> Result<(), GameError> {
        let expected = self.state.current_player;
        if player != expected {
            log::debug!("player {} acted out of turn", player);
            return Err(GameError::NotYourTurn {
                expected,
                actual: player,
            });
        }
        Ok(())
    }

    /// Move the selection off a size the current player has run out of.
    fn advance_selection(&mut self) {
        let fleet = self.state.fleet(self.state.current_player);
        if fleet.remaining(self.state.selected_ship_size) == 0 {
            if let Some(size) = fleet.next_available() {
                self.state.selected_ship_size = size;
            }
        }
    }
}

/// Place every remaining ship of `fleet` on `board`, largest first.
fn fill_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &mut FleetInventory,
    rng: &mut R,
) -> Result<(), GameError> {
    while let Some(size) = fleet.next_available() {
        let (r, c, o) = board.random_placement(rng, size)?;
        board.place(size, r, c, o)?;
        fleet.take(size)?;
    }
    Ok(())
}
