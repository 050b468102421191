#![cfg(feature = "std")]
//! Terminal front end for two players passing one device back and forth.

use std::io::{self, BufRead, Write};
use std::string::String;

use anyhow::anyhow;
use rand::rngs::SmallRng;

use crate::{
    common::{AttackResult, Phase, Player},
    config::{ship_class, BOARD_SIZE, RECENT_LOG_ENTRIES},
    game::GameEngine,
    ship::Orientation,
};

/// Format a coordinate the way players type it, e.g. `B7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `B7` style input into (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
        return None;
    }
    Some((row - 1, col))
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.chars().next()?.to_ascii_uppercase() {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Interactive session reading commands from `input` and drawing to `output`.
pub struct HotseatSession<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    rng: SmallRng,
    auto_place: bool,
}

impl<R: BufRead, W: Write> HotseatSession<R, W> {
    pub fn new(input: R, output: W, rng: SmallRng) -> Self {
        Self::from_engine(GameEngine::new(), input, output, rng)
    }

    /// Continue from an engine that is already set up.
    pub fn from_engine(engine: GameEngine, input: R, output: W, rng: SmallRng) -> Self {
        Self {
            engine,
            input,
            output,
            rng,
            auto_place: false,
        }
    }

    /// Place every fleet at random without asking.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until someone wins. Returns `None` if the players quit or input ends.
    pub fn run(&mut self) -> anyhow::Result<Option<Player>> {
        loop {
            let keep_going = match self.engine.phase() {
                Phase::Placement => self.placement_step()?,
                Phase::Battle => self.battle_step()?,
                Phase::Ended => {
                    self.show_final()?;
                    return Ok(self.engine.winner());
                }
            };
            if !keep_going {
                writeln!(self.output, "Game abandoned.")?;
                return Ok(None);
            }
        }
    }

    fn placement_step(&mut self) -> anyhow::Result<bool> {
        let player = self.engine.current_player();
        if !self.engine.has_ships_left(player) {
            let phase = self
                .engine
                .finish_placement()
                .map_err(|e| anyhow!(e))?;
            let message = match phase {
                Phase::Placement => std::format!(
                    "Agora é a vez do Jogador {} posicionar seus navios.",
                    self.engine.current_player()
                ),
                _ => String::from("Batalha iniciada! Jogador 1 começa atacando."),
            };
            return Ok(self.handoff(&message)?);
        }
        if self.auto_place {
            self.engine
                .auto_place(player, &mut self.rng)
                .map_err(|e| anyhow!(e))?;
            return Ok(true);
        }

        writeln!(self.output, "\nJogador {} - your fleet:", player)?;
        writeln!(self.output, "{}", self.engine.view(player, player))?;
        let fleet = self.engine.fleet(player);
        for (class, count) in fleet.iter() {
            writeln!(self.output, "  {} (size {}): {}", class.name(), class.size(), count)?;
        }
        let size = self.engine.selected_ship_size();
        let name = ship_class(size).map_or("?", |c| c.name());
        write!(
            self.output,
            "Place {} (size {}, {:?}) [A1 H|V, size N, r, auto, quit]: ",
            name,
            size,
            self.engine.orientation()
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let mut parts = line.split_whitespace();
        let outcome = match parts.next() {
            None => Ok(()),
            Some("auto") => self.engine.auto_place(player, &mut self.rng).map(|_| ()),
            Some("quit") | Some("q") => return Ok(false),
            Some("r") | Some("rotate") => {
                self.engine.rotate();
                Ok(())
            }
            Some("size") => match parts.next().and_then(|s| s.parse().ok()) {
                Some(size) => self.engine.select_ship(size),
                None => {
                    writeln!(self.output, "Usage: size N")?;
                    Ok(())
                }
            },
            Some(word) => match parse_coord(word) {
                Some((r, c)) => {
                    if let Some(o) = parts.next().and_then(parse_orientation) {
                        self.engine.set_orientation(o);
                    }
                    self.engine.place_selected(player, r, c).map(|_| ())
                }
                None => {
                    writeln!(self.output, "Invalid input")?;
                    Ok(())
                }
            },
        };
        if let Err(e) = outcome {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(true)
    }

    fn battle_step(&mut self) -> anyhow::Result<bool> {
        let player = self.engine.current_player();
        let target = player.other();
        writeln!(self.output, "\nVez do Jogador {}", player)?;
        writeln!(self.output, "Opponent board:")?;
        writeln!(self.output, "{}", self.engine.view(player, target))?;
        writeln!(self.output, "\nYour board:")?;
        writeln!(self.output, "{}", self.engine.view(player, player))?;
        for entry in self.engine.log().recent(RECENT_LOG_ENTRIES) {
            writeln!(self.output, "  > {}", entry)?;
        }
        write!(self.output, "Target [e.g. B7, quit]: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let line = line.trim();
        if line == "quit" || line == "q" {
            return Ok(false);
        }
        let Some((r, c)) = parse_coord(line) else {
            writeln!(self.output, "Invalid coordinate")?;
            return Ok(true);
        };
        match self.engine.attack(player, r, c) {
            Ok(AttackResult::Miss) => {
                writeln!(self.output, "{} -> miss.", coord_to_string(r, c))?;
                let message = std::format!(
                    "Agora é a vez do Jogador {}.",
                    self.engine.current_player()
                );
                return Ok(self.handoff(&message)?);
            }
            Ok(AttackResult::Hit) => {
                writeln!(self.output, "{} -> hit! Fire again.", coord_to_string(r, c))?;
            }
            Ok(AttackResult::Sunk { size }) => {
                let name = ship_class(size).map_or("ship", |c| c.name());
                writeln!(self.output, "{} -> sunk the {}!", coord_to_string(r, c), name)?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(true)
    }

    fn show_final(&mut self) -> io::Result<()> {
        for owner in [Player::One, Player::Two] {
            writeln!(self.output, "\nJogador {} board:", owner)?;
            writeln!(self.output, "{}", self.engine.view(owner.other(), owner))?;
        }
        if let Some(entry) = self.engine.log().last() {
            writeln!(self.output, "{}", entry)?;
        }
        Ok(())
    }

    /// Hide the boards until the next player confirms they have the device.
    fn handoff(&mut self, message: &str) -> io::Result<bool> {
        writeln!(self.output, "\n=== Troca de Jogador ===\n{}", message)?;
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        Ok(self.read_line()?.is_some())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
