//! Remaining-to-place ship counts for one player.

use crate::common::GameError;
use crate::config::{FLEET, MAX_SHIP_SIZE};
use crate::ship::{validate_size, ShipClass};

/// Ships a player still has to place, indexed by size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetInventory {
    remaining: [u8; MAX_SHIP_SIZE],
}

impl FleetInventory {
    /// The full initial allotment.
    pub fn full() -> Self {
        let mut remaining = [0; MAX_SHIP_SIZE];
        for class in FLEET.iter() {
            remaining[class.size() - 1] = class.count();
        }
        Self { remaining }
    }

    /// Count left to place for `size`; zero for sizes outside the fleet.
    pub fn remaining(&self, size: usize) -> u8 {
        match validate_size(size) {
            Ok(()) => self.remaining[size - 1],
            Err(_) => 0,
        }
    }

    pub fn has_ships_left(&self) -> bool {
        self.remaining.iter().any(|&count| count > 0)
    }

    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().map(|&count| count as usize).sum()
    }

    /// Largest size that still has ships to place.
    pub fn next_available(&self) -> Option<usize> {
        (1..=MAX_SHIP_SIZE).rev().find(|&size| self.remaining(size) > 0)
    }

    /// Fleet classes with their remaining counts, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShipClass, u8)> + '_ {
        FLEET
            .iter()
            .map(move |class| (*class, self.remaining(class.size())))
    }

    /// Fail unless a ship of `size` can be taken.
    pub(crate) fn check(&self, size: usize) -> Result<(), GameError> {
        validate_size(size)?;
        if self.remaining[size - 1] == 0 {
            return Err(GameError::NoShipsLeft(size));
        }
        Ok(())
    }

    pub(crate) fn take(&mut self, size: usize) -> Result<(), GameError> {
        self.check(size)?;
        self.remaining[size - 1] -= 1;
        Ok(())
    }
}

impl Default for FleetInventory {
    fn default() -> Self {
        Self::full()
    }
}
