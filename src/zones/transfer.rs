//! Game-level zone moves that need player lookup and logging.

use crate::core::entity::InstanceId;
use crate::core::state::Game;
use crate::error::{GameError, Result};
use crate::events::EventKind;

impl Game {
    /// Move an instance to its owner's graveyard, logging `reason`.
    ///
    /// Fails if the instance is untracked, if its owner is not one of the
    /// two players, or if it is already in a graveyard.
    pub fn move_to_graveyard(&mut self, id: &InstanceId, reason: &str) -> Result<()> {
        let card = self
            .zones
            .get(id)
            .ok_or_else(|| GameError::CardNotFound(id.clone()))?;
        let name = card.name().to_string();
        let owner = self
            .seat_of(&card.owner)
            .ok_or_else(|| GameError::OwnerNotFound(card.owner.clone()))?;

        self.zones.move_to_graveyard(id, owner)?;
        self.log_event(
            Some(owner),
            EventKind::Graveyard,
            format!("{name} moved to graveyard ({reason})"),
        );
        Ok(())
    }
}
