//! Encounter roster addressing combatants by id.

use super::{Combatant, Enemy, Player};
use crate::core::CombatantId;
use crate::error::{CombatError, Result};

/// Everyone taking part in one encounter, addressed by [`CombatantId`].
///
/// Enemy indices are fixed for the whole encounter; dead enemies keep
/// their slot.
#[derive(Clone, Debug)]
pub struct Roster {
    player: Player,
    enemies: Vec<Enemy>,
}

impl Roster {
    #[must_use]
    pub fn new(player: Player, enemies: Vec<Enemy>) -> Self {
        Self { player, enemies }
    }

    pub fn get(&self, id: CombatantId) -> Result<&dyn Combatant> {
        match id {
            CombatantId::Player => Ok(&self.player),
            CombatantId::Enemy(index) => self
                .enemies
                .get(index)
                .map(|enemy| enemy as &dyn Combatant)
                .ok_or(CombatError::UnknownCombatant(id)),
        }
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Result<&mut dyn Combatant> {
        match id {
            CombatantId::Player => Ok(&mut self.player),
            CombatantId::Enemy(index) => self
                .enemies
                .get_mut(index)
                .map(|enemy| enemy as &mut dyn Combatant)
                .ok_or(CombatError::UnknownCombatant(id)),
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemy(&self, index: usize) -> Result<&Enemy> {
        self.enemies.get(index).ok_or(CombatError::UnknownCombatant(CombatantId::Enemy(index)))
    }

    pub fn enemy_mut(&mut self, index: usize) -> Result<&mut Enemy> {
        self.enemies
            .get_mut(index)
            .ok_or(CombatError::UnknownCombatant(CombatantId::Enemy(index)))
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Split borrow: the player and one enemy at the same time.
    pub fn player_and_enemy_mut(&mut self, index: usize) -> Result<(&mut Player, &mut Enemy)> {
        let enemy = self
            .enemies
            .get_mut(index)
            .ok_or(CombatError::UnknownCombatant(CombatantId::Enemy(index)))?;
        Ok((&mut self.player, enemy))
    }

    /// Living enemies in encounter order.
    pub fn living_enemy_ids(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| !enemy.is_dead())
            .map(|(index, _)| CombatantId::Enemy(index))
    }

    #[must_use]
    pub fn all_enemies_dead(&self) -> bool {
        self.enemies.iter().all(Combatant::is_dead)
    }

    #[must_use]
    pub fn into_player(self) -> Player {
        self.player
    }
}
