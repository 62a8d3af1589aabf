//! Card targeting rules.
//!
//! A card's `TargetRule` turns the controller's chosen target into the
//! concrete list of combatants its effects resolve against.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::combatant::{Combatant, Roster};
use crate::core::CombatantId;
use crate::error::{CombatError, Result};

/// Targets resolved for one card play, in resolution order.
pub type Targets = SmallVec<[CombatantId; 4]>;

/// Which combatants a card's effects apply to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRule {
    /// The player who plays the card.
    #[default]
    Self_,
    /// One living enemy chosen by the controller.
    SingleEnemy,
    /// Every living enemy, in encounter order.
    AllEnemies,
    /// The player, then every living enemy.
    Everyone,
    /// No target; effects resolve against the player (draw, energy).
    Untargeted,
}

impl TargetRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TargetRule::Self_ => "self",
            TargetRule::SingleEnemy => "a single enemy",
            TargetRule::AllEnemies => "all enemies",
            TargetRule::Everyone => "everyone",
            TargetRule::Untargeted => "nothing",
        }
    }

    /// Whether the controller has to pick a target.
    #[must_use]
    pub const fn needs_choice(self) -> bool {
        matches!(self, TargetRule::SingleEnemy)
    }

    /// Expand the rule into concrete targets.
    ///
    /// `chosen` is only consulted for [`TargetRule::SingleEnemy`]. Fails
    /// without side effects if the choice is missing, dead, or not part
    /// of the encounter.
    pub fn resolve(self, chosen: Option<CombatantId>, roster: &Roster) -> Result<Targets> {
        match self {
            TargetRule::Self_ | TargetRule::Untargeted => Ok(smallvec![CombatantId::Player]),
            TargetRule::SingleEnemy => {
                let target = match chosen {
                    Some(id @ CombatantId::Enemy(_)) => id,
                    Some(other) => {
                        return Err(CombatError::InvalidTarget { rule: self.name(), target: other })
                    }
                    None => {
                        return Err(CombatError::InvalidTarget {
                            rule: self.name(),
                            target: CombatantId::Player,
                        })
                    }
                };
                if roster.get(target)?.is_dead() {
                    return Err(CombatError::TargetDead(target));
                }
                Ok(smallvec![target])
            }
            TargetRule::AllEnemies => Ok(roster.living_enemy_ids().collect()),
            TargetRule::Everyone => {
                let mut targets: Targets = smallvec![CombatantId::Player];
                targets.extend(roster.living_enemy_ids());
                Ok(targets)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Enemy, Player};
    use crate::intent::WeightedPlanner;

    fn roster() -> Roster {
        let enemies = vec![
            Enemy::new("Slime", 10, WeightedPlanner::default()),
            Enemy::new("Louse", 10, WeightedPlanner::default()),
            Enemy::new("Cultist", 10, WeightedPlanner::default()),
        ];
        let mut roster = Roster::new(Player::new(80, 3), enemies);
        roster.enemy_mut(1).unwrap().take_damage(10);
        roster
    }

    #[test]
    fn test_self_ignores_choice() {
        let targets = TargetRule::Self_.resolve(Some(CombatantId::Enemy(0)), &roster()).unwrap();
        assert_eq!(targets.as_slice(), &[CombatantId::Player]);
    }

    #[test]
    fn test_single_enemy() {
        let roster = roster();
        let targets = TargetRule::SingleEnemy.resolve(Some(CombatantId::Enemy(2)), &roster).unwrap();
        assert_eq!(targets.as_slice(), &[CombatantId::Enemy(2)]);
    }

    #[test]
    fn test_single_enemy_errors() {
        let roster = roster();
        assert_eq!(
            TargetRule::SingleEnemy.resolve(Some(CombatantId::Enemy(1)), &roster),
            Err(CombatError::TargetDead(CombatantId::Enemy(1)))
        );
        assert_eq!(
            TargetRule::SingleEnemy.resolve(Some(CombatantId::Enemy(9)), &roster),
            Err(CombatError::UnknownCombatant(CombatantId::Enemy(9)))
        );
        assert!(matches!(
            TargetRule::SingleEnemy.resolve(Some(CombatantId::Player), &roster),
            Err(CombatError::InvalidTarget { .. })
        ));
        assert!(TargetRule::SingleEnemy.resolve(None, &roster).is_err());
    }

    #[test]
    fn test_all_enemies_skips_dead() {
        let targets = TargetRule::AllEnemies.resolve(None, &roster()).unwrap();
        assert_eq!(targets.as_slice(), &[CombatantId::Enemy(0), CombatantId::Enemy(2)]);
    }

    #[test]
    fn test_everyone() {
        let targets = TargetRule::Everyone.resolve(None, &roster()).unwrap();
        assert_eq!(
            targets.as_slice(),
            &[CombatantId::Player, CombatantId::Enemy(0), CombatantId::Enemy(2)]
        );
    }
}
