//! Effect resolution - applying card effects to combatants.
//!
//! The `EffectResolver` walks a card's effect list in order and routes
//! each effect to the component that owns the resource it touches:
//! combatant vitals for damage, block and healing, the target's status
//! table for statuses, and the player's piles and energy pool for the
//! rest. It keeps no state of its own.
//!
//! There is no rollback: if one effect fails, earlier effects of the
//! same card stay applied and later ones still run.

use tracing::debug;

use super::Effect;
use crate::cards::CardInstance;
use crate::combatant::{Combatant, Player, Roster};
use crate::core::{CombatantId, GameRng};
use crate::engine::CombatEvent;
use crate::error::{CombatError, Result};

/// Context for resolving effects.
///
/// Carries what the resolver needs beyond the roster: randomness for
/// draws, the card being played (for self-exhaust), and the event sink.
pub struct ResolverContext<'a> {
    pub rng: &'a mut GameRng,
    /// The card currently resolving, if any.
    pub played: Option<&'a mut CardInstance>,
    pub events: &'a mut Vec<CombatEvent>,
}

impl<'a> ResolverContext<'a> {
    pub fn new(rng: &'a mut GameRng, events: &'a mut Vec<CombatEvent>) -> Self {
        Self { rng, played: None, events }
    }

    /// Attach the card being played.
    #[must_use]
    pub fn with_played(mut self, card: &'a mut CardInstance) -> Self {
        self.played = Some(card);
        self
    }

    /// Log an event and append it to the sink.
    pub fn emit(&mut self, event: CombatEvent) {
        event.log();
        self.events.push(event);
    }
}

/// Result of resolving one effect against one target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect resolved.
    Success,
    /// Effect had nothing to act on (dead target, no card to exhaust).
    Skipped,
    /// Effect could not be routed; earlier effects are not undone.
    Failed(CombatError),
}

impl ResolveResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ResolveResult::Success)
    }
}

/// Resolves effects against combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a card's effects in declaration order.
    ///
    /// Damage, Heal and ApplyStatus resolve once per target, in target
    /// order. Block and the player-resource effects always act on the
    /// caster and resolve once, however many targets the card has.
    pub fn resolve_card(
        roster: &mut Roster,
        effects: &[Effect],
        caster: CombatantId,
        targets: &[CombatantId],
        ctx: &mut ResolverContext<'_>,
    ) -> Vec<ResolveResult> {
        let mut results = Vec::with_capacity(effects.len() * targets.len().max(1));

        for effect in effects {
            if Self::is_per_target(effect) {
                for &target in targets {
                    results.push(Self::resolve_single(roster, effect, caster, target, ctx));
                }
            } else {
                results.push(Self::resolve_single(roster, effect, caster, caster, ctx));
            }
        }

        results
    }

    /// Resolve a single effect on a target.
    pub fn resolve_single(
        roster: &mut Roster,
        effect: &Effect,
        caster: CombatantId,
        target: CombatantId,
        ctx: &mut ResolverContext<'_>,
    ) -> ResolveResult {
        match Self::try_resolve(roster, effect, caster, target, ctx) {
            Ok(result) => result,
            Err(err) => {
                debug!(target: "combat::effects", %effect, %caster, %target, error = %err, "effect failed");
                ResolveResult::Failed(err)
            }
        }
    }

    fn is_per_target(effect: &Effect) -> bool {
        matches!(effect, Effect::Damage(_) | Effect::Heal(_) | Effect::ApplyStatus { .. })
    }

    fn try_resolve(
        roster: &mut Roster,
        effect: &Effect,
        caster: CombatantId,
        target: CombatantId,
        ctx: &mut ResolverContext<'_>,
    ) -> Result<ResolveResult> {
        // Validate both ids before touching anything.
        roster.get(caster)?;
        if roster.get(target)?.is_dead() && !effect.is_player_resource() {
            return Ok(ResolveResult::Skipped);
        }

        match *effect {
            Effect::Damage(base) => {
                let amount = roster.get(caster)?.statuses().modify_outgoing_damage(base);
                let report = roster.get_mut(target)?.take_damage(amount);
                ctx.emit(CombatEvent::Damage {
                    source: caster,
                    target,
                    amount: report.amount,
                    blocked: report.blocked,
                    health_lost: report.health_lost,
                });
                if report.killed {
                    debug!(target: "combat::effects", %target, "killed");
                    ctx.emit(CombatEvent::Died { target });
                }
            }

            Effect::Block(base) => {
                let caster_ref = roster.get_mut(caster)?;
                let amount = caster_ref.statuses().modify_block(base);
                let total = caster_ref.add_block(amount);
                ctx.emit(CombatEvent::BlockGained { target: caster, amount, total });
            }

            Effect::Heal(amount) => {
                let healed = roster.get_mut(target)?.heal(amount);
                ctx.emit(CombatEvent::Healed { target, amount: healed });
            }

            Effect::ApplyStatus { kind, stacks } => {
                let stacks = stacks.max(0);
                let total = roster.get_mut(target)?.statuses_mut().apply(kind, stacks);
                ctx.emit(CombatEvent::StatusApplied { target, kind, stacks, total });
            }

            Effect::DrawCards(count) => {
                let player = Self::player_resource(roster, caster, "a draw pile")?;
                let report = player.piles_mut().draw(to_count(count), ctx.rng);
                ctx.emit(CombatEvent::CardsDrawn {
                    count: report.drawn,
                    reshuffled: report.reshuffled,
                });
            }

            Effect::GainEnergy(amount) => {
                let player = Self::player_resource(roster, caster, "an energy pool")?;
                let amount = amount.max(0);
                let energy = player.gain_energy(amount);
                ctx.emit(CombatEvent::EnergyGained { amount, energy });
            }

            Effect::Discard(count) => {
                let player = Self::player_resource(roster, caster, "a hand")?;
                let count = player.piles_mut().discard_from_hand(to_count(count));
                ctx.emit(CombatEvent::CardsDiscarded { count });
            }

            Effect::Exhaust(count) if count <= 0 => {
                Self::player_resource(roster, caster, "a hand")?;
                let Some(card) = ctx.played.as_deref_mut() else {
                    return Ok(ResolveResult::Skipped);
                };
                card.exhaust();
                ctx.emit(CombatEvent::CardsExhausted { count: 1 });
            }

            Effect::Exhaust(count) => {
                let player = Self::player_resource(roster, caster, "a hand")?;
                let count = player.piles_mut().exhaust_from_hand(to_count(count));
                ctx.emit(CombatEvent::CardsExhausted { count });
            }
        }

        debug!(target: "combat::effects", %effect, %caster, %target, "resolved");
        Ok(ResolveResult::Success)
    }

    /// Only the player owns piles and energy.
    fn player_resource<'r>(
        roster: &'r mut Roster,
        caster: CombatantId,
        resource: &'static str,
    ) -> Result<&'r mut Player> {
        if caster.is_player() {
            Ok(roster.player_mut())
        } else {
            Err(CombatError::NoSuchResource(caster, resource))
        }
    }
}

fn to_count(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardId, CardTemplate};
    use crate::combatant::Enemy;
    use crate::intent::WeightedPlanner;
    use crate::status::StatusKind;

    const ENEMY: CombatantId = CombatantId::Enemy(0);

    fn roster() -> Roster {
        Roster::new(Player::new(80, 3), vec![Enemy::new("Jaw Worm", 40, WeightedPlanner::default())])
    }

    fn resolve(roster: &mut Roster, effects: &[Effect], target: CombatantId) -> (Vec<ResolveResult>, Vec<CombatEvent>) {
        let mut rng = GameRng::new(0);
        let mut events = Vec::new();
        let mut ctx = ResolverContext::new(&mut rng, &mut events);
        let results = EffectResolver::resolve_card(roster, effects, CombatantId::Player, &[target], &mut ctx);
        (results, events)
    }

    #[test]
    fn test_damage_composes_modifiers() {
        let mut roster = roster();
        roster.player_mut().statuses_mut().apply(StatusKind::Strength, 2);
        roster.player_mut().statuses_mut().apply(StatusKind::Weak, 1);
        roster.enemy_mut(0).unwrap().statuses_mut().apply(StatusKind::Vulnerable, 1);

        // (6 + 2) * 3 / 4 = 6, then * 3 / 2 = 9
        let (results, events) = resolve(&mut roster, &[Effect::Damage(6)], ENEMY);
        assert_eq!(results, vec![ResolveResult::Success]);
        assert_eq!(roster.enemy(0).unwrap().health(), 31);
        assert!(matches!(events[0], CombatEvent::Damage { amount: 9, health_lost: 9, .. }));
    }

    #[test]
    fn test_block_goes_to_caster() {
        let mut roster = roster();
        roster.player_mut().statuses_mut().apply(StatusKind::Dexterity, 2);

        resolve(&mut roster, &[Effect::Block(5)], ENEMY);
        assert_eq!(roster.player().block(), 7);
        assert_eq!(roster.enemy(0).unwrap().block(), 0);
    }

    #[test]
    fn test_heal_unmodified() {
        let mut roster = roster();
        roster.player_mut().take_damage(10);
        roster.player_mut().statuses_mut().apply(StatusKind::Weak, 1);

        resolve(&mut roster, &[Effect::Heal(4)], CombatantId::Player);
        assert_eq!(roster.player().health(), 74);
    }

    #[test]
    fn test_apply_status_to_target() {
        let mut roster = roster();
        resolve(&mut roster, &[Effect::status(StatusKind::Vulnerable, 2)], ENEMY);
        assert_eq!(roster.enemy(0).unwrap().statuses().get_stacks(StatusKind::Vulnerable), 2);
        assert!(roster.player().statuses().is_empty());
    }

    #[test]
    fn test_effects_in_order_no_rollback() {
        let mut roster = roster();
        let effects = [Effect::Damage(5), Effect::Damage(50), Effect::Damage(5)];

        let (results, events) = resolve(&mut roster, &effects, ENEMY);
        assert_eq!(results, vec![ResolveResult::Success, ResolveResult::Success, ResolveResult::Skipped]);
        assert!(roster.enemy(0).unwrap().is_dead());
        assert!(events.contains(&CombatEvent::Died { target: ENEMY }));
    }

    #[test]
    fn test_player_resources() {
        let mut roster = roster();
        for id in 0..4 {
            let card = CardInstance::new(Arc::new(CardTemplate::new(CardId::new(id), "Filler", 1)));
            roster.player_mut().add_to_deck(card);
        }

        let effects = [Effect::DrawCards(3), Effect::GainEnergy(2), Effect::Discard(1), Effect::Exhaust(1)];
        let (results, _) = resolve(&mut roster, &effects, CombatantId::Player);
        assert!(results.iter().all(ResolveResult::is_success));

        let piles = roster.player().piles();
        assert_eq!(piles.hand().len(), 1);
        assert_eq!(piles.discard_pile().len(), 1);
        assert_eq!(piles.exhaust_pile().len(), 1);
        assert_eq!(roster.player().energy(), 5);
    }

    #[test]
    fn test_exhaust_self_marks_played_card() {
        let mut roster = roster();
        let mut rng = GameRng::new(0);
        let mut events = Vec::new();
        let mut card = CardInstance::new(Arc::new(CardTemplate::new(CardId::new(1), "Offering", 0)));

        let result = {
            let mut ctx = ResolverContext::new(&mut rng, &mut events).with_played(&mut card);
            EffectResolver::resolve_single(&mut roster, &Effect::exhaust_self(), CombatantId::Player, CombatantId::Player, &mut ctx)
        };
        assert_eq!(result, ResolveResult::Success);
        assert!(card.is_exhausted());

        let mut ctx = ResolverContext::new(&mut rng, &mut events);
        let result = EffectResolver::resolve_single(&mut roster, &Effect::exhaust_self(), CombatantId::Player, CombatantId::Player, &mut ctx);
        assert_eq!(result, ResolveResult::Skipped);
    }

    #[test]
    fn test_enemy_caster_has_no_piles() {
        let mut roster = roster();
        let mut rng = GameRng::new(0);
        let mut events = Vec::new();
        let mut ctx = ResolverContext::new(&mut rng, &mut events);

        let result = EffectResolver::resolve_single(&mut roster, &Effect::DrawCards(1), ENEMY, ENEMY, &mut ctx);
        assert_eq!(result, ResolveResult::Failed(CombatError::NoSuchResource(ENEMY, "a draw pile")));
    }

    #[test]
    fn test_unknown_target_fails() {
        let mut roster = roster();
        let (results, _) = resolve(&mut roster, &[Effect::Damage(5)], CombatantId::Enemy(4));
        assert_eq!(results, vec![ResolveResult::Failed(CombatError::UnknownCombatant(CombatantId::Enemy(4)))]);
    }

    #[test]
    fn test_block_resolves_once_for_many_targets() {
        let mut roster = Roster::new(
            Player::new(80, 3),
            vec![
                Enemy::new("A", 10, WeightedPlanner::default()),
                Enemy::new("B", 10, WeightedPlanner::default()),
            ],
        );
        let mut rng = GameRng::new(0);
        let mut events = Vec::new();
        let mut ctx = ResolverContext::new(&mut rng, &mut events);
        let targets = [CombatantId::Enemy(0), CombatantId::Enemy(1)];

        let results = EffectResolver::resolve_card(
            &mut roster,
            &[Effect::Damage(4), Effect::Block(3)],
            CombatantId::Player,
            &targets,
            &mut ctx,
        );
        assert_eq!(results.len(), 3);
        assert_eq!(roster.player().block(), 3);
        assert_eq!(roster.enemy(1).unwrap().health(), 6);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_resolved_events_are_logged() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let mut roster = roster();
        let (_, events) = tracing::subscriber::with_default(subscriber, || {
            resolve(&mut roster, &[Effect::Damage(6), Effect::Block(5)], ENEMY)
        });
        assert_eq!(events.len(), 2);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().filter(|line| line.contains("combat::engine")).collect();
        assert_eq!(lines.len(), 2, "{}", output);
        assert!(lines[0].contains("event=\"damage\""), "{}", output);
        assert!(lines[1].contains("event=\"block_gained\""), "{}", output);
    }
}
