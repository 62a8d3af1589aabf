//! Card and effect resolution tests.
//!
//! These tests cover:
//! - Multi-target rules and per-target resolution
//! - Player resource effects (draw, energy, discard, exhaust)
//! - Failure handling without rollback
//! - Registry lookups and card instances

use std::sync::Arc;

use card_combat::cards::{CardId, CardInstance, CardRegistry, CardTemplate, CardType};
use card_combat::combatant::{Combatant, Enemy, Player, Roster};
use card_combat::core::{CombatantId, GameRng};
use card_combat::effects::{Effect, EffectResolver, ResolveResult, ResolverContext, TargetRule};
use card_combat::engine::CombatEvent;
use card_combat::error::CombatError;
use card_combat::intent::WeightedPlanner;
use card_combat::status::StatusKind;

fn roster(enemy_count: usize) -> Roster {
    let enemies = (0..enemy_count)
        .map(|i| Enemy::new(format!("Louse {}", i), 20, WeightedPlanner::default()))
        .collect();
    Roster::new(Player::new(60, 3), enemies)
}

fn play(
    roster: &mut Roster,
    rule: TargetRule,
    chosen: Option<CombatantId>,
    effects: &[Effect],
) -> (Vec<ResolveResult>, Vec<CombatEvent>) {
    let targets = rule.resolve(chosen, roster).unwrap();
    let mut rng = GameRng::new(0);
    let mut events = Vec::new();
    let mut ctx = ResolverContext::new(&mut rng, &mut events);
    let results = EffectResolver::resolve_card(roster, effects, CombatantId::Player, &targets, &mut ctx);
    (results, events)
}

fn filler(count: usize) -> Vec<CardInstance> {
    let card = Arc::new(CardTemplate::new(CardId::new(9), "Filler", 1));
    (0..count).map(|_| CardInstance::new(Arc::clone(&card))).collect()
}

/// Test that an all-enemies card hits every living enemy once.
#[test]
fn test_all_enemies_damage() {
    let mut roster = roster(3);
    roster.enemy_mut(1).unwrap().take_damage(20);

    let (results, events) = play(&mut roster, TargetRule::AllEnemies, None, &[Effect::Damage(7)]);

    assert_eq!(results, vec![ResolveResult::Success, ResolveResult::Success]);
    assert_eq!(roster.enemy(0).unwrap().health(), 13);
    assert_eq!(roster.enemy(1).unwrap().health(), 0);
    assert_eq!(roster.enemy(2).unwrap().health(), 13);
    let hits = events.iter().filter(|e| matches!(e, CombatEvent::Damage { .. })).count();
    assert_eq!(hits, 2);
}

/// Test that block is granted once even when a card has several targets.
#[test]
fn test_block_once_per_card() {
    let mut roster = roster(3);

    let (results, _) = play(
        &mut roster,
        TargetRule::AllEnemies,
        None,
        &[Effect::Damage(2), Effect::Block(4)],
    );

    assert_eq!(results.len(), 4);
    assert_eq!(roster.player().block(), 4);
}

/// Test that an everyone card includes the player.
#[test]
fn test_everyone_includes_player() {
    let mut roster = roster(2);

    play(&mut roster, TargetRule::Everyone, None, &[Effect::status(StatusKind::Weak, 2)]);

    assert_eq!(roster.player().statuses().get_stacks(StatusKind::Weak), 2);
    assert_eq!(roster.enemy(0).unwrap().statuses().get_stacks(StatusKind::Weak), 2);
    assert_eq!(roster.enemy(1).unwrap().statuses().get_stacks(StatusKind::Weak), 2);
}

/// Test that block soaks damage before health.
#[test]
fn test_block_absorbs_card_damage() {
    let mut roster = roster(1);
    roster.enemy_mut(0).unwrap().add_block(5);

    let (_, events) = play(&mut roster, TargetRule::SingleEnemy, Some(CombatantId::Enemy(0)), &[Effect::Damage(8)]);

    assert_eq!(roster.enemy(0).unwrap().block(), 0);
    assert_eq!(roster.enemy(0).unwrap().health(), 17);
    assert!(events.contains(&CombatEvent::Damage {
        source: CombatantId::Player,
        target: CombatantId::Enemy(0),
        amount: 8,
        blocked: 5,
        health_lost: 3,
    }));
}

/// Test that effects keep running after one kills the target.
#[test]
fn test_effects_after_death_skip() {
    let mut roster = roster(1);

    let (results, events) = play(
        &mut roster,
        TargetRule::SingleEnemy,
        Some(CombatantId::Enemy(0)),
        &[Effect::Damage(25), Effect::status(StatusKind::Vulnerable, 1), Effect::GainEnergy(1)],
    );

    assert_eq!(
        results,
        vec![ResolveResult::Success, ResolveResult::Skipped, ResolveResult::Success]
    );
    assert!(events.contains(&CombatEvent::Died { target: CombatantId::Enemy(0) }));
    assert!(!roster.enemy(0).unwrap().statuses().has_status(StatusKind::Vulnerable));
    assert_eq!(roster.player().energy(), 4);
}

/// Test that healing never exceeds max health.
#[test]
fn test_heal_capped() {
    let mut roster = roster(1);
    roster.player_mut().lose_health(5);

    let (_, events) = play(&mut roster, TargetRule::Self_, None, &[Effect::Heal(12)]);

    assert_eq!(roster.player().health(), 60);
    assert!(events.contains(&CombatEvent::Healed { target: CombatantId::Player, amount: 5 }));
}

/// Test the hand-manipulating effects.
#[test]
fn test_draw_discard_exhaust() {
    let mut roster = roster(1);
    for card in filler(6) {
        roster.player_mut().add_to_deck(card);
    }

    play(
        &mut roster,
        TargetRule::Untargeted,
        None,
        &[Effect::DrawCards(4), Effect::Discard(1), Effect::Exhaust(2)],
    );

    let piles = roster.player().piles();
    assert_eq!(piles.draw_pile().len(), 2);
    assert_eq!(piles.hand().len(), 1);
    assert_eq!(piles.discard_pile().len(), 1);
    assert_eq!(piles.exhaust_pile().len(), 2);
    assert!(piles.exhaust_pile().iter().all(|card| card.is_exhausted()));
}

/// Test that enemies cannot use player resource effects.
#[test]
fn test_enemy_caster_has_no_resources() {
    let mut roster = roster(1);
    let mut rng = GameRng::new(0);
    let mut events = Vec::new();
    let mut ctx = ResolverContext::new(&mut rng, &mut events);

    let results = EffectResolver::resolve_card(
        &mut roster,
        &[Effect::Block(6), Effect::DrawCards(2)],
        CombatantId::Enemy(0),
        &[CombatantId::Player],
        &mut ctx,
    );

    assert_eq!(results[0], ResolveResult::Success);
    assert_eq!(
        results[1],
        ResolveResult::Failed(CombatError::NoSuchResource(CombatantId::Enemy(0), "a draw pile"))
    );
    assert_eq!(roster.enemy(0).unwrap().block(), 6);
}

/// Test that an unknown combatant fails without touching anything.
#[test]
fn test_unknown_target_fails() {
    let mut roster = roster(1);
    let mut rng = GameRng::new(0);
    let mut events = Vec::new();
    let mut ctx = ResolverContext::new(&mut rng, &mut events);

    let result = EffectResolver::resolve_single(
        &mut roster,
        &Effect::Damage(5),
        CombatantId::Player,
        CombatantId::Enemy(4),
        &mut ctx,
    );

    assert_eq!(result, ResolveResult::Failed(CombatError::UnknownCombatant(CombatantId::Enemy(4))));
    assert!(events.is_empty());
}

/// Test registry lookups and instance independence.
#[test]
fn test_registry_instances() {
    let mut registry = CardRegistry::new();
    assert!(registry.register(
        CardTemplate::new(CardId::new(1), "Strike", 1)
            .with_target(TargetRule::SingleEnemy)
            .with_effect(Effect::Damage(6)),
    ));
    assert!(registry.register(
        CardTemplate::new(CardId::new(2), "Defend", 1)
            .with_type(CardType::Skill)
            .with_effect(Effect::Block(5)),
    ));
    assert!(!registry.register(CardTemplate::new(CardId::new(1), "Strike+", 1)));

    let mut first = registry.instantiate(CardId::new(1)).unwrap();
    let second = registry.instantiate(CardId::new(1)).unwrap();
    first.set_cost(0);

    assert!(first.shares_template(&second));
    assert_eq!(first.cost(), 0);
    assert_eq!(second.cost(), 1);
    assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Strike");
    assert_eq!(registry.find_by_type(CardType::Skill).count(), 1);
    assert!(registry.instantiate(CardId::new(3)).is_none());
}
