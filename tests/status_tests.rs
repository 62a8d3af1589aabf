//! Status system tests.
//!
//! Covers the modifier math as seen through combatants:
//! - Outgoing, incoming and block modifiers
//! - Turn-start ticks (Poison, Regen)
//! - Turn-end decay of temporary statuses

use card_combat::combatant::{Combatant, Player, Vitals};
use card_combat::status::{Decay, Polarity, StatusKind, StatusTable, MAX_STACKS};

/// Test that 8 base damage with Weak deals 6.
#[test]
fn test_weak_reduces_outgoing() {
    let mut attacker = StatusTable::new();
    attacker.apply(StatusKind::Weak, 1);

    let mut target = Vitals::new("Dummy", 50);
    let report = target.take_damage(attacker.modify_outgoing_damage(8));

    assert_eq!(report.amount, 6);
    assert_eq!(target.health(), 44);
}

/// Test that 10 base damage against Vulnerable deals 15.
#[test]
fn test_vulnerable_raises_incoming() {
    let mut target = Vitals::new("Dummy", 50);
    target.statuses_mut().apply(StatusKind::Vulnerable, 2);

    let report = target.take_damage(10);

    assert_eq!(report.amount, 15);
    assert_eq!(report.health_lost, 15);
    assert_eq!(target.health(), 35);
}

/// Test that Dexterity 2 turns 5 block into 7.
#[test]
fn test_dexterity_adds_block() {
    let mut player = Player::new(80, 3);
    player.statuses_mut().apply(StatusKind::Dexterity, 2);

    let amount = player.statuses().modify_block(5);
    player.add_block(amount);

    assert_eq!(player.block(), 7);
}

/// Test the full damage pipeline: Strength, Weak, then Vulnerable.
#[test]
fn test_modifier_pipeline_order() {
    let mut attacker = StatusTable::new();
    attacker.apply(StatusKind::Strength, 3);
    attacker.apply(StatusKind::Weak, 1);

    let mut target = Vitals::new("Dummy", 50);
    target.statuses_mut().apply(StatusKind::Vulnerable, 1);

    // (9 + 3) * 3 / 4 = 9, then 9 * 3 / 2 = 13
    let report = target.take_damage(attacker.modify_outgoing_damage(9));
    assert_eq!(report.amount, 13);
}

/// Test that Weak expires after one turn end while Strength stays.
#[test]
fn test_turn_end_decay() {
    let mut vitals = Vitals::new("Dummy", 50);
    vitals.statuses_mut().apply(StatusKind::Weak, 1);
    vitals.statuses_mut().apply(StatusKind::Frail, 2);
    vitals.statuses_mut().apply(StatusKind::Strength, 4);

    let expired = vitals.process_turn_end();

    assert_eq!(expired.as_slice(), &[StatusKind::Weak]);
    assert!(!vitals.statuses().has_status(StatusKind::Weak));
    assert_eq!(vitals.statuses().get_stacks(StatusKind::Frail), 1);
    assert_eq!(vitals.statuses().get_stacks(StatusKind::Strength), 4);
}

/// Test that Poison drains health each turn start and wears off.
#[test]
fn test_poison_ticks_down() {
    let mut vitals = Vitals::new("Dummy", 20);
    vitals.statuses_mut().apply(StatusKind::Poison, 3);
    vitals.add_block(10);

    let mut lost = Vec::new();
    for _ in 0..4 {
        let ticks = vitals.process_turn_start();
        lost.push(ticks.iter().map(|t| t.applied).sum::<i32>());
    }

    // Poison ignores block
    assert_eq!(lost, vec![3, 2, 1, 0]);
    assert_eq!(vitals.health(), 14);
    assert_eq!(vitals.block(), 10);
    assert!(!vitals.statuses().has_status(StatusKind::Poison));
}

/// Test that Regen heals up to max health only.
#[test]
fn test_regen_capped() {
    let mut vitals = Vitals::new("Dummy", 20);
    vitals.lose_health(2);
    vitals.statuses_mut().apply(StatusKind::Regen, 5);

    let ticks = vitals.process_turn_start();

    assert_eq!(ticks[0].applied, 2);
    assert_eq!(vitals.health(), 20);
    assert_eq!(vitals.statuses().get_stacks(StatusKind::Regen), 4);
}

/// Test that removing zero stacks clears the entry.
#[test]
fn test_remove_zero_clears() {
    let mut table = StatusTable::new();
    table.apply(StatusKind::Strength, 7);
    table.remove(StatusKind::Strength, 0);

    assert!(!table.has_status(StatusKind::Strength));
    assert!(table.is_empty());
}

/// Test that stacks saturate rather than overflow.
#[test]
fn test_stacks_saturate() {
    let mut table = StatusTable::new();
    table.apply(StatusKind::Poison, i32::MAX);
    table.apply(StatusKind::Poison, i32::MAX);

    assert_eq!(table.get_stacks(StatusKind::Poison), MAX_STACKS);
}

/// Test the fixed properties of each kind.
#[test]
fn test_kind_properties() {
    assert_eq!(StatusKind::Strength.decay(), Decay::Permanent);
    assert_eq!(StatusKind::Poison.decay(), Decay::OnTick);
    assert_eq!(StatusKind::Entangle.decay(), Decay::EndOfTurn);

    assert_eq!(StatusKind::Regen.polarity(), Polarity::Buff);
    assert_eq!(StatusKind::Frail.polarity(), Polarity::Debuff);
}
