//! Headless combat simulator.
//!
//! Runs one encounter with a starter deck and a greedy autopilot: play the
//! first affordable card at the first living enemy, end the turn when
//! nothing is affordable.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use card_combat::{
    BlockExpiry, CardId, CardInstance, CardRarity, CardRegistry, CardTemplate, CardType, Combatant,
    CombatConfig, CombatEvent, Effect, Enemy, EnemyIntent, PatternPlanner, PhasePlanner, Player,
    StatusKind, TargetRule, TurnEngine, WeightedPlanner,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BlockExpiryArg {
    /// Block is cleared when the player ends their turn
    PlayerTurnEnd,
    /// Block lasts through the enemy phase
    OwnerTurnStart,
}

impl From<BlockExpiryArg> for BlockExpiry {
    fn from(arg: BlockExpiryArg) -> Self {
        match arg {
            BlockExpiryArg::OwnerTurnStart => BlockExpiry::OwnerTurnStart,
            BlockExpiryArg::PlayerTurnEnd => BlockExpiry::PlayerTurnEnd,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "combat-sim")]
#[command(about = "Simulate one card combat encounter with a greedy autopilot", long_about = None)]
struct Cli {
    /// Seed for shuffles and enemy decisions
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of enemies (1-3)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    enemies: u8,

    /// Player max health
    #[arg(long, default_value_t = 80)]
    player_health: i32,

    /// Player energy per turn
    #[arg(long, default_value_t = 3)]
    energy: i32,

    /// Cards drawn per turn
    #[arg(long, default_value_t = 5)]
    draw: usize,

    /// Give up after this many turns
    #[arg(long, default_value_t = 50)]
    max_turns: u32,

    /// When the player's block expires
    #[arg(long, value_enum, default_value = "player-turn-end")]
    block_expiry: BlockExpiryArg,

    /// Print the full event log as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CombatConfig::default()
        .with_seed(cli.seed)
        .with_draw_per_turn(cli.draw)
        .with_block_expiry(cli.block_expiry.into());

    let registry = starter_registry();
    let player = Player::new(cli.player_health, cli.energy).with_deck(starter_deck(&registry));
    let enemies = (0..usize::from(cli.enemies)).map(enemy_for_slot).collect();

    let mut engine = TurnEngine::new(player, enemies, config);
    engine.start_combat()?;
    autopilot(&mut engine, cli.max_turns)?;

    match engine.result() {
        Some(result) => println!("{:?} on turn {}", result, engine.turn_number()),
        None => println!("No result after {} turns", cli.max_turns),
    }
    println!("Player: {}/{} HP", engine.player().health(), engine.player().max_health());
    for enemy in engine.enemies() {
        println!("{}: {}/{} HP", enemy.name(), enemy.health(), enemy.max_health());
    }

    if cli.json {
        let events: Vec<&CombatEvent> = engine.history().iter().collect();
        println!("{}", serde_json::to_string_pretty(&events)?);
    }
    Ok(())
}

fn autopilot(engine: &mut TurnEngine, max_turns: u32) -> Result<()> {
    while !engine.is_over() && engine.turn_number() <= max_turns {
        let Some(&index) = engine.playable_cards().first() else {
            engine.end_turn()?;
            continue;
        };
        let target = engine.roster().living_enemy_ids().next();

        if let Err(err) = engine.play_card(index, target) {
            if err.is_structural() {
                return Err(err.into());
            }
            warn!(%err, "card rejected, ending turn");
            engine.end_turn()?;
        }
    }
    info!(turns = engine.turn_number(), events = engine.history().len(), "simulation finished");
    Ok(())
}

const STRIKE: CardId = CardId::new(1);
const DEFEND: CardId = CardId::new(2);
const BASH: CardId = CardId::new(3);
const DEADLY_POISON: CardId = CardId::new(4);
const ADRENALINE: CardId = CardId::new(5);

fn starter_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    let templates = [
        CardTemplate::new(STRIKE, "Strike", 1)
            .with_target(TargetRule::SingleEnemy)
            .with_effect(Effect::Damage(6)),
        CardTemplate::new(DEFEND, "Defend", 1)
            .with_type(CardType::Skill)
            .with_effect(Effect::Block(5)),
        CardTemplate::new(BASH, "Bash", 2)
            .with_target(TargetRule::SingleEnemy)
            .with_effect(Effect::Damage(8))
            .with_effect(Effect::status(StatusKind::Vulnerable, 2)),
        CardTemplate::new(DEADLY_POISON, "Deadly Poison", 1)
            .with_type(CardType::Skill)
            .with_rarity(CardRarity::Common)
            .with_target(TargetRule::SingleEnemy)
            .with_effect(Effect::status(StatusKind::Poison, 5)),
        CardTemplate::new(ADRENALINE, "Adrenaline", 0)
            .with_type(CardType::Skill)
            .with_rarity(CardRarity::Rare)
            .with_target(TargetRule::Untargeted)
            .with_effect(Effect::GainEnergy(1))
            .with_effect(Effect::DrawCards(2))
            .with_effect(Effect::exhaust_self()),
    ];
    for template in templates {
        registry.register(template);
    }
    registry
}

fn starter_deck(registry: &CardRegistry) -> Vec<CardInstance> {
    let counts = [(STRIKE, 5), (DEFEND, 4), (BASH, 1), (DEADLY_POISON, 1), (ADRENALINE, 1)];
    counts
        .into_iter()
        .filter_map(|(id, count)| registry.get(id).map(|template| (Arc::clone(template), count)))
        .flat_map(|(template, count)| std::iter::repeat(template).take(count))
        .map(CardInstance::new)
        .collect()
}

fn enemy_for_slot(slot: usize) -> Enemy {
    match slot % 3 {
        0 => Enemy::new(
            "Cultist",
            48,
            PatternPlanner::default()
                .then(EnemyIntent::buff(StatusKind::Strength, 3))
                .then(EnemyIntent::attack(6))
                .then(EnemyIntent::attack(6)),
        ),
        1 => Enemy::new("Jaw Worm", 40, WeightedPlanner::default()),
        _ => Enemy::new(
            "Guardian",
            60,
            PhasePlanner::new(
                PatternPlanner::default()
                    .then(EnemyIntent::defend(9))
                    .then(EnemyIntent::debuff(StatusKind::Weak, 1)),
                WeightedPlanner::new(12, 6, 0.8),
                50,
            ),
        ),
    }
}
