//! The combat state machine.

use im::Vector;
use tracing::{debug, info};

use super::events::CombatEvent;
use super::state::{CombatResult, TurnState};
use crate::combatant::{ActionOutcome, Combatant, DamageReport, Enemy, Player, Roster, TickOutcome};
use crate::core::{BlockExpiry, CombatConfig, CombatantId, GameRng};
use crate::effects::{EffectResolver, ResolveResult, ResolverContext};
use crate::error::{CombatError, Result};
use crate::status::StatusKind;

/// Drives one combat encounter.
///
/// The engine owns every combatant for the duration of the encounter.
/// Controllers call [`start_combat`](Self::start_combat), then alternate
/// [`play_card`](Self::play_card) and [`end_turn`](Self::end_turn). Each
/// call runs to completion and returns the events it produced.
///
/// ```
/// use card_combat::combatant::{Combatant, Enemy, Player};
/// use card_combat::core::CombatConfig;
/// use card_combat::engine::{TurnEngine, TurnState};
/// use card_combat::intent::WeightedPlanner;
///
/// let player = Player::new(80, 3);
/// let enemies = vec![Enemy::new("Cultist", 30, WeightedPlanner::aggressive(6))];
/// let mut engine = TurnEngine::new(player, enemies, CombatConfig::default());
///
/// engine.start_combat().unwrap();
/// engine.end_turn().unwrap();
///
/// assert_eq!(engine.player().health(), 74);
/// assert_eq!(engine.turn_number(), 2);
/// assert_eq!(engine.state(), TurnState::PlayerTurn);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: CombatConfig,
    roster: Roster,
    state: TurnState,
    turn_number: u32,
    started: bool,
    result: Option<CombatResult>,
    /// Card draws and reshuffles.
    shuffle_rng: GameRng,
    /// Enemy decisions.
    intent_rng: GameRng,
    pending: Vec<CombatEvent>,
    history: Vector<CombatEvent>,
}

impl TurnEngine {
    /// Set up an encounter.
    ///
    /// The player's combat-scoped state is reset and their deck shuffled
    /// into the draw pile. Nothing else happens until `start_combat`.
    #[must_use]
    pub fn new(mut player: Player, enemies: Vec<Enemy>, config: CombatConfig) -> Self {
        let base = GameRng::new(config.seed);
        let mut shuffle_rng = base.for_context("shuffle");
        player.prepare_for_combat(&mut shuffle_rng);

        Self {
            roster: Roster::new(player, enemies),
            state: TurnState::PlayerTurn,
            turn_number: 0,
            started: false,
            result: None,
            shuffle_rng,
            intent_rng: base.for_context("intent"),
            pending: Vec::new(),
            history: Vector::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Current phase.
    ///
    /// Before [`start_combat`](Self::start_combat) this already reports
    /// `PlayerTurn`, but `is_started()` is false and `play_card`/`end_turn`
    /// return `NotStarted`. Check [`is_started`](Self::is_started) first.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Starts at 1, incremented once per full round.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn result(&self) -> Option<CombatResult> {
        self.result
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Direct access for embedder hooks (relics and the like). Call
    /// [`check_combat_end`](Self::check_combat_end) after changing health.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        self.roster.player()
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        self.roster.enemies()
    }

    pub fn enemy(&self, index: usize) -> Result<&Enemy> {
        self.roster.enemy(index)
    }

    /// Every event since the engine was created.
    #[must_use]
    pub fn history(&self) -> &Vector<CombatEvent> {
        &self.history
    }

    /// Hand indices the player can afford right now.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<usize> {
        let player = self.roster.player();
        player
            .piles()
            .hand()
            .iter()
            .enumerate()
            .filter(|(_, card)| player.effective_cost(card) <= player.energy())
            .map(|(index, _)| index)
            .collect()
    }

    /// End the encounter and hand the player back for the next one.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.roster.into_player()
    }

    // === Operations ===

    /// Begin the combat: refill energy, clear block, draw the opening hand
    /// and declare every enemy's first intent.
    pub fn start_combat(&mut self) -> Result<Vec<CombatEvent>> {
        if self.state.is_terminal() {
            return Err(CombatError::CombatOver);
        }
        if self.started {
            return Err(CombatError::AlreadyStarted);
        }

        self.started = true;
        self.turn_number = 1;
        self.state = TurnState::PlayerTurn;

        let player = self.roster.player_mut();
        player.reset_energy();
        player.reset_block();
        for index in 0..self.roster.enemies().len() {
            let enemy = self.roster.enemy_mut(index)?;
            enemy.reset_intent();
            enemy.reset_block();
        }

        info!(target: "combat::engine", enemies = self.roster.enemies().len(), seed = self.config.seed, "combat started");
        self.emit(CombatEvent::CombatStarted { enemies: self.roster.enemies().len() });
        self.emit(CombatEvent::TurnStarted { turn: self.turn_number });
        self.draw_cards(self.config.draw_per_turn);
        self.declare_intents()?;
        self.evaluate_end();

        Ok(self.drain())
    }

    /// Play the card at `hand_index`.
    ///
    /// `target` is the controller's choice; it is only consulted for
    /// single-target cards. On any error nothing changes: the target and
    /// the energy cost are validated before the card leaves the hand.
    pub fn play_card(&mut self, hand_index: usize, target: Option<CombatantId>) -> Result<Vec<CombatEvent>> {
        self.ensure_player_turn()?;

        let player = self.roster.player();
        let hand_size = player.piles().hand().len();
        let card = player
            .piles()
            .hand_card(hand_index)
            .ok_or(CombatError::CardNotInHand { index: hand_index, hand_size })?;
        let cost = player.effective_cost(card);
        let targets = card.target().resolve(target, &self.roster)?;
        let available = self.roster.player().energy();
        if cost > available {
            return Err(CombatError::NotEnoughEnergy { required: cost, available });
        }

        let player = self.roster.player_mut();
        player.try_spend_energy(cost);
        let Some(mut card) = player.piles_mut().take_from_hand(hand_index) else {
            return Err(CombatError::CardNotInHand { index: hand_index, hand_size });
        };

        debug!(target: "combat::engine", card = card.name(), cost, ?targets, "play card");
        self.emit(CombatEvent::CardPlayed { card: card.name().to_string(), cost, target });

        let effects = card.template().effects.clone();
        let results = {
            let mut ctx = ResolverContext::new(&mut self.shuffle_rng, &mut self.pending).with_played(&mut card);
            EffectResolver::resolve_card(&mut self.roster, &effects, CombatantId::Player, &targets, &mut ctx)
        };
        for result in &results {
            if let ResolveResult::Failed(err) = result {
                debug!(target: "combat::engine", card = card.name(), error = %err, "effect did not resolve");
            }
        }

        let name = card.name().to_string();
        let pile = self.roster.player_mut().piles_mut().settle_played(card);
        self.emit(CombatEvent::CardSettled { card: name, pile });

        self.evaluate_end();
        Ok(self.drain())
    }

    /// End the player's turn and run the enemy phase to completion.
    pub fn end_turn(&mut self) -> Result<Vec<CombatEvent>> {
        self.ensure_player_turn()?;

        self.set_state(TurnState::TurnEnd);
        self.emit(CombatEvent::TurnEnded { turn: self.turn_number });

        let expired = self.roster.player_mut().process_turn_end();
        self.emit_expired(CombatantId::Player, &expired);
        if self.config.discard_hand_at_turn_end {
            let count = self.roster.player_mut().piles_mut().discard_hand();
            if count > 0 {
                self.emit(CombatEvent::CardsDiscarded { count });
            }
        }
        if self.config.block_expiry == BlockExpiry::PlayerTurnEnd {
            self.roster.player_mut().reset_block();
        }

        self.set_state(TurnState::EnemyTurn);
        self.run_enemy_phase()?;
        if self.evaluate_end() {
            return Ok(self.drain());
        }

        // Next player turn.
        let player = self.roster.player_mut();
        if self.config.block_expiry == BlockExpiry::OwnerTurnStart {
            player.reset_block();
        }
        let ticks = player.process_turn_start();
        let died = player.is_dead();
        self.emit_ticks(CombatantId::Player, &ticks);
        if died {
            self.emit(CombatEvent::Died { target: CombatantId::Player });
            self.evaluate_end();
            return Ok(self.drain());
        }

        self.roster.player_mut().reset_energy();
        self.turn_number += 1;
        self.declare_intents()?;
        self.set_state(TurnState::PlayerTurn);
        self.emit(CombatEvent::TurnStarted { turn: self.turn_number });
        self.draw_cards(self.config.draw_per_turn);

        self.evaluate_end();
        Ok(self.drain())
    }

    /// Move to `CombatEnd` if the player or every enemy is dead.
    ///
    /// Player death is checked first. Does nothing once the combat is
    /// already over.
    pub fn check_combat_end(&mut self) -> Vec<CombatEvent> {
        self.evaluate_end();
        self.drain()
    }

    // === Internals ===

    fn ensure_player_turn(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(CombatError::CombatOver);
        }
        if !self.started {
            return Err(CombatError::NotStarted);
        }
        if self.state != TurnState::PlayerTurn {
            return Err(CombatError::NotPlayerTurn(self.state));
        }
        Ok(())
    }

    /// Each living enemy in encounter order: clear block, tick statuses,
    /// act, decay. Stops as soon as the player dies.
    fn run_enemy_phase(&mut self) -> Result<()> {
        for index in 0..self.roster.enemies().len() {
            let id = CombatantId::Enemy(index);
            let enemy = self.roster.enemy_mut(index)?;
            if enemy.is_dead() {
                continue;
            }

            enemy.reset_block();
            let ticks = enemy.process_turn_start();
            let died = enemy.is_dead();
            self.emit_ticks(id, &ticks);
            if died {
                self.emit(CombatEvent::Died { target: id });
                continue;
            }

            let (player, enemy) = self.roster.player_and_enemy_mut(index)?;
            let report = enemy.execute_action(player);
            let expired = enemy.process_turn_end();
            let player_dead = player.is_dead();

            if let Some(report) = report {
                let killed = matches!(report.outcome, ActionOutcome::Attacked(DamageReport { killed: true, .. }));
                self.emit(CombatEvent::EnemyActed { enemy: id, intent: report.intent, outcome: report.outcome });
                if killed {
                    self.emit(CombatEvent::Died { target: CombatantId::Player });
                }
            }
            self.emit_expired(id, &expired);

            if player_dead {
                break;
            }
        }
        Ok(())
    }

    fn declare_intents(&mut self) -> Result<()> {
        for index in 0..self.roster.enemies().len() {
            let (player, enemy) = self.roster.player_and_enemy_mut(index)?;
            if enemy.is_dead() {
                continue;
            }
            let intent = enemy.determine_next_action(player, self.turn_number, &mut self.intent_rng).clone();
            self.emit(CombatEvent::IntentDeclared { enemy: CombatantId::Enemy(index), intent });
        }
        Ok(())
    }

    fn draw_cards(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let report = self.roster.player_mut().piles_mut().draw(count, &mut self.shuffle_rng);
        if report.drawn > 0 {
            self.emit(CombatEvent::CardsDrawn { count: report.drawn, reshuffled: report.reshuffled });
        }
    }

    /// Returns true if the combat is over.
    fn evaluate_end(&mut self) -> bool {
        if self.state.is_terminal() {
            return true;
        }

        let result = if self.roster.player().is_dead() {
            CombatResult::Defeat
        } else if self.roster.all_enemies_dead() {
            CombatResult::Victory
        } else {
            return false;
        };

        self.set_state(TurnState::CombatEnd);
        self.result = Some(result);
        info!(target: "combat::engine", ?result, turn = self.turn_number, "combat ended");
        self.emit(CombatEvent::CombatEnded { result });
        true
    }

    fn set_state(&mut self, to: TurnState) {
        let from = self.state;
        if from != to {
            self.state = to;
            self.emit(CombatEvent::StateChanged { from, to });
        }
    }

    fn emit_ticks(&mut self, target: CombatantId, ticks: &[TickOutcome]) {
        for outcome in ticks {
            self.emit(CombatEvent::StatusTicked { target, kind: outcome.tick.kind, amount: outcome.applied });
        }
    }

    fn emit_expired(&mut self, target: CombatantId, expired: &[StatusKind]) {
        for &kind in expired {
            self.emit(CombatEvent::StatusExpired { target, kind });
        }
    }

    fn emit(&mut self, event: CombatEvent) {
        event.log();
        self.pending.push(event);
    }

    fn drain(&mut self) -> Vec<CombatEvent> {
        let events = std::mem::take(&mut self.pending);
        self.history.extend(events.iter().cloned());
        events
    }
}
