//! The game engine: turn state machine and command processing.
//!
//! `Game` owns the table, the pending action round, the effect registry,
//! the event bus and the opponent policy. Every command:
//!
//! 1. checks the game is running and the command is legal for the caller
//!    at this point of the turn (nothing is mutated on failure)
//! 2. mutates the table and publishes events
//! 3. is appended to the command history
//! 4. lets the opponent policy move, if the NPC seat has something to do
//!
//! ## Turn flow
//!
//! The active player draws once, may set and equip a hero, must fight a
//! monster that came into play, and ends the turn explicitly. Action cards
//! may be played by either player whenever no round is open; a round opened
//! by one player has to be answered by the other before anything else
//! happens.

use im::Vector;
use tracing::{debug, info, warn};

use crate::cards::{ActionKind, CardCatalog, CardId, CardKind, EquippedHero};
use crate::core::{
    ActionArg, ActionArgs, Command, CommandRecord, GameConfig, GameError, GameRng, PlayerId, Result,
    PLAYER_COUNT,
};
use crate::effects::{ActionOutcome, ActionRegistry};
use crate::events::{EventBus, GameEvent, GameListener};
use crate::policy::{GameView, OpponentPolicy, Reaction};
use crate::rules::{is_exhausted, resolve_battle, GameResult};
use crate::stack::{ActionRound, PlayedAction};
use crate::zones::{Dealt, Encounter, Player, Table};

/// Where the active player is in their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStage {
    /// Has not drawn yet.
    Drawing,
    /// Drew; may set a hero, equip, play actions or end the turn.
    AwaitingHeroOrAction,
    /// A monster is in play and has to be fought.
    MonsterConfrontation,
    /// An action round is waiting for answers.
    ActionRound,
}

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// `new_game` has not been called.
    NotStarted,
    InProgress,
    Over(GameResult),
}

/// A game session.
pub struct Game {
    config: GameConfig,
    catalog: CardCatalog,
    registry: ActionRegistry,
    table: Table,
    round: ActionRound,
    bus: EventBus,
    policy: Option<Box<dyn OpponentPolicy>>,
    rng: GameRng,
    status: GameStatus,
    /// Turn number, starting at 1.
    turn: u32,
    /// Commands applied so far in the current turn.
    sequence: u32,
    history: Vector<CommandRecord>,
}

impl Game {
    pub(crate) fn from_parts(
        config: GameConfig,
        catalog: CardCatalog,
        registry: ActionRegistry,
        bus: EventBus,
        policy: Option<Box<dyn OpponentPolicy>>,
    ) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            catalog,
            registry,
            table: Table::new(),
            round: ActionRound::new(),
            bus,
            policy,
            status: GameStatus::NotStarted,
            turn: 0,
            sequence: 0,
            history: Vector::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Deal a fresh game.
    ///
    /// Mints every card of the catalog, shuffles heroes, items and skills
    /// into the deck, deals the starting hands, then shuffles the monsters
    /// on top. The human moves first. Valid at any time; whatever was in
    /// progress is discarded.
    pub fn new_game(&mut self) -> Result<()> {
        let mut cards = self.catalog.mint();
        let hand_pile = cards.take_hand_pile();
        let needed = self.config.starting_hand_size * PlayerId::all().count();
        if hand_pile.len() < needed {
            return Err(GameError::Config(format!(
                "catalog has {} non-monster cards, starting hands need {}",
                hand_pile.len(),
                needed
            )));
        }

        self.table.reset();
        self.round.clear();
        self.history = Vector::new();

        let mut deal_rng = self.rng.fork();
        self.table.deck.shuffle_and_load(hand_pile, &mut deal_rng);
        for _ in 0..self.config.starting_hand_size {
            for id in PlayerId::all() {
                let card = self.table.deck.deal()?.into_card();
                self.table.player_mut(id).add_to_hand(card);
            }
        }
        if self.config.npc_starts_with_steal {
            self.grant_steal(PlayerId::NPC);
        }
        self.table.deck.shuffle_and_load(cards.monsters, &mut deal_rng);

        self.table.set_active(PlayerId::HUMAN);
        self.status = GameStatus::InProgress;
        self.turn = 1;
        self.sequence = 0;

        info!(seed = deal_rng.seed(), deck = self.table.deck.len(), "new game");
        self.bus.publish(&GameEvent::GameStarted);
        self.drive_policy();
        Ok(())
    }

    /// Move a Steal card from the deck into `player`'s hand unless they
    /// already hold one.
    fn grant_steal(&mut self, player: PlayerId) {
        let has_steal = self
            .table
            .player(player)
            .hand()
            .iter()
            .any(|c| c.action_kind() == Some(ActionKind::Steal));
        if has_steal {
            return;
        }
        let steal = self
            .table
            .deck
            .iter()
            .find(|c| c.action_kind() == Some(ActionKind::Steal))
            .map(|c| c.id);
        if let Some(card) = steal.and_then(|id| self.table.deck.remove(id)) {
            debug!(%player, %card, "steal granted");
            self.table.player_mut(player).add_to_hand(card);
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a command for `player`, then let the opponent respond.
    pub fn execute(&mut self, player: PlayerId, command: Command) -> Result<()> {
        self.apply(player, command)?;
        self.drive_policy();
        Ok(())
    }

    pub fn draw(&mut self, player: PlayerId) -> Result<()> {
        self.execute(player, Command::Draw)
    }

    pub fn set_hero(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.execute(player, Command::SetHero(card))
    }

    pub fn equip_hero(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.execute(player, Command::EquipHero(card))
    }

    pub fn play_action(
        &mut self,
        player: PlayerId,
        card: CardId,
        args: &[ActionArg],
    ) -> Result<()> {
        self.execute(player, Command::play_with(card, args))
    }

    pub fn end_action(&mut self, player: PlayerId) -> Result<()> {
        self.execute(player, Command::EndAction)
    }

    pub fn battle(&mut self, player: PlayerId) -> Result<()> {
        self.execute(player, Command::Battle)
    }

    pub fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        self.execute(player, Command::EndTurn)
    }

    /// Validate, mutate and record one command. Does not consult the policy.
    fn apply(&mut self, player: PlayerId, command: Command) -> Result<()> {
        if player.index() >= PLAYER_COUNT {
            return Err(GameError::illegal(format!("{} has no seat at this table", player)));
        }
        self.ensure_running()?;
        debug!(%player, ?command, turn = self.turn, "command");
        let (turn, sequence) = (self.turn, self.sequence);

        match &command {
            Command::Draw => self.apply_draw(player)?,
            Command::SetHero(card) => self.apply_set_hero(player, *card)?,
            Command::EquipHero(card) => self.apply_equip_hero(player, *card)?,
            Command::PlayAction { card, args } => self.apply_play_action(player, *card, args)?,
            Command::EndAction => self.apply_end_action(player)?,
            Command::Battle => self.apply_battle(player)?,
            Command::EndTurn => self.apply_end_turn(player)?,
        }

        self.history
            .push_back(CommandRecord::new(player, command, turn, sequence));
        if self.turn == turn {
            self.sequence += 1;
        }
        Ok(())
    }

    fn apply_draw(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_active(player)?;
        self.ensure_no_round()?;
        if self.table.encounter.is_some() {
            return Err(GameError::illegal("a monster has to be fought before drawing"));
        }
        if self.table.player(player).has_drawn() {
            return Err(GameError::illegal(format!("{} already drew this turn", player)));
        }

        let dealt = self.table.deck.deal()?;
        self.table.player_mut(player).has_drawn = true;
        match dealt {
            Dealt::Card(card) => {
                debug!(%player, %card, "drew");
                self.table.player_mut(player).add_to_hand(card.clone());
                self.bus.publish(&GameEvent::DoneDrawFromDeck { player, card });
            }
            Dealt::Monster(monster) => {
                info!(%player, %monster, "monster invades");
                self.table.encounter = Some(Encounter {
                    monster: monster.clone(),
                    provoked: false,
                });
                self.bus.publish(&GameEvent::MonsterInvade { monster });
            }
        }
        Ok(())
    }

    fn apply_set_hero(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.ensure_building(player)?;
        let seat = self.table.player(player);
        if seat.hero().is_some() {
            return Err(GameError::illegal(format!("{} already has a hero", player)));
        }
        seat.hand_card(card)?.ensure_kind(CardKind::Hero)?;

        let card = self.table.player_mut(player).take_from_hand(card)?;
        let hero = EquippedHero::new(card.clone())?;
        self.table.player_mut(player).hero = Some(hero);
        debug!(%player, hero = %card, "hero set");
        self.bus.publish(&GameEvent::SetHero { player, hero: card });
        Ok(())
    }

    fn apply_equip_hero(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.ensure_building(player)?;
        let max_items = self.config.max_hero_items;
        let seat = self.table.player(player);
        let hero = seat.hero().ok_or(GameError::NoHero)?;
        hero.can_equip(seat.hand_card(card)?, max_items)?;

        let seat = self.table.player_mut(player);
        let item = seat.take_from_hand(card)?;
        if let Some(hero) = seat.hero.as_mut() {
            hero.equip(item.clone(), max_items)?;
        }
        debug!(%player, %item, "item equipped");
        self.bus.publish(&GameEvent::EquipHero { player, item });
        Ok(())
    }

    fn apply_play_action(
        &mut self,
        player: PlayerId,
        card: CardId,
        args: &ActionArgs,
    ) -> Result<()> {
        let kind = self.table.player(player).hand_card(card)?.require_action()?;
        self.round.accepts(kind)?;
        if kind != ActionKind::Stop {
            self.registry.get(kind)?.check(&self.table, player, args)?;
        }

        let card = self.table.player_mut(player).take_from_hand(card)?;
        self.round.push(
            &mut self.table,
            PlayedAction::new(player, card.clone(), args.clone()),
        )?;
        self.bus.publish(&GameEvent::ActionStart { player, card });
        Ok(())
    }

    fn apply_end_action(&mut self, player: PlayerId) -> Result<()> {
        let Some(resolution) = self.round.end_action(&mut self.table, &self.registry, player)? else {
            return Ok(());
        };
        info!(
            card = %resolution.action.card,
            stopped = resolution.was_stopped(),
            played = resolution.played_cards.len(),
            "action resolved"
        );
        if let Some(ActionOutcome::Provoked(monster)) = resolution.outcome() {
            info!(%monster, "monster provoked");
        }
        self.bus.publish(&GameEvent::ActionDone(resolution));
        // Back to the fight if a monster is still (or newly) in play.
        if let Some(monster) = self.table.monster().cloned() {
            self.bus.publish(&GameEvent::MonsterInvade { monster });
        }
        Ok(())
    }

    fn apply_battle(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_active(player)?;
        self.ensure_no_round()?;
        let report = resolve_battle(&mut self.table, player)?;
        self.bus.publish(&GameEvent::BattleDone(report));
        Ok(())
    }

    fn apply_end_turn(&mut self, player: PlayerId) -> Result<()> {
        self.ensure_active(player)?;
        self.ensure_no_round()?;
        if self.table.encounter.is_some() {
            return Err(GameError::illegal("a monster has to be fought before ending the turn"));
        }
        let seat = self.table.player(player);
        if !seat.has_drawn() && !self.table.deck.is_empty() {
            return Err(GameError::illegal(format!("{} has to draw first", player)));
        }

        let next = seat.next_player();
        self.table.player_mut(player).has_drawn = false;
        self.table.player_mut(next).has_drawn = false;
        self.table.set_active(next);
        self.turn += 1;
        self.sequence = 0;
        info!(%player, %next, turn = self.turn, "turn ended");
        self.bus.publish(&GameEvent::TurnEnded { player, next });

        if is_exhausted(&self.table) {
            let result = GameResult::score(&self.table);
            info!(?result, "game over");
            self.status = GameStatus::Over(result);
        }
        Ok(())
    }

    // =========================================================================
    // Gating
    // =========================================================================

    fn ensure_running(&self) -> Result<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(GameError::illegal("no game in progress")),
            GameStatus::Over(_) => Err(GameError::illegal("the game is over")),
        }
    }

    fn ensure_active(&self, player: PlayerId) -> Result<()> {
        if self.table.player(player).is_active() {
            Ok(())
        } else {
            Err(GameError::illegal(format!("it is not {}'s turn", player)))
        }
    }

    fn ensure_no_round(&self) -> Result<()> {
        if self.round.is_open() {
            Err(GameError::ActionInProgress)
        } else {
            Ok(())
        }
    }

    /// Hero set-up is for the active player, after drawing, outside rounds.
    fn ensure_building(&self, player: PlayerId) -> Result<()> {
        self.ensure_active(player)?;
        self.ensure_no_round()?;
        if !self.table.player(player).has_drawn() && !self.table.deck.is_empty() {
            return Err(GameError::illegal(format!("{} has to draw first", player)));
        }
        Ok(())
    }

    // =========================================================================
    // Opponent
    // =========================================================================

    /// Let the policy play the NPC seat until it has nothing to do, control
    /// passes to the human, or the move cap is reached.
    fn drive_policy(&mut self) {
        let Some(mut policy) = self.policy.take() else {
            return;
        };
        let seat = PlayerId::NPC;
        let mut moves = 0;

        while self.status == GameStatus::InProgress {
            let command = {
                let view = GameView::new(&self.table, &self.round, seat, self.config.max_hero_items);
                if let Some(pending) = self.round.pending() {
                    if self.table.player(seat).is_action_done() {
                        break;
                    }
                    match policy.react_to_action(&view, &pending.card, &pending.args) {
                        Reaction::Stop(card) => Command::play(card),
                        Reaction::Pass => Command::EndAction,
                    }
                } else if self.table.player(seat).is_active() {
                    match policy.take_round(&view) {
                        Some(command) => command,
                        None => break,
                    }
                } else {
                    break;
                }
            };

            if moves == self.config.max_policy_moves {
                warn!(moves, "opponent move limit reached");
                break;
            }
            moves += 1;

            if let Err(error) = self.apply(seat, command.clone()) {
                warn!(%error, ?command, "opponent move rejected");
                break;
            }
        }

        self.policy = Some(policy);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Register a listener. Listeners are called in registration order.
    pub fn subscribe(&mut self, listener: impl GameListener + 'static) {
        self.bus.subscribe(listener);
    }

    /// Replace the opponent policy. `None` leaves the NPC seat to the caller.
    pub fn set_policy(&mut self, policy: Option<Box<dyn OpponentPolicy>>) {
        self.policy = policy;
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.table.player(id)
    }

    #[must_use]
    pub fn round(&self) -> &ActionRound {
        &self.round
    }

    /// What `seat` would see as a policy.
    #[must_use]
    pub fn view(&self, seat: PlayerId) -> GameView<'_> {
        GameView::new(&self.table, &self.round, seat, self.config.max_hero_items)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Over(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.table.active_player()
    }

    /// Stage of the active player's turn; `None` outside a running game.
    #[must_use]
    pub fn stage(&self) -> Option<TurnStage> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        let active = self.table.active_player()?;
        let stage = if self.round.is_open() {
            TurnStage::ActionRound
        } else if self.table.encounter.is_some() {
            TurnStage::MonsterConfrontation
        } else if !self.table.player(active).has_drawn() && !self.table.deck.is_empty() {
            TurnStage::Drawing
        } else {
            TurnStage::AwaitingHeroOrAction
        };
        Some(stage)
    }

    /// Every command applied since the last `new_game`, policy moves included.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Cards in the session, wherever they are. Constant within a game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.table.card_count() + self.round.card_count()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("status", &self.status)
            .field("turn", &self.turn)
            .field("active", &self.table.active_player())
            .field("deck", &self.table.deck.len())
            .field("round", &self.round.card_count())
            .field("policy", &self.policy.is_some())
            .field("bus", &self.bus)
            .finish()
    }
}
