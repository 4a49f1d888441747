//! Headless self-play.
//!
//! Plays full games with the reference opponent on both seats and logs
//! every event. `RUST_LOG=debug` shows individual commands.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use monster_duel::{
    BattleReport, BattleWinner, Card, CardCatalog, Command, Game, GameBuilder, GameConfig,
    GameListener, GameResult, OpponentPolicy, PlayerId, Reaction, RoundResolution, SimpleOpponent,
};

#[derive(Parser)]
#[command(name = "autoplay", about = "Play monster-duel games headless")]
struct Args {
    /// Seed for the session's shuffles; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play in one session
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Give up on a game after this many human-seat commands
    #[arg(long, default_value_t = 10_000)]
    max_commands: usize,

    /// JSON game config; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON card catalog replacing the standard set
    #[arg(long)]
    catalog: Option<PathBuf>,
}

/// Logs events the way a frontend would show them.
struct Narrator;

impl GameListener for Narrator {
    fn on_game_started(&mut self) {
        info!("cards dealt");
    }

    fn on_monster_invade(&mut self, monster: &Card) {
        info!(%monster, point = monster.point(), "monster invades");
    }

    fn on_set_hero(&mut self, player: PlayerId, hero: &Card) {
        info!(%player, %hero, "hero enters");
    }

    fn on_action_done(&mut self, resolution: &RoundResolution) {
        info!(
            player = %resolution.action.player,
            card = %resolution.action.card,
            stopped = resolution.was_stopped(),
            result = ?resolution.result,
            "action done"
        );
    }

    fn on_battle_done(&mut self, report: &BattleReport) {
        match &report.winner {
            BattleWinner::Player(player) => info!(%player, monster = %report.monster, "monster slain"),
            BattleWinner::Monster(monster) => info!(%monster, "heroes fall"),
        }
    }

    fn on_turn_ended(&mut self, player: PlayerId, next: PlayerId) {
        info!(%player, %next, "turn over");
    }
}

/// Next command for the human seat, or `None` when it has nothing to do.
fn human_move(game: &Game, policy: &mut SimpleOpponent) -> Option<Command> {
    let seat = PlayerId::HUMAN;
    let view = game.view(seat);
    if let Some(pending) = game.round().pending() {
        if game.player(seat).is_action_done() {
            return None;
        }
        return Some(match policy.react_to_action(&view, &pending.card, &pending.args) {
            Reaction::Stop(card) => Command::play(card),
            Reaction::Pass => Command::EndAction,
        });
    }
    if game.player(seat).is_active() {
        policy.take_round(&view)
    } else {
        None
    }
}

fn play_one(game: &mut Game, max_commands: usize) -> Result<Option<GameResult>, Box<dyn std::error::Error>> {
    game.new_game()?;
    let mut human = SimpleOpponent;

    for _ in 0..max_commands {
        if let Some(result) = game.result() {
            return Ok(Some(result));
        }
        let Some(command) = human_move(game, &mut human) else {
            warn!(stage = ?game.stage(), "nobody can move");
            return Ok(None);
        };
        if let Err(error) = game.execute(PlayerId::HUMAN, command.clone()) {
            warn!(%error, ?command, "player move rejected");
            return Ok(None);
        }
    }
    warn!(max_commands, "command limit reached");
    Ok(game.result())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut builder = GameBuilder::new()
        .config(config)
        .policy(SimpleOpponent)
        .listener(Narrator);
    if let Some(path) = &args.catalog {
        builder = builder.catalog(CardCatalog::from_json(&std::fs::read_to_string(path)?)?);
    }
    let mut game = builder.build()?;

    let (mut human, mut npc, mut draws, mut unfinished) = (0, 0, 0, 0);
    for index in 0..args.games {
        let result = play_one(&mut game, args.max_commands)?;
        info!(game = index + 1, ?result, turns = game.turn(), commands = game.history().len(), "game finished");
        match result {
            Some(GameResult::Winner(PlayerId::HUMAN)) => human += 1,
            Some(GameResult::Winner(_)) => npc += 1,
            Some(GameResult::Draw) => draws += 1,
            None => unfinished += 1,
        }
    }

    println!(
        "{} games: player {} / npc {} / draw {} / unfinished {}",
        args.games, human, npc, draws, unfinished
    );
    Ok(())
}
