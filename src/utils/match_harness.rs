//! Autoplay harness for local testing.
//!
//! Plays whole matches with a scripted player strategy against a seeded
//! infestation, with no presentation layer involved, and aggregates the
//! outcomes of a series.

use chrono::Local;
use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::game_types::*;
use crate::game_state::match_state::MatchState;
use crate::gameplay::gameplay::Gameplay;
use crate::gameplay::match_config::MatchConfig;
use crate::infestation::random_source::SeededRandom;
use crate::moves::move_enumeration::{legal_moves, PlayerMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play(PlayerMove),
    Skip,
}

pub trait PlayerStrategy {
    fn name(&self) -> &str;

    fn choose_action(&mut self, state: &MatchState) -> Result<PlayerAction, String>;
}

/// Never moves. Measures how long the default formation holds on its own.
pub struct SkipEveryTurn;

impl PlayerStrategy for SkipEveryTurn {
    fn name(&self) -> &str {
        "Skip Every Turn"
    }

    fn choose_action(&mut self, _state: &MatchState) -> Result<PlayerAction, String> {
        Ok(PlayerAction::Skip)
    }
}

/// Picks uniformly among the legal actions, skipping now and then.
pub struct RandomMover {
    rng: StdRng,
    skip_chance: f64,
}

impl RandomMover {
    pub fn new(seed: u64) -> Self {
        Self::with_skip_chance(seed, 0.1)
    }

    pub fn with_skip_chance(seed: u64, skip_chance: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            skip_chance: skip_chance.clamp(0.0, 1.0),
        }
    }
}

impl PlayerStrategy for RandomMover {
    fn name(&self) -> &str {
        "Random Mover"
    }

    fn choose_action(&mut self, state: &MatchState) -> Result<PlayerAction, String> {
        if self.rng.random_bool(self.skip_chance) {
            return Ok(PlayerAction::Skip);
        }
        let moves = legal_moves(state);
        Ok(moves
            .as_slice()
            .choose(&mut self.rng)
            .map_or(PlayerAction::Skip, |&mv| PlayerAction::Play(mv)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayOutcome {
    Win,
    Checkmate,
    TurnLimit,
}

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub match_config: MatchConfig,
    pub max_turns: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            max_turns: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub seed: u64,
    pub outcome: AutoplayOutcome,
    pub turns: u32,
    pub moves: u32,
    pub units_captured: u32,
    pub pieces_remaining: u32,
    pub summary: String,
    pub final_board: Board,
}

#[derive(Debug, Clone)]
pub struct SeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: AutoplayConfig,
    pub verbose: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: AutoplayConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub started_at: String,
    pub strategy: String,
    pub games: u16,
    pub wins: u16,
    pub checkmates: u16,
    pub turn_limits: u16,
    pub outcomes: Vec<AutoplayOutcome>,
    pub total_turns: u64,
    pub total_units_captured: u64,
    pub avg_turns: f64,
    pub avg_units_captured: f64,
}

impl SeriesStats {
    pub fn report(&self) -> String {
        format!(
            "[{}] strategy=\"{}\" games={} wins={} checkmates={} turn_limits={} avg_turns={:.2} avg_captured={:.2}",
            self.started_at,
            self.strategy,
            self.games,
            self.wins,
            self.checkmates,
            self.turn_limits,
            self.avg_turns,
            self.avg_units_captured
        )
    }
}

/// Play one seeded match to its end or to the turn limit.
///
/// Pawns reaching the border row are promoted to queens before the player
/// acts. A rejected action is reported as an error since strategies only
/// pick from the legal set.
pub fn play_autoplay_match(
    strategy: &mut dyn PlayerStrategy,
    seed: u64,
    config: &AutoplayConfig,
) -> Result<MatchRecord, String> {
    let mut game = Gameplay::new(&config.match_config, SeededRandom::from_seed(seed))
        .map_err(|e| format!("failed to set up match: {e}"))?;
    let mut outcome = AutoplayOutcome::TurnLimit;

    while game.counters().turns <= config.max_turns {
        for col in game.promotable_columns() {
            game.promote_pawn(col, PieceKind::Queen);
        }

        let action = strategy.choose_action(game.state())?;
        let result = match action {
            PlayerAction::Skip => game.skip_turn(),
            PlayerAction::Play(mv) => {
                let (from, to) = mv.endpoints();
                game.move_piece(from.row, from.col, to.row, to.col)
            }
        };
        debug!("turn {}: {action:?} -> {result:?}", game.counters().turns);

        match result {
            TurnResult::Wrong => {
                return Err(format!("{} chose a rejected action {action:?}", strategy.name()));
            }
            TurnResult::Win => {
                outcome = AutoplayOutcome::Win;
                break;
            }
            TurnResult::Checkmate => {
                outcome = AutoplayOutcome::Checkmate;
                break;
            }
            TurnResult::Ok | TurnResult::Captured => {}
        }
    }

    let counters = game.counters();
    Ok(MatchRecord {
        seed,
        outcome,
        turns: counters.turns,
        moves: counters.moves,
        units_captured: counters.units_captured,
        pieces_remaining: counters.pieces_remaining,
        summary: game.summary(),
        final_board: game.board().clone(),
    })
}

/// Play a series of seeded matches and aggregate their outcomes.
///
/// Game `i` uses seed `base_seed + i` for both the infestation and the
/// strategy built by `strategy_factory`.
pub fn play_autoplay_series<F>(strategy_factory: F, config: SeriesConfig) -> Result<SeriesStats, String>
where
    F: Fn(u64) -> Box<dyn PlayerStrategy>,
{
    let mut stats = SeriesStats {
        started_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        games: config.games,
        ..SeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut strategy = strategy_factory(seed);
        if stats.strategy.is_empty() {
            stats.strategy = strategy.name().to_owned();
        }

        let record = play_autoplay_match(strategy.as_mut(), seed, &config.per_game)?;
        match record.outcome {
            AutoplayOutcome::Win => stats.wins += 1,
            AutoplayOutcome::Checkmate => stats.checkmates += 1,
            AutoplayOutcome::TurnLimit => stats.turn_limits += 1,
        }
        stats.outcomes.push(record.outcome);
        stats.total_turns += u64::from(record.turns);
        stats.total_units_captured += u64::from(record.units_captured);

        if config.verbose {
            info!(
                "[series] game {}/{} seed={} result={:?} turns={} {}",
                i + 1,
                config.games,
                seed,
                record.outcome,
                record.turns,
                record.summary
            );
        }
    }

    if stats.games > 0 {
        let games = f64::from(stats.games);
        stats.avg_turns = stats.total_turns as f64 / games;
        stats.avg_units_captured = stats.total_units_captured as f64 / games;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_series(objective: Objective) -> SeriesConfig {
        SeriesConfig {
            games: 3,
            base_seed: 99,
            per_game: AutoplayConfig {
                match_config: MatchConfig {
                    objective,
                    ..MatchConfig::default()
                },
                max_turns: 40,
            },
            verbose: false,
        }
    }

    #[test]
    fn random_mover_only_plays_accepted_actions() {
        for objective in Objective::ALL {
            let stats = play_autoplay_series(
                |seed| Box::new(RandomMover::new(seed)) as Box<dyn PlayerStrategy>,
                short_series(objective),
            )
            .expect("random mover picks legal actions");
            assert_eq!(stats.outcomes.len(), 3);
            assert_eq!(stats.wins + stats.checkmates + stats.turn_limits, 3);
        }
    }

    #[test]
    fn series_are_reproducible() {
        let run = || {
            play_autoplay_series(
                |seed| Box::new(RandomMover::new(seed)) as Box<dyn PlayerStrategy>,
                short_series(Objective::CaptureTheMost),
            )
            .expect("series runs")
        };
        let (a, b) = (run(), run());
        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.total_turns, b.total_turns);
        assert_eq!(a.total_units_captured, b.total_units_captured);
    }

    #[test]
    fn skipping_never_moves_a_piece() {
        let record = play_autoplay_match(&mut SkipEveryTurn, 5, &AutoplayConfig::default())
            .expect("skipping is always accepted");
        assert_eq!(record.moves, 0);
        assert_eq!(record.units_captured, 0);
        assert!(record.turns <= 201);
    }

    #[test]
    fn turn_limit_caps_the_match() {
        let config = AutoplayConfig {
            max_turns: 3,
            ..AutoplayConfig::default()
        };
        let record = play_autoplay_match(&mut SkipEveryTurn, 1, &config).expect("match runs");
        assert_eq!(record.outcome, AutoplayOutcome::TurnLimit);
        assert_eq!(record.turns, 4);
    }

    #[test]
    fn report_names_the_strategy() {
        let stats = play_autoplay_series(
            |_| Box::new(SkipEveryTurn) as Box<dyn PlayerStrategy>,
            SeriesConfig {
                games: 1,
                per_game: AutoplayConfig {
                    max_turns: 5,
                    ..AutoplayConfig::default()
                },
                ..SeriesConfig::default()
            },
        )
        .expect("series runs");
        assert!(stats.report().contains("strategy=\"Skip Every Turn\" games=1"));
    }
}
