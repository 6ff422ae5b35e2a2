//! Standalone autoplay series runner.
//!
//! Run with:
//! `cargo run --release --bin autoplay_series`
//! `cargo run --release --bin autoplay_series -- --verbose --objective block --difficulty extreme`

use infested_chess::game_state::game_types::{Difficulty, Objective};
use infested_chess::gameplay::match_config::MatchConfig;
use infested_chess::utils::match_harness::{
    play_autoplay_series, AutoplayConfig, PlayerStrategy, RandomMover, SeriesConfig, SkipEveryTurn,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let log_level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let mut config_builder = ConfigBuilder::new();
    config_builder.set_time_level(LevelFilter::Off);
    config_builder.set_target_level(LevelFilter::Off);
    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|e| format!("failed to initialize logging: {e}"))?;

    let objective = match flag_value(&args, "--objective") {
        Some(name) => parse_objective(name)?,
        None => Objective::SurviveTheLongest,
    };
    let difficulty = match flag_value(&args, "--difficulty") {
        Some(name) => parse_difficulty(name)?,
        None => Difficulty::Normal,
    };
    let games = match flag_value(&args, "--games") {
        Some(n) => n
            .parse::<u16>()
            .map_err(|_| format!("Invalid game count: {n}"))?,
        None => 20,
    };
    let skip_only = args.iter().any(|a| a == "--skip");

    let config = SeriesConfig {
        games,
        base_seed: 1234,
        per_game: AutoplayConfig {
            match_config: MatchConfig {
                objective,
                difficulty,
                ..MatchConfig::default()
            },
            max_turns: 300,
        },
        verbose,
    };

    let stats = if skip_only {
        play_autoplay_series(
            |_| Box::new(SkipEveryTurn) as Box<dyn PlayerStrategy>,
            config,
        )?
    } else {
        play_autoplay_series(
            |seed| Box::new(RandomMover::new(seed)) as Box<dyn PlayerStrategy>,
            config,
        )?
    };

    println!("{objective} / {difficulty}");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_objective(name: &str) -> Result<Objective, String> {
    match name.to_ascii_lowercase().as_str() {
        "survive" => Ok(Objective::SurviveTheLongest),
        "capture" => Ok(Objective::CaptureTheMost),
        "block" => Ok(Objective::BlockTheBorder),
        "block-clear" => Ok(Objective::BlockAndClear),
        "clear" => Ok(Objective::ClearTheBoard),
        _ => Err(format!(
            "Unknown objective '{name}' (survive, capture, block, block-clear, clear)"
        )),
    }
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::ALL
        .into_iter()
        .find(|d| d.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("Unknown difficulty '{name}'"))
}
