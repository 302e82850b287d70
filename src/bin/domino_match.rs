use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use rust_dominoes::core::{End, MatchConfig, PlayerId, ScoringMode, TargetScore};
use rust_dominoes::events::GameEvent;
use rust_dominoes::game::{MatchController, Status};
use rust_dominoes::rules::{RoundOutcome, RoundSummary};
use rust_dominoes::zones::Tile;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Mode {
    VsComputer,
    TwoPlayer,
    ComputerOnly,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Scoring {
    WinCount,
    PipPoints,
}

impl From<Scoring> for ScoringMode {
    fn from(value: Scoring) -> Self {
        match value {
            Scoring::WinCount => ScoringMode::WinCount,
            Scoring::PipPoints => ScoringMode::PipPoints,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "domino-match", about = "Play a two-player domino match in the terminal")]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level (-v = WARN, -vv = INFO, -vvv = DEBUG, -vvvv = TRACE)")]
    verbose: u8,

    #[arg(long, default_value = "100", help = "Target score; invalid values fall back to 100")]
    target: String,

    #[arg(long, value_enum, default_value = "win-count", help = "Round scoring rule")]
    scoring: Scoring,

    #[arg(long, value_enum, default_value = "vs-computer", help = "Who sits at the table")]
    mode: Mode,

    #[arg(long, help = "Seed for seating and shuffling (random if omitted)")]
    seed: Option<u64>,

    #[arg(long, default_value = "0", help = "Delay before each computer turn, in milliseconds")]
    pace_ms: u64,

    #[arg(long, help = "Keep hands in deal order instead of sorting them")]
    unsorted: bool,
}

/// One line of human input.
enum Command {
    Play { tile: Tile, end: Option<End> },
    Draw,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["draw" | "d"] => Ok(Command::Draw),
            ["quit" | "q"] => Ok(Command::Quit),
            ["play" | "p", a, b, rest @ ..] => {
                let a: u8 = a.parse().context("pip values are numbers 0-6")?;
                let b: u8 = b.parse().context("pip values are numbers 0-6")?;
                let tile = Tile::try_new(a, b)?;
                let end = match rest {
                    [] => None,
                    [end] => Some(end.parse::<End>().map_err(anyhow::Error::msg)?),
                    _ => bail!("usage: play <a> <b> [head|tail]"),
                };
                Ok(Command::Play { tile, end })
            }
            _ => bail!("commands: play <a> <b> [head|tail], draw, quit"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbosity = cli.verbose.saturating_add(1).clamp(1, 5);
    let level = Level::from_str(verbosity.to_string().as_str())?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    let base = match cli.mode {
        Mode::VsComputer => MatchConfig::vs_computer(),
        Mode::TwoPlayer => MatchConfig::two_player(),
        Mode::ComputerOnly => MatchConfig::computer_only(),
    };
    let config = base
        .with_target(TargetScore::parse_or_default(&cli.target))
        .with_scoring(cli.scoring.into())
        .with_sorted_hands(!cli.unsorted)
        .with_seed(cli.seed.unwrap_or_else(rand::random));
    info!(seed = config.seed, "starting domino-match");

    let interactive = cli.mode != Mode::ComputerOnly;
    let pace = Duration::from_millis(cli.pace_ms);
    let mut controller = MatchController::start_match(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let events = controller.drain_events();
        print_events(&controller, events);
        let status = controller.status();

        match status {
            Status::AwaitingComputer { .. } => {
                if !pace.is_zero() {
                    thread::sleep(pace);
                }
                controller.step()?;
            }
            Status::AwaitingHuman { player, legal, forced } => {
                print_table(&controller, player, &legal, forced);
                let Some(line) = prompt(&mut lines, "> ")? else {
                    return Ok(());
                };
                let result = match line.parse::<Command>() {
                    Ok(Command::Play { tile, end }) => {
                        controller.submit_human_move(tile, end).map(drop)
                    }
                    Ok(Command::Draw) => controller.request_draw().map(drop),
                    Ok(Command::Quit) => return Ok(()),
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                if let Err(err) = result {
                    println!("{err}");
                }
            }
            Status::RoundOver(summary) => {
                print_summary(&controller, &summary);
                if interactive {
                    match prompt(&mut lines, "next round? [Y/n] ")? {
                        Some(answer) if answer.trim().eq_ignore_ascii_case("n") => return Ok(()),
                        None => return Ok(()),
                        Some(_) => {}
                    }
                }
                controller.continue_match()?;
            }
            Status::MatchOver { winner, final_scores } => {
                println!(
                    "{} wins the match {}-{}",
                    controller.state().seat(winner).name,
                    final_scores[winner],
                    final_scores[winner.opponent()]
                );
                if !interactive {
                    return Ok(());
                }
                match prompt(&mut lines, "play again? [y/N] ")? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        controller.reset_match();
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> anyhow::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose().context("failed to read stdin")
}

fn print_events(controller: &MatchController, events: Vec<GameEvent>) {
    let name = |p: PlayerId| controller.state().seat(p).name.as_str();
    for event in events {
        match event {
            GameEvent::RoundStarted { round, first_to_act, .. } => {
                println!("--- Round {round}: {} leads ---", name(first_to_act));
            }
            GameEvent::TileDrawn { player, tile, boneyard_remaining } => {
                if controller.state().seat(player).is_human() {
                    println!("{} drew {tile} ({boneyard_remaining} left)", name(player));
                } else {
                    println!("{} drew a tile ({boneyard_remaining} left)", name(player));
                }
            }
            GameEvent::TilePlayed { player, tile, end, .. } => {
                println!("{} played {tile} on the {end}", name(player));
            }
            GameEvent::TurnPassed { player } => println!("{} passed", name(player)),
            GameEvent::RoundEnded { .. } | GameEvent::MatchEnded { .. } => {}
        }
    }
}

fn print_table(controller: &MatchController, player: PlayerId, legal: &[Tile], forced: Option<Tile>) {
    let round = controller.round();
    let hand: Vec<String> = round.hand(player).tiles().iter().map(Tile::to_string).collect();
    println!();
    println!("chain: {}", round.chain());
    println!(
        "boneyard: {}  opponent holds {}",
        round.boneyard().len(),
        round.hand(player.opponent()).len()
    );
    println!("{} hand: {}", controller.state().seat(player).name, hand.join(" "));
    match (forced, legal.is_empty()) {
        (Some(tile), _) => println!("you must play {tile}"),
        (None, true) => println!("no playable tile; type 'draw'"),
        (None, false) => {}
    }
}

fn print_summary(controller: &MatchController, summary: &RoundSummary) {
    let state = controller.state();
    let result = &summary.result;
    match result.outcome {
        RoundOutcome::Winner(p) => println!(
            "{} wins round {} ({})",
            state.seat(p).name,
            summary.round_number,
            result.reason
        ),
        RoundOutcome::Draw => println!("round {} is drawn ({})", summary.round_number, result.reason),
    }
    println!("final chain: {}", summary.chain);
    for (p, score) in state.scores().iter() {
        println!("  {}: {score} (pips left {})", state.seat(p).name, result.pips[p]);
    }
}
