//! Arena combat CLI
//!
//! Plays matches against the adaptive opponent from the terminal, either
//! interactively or from a scripted action sequence.

use std::io::{self, BufRead, Write};

use clap::Parser;

use arena_core::{Action, BattleError, Difficulty, GameSession, MatchStatus, TurnReport};

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based arena combat against an adaptive opponent", long_about = None)]
struct Cli {
    /// Opponent tier: easy, medium or hard (unknown values fall back to medium)
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Fixed RNG seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated action script (attack,defend,special,heal); omit for interactive play
    #[arg(long)]
    script: Option<String>,

    /// Stop after this many resolved turns even if the match is still ongoing
    #[arg(long)]
    turns: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let difficulty = Difficulty::from_request(Some(&cli.difficulty));

    let session = GameSession::new();
    let overview = match cli.seed {
        Some(seed) => session.start_seeded(difficulty, seed),
        None => session.start(difficulty),
    };

    println!("⚔️  Match {} - you vs {}", overview.match_id, overview.ai.name);
    println!("   Both sides start at 100 health and 100 energy.");
    println!("   Actions cost energy: attack 10, defend 5, special 25, heal 20.\n");

    match cli.script {
        Some(script) => run_script(&session, &script, cli.turns)?,
        None => run_interactive(&session, cli.turns)?,
    }

    print_final(&session);
    Ok(())
}

/// Play a pre-written action sequence, stopping at the script end, the turn
/// cap, or a terminal match status.
fn run_script(
    session: &GameSession,
    script: &str,
    turns: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let actions = script
        .split(',')
        .map(|token| token.parse::<Action>())
        .collect::<Result<Vec<_>, BattleError>>()?;

    let limit = turns.map(|t| t as usize).unwrap_or(actions.len());
    for action in actions.into_iter().take(limit) {
        match session.submit(action) {
            Ok(report) => {
                print_turn(&report);
                if report.status.is_terminal() {
                    break;
                }
            }
            Err(BattleError::InsufficientEnergy { action, required, available }) => {
                println!(
                    "⚡ Skipping {}: requires {} energy, {} available.",
                    action.display_name(),
                    required,
                    available
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Prompt for actions on stdin until the match ends, the player quits, or
/// the turn cap is reached.
fn run_interactive(
    session: &GameSession,
    turns: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut played = 0u32;

    loop {
        if let Some(cap) = turns {
            if played >= cap {
                println!("⏸️  Stopping after {} turns.", cap);
                break;
            }
        }

        print!("your move (attack/defend/special/heal, or quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("👋 Leaving the arena.");
            break;
        }

        let action: Action = match input.parse() {
            Ok(action) => action,
            Err(e) => {
                println!("❓ {}", e);
                continue;
            }
        };

        match session.submit(action) {
            Ok(report) => {
                played += 1;
                print_turn(&report);
                if report.status.is_terminal() {
                    break;
                }
            }
            Err(BattleError::InsufficientEnergy { action, required, available }) => {
                println!(
                    "⚡ Not enough energy for {}: requires {}, {} available.",
                    action.display_name(),
                    required,
                    available
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn print_turn(report: &TurnReport) {
    println!(
        "🎲 Turn {}: you chose {}, {} chose {}",
        report.turn,
        report.player_action.display_name(),
        report.ai.name,
        report.ai_action.display_name()
    );
    let result = &report.result;
    if result.ai_damage > 0 {
        println!("   💥 You hit {} for {}", report.ai.name, result.ai_damage);
    }
    if result.player_damage > 0 {
        println!("   🩸 {} hit you for {}", report.ai.name, result.player_damage);
    }
    if result.player_heal > 0 {
        println!("   ✨ You recovered {} health", result.player_heal);
    }
    if result.ai_heal > 0 {
        println!("   🧪 {} recovered {} health", report.ai.name, result.ai_heal);
    }
    println!(
        "   ❤️  you {}hp/{}en   🤖 {} {}hp/{}en",
        report.player.stats.health,
        report.player.stats.energy,
        report.ai.name,
        report.ai.stats.health,
        report.ai.stats.energy
    );
}

fn print_final(session: &GameSession) {
    let stats = match session.stats() {
        Ok(stats) => stats,
        Err(_) => return,
    };

    println!();
    match stats.status {
        MatchStatus::PlayerWins => {
            println!("🏆 You win! Final score: {}", stats.player.score);
        }
        MatchStatus::AiWins => {
            println!("💀 {} wins. Better luck next time.", stats.ai.name);
        }
        MatchStatus::Draw => {
            println!("🤝 Draw after {} turns.", stats.turn_count);
        }
        MatchStatus::Ongoing => {
            println!("⏳ Match left ongoing after {} turns.", stats.turn_count);
        }
    }
    println!(
        "   Final health: you {}, {} {}. Turns played: {}.",
        stats.player.stats.health, stats.ai.name, stats.ai.stats.health, stats.turn_count
    );
}
