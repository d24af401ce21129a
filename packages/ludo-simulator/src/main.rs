//! Ludo simulator CLI - plays complete games in memory through the backend services.
//!
//! Prints one JSON line per game on stdout; logs go to stderr.

mod simulator;

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use clap::Parser;
use simulator::Simulator;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ludo-simulator")]
#[command(about = "In-memory Ludo game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per game
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,

    /// Base seed; game N uses seed + N
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Give up on a game after this many rolls
    #[arg(long, default_value = "20000")]
    max_rolls: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    ludo_backend::telemetry::init_tracing(if args.verbose { "debug" } else { "warn" });

    let simulator = Simulator::new(usize::from(args.players), args.max_rolls);
    let mut out = BufWriter::new(io::stdout().lock());
    let started = Instant::now();
    let mut finished = 0u32;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(game));
        let result = simulator.play(game, seed).await?;
        if result.winner.is_some() {
            finished += 1;
        } else {
            warn!(game, seed, rolls = result.rolls, "game hit the roll limit");
        }
        serde_json::to_writer(&mut out, &result)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        games = args.games,
        finished,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation complete"
    );
    Ok(())
}
