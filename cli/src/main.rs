//! Terminal frontend: renders session snapshots and feeds key presses to
//! the game engine.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use duemila_core::{Game, RandomSpawner, Snapshot, StepOutcome};

use store::FileSlot;
use term::Key;

mod store;
mod term;

#[derive(Parser, Debug)]
#[command(name = "duemila", about = "Play 2048 in the terminal")]
struct Args {
    /// Random seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where the high score is persisted
    #[arg(long, default_value = "highscore.txt")]
    high_score_file: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("session seed {seed}");

    let spawner = RandomSpawner::seed_from(seed);
    let slot = FileSlot::new(&args.high_score_file);
    let mut game = Game::new(spawner, slot);

    let _raw = term::RawMode::enable()?;
    render(&game.snapshot())?;

    let mut stdin = io::stdin();
    loop {
        match term::read_key(&mut stdin)? {
            Key::Slide(direction) => {
                let outcome = game.step(direction);
                if let StepOutcome::Moved { score_delta, .. } = outcome {
                    render(&game.snapshot())?;
                    if score_delta > 0 {
                        println!("  +{score_delta}");
                    }
                }
            }
            Key::Restart => {
                game.reset();
                render(&game.snapshot())?;
            }
            Key::Quit => break,
            Key::Other => {}
        }
    }

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn render(snapshot: &Snapshot<'_>) -> io::Result<()> {
    let mut out = io::stdout();
    // clear screen and home the cursor
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "Score: {:<12} High Score: {}", snapshot.score, snapshot.high_score)?;
    writeln!(out, "Arrows or WASD to slide, r restarts, q quits")?;
    writeln!(out)?;

    let side = snapshot.board.side();
    let rule = "+------".repeat(side as usize) + "+";
    writeln!(out, "{rule}")?;
    for i in 0..side {
        write!(out, "|")?;
        for j in 0..side {
            let cell = snapshot.board.get((i, j));
            if cell == 0 {
                write!(out, "      |")?;
            } else {
                write!(out, "{cell:^6}|")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{rule}")?;
    }

    if snapshot.game_over {
        writeln!(out)?;
        writeln!(out, "  *** GAME OVER ***  (r to restart, q to quit)")?;
    }
    out.flush()
}
