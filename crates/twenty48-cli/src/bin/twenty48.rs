//! Play 2048 in the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin twenty48
//! ```
//!
//! Replay a game deterministically on a 5×5 board:
//!
//! ```sh
//! cargo run --bin twenty48 -- --size 5 --seed 42
//! ```
//!
//! Let random moves play for a while and print the final board:
//!
//! ```sh
//! cargo run --bin twenty48 -- --seed 7 --autoplay 500
//! ```

use std::{
    io::{self, Write as _},
    num::NonZero,
    process,
};

use clap::Parser;
use twenty48_cli::{Session, render::render, session::autoplay_rng};
use twenty48_core::RandomPicker;
use twenty48_game::{Game, GameConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the square board.
    #[arg(long, value_name = "N", default_value_t = GameConfig::DEFAULT_SIZE)]
    size: usize,

    /// Seed for tile placement. A random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Value of every spawned tile.
    #[arg(long, value_name = "VALUE", default_value_t = GameConfig::DEFAULT_SPAWN_VALUE)]
    spawn_value: u32,

    /// Maximum number of snapshots kept for undo.
    #[arg(long, value_name = "COUNT")]
    history_capacity: Option<NonZero<usize>>,

    /// Play this many random moves instead of reading commands.
    #[arg(long, value_name = "MOVES")]
    autoplay: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    log::info!("Starting twenty48, version={}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), twenty48_cli::SessionError> {
    let config = GameConfig {
        size: args.size,
        spawn_value: args.spawn_value,
        history_capacity: args.history_capacity,
    };
    let picker = match args.seed {
        Some(seed) => RandomPicker::from_seed(seed),
        None => RandomPicker::from_entropy(),
    };
    let seed = picker.seed();
    log::info!("game seed: {seed}");

    let mut session = Session::new(Game::new(config, picker)?);
    let mut stdout = io::stdout().lock();

    if let Some(moves) = args.autoplay {
        let mut rng = autoplay_rng(seed);
        let committed = session.autoplay(moves, &mut rng)?;
        writeln!(stdout, "{}", render(session.game()))?;
        writeln!(stdout, "committed {committed} of {moves} moves (seed {seed})")?;
        return Ok(());
    }

    session.run(io::stdin().lock(), &mut stdout)
}
