use std::io::{Error, ErrorKind};
use std::time::Duration;

use clap::Parser;
use conways::config::{
    DEFAULT_SIDE, DEFAULT_TICK_INTERVAL_MS, MAX_SIDE, MAX_TICK_INTERVAL_MS, MIN_SIDE,
    MIN_TICK_INTERVAL_MS,
};
use conways::{patterns, Session, SessionConfig};
use log::{info, warn};
use tokio::time;

#[derive(Parser, Debug)]
#[clap(name = "conways", about = "Conway's Game of Life on a toroidal grid")]
struct Cli {
    /// Rows and columns of the square grid
    #[arg(long, default_value_t = DEFAULT_SIDE as u64,
        value_parser = clap::value_parser!(u64).range((MIN_SIDE as u64)..=(MAX_SIDE as u64)))]
    side: u64,
    /// Milliseconds between generations
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS))]
    interval_ms: u64,
    /// Seed pattern, centred unless --row/--col are given
    #[arg(short = 'p', long, default_value = "glider")]
    pattern: String,
    #[arg(long)]
    row: Option<usize>,
    #[arg(long)]
    col: Option<usize>,
    /// Stop after this many generations
    #[arg(short = 'g', long, default_value_t = 20)]
    generations: usize,
    /// Step back this many generations once play stops
    #[arg(short = 'r', long, default_value_t = 0)]
    rewind: usize,
    /// Disable backward stepping
    #[arg(long)]
    no_history: bool,
}

fn print_generation(session: &Session) {
    println!(
        "generation {} (population {})",
        session.steps_from_origin(),
        session.current().population()
    );
    println!("{}", session.current());
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let args = Cli::parse();
    let mut session = Session::new(SessionConfig {
        side: args.side as usize,
        tick_interval_ms: args.interval_ms,
        history: !args.no_history,
    });

    let pattern = patterns::find(&args.pattern).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("unknown pattern {:?}", args.pattern),
        )
    })?;
    let side = session.side();
    let (rows, cols) = pattern.extent();
    let row = args.row.unwrap_or(side.saturating_sub(rows) / 2) % side;
    let col = args.col.unwrap_or(side.saturating_sub(cols) / 2) % side;
    session.load_pattern(pattern, row, col);
    print_generation(&session);

    session.toggle_run();
    info!(
        "playing {} for up to {} generations every {}ms",
        pattern.name,
        args.generations,
        session.tick_interval_ms()
    );

    // The first tick of an interval completes immediately.
    let mut ticker = time::interval(Duration::from_millis(session.tick_interval_ms()));
    ticker.tick().await;
    while session.is_running() && session.steps_from_origin() < args.generations {
        ticker.tick().await;
        session.tick();
        print_generation(&session);
    }
    if session.is_running() {
        session.toggle_run();
    }

    if args.rewind > 0 {
        if !session.has_history() {
            warn!("history disabled, cannot rewind");
        } else {
            for _ in 0..args.rewind {
                session.backward();
            }
            info!("rewound to generation {}", session.steps_from_origin());
            print_generation(&session);
        }
    }

    Ok(())
}
