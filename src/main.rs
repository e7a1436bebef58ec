use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollout_2048::engine;
use rollout_2048::rollout::{Rollout, RolloutParallel, DEFAULT_ITERATIONS, DEFAULT_PLAYOUT_CAP};
use rollout_2048::Board;

/// Plays 2048 with the rollout evaluator, printing the board after every
/// move until no legal move remains.
#[derive(Parser, Debug)]
#[command(name = "rollout-2048")]
struct Config {
    /// Board height
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Board width
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Rollout trials per candidate direction
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Cap on moves within a single simulated playout
    #[arg(long, default_value_t = DEFAULT_PLAYOUT_CAP)]
    max_playout_moves: usize,

    /// Fixed RNG seed for reproducible games; seeded from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate the four candidate directions on worker threads
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    flexi_logger::Logger::try_with_env_or_str("info")?.start()?;
    let config = Config::parse();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = Board::new(config.rows, config.cols);
    engine::spawn_tile(&mut board, &mut rng);
    engine::spawn_tile(&mut board, &mut rng);
    println!("{}", board);

    let sequential = Rollout::new(config.iterations).with_playout_cap(config.max_playout_moves);
    let parallel = RolloutParallel::new(config.iterations).with_playout_cap(config.max_playout_moves);

    let mut score: u64 = 0;
    let mut move_count: u64 = 0;
    loop {
        let chosen = if config.parallel {
            parallel.choose_move(&board, &mut rng)
        } else {
            sequential.choose_move(&board, &mut rng)
        };
        let Some(direction) = chosen else {
            break;
        };
        score += engine::apply_move(&mut board, direction, &mut rng) as u64;
        move_count += 1;
        println!("{}", board);
    }

    info!(
        "game over: score {}, moves {}, highest tile {}",
        score,
        move_count,
        board.max_tile()
    );
    Ok(())
}
