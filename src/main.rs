mod logger;

use std::error::Error;
use std::process::ExitCode;
use std::time::Instant;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sliding_tiles::render::{render_board, render_solution, render_summary, RenderStyle};
use sliding_tiles::{shuffle, Board, SearchConfig, SearchEngine, DEFAULT_SHUFFLE_STEPS};

#[derive(Parser)]
#[command(name = "sliding-tiles")]
#[command(about = "Shuffle a sliding-tile puzzle and solve it with best-first search")]
struct Args {
    /// Board width and height
    #[arg(
        short = 'n',
        long,
        default_value_t = 3,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        conflicts_with = "board"
    )]
    size: usize,

    /// Random slides applied to the solved board
    #[arg(short, long, default_value_t = DEFAULT_SHUFFLE_STEPS, conflicts_with = "board")]
    steps: usize,

    /// Seed for a reproducible shuffle
    #[arg(long, conflicts_with = "board")]
    seed: Option<u64>,

    /// Solve this board instead of shuffling, e.g. "1 2 3/4 0 6/7 5 8"
    #[arg(long)]
    board: Option<Board>,

    /// Requeue boards reached by a shorter route (shortest solutions)
    #[arg(long)]
    optimal: bool,

    /// Disable colour
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    logger::init(args.verbose, args.plain)?;

    let style = if args.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Color
    };

    let puzzle = match args.board {
        Some(board) => {
            println!("Puzzle:\n{}", render_board(&board, style));
            board
        }
        None => {
            let goal = Board::goal(args.size);
            println!("Puzzle before shuffle:\n{}", render_board(&goal, style));

            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let shuffled = shuffle(&goal, args.steps, &mut rng);
            println!("Puzzle after shuffle:\n{}", render_board(&shuffled, style));
            shuffled
        }
    };

    if !puzzle.is_solvable() {
        warn!("board parity rules out the goal, not searching");
        eprintln!("No solution exists for this board");
        return Ok(ExitCode::FAILURE);
    }

    let config = if args.optimal {
        SearchConfig::optimal()
    } else {
        SearchConfig::default()
    };
    let mut engine = SearchEngine::new(config);

    let start = Instant::now();
    let solution = engine.resolve(&puzzle);
    let elapsed = start.elapsed();
    info!("{}", engine.stats());

    match solution {
        Some(solution) => {
            println!("{}", render_solution(&solution, style));
            println!("{}", render_summary(solution.move_count(), elapsed));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No solution found");
            Ok(ExitCode::FAILURE)
        }
    }
}
