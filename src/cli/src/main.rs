mod net;

use beam_solver::{BeamSearchConfig, BeamSolver, BuiltinOracle, GreedyOracle, RandomOracle};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::{eyre::WrapErr, owo_colors::OwoColorize};
use cube_core::{
    CubeState, Move, invert_sequence, parse_moves,
    scramble::{has_immediate_reversal, random_scramble},
};
use itertools::Itertools;
use log::{LevelFilter, info, warn};
use net::{NetRenderer, colored_net};

/// Scrambles 3x3x3 cubes and solves them with an oracle guided beam search
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Raise the log level from warn to info, debug, then trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a scramble, the sequence undoing it, and the scrambled cube
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Scramble a cube and beam search for a solution
    Solve {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Number of search levels before giving up
        #[arg(long, default_value_t = BeamSearchConfig::default().max_depth)]
        depth: usize,
        /// Candidates kept after each level
        #[arg(long, default_value_t = BeamSearchConfig::default().beam_width)]
        width: usize,
        /// Best moves expanded per candidate
        #[arg(long, default_value_t = BeamSearchConfig::default().branching)]
        branching: usize,
        /// Which oracle scores the moves
        #[arg(long, value_enum, default_value_t = OracleKind::Greedy)]
        oracle: OracleKind,
        /// Print the cube after every move of the scramble and the solution
        #[arg(long)]
        watch: bool,
    },
}

#[derive(Args)]
struct ScrambleArgs {
    /// Moves to scramble with, for example "R U F'". Random when omitted
    #[arg(long, conflicts_with = "length")]
    scramble: Option<String>,
    /// Length of a random scramble
    #[arg(long, default_value_t = 26)]
    length: usize,
    /// Seed for the random scramble and the random oracle
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OracleKind {
    /// Score moves by the stickers they put on their home face
    Greedy,
    /// Seeded random scores
    Random,
}

impl ScrambleArgs {
    fn rng(&self) -> fastrand::Rng {
        self.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
    }

    fn moves(&self) -> color_eyre::Result<Vec<Move>> {
        let moves = match &self.scramble {
            Some(text) => {
                parse_moves(text).wrap_err_with(|| format!("Invalid scramble {text:?}"))?
            }
            None => random_scramble(&mut self.rng(), self.length),
        };
        if has_immediate_reversal(&moves) {
            warn!("The scramble undoes one of its own moves");
        }
        Ok(moves)
    }
}

fn print_scramble(moves: &[Move]) {
    println!("Scramble         : {}", moves.iter().join(" "));
    println!(
        "Possible solution: {}",
        invert_sequence(moves).iter().join(" ")
    );
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Scramble { scramble } => {
            let moves = scramble.moves()?;
            let mut cube = CubeState::new();
            cube.scramble(&moves);
            print_scramble(&moves);
            println!("{}", colored_net(cube.stickers()));
        }
        Commands::Solve {
            scramble,
            depth,
            width,
            branching,
            oracle,
            watch,
        } => {
            let moves = scramble.moves()?;
            let mut cube = if watch {
                CubeState::with_renderer(Box::new(NetRenderer::default()))
            } else {
                CubeState::new()
            };
            cube.scramble(&moves);
            print_scramble(&moves);

            let oracle: BuiltinOracle = match oracle {
                OracleKind::Greedy => GreedyOracle.into(),
                OracleKind::Random => RandomOracle::new(scramble.rng().u64(..)).into(),
            };
            let config = BeamSearchConfig::default()
                .with_max_depth(depth)
                .with_beam_width(width)
                .with_branching(branching);
            let outcome = BeamSolver::new(oracle, config).solve(&cube)?;
            info!(
                "Visited {} nodes, solution score {}",
                outcome.nodes_visited, outcome.score
            );

            println!(
                "Solution         : {}",
                outcome.moves.iter().join(" ")
            );
            cube.apply_all(outcome.moves);
            let solved = if cube.is_solved() {
                "yes".green().to_string()
            } else {
                "no".red().to_string()
            };
            println!("Cube solved      : {solved}");
            if !watch {
                println!("{}", colored_net(cube.stickers()));
            }
        }
    }

    Ok(())
}
