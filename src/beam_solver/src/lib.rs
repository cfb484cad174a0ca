//! Width-bounded beam search over cube moves, guided by a move-scoring
//! [`Oracle`].

pub mod oracle;
pub mod solver;

pub use oracle::{BuiltinOracle, FnOracle, GreedyOracle, Oracle, OracleError, RandomOracle, oracle_fn};
pub use solver::{BeamSearchConfig, BeamSearchError, BeamSolver, SearchCandidate, SearchOutcome};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
