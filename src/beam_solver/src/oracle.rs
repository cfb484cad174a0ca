use cube_core::{CubeState, Move};
use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Oracle returned {actual} scores, expected one per move ({expected})")]
    WrongLength { expected: usize, actual: usize },
    #[error("Oracle returned a NaN score for move {index}")]
    NanScore { index: usize },
    #[error("Oracle invocation failed")]
    Failed(#[source] Box<dyn Error + Send + Sync>),
}

/// Scores the moves available at a cube state. Higher scores mark moves more
/// likely to lead towards the solved state.
///
/// Implementors only have to provide [`scores`]. Oracles that already rank
/// moves themselves (a model returning its own top-k, for example) can
/// override [`ranked_moves`]; the solver checks every identifier it is
/// handed before applying it.
///
/// [`scores`]: Oracle::scores
/// [`ranked_moves`]: Oracle::ranked_moves
#[enum_dispatch]
pub trait Oracle {
    /// One score per move, indexed by move identifier.
    ///
    /// # Errors
    ///
    /// If the oracle cannot be evaluated.
    fn scores(&mut self, cube: &CubeState) -> Result<Vec<f32>, OracleError>;

    /// The `k` best `(move id, score)` pairs, best first. Equal scores keep
    /// identifier order.
    ///
    /// # Errors
    ///
    /// If the oracle fails or its score vector is malformed.
    fn ranked_moves(
        &mut self,
        cube: &CubeState,
        k: usize,
    ) -> Result<Vec<(u8, f32)>, OracleError> {
        let scores = self.scores(cube)?;
        top_k(&scores, k)
    }
}

/// Validate a per-move score vector and pick its `k` best entries.
///
/// # Errors
///
/// If `scores` does not hold exactly one score per move or contains NaN.
pub fn top_k(scores: &[f32], k: usize) -> Result<Vec<(u8, f32)>, OracleError> {
    if scores.len() != Move::COUNT {
        return Err(OracleError::WrongLength {
            expected: Move::COUNT,
            actual: scores.len(),
        });
    }
    if let Some(index) = scores.iter().position(|score| score.is_nan()) {
        return Err(OracleError::NanScore { index });
    }
    let mut ranked = Move::ALL
        .into_iter()
        .zip(scores.iter().copied())
        .map(|(move_, score)| (move_.id(), score))
        .collect_vec();
    // `sort_by` is stable, so ties stay in identifier order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    Ok(ranked)
}

/// An oracle backed by a closure, see [`oracle_fn`].
#[derive(Debug, Clone)]
pub struct FnOracle<F>(F);

/// Wrap a closure returning per-move scores as an [`Oracle`].
pub fn oracle_fn<F>(f: F) -> FnOracle<F>
where
    F: FnMut(&CubeState) -> Result<Vec<f32>, OracleError>,
{
    FnOracle(f)
}

impl<F> Oracle for FnOracle<F>
where
    F: FnMut(&CubeState) -> Result<Vec<f32>, OracleError>,
{
    fn scores(&mut self, cube: &CubeState) -> Result<Vec<f32>, OracleError> {
        (self.0)(cube)
    }
}

/// Looks one move ahead and scores each move by how many stickers end up on
/// the face whose canonical color they carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyOracle;

impl Oracle for GreedyOracle {
    // Counts are at most 54 and exactly representable
    #[allow(clippy::cast_precision_loss)]
    fn scores(&mut self, cube: &CubeState) -> Result<Vec<f32>, OracleError> {
        Ok(Move::ALL
            .into_iter()
            .map(|move_| cube.stickers().applied(move_).solved_sticker_count() as f32)
            .collect())
    }
}

/// Uniformly random scores from a seeded generator. Useful as a baseline.
#[derive(Debug, Clone)]
pub struct RandomOracle {
    rng: fastrand::Rng,
}

impl RandomOracle {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Oracle for RandomOracle {
    fn scores(&mut self, _cube: &CubeState) -> Result<Vec<f32>, OracleError> {
        Ok((0..Move::COUNT).map(|_| self.rng.f32()).collect())
    }
}

/// The oracles shipped with this crate, selectable at runtime.
#[enum_dispatch(Oracle)]
#[derive(Debug, Clone)]
pub enum BuiltinOracle {
    GreedyOracle,
    RandomOracle,
}
