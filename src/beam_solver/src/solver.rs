use crate::{
    oracle::{Oracle, OracleError},
    start, success, working,
};
use cube_core::{CubeState, InvalidMoveError, Move};
use itertools::Itertools;
use log::{debug, info, warn};
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamSearchError {
    #[error("Beam width must be at least 1")]
    InvalidBeamWidth,
    #[error("Branching factor must be at least 1")]
    InvalidBranching,
    #[error("Oracle proposed an invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// The search budget. Defaults match the command line solver: depth 26,
/// width 1024, three moves expanded per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamSearchConfig {
    /// Number of depth levels expanded before giving up.
    pub max_depth: usize,
    /// Candidates retained after each level.
    pub beam_width: usize,
    /// Best-scoring moves expanded per retained candidate.
    pub branching: usize,
}

impl Default for BeamSearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 26,
            beam_width: 1024,
            branching: 3,
        }
    }
}

impl BeamSearchConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    #[must_use]
    pub fn with_branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }
}

/// A move sequence from the root together with the sum of the oracle scores
/// that selected each of its moves.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCandidate {
    pub moves: Vec<Move>,
    pub score: f32,
}

impl SearchCandidate {
    fn root() -> Self {
        Self {
            moves: vec![],
            score: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The first sequence found that solves the cube, or else the best
    /// scoring sequence of the final level.
    pub moves: Vec<Move>,
    pub score: f32,
    /// Whether `moves` solves the searched cube.
    pub solved: bool,
    /// Candidates replayed and checked, across all levels.
    pub nodes_visited: u64,
}

pub struct BeamSolver<O: Oracle> {
    oracle: O,
    config: BeamSearchConfig,
}

/// State owned by a single `solve` call.
struct BeamSolverMutable {
    /// The searched cube. Every candidate is replayed onto it and undone
    /// again before the next one is visited.
    scratch: CubeState,
    nodes_visited: u64,
}

enum LevelOutcome {
    Solved(SearchCandidate),
    Expanded(Vec<SearchCandidate>),
}

impl<O: Oracle> BeamSolver<O> {
    pub fn new(oracle: O, config: BeamSearchConfig) -> Self {
        Self { oracle, config }
    }

    #[must_use]
    pub fn config(&self) -> &BeamSearchConfig {
        &self.config
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn into_oracle(self) -> O {
        self.oracle
    }

    /// Visit up to `beam_width` candidates of `beam` in order. Returns the
    /// first one that solves the cube, or the children of all of them sorted
    /// by score and cut to `beam_width`.
    fn expand_level(
        &mut self,
        mutable: &mut BeamSolverMutable,
        beam: &[SearchCandidate],
    ) -> Result<LevelOutcome, BeamSearchError> {
        let BeamSearchConfig {
            beam_width,
            branching,
            ..
        } = self.config;
        let mut children = Vec::with_capacity(beam.len().min(beam_width) * branching);

        for candidate in beam.iter().take(beam_width) {
            mutable.scratch.apply_all(candidate.moves.iter().copied());
            mutable.nodes_visited += 1;
            if mutable.scratch.is_solved() {
                return Ok(LevelOutcome::Solved(candidate.clone()));
            }

            let ranked = self.oracle.ranked_moves(&mutable.scratch, branching);
            for _ in &candidate.moves {
                mutable.scratch.undo();
            }

            for (id, score) in ranked?.into_iter().take(branching) {
                // Overridden rankings bypass `top_k`, so check them here
                let move_ = Move::try_from(id)?;
                if score.is_nan() {
                    return Err(OracleError::NanScore {
                        index: usize::from(id),
                    }
                    .into());
                }
                let mut moves = Vec::with_capacity(candidate.moves.len() + 1);
                moves.extend_from_slice(&candidate.moves);
                moves.push(move_);
                children.push(SearchCandidate {
                    moves,
                    score: candidate.score + score,
                });
            }
        }

        // Stable, so equal scores keep the order they were generated in
        children.sort_by(|a, b| b.score.total_cmp(&a.score));
        children.truncate(beam_width);
        Ok(LevelOutcome::Expanded(children))
    }

    /// Beam search for a sequence that solves `cube`.
    ///
    /// Every level replays each retained candidate onto a copy of `cube`.
    /// The first candidate found solved, in beam order, is returned at once.
    /// Otherwise the oracle ranks the moves at that candidate, its
    /// `branching` best moves become children, and the best `beam_width`
    /// children of the level form the next beam. If `max_depth` levels pass
    /// without a solution, the best candidate of the last beam is returned
    /// with `solved` reporting whether it happens to solve the cube.
    ///
    /// `cube` itself is never modified.
    ///
    /// # Errors
    ///
    /// If the beam width or branching factor is zero, if the oracle fails, or
    /// if it proposes a move that does not exist. Errors abort the search.
    pub fn solve(&mut self, cube: &CubeState) -> Result<SearchOutcome, BeamSearchError> {
        if self.config.beam_width == 0 {
            return Err(BeamSearchError::InvalidBeamWidth);
        }
        if self.config.branching == 0 {
            return Err(BeamSearchError::InvalidBranching);
        }

        info!(
            start!("Beam searching to depth {} with width {} and branching {}"),
            self.config.max_depth, self.config.beam_width, self.config.branching
        );
        let start = Instant::now();

        let mut mutable = BeamSolverMutable {
            scratch: cube.copy(),
            nodes_visited: 0,
        };
        let mut beam = vec![SearchCandidate::root()];

        for depth in 0..self.config.max_depth {
            debug!(working!("Searching depth {}..."), depth);
            let depth_start = Instant::now();
            let nodes_before = mutable.nodes_visited;

            match self.expand_level(&mut mutable, &beam)? {
                LevelOutcome::Solved(candidate) => {
                    info!(
                        success!("Solution of length {} found in {:.3}s after {} nodes: {}"),
                        candidate.moves.len(),
                        start.elapsed().as_secs_f64(),
                        mutable.nodes_visited,
                        candidate.moves.iter().join(" ")
                    );
                    return Ok(SearchOutcome {
                        moves: candidate.moves,
                        score: candidate.score,
                        solved: true,
                        nodes_visited: mutable.nodes_visited,
                    });
                }
                LevelOutcome::Expanded(next) => beam = next,
            }

            debug!(
                working!("Traversed {} nodes in {:.3}s, kept {} candidates"),
                mutable.nodes_visited - nodes_before,
                depth_start.elapsed().as_secs_f64(),
                beam.len()
            );
        }

        // An oracle may rank no moves at all, leaving the beam empty
        let best = beam.into_iter().next().unwrap_or_else(SearchCandidate::root);
        mutable.scratch.apply_all(best.moves.iter().copied());
        let solved = mutable.scratch.is_solved();
        if solved {
            info!(
                success!("Final candidate solves the cube, found in {:.3}s"),
                start.elapsed().as_secs_f64()
            );
        } else {
            warn!(
                "No solution within depth {}, returning the best candidate ({} moves, score {})",
                self.config.max_depth,
                best.moves.len(),
                best.score
            );
        }
        Ok(SearchOutcome {
            moves: best.moves,
            score: best.score,
            solved,
            nodes_visited: mutable.nodes_visited,
        })
    }
}
