use crate::{
    faces::{Color, Face, Faces},
    history::MoveHistory,
    moves::{InvalidMoveError, Move, transform},
};
use log::trace;
use std::fmt;

/// The colors of all 54 stickers.
pub type Stickers = Faces<Color>;

/// An observer that is shown the stickers after every change to a
/// [`CubeState`] it is registered with.
pub trait Renderer {
    fn render(&mut self, stickers: &Stickers);
}

impl Faces<Color> {
    /// Every face carries its canonical color.
    pub const SOLVED: Stickers = Faces([
        [[Color::White; 3]; 3],
        [[Color::Yellow; 3]; 3],
        [[Color::Red; 3]; 3],
        [[Color::Orange; 3]; 3],
        [[Color::Blue; 3]; 3],
        [[Color::Green; 3]; 3],
    ]);

    /// The stickers after `move_`, leaving `self` alone.
    #[must_use]
    pub fn applied(&self, move_: Move) -> Stickers {
        transform(self, move_)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_sticker_count() == 54
    }

    /// How many stickers sit on the face whose canonical color they carry.
    #[must_use]
    pub fn solved_sticker_count(&self) -> usize {
        self.iter()
            .filter(|&(face, _, _, color)| face.canonical_color() == color)
            .count()
    }

    /// Number of stickers of each color, indexed by color id. Every move is
    /// a permutation, so this is always nine of each.
    #[must_use]
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for (.., color) in self.iter() {
            counts[usize::from(color.id())] += 1;
        }
        counts
    }
}

impl fmt::Display for Faces<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            writeln!(f, "{}:", face.name())?;
            for cells in &self[face] {
                writeln!(f, "  {} {} {}", cells[0], cells[1], cells[2])?;
            }
        }
        Ok(())
    }
}

/// A 3x3x3 cube: its stickers, the history of moves applied to it, and an
/// optional renderer.
///
/// A `CubeState` is always the only handle to its stickers. Search code that
/// needs to explore without disturbing the caller works on [`copy`], which
/// shares nothing with the original.
///
/// [`copy`]: CubeState::copy
pub struct CubeState {
    stickers: Stickers,
    history: MoveHistory,
    renderer: Option<Box<dyn Renderer>>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// A solved cube with an empty history and no renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stickers: Stickers::SOLVED,
            history: MoveHistory::new(),
            renderer: None,
        }
    }

    /// A solved cube that shows itself to `renderer` now and after every
    /// subsequent change.
    #[must_use]
    pub fn with_renderer(renderer: Box<dyn Renderer>) -> Self {
        let mut cube = Self {
            renderer: Some(renderer),
            ..Self::new()
        };
        cube.notify();
        cube
    }

    /// Register `renderer`, replacing any previous one, and show it the
    /// current stickers.
    pub fn attach_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
        self.notify();
    }

    pub fn detach_renderer(&mut self) -> Option<Box<dyn Renderer>> {
        self.renderer.take()
    }

    #[must_use]
    pub fn stickers(&self) -> &Stickers {
        &self.stickers
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Apply `move_` and record it in the history.
    pub fn apply(&mut self, move_: Move) {
        let snapshot = self.stickers;
        self.stickers = transform(&snapshot, move_);
        self.history.push_move(move_);
        self.notify();
    }

    /// Apply the move with identifier `id`.
    ///
    /// # Errors
    ///
    /// If `id` does not name a move. The cube is left untouched.
    pub fn apply_id(&mut self, id: u8) -> Result<(), InvalidMoveError> {
        let move_ = Move::try_from(id)?;
        self.apply(move_);
        Ok(())
    }

    /// Apply every move of `moves` in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for move_ in moves {
            self.apply(move_);
        }
    }

    /// Apply `moves` in order and seal them with a scramble boundary.
    pub fn scramble(&mut self, moves: &[Move]) {
        trace!("Scrambling with {} moves", moves.len());
        self.apply_all(moves.iter().copied());
        self.history.push_boundary();
    }

    /// Revert the most recently applied move, returning it. Scramble
    /// boundaries recorded after that move are dropped with it, so undoing
    /// right after a scramble reverts the scramble's last move. An empty
    /// history makes this a no-op.
    pub fn undo(&mut self) -> Option<Move> {
        let move_ = self.history.pop_move()?;
        let snapshot = self.stickers;
        self.stickers = transform(&snapshot, move_.inverse());
        self.notify();
        Some(move_)
    }

    /// Revert every move back to the boundary before the most recent batch,
    /// returning how many moves were undone.
    pub fn undo_scramble(&mut self) -> usize {
        let batch_len = self.history.last_batch_len();
        for _ in 0..batch_len {
            self.undo();
        }
        trace!("Undid a batch of {batch_len} moves");
        batch_len
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stickers.is_solved()
    }

    /// Return to the solved arrangement and forget all history.
    pub fn reset(&mut self) {
        self.stickers = Stickers::SOLVED;
        self.history.clear();
        self.notify();
    }

    /// An independent cube with the same stickers and history. The renderer
    /// is not carried over.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            stickers: self.stickers,
            history: self.history.clone(),
            renderer: None,
        }
    }

    fn notify(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.stickers);
        }
    }
}

impl Clone for CubeState {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeState")
            .field("stickers", &self.stickers)
            .field("history", &self.history)
            .field("has_renderer", &self.renderer.is_some())
            .finish()
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.stickers, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use std::{cell::RefCell, rc::Rc};

    use crate::faces::Color::{Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y};

    #[derive(Clone, Default)]
    struct RecordingRenderer(Rc<RefCell<Vec<Stickers>>>);

    impl Renderer for RecordingRenderer {
        fn render(&mut self, stickers: &Stickers) {
            self.0.borrow_mut().push(*stickers);
        }
    }

    #[test]
    fn test_r_layout() {
        let mut cube = CubeState::new();
        cube.apply(Move::R);
        let expected = Faces([
            [[W, W, B], [W, W, B], [W, W, B]],
            [[Y, Y, G], [Y, Y, G], [Y, Y, G]],
            [[R; 3]; 3],
            [[O; 3]; 3],
            [[B, B, Y], [B, B, Y], [B, B, Y]],
            [[G, G, W], [G, G, W], [G, G, W]],
        ]);
        assert_eq!(cube.stickers(), &expected);
    }

    #[test]
    fn test_f_layout() {
        let mut cube = CubeState::new();
        cube.apply(Move::F);
        let expected = Faces([
            [[R, R, R], [W, W, W], [W, W, W]],
            [[Y, Y, Y], [Y, Y, Y], [O, O, O]],
            [[R, R, Y], [R, R, Y], [R, R, Y]],
            [[W, O, O], [W, O, O], [W, O, O]],
            [[B; 3]; 3],
            [[G; 3]; 3],
        ]);
        assert_eq!(cube.stickers(), &expected);
    }

    #[test]
    fn test_u_layout() {
        let mut cube = CubeState::new();
        cube.apply(Move::U);
        let expected = Faces([
            [[W; 3]; 3],
            [[Y; 3]; 3],
            [[R, R, R], [R, R, R], [B, B, B]],
            [[O, O, O], [O, O, O], [G, G, G]],
            [[B, B, B], [B, B, B], [O, O, O]],
            [[R, R, R], [G, G, G], [G, G, G]],
        ]);
        assert_eq!(cube.stickers(), &expected);
    }

    #[test]
    fn test_m_layout() {
        let mut cube = CubeState::new();
        cube.apply(Move::M);
        let expected = Faces([
            [[W, G, W], [W, G, W], [W, G, W]],
            [[Y, B, Y], [Y, B, Y], [Y, B, Y]],
            [[R; 3]; 3],
            [[O; 3]; 3],
            [[B, W, B], [B, W, B], [B, W, B]],
            [[G, Y, G], [G, Y, G], [G, Y, G]],
        ]);
        assert_eq!(cube.stickers(), &expected);
    }

    #[test]
    fn test_rotation_after_r_then_u() {
        let mut cube = CubeState::new();
        cube.apply_all([Move::R, Move::U]);
        assert_eq!(cube.stickers()[Face::Up], [[B, B, B], [W, W, W], [W, W, W]]);
        assert_eq!(cube.stickers()[Face::Right][2], [W, G, G]);
        assert_eq!(cube.stickers()[Face::Back][0], [R, R, R]);
    }

    #[test]
    fn test_apply_id_rejects_out_of_range() {
        let mut cube = CubeState::new();
        assert_eq!(cube.apply_id(14), Err(InvalidMoveError(14)));
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());

        cube.apply_id(4).unwrap();
        assert_eq!(cube.history().moves().collect::<Vec<_>>(), vec![Move::F]);
    }

    #[test]
    fn test_scramble_records_boundary() {
        let mut cube = CubeState::new();
        cube.scramble(&[Move::R, Move::LPrime]);
        assert_eq!(
            cube.history().entries(),
            &[
                HistoryEntry::Move(Move::R),
                HistoryEntry::Move(Move::LPrime),
                HistoryEntry::ScrambleBoundary,
            ]
        );
        assert_eq!(cube.history().len(), 2);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut cube = CubeState::new();
        assert_eq!(cube.undo(), None);
        assert!(cube.is_solved());
        assert!(cube.history().entries().is_empty());
    }

    #[test]
    fn test_undo_scramble() {
        let mut cube = CubeState::new();
        cube.scramble(&[Move::U]);
        let after_first = *cube.stickers();
        cube.scramble(&[Move::R, Move::F, Move::MPrime]);
        assert_eq!(cube.undo_scramble(), 3);
        assert_eq!(cube.stickers(), &after_first);
        assert_eq!(
            cube.history().entries(),
            &[HistoryEntry::Move(Move::U), HistoryEntry::ScrambleBoundary]
        );
        assert_eq!(cube.undo_scramble(), 1);
        assert!(cube.is_solved());
        assert_eq!(cube.undo_scramble(), 0);
    }

    #[test]
    fn test_reset() {
        let mut cube = CubeState::new();
        cube.scramble(&[Move::R, Move::D, Move::B]);
        cube.apply(Move::M);
        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.history().entries().is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut cube = CubeState::new();
        cube.apply(Move::R);
        let mut copy = cube.copy();
        copy.apply(Move::U);
        copy.undo();
        copy.undo();
        assert!(copy.is_solved());
        assert!(!cube.is_solved());
        assert_eq!(cube.history().len(), 1);
    }

    #[test]
    fn test_renderer_notifications() {
        let renderer = RecordingRenderer::default();
        let frames = Rc::clone(&renderer.0);
        let mut cube = CubeState::with_renderer(Box::new(renderer));
        assert_eq!(frames.borrow().len(), 1);

        cube.scramble(&[Move::R, Move::U]);
        cube.undo();
        assert_eq!(frames.borrow().len(), 4);
        assert_eq!(frames.borrow()[1], Stickers::SOLVED.applied(Move::R));

        // Copies never inherit the renderer
        let mut copy = cube.copy();
        copy.apply(Move::F);
        assert_eq!(frames.borrow().len(), 4);

        cube.reset();
        assert_eq!(frames.borrow().last(), Some(&Stickers::SOLVED));

        assert!(cube.detach_renderer().is_some());
        cube.apply(Move::B);
        assert_eq!(frames.borrow().len(), 5);
    }

    #[test]
    fn test_display() {
        let text = CubeState::new().to_string();
        assert!(text.starts_with("Up:\n  W W W\n"));
        assert!(text.ends_with("Back:\n  G G G\n  G G G\n  G G G\n"));
    }
}
