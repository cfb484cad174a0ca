use crate::moves::Move;

/// One entry of a cube's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryEntry {
    Move(Move),
    /// Seals the batch of moves applied by one call to
    /// [`crate::CubeState::scramble`].
    ScrambleBoundary,
}

/// The ordered record of everything applied to a cube since it was created
/// or last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, boundaries included, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The applied moves, oldest first, without boundaries.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Move(move_) => Some(*move_),
            HistoryEntry::ScrambleBoundary => None,
        })
    }

    /// The number of recorded moves. Boundaries do not count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves().next().is_none()
    }

    /// The number of moves recorded after the most recent boundary that
    /// precedes them. Trailing boundaries are skipped first, so right after a
    /// scramble this is the length of that scramble.
    #[must_use]
    pub fn last_batch_len(&self) -> usize {
        self.entries
            .iter()
            .rev()
            .skip_while(|entry| **entry == HistoryEntry::ScrambleBoundary)
            .take_while(|entry| matches!(entry, HistoryEntry::Move(_)))
            .count()
    }

    pub(crate) fn push_move(&mut self, move_: Move) {
        self.entries.push(HistoryEntry::Move(move_));
    }

    pub(crate) fn push_boundary(&mut self) {
        self.entries.push(HistoryEntry::ScrambleBoundary);
    }

    /// Remove and return the most recent move. Boundaries recorded after it
    /// are discarded along with it since the batch they sealed is no longer
    /// intact. Does nothing and returns `None` if no move was recorded.
    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        let (index, move_) = self
            .entries
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, entry)| match entry {
                HistoryEntry::Move(move_) => Some((i, *move_)),
                HistoryEntry::ScrambleBoundary => None,
            })?;
        self.entries.truncate(index);
        Some(move_)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
