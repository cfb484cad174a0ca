use crate::moves::Move;
use itertools::Itertools;

/// A uniformly random sequence of `len` face turns in which no move is
/// immediately followed by its own inverse.
pub fn random_scramble(rng: &mut fastrand::Rng, len: usize) -> Vec<Move> {
    let mut scramble: Vec<Move> = Vec::with_capacity(len);
    while scramble.len() < len {
        let candidate = Move::FACE_TURNS[rng.usize(..Move::FACE_TURNS.len())];
        if scramble
            .last()
            .is_some_and(|last| last.inverse() == candidate)
        {
            continue;
        }
        scramble.push(candidate);
    }
    scramble
}

/// Whether some move in `moves` is directly followed by its inverse.
#[must_use]
pub fn has_immediate_reversal(moves: &[Move]) -> bool {
    moves
        .iter()
        .tuple_windows()
        .any(|(first, second)| first.inverse() == *second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeState;

    #[test]
    fn test_reversal_detection() {
        assert!(has_immediate_reversal(&[Move::U, Move::R, Move::RPrime]));
        assert!(has_immediate_reversal(&[Move::MPrime, Move::M]));
        assert!(!has_immediate_reversal(&[Move::R, Move::R, Move::L]));
        assert!(!has_immediate_reversal(&[Move::R]));
        assert!(!has_immediate_reversal(&[]));
    }

    #[test]
    fn test_random_scramble() {
        let mut rng = fastrand::Rng::with_seed(7);
        for len in [0, 1, 26, 100] {
            let scramble = random_scramble(&mut rng, len);
            assert_eq!(scramble.len(), len);
            assert!(!has_immediate_reversal(&scramble));
            assert!(scramble.iter().all(|move_| !move_.is_slice()));
        }
    }

    #[test]
    fn test_random_scramble_is_seeded() {
        let first = random_scramble(&mut fastrand::Rng::with_seed(42), 26);
        let second = random_scramble(&mut fastrand::Rng::with_seed(42), 26);
        assert_eq!(first, second);

        let mut cube = CubeState::new();
        cube.scramble(&first);
        assert_eq!(cube.history().len(), 26);
    }
}
