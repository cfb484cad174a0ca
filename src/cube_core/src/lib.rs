//! A 3x3x3 cube modelled sticker by sticker, with the fourteen moves used by
//! the beam search solver.

pub mod cube;
pub mod encoding;
pub mod faces;
pub mod history;
pub mod moves;
pub mod scramble;

pub use cube::{CubeState, Renderer, Stickers};
pub use encoding::{Encoding, FEATURE_LEN};
pub use faces::{Color, Face, Faces, Grid};
pub use history::{HistoryEntry, MoveHistory};
pub use moves::{InvalidMoveError, Move, MoveParseError, invert_sequence, inverse_id, parse_moves};
