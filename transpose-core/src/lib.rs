// transpose-core/src/lib.rs

//! The core logic for the fretboard transposition app.
//! This crate owns the chromatic note tables, the semitone-shift
//! operations, and the scale and instrument models. It is completely
//! headless and contains no UI code.

pub mod error;
pub mod fretboard;
pub mod notes;
pub mod scale;
pub mod transpose;

pub use error::TransposeError;
pub use fretboard::Instrument;
pub use scale::{scale, shift_scale, Mode, Scale};
pub use transpose::{get_note, shift_note, Note};
