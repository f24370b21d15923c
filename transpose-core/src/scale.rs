//! # Scale Module
//!
//! Church modes and scale transposition on top of the pitch model. Each mode
//! carries a named interval table, so a scale is built in one pass by
//! shifting the tonic; there are no post-hoc accidental adjustments.
//!
//! ## Features
//! - The seven church modes with explicit semitone interval tables
//! - Label parsing with the common aliases (Major, Minor, Dominant)
//! - Scale construction from any canonical root
//! - Whole-scale transposition with octaves recomputed from absolute MIDI

use crate::error::TransposeError;
use crate::transpose::{get_note, shift_note, Note};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven diatonic church modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// The major scale.
    Ionian,
    /// Flat 3 and 7.
    Dorian,
    /// Flat 2, 3, 6 and 7.
    Phrygian,
    /// Sharp 4.
    Lydian,
    /// Flat 7.
    Mixolydian,
    /// The natural minor scale: flat 3, 6 and 7.
    Aeolian,
    /// Flat 2, 3, 5, 6 and 7.
    Locrian,
}

/// Number of degrees in a diatonic scale.
pub const DEGREES: usize = 7;

impl Mode {
    /// Semitone offsets of each scale degree from the tonic.
    pub const fn intervals(self) -> [i32; DEGREES] {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// The mode's proper name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TransposeError;

    /// Parses a mode label, accepting the common functional aliases
    /// alongside the proper names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ionian" | "Major" => Ok(Mode::Ionian),
            "Dorian" => Ok(Mode::Dorian),
            "Phrygian" => Ok(Mode::Phrygian),
            "Lydian" => Ok(Mode::Lydian),
            "Mixolydian" | "Dominant" => Ok(Mode::Mixolydian),
            "Aeolian" | "Minor" => Ok(Mode::Aeolian),
            "Locrian" => Ok(Mode::Locrian),
            other => Err(TransposeError::UnknownMode(other.to_string())),
        }
    }
}

/// A seven-degree scale: root name, mode, and the realized notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    /// Canonical name of the first degree.
    pub root: String,
    pub mode: Mode,
    /// The degrees in ascending order, starting at the root.
    pub notes: Vec<Note>,
}

/// Builds a scale from a canonical root name and a mode.
///
/// Every degree is the tonic shifted by the mode's interval for that
/// degree, so names, MIDI numbers and octaves all come out of the same
/// arithmetic as single-note shifts.
///
/// # Arguments
/// * `root` - One of the 12 canonical spellings
/// * `mode` - The church mode to realize
///
/// # Returns
/// * `Ok(scale)` - Seven ascending notes starting at the root
/// * `Err(UnknownNoteName)` - The root is not a canonical spelling
pub fn scale(root: &str, mode: Mode) -> Result<Scale, TransposeError> {
    let tonic = get_note(root)?;
    let notes = mode
        .intervals()
        .iter()
        .map(|&interval| shift_note(&tonic, interval))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scale {
        root: tonic.name,
        mode,
        notes,
    })
}

/// Returns a scale transposed by a signed number of semitones.
///
/// Each note goes through [`shift_note`], so octaves are recomputed from
/// the new absolute MIDI numbers rather than adjusted incrementally. The
/// root is renamed from the transposed first degree.
pub fn shift_scale(scale: &Scale, semitones: i32) -> Result<Scale, TransposeError> {
    let notes = scale
        .notes
        .iter()
        .map(|note| shift_note(note, semitones))
        .collect::<Result<Vec<_>, _>>()?;
    let root = notes
        .first()
        .map(|note| note.name.clone())
        .unwrap_or_else(|| scale.root.clone());
    Ok(Scale {
        root,
        mode: scale.mode,
        notes,
    })
}
