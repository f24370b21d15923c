//! # Fretboard Module
//!
//! The instrument model behind the slider screen: an instrument is a set of
//! open-string notes plus a fret count, and a slider position is just a
//! semitone offset from the open string. The two built-ins match the app's
//! segmented control (Guitar and Bass in standard tuning).

use crate::error::TransposeError;
use crate::transpose::{get_note, shift_note, Note};
use serde::{Deserialize, Serialize};

/// Frets on the built-in instruments; slider steps run 0..=15.
pub const DEFAULT_FRET_COUNT: u32 = 15;

/// An instrument as the fretboard screen sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    /// Open-string note names, low string first.
    pub open_strings: Vec<String>,
    /// Highest reachable fret; fret 0 is the open string.
    pub fret_count: u32,
}

impl Instrument {
    /// Six-string guitar in standard tuning.
    pub fn guitar() -> Self {
        Self {
            name: "Guitar".to_string(),
            open_strings: ["E", "A", "D", "G", "B", "E"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fret_count: DEFAULT_FRET_COUNT,
        }
    }

    /// Four-string bass in standard tuning.
    pub fn bass() -> Self {
        Self {
            name: "Bass".to_string(),
            open_strings: ["E", "A", "D", "G"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fret_count: DEFAULT_FRET_COUNT,
        }
    }

    pub fn string_count(&self) -> usize {
        self.open_strings.len()
    }

    /// The reference note of an open string.
    pub fn open_note(&self, string_index: usize) -> Result<Note, TransposeError> {
        let name = self.open_strings.get(string_index).ok_or_else(|| {
            TransposeError::StringOutOfRange {
                instrument: self.name.clone(),
                index: string_index,
                strings: self.open_strings.len(),
            }
        })?;
        get_note(name)
    }

    /// The note sounding at a fret on one string.
    ///
    /// Fret 0 is the open string; each higher fret is one semitone up.
    /// Both the string index and the fret are range-checked so a stray
    /// slider value is reported instead of producing a phantom note.
    pub fn note_at(&self, string_index: usize, fret: u32) -> Result<Note, TransposeError> {
        if fret > self.fret_count {
            return Err(TransposeError::FretOutOfRange {
                instrument: self.name.clone(),
                fret,
                fret_count: self.fret_count,
            });
        }
        let open = self.open_note(string_index)?;
        shift_note(&open, fret as i32)
    }
}
