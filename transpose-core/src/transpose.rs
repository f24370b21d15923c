//! # Transposition Module
//!
//! The pitch model consumed by the fretboard UI. A [`Note`] bundles a
//! canonical name with its absolute MIDI number and octave; [`get_note`]
//! constructs one from the reference tables and [`shift_note`] moves it by a
//! signed number of semitones.
//!
//! Both operations are pure and stateless, so they can be called from any
//! number of concurrent UI callbacks without coordination. Invalid note
//! names are reported up front rather than left to corrupt the arithmetic.

use crate::error::TransposeError;
use crate::notes::{self, REFERENCE_MIDI};
use serde::{Deserialize, Serialize};

/// A note identity: canonical name, absolute MIDI number, octave.
///
/// Immutable once constructed; shifting produces a new value. Two invariants
/// hold for every `Note` the crate builds: `midi.rem_euclid(12)` equals the
/// pitch-class index of `name`, and `octave` matches `midi` under the
/// C3 = 60 convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Canonical flat-preferring name (e.g. "E", "Bb").
    pub name: String,
    /// Absolute MIDI number. Unbounded: repeated shifts accumulate.
    pub midi: i32,
    /// Octave containing `midi`, with MIDI 60 to 71 as octave 3.
    pub octave: i32,
}

impl Note {
    /// Equal temperament frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        notes::frequency_of(self.midi)
    }
}

/// Builds the reference [`Note`] for a canonical name.
///
/// The MIDI number is the fixed middle-octave reference value for the pitch
/// class (60 to 71), so the octave is always 3 here. Instrument range is the
/// fretboard's concern, not the reference table's.
///
/// # Arguments
/// * `name` - One of the 12 canonical spellings
///
/// # Returns
/// * `Ok(note)` - Reference note for the pitch class
/// * `Err(UnknownNoteName)` - The name is not in the alphabet
pub fn get_note(name: &str) -> Result<Note, TransposeError> {
    let index = notes::pitch_class_index(name)?;
    let midi = REFERENCE_MIDI[index];
    Ok(Note {
        name: notes::pitch_class_name(index as i32).to_string(),
        midi,
        octave: notes::octave_of(midi),
    })
}

/// Returns a note shifted by a signed number of semitones.
///
/// The pitch class is looked up from the note's name and wrapped with
/// euclidean remainder, so negative offsets land on the right side of the
/// alphabet. The MIDI number is accumulated absolutely (never wrapped to an
/// octave) and the octave is recomputed fresh from it, which keeps chained
/// shifts consistent across octave boundaries.
///
/// # Arguments
/// * `note` - Starting note; left unmodified
/// * `semitones` - Signed offset, arbitrarily large in either direction
///
/// # Returns
/// * `Ok(note)` - The shifted note
/// * `Err(UnknownNoteName)` - `note.name` is not a canonical spelling
pub fn shift_note(note: &Note, semitones: i32) -> Result<Note, TransposeError> {
    let index = notes::pitch_class_index(&note.name)? as i32;
    let midi = note.midi + semitones;
    Ok(Note {
        name: notes::pitch_class_name(index + semitones).to_string(),
        midi,
        octave: notes::octave_of(midi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::NOTE_NAMES;

    #[test]
    fn reference_notes_live_in_the_middle_octave() {
        for (i, name) in NOTE_NAMES.iter().enumerate() {
            let note = get_note(name).unwrap();
            assert_eq!(note.name, *name);
            assert!(note.midi >= 60 && note.midi <= 71);
            assert_eq!(note.midi.rem_euclid(12) as usize, i);
            assert_eq!(note.octave, 3);
        }
    }

    #[test]
    fn reference_a_plays_at_440() {
        let a = get_note("A").unwrap();
        assert!((a.frequency() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn get_note_e() {
        let e = get_note("E").unwrap();
        assert_eq!(
            e,
            Note {
                name: "E".to_string(),
                midi: 64,
                octave: 3
            }
        );
    }

    #[test]
    fn unknown_name_yields_no_partial_note() {
        assert_eq!(
            get_note("H"),
            Err(TransposeError::UnknownNoteName("H".to_string()))
        );
    }

    #[test]
    fn shift_up_across_an_octave() {
        let shifted = shift_note(&get_note("E").unwrap(), 15).unwrap();
        assert_eq!(
            shifted,
            Note {
                name: "G".to_string(),
                midi: 79,
                octave: 4
            }
        );
    }

    #[test]
    fn shift_down_across_the_c_boundary() {
        let shifted = shift_note(&get_note("C").unwrap(), -1).unwrap();
        assert_eq!(
            shifted,
            Note {
                name: "B".to_string(),
                midi: 59,
                octave: 2
            }
        );
    }

    #[test]
    fn midi_accumulates_absolutely() {
        let start = get_note("A").unwrap();
        for s in [-40, -12, -1, 0, 1, 7, 12, 15, 100] {
            let shifted = shift_note(&start, s).unwrap();
            assert_eq!(shifted.midi, start.midi + s);
        }
    }

    #[test]
    fn pitch_class_wraps_with_positive_modulo() {
        for (i, name) in NOTE_NAMES.iter().enumerate() {
            let start = get_note(name).unwrap();
            for s in [-25, -13, -1, 5, 14, 27] {
                let shifted = shift_note(&start, s).unwrap();
                let expected = (i as i32 + s).rem_euclid(12);
                assert_eq!(
                    crate::notes::pitch_class_index(&shifted.name).unwrap() as i32,
                    expected
                );
            }
        }
    }

    #[test]
    fn shift_round_trip() {
        let start = get_note("Gb").unwrap();
        for s in [-30, -12, -5, 0, 3, 12, 50] {
            let there = shift_note(&start, s).unwrap();
            let back = shift_note(&there, -s).unwrap();
            assert_eq!(back.name, start.name);
            assert_eq!(back.midi, start.midi);
        }
    }

    #[test]
    fn twelve_semitones_is_one_octave() {
        let start = get_note("D").unwrap();
        let up = shift_note(&start, 12).unwrap();
        assert_eq!(up.name, start.name);
        assert_eq!(up.octave, start.octave + 1);

        let down = shift_note(&start, -12).unwrap();
        assert_eq!(down.name, start.name);
        assert_eq!(down.octave, start.octave - 1);
    }

    #[test]
    fn input_note_is_left_untouched() {
        let start = get_note("Bb").unwrap();
        let copy = start.clone();
        let _ = shift_note(&start, 6).unwrap();
        assert_eq!(start, copy);
    }

    #[test]
    fn shift_rejects_a_hand_built_bad_name() {
        let bogus = Note {
            name: "C#".to_string(),
            midi: 61,
            octave: 3,
        };
        assert_eq!(
            shift_note(&bogus, 1),
            Err(TransposeError::UnknownNoteName("C#".to_string()))
        );
    }

    #[test]
    fn large_negative_shift_stays_consistent() {
        let shifted = shift_note(&get_note("C").unwrap(), -61).unwrap();
        assert_eq!(shifted.midi, -1);
        assert_eq!(shifted.name, "B");
        assert_eq!(shifted.octave, -3);
    }
}
