//! # Note Table Module
//!
//! This module owns the fixed chromatic tables every other computation in the
//! crate is defined against: the canonical 12-name alphabet, the name to
//! pitch-class lookup, and the reference MIDI numbering for the middle octave.
//! It also provides octave and frequency calculations for absolute MIDI
//! numbers.
//!
//! ## Features
//! - Canonical flat-preferring note names (`Db` rather than `C#`)
//! - Validated name to pitch-class index lookups
//! - Reference MIDI values for the middle octave (C3 = 60 to B3 = 71)
//! - Octave computation for any MIDI number, negative values included
//! - Equal temperament frequency calculations (A above middle C = 440 Hz)

use crate::error::TransposeError;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Number of pitch classes in the chromatic alphabet.
pub const NOTES_PER_OCTAVE: i32 = 12;

/// The canonical chromatic alphabet in pitch-class order.
///
/// One spelling per pitch class, flats preferred. All modular arithmetic in
/// the crate (shifting, wraparound) is defined relative to this ordering.
pub const NOTE_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Reference MIDI values for the middle octave, C3 = 60 to B3 = 71.
///
/// This single octave is the zero-shift baseline: absolute MIDI numbers and
/// octaves are derived from it by adding semitone offsets.
pub const REFERENCE_MIDI: [i32; NOTES_PER_OCTAVE as usize] =
    [60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71];

/// MIDI number of the reference C, the bottom of octave 3.
const REFERENCE_C: i32 = 60;

/// Octave number containing the reference MIDI values.
const REFERENCE_OCTAVE: i32 = 3;

/// A440 tuning reference: MIDI 69 is the A above middle C.
const A4_MIDI: i32 = 69;
const A4_FREQ_HZ: f64 = 440.0;

/// Static map for quick note name to pitch-class index lookups.
///
/// Built once from [`NOTE_NAMES`]; lookups through
/// [`pitch_class_index`] are validated, so a bad key is reported
/// instead of poisoning downstream arithmetic.
static NOTE_INDEX: Lazy<BTreeMap<&'static str, usize>> = Lazy::new(|| {
    NOTE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect()
});

/// Looks up the pitch-class index of a canonical note name.
///
/// # Arguments
/// * `name` - One of the 12 canonical spellings (e.g. "E", "Bb")
///
/// # Returns
/// * `Ok(index)` - Position in [0, 11] within the canonical ordering
/// * `Err(UnknownNoteName)` - The name is not in the alphabet
pub fn pitch_class_index(name: &str) -> Result<usize, TransposeError> {
    NOTE_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| TransposeError::UnknownNoteName(name.to_string()))
}

/// Returns the canonical name at a pitch-class position.
///
/// The index is wrapped into [0, 11] with euclidean remainder, so any
/// signed offset arithmetic can be passed straight in. Negative sums
/// wrap to the top of the alphabet rather than panicking.
pub fn pitch_class_name(index: i32) -> &'static str {
    NOTE_NAMES[index.rem_euclid(NOTES_PER_OCTAVE) as usize]
}

/// Computes the octave number containing a MIDI note.
///
/// Follows the convention in which C3 = 60: MIDI 60 to 71 is octave 3,
/// 48 to 59 is octave 2, and so on. Floor division keeps the formula
/// correct for negative MIDI numbers and for values far outside the
/// playable range.
///
/// # Arguments
/// * `midi` - Absolute MIDI note number, unbounded
///
/// # Returns
/// * Octave number containing `midi`
pub fn octave_of(midi: i32) -> i32 {
    (midi - REFERENCE_C).div_euclid(NOTES_PER_OCTAVE) + REFERENCE_OCTAVE
}

/// Computes the equal temperament frequency of a MIDI note.
///
/// The formula for frequency in equal temperament is f = f0 * 2^(n/12),
/// with f0 the A440 reference and n the signed semitone distance from it.
/// The C3 = 60 octave naming does not change the MIDI numbering itself,
/// so MIDI 69 still plays at 440 Hz.
pub fn frequency_of(midi: i32) -> f64 {
    A4_FREQ_HZ * 2.0_f64.powf((midi - A4_MIDI) as f64 / NOTES_PER_OCTAVE as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_maps_back_to_its_position() {
        for (i, name) in NOTE_NAMES.iter().enumerate() {
            assert_eq!(pitch_class_index(name).unwrap(), i);
        }
    }

    #[test]
    fn reference_midi_tracks_pitch_class() {
        for (i, midi) in REFERENCE_MIDI.iter().enumerate() {
            assert_eq!(*midi, 60 + i as i32);
            assert_eq!(midi.rem_euclid(12) as usize, i);
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        assert_eq!(
            pitch_class_index("H"),
            Err(TransposeError::UnknownNoteName("H".to_string()))
        );
        // Sharps are not canonical spellings in this alphabet.
        assert!(pitch_class_index("C#").is_err());
        assert!(pitch_class_index("db").is_err());
    }

    #[test]
    fn pitch_class_name_wraps_both_directions() {
        assert_eq!(pitch_class_name(0), "C");
        assert_eq!(pitch_class_name(11), "B");
        assert_eq!(pitch_class_name(12), "C");
        assert_eq!(pitch_class_name(19), "G");
        assert_eq!(pitch_class_name(-1), "B");
        assert_eq!(pitch_class_name(-13), "B");
    }

    #[test]
    fn octave_boundaries() {
        assert_eq!(octave_of(59), 2);
        assert_eq!(octave_of(60), 3);
        assert_eq!(octave_of(71), 3);
        assert_eq!(octave_of(72), 4);
    }

    #[test]
    fn octave_generalizes_past_the_enumerated_range() {
        assert_eq!(octave_of(0), -2);
        assert_eq!(octave_of(-1), -3);
        assert_eq!(octave_of(-12), -3);
        assert_eq!(octave_of(-13), -4);
        assert_eq!(octave_of(120), 8);
    }

    #[test]
    fn a440_reference() {
        assert!((frequency_of(69) - 440.0).abs() < 1e-9);
        assert!((frequency_of(57) - 220.0).abs() < 1e-9);
        assert!((frequency_of(60) - 261.626).abs() < 0.01);
    }
}
