use thiserror::Error;

/// Invalid-input conditions reported by the transposition core.
///
/// Every variant is an immediately surfaced bad argument. There is no
/// recovery or retry concept anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// The note name is not one of the 12 canonical spellings.
    #[error("unknown note name: {0:?}")]
    UnknownNoteName(String),

    /// The mode label is neither a church mode nor a known alias.
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    /// The string index does not exist on the instrument.
    #[error("string {index} out of range for {instrument} ({strings} strings)")]
    StringOutOfRange {
        instrument: String,
        index: usize,
        strings: usize,
    },

    /// The fret number is past the instrument's last fret.
    #[error("fret {fret} out of range for {instrument} (0..={fret_count})")]
    FretOutOfRange {
        instrument: String,
        fret: u32,
        fret_count: u32,
    },
}
