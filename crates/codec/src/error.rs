use thiserror::Error;

/// Error type for codec operations.
///
/// Every failure is reported through this enum; the codec never returns
/// partial output and never retries (the walk is deterministic, so a retry
/// with the same inputs cannot change the outcome).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A mask lies outside the legal band `10000..=99999`.
    #[error("{field} {value} is outside the legal band 10000..=99999")]
    MaskOutOfRange { field: &'static str, value: u32 },

    /// A choice symbol is malformed (choice must be 0..=63, residue 0..=3).
    #[error("invalid choice symbol: d={d}, residue={residue} (choice 0..=63, residue 0..=3)")]
    InvalidChoice { d: u8, residue: u8 },

    /// `length_bytes` contradicts the rest of the coordinate.
    #[error("coordinate length {length_bytes} is inconsistent with its masks")]
    LengthMismatch { length_bytes: u64 },

    /// The recorded anchor cannot reproduce the final step.
    #[error(
        "anchor mismatch: prev mask {prev_mask} cannot reach end mask {end_mask} \
         with final choice {end_d}"
    )]
    AnchorMismatch {
        prev_mask: u32,
        end_mask: u32,
        end_d: u8,
    },

    /// A backward step admits no consistent predecessor: the coordinate is
    /// corrupted or its length does not match the walk.
    #[error("backward walk dead end at step {step} from the end")]
    DeadEnd { step: u64 },

    /// A backward step admits more than one consistent byte. Reconstruction
    /// stops here rather than guess.
    #[error("ambiguous reconstruction at step {step} from the end ({candidates} candidates)")]
    AmbiguousReconstruction { step: u64, candidates: usize },
}
