use serde::{Deserialize, Serialize};

use crate::choice::MAX_CHOICE;
use crate::error::CodecError;
use crate::oscillator::{HIGH, LOW};

/// The five-integer locator produced by one encode pass.
///
/// A `Coordinate` is created wholly by one encode call, immutable
/// thereafter, and consumed wholly by one decode call. `prev_mask` and
/// `end_d` are the anchor: the one piece of forward-walk history exposed
/// publicly, carried because the final direction is unrecoverable from
/// `end_mask` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Position before the first step.
    pub start_mask: u32,
    /// Position after the last step.
    pub end_mask: u32,
    /// Position immediately before the last step.
    pub prev_mask: u32,
    /// Choice value of the last step (0 when `length_bytes` is 0).
    pub end_d: u8,
    /// Number of input bytes consumed.
    pub length_bytes: u64,
}

impl Coordinate {
    /// Check field ranges and internal consistency without walking.
    ///
    /// Decode calls this before any backward step; the CLI calls it on every
    /// coordinate loaded from disk.
    pub fn validate(&self) -> Result<(), CodecError> {
        for (field, value) in [
            ("start_mask", self.start_mask),
            ("end_mask", self.end_mask),
            ("prev_mask", self.prev_mask),
        ] {
            if !(LOW..=HIGH).contains(&value) {
                return Err(CodecError::MaskOutOfRange { field, value });
            }
        }
        if self.end_d > MAX_CHOICE {
            return Err(CodecError::InvalidChoice {
                d: self.end_d,
                residue: 0,
            });
        }
        if self.length_bytes == 0
            && (self.end_mask != self.start_mask
                || self.prev_mask != self.start_mask
                || self.end_d != 0)
        {
            return Err(CodecError::LengthMismatch { length_bytes: 0 });
        }
        // A one-step walk starts at its own previous position.
        if self.length_bytes == 1 && self.prev_mask != self.start_mask {
            return Err(CodecError::LengthMismatch { length_bytes: 1 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate() -> Coordinate {
        Coordinate {
            start_mask: 50_000,
            end_mask: 50_210,
            prev_mask: 50_010,
            end_d: 8,
            length_bytes: 2,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(coordinate().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_band_masks() {
        let mut c = coordinate();
        c.start_mask = 9_999;
        assert_eq!(
            c.validate(),
            Err(CodecError::MaskOutOfRange {
                field: "start_mask",
                value: 9_999
            })
        );

        let mut c = coordinate();
        c.end_mask = 100_000;
        assert_eq!(
            c.validate(),
            Err(CodecError::MaskOutOfRange {
                field: "end_mask",
                value: 100_000
            })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_choice() {
        let mut c = coordinate();
        c.end_d = 64;
        assert_eq!(
            c.validate(),
            Err(CodecError::InvalidChoice { d: 64, residue: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_inconsistent_zero_length() {
        let mut c = coordinate();
        c.length_bytes = 0;
        assert_eq!(
            c.validate(),
            Err(CodecError::LengthMismatch { length_bytes: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_detached_single_step() {
        let mut c = coordinate();
        c.length_bytes = 1;
        assert_eq!(
            c.validate(),
            Err(CodecError::LengthMismatch { length_bytes: 1 })
        );
    }

    #[test]
    fn test_json_round_trip_preserves_fields() {
        let c = coordinate();
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let json = serde_json::to_string(&coordinate()).unwrap();
        for field in [
            "\"start_mask\":50000",
            "\"end_mask\":50210",
            "\"prev_mask\":50010",
            "\"end_d\":8",
            "\"length_bytes\":2",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn test_deserialize_external_form() {
        let json = r#"{
            "start_mask": 50000,
            "end_mask": 50000,
            "prev_mask": 50000,
            "end_d": 0,
            "length_bytes": 0
        }"#;
        let c: Coordinate = serde_json::from_str(json).unwrap();
        assert!(c.validate().is_ok());
        assert_eq!(c.length_bytes, 0);
    }
}
