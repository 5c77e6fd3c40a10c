//! Encode and decode drivers over the oscillator walk.
//!
//! Encode is a single forward scan: one step per byte, retaining only the
//! live oscillator state and the final transition's anchor. Decode re-derives
//! the final step from the anchor, then walks backward one byte at a time.
//! Every backward step must identify a *unique* byte; a coordinate whose walk
//! is not uniquely determined is rejected, never guessed at.

use crate::choice::Choice;
use crate::coordinate::Coordinate;
use crate::error::CodecError;
use crate::oscillator::{invert_step, Direction, Oscillator, StepBack};

/// Default root mask used when no start is supplied.
pub const ROOT_MASK: u32 = 50_000;

/// Encoder/decoder handle, parameterized by the walk's starting mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Odograph {
    start_mask: u32,
}

impl Default for Odograph {
    fn default() -> Self {
        Self {
            start_mask: ROOT_MASK,
        }
    }
}

/// One candidate resolution of a backward step: the byte it implies and the
/// predecessor state it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    byte: u8,
    prev: u32,
    direction_before: Direction,
}

impl Odograph {
    /// Create a codec whose walks start at `start_mask`.
    pub fn new(start_mask: u32) -> Result<Self, CodecError> {
        Oscillator::new(start_mask)?;
        Ok(Self { start_mask })
    }

    /// The walk's starting mask.
    pub fn start_mask(&self) -> u32 {
        self.start_mask
    }

    /// Encode bytes into a coordinate: one oscillator step per byte.
    ///
    /// Memory is O(1) beyond the input itself; the trajectory is never
    /// buffered, only the last transition is retained for the anchor.
    pub fn encode(&self, data: &[u8]) -> Result<Coordinate, CodecError> {
        let mut oscillator = Oscillator::new(self.start_mask)?;
        let mut anchor: Option<(u32, Choice)> = None;
        for &byte in data {
            let choice = Choice::from_byte(byte);
            let record = oscillator.step(choice);
            anchor = Some((record.prev, choice));
        }
        let (prev_mask, end_d) = match anchor {
            Some((prev, choice)) => (prev, choice.d()),
            None => (self.start_mask, 0),
        };
        Ok(Coordinate {
            start_mask: self.start_mask,
            end_mask: oscillator.position(),
            prev_mask,
            end_d,
            length_bytes: data.len() as u64,
        })
    }

    /// Decode a coordinate back into the exact bytes it was encoded from.
    ///
    /// The anchor fixes the final step (both candidate directions are tested
    /// against `prev_mask` and the byte values congruent to `end_d` mod 64).
    /// Each earlier step enumerates all 256 byte hypotheses against every
    /// still-possible direction; candidates that agree on byte and position
    /// but differ only in direction keep both directions alive, since a
    /// zero-displacement step cannot flip the walk. The first step of the
    /// walk is pinned to `start_mask` travelling up. Anything short of a
    /// unique byte per step is an error.
    pub fn decode(coordinate: &Coordinate) -> Result<Vec<u8>, CodecError> {
        coordinate.validate()?;
        let length = coordinate.length_bytes;
        if length == 0 {
            return Ok(Vec::new());
        }

        // Final step, from the anchor.
        let mut candidates = Vec::new();
        for direction_after in [Direction::Up, Direction::Down] {
            for residue in 0u8..4 {
                let choice = Choice::from_byte((residue << 6) | coordinate.end_d);
                for back in invert_step(coordinate.end_mask, direction_after, choice) {
                    if back.prev == coordinate.prev_mask {
                        push_candidate(&mut candidates, choice.to_byte(), back);
                    }
                }
            }
        }
        if length == 1 {
            // The final step is also the first: every walk starts upward.
            candidates.retain(|c| c.direction_before == Direction::Up);
        }
        if candidates.is_empty() {
            return Err(CodecError::AnchorMismatch {
                prev_mask: coordinate.prev_mask,
                end_mask: coordinate.end_mask,
                end_d: coordinate.end_d,
            });
        }
        let (byte, mut position, mut directions) =
            unify(&candidates).ok_or(CodecError::AmbiguousReconstruction {
                step: 1,
                candidates: candidates.len(),
            })?;

        let mut bytes = vec![byte];

        // Remaining steps, newest to oldest. `step` counts from the end of
        // the input; `step == length` reconstructs the walk's first step.
        for step in 2..=length {
            let pinned_start = step == length;
            let mut candidates = Vec::new();
            for &direction_after in &directions {
                for byte in 0u8..=255 {
                    let choice = Choice::from_byte(byte);
                    for back in invert_step(position, direction_after, choice) {
                        if pinned_start
                            && (back.prev != coordinate.start_mask
                                || back.direction_before != Direction::Up)
                        {
                            continue;
                        }
                        push_candidate(&mut candidates, byte, back);
                    }
                }
            }
            if candidates.is_empty() {
                return Err(CodecError::DeadEnd { step });
            }
            let (byte, prev, dirs) =
                unify(&candidates).ok_or(CodecError::AmbiguousReconstruction {
                    step,
                    candidates: candidates.len(),
                })?;
            bytes.push(byte);
            position = prev;
            directions = dirs;
        }

        bytes.reverse();
        Ok(bytes)
    }
}

fn push_candidate(candidates: &mut Vec<Candidate>, byte: u8, back: StepBack) {
    let candidate = Candidate {
        byte,
        prev: back.prev,
        direction_before: back.direction_before,
    };
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

/// Collapse a candidate set to a single `(byte, position)` resolution, or
/// `None` if the set is genuinely ambiguous. Candidates differing only in
/// direction collapse together and keep both directions alive.
fn unify(candidates: &[Candidate]) -> Option<(u8, u32, Vec<Direction>)> {
    let first = candidates.first()?;
    let mut directions = vec![first.direction_before];
    for candidate in &candidates[1..] {
        if candidate.byte != first.byte || candidate.prev != first.prev {
            return None;
        }
        if !directions.contains(&candidate.direction_before) {
            directions.push(candidate.direction_before);
        }
    }
    Some((first.byte, first.prev, directions))
}
