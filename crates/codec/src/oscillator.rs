//! The bounded oscillator state machine.
//!
//! A position confined to the closed band `[LOW, HIGH]` and a travel
//! direction. One step per input symbol: the choice amount is applied along
//! the current direction, and a candidate that would leave the band is
//! reflected back off the crossed boundary with a direction flip ("bounce").
//! The inverse step enumerates the predecessors consistent with an observed
//! post-step state by re-applying the forward transition to each hypothesis.

use crate::choice::Choice;
use crate::error::CodecError;

/// Lowest legal position (inclusive).
pub const LOW: u32 = 10_000;
/// Highest legal position (inclusive).
pub const HIGH: u32 = 99_999;

/// Travel direction of the oscillator. Flips exactly on bounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Signed multiplier applied to step amounts.
    #[inline(always)]
    pub const fn signum(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// One completed forward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// Position before the step.
    pub prev: u32,
    /// Position after the step.
    pub next: u32,
    /// Whether the step reflected off a boundary.
    pub bounced: bool,
}

/// A predecessor state consistent with an observed post-step state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBack {
    /// Position before the step.
    pub prev: u32,
    /// Direction before the step; differs from the post-step direction
    /// exactly when the step bounced.
    pub direction_before: Direction,
    /// Whether the step reflected off a boundary.
    pub bounced: bool,
}

/// The oscillator: current position and direction.
///
/// Carries no history; encode keeps only this state plus the last
/// transition's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillator {
    position: u32,
    direction: Direction,
}

impl Oscillator {
    /// Create an oscillator at `start`, travelling up.
    pub fn new(start: u32) -> Result<Self, CodecError> {
        if !(LOW..=HIGH).contains(&start) {
            return Err(CodecError::MaskOutOfRange {
                field: "start_mask",
                value: start,
            });
        }
        Ok(Self {
            position: start,
            direction: Direction::Up,
        })
    }

    /// Current position. Always within `[LOW, HIGH]`.
    #[inline(always)]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Current travel direction.
    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one step and report the completed transition.
    pub fn step(&mut self, choice: Choice) -> StepRecord {
        let prev = self.position;
        let (next, direction, bounced) = advance(self.position, self.direction, choice);
        self.position = next;
        self.direction = direction;
        StepRecord {
            prev,
            next,
            bounced,
        }
    }
}

/// Core transition arithmetic shared by the forward and inverse paths.
///
/// The amount is at most 255 and the band is 89 999 wide, so a single
/// reflection always brings the candidate back inside.
fn advance(position: u32, direction: Direction, choice: Choice) -> (u32, Direction, bool) {
    let candidate = position as i64 + direction.signum() * choice.amount() as i64;
    if candidate > HIGH as i64 {
        let overshoot = candidate - HIGH as i64;
        ((HIGH as i64 - overshoot) as u32, direction.flip(), true)
    } else if candidate < LOW as i64 {
        let overshoot = LOW as i64 - candidate;
        ((LOW as i64 + overshoot) as u32, direction.flip(), true)
    } else {
        (candidate as u32, direction, false)
    }
}

/// Enumerate the predecessors consistent with arriving at `after` travelling
/// `direction_after`, given the choice that produced the step.
///
/// Three hypotheses are tested: no bounce, bounce off `HIGH`, bounce off
/// `LOW`. A hypothesis survives only if re-applying the forward step from its
/// proposed predecessor reproduces `after` and `direction_after` exactly.
/// Returns zero survivors when the state never arose from a legal step with
/// this choice, and two when the predecessor sits exactly on a boundary (the
/// one case the arithmetic cannot tell apart).
pub fn invert_step(after: u32, direction_after: Direction, choice: Choice) -> Vec<StepBack> {
    let amount = choice.amount() as i64;
    let hypotheses = [
        // No bounce: direction unchanged, walk the amount back.
        (
            after as i64 - direction_after.signum() * amount,
            direction_after,
        ),
        // Bounce off HIGH: after = HIGH - (prev + amount - HIGH).
        (
            2 * HIGH as i64 - after as i64 - amount,
            direction_after.flip(),
        ),
        // Bounce off LOW: after = LOW + (LOW - (prev - amount)).
        (
            2 * LOW as i64 - after as i64 + amount,
            direction_after.flip(),
        ),
    ];

    let mut consistent = Vec::new();
    for (prev, direction_before) in hypotheses {
        if !(LOW as i64..=HIGH as i64).contains(&prev) {
            continue;
        }
        let prev = prev as u32;
        let (next, direction, bounced) = advance(prev, direction_before, choice);
        if next == after && direction == direction_after {
            let back = StepBack {
                prev,
                direction_before,
                bounced,
            };
            if !consistent.contains(&back) {
                consistent.push(back);
            }
        }
    }
    consistent
}
