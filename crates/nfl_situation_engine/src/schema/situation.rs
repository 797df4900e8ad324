use crate::roster::TeamCode;
use serde::{Deserialize, Serialize};

/// Yards awarded with a fresh set of downs.
pub const FIRST_DOWN_DISTANCE: u8 = 10;

/// Ball spots are measured 0-50 from a reference goal line and reflect
/// at midfield.
pub const MIDFIELD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Down {
	First,
	Second,
	Third,
	Fourth,
}

impl Down {
	/// The following down, or `None` after fourth -- the caller treats
	/// that as a turnover on downs.
	pub fn next(self) -> Option<Down> {
		match self {
			Down::First => Some(Down::Second),
			Down::Second => Some(Down::Third),
			Down::Third => Some(Down::Fourth),
			Down::Fourth => None,
		}
	}

	pub fn number(self) -> u8 {
		match self {
			Down::First => 1,
			Down::Second => 2,
			Down::Third => 3,
			Down::Fourth => 4,
		}
	}

	pub fn from_number(value: u8) -> Option<Down> {
		match value {
			1 => Some(Down::First),
			2 => Some(Down::Second),
			3 => Some(Down::Third),
			4 => Some(Down::Fourth),
			_ => None,
		}
	}
}

/// The dead-ball transition states a scoring or kicking play leaves
/// behind. The next live snap resolves them outside this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadBallKind {
	/// A made field goal or extra point; the ensuing play is a kickoff
	/// from the kicking team's restart spot.
	Kickoff { spot: u8 },
	/// A touchdown; the ensuing play is the try.
	ExtraPoint,
}

/// Down, distance and spot as a tagged state instead of sentinel values
/// mixed into integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
	Live { down: Down, distance: u8, spot: u8 },
	DeadBall(DeadBallKind),
}

impl BallState {
	pub fn live(down: Down, distance: u8, spot: u8) -> Self {
		BallState::Live { down, distance, spot }
	}

	/// A fresh set of downs at the given spot.
	pub fn first_and_ten(spot: u8) -> Self {
		BallState::Live {
			down: Down::First,
			distance: FIRST_DOWN_DISTANCE,
			spot,
		}
	}

	pub fn is_live(&self) -> bool {
		matches!(self, BallState::Live { .. })
	}

	pub fn as_live(&self) -> Option<(Down, u8, u8)> {
		match *self {
			BallState::Live { down, distance, spot } => Some((down, distance, spot)),
			BallState::DeadBall(_) => None,
		}
	}
}

/// The state carried between plays: ball state plus which team has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSituation {
	pub ball: BallState,
	pub offense: TeamCode,
	pub defense: TeamCode,
}

impl GameSituation {
	pub fn new(ball: BallState, offense: TeamCode, defense: TeamCode) -> Self {
		GameSituation { ball, offense, defense }
	}
}

/// Whether a play left the ball with the prior offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PossessionOutcome {
	Retained,
	Flipped,
}

/// A handler's verdict before the engine merges in the pass-through
/// snapshot fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSituation {
	pub ball: BallState,
	pub possession: PossessionOutcome,
}

impl PartialSituation {
	pub fn retained(ball: BallState) -> Self {
		PartialSituation {
			ball,
			possession: PossessionOutcome::Retained,
		}
	}

	pub fn flipped(ball: BallState) -> Self {
		PartialSituation {
			ball,
			possession: PossessionOutcome::Flipped,
		}
	}
}
