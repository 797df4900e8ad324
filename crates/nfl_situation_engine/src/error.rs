use crate::patterns::PatternKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SituationError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
	#[error("Invalid team abbreviation: {0}")]
	InvalidAbbreviation(String),

	#[error("Roster must contain at least two distinct teams")]
	TooFewTeams,

	#[error("Team {team} is not part of this matchup roster")]
	UnknownTeam { team: String },

	#[error("Failed to compile pattern grammar for roster: {0}")]
	Grammar(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
	#[error("Summary does not contain {kind} pattern: {summary}")]
	NoMatch { kind: PatternKind, summary: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PenaltyError {
	#[error("Penalty present but enforcement grammar did not match: {summary}")]
	Unresolved { summary: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayTypeError {
	#[error("Unable to determine play type from: {input}")]
	UnknownPlayType { input: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
	#[error("Play-by-play document contains no drives")]
	EmptyDocument,

	#[error("Latest drive has no play actions")]
	NoDriveActions,

	#[error("Drive team {team} matches neither home nor away id")]
	UnknownDriveTeam { team: String },

	#[error("Latest play is missing required field: {field}")]
	MissingField { field: &'static str },

	#[error("Invalid down number: {value}")]
	InvalidDown { value: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SituationError {
	#[error("Extraction error: {0}")]
	Extract(#[from] ExtractError),

	#[error("Penalty error: {0}")]
	Penalty(#[from] PenaltyError),

	#[error("Play type error: {0}")]
	PlayType(#[from] PlayTypeError),

	#[error("Roster error: {0}")]
	Roster(#[from] RosterError),

	#[error("Feed error: {0}")]
	Feed(#[from] FeedError),

	#[error("Prior situation is a dead-ball state; the feed must advance it to a live down first")]
	DeadBallPrior,
}

impl ExtractError {
	pub fn no_match(kind: PatternKind, summary: &str) -> Self {
		ExtractError::NoMatch {
			kind,
			summary: summary.to_string(),
		}
	}
}

impl PenaltyError {
	pub fn unresolved(summary: &str) -> Self {
		PenaltyError::Unresolved {
			summary: summary.to_string(),
		}
	}
}

impl PlayTypeError {
	pub fn unknown_play_type(input: &str) -> Self {
		PlayTypeError::UnknownPlayType {
			input: input.to_string(),
		}
	}
}
