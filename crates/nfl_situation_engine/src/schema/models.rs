use crate::roster::TeamCode;
use crate::schema::{GameSituation, PlayType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scoreboard snapshot, feed team id -> points.
pub type Score = BTreeMap<String, u16>;

/// One play as delivered by the upstream feed adapter, with the prior
/// situation already attached and possession disambiguated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
	pub play_type: PlayType,
	/// Free-text description of the play, the input to the phrase grammar.
	pub summary: String,
	/// The situation before this play ran; must be a live down.
	pub situation: GameSituation,
	/// Which team's own half the feed's yard numbers are measured from.
	pub side: TeamCode,
	pub clock: String,
	pub score: Score,
	pub quarter: u8,
}

impl PlayEvent {
	pub fn new(
		play_type: PlayType,
		summary: impl Into<String>,
		situation: GameSituation,
		side: TeamCode,
		clock: impl Into<String>,
		score: Score,
		quarter: u8,
	) -> Self {
		PlayEvent {
			play_type,
			summary: summary.into(),
			situation,
			side,
			clock: clock.into(),
			score,
			quarter,
		}
	}
}

/// The engine's verdict for one play: the next situation plus the echoed
/// snapshot and the events the transition crossed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
	pub situation: GameSituation,
	pub clock: String,
	pub score: Score,
	pub quarter: u8,
	pub side: TeamCode,
	pub touchdown: bool,
	pub turnover: bool,
}

/// Fields pulled out of a penalty-bearing summary by the phrase grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyFacts {
	/// The penalized team.
	pub team: TeamCode,
	/// Yards assessed.
	pub loss: u8,
	/// Which team's half the enforcement spot is measured from.
	pub side: TeamCode,
	/// Enforcement spot within that half.
	pub enforced_at: u8,
}
