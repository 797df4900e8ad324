use crate::error::{ExtractError, RosterError};
use crate::roster::{TeamCode, TeamRoster};
use crate::schema::PenaltyFacts;
use regex::Regex;
use std::fmt;

// Phrase grammar over feed summaries. The team alternation is spliced in
// from the matchup roster, so the set is compiled per game rather than
// baked into the crate.
const YARD_GAIN_STR: &str = r"for\s\-?\d{1,3}\syard(s)?";
const SIGNED_NUMBER_STR: &str = r"-?\d+";

/// The phrase kinds the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
	/// "for N yard(s)", N possibly negative.
	YardGain,
	/// "(to|at) [the] <TEAM> N".
	NewSpot,
	/// "Penalty on <TEAM> N ... M yards, enforced at <TEAM2> K".
	Penalty,
}

impl fmt::Display for PatternKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			PatternKind::YardGain => "yard-gain",
			PatternKind::NewSpot => "new-spot",
			PatternKind::Penalty => "penalty",
		};
		f.write_str(name)
	}
}

/// The compiled grammar for one matchup.
#[derive(Debug, Clone)]
pub struct PatternSet {
	roster: TeamRoster,
	yard_gain: Regex,
	new_spot: Regex,
	penalty: Regex,
	number: Regex,
}

impl PatternSet {
	pub fn new(roster: &TeamRoster) -> Result<Self, RosterError> {
		let side = format!(r"(?P<side>{})", roster.alternation());
		let new_spot = format!(r"(to|at)(\sthe)?\s{side}\s\d{{1,2}}");
		let culprit = format!(r"Penalty\son\s(?P<team>{})\s\d{{1,2}}", roster.alternation());
		let loss = format!(r"\s(?P<loss>\d{{1,2}})\syards,\senforced\sat\s{side}\s(?P<yard_line>\d{{1,2}})");

		Ok(PatternSet {
			roster: roster.clone(),
			yard_gain: compile(YARD_GAIN_STR)?,
			new_spot: compile(&new_spot)?,
			penalty: compile(&format!("{culprit}.*{loss}"))?,
			number: compile(SIGNED_NUMBER_STR)?,
		})
	}

	pub fn roster(&self) -> &TeamRoster {
		&self.roster
	}

	/// Match the requested phrase and return the first signed decimal run
	/// inside the matched slice, base-10.
	pub fn extract_number(&self, summary: &str, kind: PatternKind) -> Result<i16, ExtractError> {
		let matched = self
			.pattern(kind)
			.find(summary)
			.ok_or_else(|| ExtractError::no_match(kind, summary))?;
		self
			.first_number(matched.as_str())
			.ok_or_else(|| ExtractError::no_match(kind, summary))
	}

	/// The new-spot phrase: the coordinate-frame team and the yard number
	/// measured from that team's half.
	pub fn new_spot(&self, summary: &str) -> Result<(TeamCode, u8), ExtractError> {
		let caps = self
			.new_spot
			.captures(summary)
			.ok_or_else(|| ExtractError::no_match(PatternKind::NewSpot, summary))?;
		let side = self.capture_team(&caps, "side", PatternKind::NewSpot, summary)?;
		let spot = self
			.first_number(&caps[0])
			.ok_or_else(|| ExtractError::no_match(PatternKind::NewSpot, summary))?;
		Ok((side, spot as u8))
	}

	/// The compound penalty phrase: penalized team, yards assessed,
	/// enforcement side and spot.
	pub fn penalty_facts(&self, summary: &str) -> Result<PenaltyFacts, ExtractError> {
		let caps = self
			.penalty
			.captures(summary)
			.ok_or_else(|| ExtractError::no_match(PatternKind::Penalty, summary))?;
		let team = self.capture_team(&caps, "team", PatternKind::Penalty, summary)?;
		let side = self.capture_team(&caps, "side", PatternKind::Penalty, summary)?;
		let loss = parse_u8(&caps, "loss").ok_or_else(|| ExtractError::no_match(PatternKind::Penalty, summary))?;
		let enforced_at = parse_u8(&caps, "yard_line").ok_or_else(|| ExtractError::no_match(PatternKind::Penalty, summary))?;

		Ok(PenaltyFacts {
			team,
			loss,
			side,
			enforced_at,
		})
	}

	fn pattern(&self, kind: PatternKind) -> &Regex {
		match kind {
			PatternKind::YardGain => &self.yard_gain,
			PatternKind::NewSpot => &self.new_spot,
			PatternKind::Penalty => &self.penalty,
		}
	}

	fn first_number(&self, text: &str) -> Option<i16> {
		self.number.find(text).and_then(|m| m.as_str().parse().ok())
	}

	// The alternation only matches roster tokens, so the lookup holds by
	// construction; a miss is reported as a non-match rather than a panic.
	fn capture_team(&self, caps: &regex::Captures<'_>, group: &str, kind: PatternKind, summary: &str) -> Result<TeamCode, ExtractError> {
		caps
			.name(group)
			.and_then(|m| self.roster.get(m.as_str()))
			.cloned()
			.ok_or_else(|| ExtractError::no_match(kind, summary))
	}
}

fn compile(source: &str) -> Result<Regex, RosterError> {
	Regex::new(source).map_err(|err| RosterError::Grammar(err.to_string()))
}

fn parse_u8(caps: &regex::Captures<'_>, group: &str) -> Option<u8> {
	caps.name(group).and_then(|m| m.as_str().parse().ok())
}
