use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated team abbreviation, e.g. "MIN" or "SEA".
///
/// The set of valid codes changes per matchup, so this is a checked
/// newtype rather than a compiled-in enum; [`TeamRoster`] holds the
/// closed set for one game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamCode(String);

impl TeamCode {
	/// Abbreviations are 2-3 uppercase ASCII letters.
	pub fn new(code: impl Into<String>) -> Result<Self, RosterError> {
		let code = code.into();
		let valid = (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase());
		if valid {
			Ok(TeamCode(code))
		} else {
			Err(RosterError::InvalidAbbreviation(code))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for TeamCode {
	type Err = RosterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TeamCode::new(s)
	}
}

impl TryFrom<String> for TeamCode {
	type Error = RosterError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		TeamCode::new(value)
	}
}

impl From<TeamCode> for String {
	fn from(code: TeamCode) -> Self {
		code.0
	}
}

impl fmt::Display for TeamCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// The closed set of team abbreviations for one matchup.
///
/// Supplied by the caller as configuration (deserializable from a plain
/// list of strings) and used to anchor the phrase grammar in
/// [`crate::patterns::PatternSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TeamRoster {
	teams: Vec<TeamCode>,
}

impl TeamRoster {
	/// Build a roster from validated codes. Duplicates are collapsed;
	/// a matchup needs at least two distinct teams.
	pub fn new(teams: impl IntoIterator<Item = TeamCode>) -> Result<Self, RosterError> {
		let mut deduped: Vec<TeamCode> = Vec::new();
		for team in teams {
			if !deduped.contains(&team) {
				deduped.push(team);
			}
		}
		if deduped.len() < 2 {
			return Err(RosterError::TooFewTeams);
		}
		Ok(TeamRoster { teams: deduped })
	}

	/// Convenience constructor from raw abbreviation strings.
	pub fn parse<S: AsRef<str>>(abbreviations: &[S]) -> Result<Self, RosterError> {
		let teams = abbreviations
			.iter()
			.map(|abbr| TeamCode::new(abbr.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		TeamRoster::new(teams)
	}

	pub fn contains(&self, code: &TeamCode) -> bool {
		self.teams.contains(code)
	}

	/// Look up the roster's own copy of a matched abbreviation.
	pub fn get(&self, abbreviation: &str) -> Option<&TeamCode> {
		self.teams.iter().find(|team| team.as_str() == abbreviation)
	}

	/// Regex alternation over the roster, e.g. "MIN|SEA".
	pub fn alternation(&self) -> String {
		self
			.teams
			.iter()
			.map(TeamCode::as_str)
			.collect::<Vec<_>>()
			.join("|")
	}

	pub fn iter(&self) -> impl Iterator<Item = &TeamCode> {
		self.teams.iter()
	}
}

impl TryFrom<Vec<String>> for TeamRoster {
	type Error = RosterError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		TeamRoster::parse(&value)
	}
}

impl From<TeamRoster> for Vec<String> {
	fn from(roster: TeamRoster) -> Self {
		roster.teams.into_iter().map(String::from).collect()
	}
}
