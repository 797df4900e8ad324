use crate::error::PlayTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of play categories the engine has a handler for.
///
/// The feed labels each play with a short token; anything outside this
/// set (timeouts, coin toss, two-minute warning) is an error the caller
/// must surface rather than skip, since a silently dropped play corrupts
/// the down and distance bookkeeping that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayType {
	Rush,
	Pass,
	Punt,
	Kickoff,
	FieldGoal,
	ExtraPoint,
}

impl PlayType {
	pub fn as_str(self) -> &'static str {
		match self {
			PlayType::Rush => "rush",
			PlayType::Pass => "pass",
			PlayType::Punt => "punt",
			PlayType::Kickoff => "kickoff",
			PlayType::FieldGoal => "fieldgoal",
			PlayType::ExtraPoint => "extrapoint",
		}
	}
}

impl fmt::Display for PlayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PlayType {
	type Err = PlayTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"rush" | "run" => Ok(PlayType::Rush),
			"pass" => Ok(PlayType::Pass),
			"punt" => Ok(PlayType::Punt),
			"kick" | "kickoff" => Ok(PlayType::Kickoff),
			"fieldgoal" | "field goal" | "field-goal" => Ok(PlayType::FieldGoal),
			"extrapoint" | "extra point" | "extra-point" | "pat" => Ok(PlayType::ExtraPoint),
			_ => Err(PlayTypeError::unknown_play_type(s)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_play_type_from_feed_token() {
		let test_cases = vec![
			("rush", PlayType::Rush),
			("run", PlayType::Rush),
			("pass", PlayType::Pass),
			("punt", PlayType::Punt),
			("kick", PlayType::Kickoff),
			("kickoff", PlayType::Kickoff),
			("fieldgoal", PlayType::FieldGoal),
			("field goal", PlayType::FieldGoal),
			("extrapoint", PlayType::ExtraPoint),
			("extra point", PlayType::ExtraPoint),
			("PAT", PlayType::ExtraPoint),
			(" Pass ", PlayType::Pass),
		];

		for (input, expected) in test_cases {
			assert_eq!(PlayType::from_str(input), Ok(expected), "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_play_type_errors() {
		let error_cases = vec!["timeout", "cointoss", "two-minute warning", ""];

		for input in error_cases {
			assert_eq!(
				PlayType::from_str(input),
				Err(PlayTypeError::unknown_play_type(input)),
				"Expected error for input: {}",
				input
			);
		}
	}
}
