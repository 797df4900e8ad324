use crate::error::{FeedError, SituationError};
use crate::roster::TeamCode;
use crate::schema::{BallState, Down, GameSituation, PlayEvent, PlayType, Score};
use serde::Deserialize;
use tracing::debug;

/// Every drive's action list ends with bookkeeping rows (drive summary,
/// result, clock) that are not plays.
const DRIVE_TRAILER_ROWS: usize = 3;

/// An already-fetched play-by-play document. Fetching, deduplication and
/// re-polling belong to the caller; lookups here never mutate the
/// document, so the same instance can be consulted again after a
/// re-poll.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameFeed {
	pub quarters: Vec<QuarterPbp>,
	pub home_team: TeamInfo,
	pub away_team: TeamInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamInfo {
	pub id: String,
	pub points: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuarterPbp {
	pub number: u8,
	pub pbp: Vec<DriveEntry>,
}

/// One pbp entry. Drives carry a team id and actions; coin tosses and
/// other non-drive rows carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriveEntry {
	#[serde(default)]
	pub team: Option<String>,
	#[serde(default)]
	pub actions: Vec<RawPlay>,
}

/// A play as it appears in the feed document, before the engine's typed
/// model is assembled around it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPlay {
	pub play_type: String,
	pub summary: String,
	#[serde(default)]
	pub clock: String,
	#[serde(default)]
	pub down: Option<u8>,
	#[serde(default)]
	pub yfd: Option<u8>,
	#[serde(default)]
	pub yard_line: Option<u8>,
	#[serde(default)]
	pub side: Option<String>,
}

/// The most recent play plus the snapshot that travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestPlay {
	pub play: RawPlay,
	pub quarter: u8,
	pub score: Score,
	pub drive_team: Option<String>,
}

/// Read the most recent play out of the document: last quarter, last
/// drive, last action before the drive's trailer rows. Indexed reads
/// only.
pub fn latest_play(feed: &GameFeed) -> Result<LatestPlay, FeedError> {
	let quarter = feed.quarters.last().ok_or(FeedError::EmptyDocument)?;
	let drive = quarter.pbp.last().ok_or(FeedError::EmptyDocument)?;

	let plays = &drive.actions[..drive.actions.len().saturating_sub(DRIVE_TRAILER_ROWS)];
	let play = plays.last().ok_or(FeedError::NoDriveActions)?;
	debug!("latest play in quarter {}: {}", quarter.number, play.summary);

	let score = Score::from([
		(feed.home_team.id.clone(), feed.home_team.points),
		(feed.away_team.id.clone(), feed.away_team.points),
	]);

	Ok(LatestPlay {
		play: play.clone(),
		quarter: quarter.number,
		score,
		drive_team: drive.team.clone(),
	})
}

impl LatestPlay {
	/// Assemble an engine input from this snapshot. The drive's team id,
	/// matched against the home and away ids, decides which side is on
	/// offense.
	pub fn into_play_event(self, home: &TeamCode, away: &TeamCode) -> Result<PlayEvent, SituationError> {
		let play_type: PlayType = self.play.play_type.parse()?;
		let side: TeamCode = self
			.play
			.side
			.ok_or(FeedError::MissingField { field: "side" })?
			.parse()?;

		let drive_team = self.drive_team.ok_or(FeedError::MissingField { field: "team" })?;
		let (offense, defense) = if drive_team == home.as_str() {
			(home.clone(), away.clone())
		} else if drive_team == away.as_str() {
			(away.clone(), home.clone())
		} else {
			return Err(FeedError::UnknownDriveTeam { team: drive_team }.into());
		};

		let down_number = self.play.down.ok_or(FeedError::MissingField { field: "down" })?;
		let down = Down::from_number(down_number).ok_or(FeedError::InvalidDown { value: down_number })?;
		let distance = self.play.yfd.ok_or(FeedError::MissingField { field: "yfd" })?;
		let spot = self.play.yard_line.ok_or(FeedError::MissingField { field: "yard_line" })?;

		Ok(PlayEvent::new(
			play_type,
			self.play.summary,
			GameSituation::new(BallState::live(down, distance, spot), offense, defense),
			side,
			self.play.clock,
			self.score,
			self.quarter,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn feed_json() -> serde_json::Value {
		serde_json::json!({
			"home_team": { "id": "SEA", "points": 10 },
			"away_team": { "id": "MIN", "points": 7 },
			"quarters": [
				{ "number": 1, "pbp": [ { } ] },
				{
					"number": 2,
					"pbp": [
						{
							"team": "MIN",
							"actions": [
								{
									"play_type": "rush",
									"summary": "J.McKinnon right end to MIN 33 for 2 yards (B.Wagner).",
									"clock": "11:04",
									"down": 1, "yfd": 10, "yard_line": 31, "side": "MIN"
								},
								{
									"play_type": "pass",
									"summary": "S.Bradford pass short middle to K.Rudolph to MIN 41 for 8 yards (K.Wright).",
									"clock": "10:31",
									"down": 2, "yfd": 8, "yard_line": 33, "side": "MIN"
								},
								{ "play_type": "drive_summary", "summary": "2 plays, 10 yards" },
								{ "play_type": "drive_result", "summary": "Downs" },
								{ "play_type": "drive_clock", "summary": "0:33" }
							]
						}
					]
				}
			]
		})
	}

	#[test]
	fn test_latest_play_skips_drive_trailer_rows() {
		let feed: GameFeed = serde_json::from_value(feed_json()).unwrap();
		let latest = latest_play(&feed).unwrap();

		assert_eq!(latest.play.play_type, "pass");
		assert_eq!(latest.quarter, 2);
		assert_eq!(latest.drive_team.as_deref(), Some("MIN"));
	}

	#[test]
	fn test_latest_play_does_not_consume_the_document() {
		let feed: GameFeed = serde_json::from_value(feed_json()).unwrap();
		let before = feed.clone();

		let first = latest_play(&feed).unwrap();
		let second = latest_play(&feed).unwrap();

		assert_eq!(feed, before);
		assert_eq!(first, second);
	}

	#[test]
	fn test_score_snapshot_is_assembled_from_both_teams() {
		let feed: GameFeed = serde_json::from_value(feed_json()).unwrap();
		let latest = latest_play(&feed).unwrap();

		assert_eq!(latest.score, Score::from([("SEA".to_string(), 10), ("MIN".to_string(), 7)]));
	}

	#[test]
	fn test_non_drive_entry_has_no_actions() {
		let feed: GameFeed = serde_json::from_value(serde_json::json!({
			"home_team": { "id": "SEA", "points": 0 },
			"away_team": { "id": "MIN", "points": 0 },
			"quarters": [
				{ "number": 1, "pbp": [ { "summary_only": "Coin toss won by SEA." } ] }
			]
		}))
		.unwrap();

		assert_eq!(latest_play(&feed), Err(FeedError::NoDriveActions));
	}

	#[test]
	fn test_play_event_assembly_resolves_possession() {
		let feed: GameFeed = serde_json::from_value(feed_json()).unwrap();
		let home = TeamCode::new("SEA").unwrap();
		let away = TeamCode::new("MIN").unwrap();

		let event = latest_play(&feed).unwrap().into_play_event(&home, &away).unwrap();

		assert_eq!(event.play_type, PlayType::Pass);
		assert_eq!(event.situation.offense, away);
		assert_eq!(event.situation.defense, home);
		assert_eq!(event.situation.ball, BallState::live(Down::Second, 8, 33));
		assert_eq!(event.quarter, 2);
	}

	#[test]
	fn test_unknown_drive_team_is_rejected() {
		let mut latest = latest_play(&serde_json::from_value::<GameFeed>(feed_json()).unwrap()).unwrap();
		latest.drive_team = Some("GB".to_string());

		let home = TeamCode::new("SEA").unwrap();
		let away = TeamCode::new("MIN").unwrap();
		let result = latest.into_play_event(&home, &away);

		assert_eq!(
			result,
			Err(SituationError::Feed(FeedError::UnknownDriveTeam { team: "GB".to_string() }))
		);
	}
}
