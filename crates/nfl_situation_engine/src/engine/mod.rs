pub mod handlers;
pub mod penalty;

use crate::error::{Result, SituationError};
use crate::patterns::PatternSet;
use crate::roster::TeamRoster;
use crate::schema::{BallState, DeadBallKind, GameSituation, PartialSituation, PlayEvent, PlayOutcome, PlayType, PossessionOutcome};
use tracing::debug;

const TOUCHDOWN_KEYWORD: &str = "touchdown";

/// The play-outcome inference engine for one matchup.
///
/// Owns the phrase grammar compiled against the matchup roster and maps
/// each incoming play to the situation it leaves behind. Pure over its
/// inputs: the same [`PlayEvent`] always yields the same [`PlayOutcome`],
/// and continuity between plays is the caller's job.
pub struct SituationEngine {
	patterns: PatternSet,
}

impl SituationEngine {
	pub fn new(roster: &TeamRoster) -> Result<Self> {
		Ok(SituationEngine {
			patterns: PatternSet::new(roster)?,
		})
	}

	pub fn patterns(&self) -> &PatternSet {
		&self.patterns
	}

	/// Derive the outcome of a single play.
	///
	/// A scoring summary short-circuits every handler: whatever the play
	/// type, a touchdown leaves the extra-point sentinel behind. Otherwise
	/// the play dispatches to its type's handler and the result is merged
	/// with the echoed scoreboard snapshot.
	pub fn compute_outcome(&self, play: &PlayEvent) -> Result<PlayOutcome> {
		if !play.situation.ball.is_live() {
			return Err(SituationError::DeadBallPrior);
		}

		let mut touchdown = false;
		let partial = if play.summary.contains(TOUCHDOWN_KEYWORD) {
			touchdown = true;
			debug!("touchdown override on {} play", play.play_type);
			PartialSituation::retained(BallState::DeadBall(DeadBallKind::ExtraPoint))
		} else {
			match play.play_type {
				PlayType::Rush | PlayType::Pass => handlers::rush_or_pass(play, &self.patterns)?,
				PlayType::Punt => handlers::punt_or_kickoff(play, &self.patterns, handlers::PUNT_TOUCHBACK_SPOT)?,
				PlayType::Kickoff => handlers::punt_or_kickoff(play, &self.patterns, handlers::KICKOFF_TOUCHBACK_SPOT)?,
				PlayType::FieldGoal => handlers::field_goal(play)?,
				PlayType::ExtraPoint => handlers::extra_point(play)?,
			}
		};

		let turnover = partial.possession == PossessionOutcome::Flipped;
		let (offense, defense) = match partial.possession {
			PossessionOutcome::Retained => (play.situation.offense.clone(), play.situation.defense.clone()),
			PossessionOutcome::Flipped => (play.situation.defense.clone(), play.situation.offense.clone()),
		};

		Ok(PlayOutcome {
			situation: GameSituation::new(partial.ball, offense, defense),
			clock: play.clock.clone(),
			score: play.score.clone(),
			quarter: play.quarter,
			side: play.side.clone(),
			touchdown,
			turnover,
		})
	}
}
