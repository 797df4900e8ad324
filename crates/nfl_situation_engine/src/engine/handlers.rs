use crate::engine::penalty::resolve_penalty;
use crate::error::SituationError;
use crate::patterns::{PatternKind, PatternSet};
use crate::roster::TeamCode;
use crate::schema::{BallState, DeadBallKind, Down, PartialSituation, PlayEvent, PossessionOutcome};
use tracing::{debug, warn};

/// Touchback spot for a punted ball.
pub const PUNT_TOUCHBACK_SPOT: u8 = 20;
/// Touchback spot for a kickoff.
pub const KICKOFF_TOUCHBACK_SPOT: u8 = 25;
/// Restart spot for the kickoff that follows a made field goal or try.
pub const KICKOFF_RESTART_SPOT: u8 = 35;

const PENALTY_KEYWORD: &str = "Penalty";
const DECLINED_KEYWORD: &str = "declined";
const INTERCEPTION_KEYWORD: &str = "INTERCEPTED";
const TOUCHBACK_KEYWORD: &str = "touchback";
const MISSED_KICK_KEYWORD: &str = "No Good";

fn has_accepted_penalty(summary: &str) -> bool {
	summary.contains(PENALTY_KEYWORD) && !summary.contains(DECLINED_KEYWORD)
}

fn live_parts(play: &PlayEvent) -> Result<(Down, u8, u8), SituationError> {
	play.situation.ball.as_live().ok_or(SituationError::DeadBallPrior)
}

/// Shared handler for rushing and passing plays.
pub fn rush_or_pass(play: &PlayEvent, patterns: &PatternSet) -> Result<PartialSituation, SituationError> {
	let (down, distance, prior_spot) = live_parts(play)?;
	let summary = play.summary.as_str();

	// No spot phrase means the ball coordinate did not move, e.g. a sack
	// recorded without a location.
	let (frame, new_spot) = match patterns.new_spot(summary) {
		Ok(found) => found,
		Err(_) => {
			debug!("no spot phrase, keeping prior spot {prior_spot}");
			(play.side.clone(), prior_spot)
		}
	};

	if has_accepted_penalty(summary) {
		return resolve_penalty(play, patterns).map(|resolved| PartialSituation::retained(resolved.ball()));
	}

	if summary.contains(INTERCEPTION_KEYWORD) {
		return Ok(PartialSituation::flipped(BallState::first_and_ten(new_spot)));
	}

	let yards_gained = match patterns.extract_number(summary, PatternKind::YardGain) {
		Ok(yards) => yards,
		// No measurable gain, e.g. a spike or an incompletion.
		Err(_) => 0,
	};

	let (ball, possession) = if yards_gained >= i16::from(distance) {
		(BallState::first_and_ten(new_spot), PossessionOutcome::Retained)
	} else {
		match down.next() {
			Some(next_down) => {
				let remaining = (i16::from(distance) - yards_gained) as u8;
				(BallState::live(next_down, remaining, new_spot), PossessionOutcome::Retained)
			}
			None => {
				// Fourth down came up short: turnover on downs.
				warn!("turnover on downs at spot {new_spot}");
				(BallState::first_and_ten(new_spot), PossessionOutcome::Flipped)
			}
		}
	};

	let offense = match possession {
		PossessionOutcome::Retained => &play.situation.offense,
		PossessionOutcome::Flipped => &play.situation.defense,
	};
	Ok(PartialSituation {
		ball: clamp_distance_to_frame(ball, offense, &frame),
		possession,
	})
}

// The spot phrase may be measured from the opposing half; once the
// offense has crossed into it, the distance to go cannot exceed the
// yards left to the goal line.
fn clamp_distance_to_frame(ball: BallState, offense: &TeamCode, frame: &TeamCode) -> BallState {
	match ball {
		BallState::Live { down, distance, spot } if offense != frame && distance > spot => BallState::live(down, spot, spot),
		other => other,
	}
}

/// Shared handler for punts and kickoffs, parameterized by where a
/// touchback puts the ball.
pub fn punt_or_kickoff(play: &PlayEvent, patterns: &PatternSet, touchback_spot: u8) -> Result<PartialSituation, SituationError> {
	live_parts(play)?;
	let summary = play.summary.as_str();

	let spot = if has_accepted_penalty(summary) {
		resolve_penalty(play, patterns)?.spot
	} else if summary.contains(TOUCHBACK_KEYWORD) {
		touchback_spot
	} else {
		// Kicks always report a landing or return spot; there is no
		// sensible fallback when the phrase is missing.
		let (_, spot) = patterns.new_spot(summary)?;
		spot
	};

	// Whatever the branch, the receiving side starts a fresh series.
	Ok(PartialSituation::retained(BallState::first_and_ten(spot)))
}

/// Field goal attempts. A miss hands the ball over at the spot of the
/// attempt; a make leads to a kickoff.
pub fn field_goal(play: &PlayEvent) -> Result<PartialSituation, SituationError> {
	let (_, _, prior_spot) = live_parts(play)?;

	if play.summary.contains(MISSED_KICK_KEYWORD) {
		Ok(PartialSituation::flipped(BallState::first_and_ten(prior_spot)))
	} else {
		Ok(PartialSituation::retained(BallState::DeadBall(DeadBallKind::Kickoff {
			spot: KICKOFF_RESTART_SPOT,
		})))
	}
}

/// Extra point attempts. Make or miss, the next live snap is a kickoff,
/// so no distinction is needed for spot purposes.
pub fn extra_point(play: &PlayEvent) -> Result<PartialSituation, SituationError> {
	live_parts(play)?;
	Ok(PartialSituation::retained(BallState::DeadBall(DeadBallKind::Kickoff {
		spot: KICKOFF_RESTART_SPOT,
	})))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::roster::TeamRoster;
	use crate::schema::{GameSituation, PlayType, Score, FIRST_DOWN_DISTANCE};

	fn patterns() -> PatternSet {
		PatternSet::new(&TeamRoster::parse(&["MIN", "SEA"]).unwrap()).unwrap()
	}

	fn team(code: &str) -> TeamCode {
		TeamCode::new(code).unwrap()
	}

	fn play(play_type: PlayType, summary: &str, ball: BallState) -> PlayEvent {
		PlayEvent::new(
			play_type,
			summary,
			GameSituation::new(ball, team("MIN"), team("SEA")),
			team("MIN"),
			"8:03",
			Score::new(),
			2,
		)
	}

	#[test]
	fn test_gain_past_the_sticks_resets_the_series() {
		let event = play(
			PlayType::Rush,
			"A.Abdullah up the middle to the MIN 42 for 7 yards (K.Chancellor).",
			BallState::live(Down::Second, 7, 35),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(42));
		assert_eq!(result.possession, PossessionOutcome::Retained);
	}

	#[test]
	fn test_short_gain_advances_the_down() {
		let event = play(
			PlayType::Pass,
			"S.Bradford pass short left to K.Rudolph to MIN 38 for 3 yards (B.Wagner).",
			BallState::live(Down::Second, 7, 35),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::live(Down::Third, 4, 38));
		assert_eq!(result.possession, PossessionOutcome::Retained);
	}

	#[test]
	fn test_loss_grows_the_distance() {
		let event = play(
			PlayType::Pass,
			"S.Bradford sacked at MIN 28 for -7 yards (C.Avril).",
			BallState::live(Down::Second, 7, 35),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::live(Down::Third, 14, 28));
	}

	#[test]
	fn test_missing_spot_phrase_keeps_prior_spot() {
		let event = play(
			PlayType::Pass,
			"S.Bradford pass incomplete deep right.",
			BallState::live(Down::First, 10, 30),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::live(Down::Second, 10, 30));
	}

	#[test]
	fn test_fourth_down_stop_flips_possession() {
		let event = play(
			PlayType::Rush,
			"M.Asiata up the middle to MIN 41 for 1 yard (B.Wagner, K.Chancellor).",
			BallState::live(Down::Fourth, 2, 40),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(41));
		assert_eq!(result.possession, PossessionOutcome::Flipped);
	}

	#[test]
	fn test_interception_is_a_turnover() {
		let event = play(
			PlayType::Pass,
			"S.Bradford pass deep middle INTERCEPTED by E.Thomas at the SEA 38.",
			BallState::live(Down::Third, 8, 44),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(38));
		assert_eq!(result.possession, PossessionOutcome::Flipped);
	}

	#[test]
	fn test_accepted_penalty_delegates_to_the_resolver() {
		let event = play(
			PlayType::Rush,
			"A.Abdullah up the middle to MIN 37. Penalty on SEA 56, Defensive Offside, 5 yards, enforced at MIN 35.",
			BallState::live(Down::Third, 4, 35),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		// 35 + 5 toward SEA's goal, distance 4 - 5 driven past zero.
		assert_eq!(result.ball, BallState::first_and_ten(40));
		assert_eq!(result.possession, PossessionOutcome::Retained);
	}

	#[test]
	fn test_declined_penalty_runs_the_play_as_called() {
		let event = play(
			PlayType::Rush,
			"A.Abdullah up the middle to MIN 42 for 7 yards. Penalty on SEA 56, Offside, declined.",
			BallState::live(Down::Second, 7, 35),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(42));
	}

	#[test]
	fn test_crossing_midfield_clamps_distance_to_the_goal_line() {
		let event = play(
			PlayType::Pass,
			"S.Bradford pass deep left to S.Diggs to the SEA 8 for 44 yards (R.Sherman).",
			BallState::live(Down::First, 10, 48),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		// First and goal from the eight.
		assert_eq!(result.ball, BallState::live(Down::First, 8, 8));
	}

	#[test]
	fn test_punt_touchback_spots_the_ball_at_twenty() {
		let event = play(
			PlayType::Punt,
			"J.Locke punts 54 yards from MIN 30 to the end zone, touchback.",
			BallState::live(Down::Fourth, 9, 30),
		);
		let result = punt_or_kickoff(&event, &patterns(), PUNT_TOUCHBACK_SPOT).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(PUNT_TOUCHBACK_SPOT));
	}

	#[test]
	fn test_kickoff_touchback_spots_the_ball_at_twenty_five() {
		let event = play(
			PlayType::Kickoff,
			"B.Walsh kicks 65 yards from MIN 35 to the end zone, touchback.",
			BallState::live(Down::First, 10, 35),
		);
		let result = punt_or_kickoff(&event, &patterns(), KICKOFF_TOUCHBACK_SPOT).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(KICKOFF_TOUCHBACK_SPOT));
	}

	#[test]
	fn test_returned_kick_uses_the_reported_spot() {
		let event = play(
			PlayType::Punt,
			"J.Ryan punts 47 yards from SEA 25. M.Sherels to the MIN 18 for 8 yards (N.Thorpe).",
			BallState::live(Down::Fourth, 6, 25),
		);
		let result = punt_or_kickoff(&event, &patterns(), PUNT_TOUCHBACK_SPOT).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(18));
	}

	#[test]
	fn test_kick_without_a_spot_phrase_fails_hard() {
		let event = play(PlayType::Punt, "J.Locke punts.", BallState::live(Down::Fourth, 6, 25));
		assert!(punt_or_kickoff(&event, &patterns(), PUNT_TOUCHBACK_SPOT).is_err());
	}

	#[test]
	fn test_missed_field_goal_hands_the_ball_over_at_the_spot() {
		let event = play(
			PlayType::FieldGoal,
			"B.Walsh 46 yard field goal is No Good, wide left.",
			BallState::live(Down::Fourth, 4, 28),
		);
		let result = field_goal(&event).unwrap();

		assert_eq!(result.ball, BallState::first_and_ten(28));
		assert_eq!(result.possession, PossessionOutcome::Flipped);
	}

	#[test]
	fn test_made_field_goal_leads_to_a_kickoff() {
		let event = play(
			PlayType::FieldGoal,
			"B.Walsh 33 yard field goal is GOOD, Center-K.McDermott, Holder-J.Locke.",
			BallState::live(Down::Fourth, 4, 16),
		);
		let result = field_goal(&event).unwrap();

		assert_eq!(
			result.ball,
			BallState::DeadBall(DeadBallKind::Kickoff { spot: KICKOFF_RESTART_SPOT })
		);
		assert_eq!(result.possession, PossessionOutcome::Retained);
	}

	#[test]
	fn test_extra_point_always_leads_to_a_kickoff() {
		for summary in ["B.Walsh extra point is GOOD.", "B.Walsh extra point is No Good, hit left upright."] {
			let event = play(PlayType::ExtraPoint, summary, BallState::live(Down::First, 2, 2));
			let result = extra_point(&event).unwrap();

			assert_eq!(
				result.ball,
				BallState::DeadBall(DeadBallKind::Kickoff { spot: KICKOFF_RESTART_SPOT }),
				"Failed for summary: {}",
				summary
			);
		}
	}

	#[test]
	fn test_first_down_distance_is_restored_after_the_sticks() {
		let event = play(
			PlayType::Rush,
			"J.McKinnon left end to the MIN 45 for 12 yards (K.Wright).",
			BallState::live(Down::Third, 9, 33),
		);
		let result = rush_or_pass(&event, &patterns()).unwrap();

		assert_eq!(result.ball.as_live().map(|(_, distance, _)| distance), Some(FIRST_DOWN_DISTANCE));
	}
}
