use crate::error::{PenaltyError, SituationError};
use crate::patterns::PatternSet;
use crate::schema::{BallState, Down, PlayEvent, FIRST_DOWN_DISTANCE, MIDFIELD};
use tracing::debug;

/// The adjusted spot, down and distance after a penalty is walked off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPenalty {
	pub down: Down,
	pub distance: u8,
	pub spot: u8,
}

impl ResolvedPenalty {
	pub fn ball(self) -> BallState {
		BallState::live(self.down, self.distance, self.spot)
	}
}

/// Walk off an accepted penalty against the prior situation.
///
/// The enforcement spot moves toward the penalized team's goal when the
/// spot is measured from their own half, away from it otherwise; the
/// distance to go shrinks when the defense is penalized and grows when
/// the offense is. A distance driven to zero or below is an automatic
/// first down.
pub fn resolve_penalty(play: &PlayEvent, patterns: &PatternSet) -> Result<ResolvedPenalty, SituationError> {
	let (down, distance, _) = play.situation.ball.as_live().ok_or(SituationError::DeadBallPrior)?;

	let facts = patterns
		.penalty_facts(&play.summary)
		.map_err(|_| PenaltyError::unresolved(&play.summary))?;

	let loss = i16::from(facts.loss);
	let enforced_at = i16::from(facts.enforced_at);
	let raw_spot = if facts.team == facts.side {
		enforced_at - loss
	} else {
		enforced_at + loss
	};
	let spot = reflect_spot(raw_spot);

	let new_distance = if facts.team == play.situation.defense {
		i16::from(distance) - loss
	} else {
		i16::from(distance) + loss
	};

	let resolved = if new_distance <= 0 {
		// Automatic first down.
		ResolvedPenalty {
			down: Down::First,
			distance: FIRST_DOWN_DISTANCE,
			spot,
		}
	} else {
		ResolvedPenalty {
			down,
			distance: new_distance as u8,
			spot,
		}
	};

	debug!(
		"penalty on {} for {} yards, enforced at {} {} -> spot {}, {:?} and {}",
		facts.team, facts.loss, facts.side, facts.enforced_at, resolved.spot, resolved.down, resolved.distance
	);
	Ok(resolved)
}

// Own-half coordinates wrap at the 50; walking past midfield re-enters
// the other half, walking past the goal line stops at 0.
fn reflect_spot(raw: i16) -> u8 {
	let midfield = i16::from(MIDFIELD);
	let reflected = if raw > midfield { 2 * midfield - raw } else { raw };
	reflected.clamp(0, midfield) as u8
}
