use nfl_situation_engine::schema::{BallState, Down, GameSituation, PlayEvent, PlayType, Score};
use nfl_situation_engine::{SituationEngine, TeamCode, TeamRoster};

fn main() {
	let roster = TeamRoster::parse(&["MIN", "SEA"]).expect("valid roster");
	let engine = SituationEngine::new(&roster).expect("grammar compiles");

	let offense = TeamCode::new("MIN").expect("valid code");
	let defense = TeamCode::new("SEA").expect("valid code");

	let plays = vec![
		(
			PlayType::Rush,
			"A.Abdullah up the middle to the MIN 42 for 7 yards (K.Chancellor).",
			BallState::live(Down::Second, 7, 35),
		),
		(
			PlayType::Pass,
			"S.Bradford pass deep left to S.Diggs for 44 yards, touchdown.",
			BallState::live(Down::First, 10, 48),
		),
		(
			PlayType::Punt,
			"J.Locke punts 54 yards from MIN 30 to the end zone, touchback.",
			BallState::live(Down::Fourth, 9, 30),
		),
	];

	for (play_type, summary, ball) in plays {
		let event = PlayEvent::new(
			play_type,
			summary,
			GameSituation::new(ball, offense.clone(), defense.clone()),
			offense.clone(),
			"10:22",
			Score::from([("MIN".to_string(), 7), ("SEA".to_string(), 3)]),
			3,
		);

		match engine.compute_outcome(&event) {
			Ok(outcome) => println!("{summary}\n  -> {:?}\n", outcome.situation.ball),
			Err(e) => eprintln!("Failed to derive situation: {e}"),
		}
	}
}
