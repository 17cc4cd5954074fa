use rochambeau::session::{Session, PROMPT};
use rochambeau::{Move, Outcome, Predictor, StateKey};

fn play(script: &str, seed: u64, dump: bool) -> (String, Session<Predictor, &[u8], Vec<u8>>) {
    let mut session =
        Session::new(Predictor::with_seed(seed), script.as_bytes(), Vec::new()).with_dump(dump);
    session.run().unwrap();
    let transcript = String::from_utf8(session.output().clone()).unwrap();
    (transcript, session)
}

#[test]
fn test_quit_immediately() {
    let (out, session) = play("q\n", 0, false);
    assert_eq!(out, format!("{}\n", PROMPT));
    assert_eq!(session.score().rounds(), 0);
    assert_eq!(session.model().current_key(), StateKey::Start);
}

#[test]
fn test_rounds_are_scored() {
    let (out, session) = play("r\np\ns\nr\nq\n", 1, false);
    let score = session.score();
    assert_eq!(score.rounds(), 4);

    let results: Vec<&str> = out.lines().filter(|l| l.contains("=>")).collect();
    assert_eq!(results.len(), 4);
    let last = results.last().unwrap();
    assert!(last.ends_with(&format!("Score - {}:{}", score.human, score.computer)));

    // The predictor saw four throws, the last one was Rock.
    match session.model().current_key() {
        StateKey::Context(m, _) => assert_eq!(m, Move::Rock),
        StateKey::Start => panic!("the predictor did not advance"),
    }
}

#[test]
fn test_bad_input_is_rejected() {
    let (out, session) = play("x\n\nrock\nq\n", 2, false);
    assert_eq!(session.score().rounds(), 1);
    assert_eq!(out.matches(PROMPT).count(), 4);
    assert!(out.contains("Unrecognized input: x"));
}

#[test]
fn test_end_of_input_quits() {
    let (_, session) = play("s\ns\n", 3, false);
    assert_eq!(session.score().rounds(), 2);
}

#[test]
fn test_dump_is_printed() {
    let (out, _) = play("p\nq\n", 4, true);
    assert!(out.contains("RockWin:\n   [Rock:1][Paper:1][Scissors:1]\n"));
    assert!(out.contains("ScissorsDraw:"));
}

#[test]
fn test_play_round_updates_model() {
    let mut session = Session::new(Predictor::with_seed(5), &b""[..], Vec::new());
    let (counter, outcome) = session.play_round(Move::Paper).unwrap();
    assert_eq!(outcome, rochambeau::judge(Move::Paper, counter));
    assert_eq!(
        session.model().current_key(),
        StateKey::Context(Move::Paper, outcome)
    );
    assert_eq!(session.model().state(StateKey::Start).count(Move::Paper), 2);
    let expected = match outcome {
        Outcome::Win => (1, 0),
        Outcome::Lose => (0, 1),
        Outcome::Draw => (0, 0),
    };
    assert_eq!((session.score().human, session.score().computer), expected);
}
