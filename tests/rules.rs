use rochambeau::{judge, Move, Outcome};

#[test]
fn test_judge() {
    assert_eq!(judge(Move::Rock, Move::Scissors), Outcome::Win);
    assert_eq!(judge(Move::Paper, Move::Paper), Outcome::Draw);
    assert_eq!(judge(Move::Scissors, Move::Rock), Outcome::Lose);
}

#[test]
fn test_judge_all_pairs() {
    for human in Move::ALL {
        for counter in Move::ALL {
            let outcome = judge(human, counter);
            let reverse = judge(counter, human);
            match outcome {
                Outcome::Draw => {
                    assert_eq!(human, counter);
                    assert_eq!(reverse, Outcome::Draw);
                }
                Outcome::Win => assert_eq!(reverse, Outcome::Lose),
                Outcome::Lose => assert_eq!(reverse, Outcome::Win),
            }
        }
        // The counter-move always wins against the move it counters.
        assert_eq!(judge(human, human.beaten_by()), Outcome::Lose);
    }
}

#[test]
fn test_shorthand() {
    assert_eq!(Move::from_shorthand("r"), Some(Move::Rock));
    assert_eq!(Move::from_shorthand("p"), Some(Move::Paper));
    assert_eq!(Move::from_shorthand("s"), Some(Move::Scissors));
    assert_eq!(Move::from_shorthand("Scissors\n"), Some(Move::Scissors));
    assert_eq!(Move::from_shorthand("PAPER"), Some(Move::Paper));
    assert_eq!(Move::from_shorthand("q"), None);
    assert_eq!(Move::from_shorthand("lizard"), None);
}

#[test]
fn test_names() {
    let names: Vec<String> = Move::ALL.iter().map(|m| m.to_string()).collect();
    assert_eq!(names, ["Rock", "Paper", "Scissors"]);
    let names: Vec<String> = Outcome::ALL.iter().map(|o| o.to_string()).collect();
    assert_eq!(names, ["Win", "Lose", "Draw"]);
}
