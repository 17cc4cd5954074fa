//! The moves of the game and the fixed rule that decides a round.

use std::fmt;

/// One of the three throws that either player can make.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All of the moves, in the fixed enumeration order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the position of the move in 'ALL'.
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Returns the move that beats this one.
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Return True if this move beats 'other'.
    pub fn beats(self, other: Move) -> bool {
        other.beaten_by() == self
    }

    /// Expand the console shorthand ("r", "p", "s") or a full move name.
    pub fn from_shorthand(text: &str) -> Option<Move> {
        match text.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Some(Move::Rock),
            "p" | "paper" => Some(Move::Paper),
            "s" | "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// The result of a round, from the perspective of the human player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Lose, Outcome::Draw];

    pub fn index(self) -> usize {
        match self {
            Outcome::Win => 0,
            Outcome::Lose => 1,
            Outcome::Draw => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        };
        f.write_str(name)
    }
}

/// Decide the round between 'human' and the computer's 'counter' throw.
pub fn judge(human: Move, counter: Move) -> Outcome {
    if human == counter {
        Outcome::Draw
    } else if human.beats(counter) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[test]
fn test_beats_is_a_cycle() {
    for m in Move::ALL {
        let winner = m.beaten_by();
        assert!(winner.beats(m));
        assert!(!m.beats(winner));
        assert!(!m.beats(m));
        // Three steps around the cycle lead back to the start.
        assert_eq!(winner.beaten_by().beaten_by(), m);
    }
}

#[test]
fn test_index_matches_enumeration_order() {
    for (i, m) in Move::ALL.iter().enumerate() {
        assert_eq!(m.index(), i);
    }
    for (i, o) in Outcome::ALL.iter().enumerate() {
        assert_eq!(o.index(), i);
    }
}
