//! The interactive console match. The session reads the human's throws,
//! normalizes them, asks the model for a counter-move, judges the round and
//! keeps the score.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::model::Model;
use crate::rules::{judge, Move, Outcome};

pub const PROMPT: &str = "r, p, s, q?";

/// A parsed line of user input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Throw(Move),
    Quit,
}

/// Parse one line of input. Returns None for unrecognized input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Command::Quit);
    }
    Move::from_shorthand(line).map(Command::Throw)
}

/// The running tally of the match.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Score {
    /// Count the round 'outcome', judged from the human's side.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.human += 1,
            Outcome::Lose => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.human + self.computer + self.draws
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.human, self.computer)
    }
}

pub struct Session<M: Model, I: BufRead, O: Write> {
    model: M,
    input: I,
    output: O,
    score: Score,
    /// Print the model after every round.
    dump: bool,
}

impl<M: Model, I: BufRead, O: Write> Session<M, I, O> {
    pub fn new(model: M, input: I, output: O) -> Self {
        Self {
            model,
            input,
            output,
            score: Score::default(),
            dump: false,
        }
    }

    pub fn with_dump(mut self, dump: bool) -> Self {
        self.dump = dump;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Read the next command, re-prompting on unrecognized input.
    /// The end of the input is treated as a request to quit.
    fn next_command(&mut self) -> Result<Command> {
        loop {
            writeln!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }

            match parse_command(&line) {
                Some(cmd) => return Ok(cmd),
                None => {
                    log::debug!("Rejected input {:?}", line.trim());
                    writeln!(self.output, "Unrecognized input: {}", line.trim())?;
                }
            }
        }
    }

    /// Play a single round against the human's throw 'human'. Returns the
    /// computer's counter-move and the outcome for the human.
    pub fn play_round(&mut self, human: Move) -> Result<(Move, Outcome)> {
        let counter = self.model.predict()?;
        let outcome = judge(human, counter);
        self.score.record(outcome);
        self.model.update(human, outcome);
        Ok((counter, outcome))
    }

    /// Play until the human quits, and return the final score.
    pub fn run(&mut self) -> Result<Score>
    where
        M: fmt::Display,
    {
        while let Command::Throw(human) = self.next_command()? {
            let (counter, outcome) = self.play_round(human)?;

            if self.dump {
                writeln!(self.output, "{}", self.model)?;
            }
            writeln!(
                self.output,
                "{} => {}! Score - {}",
                counter, outcome, self.score
            )?;
        }

        log::info!(
            "Match ended after {} rounds, score {}",
            self.score.rounds(),
            self.score
        );
        Ok(self.score)
    }
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("r"), Some(Command::Throw(Move::Rock)));
    assert_eq!(parse_command("p\n"), Some(Command::Throw(Move::Paper)));
    assert_eq!(parse_command(" S "), Some(Command::Throw(Move::Scissors)));
    assert_eq!(parse_command("Rock"), Some(Command::Throw(Move::Rock)));
    assert_eq!(parse_command("q"), Some(Command::Quit));
    assert_eq!(parse_command("quit"), Some(Command::Quit));
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("x"), None);
    assert_eq!(parse_command("rocks"), None);
}

#[test]
fn test_score() {
    let mut score = Score::default();
    score.record(Outcome::Win);
    score.record(Outcome::Win);
    score.record(Outcome::Lose);
    score.record(Outcome::Draw);
    assert_eq!(score.to_string(), "2:1");
    assert_eq!(score.rounds(), 4);
}
