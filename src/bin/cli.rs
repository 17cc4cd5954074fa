//! This is the command line tool that plays an interactive match of
//! rock-paper-scissors against the adaptive predictor.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use rochambeau::session::Session;
use rochambeau::Predictor;

use std::io;

fn main() {
    let matches = Command::new("rochambeau")
        .version("1.x")
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed the random generator to make the match reproducible")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Print the frequency tables after every round")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let cli_dump = matches.get_flag("dump");
    let predictor = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Predictor::with_seed(*seed)
        }
        None => Predictor::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(predictor, stdin.lock(), stdout.lock()).with_dump(cli_dump);

    match session.run() {
        Ok(score) => {
            log::info!("Final score {} ({} draws)", score, score.draws);
        }
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}
