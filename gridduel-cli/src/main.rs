use std::io;

use clap::{App, AppSettings, Arg, SubCommand};

mod input;
mod sea;
mod xo;

fn main() -> io::Result<()> {
    gridduel::init_logging();
    let matches = App::new("Gridduel")
        .version("1.0")
        .about("Two command line grid games: noughts-and-crosses and sea battle.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("xo")
                .about("Play a noughts-and-crosses series")
                .arg(
                    Arg::with_name("difficulty")
                        .short("d")
                        .long("difficulty")
                        .value_name("DIFFICULTY")
                        .help("strength of the computer opponent, or \"human\" for hot-seat play")
                        .takes_value(true)
                        .possible_values(&["easy", "normal", "impossible", "human"])
                        .case_insensitive(true)
                        .default_value("normal"),
                )
                .arg(
                    Arg::with_name("margin")
                        .short("m")
                        .long("margin")
                        .value_name("MARGIN")
                        .help("lead in round wins that ends the series")
                        .takes_value(true)
                        .default_value("3")
                        .validator(positive_int),
                ),
        )
        .subcommand(
            SubCommand::with_name("sea")
                .about("Play a sea battle against the computer")
                .arg(
                    Arg::with_name("size")
                        .short("s")
                        .long("size")
                        .value_name("SIZE")
                        .help("side length of the board, 5 to 10")
                        .takes_value(true)
                        .default_value("6")
                        .validator(board_size),
                )
                .arg(
                    Arg::with_name("first")
                        .short("f")
                        .long("first")
                        .value_name("FIRST")
                        .help("who shoots first")
                        .takes_value(true)
                        .possible_values(&["me", "computer", "lottery"])
                        .case_insensitive(true)
                        .default_value("lottery"),
                )
                .arg(
                    Arg::with_name("budget")
                        .short("b")
                        .long("budget")
                        .value_name("BUDGET")
                        .help("attempt budget for one random placement pass")
                        .takes_value(true)
                        .default_value("2000")
                        .validator(positive_int),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("xo", Some(sub)) => xo::run(sub),
        ("sea", Some(sub)) => sea::run(sub),
        _ => unreachable!(),
    }
}

fn positive_int(val: String) -> Result<(), String> {
    match val.parse::<usize>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(format!("must be a positive integer, got \"{}\"", val)),
    }
}

fn board_size(val: String) -> Result<(), String> {
    match val.parse::<usize>() {
        Ok(n) if (gridduel::board::MIN_SIZE..=gridduel::board::MAX_SIZE).contains(&n) => Ok(()),
        _ => Err(format!(
            "must be an integer in range [{},{}], got \"{}\"",
            gridduel::board::MIN_SIZE,
            gridduel::board::MAX_SIZE,
            val
        )),
    }
}
