//! Console blackjack table.

use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use croupier::{Computer, Human, LinePrompt, SHOE_DECKS, Table, TableOptions, Terminal};

/// Kind of client taking a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Human,
    Computer,
}

/// A seat given as `human=NAME` or `computer=NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeatSpec {
    kind: Kind,
    name: String,
}

impl FromStr for SeatSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = s
            .split_once('=')
            .ok_or_else(|| format!("expected human=NAME or computer=NAME, got `{s}`"))?;
        let kind = match kind.trim().to_lowercase().as_str() {
            "human" | "h" => Kind::Human,
            "computer" | "c" => Kind::Computer,
            other => return Err(format!("unknown seat kind `{other}`")),
        };
        Ok(Self {
            kind,
            name: name.trim().to_owned(),
        })
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Play blackjack against the house")]
struct Args {
    /// Seed for shuffles and computer personalities (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Starting chips for every client.
    #[arg(long, default_value_t = 100)]
    chips: u32,

    /// Seat a client, in order: `human=NAME` or `computer=NAME`.
    #[arg(long = "seat", value_name = "KIND=NAME")]
    seats: Vec<SeatSpec>,

    /// Number of decks in the shoe.
    #[arg(long, default_value_t = SHOE_DECKS)]
    decks: u8,

    /// Cut the shoe after every shuffle.
    #[arg(long)]
    cut: bool,

    /// Stop after this many rounds.
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Never clear the screen or wait for Enter.
    #[arg(long)]
    no_pause: bool,
}

fn default_seats() -> Vec<SeatSpec> {
    [
        (Kind::Human, "Cris"),
        (Kind::Computer, "Batman"),
        (Kind::Human, "Zotel"),
        (Kind::Computer, "Spider-man"),
    ]
    .into_iter()
    .map(|(kind, name)| SeatSpec {
        kind,
        name: name.to_owned(),
    })
    .collect()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let options = TableOptions::default()
        .with_decks(args.decks)
        .with_cut_after_shuffle(args.cut)
        .with_max_rounds(args.max_rounds);
    let mut table = Table::new(options, seed).with_screen(Terminal::new(!args.no_pause));

    let seats = if args.seats.is_empty() {
        default_seats()
    } else {
        args.seats
    };
    for (i, seat) in seats.into_iter().enumerate() {
        let joined = match seat.kind {
            Kind::Human => table.join(Human::new(&seat.name, args.chips, LinePrompt::stdin())),
            Kind::Computer => table.join(Computer::new(
                &seat.name,
                args.chips,
                seed.wrapping_add(i as u64 + 1),
            )),
        };
        if let Err(err) = joined {
            eprintln!("cannot seat {}: {err}", seat.name);
            return ExitCode::FAILURE;
        }
    }

    match table.play() {
        Ok(rounds) => {
            println!("Game over after {rounds} rounds.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
