//! Terminal Nim Type Zero for several players sharing one screen.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use nimzero::{
    BetAction, BetOutcome, Card, ParseActionError, PlayError, PlayOutcome, Player, RoundResult,
    SessionEnd, Table, TableOptions,
};

const ZERO: [&str; 9] = [
    "┌───────────┐",
    "│    ___    │",
    "│   / _ \\   │",
    "│  | | | |  │",
    "│  | | | |  │",
    "│  | |_| |  │",
    "│   \\___/   │",
    "│           │",
    "└───────────┘",
];

const ONE: [&str; 9] = [
    "┌───────────┐",
    "│    __     │",
    "│   /_ |    │",
    "│    | |    │",
    "│    | |    │",
    "│    | |    │",
    "│    |_|    │",
    "│           │",
    "└───────────┘",
];

const TWO: [&str; 9] = [
    "┌───────────┐",
    "│   ___     │",
    "│  |__ \\    │",
    "│     ) |   │",
    "│    / /    │",
    "│   / /_    │",
    "│  |____|   │",
    "│           │",
    "└───────────┘",
];

const THREE: [&str; 9] = [
    "┌───────────┐",
    "│   ____    │",
    "│  |___ \\   │",
    "│    __) |  │",
    "│   |__ <   │",
    "│   ___) |  │",
    "│  |____/   │",
    "│           │",
    "└───────────┘",
];

/// Play Nim Type Zero in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of players. Asked interactively when omitted.
    #[arg(short, long)]
    players: Option<usize>,

    /// Seed for shuffling. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rounds in the session.
    #[arg(short, long, default_value_t = 3)]
    rounds: u32,

    /// Chips each player starts with.
    #[arg(short, long, default_value_t = 100)]
    chips: u32,

    /// Log engine events at debug level.
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "nimzero=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .with_writer(io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default()
        .with_rounds(cli.rounds)
        .with_starting_chips(cli.chips);
    let mut table = Table::new(options, seed);

    let players = match cli.players {
        Some(players) => players,
        None => {
            let Some(players) = prompt_number::<usize>("How many players?: ") else {
                return;
            };
            players
        }
    };

    println!("Starting game with {players} players.");
    for i in 0..players {
        if let Err(err) = table.add_player(format!("Player {}", i + 1)) {
            println!("Cannot seat player {}: {err}", i + 1);
            return;
        }
    }

    loop {
        if let Err(err) = table.start_round() {
            if table.is_session_over() {
                break;
            }
            println!("Cannot start round: {err}");
            return;
        }

        println!("Betting for round {} started.", table.round());
        if run_betting(&mut table).is_none() {
            return;
        }

        println!("Game Starting");
        let Some(result) = run_play(&mut table) else {
            return;
        };

        print_round_result(&table, &result);
        if result.session_end.is_some() {
            break;
        }
    }

    println!("Game Over. Final Results:");
    for player in table.standings() {
        println!("{}'s chips: {}", player.name(), player.chips());
    }
}

/// Runs the betting round. Returns `None` if input ended.
fn run_betting(table: &mut Table) -> Option<()> {
    while !table.bets_settled(table.highest_bet()) {
        let player = table.current_player()?;
        let name = player.name().to_string();

        match table.highest_bet() {
            Some(highest_bet) => println!("Highest Bet: {highest_bet}"),
            None => println!("Highest Bet: none"),
        }
        prompt_line(&format!("{name}'s turn to bet. Press Enter."))?;
        print_hand(player);
        println!("You have {} chips.", player.chips());

        let outcome = if table.highest_bet().is_none() {
            loop {
                let bet = prompt_number::<u32>("Enter bet: ")?;
                match table.open_bet(bet) {
                    Ok(outcome) => {
                        clear();
                        println!("{name} bets {bet} chips");
                        break outcome;
                    }
                    Err(err) => println!("{}", capitalize(&err.to_string())),
                }
            }
        } else {
            loop {
                let action = prompt_action()?;
                match table.act(action) {
                    Ok(BetOutcome::FoldUnsupported) => println!("Fold not implemented."),
                    Ok(outcome) => {
                        clear();
                        match action {
                            BetAction::Raise(_) => println!("{name} Raises!"),
                            _ => println!("{name} Calls!"),
                        }
                        break outcome;
                    }
                    Err(err) => println!("{}", capitalize(&err.to_string())),
                }
            }
        };

        if outcome == BetOutcome::Settled {
            break;
        }
    }
    Some(())
}

/// Runs the play round until it ends. Returns `None` if input ended.
fn run_play(table: &mut Table) -> Option<RoundResult> {
    loop {
        let player = table.current_player()?;
        prompt_line(&format!("It's {}'s turn! Press Enter.", player.name()))?;
        print_hand(player);
        let name = player.name().to_string();

        loop {
            let value = prompt_number::<u8>("Which number to play?: ")?;
            match table.play(value) {
                Ok(PlayOutcome::Played { total, .. }) => {
                    clear();
                    println!("{name} played {value}");
                    println!("Game Total: {total}");
                    break;
                }
                Ok(PlayOutcome::RoundOver(result)) => {
                    clear();
                    println!("{name} played {value}");
                    println!("Game Total: {}", result.total);
                    return Some(result);
                }
                Err(PlayError::NotInHand(_)) => println!("You don't have that number."),
                Err(err) => {
                    println!("Play error: {err}");
                    return None;
                }
            }
        }
    }
}

fn print_round_result(table: &Table, result: &RoundResult) {
    match result.settlement {
        Some(settlement) => {
            if let Some(loser) = table.player(settlement.loser) {
                println!("{} loses.", loser.name());
            }
        }
        None => println!("Nobody went over. Bets are returned."),
    }

    for player in table.players() {
        println!("{}'s chips: {}", player.name(), player.chips());
    }

    if let Some(SessionEnd::Bankrupt { player }) = result.session_end {
        if let Some(player) = table.player(player) {
            println!("{} is out of chips.", player.name());
        }
    }
}

fn prompt_action() -> Option<BetAction> {
    loop {
        let input = prompt_line("call, fold or raise?: ")?;
        match input.parse::<BetAction>() {
            Ok(action) => return Some(action),
            Err(ParseActionError::MissingAmount) => {
                let amount = prompt_number::<u32>("Enter bet: ")?;
                return Some(BetAction::Raise(amount));
            }
            Err(_) => println!("Invalid input. Try again."),
        }
    }
}

/// Reads one trimmed, lowercased line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_number<T: std::str::FromStr>(prompt: &str) -> Option<T> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<T>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid Input. Try Again."),
        }
    }
}

fn print_hand(player: &Player) {
    println!("{}'s hand:\n{}", player.name(), render_hand(player.hand()));
}

/// Lays the cards out side by side.
fn render_hand(cards: &[Card]) -> String {
    (0..ZERO.len())
        .map(|row| {
            cards
                .iter()
                .map(|card| card_art(*card)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const fn card_art(card: Card) -> &'static [&'static str; 9] {
    match card.value() {
        0 => &ZERO,
        1 => &ONE,
        2 => &TWO,
        _ => &THREE,
    }
}

fn clear() {
    print!("\u{1b}[2J\u{1b}[H");
    let _ = io::stdout().flush();
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
