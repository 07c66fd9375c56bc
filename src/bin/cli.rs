//! ankirpc CLI
//!
//! Command-line interface for driving AnkiConnect by hand.

use std::process::ExitCode;

use ankirpc::{AnkiClient, Card, CardId, Config, Deck, Ease};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// ankirpc CLI
#[derive(Parser, Debug)]
#[command(name = "ankirpc-cli")]
#[command(about = "CLI for the AnkiConnect automation API")]
#[command(version)]
struct Args {
    /// AnkiConnect endpoint
    #[arg(short, long, env = "ANKICONNECT_URL", default_value = ankirpc::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Per-request timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "30000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the AnkiConnect API version
    Version,

    /// List deck names
    Decks,

    /// List ids of due or new cards in a deck
    Due {
        /// The deck name, e.g. "Spanish::Verbs"
        deck: String,
    },

    /// Show one card
    Card {
        /// The card id
        id: CardId,
    },

    /// Submit a review grade
    Answer {
        /// The card id
        id: CardId,

        /// 1-4 or again/hard/good/easy
        ease: Ease,
    },

    /// List decks, then show the due cards and first card of one deck
    Walkthrough {
        /// Deck to inspect (defaults to the first deck)
        deck: Option<String>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,ankirpc=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match Config::builder()
        .endpoint(&args.endpoint)
        .timeout_ms(args.timeout_ms)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("ankirpc v{} -> {}", ankirpc::VERSION, config.endpoint);

    let client = match AnkiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(client: &AnkiClient, command: Commands) -> ankirpc::Result<()> {
    match command {
        Commands::Version => {
            println!("{}", client.version()?);
        }
        Commands::Decks => {
            for (i, deck) in client.deck_names()?.iter().enumerate() {
                println!("{:2}: {}", i, deck);
            }
        }
        Commands::Due { deck } => {
            for (i, id) in client.due_card_ids(&Deck::new(deck))?.iter().enumerate() {
                println!("{:2}: {}", i, id);
            }
        }
        Commands::Card { id } => {
            print_card(&client.card(id)?);
        }
        Commands::Answer { id, ease } => {
            client.answer(id, ease)?;
            println!("Answered {} with {}", id, ease);
        }
        Commands::Walkthrough { deck } => {
            let decks = client.deck_names()?;
            for (i, deck) in decks.iter().enumerate() {
                println!("{:2}: {}", i, deck);
            }

            let deck = match deck {
                Some(name) => Deck::new(name),
                None => match decks.into_iter().next() {
                    Some(deck) => deck,
                    None => {
                        println!("No decks");
                        return Ok(());
                    }
                },
            };

            println!("\nDue or new in {}:", deck);
            let ids = client.due_card_ids(&deck)?;
            for (i, id) in ids.iter().enumerate() {
                println!("{:2}: {}", i, id);
            }

            if let Some(&first) = ids.first() {
                println!();
                print_card(&client.card(first)?);
            }
        }
    }

    Ok(())
}

fn print_card(card: &Card) {
    println!("Card {} ({} / {})", card.card_id, card.deck_name, card.model_name);
    println!("Due: {}", card.due);
    for (name, field) in card.fields_in_order() {
        let marker = if field.order == card.field_order { "*" } else { " " };
        println!("{} {:2} {}: {}", marker, field.order, name, field.value);
    }
}
