//! dotbox - command-line front end for the dot-decimal parser and text box editor

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotbox::{dotdec, textbox};

#[derive(Parser, Debug)]
#[command(name = "dotbox")]
#[command(about = "Dot-decimal notation parsing and a cursor text box editor")]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a dot-decimal string into a list of integers
    Parse {
        /// Dot-decimal input, e.g. "22.4.5"
        input: String,
    },
    /// Check whether a dot-decimal string is a valid IPv4 address
    Ipv4 {
        /// Candidate address, e.g. "127.0.0.1"
        input: String,
    },
    /// Apply keys to a text box state and print the final state
    Textbox {
        /// Initial state containing one '|' cursor marker, e.g. "abc|def"
        state: String,
        /// Keys to apply in order: "left", "right", or a single character
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Command::Parse { input } => {
            let nums = dotdec::parse(&input)?;
            println!("{:?}", nums);
        }
        Command::Ipv4 { input } => match dotdec::parse_ipv4(&input) {
            Some(nums) => println!("{:?}", nums),
            None => println!("invalid"),
        },
        Command::Textbox { state, keys } => {
            let mut state = state;
            for raw in &keys {
                let key = raw.parse::<textbox::Key>()?;
                state = textbox::apply(&state, key)?;
            }
            println!("{}", state);
        }
    }

    Ok(())
}
