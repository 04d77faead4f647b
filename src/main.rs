//! Toolbelt - Main Entry Point
//!
//! Dispatches subcommands to the interactive shells or the MCP server.
//! The actual implementation is in the `toolbelt` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use toolbelt::console::Console;
use toolbelt::formatting::{format_conversion, format_rates};
use toolbelt::{Config, Storage, ToolbeltServerHandler, logging};

/// Toolbelt - calculator, keypad, currency converter and to-do list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (default: ./toolbelt.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven calculator (add, subtract, multiply, divide, power, square root)
    Calc,
    /// Keypad calculator: type keys such as `7 + 3 =`
    Keypad,
    /// Convert an amount between currencies
    Convert {
        /// Amount in the source currency
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        /// Source currency code (e.g., USD)
        from: String,
        /// Target currency code (e.g., GHS)
        to: String,
    },
    /// Show the exchange-rate table
    Rates {
        /// Try to refresh rates from a live source first
        #[arg(long)]
        refresh: bool,
    },
    /// Interactive to-do list
    Todo {
        /// To-do file (overrides the config file)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Serve every tool over the Model Context Protocol on stdio
    Serve {
        /// To-do file (overrides the config file)
        #[arg(long)]
        todo_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init(args.verbose);
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Calc => Console::stdio().run_calculator()?,
        Command::Keypad => {
            Console::stdio().run_keypad()?;
        }
        Command::Convert { amount, from, to } => {
            let table = config.rate_table()?;
            let converted = table.convert(amount, &from, &to)?;
            println!("{}", format_conversion(converted, &to));
        }
        Command::Rates { refresh } => {
            let mut table = config.rate_table()?;
            if refresh {
                println!("{}", table.fetch_realtime_rates());
            }
            print!("{}", format_rates(&table));
        }
        Command::Todo { file } => {
            let storage = Storage::new(file.unwrap_or_else(|| config.todo_file()));
            Console::stdio().run_todo(&storage)?;
        }
        Command::Serve { todo_file } => {
            let todo_path = todo_file.unwrap_or_else(|| config.todo_file());
            let handler = ToolbeltServerHandler::new(todo_path, config.rate_table()?)?;
            serve_stdio(handler).await?;
        }
    }

    Ok(())
}
