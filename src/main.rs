use clap::Parser;
use std::process;
use taxi_star::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Taxi Star - NYC Taxi Trip Star-Schema Reshaper");
    println!("==============================================");
    println!();
    println!("Fetch a flat extract of NYC yellow taxi trips and reshape it into");
    println!("a star schema: one fact table referencing seven dimension tables.");
    println!();
    println!("USAGE:");
    println!("    taxi-star <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    run     Fetch, reshape, and preview the fact table (main command)");
    println!("    help    Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Reshape the default public sample extract:");
    println!("    taxi-star run");
    println!();
    println!("    # Reshape a custom extract and preview ten fact rows:");
    println!("    taxi-star run --url https://example.com/trips.csv --preview 10");
    println!();
    println!("For detailed help on any command, use:");
    println!("    taxi-star <COMMAND> --help");
}
