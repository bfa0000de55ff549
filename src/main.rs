use clap::Parser;
use result_portal::cli::{
    args::Args,
    commands::{self, CommandStatus},
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(CommandStatus::Success) => process::exit(0),
        Ok(CommandStatus::NoResult) => process::exit(2),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Result Portal - Exam Result Lookup");
    println!("==================================");
    println!();
    println!("Look up a student's exam result in a college's published result");
    println!("sheet (spreadsheet CSV export) and print the marksheet.");
    println!();
    println!("USAGE:");
    println!("    result-portal <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    lookup      Look up one student's result (main command)");
    println!("    colleges    List the configured colleges");
    println!("    inspect     Parse a result sheet and report row statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    --config <FILE>  JSON config file with the college registry");
    println!("    -v, --verbose    Increase log verbosity");
    println!("    -q, --quiet      Only log errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Look up roll number 101 in 5th standard:");
    println!("    result-portal lookup --college college1 --standard 5 --roll 101");
    println!();
    println!("    # Try the built-in sample sheet:");
    println!("    result-portal lookup --college college1 --standard 6 --roll 205 --demo");
    println!();
    println!("    # Check a sheet export before publishing it:");
    println!("    result-portal inspect results.csv --show-dropped");
    println!();
    println!("For detailed help on any command, use:");
    println!("    result-portal <COMMAND> --help");
}
