use std::path::PathBuf;
use std::process;

use clap::Parser;
use icnspack::inspect::ContainerSummary;

/// List the chunks of an .icns file
#[derive(Debug, Parser)]
#[command(name = "icnsinfo", version)]
struct Args {
    file: PathBuf,

    /// Print a JSON document instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let summary = match ContainerSummary::read(&args.file) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", summary.to_table());
    }
}
