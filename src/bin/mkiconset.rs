use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use icnspack::iconset::{iconset_job, write_iconset};
use icnspack::logger::{self, log_error};
use icnspack::pack;

/// Render the app logo as icon_128/256/512/1024.png
#[derive(Debug, Parser)]
#[command(name = "mkiconset", version)]
struct Args {
    /// Directory that receives the PNGs
    dir: PathBuf,

    /// Also pack the rendered PNGs into this .icns file
    #[arg(long, value_name = "OUTPUT")]
    pack: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logger::init(args.verbose);

    if let Err(e) = write_iconset(&args.dir) {
        log_error("iconset", &e);
        eprintln!("{e}");
        process::exit(1);
    }
    println!("Iconset written to {}", args.dir.display());

    if let Some(output) = args.pack {
        match pack(&iconset_job(&args.dir, output)) {
            Ok(report) => println!("Wrote: {}", report.output.display()),
            Err(e) => {
                log_error("pack", &e);
                eprintln!("{e}");
                process::exit(e.exit_code());
            }
        }
    }
}
