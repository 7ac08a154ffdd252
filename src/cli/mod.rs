use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;

use crate::helpers::format_file_size;
use crate::logger::{self, log_error};
use crate::pack::{pack, PackJob};

pub mod exit_codes;

#[derive(Debug, Parser)]
#[command(
    name = "icnspack",
    version,
    about = "Pack pre-rendered 128/256/512/1024 px PNGs into a macOS .icns file"
)]
pub struct Cli {
    /// 128x128 image (stored as ic07)
    #[arg(value_name = "ICON_128")]
    pub icon_128: PathBuf,

    /// 256x256 image (stored as ic08)
    #[arg(value_name = "ICON_256")]
    pub icon_256: PathBuf,

    /// 512x512 image (stored as ic09)
    #[arg(value_name = "ICON_512")]
    pub icon_512: PathBuf,

    /// 1024x1024 image (stored as ic10)
    #[arg(value_name = "ICON_1024")]
    pub icon_1024: PathBuf,

    /// Destination .icns; parent directories are created
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Cli> for PackJob {
    fn from(cli: Cli) -> Self {
        PackJob::new(cli.icon_128, cli.icon_256, cli.icon_512, cli.icon_1024, cli.output)
    }
}

/// Runs one pack and returns the process exit status.
pub fn run(cli: Cli) -> i32 {
    logger::init(cli.verbose);
    let job = PackJob::from(cli);

    match pack(&job) {
        Ok(report) => {
            for (size, len) in &report.payloads {
                info!("{:>4}px -> {}", size.pixels(), format_file_size(*len as u64));
            }
            info!("container size {}", format_file_size(report.total_len as u64));
            println!("Wrote: {}", report.output.display());
            exit_codes::SUCCESS
        }
        Err(err) => {
            log_error("pack failed", &err);
            eprintln!("{err}");
            err.exit_code()
        }
    }
}
