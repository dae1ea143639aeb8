use anyhow::Result;
use chest_xray_prep::{run, ConvertConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory containing the test/ and train/ split subdirectories
    #[arg(long, default_value = "DataFiles/chest_xray")]
    data_root: PathBuf,

    /// Directory to write the per-split CSV files to [default: <data-root>/csv_format]
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Output resolution: images are resized to resolution x resolution greyscale
    #[arg(long, default_value_t = 128)]
    resolution: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let output_root = args
        .output_root
        .unwrap_or_else(|| args.data_root.join("csv_format"));

    let config = ConvertConfig::new(args.data_root, output_root, args.resolution);
    run(&config)
}
