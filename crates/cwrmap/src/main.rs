use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_fields;

#[derive(Parser)]
#[command(name = "cwrmap", about = "CWR record field-layout extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract annotated field layouts as a CSV table
    Fields {
        /// Directory containing the CWR record source files
        #[arg(long, default_value = "src/records")]
        dir: PathBuf,

        /// File extension of record sources
        #[arg(long, default_value = "rs")]
        ext: String,

        /// Registry/index file to skip (holds no field declarations)
        #[arg(long, default_value = "mod.rs")]
        exclude: String,

        /// Write the CSV to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fields {
            dir,
            ext,
            exclude,
            out,
        } => cmd_fields::run(dir, ext, exclude, out),
    }
}
