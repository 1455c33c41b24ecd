use std::path::PathBuf;

use {
    anyhow::Result,
    clap::Parser,
    tracing::info,
    tracing_subscriber::{fmt, EnvFilter},
};

mod convert;
mod record;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the input CSV, omit for courses.csv in the working directory
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Path of the JSON output, omit for data.json in the working directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Overwrite the output file instead of appending to it
    #[arg(short, long)]
    truncate: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let input = cli.input.unwrap_or_else(|| PathBuf::from("courses.csv"));
    let output = cli.output.unwrap_or_else(|| PathBuf::from("data.json"));

    let document = convert::read_courses(&input)?;
    info!(
        "converted {} rows from {}",
        document.courses.len(),
        input.display()
    );

    convert::write_document(&document, &output, cli.truncate)?;

    Ok(())
}
