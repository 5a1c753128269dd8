use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod solve;

use solve::Format;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Shortest paths around a convex polygon obstacle")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a polygon and queries, write one path per query
    Solve {
        #[arg(long, default_value = "data/input.txt")]
        input: PathBuf,
        #[arg(long, default_value = "data/output.txt")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out, format } => {
            solve::solve_file(&input, &out, format)?;
            Ok(())
        }
        Action::Report => report(),
    }
}

#[track_caller]
fn report() -> Result<()> {
    let doc = provenance::Provenance::collect(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
