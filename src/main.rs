use std::cell::Cell;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use vareditor::config::Config;
use vareditor::logging::init_tracing;
use vareditor::script::{load_script, run_script, ScriptOutcome};
use vareditor::ui::variable_edit::{VariableEditFlow, VariableEditForm, VariableEditSession};
use vareditor::variable::VariableStore;

/// Replay an edit script against one variable and print the result.
#[derive(Debug, Parser)]
#[command(name = "vareditor", version)]
struct Cli {
    /// JSON array of known variables.
    #[arg(long)]
    variables: PathBuf,

    /// Id of the variable to edit.
    #[arg(long)]
    id: String,

    /// JSON array of edit steps.
    #[arg(long)]
    script: PathBuf,

    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    init_tracing(&config.logging, cli.verbose);
    let catalog = config.catalog().context("building kind catalog")?;

    let store = VariableStore::load_from(&cli.variables).context("loading variables")?;
    let steps = load_script(&cli.script).context("loading script")?;

    let session = VariableEditSession::open(&store, &cli.id)?;
    let dismissed = Cell::new(false);
    let mut flow = VariableEditFlow::new(session, &store, || dismissed.set(true));

    let output = match run_script(&mut flow, steps) {
        ScriptOutcome::Submitted(variable) => json!({ "submitted": variable }),
        ScriptOutcome::Dismissed => json!({ "dismissed": dismissed.get() }),
        ScriptOutcome::Open => {
            let form = VariableEditForm::from_state(flow.session().state(), &catalog);
            json!({ "open": form })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
