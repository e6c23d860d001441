//! Gomoku front end
//!
//! Opens the GUI by default, or plays in the terminal with `--console`.

mod cli;

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;
use gomoku::ui::{run_console, GameMode, GomokuApp};
use gomoku::SearchConfig;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info")))
        .init();

    let args = Args::parse();

    let budget = match Duration::try_from_secs_f64(args.time_budget) {
        Ok(budget) => budget,
        Err(err) => {
            warn!(time_budget = args.time_budget, %err, "invalid time budget, using the default");
            SearchConfig::default().time_budget
        }
    };
    let config = SearchConfig::default().with_time_budget(budget);
    let human_color = args.human.into();

    if args.console {
        info!(?human_color, ?budget, "starting console game");
        run_console(human_color, config)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, GameMode::PvE { human_color }, config)))),
    )?;
    Ok(())
}
