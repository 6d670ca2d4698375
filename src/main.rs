// main.rs

use anyhow::{Context, Result};

use calcx::config::Config;
use calcx::evaluator::LiteralEvaluator;
use calcx::{logger, repl};

fn main() -> Result<()> {
    let config = Config::from_env().context("reading configuration")?;
    let guard = logger::init_logging(&config);

    let code = repl::start_repl(&config, &mut LiteralEvaluator).context("running prompt")?;
    tracing::info!(code, "exiting");
    if code != 0 {
        drop(guard);
        std::process::exit(code);
    }
    Ok(())
}
