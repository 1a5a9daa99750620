use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use tracing::info;

use log_export_dates::config::app::AppConfig;
use log_export_dates::handler::{Handler, InvocationContext, parse_event};

fn main() -> Result<()> {
    let cfg = AppConfig::from_env()?;
    cfg.logging.init();

    info!(
        app_env = %cfg.app_env,
        fixed_now = cfg.now_override.is_some(),
        "starting date range invocation"
    );

    // Interactive runs have no event payload.
    let mut raw = Vec::new();
    if !io::stdin().is_terminal() {
        io::stdin()
            .read_to_end(&mut raw)
            .context("failed to read event payload from stdin")?;
    }

    let handler = Handler::new(cfg.build_calculator());
    let range = handler.invoke(parse_event(&raw), InvocationContext::from_env())?;

    println!("{}", serde_json::to_string(&range)?);
    Ok(())
}
