use std::{fs::File, path::Path, sync::Mutex};

use litterbox_dashboard::{log_info, util::log, App, DashboardConfig};

/// `tracing` output goes to a file; the terminal belongs to the dashboard.
fn init_tracing(log_dir: &Path) -> color_eyre::Result<()> {
    let trace_file = File::create(log_dir.join("trace.log"))?;
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = DashboardConfig::load()?;
    log::init(&config.log_dir)?;
    init_tracing(Path::new(&config.log_dir))?;
    log_info!("Dashboard starting with topics {:?}", config.topics.inbound());

    let terminal = ratatui::init();
    let result = match App::new(config) {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}
