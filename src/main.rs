use std::sync::Arc;
use std::time::Duration;

use chatkit::app::{App, InitProps, destruct_terminal_for_panic};
use chatkit::app::services::{EventService, TaskService};
use chatkit::cli::Command;
use chatkit::config::init_logger;
use chatkit::fetch::{HttpFetcher, TaskCache};
use eyre::Result;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    init_logger(&config.log)?;
    log::debug!("logger initialized");

    let mut fetcher = HttpFetcher::new(&config.server.base_url);
    if let Some(secs) = config.server.timeout_secs {
        fetcher = fetcher.with_timeout(Duration::from_secs(secs as u64));
    }
    let cache = Arc::new(TaskCache::new(Arc::new(fetcher)));

    let mut events = EventService::default();
    let tasks = TaskService::new(cache, Arc::new(events.event_tx()));

    let token = CancellationToken::new();
    let mut app = App::new(&config, &mut events, tasks, token.clone(), InitProps::default());

    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    Ok(())
}
