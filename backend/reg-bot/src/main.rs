use reg_bot::transport::{self, USAGE};
use reg_bot::{BotErrorResult, Dispatcher, logger};
use reg_dialogue::DialogueController;
use reg_ledger::{Ledger, LedgerSync, MigrationOutcome};

use std::sync::Arc;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> BotErrorResult<()> {
    // Load and validate configuration
    let config = reg_config::Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = reg_config::Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting reg-bot v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store_path = config.store_path()?;
    let ledger = Ledger::new(store_path, LedgerSync::new());
    info!("Opening registration store {}", ledger.path().display());
    ledger.ensure_initialized().await?;
    match ledger.migrate_legacy_if_needed().await? {
        MigrationOutcome::AlreadyCurrent => info!("Store is current"),
        MigrationOutcome::Migrated { rows } => info!(
            "Store migrated ({rows} rows), original kept at {}",
            ledger.backup_path().display()
        ),
        MigrationOutcome::UnknownFormat => {
            warn!("Store header is not recognized, registrations are disabled")
        }
    }

    let controller = Arc::new(DialogueController::new(
        ledger,
        config.admin.clone(),
        config.dialogue.clone(),
    ));

    info!("Reading messages from stdin ({USAGE})");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (mut dispatcher, mut replies) = Dispatcher::new(Arc::clone(&controller));
    let printer = tokio::spawn(async move {
        while let Some((identity, reply)) = replies.recv().await {
            print!("{}", transport::render(&identity, &reply));
        }
    });

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed, shutting down");
                    break;
                };
                let Some(inbound) = transport::parse_line(&line) else {
                    if !line.trim().is_empty() {
                        warn!("Ignoring malformed line, {USAGE}");
                    }
                    continue;
                };

                dispatcher.dispatch(inbound);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received SIGINT (Ctrl+C), shutting down");
                break;
            }
        }
    }

    // Let queued messages finish their writes, then flush the printer
    dispatcher.finish().await;
    if let Err(e) = printer.await {
        warn!("Reply printer failed: {e}");
    }
    info!("Stopped with {} open sessions", controller.open_sessions().await);

    Ok(())
}
