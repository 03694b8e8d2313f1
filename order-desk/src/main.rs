use anyhow::Context;
use order_desk::terminal::{self, LineReader, TerminalDialogs, TerminalView};
use order_desk::{
    Backend, DocumentStore, LocalBackend, MenuCatalog, OrderBackend, OrderDesk,
    OrderService, OrderStorage, PinPad, PinState, StoreMode, print_banner, setup_environment,
};
use shared::OrderBook;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, configuration, work dir, logging)
    let config = setup_environment().context("failed to set up environment")?;

    print_banner();
    tracing::info!(
        work_dir = %config.work_dir,
        store_mode = ?config.store_mode,
        log_level = %config.log_level,
        "Order desk starting"
    );

    // 2. Menu
    let catalog = match &config.menu_file {
        Some(path) => MenuCatalog::from_json_file(path)
            .with_context(|| format!("failed to load menu from {}", path))?,
        None => MenuCatalog::default_menu(),
    };

    // 3. Storage and backend
    let storage = OrderStorage::open(config.db_path())
        .with_context(|| format!("failed to open {}", config.db_path().display()))?;
    // the store must outlive the loop: it owns the writer task's channels
    let (backend, _store) = match config.store_mode {
        StoreMode::Local => (Backend::from(LocalBackend::new(storage.clone())), None),
        StoreMode::Shared => {
            let store = DocumentStore::spawn(storage.clone())?;
            (Backend::from(store.connect()), Some(store))
        }
    };
    let mut snapshots = backend.subscribe();

    let service = OrderService::open(Arc::new(catalog), backend, Arc::new(storage))?
        .with_touch_window(config.touch_window_ms);

    // 4. PIN gate
    let input = LineReader::stdin();
    if !unlock(&input, &config.waiter_pin).await {
        return Ok(());
    }

    // 5. Desk loop
    let mut desk = OrderDesk::new(
        service,
        TerminalView::stdout(),
        TerminalDialogs::new(input.clone()),
    );
    desk.start();
    println!("Type a code or name to search, :help for commands");

    let mut stdout = std::io::stdout();
    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line else { break };
                let command = terminal::parse_command(&line);
                if !terminal::run_command(&mut desk, command, &mut stdout).await {
                    break;
                }
            }
            snapshot = next_snapshot(&mut snapshots) => {
                if let Some(snapshot) = snapshot {
                    desk.on_remote_snapshot(snapshot);
                }
            }
        }
    }

    tracing::info!("Order desk stopped");
    Ok(())
}

/// Read PIN attempts until unlocked; `false` on end of input
async fn unlock(input: &LineReader, pin: &str) -> bool {
    let mut pad = PinPad::new(pin);
    println!("PIN:");
    loop {
        let Some(line) = input.next_line().await else {
            return false;
        };
        match pad.press_str(&line) {
            PinState::Unlocked => return true,
            PinState::Rejected => println!("Wrong PIN"),
            PinState::Incomplete(entered) => println!("{}", "*".repeat(entered)),
        }
    }
}

/// Next inbound snapshot; pends forever without a subscription
async fn next_snapshot(rx: &mut Option<broadcast::Receiver<OrderBook>>) -> Option<OrderBook> {
    let Some(receiver) = rx.as_mut() else {
        return std::future::pending().await;
    };
    match receiver.recv().await {
        Ok(snapshot) => Some(snapshot),
        Err(RecvError::Lagged(skipped)) => {
            // a later snapshot supersedes the skipped ones
            tracing::warn!(skipped, "Snapshot receiver lagged");
            None
        }
        Err(RecvError::Closed) => {
            tracing::warn!("Shared store closed");
            *rx = None;
            None
        }
    }
}
