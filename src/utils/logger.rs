/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/2/26
******************************************************************************/

//! Logging setup built on `tracing-subscriber`.

use once_cell::sync::OnceCell;
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable (`error`,
/// `warn`, `info`, `debug`, `trace`), defaulting to `info`. Safe to call more
/// than once; only the first call installs a subscriber.
pub fn setup_logger() {
    LOGGER_INIT.get_or_init(|| {
        let level = match env::var("LOGLEVEL")
            .unwrap_or_else(|_| String::from("info"))
            .to_lowercase()
            .as_str()
        {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        // A subscriber may already be installed by the embedding application.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
