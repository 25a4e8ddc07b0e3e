// ClipDeck - Journalisation
//
// Initialise `tracing-subscriber` avec un filtre `RUST_LOG` (defaut :
// info) et une ecriture non bloquante dans `<data_dir>/logs/clipdeck.log`.
// Le terminal appartient a l'interface : rien n'est ecrit sur stdout.
//
// Le `WorkerGuard` retourne doit vivre jusqu'a la fin du programme pour
// que les dernieres lignes soient ecrites.

use crate::constants::LOG_FILENAME;
use crate::error::{CdError, CdResult};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Filtre par defaut, remplace par `RUST_LOG` s'il est defini.
fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installe le subscriber global ecrivant dans `log_dir`.
pub fn init_tracing(log_dir: &Path) -> CdResult<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILENAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    registry()
        .with(build_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| CdError::Config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
