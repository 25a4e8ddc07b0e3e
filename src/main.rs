// ClipDeck - Point d'entree
// Gestionnaire d'historique de presse-papiers en terminal
//
// Ce binaire charge la configuration, initialise la journalisation,
// charge l'historique et les favoris puis lance l'interface terminal.
//
// # Configuration
// Le fichier <config_dir>/clipdeck/config.toml est cree automatiquement
// au premier lancement avec les valeurs par defaut.

use clap::Parser;
use clipdeck::app::{App, Services};
use clipdeck::cli::Args;
use clipdeck::clipboard::system::SystemClipboard;
use clipdeck::config::settings::Settings;
use clipdeck::error::CdResult;
use clipdeck::history::entry::{ClipEntry, FavoriteEntry};
use clipdeck::logging;
use clipdeck::paste::sprunge::SprungeService;
use clipdeck::storage::gateway::JsonFileGateway;
use clipdeck::ui::terminal;

/// Point d'entree principal de ClipDeck.
///
/// En cas d'erreur fatale, affiche un message sur stderr et termine
/// le processus avec un code de sortie non nul.
fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("ClipDeck fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> CdResult<()> {
    let config_path = args.config_path();
    if let Err(e) = Settings::save_default(&config_path) {
        eprintln!("Warning: cannot write default config {}: {}", config_path.display(), e);
    }
    let settings = args.apply(Settings::load(&config_path));

    let _log_guard = match logging::init_tracing(&settings.log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        data_dir = %settings.data_dir().display(),
        "clipdeck starting"
    );

    let history_store = JsonFileGateway::<ClipEntry>::new(settings.history_path());
    let favorites_store = JsonFileGateway::<FavoriteEntry>::new(settings.favorites_path());
    tracing::debug!(
        history = %history_store.path().display(),
        favorites = %favorites_store.path().display(),
        "store files"
    );
    let clipboard = SystemClipboard::new();
    tracing::info!(system = clipboard.is_system(), "clipboard ready");

    let services = Services {
        history_store: Box::new(history_store),
        favorites_store: Box::new(favorites_store),
        clipboard: Box::new(clipboard),
        paste: Box::new(SprungeService::new(&settings.paste_service_url)?),
    };
    let mut app = App::new(settings, services, 0);

    let result = terminal::run(&mut app);
    app.shutdown();
    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal ui failed");
    }
    result
}
