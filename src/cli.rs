// ClipDeck - Ligne de commande
//
// Options qui surchargent le fichier de configuration pour une
// execution.

use crate::config::settings::Settings;
use crate::constants::MAX_HISTORY_LIMIT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Fichier de configuration (defaut : dossier de configuration de la plateforme)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Dossier des donnees (historique, favoris, journaux)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
    /// Nombre max d'entrees dans l'historique (0 = illimite)
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Demarrer avec la capture en pause
    #[arg(short, long)]
    pub paused: bool,
}

impl Args {
    /// Chemin du fichier de configuration a utiliser.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_config_path)
    }

    /// Applique les options a la configuration chargee.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.data_dir {
            settings.data_dir = Some(dir.clone());
        }
        if let Some(limit) = self.limit {
            settings.limit = limit.min(MAX_HISTORY_LIMIT);
        }
        if self.paused {
            settings.paused = true;
        }
        settings
    }
}
