// ClipDeck - Structure de configuration et valeurs par defaut
//
// Ce module definit la structure `Settings` qui centralise tous les
// parametres de l'application : historique, capture, estompage, theme,
// service de collage et chemins de fichiers.
//
// # Chargement
// `Settings::load(path)` lit le fichier TOML. Les cles manquantes
// conservent leur defaut ; un fichier illisible est journalise et
// remplace par les defauts. Les valeurs hors bornes sont clampees
// (ex: limit 0..10000, poll_interval_ms 100..10000).
//
// # Fichier par defaut
// `Settings::save_default(path)` genere un fichier commente avec
// toutes les options disponibles et leurs valeurs.

use crate::constants::*;
use crate::error::CdResult;
use crate::history::ring::FadePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme de l'interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Configuration complete de l'application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // history
    pub limit: usize,
    pub paused: bool,
    pub poll_interval_ms: u64,
    // display
    pub close_after_select: bool,
    pub theme: ThemeMode,
    // fade
    pub fade: bool,
    pub fade_delay_minutes: u32,
    pub fade_step: u8,
    pub fade_levels: u32,
    // paste
    pub paste_service_url: String,
    // paths
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            paused: false,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            close_after_select: false,
            theme: ThemeMode::Dark,
            fade: true,
            fade_delay_minutes: DEFAULT_FADE_DELAY_MINUTES,
            fade_step: DEFAULT_FADE_STEP,
            fade_levels: DEFAULT_FADE_LEVELS,
            paste_service_url: DEFAULT_PASTE_SERVICE_URL.to_string(),
            data_dir: None,
        }
    }
}

impl Settings {
    /// Charge la configuration depuis un fichier. Utilise les defauts pour les valeurs manquantes.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no config file, using defaults");
                return Settings::default();
            }
        };
        match Self::parse(&text) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Settings::default()
            }
        }
    }

    /// Parse un texte TOML et clampe les valeurs.
    pub fn parse(text: &str) -> CdResult<Self> {
        let settings: Settings = toml::from_str(text)?;
        Ok(settings.clamped())
    }

    /// Ramene chaque valeur dans sa plage valide.
    pub fn clamped(mut self) -> Self {
        self.limit = self.limit.min(MAX_HISTORY_LIMIT);
        self.poll_interval_ms = self.poll_interval_ms.clamp(100, 10_000);
        self.fade_delay_minutes = self.fade_delay_minutes.max(1);
        self.fade_step = self.fade_step.clamp(1, 64);
        self.fade_levels = self.fade_levels.min(16);
        if self.paste_service_url.trim().is_empty() {
            self.paste_service_url = DEFAULT_PASTE_SERVICE_URL.to_string();
        }
        self
    }

    /// Ecrit le fichier de configuration commente s'il n'existe pas encore.
    pub fn save_default(path: &Path) -> std::io::Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, default_config_text())
    }

    /// Chemin par defaut du fichier de configuration.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILENAME)
    }

    /// Repertoire des donnees (historique, favoris, journaux).
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME),
        }
    }

    /// Retourne le chemin du fichier d'historique.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(HISTORY_FILENAME)
    }

    /// Retourne le chemin du fichier des favoris.
    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir().join(FAVORITES_FILENAME)
    }

    /// Retourne le dossier des journaux.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join(LOG_DIR_NAME)
    }

    /// Parametres d'estompage derives de la configuration.
    pub fn fade_policy(&self) -> FadePolicy {
        FadePolicy {
            enabled: self.fade,
            delay_minutes: self.fade_delay_minutes,
            step: self.fade_step,
            levels: self.fade_levels,
        }
    }
}

/// Texte par defaut du fichier de configuration.
fn default_config_text() -> String {
    r#"# ClipDeck Configuration

# Nombre max d'entrees dans l'historique (0 = illimite)
limit = 50
# Demarrer avec la capture en pause
paused = false
# Intervalle de scrutation du presse-papiers (ms)
poll_interval_ms = 500

# Quitter apres avoir choisi une entree
close_after_select = false
# Theme : dark | light
theme = "dark"

# Estomper les captures anciennes
fade = true
fade_delay_minutes = 10
fade_step = 16
fade_levels = 6

# Service de collage (formulaire multipart, champ "sprunge")
paste_service_url = "http://sprunge.us"

# Dossier des donnees (defaut : dossier de donnees de la plateforme)
# data_dir = "/home/user/.local/share/clipdeck"
"#
    .to_string()
}
