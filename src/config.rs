//! src/config.rs
//!
//! Réglages utilisateur (TOML), lus au démarrage.
//!
//! Emplacement : `<config_dir>/calculatrice/reglages.toml`
//! (ex. `~/.config/calculatrice/reglages.toml`). Fichier absent => défauts.
//!
//! ```toml
//! theme = "clair"
//! historique_max = 50
//! filtre_logs = "info,calculatrice=trace"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Bornes de l’historique local (anti-abus mémoire).
pub const HISTORIQUE_MIN: usize = 1;
pub const HISTORIQUE_MAX: usize = 500;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("Lecture impossible de '{path}': {source}")]
    Lecture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Réglages illisibles dans '{path}': {source}")]
    Syntaxe {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Réglages invalides: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Clair,
    #[default]
    Sombre,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub theme: Theme,
    /// Nombre de calculs gardés dans l’historique local.
    pub historique_max: usize,
    /// Filtre tracing utilisé si RUST_LOG est absent.
    pub filtre_logs: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            historique_max: 20,
            filtre_logs: "info,calculatrice=debug".to_string(),
        }
    }
}

impl Reglages {
    /// `None` si la plateforme n’a pas de dossier de configuration (wasm).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice").join("reglages.toml"))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn chemin_defaut() -> Option<PathBuf> {
        None
    }

    /// Réglages depuis l’emplacement par défaut (défauts si absent).
    pub fn charger() -> Result<Self, ErreurConfig> {
        match Self::chemin_defaut() {
            Some(path) => Self::charger_depuis(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn charger_depuis(path: &Path) -> Result<Self, ErreurConfig> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contenu = fs::read_to_string(path).map_err(|e| ErreurConfig::Lecture {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::depuis_toml(&contenu).map_err(|e| match e {
            ErreurConfig::Syntaxe { source, .. } => ErreurConfig::Syntaxe {
                path: path.to_path_buf(),
                source,
            },
            autre => autre,
        })
    }

    /// Analyse + validation d’un texte TOML.
    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurConfig> {
        let reglages: Reglages = toml::from_str(contenu).map_err(|e| ErreurConfig::Syntaxe {
            path: PathBuf::new(),
            source: e,
        })?;
        reglages.valider()?;
        Ok(reglages)
    }

    pub fn valider(&self) -> Result<(), ErreurConfig> {
        if !(HISTORIQUE_MIN..=HISTORIQUE_MAX).contains(&self.historique_max) {
            return Err(ErreurConfig::Validation {
                message: format!(
                    "historique_max = {} (attendu {HISTORIQUE_MIN}..={HISTORIQUE_MAX})",
                    self.historique_max
                ),
            });
        }
        if self.filtre_logs.trim().is_empty() {
            return Err(ErreurConfig::Validation {
                message: "filtre_logs vide".to_string(),
            });
        }
        Ok(())
    }
}
