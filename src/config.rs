//! Configuration Module
//!
//! Environment-driven settings with sensible defaults. Malformed values fall
//! back to the default with a warning instead of failing startup.
//!
//! ## Variables
//! - `PORT` — listen port (default 3000).
//! - `BIBLIA_BIND` — bind address (default 127.0.0.1).
//! - `BIBLIA_DATA_DIR` — directory holding the translation files (default `data`).
//! - `BIBLIA_TRANSLATIONS` — comma-separated translation codes (default
//!   `nvi,acf`); code `x` loads from `<data_dir>/pt_x.json`.
//! - `BIBLIA_DEFAULT_TRANSLATION` — translation served by `GET /books`
//!   (default `acf`).
//! - `BIBLIA_EMPTY_VERSE_NOT_FOUND` — legacy policy reporting empty verse
//!   texts as not found (default `true`).

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::loader::TranslationSource;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub translations: Vec<String>,
    pub default_translation: String,
    pub empty_verse_is_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            data_dir: PathBuf::from("data"),
            translations: vec!["nvi".to_string(), "acf".to_string()],
            default_translation: "acf".to_string(),
            empty_verse_is_missing: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(port) = env::var("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value {:?}", port),
            }
        }

        if let Ok(bind) = env::var("BIBLIA_BIND") {
            match bind.parse() {
                Ok(bind) => config.bind = bind,
                Err(_) => tracing::warn!("Ignoring invalid BIBLIA_BIND value {:?}", bind),
            }
        }

        if let Ok(dir) = env::var("BIBLIA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(list) = env::var("BIBLIA_TRANSLATIONS") {
            let codes: Vec<String> = list
                .split(',')
                .map(|code| code.trim().to_lowercase())
                .filter(|code| !code.is_empty())
                .collect();
            if codes.is_empty() {
                tracing::warn!("Ignoring empty BIBLIA_TRANSLATIONS value");
            } else {
                config.translations = codes;
            }
        }

        if let Ok(code) = env::var("BIBLIA_DEFAULT_TRANSLATION") {
            config.default_translation = code.trim().to_lowercase();
        }

        if let Ok(flag) = env::var("BIBLIA_EMPTY_VERSE_NOT_FOUND") {
            match flag.parse() {
                Ok(flag) => config.empty_verse_is_missing = flag,
                Err(_) => {
                    tracing::warn!("Ignoring invalid BIBLIA_EMPTY_VERSE_NOT_FOUND value {:?}", flag)
                }
            }
        }

        config
    }

    /// The file each configured translation loads from.
    pub fn sources(&self) -> Vec<TranslationSource> {
        self.translations
            .iter()
            .map(|code| TranslationSource {
                code: code.clone(),
                path: self.data_dir.join(format!("pt_{}.json", code)),
            })
            .collect()
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
