//! config/crm_config.rs
//! Configuración global del servicio (host, puerto, backend de almacenamiento).
//! Se lee del entorno después de cargar el `.env`.

use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("backend de almacenamiento desconocido: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub data_dir: PathBuf, // aquí van crm.db o crm_slots.json
}

impl Default for CrmConfig {
    fn default() -> Self {
        CrmConfig {
            host: "0.0.0.0".to_string(),
            port: 5022,
            storage: StorageBackend::Sqlite,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl CrmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables inyectable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CrmConfig::default();

        if let Some(host) = lookup("CRM_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("CRM_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => log::warn!(
                    "CRM_PORT inválido ({}), usando {}",
                    port,
                    config.port
                ),
            }
        }

        if let Some(storage) = lookup("CRM_STORAGE") {
            match storage.parse() {
                Ok(s) => config.storage = s,
                Err(e) => log::warn!("{}; usando sqlite", e),
            }
        }

        if let Some(dir) = lookup("CRM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}
