//! services/storage_service.rs
//! Puerto de almacenamiento durable: slots con nombre que guardan
//! el arreglo JSON completo de cada tipo de entidad.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tokio::sync::Mutex;

use crate::config::crm_config::{CrmConfig, StorageBackend};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("error de base de datos: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("payload inválido: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("archivo de slots ilegible: {0}")]
    Corrupt(String),
}

/// get/set por clave. Cada `set` sobreescribe el slot completo.
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ----------------------------------------------------------------
// SQLite
// ----------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    db_pool: Pool<Sqlite>,
}

impl SqliteStorage {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        SqliteStorage { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo en migraciones de 'storage_slots'")?;
        Ok(())
    }
}

#[async_trait]
impl StoragePort for SqliteStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String,)> =
            sqlx::query_as(r#"SELECT value FROM storage_slots WHERE key = ?1"#)
                .bind(key)
                .fetch_optional(&self.db_pool)
                .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.db_pool)
        .await?;

        Ok(())
    }
}

// ----------------------------------------------------------------
// Archivo JSON
// ----------------------------------------------------------------

/// Todos los slots en un solo archivo JSON. Se escribe a un temporal
/// y luego se renombra, así el archivo nunca queda a medias.
///
/// Si el archivo existente no se puede parsear, el backend arranca vacío
/// y queda "corrupto": todo `get`/`set` devuelve error y el archivo no
/// se toca hasta que alguien lo repare.
pub struct FileStorage {
    path: PathBuf,
    inner: Mutex<BTreeMap<String, String>>,
    corrupt: Option<String>,
}

impl FileStorage {
    pub async fn load_or_init(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut corrupt = None;
        let slots: BTreeMap<String, String> = if tokio::fs::try_exists(&path).await? {
            let data = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&data).unwrap_or_else(|e| {
                log::error!("Archivo de slots {} ilegible: {:?}", path.display(), e);
                corrupt = Some(format!("{}: {}", path.display(), e));
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            inner: Mutex::new(slots),
            corrupt,
        })
    }

    fn check(&self) -> Result<(), StorageError> {
        match &self.corrupt {
            Some(detalle) => Err(StorageError::Corrupt(detalle.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StoragePort for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.inner.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        let mut guard = self.inner.lock().await;
        guard.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&*guard)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

// ----------------------------------------------------------------
// Memoria
// ----------------------------------------------------------------

/// Sin persistencia real; para tests y modo efímero.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Construye el backend indicado en la configuración.
pub async fn open_storage(config: &CrmConfig) -> Result<Arc<dyn StoragePort>> {
    match config.storage {
        StorageBackend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir).with_context(|| {
                format!("No se pudo crear directorio '{}'", config.data_dir.display())
            })?;
            let db_path = config.data_dir.join("crm.db");
            let db_url = format!("sqlite:{}?mode=rwc", db_path.to_string_lossy());

            log::info!("Conectando a SQLite en {}", db_url);
            let db_pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&db_url)
                .await
                .context("No se pudo conectar a la base de datos SQLite.")?;

            let storage = SqliteStorage::new(db_pool);
            storage.run_migrations().await?;
            Ok(Arc::new(storage))
        }
        StorageBackend::File => {
            let path = config.data_dir.join("crm_slots.json");
            log::info!("Usando almacenamiento en archivo {}", path.display());
            let storage = FileStorage::load_or_init(path)
                .await
                .context("No se pudo abrir el archivo de slots")?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => {
            log::warn!("Almacenamiento en memoria: los datos se pierden al reiniciar");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
