//! tests/storage_tests.rs
//! Backends del puerto de almacenamiento y configuración.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sqlx::sqlite::SqlitePoolOptions;

    use crate::config::crm_config::{CrmConfig, StorageBackend};
    use crate::services::storage_service::{
        open_storage, FileStorage, MemoryStorage, SqliteStorage, StorageError, StoragePort,
    };
    use crate::services::visita_service::VisitaStore;

    async fn sqlite_en_memoria() -> SqliteStorage {
        // Una sola conexión: cada conexión a :memory: es otra base
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open sqlite");
        let storage = SqliteStorage::new(pool);
        storage.run_migrations().await.expect("migraciones");
        storage
    }

    #[actix_rt::test]
    async fn test_memory_storage_overwrites_slot() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("visitas").await.unwrap(), None);

        storage.set("visitas", "[1]").await.unwrap();
        storage.set("visitas", "[2]").await.unwrap();
        assert_eq!(storage.get("visitas").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(storage.get("manutencoes").await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn test_sqlite_storage_round_trip() {
        let storage = sqlite_en_memoria().await;
        assert_eq!(storage.get("visitas").await.unwrap(), None);

        storage.set("visitas", r#"[{"id":"1"}]"#).await.unwrap();
        storage.set("visitas", "[]").await.unwrap();
        storage.set("contatos", "[]").await.unwrap();

        assert_eq!(storage.get("visitas").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get("contatos").await.unwrap().as_deref(), Some("[]"));
    }

    #[actix_rt::test]
    async fn test_sqlite_errors_map_to_backend() {
        // sin migraciones no existe la tabla
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open sqlite");
        let storage = SqliteStorage::new(pool);

        assert!(matches!(
            storage.get("visitas").await,
            Err(StorageError::Backend(_))
        ));
    }

    #[actix_rt::test]
    async fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("crm_slots.json");

        let storage = FileStorage::load_or_init(path.clone()).await.unwrap();
        storage.set("manutencoes", "[]").await.unwrap();
        storage.set("visitas", "[42]").await.unwrap();
        drop(storage);

        let reopened = FileStorage::load_or_init(path.clone()).await.unwrap();
        assert_eq!(reopened.get("visitas").await.unwrap().as_deref(), Some("[42]"));
        assert_eq!(reopened.get("manutencoes").await.unwrap().as_deref(), Some("[]"));
        assert!(!path.with_extension("json.tmp").exists(), "quedó el temporal");
    }

    #[actix_rt::test]
    async fn test_corrupt_file_degrades_instead_of_failing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = CrmConfig {
            storage: StorageBackend::File,
            data_dir: dir.path().to_path_buf(),
            ..CrmConfig::default()
        };
        let path = dir.path().join("crm_slots.json");
        std::fs::write(&path, "{not json").unwrap();

        // el arranque no se cae
        let storage = open_storage(&config).await.expect("storage abierto");
        assert!(matches!(
            storage.get("visitas").await,
            Err(StorageError::Corrupt(_))
        ));
        assert!(storage.set("visitas", "[]").await.is_err());
        // el archivo dañado queda intacto
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");

        let store = VisitaStore::new(storage);
        store.load().await;
        let snapshot = store.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.items.is_empty());
        assert!(snapshot.error.is_some());
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let defaults = CrmConfig::from_lookup(|_| None);
        assert_eq!(defaults.host, "0.0.0.0");
        assert_eq!(defaults.port, 5022);
        assert_eq!(defaults.storage, StorageBackend::Sqlite);
        assert_eq!(defaults.data_dir, PathBuf::from("data"));

        let config = CrmConfig::from_lookup(|key| match key {
            "CRM_PORT" => Some("8080".to_string()),
            "CRM_STORAGE" => Some("File".to_string()),
            "CRM_DATA_DIR" => Some("/var/lib/crm".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/crm"));
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = CrmConfig::from_lookup(|key| match key {
            "CRM_PORT" => Some("no-es-puerto".to_string()),
            "CRM_STORAGE" => Some("redis".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 5022);
        assert_eq!(config.storage, StorageBackend::Sqlite);
    }
}
