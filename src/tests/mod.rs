//! tests/mod.rs
//! Helpers compartidos por las pruebas.

mod filter_tests;
mod storage_tests;

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::services::entity_store::Clock;
use crate::services::storage_service::{StorageError, StoragePort};

pub fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fecha válida")
}

/// Reloj que arranca en `base` y avanza los días que diga el contador.
pub fn reloj(base: NaiveDate) -> (Clock, Arc<AtomicU64>) {
    let dias = Arc::new(AtomicU64::new(0));
    let contador = dias.clone();
    let clock: Clock = Arc::new(move || {
        base.checked_add_days(Days::new(contador.load(Ordering::SeqCst)))
            .expect("fecha en rango")
    });
    (clock, dias)
}

/// Backend que siempre falla, para los caminos de error.
pub struct FailingStorage;

#[async_trait]
impl StoragePort for FailingStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io(io::Error::new(io::ErrorKind::Other, "disco no disponible")))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(io::Error::new(io::ErrorKind::Other, "disco no disponible")))
    }
}
