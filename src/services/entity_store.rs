//! services/entity_store.rs
//! Store genérico en memoria, reflejado en un slot del almacenamiento durable.
//!
//! Cada mutación actualiza la colección en memoria y luego sobreescribe el
//! slot completo. Las fallas de almacenamiento no se propagan: quedan en el
//! log y en `erro`, que la capa HTTP expone tal cual.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::services::statistics::{summarize, Summarize};
use crate::services::storage_service::StoragePort;

/// Fecha "de hoy" inyectable (UTC por defecto).
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Campos del formulario de alta.
    type FormData: Send;
    /// Actualización parcial.
    type Patch: Send + Sync;

    /// Nombre del slot durable.
    const SLOT: &'static str;

    fn id(&self) -> &str;

    /// Arma el registro completo: id, fechas y status inicial.
    fn build(id: String, today: NaiveDate, data: Self::FormData) -> Self;

    /// Merge superficial; nunca toca `id` ni `criadoEm`.
    fn merge(&mut self, patch: &Self::Patch, today: NaiveDate);
}

pub trait Completable: Entity {
    /// Transición one-way al status terminal de "hecho".
    fn complete(&mut self, today: NaiveDate);
}

#[derive(Debug, Clone)]
pub struct StoreSnapshot<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
struct StoreState<E> {
    items: Vec<E>,
    loading: bool,
    error: Option<String>,
}

pub struct EntityStore<E: Entity> {
    storage: Arc<dyn StoragePort>,
    clock: Clock,
    state: Arc<Mutex<StoreState<E>>>,
}

impl<E: Entity> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            clock: self.clock.clone(),
            state: self.state.clone(),
        }
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self::with_clock(storage, Arc::new(utc_today))
    }

    pub fn with_clock(storage: Arc<dyn StoragePort>, clock: Clock) -> Self {
        EntityStore {
            storage,
            clock,
            // Arranca "cargando" hasta el primer load()
            state: Arc::new(Mutex::new(StoreState {
                items: Vec::new(),
                loading: true,
                error: None,
            })),
        }
    }

    /// Lee el slot durable. Si no existe o no se puede parsear, la
    /// colección queda vacía; en el segundo caso además se marca el error.
    pub async fn load(&self) {
        let mut state = self.state.lock().await;
        state.loading = true;
        state.error = None;

        match self.storage.get(E::SLOT).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<E>>(&raw) {
                Ok(items) => {
                    log::info!("Cargados {} registros de '{}'", items.len(), E::SLOT);
                    state.items = items;
                }
                Err(e) => {
                    log::error!("Error al parsear '{}': {:?}", E::SLOT, e);
                    state.items = Vec::new();
                    state.error = Some(format!("Erro ao carregar {}", E::SLOT));
                }
            },
            Ok(None) => {
                state.items = Vec::new();
            }
            Err(e) => {
                log::error!("Error al leer '{}': {:?}", E::SLOT, e);
                state.items = Vec::new();
                state.error = Some(format!("Erro ao carregar {}", E::SLOT));
            }
        }

        state.loading = false;
    }

    pub async fn snapshot(&self) -> StoreSnapshot<E> {
        let state = self.state.lock().await;
        StoreSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn find(&self, id: &str) -> Option<E> {
        let state = self.state.lock().await;
        state.items.iter().find(|e| e.id() == id).cloned()
    }

    pub async fn create(&self, data: E::FormData) -> E {
        let record = E::build(Uuid::new_v4().to_string(), (self.clock)(), data);

        let mut state = self.state.lock().await;
        state.items.push(record.clone());
        log::debug!("Creado {} en '{}'", record.id(), E::SLOT);
        self.persist(&mut state).await;

        record
    }

    /// Devuelve `None` si el id no existe; el slot se reescribe igual.
    pub async fn update(&self, id: &str, patch: &E::Patch) -> Option<E> {
        self.update_if(id, patch, |_| true).await
    }

    /// Como `update`, pero solo toca el registro si `visible` lo acepta.
    /// El predicado se evalúa con el lock tomado.
    pub async fn update_if<F>(&self, id: &str, patch: &E::Patch, visible: F) -> Option<E>
    where
        F: Fn(&E) -> bool,
    {
        let today = (self.clock)();
        let mut state = self.state.lock().await;

        let updated = state
            .items
            .iter_mut()
            .find(|e| e.id() == id && visible(&**e))
            .map(|e| {
                e.merge(patch, today);
                e.clone()
            });
        log::debug!("Actualizado {} en '{}' (existe: {})", id, E::SLOT, updated.is_some());
        self.persist(&mut state).await;

        updated
    }

    /// Devuelve `true` si había un registro con ese id.
    pub async fn remove(&self, id: &str) -> bool {
        self.remove_if(id, |_| true).await
    }

    pub async fn remove_if<F>(&self, id: &str, visible: F) -> bool
    where
        F: Fn(&E) -> bool,
    {
        let mut state = self.state.lock().await;

        let before = state.items.len();
        state.items.retain(|e| !(e.id() == id && visible(e)));
        let removed = state.items.len() != before;
        log::debug!("Eliminado {} de '{}' (existía: {})", id, E::SLOT, removed);
        self.persist(&mut state).await;

        removed
    }

    async fn persist(&self, state: &mut StoreState<E>) {
        let json = match serde_json::to_string(&state.items) {
            Ok(json) => json,
            Err(e) => {
                log::error!("No se pudo serializar '{}': {:?}", E::SLOT, e);
                state.error = Some(format!("Erro ao salvar {}", E::SLOT));
                return;
            }
        };

        if let Err(e) = self.storage.set(E::SLOT, &json).await {
            log::error!("No se pudo escribir '{}': {:?}", E::SLOT, e);
            state.error = Some(format!("Erro ao salvar {}", E::SLOT));
        }
    }
}

impl<E: Completable> EntityStore<E> {
    pub async fn complete(&self, id: &str) -> Option<E> {
        self.complete_if(id, |_| true).await
    }

    pub async fn complete_if<F>(&self, id: &str, visible: F) -> Option<E>
    where
        F: Fn(&E) -> bool,
    {
        let today = (self.clock)();
        let mut state = self.state.lock().await;

        let completed = state
            .items
            .iter_mut()
            .find(|e| e.id() == id && visible(&**e))
            .map(|e| {
                e.complete(today);
                e.clone()
            });
        self.persist(&mut state).await;

        completed
    }
}

impl<E: Entity + Summarize> EntityStore<E> {
    /// Conteos sobre la colección en memoria completa (sin filtro de permisos).
    pub async fn statistics(&self) -> E::Summary {
        let state = self.state.lock().await;
        summarize(&state.items)
    }
}
