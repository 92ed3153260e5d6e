//! services/atribuicao_service.rs
//! Atribuições gerente -> empreendimentos, en el slot "atribuicoes".

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::models::usuario_model::Atribuicao;
use crate::services::storage_service::StoragePort;

pub const SLOT: &str = "atribuicoes";

#[derive(Debug)]
struct AtribuicaoState {
    items: Vec<Atribuicao>,
    loading: bool,
    error: Option<String>,
}

#[derive(Clone)]
pub struct AtribuicaoService {
    storage: Arc<dyn StoragePort>,
    state: Arc<Mutex<AtribuicaoState>>,
}

impl AtribuicaoService {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        AtribuicaoService {
            storage,
            state: Arc::new(Mutex::new(AtribuicaoState {
                items: Vec::new(),
                loading: true,
                error: None,
            })),
        }
    }

    /// Igual que los stores de entidades: un slot ilegible queda vacío
    /// y el error queda marcado hasta el próximo `load()`.
    pub async fn load(&self) {
        let mut state = self.state.lock().await;
        state.loading = true;
        state.error = None;

        match self.storage.get(SLOT).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => state.items = items,
                Err(e) => {
                    log::error!("Error al parsear '{}': {:?}", SLOT, e);
                    state.items = Vec::new();
                    state.error = Some(format!("Erro ao carregar {}", SLOT));
                }
            },
            Ok(None) => state.items = Vec::new(),
            Err(e) => {
                log::error!("Error al leer '{}': {:?}", SLOT, e);
                state.items = Vec::new();
                state.error = Some(format!("Erro ao carregar {}", SLOT));
            }
        }

        state.loading = false;
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    /// Mientras carga devuelve `None`; los gerentes no ven nada hasta entonces.
    pub async fn list(&self) -> Option<Vec<Atribuicao>> {
        let state = self.state.lock().await;
        if state.loading {
            None
        } else {
            Some(state.items.clone())
        }
    }

    pub async fn find(&self, gerente_id: &str) -> Option<Atribuicao> {
        let state = self.state.lock().await;
        state
            .items
            .iter()
            .find(|a| a.gerente_id == gerente_id)
            .cloned()
    }

    /// Reemplaza (o crea) la atribuição de un gerente. Primero se escribe
    /// el slot; la lista en memoria solo cambia si la escritura salió bien.
    pub async fn definir(
        &self,
        gerente_id: &str,
        empreendimentos: Vec<String>,
    ) -> Result<Atribuicao> {
        let mut state = self.state.lock().await;

        let atribuicao = Atribuicao {
            gerente_id: gerente_id.to_string(),
            empreendimentos,
        };
        let mut items = state.items.clone();
        match items.iter_mut().find(|a| a.gerente_id == gerente_id) {
            Some(existing) => *existing = atribuicao.clone(),
            None => items.push(atribuicao.clone()),
        }

        let json = serde_json::to_string(&items)?;
        self.storage
            .set(SLOT, &json)
            .await
            .context("Fallo al guardar atribuições")?;

        state.items = items;
        Ok(atribuicao)
    }
}
