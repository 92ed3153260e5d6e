//! models/contato_model.rs
//! Contactos con campos libres del formulario.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claves que administra el store; nunca vienen del formulario.
pub const CAMPOS_RESERVADOS: [&str; 3] = ["id", "criadoEm", "atualizadoEm"];

pub type CamposContato = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contato {
    pub id: String,
    pub criado_em: NaiveDate,
    pub atualizado_em: NaiveDate,
    #[serde(flatten)]
    pub campos: CamposContato,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasContatos {
    pub total: usize,
}
