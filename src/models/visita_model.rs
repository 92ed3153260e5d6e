//! models/visita_model.rs
//! Visitas a empreendimentos agendadas por los corretores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVisita {
    Agendada,
    Realizada,
    Cancelada,
}

impl StatusVisita {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVisita::Agendada => "agendada",
            StatusVisita::Realizada => "realizada",
            StatusVisita::Cancelada => "cancelada",
        }
    }

    /// Transiciones permitidas por actualización directa: solo
    /// agendada -> cancelada. A "realizada" se llega únicamente con `complete`.
    pub fn can_transition_to(&self, next: StatusVisita) -> bool {
        *self == next || (*self == StatusVisita::Agendada && next == StatusVisita::Cancelada)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visita {
    pub id: String,
    pub corretor: String,
    pub empreendimento: String,
    pub data: NaiveDate,
    pub horario: String, // "14:30"
    pub status: StatusVisita,
    pub criado_em: NaiveDate,
}

/// Campos que llegan del formulario de agendamiento.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitaFormData {
    pub corretor: String,
    pub empreendimento: String,
    pub data: NaiveDate,
    pub horario: String,
}

/// Actualización parcial: lo que venga en `None` se conserva.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitaPatch {
    pub corretor: Option<String>,
    pub empreendimento: Option<String>,
    pub data: Option<NaiveDate>,
    pub horario: Option<String>,
    pub status: Option<StatusVisita>,
}

/// Filtros de la pantalla de visitas (query string).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitasQuery {
    pub busca: Option<String>,
    pub empreendimento: Option<String>,
    pub corretor: Option<String>,
    pub status: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasVisitas {
    pub total: usize,
    pub agendadas: usize,
    pub realizadas: usize,
    pub canceladas: usize,
}
