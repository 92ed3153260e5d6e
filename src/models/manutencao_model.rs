use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusManutencao {
    Pendente,
    Concluida,
}

impl StatusManutencao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusManutencao::Pendente => "pendente",
            StatusManutencao::Concluida => "concluida",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manutencao {
    pub id: String,
    pub descricao: String,
    pub empreendimento: String,
    pub gerente: String,
    pub status: StatusManutencao,
    pub criado_em: NaiveDate,
    /// Presente si y solo si `status == Concluida`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concluido_em: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManutencaoFormData {
    pub descricao: String,
    pub empreendimento: String,
    pub gerente: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManutencaoPatch {
    pub descricao: Option<String>,
    pub empreendimento: Option<String>,
    pub gerente: Option<String>,
    pub status: Option<StatusManutencao>,
    pub concluido_em: Option<NaiveDate>,
}

/// `data` se compara contra `criadoEm`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManutencoesQuery {
    pub busca: Option<String>,
    pub empreendimento: Option<String>,
    pub gerente: Option<String>,
    pub status: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstatisticasManutencoes {
    pub total: usize,
    pub pendentes: usize,
    pub concluidas: usize,
}
