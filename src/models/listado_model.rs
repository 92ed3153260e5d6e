//! models/listado_model.rs
//! Respuesta común de los endpoints de listado.

use serde::Serialize;

/// Valores distintos para poblar los selects de filtro,
/// en el orden en que aparecen por primera vez.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpcoesFiltro {
    pub empreendimentos: Vec<String>,
    pub responsaveis: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListadoResponse<E, S> {
    pub itens: Vec<E>,
    pub carregando: bool,
    pub erro: Option<String>,
    /// Hay algún filtro activo (cambia el mensaje de lista vacía).
    pub filtrado: bool,
    pub estatisticas: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcoes: Option<OpcoesFiltro>,
}
