//! services/query_filter.rs
//! Filtros de búsqueda de las pantallas de listado.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::listado_model::OpcoesFiltro;
use crate::services::permission_filter::Scoped;

pub trait Searchable: Scoped {
    /// Los dos campos donde se busca el texto libre.
    fn search_fields(&self) -> [&str; 2];
    /// Corretor o gerente, según la entidad.
    fn responsavel(&self) -> &str;
    fn status(&self) -> &str;
    /// Fecha contra la que se compara el filtro `data`.
    fn data(&self) -> NaiveDate;
}

/// Un criterio vacío o ausente siempre coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criterios {
    pub busca: Option<String>,
    pub empreendimento: Option<String>,
    pub responsavel: Option<String>,
    pub status: Option<String>,
    pub data: Option<String>,
}

impl Criterios {
    pub fn is_empty(&self) -> bool {
        [
            &self.busca,
            &self.empreendimento,
            &self.responsavel,
            &self.status,
            &self.data,
        ]
        .iter()
        .all(|c| non_empty(c).is_none())
    }

    pub fn matches<E: Searchable>(&self, item: &E) -> bool {
        let busca_ok = match non_empty(&self.busca) {
            Some(term) => {
                let term = term.to_lowercase();
                item.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
            None => true,
        };

        busca_ok
            && exact(&self.empreendimento, item.empreendimento())
            && exact(&self.responsavel, item.responsavel())
            && exact(&self.status, item.status())
            && non_empty(&self.data)
                .map(|d| item.data().format("%Y-%m-%d").to_string() == d)
                .unwrap_or(true)
    }
}

// Los selects del formulario mandan "" cuando no hay filtro
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn exact(criterio: &Option<String>, value: &str) -> bool {
    non_empty(criterio).map(|c| c == value).unwrap_or(true)
}

pub fn apply<E: Searchable + Clone>(items: &[E], criterios: &Criterios) -> Vec<E> {
    items
        .iter()
        .filter(|item| criterios.matches(*item))
        .cloned()
        .collect()
}

/// Valores distintos de empreendimento y responsável, en orden de aparición.
pub fn opcoes<E: Searchable>(items: &[E]) -> OpcoesFiltro {
    let mut opcoes = OpcoesFiltro::default();
    let mut vistos_emp = HashSet::new();
    let mut vistos_resp = HashSet::new();

    for item in items {
        if vistos_emp.insert(item.empreendimento()) {
            opcoes.empreendimentos.push(item.empreendimento().to_string());
        }
        if vistos_resp.insert(item.responsavel()) {
            opcoes.responsaveis.push(item.responsavel().to_string());
        }
    }

    opcoes
}
