//! services/permission_filter.rs
//! Subconjunto visible según el cargo del usuario.

use crate::models::usuario_model::{Atribuicao, Usuario};

/// Registros que pertenecen a un empreendimento.
pub trait Scoped {
    fn empreendimento(&self) -> &str;
}

/// Administradores ven todo. Un gerente ve solo los registros de los
/// empreendimentos de su atribuição; sin atribuição no ve nada.
pub fn visible<E: Scoped + Clone>(
    items: &[E],
    usuario: &Usuario,
    atribuicoes: &[Atribuicao],
) -> Vec<E> {
    if usuario.is_admin() {
        return items.to_vec();
    }

    match atribuicoes.iter().find(|a| a.gerente_id == usuario.id) {
        Some(atribuicao) => items
            .iter()
            .filter(|item| can_access(atribuicao, item.empreendimento()))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Misma regla que `visible`, para un empreendimento suelto.
pub fn allows(usuario: &Usuario, atribuicoes: &[Atribuicao], empreendimento: &str) -> bool {
    if usuario.is_admin() {
        return true;
    }

    atribuicoes
        .iter()
        .find(|a| a.gerente_id == usuario.id)
        .map(|a| can_access(a, empreendimento))
        .unwrap_or(false)
}

fn can_access(atribuicao: &Atribuicao, empreendimento: &str) -> bool {
    atribuicao.empreendimentos.iter().any(|e| e == empreendimento)
}
