//! handlers/scoped.rs
//! Lógica compartida por los endpoints de entidades con empreendimento:
//! filtro de permisos -> filtro de búsqueda -> estadísticas.

use actix_web::HttpResponse;

use crate::models::listado_model::ListadoResponse;
use crate::models::usuario_model::{Atribuicao, Usuario};
use crate::services::atribuicao_service::AtribuicaoService;
use crate::services::entity_store::{Entity, EntityStore};
use crate::services::permission_filter::{self, Scoped};
use crate::services::query_filter::{self, Criterios, Searchable};
use crate::services::statistics::{summarize, Summarize};

/// Mientras las atribuições cargan, un gerente no ve nada.
async fn atribuicoes_actuales(service: &AtribuicaoService) -> (Vec<Atribuicao>, bool) {
    match service.list().await {
        Some(items) => (items, false),
        None => (Vec::new(), true),
    }
}

pub async fn listar<E>(
    store: &EntityStore<E>,
    atribuicoes: &AtribuicaoService,
    usuario: &Usuario,
    criterios: Criterios,
) -> ListadoResponse<E, E::Summary>
where
    E: Entity + Searchable + Summarize,
{
    let snapshot = store.snapshot().await;
    let erro_atribuicoes = atribuicoes.error().await;
    let (atribuicoes, carregando_atribuicoes) = atribuicoes_actuales(atribuicoes).await;

    let permitidos = permission_filter::visible(&snapshot.items, usuario, &atribuicoes);

    ListadoResponse {
        itens: query_filter::apply(&permitidos, &criterios),
        filtrado: !criterios.is_empty(),
        carregando: snapshot.loading || (carregando_atribuicoes && !usuario.is_admin()),
        erro: snapshot.error.or(erro_atribuicoes),
        estatisticas: summarize(&permitidos),
        opcoes: Some(query_filter::opcoes(&permitidos)),
    }
}

pub async fn puede_acceder(
    atribuicoes: &AtribuicaoService,
    usuario: &Usuario,
    empreendimento: &str,
) -> bool {
    let (atribuicoes, _) = atribuicoes_actuales(atribuicoes).await;
    permission_filter::allows(usuario, &atribuicoes, empreendimento)
}

/// Predicado de visibilidad para las mutaciones. Las atribuições se leen
/// una vez; el store lo evalúa con su lock tomado.
pub async fn alcance<E: Scoped>(
    atribuicoes: &AtribuicaoService,
    usuario: &Usuario,
) -> impl Fn(&E) -> bool {
    let (atribuicoes, _) = atribuicoes_actuales(atribuicoes).await;
    let usuario = usuario.clone();
    move |record: &E| permission_filter::allows(&usuario, &atribuicoes, record.empreendimento())
}

pub fn not_found(entidad: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("{} not found", entidad),
        "details": id
    }))
}

pub fn forbidden(empreendimento: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(serde_json::json!({
        "error": "Empreendimento no asignado",
        "details": empreendimento
    }))
}

/// Estado del store después de un `load()`.
pub async fn estado_carga<E: Entity + Summarize>(store: &EntityStore<E>) -> HttpResponse {
    let snapshot = store.snapshot().await;
    HttpResponse::Ok().json(serde_json::json!({
        "carregando": snapshot.loading,
        "erro": snapshot.error,
        "estatisticas": store.statistics().await
    }))
}
