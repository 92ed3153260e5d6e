//! handlers/visita_handler.rs
use actix_web::{web, HttpResponse};

use crate::handlers::scoped;
use crate::handlers::usuario_extractor::UsuarioAtual;
use crate::models::visita_model::{Visita, VisitaFormData, VisitaPatch, VisitasQuery};
use crate::services::atribuicao_service::AtribuicaoService;
use crate::services::query_filter::Criterios;
use crate::services::visita_service::VisitaStore;

/// GET /api/visitas
pub async fn list_visitas_endpoint(
    store: web::Data<VisitaStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    query: web::Query<VisitasQuery>,
) -> HttpResponse {
    let criterios = Criterios::from(query.into_inner());
    let listado = scoped::listar(store.get_ref(), &atribuicoes, &usuario.0, criterios).await;
    HttpResponse::Ok().json(listado)
}

/// POST /api/visitas
pub async fn create_visita_endpoint(
    store: web::Data<VisitaStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    body: web::Json<VisitaFormData>,
) -> HttpResponse {
    let data = body.into_inner();
    if !scoped::puede_acceder(&atribuicoes, &usuario.0, &data.empreendimento).await {
        return scoped::forbidden(&data.empreendimento);
    }

    let visita = store.create(data).await;
    log::info!("Visita {} agendada por {}", visita.id, usuario.0.id);
    HttpResponse::Created().json(visita)
}

/// PATCH /api/visitas/{id}
pub async fn update_visita_endpoint(
    store: web::Data<VisitaStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
    body: web::Json<VisitaPatch>,
) -> HttpResponse {
    let id = path.into_inner();
    let patch = body.into_inner();
    if let Some(empreendimento) = &patch.empreendimento {
        if !scoped::puede_acceder(&atribuicoes, &usuario.0, empreendimento).await {
            return scoped::forbidden(empreendimento);
        }
    }

    let visible = scoped::alcance::<Visita>(&atribuicoes, &usuario.0).await;
    match store.update_if(&id, &patch, visible).await {
        Some(visita) => HttpResponse::Ok().json(visita),
        None => scoped::not_found("Visita", &id),
    }
}

/// DELETE /api/visitas/{id}
pub async fn delete_visita_endpoint(
    store: web::Data<VisitaStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let visible = scoped::alcance::<Visita>(&atribuicoes, &usuario.0).await;
    if store.remove_if(&id, visible).await {
        HttpResponse::NoContent().finish()
    } else {
        scoped::not_found("Visita", &id)
    }
}

/// POST /api/visitas/{id}/realizar
pub async fn realizar_visita_endpoint(
    store: web::Data<VisitaStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let visible = scoped::alcance::<Visita>(&atribuicoes, &usuario.0).await;
    match store.complete_if(&id, visible).await {
        Some(visita) => HttpResponse::Ok().json(visita),
        None => scoped::not_found("Visita", &id),
    }
}

/// POST /api/visitas/recarregar
pub async fn reload_visitas_endpoint(
    store: web::Data<VisitaStore>,
    _usuario: UsuarioAtual,
) -> HttpResponse {
    store.load().await;
    scoped::estado_carga(store.get_ref()).await
}
