//! handlers/contato_handler.rs
//! Los contactos no tienen empreendimento: todo usuario autenticado los ve.

use actix_web::{web, HttpResponse};

use crate::handlers::scoped;
use crate::handlers::usuario_extractor::UsuarioAtual;
use crate::models::contato_model::CamposContato;
use crate::models::listado_model::ListadoResponse;
use crate::services::contato_service::ContatoStore;
use crate::services::statistics::summarize;

/// GET /api/contatos
pub async fn list_contatos_endpoint(
    store: web::Data<ContatoStore>,
    _usuario: UsuarioAtual,
) -> HttpResponse {
    let snapshot = store.snapshot().await;
    HttpResponse::Ok().json(ListadoResponse {
        estatisticas: summarize(&snapshot.items),
        itens: snapshot.items,
        carregando: snapshot.loading,
        erro: snapshot.error,
        filtrado: false,
        opcoes: None,
    })
}

/// POST /api/contatos
pub async fn create_contato_endpoint(
    store: web::Data<ContatoStore>,
    _usuario: UsuarioAtual,
    body: web::Json<CamposContato>,
) -> HttpResponse {
    let contato = store.create(body.into_inner()).await;
    HttpResponse::Created().json(contato)
}

/// PATCH /api/contatos/{id}
pub async fn update_contato_endpoint(
    store: web::Data<ContatoStore>,
    _usuario: UsuarioAtual,
    path: web::Path<String>,
    body: web::Json<CamposContato>,
) -> HttpResponse {
    let id = path.into_inner();
    match store.update(&id, &body).await {
        Some(contato) => HttpResponse::Ok().json(contato),
        None => scoped::not_found("Contato", &id),
    }
}

/// DELETE /api/contatos/{id}
pub async fn delete_contato_endpoint(
    store: web::Data<ContatoStore>,
    _usuario: UsuarioAtual,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    if store.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        scoped::not_found("Contato", &id)
    }
}

/// POST /api/contatos/recarregar
pub async fn reload_contatos_endpoint(
    store: web::Data<ContatoStore>,
    _usuario: UsuarioAtual,
) -> HttpResponse {
    store.load().await;
    scoped::estado_carga(store.get_ref()).await
}
