//! handlers/manutencao_handler.rs
use actix_web::{web, HttpResponse};

use crate::handlers::scoped;
use crate::handlers::usuario_extractor::UsuarioAtual;
use crate::models::manutencao_model::{
    Manutencao, ManutencaoFormData, ManutencaoPatch, ManutencoesQuery,
};
use crate::services::atribuicao_service::AtribuicaoService;
use crate::services::query_filter::Criterios;
use crate::services::manutencao_service::ManutencaoStore;

/// GET /api/manutencoes
pub async fn list_manutencoes_endpoint(
    store: web::Data<ManutencaoStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    query: web::Query<ManutencoesQuery>,
) -> HttpResponse {
    let criterios = Criterios::from(query.into_inner());
    let listado = scoped::listar(store.get_ref(), &atribuicoes, &usuario.0, criterios).await;
    HttpResponse::Ok().json(listado)
}

/// POST /api/manutencoes
pub async fn create_manutencao_endpoint(
    store: web::Data<ManutencaoStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    body: web::Json<ManutencaoFormData>,
) -> HttpResponse {
    let data = body.into_inner();
    if !scoped::puede_acceder(&atribuicoes, &usuario.0, &data.empreendimento).await {
        return scoped::forbidden(&data.empreendimento);
    }

    let manutencao = store.create(data).await;
    HttpResponse::Created().json(manutencao)
}

/// PATCH /api/manutencoes/{id}
pub async fn update_manutencao_endpoint(
    store: web::Data<ManutencaoStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
    body: web::Json<ManutencaoPatch>,
) -> HttpResponse {
    let id = path.into_inner();
    let patch = body.into_inner();
    if let Some(empreendimento) = &patch.empreendimento {
        if !scoped::puede_acceder(&atribuicoes, &usuario.0, empreendimento).await {
            return scoped::forbidden(empreendimento);
        }
    }

    let visible = scoped::alcance::<Manutencao>(&atribuicoes, &usuario.0).await;
    match store.update_if(&id, &patch, visible).await {
        Some(manutencao) => HttpResponse::Ok().json(manutencao),
        None => scoped::not_found("Manutencao", &id),
    }
}

/// DELETE /api/manutencoes/{id}
pub async fn delete_manutencao_endpoint(
    store: web::Data<ManutencaoStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let visible = scoped::alcance::<Manutencao>(&atribuicoes, &usuario.0).await;
    if store.remove_if(&id, visible).await {
        HttpResponse::NoContent().finish()
    } else {
        scoped::not_found("Manutencao", &id)
    }
}

/// POST /api/manutencoes/{id}/concluir
pub async fn concluir_manutencao_endpoint(
    store: web::Data<ManutencaoStore>,
    atribuicoes: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let visible = scoped::alcance::<Manutencao>(&atribuicoes, &usuario.0).await;
    match store.complete_if(&id, visible).await {
        Some(manutencao) => {
            log::info!("Manutencao {} concluida por {}", id, usuario.0.id);
            HttpResponse::Ok().json(manutencao)
        }
        None => scoped::not_found("Manutencao", &id),
    }
}

/// POST /api/manutencoes/recarregar
pub async fn reload_manutencoes_endpoint(
    store: web::Data<ManutencaoStore>,
    _usuario: UsuarioAtual,
) -> HttpResponse {
    store.load().await;
    scoped::estado_carga(store.get_ref()).await
}
