//! handlers/atribuicao_handler.rs
use actix_web::{web, HttpResponse};

use crate::handlers::usuario_extractor::UsuarioAtual;
use crate::models::usuario_model::DefinirAtribuicaoRequest;
use crate::services::atribuicao_service::AtribuicaoService;

/// GET /api/atribuicoes
/// El administrador ve todas; un gerente solo la suya.
pub async fn list_atribuicoes_endpoint(
    service: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
) -> HttpResponse {
    let usuario = usuario.0;

    let visibles: Vec<_> = if usuario.is_admin() {
        service.list().await.unwrap_or_default()
    } else {
        service.find(&usuario.id).await.into_iter().collect()
    };

    HttpResponse::Ok().json(visibles)
}

/// PUT /api/atribuicoes/{gerente_id}
pub async fn definir_atribuicao_endpoint(
    service: web::Data<AtribuicaoService>,
    usuario: UsuarioAtual,
    path: web::Path<String>,
    body: web::Json<DefinirAtribuicaoRequest>,
) -> HttpResponse {
    if !usuario.0.is_admin() {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Solo un Administrador puede definir atribuições"
        }));
    }

    let gerente_id = path.into_inner();
    match service
        .definir(&gerente_id, body.into_inner().empreendimentos)
        .await
    {
        Ok(atribuicao) => HttpResponse::Ok().json(atribuicao),
        Err(e) => {
            log::error!("Error guardando atribuição de {}: {:?}", gerente_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error",
                "details": format!("{:?}", e)
            }))
        }
    }
}
