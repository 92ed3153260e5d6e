//! app.rs
use crate::handlers::{atribuicao_handler, contato_handler, manutencao_handler, visita_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/visitas")
                    .route("", web::get().to(visita_handler::list_visitas_endpoint))
                    .route("", web::post().to(visita_handler::create_visita_endpoint))
                    .route(
                        "/recarregar",
                        web::post().to(visita_handler::reload_visitas_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::patch().to(visita_handler::update_visita_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(visita_handler::delete_visita_endpoint),
                    )
                    .route(
                        "/{id}/realizar",
                        web::post().to(visita_handler::realizar_visita_endpoint),
                    ),
            )
            .service(
                web::scope("/manutencoes")
                    .route(
                        "",
                        web::get().to(manutencao_handler::list_manutencoes_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(manutencao_handler::create_manutencao_endpoint),
                    )
                    .route(
                        "/recarregar",
                        web::post().to(manutencao_handler::reload_manutencoes_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::patch().to(manutencao_handler::update_manutencao_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(manutencao_handler::delete_manutencao_endpoint),
                    )
                    .route(
                        "/{id}/concluir",
                        web::post().to(manutencao_handler::concluir_manutencao_endpoint),
                    ),
            )
            .service(
                web::scope("/contatos")
                    .route("", web::get().to(contato_handler::list_contatos_endpoint))
                    .route("", web::post().to(contato_handler::create_contato_endpoint))
                    .route(
                        "/recarregar",
                        web::post().to(contato_handler::reload_contatos_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::patch().to(contato_handler::update_contato_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(contato_handler::delete_contato_endpoint),
                    ),
            )
            .service(
                web::scope("/atribuicoes")
                    .route(
                        "",
                        web::get().to(atribuicao_handler::list_atribuicoes_endpoint),
                    )
                    .route(
                        "/{gerente_id}",
                        web::put().to(atribuicao_handler::definir_atribuicao_endpoint),
                    ),
            ),
    );
}
