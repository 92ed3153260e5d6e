use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use crate::config::crm_config::CrmConfig;
use crate::logger::init_logger;
use crate::services::atribuicao_service::AtribuicaoService;
use crate::services::contato_service::ContatoStore;
use crate::services::manutencao_service::ManutencaoStore;
use crate::services::storage_service::open_storage;
use crate::services::visita_service::VisitaStore;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = CrmConfig::from_env();
    let storage = open_storage(&config).await?;

    let visitas = VisitaStore::new(storage.clone());
    let manutencoes = ManutencaoStore::new(storage.clone());
    let contatos = ContatoStore::new(storage.clone());
    let atribuicoes = AtribuicaoService::new(storage);

    // Un solo load al arrancar; después el slot solo se escribe
    visitas.load().await;
    manutencoes.load().await;
    contatos.load().await;
    atribuicoes.load().await;

    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(visitas.clone()))
            .app_data(web::Data::new(manutencoes.clone()))
            .app_data(web::Data::new(contatos.clone()))
            .app_data(web::Data::new(atribuicoes.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("No se pudo abrir {}:{}", config.host, config.port))?
    .run()
    .await
    .context("El servidor terminó con error")
}
