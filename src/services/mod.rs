//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod atribuicao_service;
pub mod contato_service;
pub mod entity_store;
pub mod manutencao_service;
pub mod permission_filter;
pub mod query_filter;
pub mod statistics;
pub mod storage_service;
pub mod visita_service;
