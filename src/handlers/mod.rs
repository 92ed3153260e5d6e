//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (visitas, manutenções, contatos, etc.).
pub mod atribuicao_handler;
pub mod contato_handler;
pub mod manutencao_handler;
pub mod scoped;
pub mod usuario_extractor;
pub mod visita_handler;
