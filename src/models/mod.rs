//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod contato_model;
pub mod listado_model;
pub mod manutencao_model;
pub mod usuario_model;
pub mod visita_model;
