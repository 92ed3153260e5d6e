//! handlers/usuario_extractor.rs
//! Usuario actual, tomado de los headers que pone el gateway de auth.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};

use crate::models::usuario_model::{Cargo, Usuario};

pub const HEADER_USUARIO_ID: &str = "X-Usuario-Id";
pub const HEADER_USUARIO_CARGO: &str = "X-Usuario-Cargo";

#[derive(Debug, Clone)]
pub struct UsuarioAtual(pub Usuario);

impl FromRequest for UsuarioAtual {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            usuario_from_headers(req)
                .map(UsuarioAtual)
                .map_err(ErrorUnauthorized),
        )
    }
}

fn usuario_from_headers(req: &HttpRequest) -> Result<Usuario, String> {
    let header = |name: &str| -> Result<String, String> {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| format!("Falta el header {}", name))
    };

    let id = header(HEADER_USUARIO_ID)?;
    let cargo: Cargo = header(HEADER_USUARIO_CARGO)?.parse()?;

    Ok(Usuario { id, cargo })
}
