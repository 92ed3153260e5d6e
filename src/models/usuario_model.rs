use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cargo {
    Administrador,
    Gerente,
}

impl FromStr for Cargo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrador" => Ok(Cargo::Administrador),
            "Gerente" => Ok(Cargo::Gerente),
            other => Err(format!("cargo desconocido: {}", other)),
        }
    }
}

/// Usuario autenticado, tal como lo entrega el gateway de auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub id: String,
    pub cargo: Cargo,
}

impl Usuario {
    pub fn is_admin(&self) -> bool {
        self.cargo == Cargo::Administrador
    }
}

/// Empreendimentos asignados a un gerente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atribuicao {
    pub gerente_id: String,
    pub empreendimentos: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefinirAtribuicaoRequest {
    pub empreendimentos: Vec<String>,
}
