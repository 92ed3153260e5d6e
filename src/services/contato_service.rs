use chrono::NaiveDate;

use crate::models::contato_model::{
    CamposContato, Contato, EstatisticasContatos, CAMPOS_RESERVADOS,
};
use crate::services::entity_store::{Entity, EntityStore};
use crate::services::statistics::Summarize;

pub type ContatoStore = EntityStore<Contato>;

fn sin_reservados(
    campos: &CamposContato,
) -> impl Iterator<Item = (&String, &serde_json::Value)> + '_ {
    campos
        .iter()
        .filter(|(k, _)| !CAMPOS_RESERVADOS.contains(&k.as_str()))
}

impl Entity for Contato {
    type FormData = CamposContato;
    type Patch = CamposContato;

    const SLOT: &'static str = "contatos";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, today: NaiveDate, data: CamposContato) -> Self {
        let campos = sin_reservados(&data)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Contato {
            id,
            criado_em: today,
            atualizado_em: today,
            campos,
        }
    }

    fn merge(&mut self, patch: &CamposContato, today: NaiveDate) {
        for (k, v) in sin_reservados(patch) {
            self.campos.insert(k.clone(), v.clone());
        }
        self.atualizado_em = today;
    }
}

impl Summarize for Contato {
    type Summary = EstatisticasContatos;

    fn tally(&self, summary: &mut EstatisticasContatos) {
        summary.total += 1;
    }
}
