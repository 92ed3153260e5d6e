//! services/manutencao_service.rs

use chrono::NaiveDate;

use crate::models::manutencao_model::{
    EstatisticasManutencoes, Manutencao, ManutencaoFormData, ManutencaoPatch, ManutencoesQuery,
    StatusManutencao,
};
use crate::services::entity_store::{Completable, Entity, EntityStore};
use crate::services::permission_filter::Scoped;
use crate::services::query_filter::{Criterios, Searchable};
use crate::services::statistics::Summarize;

pub type ManutencaoStore = EntityStore<Manutencao>;

impl Manutencao {
    /// Restablece "concluidoEm presente sii status == concluida".
    fn normalize_conclusao(&mut self, today: NaiveDate) {
        match self.status {
            StatusManutencao::Pendente => self.concluido_em = None,
            StatusManutencao::Concluida => {
                self.concluido_em.get_or_insert(today);
            }
        }
    }
}

impl Entity for Manutencao {
    type FormData = ManutencaoFormData;
    type Patch = ManutencaoPatch;

    const SLOT: &'static str = "manutencoes";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, today: NaiveDate, data: ManutencaoFormData) -> Self {
        Manutencao {
            id,
            descricao: data.descricao,
            empreendimento: data.empreendimento,
            gerente: data.gerente,
            status: StatusManutencao::Pendente,
            criado_em: today,
            concluido_em: None,
        }
    }

    fn merge(&mut self, patch: &ManutencaoPatch, today: NaiveDate) {
        if let Some(descricao) = &patch.descricao {
            self.descricao = descricao.clone();
        }
        if let Some(empreendimento) = &patch.empreendimento {
            self.empreendimento = empreendimento.clone();
        }
        if let Some(gerente) = &patch.gerente {
            self.gerente = gerente.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(concluido_em) = patch.concluido_em {
            self.concluido_em = Some(concluido_em);
        }
        self.normalize_conclusao(today);
    }
}

impl Completable for Manutencao {
    // Si ya estaba concluida se conserva la fecha original
    fn complete(&mut self, today: NaiveDate) {
        self.status = StatusManutencao::Concluida;
        self.normalize_conclusao(today);
    }
}

impl Scoped for Manutencao {
    fn empreendimento(&self) -> &str {
        &self.empreendimento
    }
}

impl Searchable for Manutencao {
    fn search_fields(&self) -> [&str; 2] {
        [&self.descricao, &self.empreendimento]
    }

    fn responsavel(&self) -> &str {
        &self.gerente
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }

    fn data(&self) -> NaiveDate {
        self.criado_em
    }
}

impl Summarize for Manutencao {
    type Summary = EstatisticasManutencoes;

    fn tally(&self, summary: &mut EstatisticasManutencoes) {
        summary.total += 1;
        match self.status {
            StatusManutencao::Pendente => summary.pendentes += 1,
            StatusManutencao::Concluida => summary.concluidas += 1,
        }
    }
}

impl From<ManutencoesQuery> for Criterios {
    fn from(q: ManutencoesQuery) -> Self {
        Criterios {
            busca: q.busca,
            empreendimento: q.empreendimento,
            responsavel: q.gerente,
            status: q.status,
            data: q.data,
        }
    }
}
