//! services/visita_service.rs
//! Reglas de negocio de las visitas.

use chrono::NaiveDate;

use crate::models::visita_model::{
    EstatisticasVisitas, StatusVisita, Visita, VisitaFormData, VisitaPatch, VisitasQuery,
};
use crate::services::entity_store::{Completable, Entity, EntityStore};
use crate::services::permission_filter::Scoped;
use crate::services::query_filter::{Criterios, Searchable};
use crate::services::statistics::Summarize;

pub type VisitaStore = EntityStore<Visita>;

impl Entity for Visita {
    type FormData = VisitaFormData;
    type Patch = VisitaPatch;

    const SLOT: &'static str = "visitas";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, today: NaiveDate, data: VisitaFormData) -> Self {
        Visita {
            id,
            corretor: data.corretor,
            empreendimento: data.empreendimento,
            data: data.data,
            horario: data.horario,
            status: StatusVisita::Agendada,
            criado_em: today,
        }
    }

    fn merge(&mut self, patch: &VisitaPatch, _today: NaiveDate) {
        if let Some(corretor) = &patch.corretor {
            self.corretor = corretor.clone();
        }
        if let Some(empreendimento) = &patch.empreendimento {
            self.empreendimento = empreendimento.clone();
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(horario) = &patch.horario {
            self.horario = horario.clone();
        }
        if let Some(status) = patch.status {
            if self.status.can_transition_to(status) {
                self.status = status;
            } else {
                log::warn!(
                    "Visita {}: transición {} -> {} ignorada",
                    self.id,
                    self.status.as_str(),
                    status.as_str()
                );
            }
        }
    }
}

impl Completable for Visita {
    fn complete(&mut self, _today: NaiveDate) {
        if self.status == StatusVisita::Agendada {
            self.status = StatusVisita::Realizada;
        }
    }
}

impl Scoped for Visita {
    fn empreendimento(&self) -> &str {
        &self.empreendimento
    }
}

impl Searchable for Visita {
    fn search_fields(&self) -> [&str; 2] {
        [&self.corretor, &self.empreendimento]
    }

    fn responsavel(&self) -> &str {
        &self.corretor
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }

    fn data(&self) -> NaiveDate {
        self.data
    }
}

impl Summarize for Visita {
    type Summary = EstatisticasVisitas;

    fn tally(&self, summary: &mut EstatisticasVisitas) {
        summary.total += 1;
        match self.status {
            StatusVisita::Agendada => summary.agendadas += 1,
            StatusVisita::Realizada => summary.realizadas += 1,
            StatusVisita::Cancelada => summary.canceladas += 1,
        }
    }
}

impl From<VisitasQuery> for Criterios {
    fn from(q: VisitasQuery) -> Self {
        Criterios {
            busca: q.busca,
            empreendimento: q.empreendimento,
            responsavel: q.corretor,
            status: q.status,
            data: q.data,
        }
    }
}
