//! tests/filter_tests.rs
//! Filtro de permisos, filtro de búsqueda y estadísticas.

#[cfg(test)]
mod tests {
    use crate::models::manutencao_model::{EstatisticasManutencoes, Manutencao, StatusManutencao};
    use crate::models::usuario_model::{Atribuicao, Cargo, Usuario};
    use crate::models::visita_model::{EstatisticasVisitas, StatusVisita, Visita, VisitasQuery};
    use crate::services::permission_filter::{allows, visible};
    use crate::services::query_filter::{apply, opcoes, Criterios};
    use crate::services::statistics::summarize;
    use crate::tests::fecha;

    fn visita(id: &str, corretor: &str, empreendimento: &str, status: StatusVisita) -> Visita {
        Visita {
            id: id.to_string(),
            corretor: corretor.to_string(),
            empreendimento: empreendimento.to_string(),
            data: fecha(2024, 6, 1),
            horario: "09:00".to_string(),
            status,
            criado_em: fecha(2024, 5, 1),
        }
    }

    fn manutencao(id: &str, descricao: &str, status: StatusManutencao) -> Manutencao {
        Manutencao {
            id: id.to_string(),
            descricao: descricao.to_string(),
            empreendimento: "Alpha".to_string(),
            gerente: "Carlos".to_string(),
            status,
            criado_em: fecha(2024, 5, 1),
            concluido_em: match status {
                StatusManutencao::Concluida => Some(fecha(2024, 5, 2)),
                StatusManutencao::Pendente => None,
            },
        }
    }

    fn admin() -> Usuario {
        Usuario {
            id: "a1".to_string(),
            cargo: Cargo::Administrador,
        }
    }

    fn gerente(id: &str) -> Usuario {
        Usuario {
            id: id.to_string(),
            cargo: Cargo::Gerente,
        }
    }

    fn atribuicoes() -> Vec<Atribuicao> {
        vec![Atribuicao {
            gerente_id: "m1".to_string(),
            empreendimentos: vec!["Alpha".to_string()],
        }]
    }

    #[test]
    fn test_admin_sees_everything() {
        let items = vec![
            visita("1", "Ana", "Alpha", StatusVisita::Agendada),
            visita("2", "Bruno", "Beta", StatusVisita::Cancelada),
        ];
        assert_eq!(visible(&items, &admin(), &[]), items);
        assert_eq!(visible(&items, &admin(), &atribuicoes()), items);
    }

    #[test]
    fn test_manager_sees_only_assigned_projects() {
        let items = vec![
            visita("1", "Ana", "Alpha", StatusVisita::Agendada),
            visita("2", "Bruno", "Beta", StatusVisita::Agendada),
        ];
        let result = visible(&items, &gerente("m1"), &atribuicoes());
        assert_eq!(result, vec![items[0].clone()]);
    }

    #[test]
    fn test_manager_without_assignment_sees_nothing() {
        let items = vec![visita("1", "Ana", "Alpha", StatusVisita::Agendada)];
        assert!(visible(&items, &gerente("m2"), &atribuicoes()).is_empty());
        assert!(visible(&items, &gerente("m1"), &[]).is_empty());
    }

    #[test]
    fn test_allows_single_project() {
        assert!(allows(&admin(), &[], "Qualquer"));
        assert!(allows(&gerente("m1"), &atribuicoes(), "Alpha"));
        assert!(!allows(&gerente("m1"), &atribuicoes(), "Beta"));
        assert!(!allows(&gerente("m2"), &atribuicoes(), "Alpha"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = vec![visita("1", "Ana", "Alpha", StatusVisita::Agendada)];

        let busca = Criterios {
            busca: Some("ana".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(&items, &busca), items);

        let por_empreendimento = Criterios {
            busca: Some("LPH".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(&items, &por_empreendimento), items);

        let realizada = Criterios {
            status: Some("realizada".to_string()),
            ..Default::default()
        };
        assert!(apply(&items, &realizada).is_empty());
    }

    #[test]
    fn test_criteria_are_anded() {
        let items = vec![
            visita("1", "Ana", "Alpha", StatusVisita::Agendada),
            visita("2", "Ana", "Beta", StatusVisita::Agendada),
            visita("3", "Bruno", "Alpha", StatusVisita::Realizada),
        ];

        let criterios = Criterios {
            empreendimento: Some("Alpha".to_string()),
            responsavel: Some("Ana".to_string()),
            ..Default::default()
        };
        let result = apply(&items, &criterios);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");

        // exacto, no substring
        let parcial = Criterios {
            empreendimento: Some("Alp".to_string()),
            ..Default::default()
        };
        assert!(apply(&items, &parcial).is_empty());
    }

    #[test]
    fn test_empty_strings_match_everything() {
        let items = vec![
            visita("1", "Ana", "Alpha", StatusVisita::Agendada),
            visita("2", "Bruno", "Beta", StatusVisita::Cancelada),
        ];
        let criterios: Criterios = VisitasQuery {
            busca: Some(String::new()),
            empreendimento: Some(String::new()),
            corretor: Some(String::new()),
            status: Some(String::new()),
            data: Some(String::new()),
        }
        .into();

        assert!(criterios.is_empty());
        assert_eq!(apply(&items, &criterios), items);
    }

    #[test]
    fn test_date_filter_uses_visit_date_and_creation_date() {
        let visitas = vec![visita("1", "Ana", "Alpha", StatusVisita::Agendada)];
        let por_data = Criterios {
            data: Some("2024-06-01".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(&visitas, &por_data).len(), 1);

        // En manutenções la fecha es criadoEm
        let manutencoes = vec![manutencao("1", "Goteira", StatusManutencao::Pendente)];
        assert!(apply(&manutencoes, &por_data).is_empty());
        let por_criacao = Criterios {
            data: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(&manutencoes, &por_criacao).len(), 1);
    }

    #[test]
    fn test_maintenance_search_fields() {
        let items = vec![
            manutencao("1", "Vazamento na garagem", StatusManutencao::Pendente),
            manutencao("2", "Troca de lâmpadas", StatusManutencao::Concluida),
        ];
        let criterios = Criterios {
            busca: Some("GARAGEM".to_string()),
            ..Default::default()
        };
        let result = apply(&items, &criterios);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_filter_options_are_distinct_in_first_seen_order() {
        let items = vec![
            visita("1", "Bruno", "Beta", StatusVisita::Agendada),
            visita("2", "Ana", "Alpha", StatusVisita::Agendada),
            visita("3", "Bruno", "Alpha", StatusVisita::Agendada),
        ];
        let result = opcoes(&items);
        assert_eq!(result.empreendimentos, vec!["Beta", "Alpha"]);
        assert_eq!(result.responsaveis, vec!["Bruno", "Ana"]);
    }

    #[test]
    fn test_summaries() {
        let manutencoes = vec![
            manutencao("1", "a", StatusManutencao::Pendente),
            manutencao("2", "b", StatusManutencao::Pendente),
            manutencao("3", "c", StatusManutencao::Pendente),
            manutencao("4", "d", StatusManutencao::Concluida),
            manutencao("5", "e", StatusManutencao::Concluida),
        ];
        assert_eq!(
            summarize(&manutencoes),
            EstatisticasManutencoes {
                total: 5,
                pendentes: 3,
                concluidas: 2,
            }
        );

        let visitas = vec![
            visita("1", "Ana", "Alpha", StatusVisita::Agendada),
            visita("2", "Ana", "Alpha", StatusVisita::Realizada),
            visita("3", "Ana", "Alpha", StatusVisita::Cancelada),
            visita("4", "Ana", "Alpha", StatusVisita::Agendada),
        ];
        assert_eq!(
            summarize(&visitas),
            EstatisticasVisitas {
                total: 4,
                agendadas: 2,
                realizadas: 1,
                canceladas: 1,
            }
        );
        assert_eq!(summarize::<Visita>(&[]), EstatisticasVisitas::default());
    }
}
