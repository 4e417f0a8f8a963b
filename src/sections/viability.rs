use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct CapexItem {
    name: &'static str,
    details: &'static str,
    cost: u32,
}

struct CapexCategory {
    category: &'static str,
    items: &'static [CapexItem],
}

const CAPEX: [CapexCategory; 4] = [
    CapexCategory {
        category: "Gestão e Estratégia",
        items: &[
            CapexItem {
                name: "Kick-off e Alinhamento",
                details: "8 horas x R$ 150,00/hora",
                cost: 1_200,
            },
            CapexItem {
                name: "Planejamento de Sprints",
                details: "40 horas x R$ 150,00/hora",
                cost: 6_000,
            },
            CapexItem {
                name: "Documentação de Onboarding",
                details: "16 horas x R$ 150,00/hora",
                cost: 2_400,
            },
            CapexItem {
                name: "Gestão e Comunicação Inicial",
                details: "20 horas x R$ 200,00/hora",
                cost: 4_000,
            },
        ],
    },
    CapexCategory {
        category: "Design System & UX/UI",
        items: &[
            CapexItem {
                name: "Definição de Cores e Tipografia",
                details: "2 entregas",
                cost: 4_400,
            },
            CapexItem {
                name: "Design de Componentes e Insígnias",
                details: "10 componentes + 40 insígnias",
                cost: 12_000,
            },
            CapexItem {
                name: "Wireframing e Design de Páginas",
                details: "120 horas x R$ 180,00/hora",
                cost: 21_600,
            },
            CapexItem {
                name: "Prototipagem Interativa",
                details: "8 horas x R$ 125,00/hora",
                cost: 1_000,
            },
        ],
    },
    CapexCategory {
        category: "Desenvolvimento",
        items: &[
            CapexItem {
                name: "Back-End (Estruturação e Lógica)",
                details: "90 horas",
                cost: 16_200,
            },
            CapexItem {
                name: "Implementação das Mecânicas",
                details: "Gamificação, Cursos, Freelas, Drafts",
                cost: 37_800,
            },
            CapexItem {
                name: "Módulos Críticos",
                details: "Pagamentos, Erros, Chat",
                cost: 18_000,
            },
            CapexItem {
                name: "Front-End (UI e Integração)",
                details: "Componentes, Páginas, API",
                cost: 77_400,
            },
            CapexItem {
                name: "QA e Testes",
                details: "Automatizados, Manuais, Segurança",
                cost: 21_000,
            },
        ],
    },
    CapexCategory {
        category: "Infraestrutura",
        items: &[CapexItem {
            name: "Ferramentas de Desenvolvimento",
            details: "Período de 3 meses",
            cost: 17_769,
        }],
    },
];

struct OpexItem {
    name: &'static str,
    details: &'static str,
    monthly: u32,
    annual: u32,
}

struct OpexCategory {
    category: &'static str,
    items: &'static [OpexItem],
}

const OPEX: [OpexCategory; 3] = [
    OpexCategory {
        category: "Recursos Humanos",
        items: &[
            OpexItem {
                name: "Project Owner / Design Lead",
                details: "Salário mensal (PJ)",
                monthly: 18_000,
                annual: 216_000,
            },
            OpexItem {
                name: "Back-End Developer (x2)",
                details: "Salário mensal (PJ)",
                monthly: 34_000,
                annual: 408_000,
            },
            OpexItem {
                name: "Front-End Developer",
                details: "Salário mensal (PJ)",
                monthly: 16_000,
                annual: 192_000,
            },
            OpexItem {
                name: "Full Stack Developer / UI",
                details: "Salário mensal (PJ)",
                monthly: 17_000,
                annual: 204_000,
            },
            OpexItem {
                name: "Project Manager",
                details: "Salário mensal (PJ)",
                monthly: 18_000,
                annual: 216_000,
            },
        ],
    },
    OpexCategory {
        category: "Infraestrutura e Licenças",
        items: &[
            OpexItem {
                name: "Hospedagem Cloud e Banco",
                details: "Servidores, CI/CD, banco de dados",
                monthly: 3_975,
                annual: 47_700,
            },
            OpexItem {
                name: "Licenças de Software",
                details: "Figma, GitHub, etc.",
                monthly: 1_948,
                annual: 23_376,
            },
        ],
    },
    OpexCategory {
        category: "Custos Administrativos",
        items: &[
            OpexItem {
                name: "Assessoria Contábil e Jurídica",
                details: "Retainer mensal",
                monthly: 2_500,
                annual: 30_000,
            },
            OpexItem {
                name: "Marketing e Aquisição",
                details: "Budget inicial",
                monthly: 3_500,
                annual: 42_000,
            },
        ],
    },
];

struct ScalabilityFactor {
    title: &'static str,
    description: &'static str,
    metrics: &'static [&'static str],
    icon: &'static str,
    gradient: &'static str,
}

const SCALABILITY: [ScalabilityFactor; 3] = [
    ScalabilityFactor {
        title: "Escalabilidade Técnica",
        description: "Arquitetura cloud-native permite crescimento horizontal automático",
        metrics: &["10x usuários simultâneos", "99.9% uptime garantido", "Latência < 200ms"],
        icon: "⚡",
        gradient: "linear-gradient(135deg, #3B82F6, #2563EB)",
    },
    ScalabilityFactor {
        title: "Escalabilidade Financeira",
        description: "Modelo de receita sustentável com múltiplas fontes de monetização",
        metrics: &["3.5% taxa da plataforma", "Freelas desde R$ 25", "ROI positivo em 18 meses"],
        icon: "💰",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
    },
    ScalabilityFactor {
        title: "Escalabilidade Operacional",
        description: "Processos automatizados e equipe enxuta para crescimento eficiente",
        metrics: &["80% processos automatizados", "1:500 ratio suporte/usuário", "Onboarding em 24h"],
        icon: "🚀",
        gradient: "linear-gradient(135deg, #A855F7, #9333EA)",
    },
];

const ROI: [(&str, &str, &str); 4] = [
    ("18 meses", "Break-even point", "accent-blue"),
    ("3.5%", "Taxa da plataforma", "accent-green"),
    ("R$ 2.5M", "Receita projetada (Ano 3)", "accent-amber"),
    ("35%", "Margem líquida (Ano 3)", "accent-red"),
];

/// Renders a whole-real amount in pt-BR style, with dots grouping
/// thousands ("R$ 240.769").
fn format_brl(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push_str("R$ ");
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

fn total_capex() -> u32 {
    CAPEX
        .iter()
        .flat_map(|cat| cat.items.iter())
        .map(|item| item.cost)
        .sum()
}

fn total_opex_monthly() -> u32 {
    OPEX.iter()
        .flat_map(|cat| cat.items.iter())
        .map(|item| item.monthly)
        .sum()
}

fn total_opex_annual() -> u32 {
    OPEX.iter()
        .flat_map(|cat| cat.items.iter())
        .map(|item| item.annual)
        .sum()
}

#[function_component(ViabilitySection)]
pub fn viability_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".viability-title"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                ..Default::default()
                            },
                            replay: true,
                            ..Default::default()
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".cost-section"),
                        RevealOptions {
                            config: RevealConfig::default(),
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    let cards = reveal::elements_in(&section, ".scalability-card");
                    handles.push(reveal::mount_reveal_group(
                        section,
                        cards,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                ..Default::default()
                            },
                            replay: true,
                            ..Default::default()
                        },
                    ));
                }
                move || drop(handles)
            },
            (),
        );
    }

    let capex = total_capex();
    let opex_monthly = total_opex_monthly();
    let opex_annual = total_opex_annual();

    html! {
        <section ref={section_ref} class="section section-soft" id="viabilidade">
            <BackgroundEffects />
            <div class="container">
                <SectionTitle class="viability-title">
                    {"Viabilidade e Escalabilidade"}
                </SectionTitle>

                <p class="lead center intro-gap">
                    {"Análise detalhada dos custos de construção, operação e estratégias de \
                      escalabilidade da plataforma Beeedu."}
                </p>

                <div class="cost-section grid grid-3">
                    <div class="card center">
                        <h3 class="card-title">{"Investimento Inicial (CAPEX)"}</h3>
                        <div class="stat-value accent-blue">{ format_brl(capex) }</div>
                        <p class="stat-note">{"Custo único de construção da plataforma"}</p>
                    </div>
                    <div class="card center">
                        <h3 class="card-title">{"Operação Mensal (OPEX)"}</h3>
                        <div class="stat-value accent-green">{ format_brl(opex_monthly) }</div>
                        <p class="stat-note">{"Custos recorrentes mensais"}</p>
                    </div>
                    <div class="card center">
                        <h3 class="card-title">{"Investimento Total (Ano 1)"}</h3>
                        <div class="stat-value accent-amber">{ format_brl(capex + opex_annual) }</div>
                        <p class="stat-note">{"CAPEX + OPEX anual"}</p>
                    </div>
                </div>

                <div class="cost-section">
                    <h3 class="panel-title center">{"Detalhamento de Custos"}</h3>

                    <div class="cost-table">
                        <div class="cost-table-head head-blue">
                            {"Custos de Construção (CAPEX)"}
                        </div>
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Categoria"}</th>
                                    <th>{"Item"}</th>
                                    <th>{"Detalhes"}</th>
                                    <th class="num">{"Valor"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for CAPEX.iter().flat_map(|cat| {
                                    cat.items.iter().enumerate().map(move |(i, item)| html! {
                                        <tr>
                                            <td class="cell-category">
                                                { if i == 0 { cat.category } else { "" } }
                                            </td>
                                            <td>{ item.name }</td>
                                            <td class="cell-details">{ item.details }</td>
                                            <td class="num">{ format_brl(item.cost) }</td>
                                        </tr>
                                    })
                                }) }
                            </tbody>
                            <tfoot>
                                <tr class="foot-blue">
                                    <td colspan="3">{"Total CAPEX"}</td>
                                    <td class="num accent-blue">{ format_brl(capex) }</td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>

                    <div class="cost-table">
                        <div class="cost-table-head head-green">
                            {"Custos Operacionais (OPEX)"}
                        </div>
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Categoria"}</th>
                                    <th>{"Item"}</th>
                                    <th>{"Detalhes"}</th>
                                    <th class="num">{"Mensal"}</th>
                                    <th class="num">{"Anual"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for OPEX.iter().flat_map(|cat| {
                                    cat.items.iter().enumerate().map(move |(i, item)| html! {
                                        <tr>
                                            <td class="cell-category">
                                                { if i == 0 { cat.category } else { "" } }
                                            </td>
                                            <td>{ item.name }</td>
                                            <td class="cell-details">{ item.details }</td>
                                            <td class="num">{ format_brl(item.monthly) }</td>
                                            <td class="num">{ format_brl(item.annual) }</td>
                                        </tr>
                                    })
                                }) }
                            </tbody>
                            <tfoot>
                                <tr class="foot-green">
                                    <td colspan="3">{"Total OPEX"}</td>
                                    <td class="num accent-green">{ format_brl(opex_monthly) }</td>
                                    <td class="num accent-green">{ format_brl(opex_annual) }</td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                </div>

                <h3 class="panel-title center">{"Fatores de Escalabilidade"}</h3>
                <div class="grid grid-3">
                    { for SCALABILITY.iter().map(|factor| html! {
                        <div class="scalability-card card">
                            <div
                                class="advantage-icon"
                                style={format!("background: {}", factor.gradient)}
                            >
                                { factor.icon }
                            </div>
                            <h4 class="card-title">{ factor.title }</h4>
                            <p class="card-text">{ factor.description }</p>
                            <ul class="check-list">
                                { for factor.metrics.iter().map(|m| html! { <li>{ *m }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="summary-panel center">
                    <h3 class="panel-title">
                        {"Projeção de Retorno sobre Investimento"}
                    </h3>
                    <div class="grid grid-4">
                        { for ROI.iter().map(|(value, label, accent)| html! {
                            <div class="stat-block">
                                <div class={classes!("stat-value", *accent)}>{ *value }</div>
                                <div class="stat-note">{ *label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_groups_thousands_with_dots() {
        assert_eq!(format_brl(0), "R$ 0");
        assert_eq!(format_brl(999), "R$ 999");
        assert_eq!(format_brl(1_200), "R$ 1.200");
        assert_eq!(format_brl(17_769), "R$ 17.769");
        assert_eq!(format_brl(1_379_076), "R$ 1.379.076");
    }

    #[test]
    fn cost_totals_match_the_published_figures() {
        assert_eq!(total_capex(), 240_769);
        assert_eq!(total_opex_monthly(), 114_923);
        assert_eq!(total_opex_annual(), 1_379_076);
    }
}
