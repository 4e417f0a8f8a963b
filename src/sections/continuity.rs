use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, VisualState};

struct Phase {
    phase: &'static str,
    duration: &'static str,
    description: &'static str,
    milestones: &'static [&'static str],
    investment: &'static str,
    gradient: &'static str,
    icon: &'static str,
}

const PHASES: [Phase; 4] = [
    Phase {
        phase: "Fase 1: MVP e Validação",
        duration: "6 meses",
        description: "Desenvolvimento do produto mínimo viável e validação com escolas piloto",
        milestones: &[
            "Plataforma básica funcional",
            "5 escolas públicas piloto",
            "100 estudantes ativos",
            "10 empresas parceiras",
            "Validação do modelo de negócio",
        ],
        investment: "R$ 800.000",
        gradient: "linear-gradient(135deg, #3B82F6, #2563EB)",
        icon: "🚀",
    },
    Phase {
        phase: "Fase 2: Expansão Regional",
        duration: "12 meses",
        description: "Expansão para múltiplas cidades e refinamento da plataforma",
        milestones: &[
            "50 escolas públicas integradas",
            "2.000 estudantes ativos",
            "100 empresas parceiras",
            "Sistema de gamificação completo",
            "Primeira rodada de investimento",
        ],
        investment: "R$ 2.500.000",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
        icon: "📈",
    },
    Phase {
        phase: "Fase 3: Escala Nacional",
        duration: "18 meses",
        description: "Expansão nacional e diversificação de serviços",
        milestones: &[
            "500 escolas públicas",
            "25.000 estudantes ativos",
            "1.000 empresas parceiras",
            "Plataforma de certificação blockchain",
            "Break-even operacional",
        ],
        investment: "R$ 8.000.000",
        gradient: "linear-gradient(135deg, #A855F7, #9333EA)",
        icon: "🌟",
    },
    Phase {
        phase: "Fase 4: Consolidação",
        duration: "24 meses",
        description: "Consolidação como líder de mercado e expansão internacional",
        milestones: &[
            "2.000 escolas integradas",
            "100.000 estudantes ativos",
            "5.000 empresas parceiras",
            "Expansão para América Latina",
            "IPO ou aquisição estratégica",
        ],
        investment: "R$ 15.000.000",
        gradient: "linear-gradient(135deg, #F97316, #EF4444)",
        icon: "👑",
    },
];

struct Risk {
    risk: &'static str,
    mitigation: &'static str,
    probability: &'static str,
    impact: &'static str,
    tone: &'static str,
}

const RISKS: [Risk; 4] = [
    Risk {
        risk: "Resistência das Escolas",
        mitigation: "Programa de capacitação para educadores e demonstração de resultados \
                     tangíveis",
        probability: "Média",
        impact: "Alto",
        tone: "tone-amber",
    },
    Risk {
        risk: "Concorrência de Grandes Players",
        mitigation: "Foco em diferenciação (Job Draft) e parcerias estratégicas exclusivas",
        probability: "Alta",
        impact: "Alto",
        tone: "tone-red",
    },
    Risk {
        risk: "Mudanças Regulatórias",
        mitigation: "Compliance proativo e relacionamento com órgãos reguladores",
        probability: "Baixa",
        impact: "Médio",
        tone: "tone-green",
    },
    Risk {
        risk: "Dificuldades de Financiamento",
        mitigation: "Diversificação de fontes de capital e modelo de receita sustentável",
        probability: "Média",
        impact: "Alto",
        tone: "tone-amber",
    },
];

struct Pillar {
    title: &'static str,
    description: &'static str,
    strategies: &'static [&'static str],
    icon: &'static str,
    gradient: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Sustentabilidade Financeira",
        description: "Modelo de receita diversificado e escalável",
        strategies: &[
            "Taxa de 3.5% sobre transações",
            "Assinaturas premium para empresas",
            "Certificações e cursos pagos",
            "Parcerias com governos",
        ],
        icon: "💰",
        gradient: "linear-gradient(135deg, #22C55E, #10B981)",
    },
    Pillar {
        title: "Sustentabilidade Tecnológica",
        description: "Arquitetura moderna e adaptável",
        strategies: &[
            "Cloud-native e microserviços",
            "APIs abertas para integrações",
            "IA para personalização",
            "Blockchain para certificação",
        ],
        icon: "⚙️",
        gradient: "linear-gradient(135deg, #3B82F6, #06B6D4)",
    },
    Pillar {
        title: "Sustentabilidade Social",
        description: "Impacto social mensurável e crescente",
        strategies: &[
            "Foco em escolas públicas",
            "Programa de bolsas",
            "Parcerias com ONGs",
            "Métricas de impacto social",
        ],
        icon: "🌍",
        gradient: "linear-gradient(135deg, #A855F7, #EC4899)",
    },
];

const FIVE_YEAR_METRICS: [(&str, &str, &str); 4] = [
    ("2.000+", "Escolas Integradas", "accent-blue"),
    ("100k+", "Estudantes Ativos", "accent-green"),
    ("5.000+", "Empresas Parceiras", "accent-amber"),
    ("R$ 50M", "Receita Anual", "accent-red"),
];

#[function_component(ContinuitySection)]
pub fn continuity_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".continuity-title"),
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
                        reveal::elements_in(&section, ".phase-card"),
                        RevealOptions {
                            config: RevealConfig::default(),
                            replay: true,
                            ..Default::default()
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".risk-item"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(20.0),
                                duration: 600.0,
                                stagger: 50.0,
                                ..Default::default()
                            },
                            replay: true,
                            ..Default::default()
                        },
                    ));
                    let pillars = reveal::elements_in(&section, ".sustainability-pillar");
                    handles.push(reveal::mount_reveal_group(
                        section,
                        pillars,
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

    html! {
        <section ref={section_ref} class="section" id="plano-continuidade">
            <BackgroundEffects />
            <div class="container">
                <SectionTitle class="continuity-title">{"Plano de Continuidade"}</SectionTitle>

                <p class="lead center intro-gap">
                    {"Estratégia estruturada para crescimento sustentável, mitigação de riscos e \
                      consolidação da Beeedu como líder no mercado de educação \
                      profissionalizante."}
                </p>

                <h3 class="panel-title center">{"Fases de Desenvolvimento"}</h3>
                <div class="phase-timeline">
                    { for PHASES.iter().map(|p| html! {
                        <div class="phase-card card">
                            <div class="phase-row">
                                <div
                                    class="advantage-icon"
                                    style={format!("background: {}", p.gradient)}
                                >
                                    { p.icon }
                                </div>
                                <div class="phase-body">
                                    <div class="phase-head">
                                        <h4 class="card-title">{ p.phase }</h4>
                                        <div class="phase-tags">
                                            <span class="pill">{ format!("⏱️ {}", p.duration) }</span>
                                            <span
                                                class="pill pill-filled"
                                                style={format!("background: {}", p.gradient)}
                                            >
                                                { format!("💰 {}", p.investment) }
                                            </span>
                                        </div>
                                    </div>
                                    <p class="card-text">{ p.description }</p>
                                    <ul class="check-list phase-milestones">
                                        { for p.milestones.iter().map(|m| html! { <li>{ *m }</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <h3 class="panel-title center">{"Análise e Mitigação de Riscos"}</h3>
                <div class="cost-table">
                    <table>
                        <thead class="head-slate">
                            <tr>
                                <th>{"Risco Identificado"}</th>
                                <th>{"Estratégia de Mitigação"}</th>
                                <th class="num">{"Probabilidade"}</th>
                                <th class="num">{"Impacto"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for RISKS.iter().map(|r| html! {
                                <tr class="risk-item">
                                    <td class="cell-category">{ r.risk }</td>
                                    <td>{ r.mitigation }</td>
                                    <td class="num">
                                        <span class={classes!("tone-pill", r.tone)}>
                                            { r.probability }
                                        </span>
                                    </td>
                                    <td class="num">
                                        <span class={classes!("tone-pill", r.tone)}>
                                            { r.impact }
                                        </span>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <h3 class="panel-title center">{"Pilares de Sustentabilidade"}</h3>
                <div class="grid grid-3">
                    { for PILLARS.iter().map(|p| html! {
                        <div class="sustainability-pillar card">
                            <div
                                class="advantage-icon"
                                style={format!("background: {}", p.gradient)}
                            >
                                { p.icon }
                            </div>
                            <h4 class="card-title">{ p.title }</h4>
                            <p class="card-text">{ p.description }</p>
                            <ul class="dot-list">
                                { for p.strategies.iter().map(|s| html! { <li>{ *s }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="summary-panel center">
                    <h3 class="panel-title">{"Métricas de Sucesso (5 anos)"}</h3>
                    <div class="grid grid-4">
                        { for FIVE_YEAR_METRICS.iter().map(|(value, label, accent)| html! {
                            <div class="stat-block">
                                <div class={classes!("stat-value", *accent)}>{ *value }</div>
                                <div class="stat-note">{ *label }</div>
                            </div>
                        }) }
                    </div>
                    <p class="stat-note">
                        {"Consolidação como a principal plataforma de educação \
                          profissionalizante do Brasil, com expansão para América Latina e \
                          impacto social mensurável em milhões de vidas."}
                    </p>
                </div>
            </div>
        </section>
    }
}
