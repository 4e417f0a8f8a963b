use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct ImpactMetric {
    title: &'static str,
    target: &'static str,
    description: &'static str,
    icon: &'static str,
}

const IMPACT_METRICS: [ImpactMetric; 4] = [
    ImpactMetric {
        title: "Redução da Evasão Escolar",
        target: "40%",
        description: "Diminuição da evasão no ensino médio através de renda imediata e \
                      perspectiva de carreira",
        icon: "📚",
    },
    ImpactMetric {
        title: "Inserção no Mercado",
        target: "85%",
        description: "Taxa de empregabilidade dos formandos em até 6 meses após conclusão dos \
                      cursos",
        icon: "💼",
    },
    ImpactMetric {
        title: "Aumento de Renda Familiar",
        target: "R$ 800",
        description: "Renda média mensal adicional por família através dos freelas dos \
                      estudantes",
        icon: "💰",
    },
    ImpactMetric {
        title: "Escolas Públicas Impactadas",
        target: "500+",
        description: "Número de escolas públicas integradas à plataforma nos primeiros 3 anos",
        icon: "🏫",
    },
];

struct GoalGroup {
    category: &'static str,
    goals: &'static [&'static str],
    icon: &'static str,
    gradient: &'static str,
}

const GOALS: [GoalGroup; 3] = [
    GoalGroup {
        category: "Educação Inclusiva",
        goals: &[
            "Democratizar acesso à educação profissionalizante de qualidade",
            "Reduzir desigualdades educacionais entre classes sociais",
            "Promover educação continuada e lifelong learning",
            "Integrar tecnologia na educação pública de forma sustentável",
        ],
        icon: "🎓",
        gradient: "linear-gradient(135deg, #3B82F6, #06B6D4)",
    },
    GoalGroup {
        category: "Desenvolvimento Econômico",
        goals: &[
            "Gerar renda imediata para estudantes de baixa renda",
            "Criar ponte direta entre educação e mercado de trabalho",
            "Fomentar empreendedorismo jovem através de freelas",
            "Reduzir desemprego juvenil em comunidades vulneráveis",
        ],
        icon: "📈",
        gradient: "linear-gradient(135deg, #22C55E, #10B981)",
    },
    GoalGroup {
        category: "Transformação Social",
        goals: &[
            "Quebrar ciclos de pobreza através da educação",
            "Empoderar jovens com habilidades do século XXI",
            "Promover igualdade de gênero no mercado tech",
            "Fortalecer comunidades através da educação colaborativa",
        ],
        icon: "🌍",
        gradient: "linear-gradient(135deg, #A855F7, #EC4899)",
    },
];

const ODS: [(&str, &str, &str); 4] = [
    ("🎯", "ODS 4", "Educação de Qualidade"),
    ("💼", "ODS 8", "Trabalho Decente"),
    ("⚖️", "ODS 10", "Redução das Desigualdades"),
    ("🤝", "ODS 17", "Parcerias e Meios"),
];

#[function_component(SocialImpactSection)]
pub fn social_impact_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".impact-title"),
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
                        reveal::elements_in(&section, ".impact-metric"),
                        RevealOptions {
                            config: RevealConfig::default(),
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    let goals = reveal::elements_in(&section, ".social-goal");
                    handles.push(reveal::mount_reveal_group(
                        section,
                        goals,
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
        <section ref={section_ref} class="section" id="impacto-social">
            <BackgroundEffects />
            <div class="container">
                <SectionTitle class="impact-title">{"Impacto Social Esperado"}</SectionTitle>

                <p class="lead center intro-gap">
                    {"A Beeedu não é apenas uma plataforma educacional, é um movimento de \
                      transformação social que visa quebrar barreiras estruturais e criar \
                      oportunidades reais para jovens brasileiros."}
                </p>

                <div class="grid grid-4">
                    { for IMPACT_METRICS.iter().map(|m| html! {
                        <div class="impact-metric card center">
                            <div class="stat-emoji">{ m.icon }</div>
                            <div class="stat-value accent-blue">{ m.target }</div>
                            <h3 class="card-title">{ m.title }</h3>
                            <p class="card-text">{ m.description }</p>
                        </div>
                    }) }
                </div>

                <h3 class="panel-title center">{"Objetivos de Desenvolvimento Social"}</h3>
                <div class="grid grid-3">
                    { for GOALS.iter().map(|g| html! {
                        <div class="social-goal card">
                            <div class="advantage-icon" style={format!("background: {}", g.gradient)}>
                                { g.icon }
                            </div>
                            <h4 class="card-title">{ g.category }</h4>
                            <ul class="dot-list">
                                { for g.goals.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="summary-panel center">
                    <h3 class="panel-title">
                        {"Alinhamento com os Objetivos de Desenvolvimento Sustentável (ODS)"}
                    </h3>
                    <div class="grid grid-4">
                        { for ODS.iter().map(|(icon, ods, label)| html! {
                            <div class="stat-block">
                                <div class="stat-emoji">{ *icon }</div>
                                <div class="stat-label">{ *ods }</div>
                                <div class="stat-note">{ *label }</div>
                            </div>
                        }) }
                    </div>
                    <p class="stat-note">
                        {"A Beeedu contribui diretamente para 4 dos 17 Objetivos de \
                          Desenvolvimento Sustentável da ONU, posicionando-se como uma solução \
                          alinhada às metas globais de desenvolvimento."}
                    </p>
                </div>
            </div>
        </section>
    }
}
