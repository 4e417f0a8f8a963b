use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Competitor {
    name: &'static str,
    description: &'static str,
    scope: &'static str,
    focus: &'static str,
    students: &'static str,
    differentiator: &'static str,
    gradient: &'static str,
}

const COMPETITORS: [Competitor; 6] = [
    Competitor {
        name: "UNESCO Global Skills Academy",
        description: "Mobiliza 230 instituições de educação técnica (TVET) em 150 países para \
                      oferecer cursos gratuitos de capacitação digital, verde e empreendedora.",
        scope: "Global",
        focus: "Educação Técnica",
        students: "150 países",
        differentiator: "Foco em habilidades digitais e verdes",
        gradient: "linear-gradient(135deg, #3B82F6, #2563EB)",
    },
    Competitor {
        name: "IBM P-TECH",
        description: "Escolas de ensino médio público em parceria com faculdades e empresas de \
                      tecnologia, permitindo diploma + grau técnico + estágios pagos.",
        scope: "28 países",
        focus: "Tecnologia",
        students: "Comunidades desfavorecidas",
        differentiator: "Modelo dual: ensino médio + técnico",
        gradient: "linear-gradient(135deg, #A855F7, #9333EA)",
    },
    Competitor {
        name: "GIZ Atingi",
        description: "Portal com 550+ cursos online gratuitos em áreas demandadas pelo mercado, \
                      com 370+ parceiros globais e certificação digital.",
        scope: "Global",
        focus: "Cursos Abertos",
        students: "Sem limite de idade",
        differentiator: "Flexibilidade máxima de modalidades",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
    },
    Competitor {
        name: "CareerWise Colorado",
        description: "Programa multianos onde estudantes trabalham 16-24h semanais em posições \
                      remuneradas enquanto cursam escola e recebem créditos universitários.",
        scope: "Regional (EUA)",
        focus: "Aprendizagem Prática",
        students: "Ensino médio",
        differentiator: "Work-based learning remunerado",
        gradient: "linear-gradient(135deg, #F97316, #EA580C)",
    },
    Competitor {
        name: "SkillsFuture (Singapura)",
        description: "Portal nacional onde cidadãos buscam cursos subsidiados, orientação de \
                      carreira e plataformas de busca de empregos.",
        scope: "Nacional",
        focus: "Desenvolvimento Contínuo",
        students: "Todos os cidadãos",
        differentiator: "Subsídio governamental integral",
        gradient: "linear-gradient(135deg, #EF4444, #DC2626)",
    },
    Competitor {
        name: "TAFE NSW (Austrália)",
        description: "Parcerias formais com indústrias locais, programas personalizados usando \
                      instalações e equipamentos das empresas para aulas práticas.",
        scope: "Regional",
        focus: "Educação Técnica",
        students: "Jovens e adultos",
        differentiator: "Infraestrutura empresarial integrada",
        gradient: "linear-gradient(135deg, #14B8A6, #0D9488)",
    },
];

fn competitor_card(c: &Competitor) -> Html {
    html! {
        <div class="competitor-card card">
            <h3 class="card-title">{ c.name }</h3>
            <p class="card-text">{ c.description }</p>
            <div class="fact-rows">
                <div class="fact-row"><span>{"Alcance:"}</span><strong>{ c.scope }</strong></div>
                <div class="fact-row"><span>{"Foco:"}</span><strong>{ c.focus }</strong></div>
                <div class="fact-row"><span>{"Público:"}</span><strong>{ c.students }</strong></div>
            </div>
            <div class="differentiator" style={format!("background: {}", c.gradient)}>
                { c.differentiator }
            </div>
        </div>
    }
}

#[function_component(CompetitorsSection)]
pub fn competitors_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".competitors-title"),
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
                        reveal::elements_in(&section, ".competitor-card"),
                        RevealOptions {
                            config: RevealConfig::default(),
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".beeedu-advantage"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                delay: 500.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 70%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                }
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="section" id="concorrentes">
            <BackgroundEffects />
            <div class="container">
                <SectionTitle class="competitors-title">
                    {"Plataformas e Iniciativas Globais de Educação Profissionalizante"}
                </SectionTitle>
                <p class="lead center intro-gap">
                    {"Ao redor do mundo existem várias plataformas que integram escolas com o \
                      setor produtivo. Analisamos os principais players globais para posicionar \
                      a Beeedu de forma única no mercado brasileiro."}
                </p>

                <div class="grid grid-3">
                    { for COMPETITORS.iter().map(competitor_card) }
                </div>

                <div class="beeedu-advantage summary-panel">
                    <h3 class="panel-title">{"Diferencial Competitivo da Beeedu"}</h3>
                    <div class="grid grid-3">
                        <div class="stat-block">
                            <div class="advantage-icon gradient-blue">{"🎯"}</div>
                            <h4 class="stat-label">{"Foco no Brasil"}</h4>
                            <p class="stat-note">
                                {"Única plataforma focada especificamente na realidade da \
                                  educação pública brasileira e mercado local."}
                            </p>
                        </div>
                        <div class="stat-block">
                            <div class="advantage-icon gradient-green">{"⚡"}</div>
                            <h4 class="stat-label">{"Job Draft System"}</h4>
                            <p class="stat-note">
                                {"Sistema exclusivo onde empresas fazem ofertas formais baseadas \
                                  em performance real durante a formação."}
                            </p>
                        </div>
                        <div class="stat-block">
                            <div class="advantage-icon gradient-amber">{"🎮"}</div>
                            <h4 class="stat-label">{"Gamificação Brasileira"}</h4>
                            <p class="stat-note">
                                {"Insígnias temáticas com abelhas nativas brasileiras e mecânicas \
                                  de jogo adaptadas à cultura local."}
                            </p>
                        </div>
                    </div>
                    <div class="pill-note">
                        <span class="accent-blue">{"🐝"}</span>
                        <span>
                            {"Beeedu: A única plataforma que combina educação, renda imediata e \
                              empregabilidade garantida"}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
