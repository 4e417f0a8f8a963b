use web_sys::Element;
use yew::prelude::*;

use crate::components::ecosystem_card::{EcosystemCard, EcosystemIcon};
use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Step {
    title: &'static str,
    icon: EcosystemIcon,
    description: &'static str,
    gradient: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Aprenda",
        icon: EcosystemIcon::Book,
        description: "Cursos profissionalizantes e trilhas formativas de alto impacto, criados \
                      em parceria com empresas reais do mercado.",
        gradient: "linear-gradient(135deg, #3B82F6, #2563EB)",
    },
    Step {
        title: "Aplique",
        icon: EcosystemIcon::Tool,
        description: "Freelas e projetos remunerados (a partir de R$ 25) que proporcionam renda \
                      e experiência imediata desde o início dos estudos.",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
    },
    Step {
        title: "Evolua",
        icon: EcosystemIcon::Trophy,
        description: "Sistema de gamificação com pontos, níveis e insígnias temáticas. \
                      Certificados com validação real do mercado de trabalho.",
        gradient: "linear-gradient(135deg, #EAB308, #F97316)",
    },
    Step {
        title: "Seja Reconhecido",
        icon: EcosystemIcon::Rocket,
        description: "Receba ofertas reais de trabalho através do nosso sistema exclusivo de \
                      Job Drafts. Empresas te descobrem pelo seu mérito.",
        gradient: "linear-gradient(135deg, #A855F7, #9333EA)",
    },
];

const METRICS: [(&str, &str); 4] = [
    ("89%", "Taxa de conclusão"),
    ("4.8★", "Avaliação média"),
    ("R$ 3.2k", "Salário médio"),
    ("47+", "Empresas parceiras"),
];

#[function_component(EcosystemSection)]
pub fn ecosystem_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".ecosystem-title"),
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
                        reveal::elements_in(&section, ".ecosystem-card"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(40.0).with_scale(0.98),
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 90%").unwrap_or_default(),
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
        <section ref={section_ref} class="section" id="como-funciona">
            <BackgroundEffects />
            <div class="container">
                <div class="center">
                    <div class="pill accent-blue">{"🐝 O que é a Beeedu?"}</div>
                    <p class="lead intro-gap">
                        <strong>{"\"Bee\""}</strong>{" (comunidade) + "}
                        <strong>{"\"Edu\""}</strong>{" (educação) + referência ao "}
                        <strong>{"\"bidu\""}</strong>
                        {" (esperto). Uma plataforma digital que conecta estudantes ao mercado \
                          de trabalho, recompensando o mérito e criando um ecossistema \
                          colaborativo, vivo e justo."}
                    </p>
                </div>

                <SectionTitle class="ecosystem-title">
                    {"Como Funciona: A Jornada do Estudante"}
                </SectionTitle>

                <div class="grid grid-4">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="step-slot">
                            <EcosystemCard
                                title={step.title}
                                icon={step.icon}
                                description={step.description}
                                gradient={step.gradient}
                            />
                            <div class="step-number">{ i + 1 }</div>
                        </div>
                    }) }
                </div>

                <div class="summary-panel center">
                    <h3 class="panel-title">{"🎯 Resultados Comprovados"}</h3>
                    <div class="grid grid-4">
                        { for METRICS.iter().map(|(value, label)| html! {
                            <div class="stat-block">
                                <div class="stat-value accent-blue">{ *value }</div>
                                <div class="stat-note">{ *label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
