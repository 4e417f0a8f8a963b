use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Audience {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    icon: &'static str,
    gradient: &'static str,
}

const AUDIENCES: [Audience; 3] = [
    Audience {
        title: "Para Alunos",
        subtitle: "Aprenda, pratique e ganhe",
        description: "Acesso a cursos profissionalizantes, freelas remunerados desde o início, \
                      sistema de gamificação com insígnias exclusivas e oportunidades reais de \
                      emprego via Job Draft.",
        features: &[
            "Cursos gratuitos ou com desconto para escolas públicas",
            "Freelas a partir de R$ 25,00",
            "Sistema de níveis e insígnias temáticas",
            "Certificação digital reconhecida",
            "Job Draft para contratação antecipada",
        ],
        icon: "🎓",
        gradient: "linear-gradient(135deg, #6699FF, #5588EE)",
    },
    Audience {
        title: "Para Empresas",
        subtitle: "Recrute, forme e inove",
        description: "Acesso direto a talentos em formação, economia em processos seletivos, \
                      possibilidade de acompanhar evolução em tempo real e formar equipes com \
                      base em dados reais de performance.",
        features: &[
            "Recrutamento baseado em dados reais",
            "Economia em processos seletivos",
            "Formação customizada de talentos",
            "Sistema de avaliação transparente",
            "Parcerias estratégicas com benefícios",
        ],
        icon: "🏢",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
    },
    Audience {
        title: "Para Professores",
        subtitle: "Ensine, conecte e prospere",
        description: "Plataforma para criar cursos, conectar-se com empresas, acompanhar \
                      progresso dos alunos e receber remuneração justa por impacto educacional \
                      comprovado.",
        features: &[
            "Criação de cursos com validação editorial",
            "Conexão direta com empresas",
            "Acompanhamento detalhado de alunos",
            "Remuneração por performance",
            "Contratos garantidos pela plataforma",
        ],
        icon: "👨‍🏫",
        gradient: "linear-gradient(135deg, #F59E0B, #D97706)",
    },
];

#[function_component(BusinessModelSection)]
pub fn business_model_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".business-title"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                ..Default::default()
                            },
                            replay: true,
                            ..Default::default()
                        },
                    ));
                    let cards = reveal::elements_in(&section, ".business-card");
                    handles.push(reveal::mount_reveal_group(
                        section,
                        cards,
                        RevealOptions {
                            config: RevealConfig {
                                stagger: 150.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
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
        <section ref={section_ref} class="section">
            <BackgroundEffects />
            <div class="container">
                <div class="center intro-gap">
                    <SectionTitle class="business-title">
                        {"Proposta de Valor por Audiência"}
                    </SectionTitle>
                    <p class="lead">
                        {"A Beeedu oferece soluções específicas para cada perfil, criando um \
                          ecossistema onde todos prosperam através da educação conectada ao \
                          mercado."}
                    </p>
                </div>

                <div class="grid grid-3">
                    { for AUDIENCES.iter().map(|a| html! {
                        <div class="business-card card">
                            <div class="advantage-icon" style={format!("background: {}", a.gradient)}>
                                { a.icon }
                            </div>
                            <h3 class="card-title">{ a.title }</h3>
                            <p class="card-subtitle accent-blue">{ a.subtitle }</p>
                            <p class="card-text">{ a.description }</p>
                            <ul class="dot-list">
                                { for a.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                            <button class="btn btn-gradient" style={format!("background: {}", a.gradient)}>
                                {"Saiba Mais"}
                            </button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
