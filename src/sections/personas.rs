use web_sys::Element;
use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::components::team_avatar::TeamAvatar;
use crate::reveal::{self, Ease, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Persona {
    name: &'static str,
    age: &'static str,
    occupation: &'static str,
    location: &'static str,
    image: &'static str,
    initials: &'static str,
    description: &'static str,
    challenges: &'static [&'static str],
    pain_points: &'static [&'static str],
    quote: &'static str,
    kind: &'static str,
    icon: &'static str,
}

const PERSONAS: [Persona; 3] = [
    Persona {
        name: "Ana Julia",
        age: "17 anos",
        occupation: "Estudante do Ensino Médio",
        location: "Escola Pública - Periferia",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&h=300&fit=crop&crop=face",
        initials: "AJ",
        description: "Estuda em escola pública e vive na favela. Carrega o sonho de muitas \
                      meninas: ter voz, vez e um futuro possível.",
        challenges: &[
            "Vê colegas desistindo da escola porque já não acreditam em mudança",
            "Falta ponte entre o que a gente ensina e o que o mercado exige",
        ],
        pain_points: &[
            "Estou cansada de fazer várias entrevistas e nunca ter resposta",
            "Empresas exigindo experiência demais, com regras que parecem feitas pra manter o jovem de fora",
            "Procura oportunidades, mas não sabe se são para ela",
        ],
        quote: "Estou cansada de fazer várias entrevistas e nunca ter resposta.",
        kind: "Jovem Talento",
        icon: "👩‍🎓",
    },
    Persona {
        name: "Professora Sandra",
        age: "42 anos",
        occupation: "Coordenadora Pedagógica",
        location: "Escola Pública - 18 anos na educação",
        image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=300&h=300&fit=crop&crop=face",
        initials: "PS",
        description: "Coordenadora pedagógica muito engajada com o futuro dos alunos. \
                      Trabalha há 18 anos na educação.",
        challenges: &[
            "Vê alunos desistindo porque não enxergam futuro",
            "Não falta talento, falta oportunidade",
        ],
        pain_points: &[
            "Vejo alunos desistindo porque não enxergam futuro",
            "Não falta talento, falta oportunidade",
            "Quero mostrar que a escola pode abrir portas",
        ],
        quote: "Vejo alunos desistindo porque não enxergam futuro. Não falta talento, falta oportunidade.",
        kind: "Educadora",
        icon: "👩‍🏫",
    },
    Persona {
        name: "Abner Micael",
        age: "25 anos",
        occupation: "Empresário - Fundador da Everdados",
        location: "Startup de IA para Aviação",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop&crop=face",
        initials: "AM",
        description: "Fundador da Everdados, startup que desenvolve soluções com IA voltadas \
                      à aviação e quer abrir portas para jovens entrarem na tecnologia.",
        challenges: &[
            "A formação que existe ignora os desafios reais da indústria",
            "A demanda existe, o desafio é achar quem esteja pronto",
        ],
        pain_points: &[
            "A formação que existe ignora os desafios reais da indústria",
            "Toda semana tem entrevista. Toda semana, a vaga continua aberta",
            "Mesmo quando contrato, levo meses pra ter retorno real",
            "A demanda existe, o desafio é achar quem esteja pronto",
        ],
        quote: "A demanda existe, o desafio é achar quem esteja pronto.",
        kind: "Empresário",
        icon: "👨‍💼",
    },
];

fn persona_card(persona: &Persona) -> Html {
    html! {
        <div class="persona-card card">
            <div class="persona-head">
                <div class="persona-avatar">
                    <TeamAvatar
                        src={persona.image}
                        alt={persona.name}
                        initials={persona.initials}
                        gradient="linear-gradient(135deg, #6699FF, #2F4A60)"
                    />
                    <span class="persona-emoji">{ persona.icon }</span>
                </div>
                <h3 class="persona-name">{ persona.name }</h3>
                <p class="persona-age">{ persona.age }</p>
                <p class="persona-occupation">{ persona.occupation }</p>
                <p class="persona-location">{ persona.location }</p>
                <span class="persona-kind">{ persona.kind }</span>
            </div>

            <p class="persona-description">{ persona.description }</p>

            <blockquote class="persona-quote">{ format!("\"{}\"", persona.quote) }</blockquote>

            <div class="persona-details">
                <h4 class="persona-list-title">{"⚡ Principais Desafios"}</h4>
                <ul class="dot-list amber">
                    { for persona.challenges.iter().map(|c| html! { <li>{ *c }</li> }) }
                </ul>
                <h4 class="persona-list-title">{"😰 Dificuldades Específicas"}</h4>
                <ul class="dot-list red">
                    { for persona.pain_points.iter().map(|p| html! { <li>{ *p }</li> }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(PersonaSection)]
pub fn persona_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".persona-title"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(50.0),
                                duration: 1_000.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 80%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".persona-card"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(60.0),
                                duration: 1_000.0,
                                stagger: 200.0,
                                ease: Ease::PowerOut(3),
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 70%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".persona-details"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_x(-30.0),
                                duration: 800.0,
                                delay: 300.0,
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
        <section ref={section_ref} class="section section-tinted">
            <div class="container">
                <div class="center intro-gap">
                    <SectionTitle class="persona-title">
                        {"Nosso Ecossistema de Talentos"}
                    </SectionTitle>
                    <p class="lead">
                        {"A Beeedu conecta três perspectivas fundamentais: jovens em busca de \
                          oportunidades, educadores comprometidos com o futuro dos alunos, e \
                          empresários que precisam de talentos preparados para os desafios \
                          reais do mercado."}
                    </p>
                </div>

                <div class="grid grid-3">
                    { for PERSONAS.iter().map(persona_card) }
                </div>

                <div class="summary-panel">
                    <h3 class="panel-title">{"A Beeedu Conecta Todos os Pontos"}</h3>
                    <p class="panel-text">
                        {"Nossa plataforma foi criada para resolver os desafios enfrentados por \
                          todos os stakeholders: oferecemos aos jovens oportunidades reais de \
                          crescimento, aos educadores ferramentas para engajar alunos, e aos \
                          empresários acesso a talentos preparados através da prática."}
                    </p>
                    <div class="grid grid-3">
                        <div class="stat-block">
                            <div class="stat-emoji">{"👩‍🎓"}</div>
                            <div class="stat-label accent-blue">{"Jovens"}</div>
                            <div class="stat-note">{"Experiência prática + Oportunidades reais"}</div>
                        </div>
                        <div class="stat-block">
                            <div class="stat-emoji">{"👩‍🏫"}</div>
                            <div class="stat-label accent-green">{"Educadores"}</div>
                            <div class="stat-note">{"Engajamento + Ponte para o mercado"}</div>
                        </div>
                        <div class="stat-block">
                            <div class="stat-emoji">{"👨‍💼"}</div>
                            <div class="stat-label accent-amber">{"Empresários"}</div>
                            <div class="stat-note">{"Talentos preparados + Resultados rápidos"}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
