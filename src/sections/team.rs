use web_sys::Element;
use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::components::team_avatar::TeamAvatar;
use crate::reveal::{self, FloatConfig, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Member {
    name: &'static str,
    role: &'static str,
    description: &'static str,
    avatar: &'static str,
    gradient: &'static str,
    initials: &'static str,
}

const TEAM: [Member; 6] = [
    Member {
        name: "Nicholas Oliveira",
        role: "CEO / P.O / Designer",
        description: "Visionário por trás da missão de conectar educação ao mercado de trabalho",
        avatar: "https://media.licdn.com/dms/image/v2/D4D03AQHCgaH-6EF9Aw/profile-displayphoto-shrink_200_200/B4DZWEj5v3HAAY-/0/1741685759398",
        gradient: "linear-gradient(135deg, #6699FF, #5588EE)",
        initials: "NO",
    },
    Member {
        name: "Felipe Barros",
        role: "Desenvolvedor Fullstack",
        description: "Especialista em desenvolvimento completo, do front-end ao back-end",
        avatar: "/felipe.png",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
        initials: "FB",
    },
    Member {
        name: "Murilo Chleba",
        role: "Desenvolvedor Back-end",
        description: "Arquiteto de sistemas robustos e escaláveis para a plataforma",
        avatar: "https://media.licdn.com/dms/image/v2/D4D03AQHLB2VPpacTSw/profile-displayphoto-shrink_200_200/B4DZO4WmFSGgAY-/0/1733964751779",
        gradient: "linear-gradient(135deg, #FACC15, #F59E0B)",
        initials: "MC",
    },
    Member {
        name: "Igor Vinicius",
        role: "Partnership Manager",
        description: "Responsável por conectar empresas e construir o ecossistema Beeedu",
        avatar: "https://media.licdn.com/dms/image/v2/D5603AQH73tJ-UNJnSg/profile-displayphoto-shrink_200_200/B56ZWZchb0HsAY-/0/1742036147019",
        gradient: "linear-gradient(135deg, #EF4444, #DC2626)",
        initials: "IV",
    },
    Member {
        name: "Andre Vilela",
        role: "Desenvolvedor Front-end",
        description: "Especialista em interfaces intuitivas e experiência do usuário",
        avatar: "https://media.licdn.com/dms/image/v2/D4D03AQHZZu9ER6Dinw/profile-displayphoto-shrink_200_200/0/1719022366072",
        gradient: "linear-gradient(135deg, #8B5CF6, #7C3AED)",
        initials: "AV",
    },
    Member {
        name: "Thiago Henrique",
        role: "Project Manager / UI UX",
        description: "Gestor de projetos e designer de experiências excepcionais",
        avatar: "https://media.licdn.com/dms/image/v2/D4D03AQHabXhYG2VDTw/profile-displayphoto-shrink_200_200/0/1732138241480",
        gradient: "linear-gradient(135deg, #06B6D4, #0891B2)",
        initials: "TH",
    },
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut reveals = Vec::new();
                let mut floats = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    reveals.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".team-intro"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                duration: 1_000.0,
                                stagger: 200.0,
                                ..Default::default()
                            },
                            replay: true,
                            ..Default::default()
                        },
                    ));

                    // Entrance on the grid slots, idle drift on the cards
                    // inside, so the two effects own different elements.
                    let slots = reveal::elements_in(&section, ".team-slot");
                    let members = reveal::elements_in(&section, ".team-member");
                    reveals.push(reveal::mount_reveal_group(
                        section,
                        slots,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    floats.push(reveal::mount_float_loop(
                        members,
                        FloatConfig { amplitude: 2.0, duration: 8_000.0, spread: 4_000.0 },
                    ));
                }
                move || {
                    drop(reveals);
                    drop(floats);
                }
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="section section-tinted" id="equipe">
            <div class="container">
                <div class="center intro-gap">
                    <SectionTitle class="team-intro">
                        {"A colmeia por trás da transformação."}
                    </SectionTitle>

                    <p class="team-intro lead">
                        {"Conheça as mentes visionárias que trabalham incansavelmente para \
                          conectar educação, trabalho e oportunidade. Cada membro da nossa \
                          equipe traz expertise única para construir o futuro da educação \
                          profissionalizante."}
                    </p>

                    <div class="team-intro team-photo">
                        <img src="/post.jpg" alt="Equipe Beeedu" />
                        <div class="team-photo-caption">
                            <p class="team-photo-title">{"Equipe Beeedu 2024"}</p>
                            <p>
                                {"Unidos pela missão de transformar a educação brasileira e \
                                  conectar talentos ao mercado de trabalho."}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="grid grid-3">
                    { for TEAM.iter().map(|m| html! {
                        <div class="team-slot">
                            <div class="team-member card center">
                                <div class="team-avatar">
                                    <TeamAvatar
                                        src={m.avatar}
                                        alt={format!("{} - {}", m.name, m.role)}
                                        initials={m.initials}
                                        gradient={m.gradient}
                                    />
                                </div>
                                <h3 class="card-title">{ m.name }</h3>
                                <p class="card-subtitle accent-blue">{ m.role }</p>
                                <p class="card-text">{ m.description }</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="center">
                    <div class="pill-note">
                        <span>{"Juntos, construindo o futuro da educação brasileira"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
