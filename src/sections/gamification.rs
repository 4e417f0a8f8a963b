use web_sys::Element;
use yew::prelude::*;

use crate::components::badge_card::BadgeCard;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, Ease, FloatConfig, RevealConfig, RevealOptions, StartOffset, VisualState};

struct Badge {
    name: &'static str,
    rarity: &'static str,
    gradient: &'static str,
    icon: &'static str,
    level: &'static str,
    special: bool,
    women_only: bool,
}

const BADGES: [Badge; 5] = [
    Badge {
        name: "Guardião das Abelhas",
        rarity: "Lendária",
        gradient: "linear-gradient(135deg, #FACC15, #F59E0B, #F97316)",
        icon: "🐝",
        level: "Nível 10",
        special: false,
        women_only: false,
    },
    Badge {
        name: "Sentinela do Mel",
        rarity: "Rara",
        gradient: "linear-gradient(135deg, #C084FC, #A855F7, #EC4899)",
        icon: "🍯",
        level: "Nível 95",
        special: false,
        women_only: false,
    },
    Badge {
        name: "Rainha das Abelhas",
        rarity: "Mítica",
        gradient: "linear-gradient(135deg, #F472B6, #A855F7, #6366F1)",
        icon: "👑",
        level: "Exclusivo Feminino",
        special: true,
        women_only: true,
    },
    Badge {
        name: "Mestre da Colmeia",
        rarity: "Lendária",
        gradient: "linear-gradient(135deg, #F87171, #EF4444, #FACC15)",
        icon: "🏅",
        level: "Nível 50",
        special: false,
        women_only: false,
    },
    Badge {
        name: "Explorador do Néctar",
        rarity: "Rara",
        gradient: "linear-gradient(135deg, #60A5FA, #3B82F6, #A855F7)",
        icon: "🌺",
        level: "Nível 25",
        special: false,
        women_only: false,
    },
];

#[function_component(GamificationSection)]
pub fn gamification_section() -> Html {
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
                        reveal::elements_in(&section, ".gamification-title"),
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
                    reveals.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".gamification-text"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                delay: 200.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 80%").unwrap_or_default(),
                            replay: true,
                        },
                    ));

                    // The entrance animates the slot wrappers while the idle
                    // bob drives the cards inside them, so the two never write
                    // to the same element.
                    let slots = reveal::elements_in(&section, ".badge-slot");
                    let badges = reveal::elements_in(&section, ".badge-card");
                    reveals.push(reveal::mount_reveal_group(
                        section,
                        slots,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(60.0),
                                duration: 1_000.0,
                                stagger: 150.0,
                                ease: Ease::PowerOut(3),
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 70%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    floats.push(reveal::mount_float_loop(
                        badges,
                        FloatConfig { amplitude: 3.0, duration: 4_000.0, spread: 2_000.0 },
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
        <section ref={section_ref} class="section">
            <div class="container narrow center">
                <SectionTitle class="gamification-title">
                    {"Seu progresso vira reconhecimento."}
                </SectionTitle>

                <div class="gamification-text intro-gap">
                    <p class="lead">
                        <strong>{"Sistema de Pontuação:"}</strong>
                        {" +25 pontos por módulo concluído, +150 por curso completo, +225 por \
                          freela entregue."}
                    </p>
                    <p class="lead">
                        {"Evolua através de níveis e colecione insígnias temáticas inspiradas em \
                          abelhas. Na Beeedu, seu mérito é visível e recompensado."}
                    </p>
                </div>

                <div class="badge-row">
                    { for BADGES.iter().map(|b| html! {
                        <div class="badge-slot">
                            <BadgeCard
                                class="badge-card"
                                name={b.name}
                                rarity={b.rarity}
                                gradient={b.gradient}
                                icon={b.icon}
                                level={b.level}
                                special={b.special}
                                women_only={b.women_only}
                            />
                        </div>
                    }) }
                </div>

                <div class="summary-panel">
                    <h3 class="panel-title">{"Mecânicas de Gamificação"}</h3>
                    <div class="grid grid-2 text-left">
                        <div>
                            <h4 class="subheading accent-blue">{"Freelas e Projetos:"}</h4>
                            <ul class="dot-list">
                                <li>{"Microprojetos pagos (a partir de R$ 25,00)"}</li>
                                <li>{"Desafios complexos (a partir de R$ 250,00)"}</li>
                                <li>{"Portfolio real e experiência prática"}</li>
                            </ul>
                        </div>
                        <div>
                            <h4 class="subheading accent-green">{"Sistema de Reputação:"}</h4>
                            <ul class="dot-list">
                                <li>{"Score de \"Confiabilidade\" para empresas"}</li>
                                <li>{"Baseado em conclusão de projetos"}</li>
                                <li>{"Histórico de pagamentos e feedbacks"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
