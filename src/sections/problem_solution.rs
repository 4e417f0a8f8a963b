use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::{BackdropIntensity, BackgroundEffects};
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

#[function_component(ProblemSolutionSection)]
pub fn problem_solution_section() -> Html {
    let section_ref = use_node_ref();
    let bridge_ref = use_node_ref();
    let arc_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let bridge_ref = bridge_ref.clone();
        let arc_ref = arc_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    let members = reveal::elements_in(&section, ".problem-item");
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        members,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(50.0),
                                duration: 1_000.0,
                                stagger: 200.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 80%").unwrap_or_default(),
                            replay: true,
                        },
                    ));

                    // The arc draws itself once the bridge scrolls well into
                    // view, then sparks a small burst where it lands.
                    if let (Some(arc), Some(bridge)) =
                        (arc_ref.cast::<Element>(), bridge_ref.cast::<Element>())
                    {
                        handles.push(reveal::mount_bridge_draw(section, arc, bridge));
                    }
                }
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="section section-tinted" id="problema">
            <BackgroundEffects intensity={BackdropIntensity::Low} />
            <div class="container narrow center">
                <SectionTitle class="problem-item">
                    {"Chega de se formar para o desemprego."}
                </SectionTitle>

                <div class="problem-item block">
                    <h3 class="subheading accent-blue">{"O Cenário Atual"}</h3>
                    <p class="lead">
                        {"Não aceitamos um sistema onde designers viram balconistas e \
                          engenheiros viram motoristas de aplicativo. A grande desconexão \
                          entre escola e mercado de trabalho é uma injustiça que a Beeedu \
                          veio resolver."}
                    </p>
                </div>

                <div class="problem-item block" id="solucao">
                    <h3 class="subheading accent-green">{"A Missão Beeedu"}</h3>
                    <p class="lead">
                        <strong>{"\"Formar para empregar. Ensinar para transformar. \
                                  Conectar para prosperar.\""}</strong>
                    </p>
                    <p class="lead">
                        {"A Beeedu integra educação, prática profissional e empregabilidade \
                          em um único ecossistema vivo. Uma plataforma com alma de colmeia: "}
                        <strong>{"colaborativa, viva e justa"}</strong>{"."}
                    </p>
                </div>

                <div ref={bridge_ref} class="problem-item bridge">
                    <div class="bridge-node">
                        <div class="bridge-circle gradient-blue">
                            <svg width="48" height="48" fill="currentColor" viewBox="0 0 24 24">
                                <path d="M12 3L1 9L12 15L21 12V17H23V10L12 3ZM5 13.18V17.18L12 21L19 17.18V13.18L12 17L5 13.18Z" />
                            </svg>
                        </div>
                        <span class="bridge-label">{"Escola"}</span>
                    </div>

                    <svg class="bridge-arc" width="250" height="80">
                        <defs>
                            <linearGradient id="bridgeGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                                <stop offset="0%" stop-color="#6699FF" />
                                <stop offset="50%" stop-color="#5588EE" />
                                <stop offset="100%" stop-color="#22C55E" />
                            </linearGradient>
                        </defs>
                        <path
                            ref={arc_ref}
                            d="M 20 40 Q 125 15 230 40"
                            stroke="url(#bridgeGradient)"
                            stroke-width="4"
                            fill="none"
                            stroke-linecap="round"
                        />
                    </svg>

                    <div class="bridge-node">
                        <div class="bridge-circle gradient-green">
                            <svg width="48" height="48" fill="currentColor" viewBox="0 0 24 24">
                                <path d="M12 2L13.09 8.26L20 9L13.09 9.74L12 16L10.91 9.74L4 9L10.91 8.26L12 2Z" />
                            </svg>
                        </div>
                        <span class="bridge-label">{"Mercado"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
