use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::{BackdropIntensity, BackdropVariant, BackgroundEffects};
use crate::reveal::{self, Ease, RevealConfig, RevealOptions, VisualState};

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    let members = reveal::elements_in(&section, ".hero-item");
                    // Section sits at the top, so the entrance starts right
                    // at mount after a one second hold.
                    handles.push(reveal::mount_reveal_group(
                        section,
                        members,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                duration: 1_000.0,
                                stagger: 400.0,
                                delay: 1_000.0,
                                ease: Ease::PowerOut(2),
                            },
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
        <section ref={section_ref} class="hero" id="inicio">
            <BackgroundEffects
                variant={BackdropVariant::Hero}
                intensity={BackdropIntensity::High}
            />
            <div class="container hero-inner">
                <h1 class="hero-item hero-title">
                    {"Formar para empregar. "}
                    <span class="hero-accent">{"Ensinar para transformar."}</span>
                    {" Conectar para prosperar."}
                </h1>
                <p class="hero-item hero-subtitle">
                    {"A Beeedu é a plataforma inovadora que conecta estudantes da rede \
                      pública ao mercado de trabalho de forma prática, escalável e \
                      sustentável. Uma ponte viva entre aprendizado, trabalho e renda."}
                </p>
            </div>
        </section>
    }
}
