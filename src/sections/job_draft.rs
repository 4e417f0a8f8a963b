use web_sys::Element;
use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

const CONFETTI_COUNT: usize = 15;
const POPUP_DELAY_MS: f64 = 1_200.0;

#[function_component(JobDraftSection)]
pub fn job_draft_section() -> Html {
    let section_ref = use_node_ref();
    let popup_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let popup_ref = popup_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".job-draft-item"),
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

                    // The draft notification springs in once, a beat after the
                    // profile card has scrolled well into view, and celebrates
                    // with a confetti burst. It never replays.
                    if let Some(popup) = popup_ref.cast::<Element>() {
                        handles.push(reveal::mount_reveal_group_with(
                            section,
                            Vec::new(),
                            RevealOptions {
                                start: StartOffset::parse("top 50%").unwrap_or_default(),
                                replay: false,
                                ..Default::default()
                            },
                            move |tl| {
                                reveal::schedule_pop_in(&popup, POPUP_DELAY_MS, tl);
                                reveal::schedule_confetti(&popup, CONFETTI_COUNT, POPUP_DELAY_MS, tl);
                            },
                        ));
                    }
                }
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="section section-soft">
            <div class="container narrow center">
                <SectionTitle class="job-draft-item">
                    {"Seja \"draftado\" pelo mercado."}
                </SectionTitle>

                <p class="job-draft-item lead intro-gap">
                    {"Nosso sistema de Job Draft permite que empresas façam ofertas formais de \
                      trabalho com base no seu desempenho real na plataforma. Aqui, seu mérito \
                      abre as portas antes mesmo de você bater nelas."}
                </p>

                <div class="job-draft-item profile-demo">
                    <div class="profile-card card">
                        <div class="profile-head">
                            <div class="profile-avatar">{"JS"}</div>
                            <div class="profile-ident">
                                <h3>{"João Silva"}</h3>
                                <p>{"Desenvolvedor Frontend"}</p>
                            </div>
                        </div>
                        <div class="profile-stats">
                            <div class="fact-row">
                                <span>{"Projetos concluídos"}</span>
                                <strong class="accent-blue">{"12"}</strong>
                            </div>
                            <div class="fact-row">
                                <span>{"Avaliação média"}</span>
                                <strong class="accent-amber">{"4.9 ★★★★★"}</strong>
                            </div>
                            <div class="fact-row">
                                <span>{"Insígnias conquistadas"}</span>
                                <strong class="accent-green">{"8"}</strong>
                            </div>
                        </div>
                    </div>

                    <div ref={popup_ref} class="draft-popup">
                        <div class="draft-popup-head">
                            <svg width="20" height="20" fill="currentColor" viewBox="0 0 24 24">
                                <path d="M12 2L13.09 8.26L20 9L13.09 9.74L12 16L10.91 9.74L4 9L10.91 8.26L12 2Z" />
                            </svg>
                            <span>{"Parabéns!"}</span>
                        </div>
                        <p>
                            {"Você foi draftado pela "}<strong>{"TechCorp"}</strong>
                            {" para a vaga de Frontend Developer!"}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
