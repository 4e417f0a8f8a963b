use log::{info, Level};
use stylist::yew::Global;
use web_sys::Element;
use yew::prelude::*;

mod reveal;
mod style;

mod components {
    pub mod background_effects;
    pub mod badge_card;
    pub mod ecosystem_card;
    pub mod section_title;
    pub mod team_avatar;
}

mod sections {
    pub mod business_model;
    pub mod companies;
    pub mod competitors;
    pub mod continuity;
    pub mod cta_footer;
    pub mod ecosystem;
    pub mod gamification;
    pub mod hero;
    pub mod job_draft;
    pub mod personas;
    pub mod problem_solution;
    pub mod showcase;
    pub mod social_impact;
    pub mod team;
    pub mod viability;
}

use sections::{
    business_model::BusinessModelSection,
    companies::CompaniesSection,
    competitors::CompetitorsSection,
    continuity::ContinuitySection,
    cta_footer::CtaFooterSection,
    ecosystem::EcosystemSection,
    gamification::GamificationSection,
    hero::HeroSection,
    job_draft::JobDraftSection,
    personas::PersonaSection,
    problem_solution::ProblemSolutionSection,
    showcase::ShowcaseSection,
    social_impact::SocialImpactSection,
    team::TeamSection,
    viability::ViabilitySection,
};

use reveal::{Ease, RevealConfig, RevealOptions, VisualState};

#[function_component(Header)]
fn header() -> Html {
    let header_ref = use_node_ref();

    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(header) = header_ref.cast::<Element>() {
                    // The header is always in view, so the logo drops in
                    // right after mount.
                    let logo = reveal::elements_in(&header, ".header-item");
                    handles.push(reveal::mount_reveal_group(
                        header,
                        logo,
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(-50.0),
                                duration: 1_000.0,
                                delay: 500.0,
                                ease: Ease::PowerOut(3),
                                ..Default::default()
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
        <header ref={header_ref} class="site-header">
            <div class="container header-inner">
                <div class="header-item">
                    <span class="logo-text">{"BEEEDU"}</span>
                </div>
            </div>
        </header>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Global css={style::global()} />
            <Header />
            <main>
                <HeroSection />
                <ProblemSolutionSection />
                <PersonaSection />
                <CompetitorsSection />
                <EcosystemSection />
                <JobDraftSection />
                <GamificationSection />
                <ShowcaseSection />
                <BusinessModelSection />
                <SocialImpactSection />
                <CompaniesSection />
                <TeamSection />
                <ViabilitySection />
                <ContinuitySection />
                <CtaFooterSection />
            </main>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
