use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::{BackdropVariant, BackgroundEffects};
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, FloatConfig, RevealConfig, RevealOptions, StartOffset, VisualState};

const INSTITUTIONAL_LINKS: [(&str, &str); 5] = [
    ("/sobre", "Sobre"),
    ("/cursos", "Cursos"),
    ("/parceiros", "Parceiros"),
    ("/termos", "Termos"),
    ("/privacidade", "Privacidade"),
];

const COMMUNITY_LINKS: [(&str, &str); 3] = [
    ("https://whatsapp.com/beeedu", "WhatsApp"),
    ("https://discord.gg/beeedu", "Discord"),
    ("https://linkedin.com/company/beeedu", "LinkedIn"),
];

const RESOURCE_LINKS: [(&str, &str); 5] = [
    ("/blog", "Blog"),
    ("/carreiras", "Carreiras"),
    ("/imprensa", "Imprensa"),
    ("/contato", "Contato"),
    ("/ajuda", "Central de Ajuda"),
];

#[function_component(CtaFooterSection)]
pub fn cta_footer_section() -> Html {
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
                        reveal::elements_in(&section, ".cta-item"),
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
                    reveals.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".footer-item"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(30.0),
                                delay: 600.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 70%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    // Bee and honey emojis bob up and down forever.
                    floats.push(reveal::mount_float_loop(
                        reveal::elements_in(&section, ".floating-element"),
                        FloatConfig { amplitude: 5.0, duration: 2_000.0, spread: 900.0 },
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
        <section ref={section_ref} class="cta-footer" id="cta">
            <BackgroundEffects variant={BackdropVariant::Dark} />
            <div class="cta-block">
                <div class="container center">
                    <SectionTitle class="cta-item on-dark">
                        {"Faça parte da colmeia que está transformando o futuro."}
                    </SectionTitle>

                    <p class="cta-item cta-lead">
                        {"Seja você um estudante pronto para decolar, ou uma empresa buscando \
                          talentos com propósito. O seu lugar é na Beeedu."}
                    </p>

                    <div class="cta-item grid grid-2 cta-cards">
                        <div class="cta-card">
                            <div class="floating-element cta-card-icon">{"🐝"}</div>
                            <h3>{"Para Estudantes"}</h3>
                            <p>
                                {"Aprenda, pratique e ganhe dinheiro desde o primeiro dia. \
                                  Freelas remunerados, gamificação e Job Draft exclusivo."}
                            </p>
                        </div>
                        <div class="cta-card">
                            <div class="floating-element cta-card-icon">{"🚀"}</div>
                            <h3>{"Para Empresas"}</h3>
                            <p>
                                {"Recrute talentos com base em performance real. Acompanhe \
                                  evolução, ofereça projetos e contrate com dados."}
                            </p>
                        </div>
                    </div>

                    <div class="cta-item cta-divider">
                        <span class="divider-line"></span>
                        <span class="floating-element">{"🍯"}</span>
                        <span class="divider-line"></span>
                    </div>
                </div>
            </div>

            <footer class="footer-block">
                <div class="container">
                    <div class="grid grid-4 footer-columns">
                        <div class="footer-item">
                            <span class="logo-text">{"BEEEDU"}</span>
                            <p class="footer-note">
                                {"Conectando educação ao mercado de trabalho através de uma \
                                  plataforma colaborativa, viva e justa."}
                            </p>
                            <div class="footer-motto">
                                <span class="floating-element">{"🐝"}</span>
                                <span>{"Formar • Ensinar • Conectar"}</span>
                            </div>
                        </div>

                        <div class="footer-item">
                            <h3 class="footer-heading accent-blue">{"Institucional"}</h3>
                            <ul class="footer-links">
                                { for INSTITUTIONAL_LINKS.iter().map(|(href, label)| html! {
                                    <li><a href={*href}>{ *label }</a></li>
                                }) }
                            </ul>
                        </div>

                        <div class="footer-item">
                            <h3 class="footer-heading accent-green">{"Comunidade"}</h3>
                            <ul class="footer-links">
                                { for COMMUNITY_LINKS.iter().map(|(href, label)| html! {
                                    <li><a href={*href}>{ *label }</a></li>
                                }) }
                            </ul>
                        </div>

                        <div class="footer-item">
                            <h3 class="footer-heading accent-amber">{"Recursos"}</h3>
                            <ul class="footer-links">
                                { for RESOURCE_LINKS.iter().map(|(href, label)| html! {
                                    <li><a href={*href}>{ *label }</a></li>
                                }) }
                            </ul>
                        </div>
                    </div>

                    <div class="footer-item footer-bottom">
                        <div>
                            <p class="footer-note">
                                {"© 2024 Beeedu. Todos os direitos reservados."}
                            </p>
                            <p class="footer-fineprint">
                                {"Conectando educação ao mercado de trabalho desde 2024 • CNPJ: \
                                  XX.XXX.XXX/0001-XX"}
                            </p>
                        </div>
                        <div class="footer-proof">
                            <span>
                                <span class="accent-green">{"●"}</span>
                                {" 2.847+ estudantes ativos"}
                            </span>
                            <span>
                                <span class="accent-amber">{"●"}</span>
                                {" 47+ empresas parceiras"}
                            </span>
                            <p class="footer-fineprint">{"Plataforma em constante crescimento"}</p>
                        </div>
                    </div>

                    <div class="footer-item footer-signoff">
                        <span class="floating-element">{"🐝"}</span>
                        <span>{"Feito com propósito pela colmeia Beeedu"}</span>
                        <span class="floating-element">{"🍯"}</span>
                    </div>
                </div>
            </footer>
        </section>
    }
}
