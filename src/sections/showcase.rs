use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, RevealConfig, RevealOptions, StartOffset, VisualState};

struct ShowcaseItem {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    gradient: &'static str,
    stats: &'static str,
}

const SHOWCASE: [ShowcaseItem; 4] = [
    ShowcaseItem {
        title: "Honeycomb Token (HCT)",
        description: "Moeda digital nativa da plataforma. 1 HCT = R$1,00, utilizada para \
                      pagamentos de freelas, projetos e contratações.",
        icon: "🪙",
        gradient: "linear-gradient(135deg, #FACC15, #F59E0B)",
        stats: "Conversível para reais via Pix instantâneo",
    },
    ShowcaseItem {
        title: "Sistema de Níveis",
        description: "Progressão gamificada com insígnias temáticas inspiradas em abelhas \
                      nativas brasileiras, do 'Melzinho na Chupeta' ao 'Defensor das \
                      Polinizadoras'.",
        icon: "🏆",
        gradient: "linear-gradient(135deg, #22C55E, #16A34A)",
        stats: "100 níveis com fator multiplicador de 1,5x",
    },
    ShowcaseItem {
        title: "Job Draft System",
        description: "Sistema exclusivo onde empresas fazem ofertas formais de trabalho \
                      baseadas no desempenho real dos alunos durante a formação.",
        icon: "⚡",
        gradient: "linear-gradient(135deg, #6699FF, #5588EE)",
        stats: "Contratação antecipada com validação digital",
    },
    ShowcaseItem {
        title: "Freelas Remunerados",
        description: "Microprojetos a partir de R$25,00 que proporcionam renda e experiência \
                      prática desde o início dos estudos.",
        icon: "💼",
        gradient: "linear-gradient(135deg, #8B5CF6, #7C3AED)",
        stats: "Experiência real + Portfolio profissional",
    },
];

struct FeatureCategory {
    category: &'static str,
    features: &'static [&'static str],
    icon: &'static str,
    gradient: &'static str,
}

const FEATURES: [FeatureCategory; 4] = [
    FeatureCategory {
        category: "Educação Gamificada",
        features: &[
            "Insígnias com abelhas nativas brasileiras",
            "Progressão de níveis com multiplicador 1,5x",
            "Feed social acadêmico entre amigos",
            "Ranking e recompensas por mérito",
        ],
        icon: "🎮",
        gradient: "linear-gradient(135deg, #A855F7, #EC4899)",
    },
    FeatureCategory {
        category: "Experiência Profissional",
        features: &[
            "Freelas remunerados desde R$25,00",
            "Projetos reais com empresas parceiras",
            "Sistema de Draft para contratação",
            "Carteira digital com Honeycomb Token",
        ],
        icon: "💼",
        gradient: "linear-gradient(135deg, #3B82F6, #06B6D4)",
    },
    FeatureCategory {
        category: "Tecnologia Avançada",
        features: &[
            "Avaliações com detecção de IA",
            "Certificação blockchain com QR",
            "Chat contextualizado com WebRTC",
            "Automações via N8N e integrações",
        ],
        icon: "🚀",
        gradient: "linear-gradient(135deg, #22C55E, #10B981)",
    },
    FeatureCategory {
        category: "Impacto Social",
        features: &[
            "Vínculo com escolas públicas",
            "Programa de afiliados para educadores",
            "Parcerias com ONGs e governos",
            "Espaços físicos colaborativos",
        ],
        icon: "🌍",
        gradient: "linear-gradient(135deg, #F97316, #EF4444)",
    },
];

const TECH_STACK: [(&str, &str, &str); 6] = [
    ("Laravel", "Backend robusto", "🔧"),
    ("React", "Interface moderna", "⚛️"),
    ("MongoDB", "Banco NoSQL", "🍃"),
    ("N8N", "Automações", "🔄"),
    ("WebRTC", "Chat integrado", "📹"),
    ("Figma", "Design System", "🎨"),
];

const STATS: [(&str, &str, &str); 4] = [
    ("25+", "Pontos por módulo", "accent-blue"),
    ("R$ 25", "Valor mínimo freelas", "accent-green"),
    ("3,5%", "Taxa da plataforma", "accent-amber"),
    ("100%", "Foco empregabilidade", "accent-red"),
];

#[function_component(ShowcaseSection)]
pub fn showcase_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".showcase-title"),
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
                        reveal::elements_in(&section, ".showcase-card"),
                        RevealOptions {
                            config: RevealConfig::default(),
                            start: StartOffset::parse("top 75%").unwrap_or_default(),
                            replay: true,
                        },
                    ));
                    handles.push(reveal::mount_reveal_group(
                        section.clone(),
                        reveal::elements_in(&section, ".feature-category"),
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
                        reveal::elements_in(&section, ".tech-item"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::offset_y(20.0),
                                duration: 600.0,
                                stagger: 50.0,
                                ..Default::default()
                            },
                            replay: true,
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
        <section ref={section_ref} class="section">
            <BackgroundEffects />
            <div class="container">
                <div class="center intro-gap">
                    <SectionTitle class="showcase-title">
                        {"Inovação que transforma educação em oportunidade."}
                    </SectionTitle>
                    <p class="lead">
                        {"Conheça as funcionalidades exclusivas que fazem da Beeedu a ponte \
                          definitiva entre aprendizado e mercado de trabalho."}
                    </p>
                </div>

                <div class="grid grid-4">
                    { for SHOWCASE.iter().map(|item| html! {
                        <div class="showcase-card card center">
                            <div class="advantage-icon" style={format!("background: {}", item.gradient)}>
                                { item.icon }
                            </div>
                            <h3 class="card-title">{ item.title }</h3>
                            <p class="card-text">{ item.description }</p>
                            <div class="card-stat">{ item.stats }</div>
                        </div>
                    }) }
                </div>

                <div class="center intro-gap">
                    <h3 class="panel-title">{"Ecossistema Completo de Aprendizagem"}</h3>
                    <p class="lead">
                        {"Quatro pilares fundamentais que conectam educação, prática, tecnologia \
                          e impacto social em uma única plataforma."}
                    </p>
                </div>

                <div class="grid grid-4">
                    { for FEATURES.iter().map(|cat| html! {
                        <div class="feature-category card">
                            <div class="advantage-icon" style={format!("background: {}", cat.gradient)}>
                                { cat.icon }
                            </div>
                            <h4 class="card-title">{ cat.category }</h4>
                            <ul class="dot-list">
                                { for cat.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="tech-stack summary-panel">
                    <h3 class="panel-title">{"Stack Tecnológico"}</h3>
                    <div class="grid grid-6">
                        { for TECH_STACK.iter().map(|(name, desc, icon)| html! {
                            <div class="tech-item card center">
                                <div class="stat-emoji">{ *icon }</div>
                                <h4 class="stat-label">{ *name }</h4>
                                <p class="stat-note">{ *desc }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="grid grid-4">
                    { for STATS.iter().map(|(value, label, accent)| html! {
                        <div class="showcase-card card center">
                            <div class={classes!("stat-value", *accent)}>{ *value }</div>
                            <div class="stat-note">{ *label }</div>
                        </div>
                    }) }
                </div>

                <div class="cta-banner">
                    <h3>{"🚀 Pronto para transformar sua carreira?"}</h3>
                    <p>
                        {"Junte-se a milhares de estudantes que já estão construindo seu futuro \
                          profissional na Beeedu."}
                    </p>
                    <div class="cta-buttons">
                        <button class="btn btn-white">{"Começar Agora"}</button>
                        <button class="btn btn-outline">{"Saiba Mais"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
