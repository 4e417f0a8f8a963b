use web_sys::Element;
use yew::prelude::*;

use crate::components::background_effects::BackgroundEffects;
use crate::components::section_title::SectionTitle;
use crate::reveal::{self, MetricTarget, RevealConfig, RevealOptions, StartOffset, VisualState};

struct ChartRow {
    label: &'static str,
    value: f64,
    color: &'static str,
}

const CHART: [ChartRow; 3] = [
    ChartRow { label: "Habilidades Técnicas", value: 85.0, color: "#6699FF" },
    ChartRow { label: "Projetos Concluídos", value: 92.0, color: "#22C55E" },
    ChartRow { label: "Avaliação Geral", value: 78.0, color: "#FACC15" },
];

#[function_component(CompaniesSection)]
pub fn companies_section() -> Html {
    let section_ref = use_node_ref();
    let chart_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let chart_ref = chart_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles = Vec::new();
                if let Some(section) = section_ref.cast::<Element>() {
                    let members = reveal::elements_in(&section, ".companies-item");
                    handles.push(reveal::mount_reveal_group(
                        section,
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
                }

                // The chart counts up from zero every time it scrolls into
                // view and snaps back when it leaves upward.
                if let Some(chart) = chart_ref.cast::<Element>() {
                    let values = reveal::elements_in(&chart, ".chart-value");
                    let bars = reveal::elements_in(&chart, ".chart-bar");
                    let targets = CHART
                        .iter()
                        .zip(values.into_iter().zip(bars))
                        .map(|(row, (value_el, bar_el))| MetricTarget {
                            target: row.value,
                            value_el,
                            bar_el,
                        })
                        .collect();
                    handles.push(reveal::mount_replayable_metrics(
                        chart,
                        targets,
                        StartOffset::parse("top 85%").unwrap_or_default(),
                    ));
                }
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="section section-soft" id="empresas">
            <BackgroundEffects />
            <div class="container split">
                <div>
                    <SectionTitle class="companies-item text-left">
                        {"Onde o talento certo encontra a oportunidade certa."}
                    </SectionTitle>

                    <p class="companies-item lead">
                        {"Pare de recrutar no escuro. Na Beeedu, você investe em talentos que já \
                          demonstraram seu potencial. Acompanhe a evolução dos alunos em tempo \
                          real, ofereça projetos, proponha freelas e contrate com dados e \
                          confiança."}
                    </p>

                    <div class="companies-item block">
                        <h4 class="subheading accent-blue">{"Proposta de Valor para Empresas:"}</h4>
                        <ul class="check-list">
                            <li>{"Talentos qualificados com experiência prática comprovada"}</li>
                            <li>{"Recrutamento assertivo baseado em performance real"}</li>
                            <li>{"Investimento em capacitação com retorno garantido"}</li>
                        </ul>
                    </div>

                    <button class="companies-item btn btn-primary">
                        {"Encontre talentos na Beeedu"}
                    </button>
                </div>

                <div ref={chart_ref} class="progress-chart card">
                    <h3 class="card-title">{"Progresso do Aluno em Tempo Real"}</h3>

                    { for CHART.iter().map(|row| html! {
                        <div class="chart-item">
                            <div class="chart-head">
                                <span class="chart-label">{ row.label }</span>
                                <span
                                    class="chart-value"
                                    style={format!("color: {}", row.color)}
                                >
                                    {"0%"}
                                </span>
                            </div>
                            <div class="chart-track">
                                <div
                                    class="chart-bar"
                                    style={format!(
                                        "background: linear-gradient(90deg, {c}, {c}dd); width: 0%",
                                        c = row.color
                                    )}
                                ></div>
                            </div>
                        </div>
                    }) }

                    <div class="chart-footnote">
                        <span class="pulse-dot"></span>
                        <span class="accent-green">{"Recomendado para contratação"}</span>
                        <p class="stat-note">
                            {"Baseado no desempenho consistente e feedback positivo de projetos \
                              reais"}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
