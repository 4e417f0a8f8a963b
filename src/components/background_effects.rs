//! Decorative geometric shapes floating behind a section.
//!
//! Shapes fade in as the section approaches the viewport and then bob
//! endlessly. Fading animates the positioned wrapper while the bob drives
//! the inner element, so the two effects never share an element.

use web_sys::Element;
use yew::prelude::*;

use crate::reveal::{self, FloatConfig, RevealConfig, RevealOptions, StartOffset, VisualState};

/// Palette and sizing preset of the backdrop.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropVariant {
    Hero,
    #[default]
    Section,
    Dark,
}

/// How many shapes are scattered over the section.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropIntensity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, PartialEq)]
struct Shape {
    left: f64,
    top: f64,
    size: f64,
    color: &'static str,
    kind: &'static str,
}

const POSITIONS: [(f64, f64); 6] = [
    (15.0, 20.0),
    (85.0, 25.0),
    (25.0, 60.0),
    (75.0, 70.0),
    (45.0, 15.0),
    (65.0, 85.0),
];

const KINDS: [&str; 3] = ["bg-circle", "bg-diamond", "bg-square"];

fn shapes(variant: BackdropVariant, intensity: BackdropIntensity) -> Vec<Shape> {
    let count = match intensity {
        BackdropIntensity::Low => 2,
        BackdropIntensity::Medium => 4,
        BackdropIntensity::High => 6,
    };
    let colors: [&'static str; 2] = match variant {
        BackdropVariant::Dark => ["#6699FF", "#5588EE"],
        _ => ["#FACC15", "#F59E0B"],
    };
    let base = match variant {
        BackdropVariant::Hero => 10.0,
        _ => 7.0,
    };
    (0..count)
        .map(|i| {
            let (left, top) = POSITIONS[i % POSITIONS.len()];
            Shape {
                left,
                top,
                size: base + (i % 3) as f64,
                color: colors[i % colors.len()],
                kind: KINDS[i % KINDS.len()],
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BackgroundEffectsProps {
    #[prop_or_default]
    pub variant: BackdropVariant,
    #[prop_or_default]
    pub intensity: BackdropIntensity,
}

#[function_component(BackgroundEffects)]
pub fn background_effects(props: &BackgroundEffectsProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut reveals = Vec::new();
                let mut floats = Vec::new();
                if let Some(host) = host_ref.cast::<Element>() {
                    reveals.push(reveal::mount_reveal_group(
                        host.clone(),
                        reveal::elements_in(&host, ".bg-shape"),
                        RevealOptions {
                            config: RevealConfig {
                                from: VisualState::visible().with_opacity(0.0),
                                duration: 2_000.0,
                                stagger: 500.0,
                                ..Default::default()
                            },
                            start: StartOffset::parse("top 110%").unwrap_or_default(),
                            replay: false,
                        },
                    ));

                    let drifters = reveal::elements_in(&host, ".bg-shape-inner");
                    let spread = drifters.len() as f64 * 1_200.0;
                    floats.push(reveal::mount_float_loop(
                        drifters,
                        FloatConfig { amplitude: 8.0, duration: 10_000.0, spread },
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

    let scatter = shapes(props.variant, props.intensity);
    html! {
        <div ref={host_ref} class="background-effects" aria-hidden="true">
            { for scatter.iter().map(|s| html! {
                <div
                    class="bg-shape"
                    style={format!(
                        "left: {}%; top: {}%; width: {size}px; height: {size}px;",
                        s.left, s.top, size = s.size
                    )}
                >
                    <div class="bg-shape-inner">
                        <div
                            class={s.kind}
                            style={format!(
                                "border-color: {c}40; background: {c}14;",
                                c = s.color
                            )}
                        ></div>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_sets_the_shape_count() {
        assert_eq!(shapes(BackdropVariant::Section, BackdropIntensity::Low).len(), 2);
        assert_eq!(shapes(BackdropVariant::Section, BackdropIntensity::Medium).len(), 4);
        assert_eq!(shapes(BackdropVariant::Hero, BackdropIntensity::High).len(), 6);
    }

    #[test]
    fn dark_variant_swaps_the_palette() {
        let dark = shapes(BackdropVariant::Dark, BackdropIntensity::Medium);
        assert!(dark.iter().all(|s| s.color == "#6699FF" || s.color == "#5588EE"));
        let light = shapes(BackdropVariant::Section, BackdropIntensity::Medium);
        assert!(light.iter().all(|s| s.color == "#FACC15" || s.color == "#F59E0B"));
    }

    #[test]
    fn shapes_stay_inside_the_section() {
        for s in shapes(BackdropVariant::Hero, BackdropIntensity::High) {
            assert!((0.0..=100.0).contains(&s.left));
            assert!((0.0..=100.0).contains(&s.top));
            assert!(s.size >= 7.0);
        }
    }
}
