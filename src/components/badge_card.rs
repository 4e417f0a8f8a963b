use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeCardProps {
    pub name: AttrValue,
    pub rarity: AttrValue,
    /// CSS gradient painted on the medallion.
    pub gradient: AttrValue,
    pub icon: AttrValue,
    pub level: AttrValue,
    #[prop_or_default]
    pub special: bool,
    #[prop_or_default]
    pub women_only: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn rarity_class(rarity: &str) -> &'static str {
    match rarity {
        "Mítica" => "rarity-mythic",
        "Lendária" => "rarity-legendary",
        "Rara" => "rarity-rare",
        "Comum" => "rarity-common",
        _ => "rarity-default",
    }
}

#[function_component(BadgeCard)]
pub fn badge_card(props: &BadgeCardProps) -> Html {
    let show_tooltip = use_state(|| false);

    let on_enter = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(true))
    };
    let on_leave = {
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| show_tooltip.set(false))
    };

    html! {
        <div
            class={classes!("badge-wrap", props.class.clone())}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div
                class={classes!(
                    "badge-medallion",
                    props.special.then_some("badge-special"),
                    props.women_only.then_some("badge-women"),
                )}
                style={format!("background: {}", props.gradient)}
            >
                <span class="badge-icon">{ props.icon.clone() }</span>
            </div>
            if *show_tooltip {
                <div class="badge-tooltip">
                    <div class="badge-tooltip-name">{ props.name.clone() }</div>
                    <div class={classes!("badge-tooltip-rarity", rarity_class(&props.rarity))}>
                        { props.rarity.clone() }
                    </div>
                    <div class="badge-tooltip-level">{ props.level.clone() }</div>
                    if props.women_only {
                        <div class="badge-tooltip-note">{"♀️ Exclusivo para mulheres"}</div>
                    }
                    if props.special {
                        <div class="badge-tooltip-note">{"✨ Insígnia Especial Beeedu"}</div>
                    }
                </div>
            }
        </div>
    }
}
