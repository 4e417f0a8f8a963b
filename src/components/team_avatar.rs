use yew::prelude::*;

/// Avatar that degrades to initials on a gradient when the photo fails to
/// load. LinkedIn photo links expire, so the fallback is the common case.
#[derive(Properties, PartialEq)]
pub struct TeamAvatarProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub initials: AttrValue,
    pub gradient: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TeamAvatar)]
pub fn team_avatar(props: &TeamAvatarProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        html! {
            <div
                class={classes!("avatar-fallback", props.class.clone())}
                style={format!("background: {}", props.gradient)}
                role="img"
                aria-label={props.alt.clone()}
            >
                { props.initials.clone() }
            </div>
        }
    } else {
        html! {
            <img
                class={classes!("avatar-photo", props.class.clone())}
                src={props.src.clone()}
                alt={props.alt.clone()}
                {onerror}
            />
        }
    }
}
