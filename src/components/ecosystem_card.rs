use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum EcosystemIcon {
    Book,
    Tool,
    Trophy,
    Rocket,
}

impl EcosystemIcon {
    fn path(self) -> &'static str {
        match self {
            Self::Book => "M12 3L1 9L12 15L21 12V17H23V10L12 3ZM5 13.18V17.18L12 21L19 17.18V13.18L12 17L5 13.18Z",
            Self::Tool => "M22.7 19L13.6 9.9C14.5 7.6 14 4.9 12.1 3C10.1 1 7.1 0.6 4.7 1.7L9 6L6 9L1.6 4.7C0.4 7.1 0.9 10.1 2.9 12.1C4.8 14 7.5 14.5 9.8 13.6L18.9 22.7C19.3 23.1 19.9 23.1 20.3 22.7L22.6 20.4C23.1 20 23.1 19.3 22.7 19Z",
            Self::Trophy => "M12 2L13.09 8.26L20 9L13.09 9.74L12 16L10.91 9.74L4 9L10.91 8.26L12 2Z",
            Self::Rocket => "M2.81 14.12L5.64 11.29L8.17 10.79C11.39 6.41 17.55 5.54 19.77 7.76C22 10 21.12 16.15 16.74 19.37L16.24 21.9L13.41 19.07L14.54 16.54L11.88 13.88L9.35 15.01L6.52 12.18L9.05 11.68C7.92 9.95 7.65 7.73 8.23 5.79L2.81 14.12Z",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EcosystemCardProps {
    pub title: AttrValue,
    pub icon: EcosystemIcon,
    pub description: AttrValue,
    /// CSS gradient behind the icon.
    pub gradient: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EcosystemCard)]
pub fn ecosystem_card(props: &EcosystemCardProps) -> Html {
    html! {
        <div class={classes!("ecosystem-card", props.class.clone())}>
            <div class="ecosystem-card-icon" style={format!("background: {}", props.gradient)}>
                <svg width="32" height="32" fill="currentColor" viewBox="0 0 24 24">
                    <path d={props.icon.path()} />
                </svg>
            </div>
            <h3 class="ecosystem-card-title">{ props.title.clone() }</h3>
            <p class="ecosystem-card-text">{ props.description.clone() }</p>
        </div>
    }
}
