use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <h2 class={classes!("section-title", props.class.clone())}>
            { for props.children.iter() }
        </h2>
    }
}
