use yew::prelude::*;

use crate::components::viewport::use_in_viewport;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Extra transition delay, used to stagger siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view. The
/// actual animation is CSS; this component only flips the class once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_viewport(&node);
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    shown.set(true);
                }
                || ()
            },
            visible,
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*shown).then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
