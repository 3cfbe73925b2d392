use super::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppBarProps {
    pub title: AttrValue,
    /// Rendered at the trailing (right) end of the bar.
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn AppBar(props: &AppBarProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    html! {<header class="bar" style={format!("display:flex; align-items:center; justify-content:space-between; padding:0 24px; min-height:64px; background:{}; color:{}; font-family:{};", theme.bar_background, theme.bar_text, theme.font_family)}>
        <h1 style="margin:0; font-size:24px; font-weight:400;">{ props.title.clone() }</h1>
        <div class="bar-trailing">{ props.children.clone() }</div>
    </header>}
}
