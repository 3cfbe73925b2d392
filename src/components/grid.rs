use super::theme::Theme;
use crate::grid::{GridItem, GridLayout};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GridProps {
    pub size: Option<i64>,
}

/// Board of unmanaged checkboxes; renders an empty container for invalid sizes.
#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let layout = GridLayout::new(props.size);
    let px = layout.pixel_dimension();
    html! {<div class="grid" style={format!("width:{px}px; height:{px}px;")}>
        { for layout.items().map(|item| cell(item, theme.accent)) }
    </div>}
}

fn cell(item: GridItem, accent: &'static str) -> Html {
    let key = item.key();
    match item {
        GridItem::Cell { .. } => html! {
            <div class="cell" key={key}>
                <input type="checkbox" style={format!("accent-color:{accent};")} />
            </div>
        },
        GridItem::RowBreak { .. } => html! { <br key={key} /> },
    }
}
