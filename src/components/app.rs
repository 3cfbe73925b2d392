use super::{app_bar::AppBar, grid::Grid, size_picker::SizePicker, theme::Theme};
use crate::config::AppConfig;
use crate::state::{FragmentHandle, commit_selection, initial_state};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
    /// Where the board size is read from at startup and written on selection.
    pub fragment: FragmentHandle,
}

/// Page layout: owns the board size and wires the picker to the grid.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // The reducer initializer runs once, so the fragment is only read at mount.
    let view = {
        let fragment = props.fragment.clone();
        use_reducer(move || {
            let state = initial_state(&*fragment);
            log::info!("initial board size: {:?}", state.size);
            state
        })
    };

    let on_select = {
        let view = view.clone();
        let fragment = props.fragment.clone();
        Callback::from(move |size: i64| {
            log::debug!("board size: {:?} -> {}", view.size, size);
            view.dispatch(commit_selection(&*fragment, size));
        })
    };

    html! {<div style="width:100%; height:100%;">
        <ContextProvider<Theme> context={Theme::default()}>
            <div>
                <AppBar title={props.config.title.clone()}>
                    <SizePicker
                        label={props.config.picker_label.clone()}
                        value={view.size}
                        on_select={on_select}
                    />
                </AppBar>
                <Grid size={view.size} />
            </div>
        </ContextProvider<Theme>>
    </div>}
}
