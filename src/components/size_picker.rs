use crate::model::{SIZE_OPTIONS, size_label};
use crate::state::parse_picker_value;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SizePickerProps {
    pub label: AttrValue,
    /// Current size; shown empty when undefined or not one of the options.
    pub value: Option<i64>,
    pub on_select: Callback<i64>,
}

#[function_component(SizePicker)]
pub fn size_picker(props: &SizePickerProps) -> Html {
    let onchange = {
        let cb = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let raw = select.value();
            match parse_picker_value(&raw) {
                Some(size) => cb.emit(size),
                None => log::warn!("ignoring picker value {raw:?}"),
            }
        })
    };
    let known = props.value.is_some_and(|v| SIZE_OPTIONS.contains(&v));

    html! {<label class="picker" style="display:flex; flex-direction:column; font-size:12px; gap:2px;">
        <span style="opacity:0.8;">{ props.label.clone() }</span>
        <select {onchange} style="min-width:96px; font-size:16px; padding:2px 4px;">
            <option value="" selected={!known} disabled={true} hidden={true}></option>
            { for SIZE_OPTIONS.iter().map(|&n| html! {
                <option value={n.to_string()} selected={props.value == Some(n)}>{ size_label(n) }</option>
            }) }
        </select>
    </label>}
}
