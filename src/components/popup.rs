use crate::state::{Popup, PopupKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PopupMessageProps {
    pub popup: Option<Popup>,
}

#[function_component]
pub fn PopupMessage(props: &PopupMessageProps) -> Html {
    let Some(popup) = &props.popup else {
        return html! {};
    };
    let border = match popup.kind {
        PopupKind::Mismatch => "#f85149",
        PopupKind::Win => "#2ea043",
    };
    html! {
        <div class="popup" role="status" style={format!("position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); z-index:20; background:rgba(0,0,0,0.85); color:#fff; border:2px solid {border}; padding:16px 28px; border-radius:12px; font-size:20px; pointer-events:none;")}>
            { popup.text.clone() }
        </div>
    }
}
