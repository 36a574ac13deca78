use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PointsBoxProps {
    pub points: usize,
    pub total: usize,
}

#[function_component]
pub fn PointsBox(props: &PointsBoxProps) -> Html {
    let value_style = "min-width:40px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div class="points-box" style="display:flex; justify-content:center; align-items:center; gap:8px; margin:8px auto; padding:6px 14px; border-radius:8px; background:rgba(255,255,255,0.85); width:max-content;">
            <h2 style="margin:0; font-size:20px;">{"Points:"}</h2>
            <span style={value_style}>{ props.points }</span>
            <span style="opacity:0.6;">{ format!("/ {}", props.total) }</span>
        </div>
    }
}
