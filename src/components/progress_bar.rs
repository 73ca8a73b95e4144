use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub percent: f64,
}

#[function_component]
pub fn ProgressBar(props: &ProgressBarProps) -> Html {
    html! {
        <div style="position:fixed; top:0; left:0; right:0; height:6px; background:rgba(255,255,255,0.35); z-index:100;">
            <div id="progress-bar" style={format!("height:100%; width:{}%; background:#d63384; transition:width 0.6s ease;", props.percent.clamp(0.0, 100.0))}></div>
        </div>
    }
}
