use crate::model::final_reveal::FinalReveal;
use crate::model::DeclineButton;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FinalViewProps {
    pub reveal: FinalReveal,
    /// `(viewport, button)` sizes in px.
    pub on_evade: Callback<((f64, f64), (f64, f64))>,
    pub on_accept: Callback<()>,
}

fn viewport_size() -> (f64, f64) {
    let Some(w) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn evade_from(target: Option<HtmlElement>, on_evade: &Callback<((f64, f64), (f64, f64))>) {
    let button = target
        .map(|el| (el.offset_width() as f64, el.offset_height() as f64))
        .unwrap_or((80.0, 40.0));
    on_evade.emit((viewport_size(), button));
}

#[function_component(FinalView)]
pub fn final_view(props: &FinalViewProps) -> Html {
    let reveal = &props.reveal;

    let onmouseenter = {
        let cb = props.on_evade.clone();
        Callback::from(move |e: MouseEvent| evade_from(e.target_dyn_into::<HtmlElement>(), &cb))
    };
    let ontouchstart = {
        let cb = props.on_evade.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            evade_from(e.target_dyn_into::<HtmlElement>(), &cb);
        })
    };
    let on_no_click = {
        let cb = props.on_evade.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            evade_from(e.target_dyn_into::<HtmlElement>(), &cb);
        })
    };
    let on_yes = {
        let cb = props.on_accept.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let no_style = match reveal.decline {
        DeclineButton::Inline => String::new(),
        DeclineButton::Fled { left, top } => {
            format!("position:fixed; left:{left:.0}px; top:{top:.0}px; z-index:9999;")
        }
        DeclineButton::Removed => "display:none;".to_string(),
    };

    html! {
        <div id="final-screen" style="display:flex; flex-direction:column; align-items:center; gap:28px; padding-top:12vh;">
            <h1 id="final-question" style="font-family:'Dancing Script', cursive; font-size:3rem; margin:0; text-align:center;">
                { for reveal.tokens().iter().map(|t| html! { <span class="final-word pop-in">{ *t }{" "}</span> }) }
            </h1>
            { if reveal.choices_visible {
                html! {
                    <div id="choices" class="pop-in" style="display:flex; gap:24px;">
                        <button id="yes-btn" class="choice yes" onclick={on_yes}>{"Yes"}</button>
                        <button id="no-btn" class="choice no" style={no_style}
                            {onmouseenter} {ontouchstart} onclick={on_no_click}>{"No"}</button>
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}
