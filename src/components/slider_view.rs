use super::answer_box::AnswerBox;
use crate::model::puzzles::RevealSlider;
use crate::model::{PuzzleInput, ShakeTarget};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SliderViewProps {
    pub puzzle: RevealSlider,
    pub shake: Option<ShakeTarget>,
    pub on_input: Callback<PuzzleInput>,
}

#[function_component(SliderView)]
pub fn slider_view(props: &SliderViewProps) -> Html {
    let s = &props.puzzle;
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<u8>() {
                cb.emit(PuzzleInput::Slide(v));
            }
        })
    };
    let on_submit = {
        let cb = props.on_input.clone();
        Callback::from(move |text: String| cb.emit(PuzzleInput::Submit(text)))
    };
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:14px;">
            <p style="margin:0; opacity:0.85;">{"Slide to bring the picture into focus."}</p>
            <img id="blur-img" src={s.image().to_string()} alt="?"
                style={format!("width:260px; height:260px; object-fit:cover; border-radius:14px; filter:blur({:.1}px); transition:filter 0.15s linear;", s.blur_px())} />
            <input class="blur-slider" type="range" min="0" max="100" value={s.progress().to_string()} {oninput} style="width:260px;" />
            { if s.answer_visible() {
                html! {
                    <div id="you-input-container">
                        <AnswerBox
                            prompt="Who is in the picture?"
                            placeholder="Type your answer"
                            shake={props.shake == Some(ShakeTarget::Submit)}
                            {on_submit}
                        />
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}
