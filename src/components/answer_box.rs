use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AnswerBoxProps {
    pub prompt: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub shake: bool,
    pub on_submit: Callback<String>,
}

/// Text input + button shared by every puzzle's confirmation step. Enter submits too.
#[function_component(AnswerBox)]
pub fn answer_box(props: &AnswerBoxProps) -> Html {
    let text = use_state(String::new);

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };
    let submit_click = {
        let text = text.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*text).clone()))
    };
    let onkeydown = {
        let text = text.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit((*text).clone());
            }
        })
    };

    html! {
        <div class="answer-box" style="display:flex; flex-direction:column; align-items:center; gap:8px; margin-top:16px;">
            <div style="font-weight:600;">{ props.prompt.clone() }</div>
            <div style="display:flex; gap:8px;">
                <input type="text" value={(*text).clone()} placeholder={props.placeholder.clone()} {oninput} {onkeydown} />
                <button class={classes!(props.shake.then_some("shake"))} onclick={submit_click}>{"Submit"}</button>
            </div>
        </div>
    }
}
