use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartScreenProps {
    pub on_start: Callback<()>,
}

#[function_component(StartScreen)]
pub fn start_screen(props: &StartScreenProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="screen active" style="display:flex; flex-direction:column; align-items:center; justify-content:center; gap:16px; text-align:center;">
            <h1 style="margin:0; font-family:'Dancing Script', cursive; font-size:3rem; color:#d63384;">{"A Little Puzzle For You"}</h1>
            <p style="margin:0; max-width:420px; opacity:0.85;">{"Five puzzles, five hidden words. Solve them in order to find out what they say."}</p>
            <button class="primary-btn" onclick={start_btn}>{"Begin 💌"}</button>
        </div>
    }
}
