use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WordsDisplayProps {
    /// (text, solved) per slot.
    pub words: Vec<(String, bool)>,
}

#[function_component(WordsDisplay)]
pub fn words_display(props: &WordsDisplayProps) -> Html {
    html! {
        <div class="words-display" style="display:flex; gap:8px; justify-content:center; flex-wrap:wrap; margin:8px 0 16px 0;">
            { for props.words.iter().map(|(text, solved)| html! {
                <span class={classes!("revealed-word", (!*solved).then_some("pending"))}>{ text.clone() }</span>
            }) }
        </div>
    }
}
