use crate::model::puzzles::ClickReveal;
use crate::model::{PuzzleInput, StoryFragment};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StoryViewProps {
    pub puzzle: ClickReveal,
    pub on_input: Callback<PuzzleInput>,
}

#[function_component(StoryView)]
pub fn story_view(props: &StoryViewProps) -> Html {
    let story = &props.puzzle;
    if story.banner_visible() {
        return html! {
            <div id="story-container" style="display:flex; justify-content:center;">
                <div class="pop-in" style="font-size:5rem; color:#d63384; font-family:'Dancing Script', cursive;">{ story.banner().to_string() }</div>
            </div>
        };
    }

    let mut hidden_idx = 0usize;
    let fragments: Vec<Html> = story
        .fragments()
        .iter()
        .map(|f| match f {
            StoryFragment::Text(text) => html! { { text.clone() } },
            StoryFragment::Hidden { hidden } => {
                let idx = hidden_idx;
                hidden_idx += 1;
                let onclick = {
                    let cb = props.on_input.clone();
                    Callback::from(move |_| cb.emit(PuzzleInput::HiddenClick(idx)))
                };
                html! {
                    <span class={classes!("hidden-my", story.is_found(idx).then_some("found"))} {onclick}>{ hidden.clone() }</span>
                }
            }
        })
        .collect();

    html! {
        <div id="story-container" style="max-width:560px; margin:0 auto;">
            <p style="margin:0 0 8px 0; font-size:13px; opacity:0.75; text-align:center;">
                { format!("Something is hiding in our story. Found {} of {}.", story.found_count(), hidden_idx) }
            </p>
            <p class="story-text" style="line-height:1.8; font-size:1.1rem;">{ for fragments }</p>
        </div>
    }
}
