use crate::model::PuzzleInput;
use crate::model::puzzles::Crossword;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CrosswordViewProps {
    pub puzzle: Crossword,
    pub on_input: Callback<PuzzleInput>,
}

fn focus_sibling(input: &HtmlInputElement, forward: bool) {
    let sibling = if forward {
        input.next_element_sibling()
    } else {
        input.previous_element_sibling()
    };
    if let Some(el) = sibling.and_then(|s| s.dyn_into::<HtmlElement>().ok()) {
        let _ = el.focus();
    }
}

#[function_component(CrosswordView)]
pub fn crossword_view(props: &CrosswordViewProps) -> Html {
    let c = &props.puzzle;
    html! {
        <div style="display:flex; flex-wrap:wrap; gap:24px; justify-content:center; align-items:flex-start;">
            <div id="crossword-clues-1" style="display:flex; flex-direction:column; gap:6px; max-width:320px;">
                { for c.rows().iter().enumerate().map(|(i, row)| html! {
                    <div class="clue-item"><span class="clue-number">{ (i + 1).to_string() }</span>{" "}{ row.clue.clone() }</div>
                }) }
            </div>
            <div id="crossword-grid-1" style="display:flex; flex-direction:column; gap:4px;">
                { for c.rows().iter().enumerate().map(|(r, row)| html! {
                    <div class="crossword-row" style="display:flex; gap:4px;">
                        <span class="clue-number" style="width:18px;">{ (r + 1).to_string() }</span>
                        { for (0..row.answer.chars().count()).map(|col| {
                            let oninput = {
                                let cb = props.on_input.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    let value = input.value().to_uppercase();
                                    input.set_value(&value);
                                    if value.chars().count() == 1 {
                                        focus_sibling(&input, true);
                                    }
                                    cb.emit(PuzzleInput::CellEdit { row: r, col, value });
                                })
                            };
                            let onkeydown = Callback::from(|e: KeyboardEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                if e.key() == "Backspace" && input.value().is_empty() {
                                    focus_sibling(&input, false);
                                }
                            });
                            let value = c.entry(r, col).map(String::from).unwrap_or_default();
                            html! {
                                <input
                                    class={classes!(
                                        "crossword-cell",
                                        c.is_extraction(r, col).then_some("extraction-cell"),
                                        c.is_correct(r, col).then_some("correct"),
                                    )}
                                    maxlength="1"
                                    {value}
                                    {oninput}
                                    {onkeydown}
                                />
                            }
                        }) }
                    </div>
                }) }
            </div>
        </div>
    }
}
