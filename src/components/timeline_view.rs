use super::answer_box::AnswerBox;
use crate::model::puzzles::Timeline;
use crate::model::{PuzzleInput, ShakeTarget};
use yew::prelude::*;

const DRAG_FORMAT: &str = "text/plain";

#[derive(Properties, PartialEq, Clone)]
pub struct TimelineViewProps {
    pub puzzle: Timeline,
    pub shake: Option<ShakeTarget>,
    pub on_input: Callback<PuzzleInput>,
}

fn photo_src(year: u16) -> String {
    format!("{year}.png")
}

#[function_component(TimelineView)]
pub fn timeline_view(props: &TimelineViewProps) -> Html {
    let t = &props.puzzle;
    let on_submit = {
        let cb = props.on_input.clone();
        Callback::from(move |text: String| cb.emit(PuzzleInput::Submit(text)))
    };

    let bank = html! {
        <div id="letter-bank" style="display:flex; gap:6px; justify-content:center;">
            { for (0..t.bank_len()).map(|i| {
                let letter = t.revealed_letter(i);
                html! {
                    <span class={classes!("bank-letter", letter.is_some().then_some("earned"))}>
                        { letter.unwrap_or('?').to_string() }
                    </span>
                }
            }) }
        </div>
    };

    let slots = t.years().iter().copied().map(|year| {
        let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
        let ondrop = {
            let cb = props.on_input.clone();
            Callback::from(move |e: DragEvent| {
                e.prevent_default();
                let dropped = e
                    .data_transfer()
                    .and_then(|dt| dt.get_data(DRAG_FORMAT).ok())
                    .and_then(|s| s.parse::<u16>().ok());
                match dropped {
                    Some(photo_year) => cb.emit(PuzzleInput::Drop { photo_year, slot_year: year }),
                    None => log::debug!("drop on {year} carried no year"),
                }
            })
        };
        let onclick = {
            let cb = props.on_input.clone();
            Callback::from(move |_| cb.emit(PuzzleInput::TapSlot(year)))
        };
        let placed = t.is_placed(year);
        let shaking = props.shake == Some(ShakeTarget::Slot(year));
        html! {
            <div class={classes!("year-slot", placed.then_some("filled"), shaking.then_some("shake"))}
                {ondragover} {ondrop} {onclick}>
                { if placed {
                    html! { <img src={photo_src(year)} alt={year.to_string()} /> }
                } else { html! {} } }
                <span class="year-label">{ year.to_string() }</span>
            </div>
        }
    });

    let photos = t.photo_order().iter().copied().filter(|y| !t.is_placed(*y)).map(|year| {
        let ondragstart = Callback::from(move |e: DragEvent| {
            if let Some(dt) = e.data_transfer() {
                if let Err(err) = dt.set_data(DRAG_FORMAT, &year.to_string()) {
                    log::warn!("drag start for {year} failed: {err:?}");
                }
            }
        });
        let onclick = {
            let cb = props.on_input.clone();
            Callback::from(move |_| cb.emit(PuzzleInput::SelectPhoto(year)))
        };
        let selected = t.selected() == Some(year);
        html! {
            <img class={classes!("timeline-photo", selected.then_some("selected"))}
                src={photo_src(year)} alt="photo" draggable="true" {ondragstart} {onclick} />
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:14px;">
            <p style="margin:0; opacity:0.85;">{"Put our photos in order. Drag, or tap a photo and then its year."}</p>
            { bank }
            <div id="timeline-slots" style="display:flex; flex-wrap:wrap; gap:8px; justify-content:center;">
                { for slots }
            </div>
            <div id="photo-bank" style="display:flex; flex-wrap:wrap; gap:8px; justify-content:center;">
                { for photos }
            </div>
            { if t.question_visible() {
                html! {
                    <div id="timeline-question">
                        <AnswerBox
                            prompt="What do the letters spell?"
                            shake={props.shake == Some(ShakeTarget::Submit)}
                            {on_submit}
                        />
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}
