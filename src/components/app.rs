use super::{
    celebration_overlay::CelebrationOverlay, final_view::FinalView, level_view::LevelView,
    progress_bar::ProgressBar, reveal_view::RevealView, start_screen::StartScreen,
};
use crate::model::{Effect, GameAction, GameState, PuzzleContent, PuzzleInput, Rng, Scheduler, Screen};
use crate::util::{now_ms, set_timeout};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| {
        PuzzleContent::embedded().map(Rc::new).map_err(|e| {
            log::error!("{e}");
            e.to_string()
        })
    });
    match &*content {
        Ok(content) => html! { <Game content={content.clone()} /> },
        Err(msg) => html! {
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; color:#fff;">
                <h2 style="margin:0 0 12px 0; color:#f85149;">{"Puzzle content failed to load"}</h2>
                <p style="margin:4px 0; font-family:monospace;">{ msg.clone() }</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
struct GameProps {
    pub content: Rc<PuzzleContent>,
}

type SharedScheduler = Rc<RefCell<Scheduler<Effect>>>;

/// Fires every effect that is due. Timers may fire a fraction of a ms early
/// relative to `performance.now()`, hence the slack.
fn pump(scheduler: &SharedScheduler, dispatcher: &UseReducerDispatcher<GameState>) {
    let due = scheduler.borrow_mut().drain_due(now_ms() + 1.0);
    for effect in due {
        dispatcher.dispatch(GameAction::Fire(effect));
    }
}

#[function_component(Game)]
fn game(props: &GameProps) -> Html {
    let game = {
        let content = props.content.clone();
        use_reducer(move || GameState::new(content, Rng::from_entropy()))
    };
    let scheduler: SharedScheduler = use_mut_ref(Scheduler::default);
    let handed_upto = use_mut_ref(|| 0u64);

    // Move newly queued effects into the scheduler and arm one timer per effect.
    {
        let game = game.clone();
        let scheduler = scheduler.clone();
        let handed_upto = handed_upto.clone();
        use_effect_with(game.next_effect_id, move |_| {
            let now = now_ms();
            let (fresh, upto) = game.pending_since(*handed_upto.borrow());
            for scheduled in fresh {
                let delay = scheduled.delay_ms;
                scheduler.borrow_mut().schedule(now, delay, scheduled.effect);
                let scheduler = scheduler.clone();
                let dispatcher = game.dispatcher();
                set_timeout(delay, move || pump(&scheduler, &dispatcher));
            }
            *handed_upto.borrow_mut() = upto;
            game.dispatch(GameAction::Ack { upto });
            || ()
        });
    }

    // Body class carries the per-level background.
    {
        let theme = game.theme();
        use_effect_with(theme, move |theme| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                body.set_class_name(theme);
            }
            || ()
        });
    }

    let on_start = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Start))
    };
    let on_input = {
        let game = game.clone();
        Callback::from(move |input: PuzzleInput| game.dispatch(GameAction::Input(input)))
    };
    let on_evade = {
        let game = game.clone();
        Callback::from(move |(viewport, button): ((f64, f64), (f64, f64))| {
            game.dispatch(GameAction::Evade { viewport, button })
        })
    };
    let on_accept = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Accept))
    };

    let content = match game.screen {
        Screen::Start => html! { <StartScreen on_start={on_start} /> },
        Screen::Level(step) => match &game.puzzle {
            Some(puzzle) => html! {
                <LevelView
                    step={step}
                    puzzle={puzzle.clone()}
                    words={game.words.display()}
                    shake={game.shake.map(|s| s.target)}
                    hint={game.hint.clone()}
                    locked={game.advance_pending}
                    on_input={on_input}
                />
            },
            None => html! {},
        },
        Screen::Final => html! {
            <FinalView
                reveal={game.final_reveal.clone()}
                on_evade={on_evade}
                on_accept={on_accept}
            />
        },
        Screen::Reveal => html! { <RevealView years={props.content.timeline.years()} /> },
    };

    html! {
        <div id="root">
            <ProgressBar percent={game.words.progress_percent()} />
            { content }
            <CelebrationOverlay ids={game.celebrations.clone()} />
        </div>
    }
}
