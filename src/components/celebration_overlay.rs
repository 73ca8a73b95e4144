use yew::prelude::*;

const HEARTS: [&str; 6] = ["💖", "💗", "💕", "✨", "🩷", "💘"];

#[derive(Properties, PartialEq, Clone)]
pub struct CelebrationOverlayProps {
    pub ids: Vec<u32>,
}

#[function_component]
pub fn CelebrationOverlay(props: &CelebrationOverlayProps) -> Html {
    if props.ids.is_empty() {
        return html! {};
    }
    html! {
        <div class="celebration-hearts" style="position:fixed; inset:0; pointer-events:none; z-index:200;">
            { for props.ids.iter().map(|id| html! {
                <div key={*id}>
                    <div class="success-overlay"></div>
                    { for (0..15u32).map(|i| {
                        // Spread hearts with a cheap hash of (id, i) so each burst looks different.
                        let h = id.wrapping_mul(2_654_435_761).wrapping_add(i.wrapping_mul(40_503));
                        let left = 20 + h % 60;
                        let top = 40 + (h / 60) % 30;
                        let delay = (h / 7) % 50;
                        html! {
                            <div class="celebration-heart" style={format!("left:{left}%; top:{top}%; animation-delay:{}.{:02}s;", delay / 100, delay % 100)}>
                                { HEARTS[(h as usize) % HEARTS.len()] }
                            </div>
                        }
                    }) }
                </div>
            }) }
        </div>
    }
}
