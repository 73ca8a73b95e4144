use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealViewProps {
    pub years: Vec<u16>,
}

#[function_component(RevealView)]
pub fn reveal_view(props: &RevealViewProps) -> Html {
    html! {
        <div class="screen active" id="reveal-screen" style="display:flex; flex-direction:column; align-items:center; gap:18px; text-align:center; padding-top:40px;">
            <h1 style="margin:0; font-family:'Dancing Script', cursive; font-size:3.2rem; color:#d63384;">{"Yay! 💖"}</h1>
            <p style="margin:0; max-width:460px; line-height:1.5;">
                {"Every year with you has been my favorite one so far. Here's to all the ones still to come."}
            </p>
            <div style="display:flex; flex-wrap:wrap; gap:10px; justify-content:center; max-width:720px;">
                { for props.years.iter().map(|year| html! {
                    <figure key={*year} style="margin:0; display:flex; flex-direction:column; align-items:center; gap:4px;">
                        <img src={format!("{year}.png")} alt={year.to_string()} style="width:110px; height:110px; object-fit:cover; border-radius:10px; box-shadow:0 2px 8px rgba(0,0,0,0.2);" />
                        <figcaption style="font-size:12px; opacity:0.8;">{ *year }</figcaption>
                    </figure>
                }) }
            </div>
        </div>
    }
}
