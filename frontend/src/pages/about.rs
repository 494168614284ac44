use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

const PRINCIPLES: &[(&str, &str)] = &[
    ("Small senior team", "The people in the pitch are the people doing the work."),
    ("Strategy first", "Every project starts with a workshop, not a moodboard."),
    ("Built to hand over", "We document everything so your team can run it without us."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="legal-content about-page">
            <div>
                <h1>{"About Halftone"}</h1>
                <section>
                    <p>
                        {"We started Halftone in 2016 after a decade inside bigger agencies, wanting to work closer to the clients and the craft. Today we are twelve designers, writers and marketers working out of Lisbon and remotely across Europe."}
                    </p>
                </section>
                <section>
                    <h2>{"How we work"}</h2>
                    <ul>
                        { for PRINCIPLES.iter().map(|(title, body)| html! {
                            <li><strong>{*title}</strong>{": "}{*body}</li>
                        }) }
                    </ul>
                </section>
                <div class="legal-links">
                    <Link<Route> to={Route::Contact}>{"Work with us"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
