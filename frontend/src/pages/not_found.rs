use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or never existed."}</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
