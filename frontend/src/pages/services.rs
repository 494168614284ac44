use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use halftone_frontend::content::{find_service, SERVICES};
use super::not_found::NotFound;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="landing">
            <section class="home-section">
                <h1>{"Services"}</h1>
                <p class="section-intro">
                    {"Pick one or mix several. Most clients start with a single project and stay for the next one."}
                </p>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="card">
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="legal-content">
            <div>
                <h1>{service.title}</h1>
                <section>
                    <p>{service.summary}</p>
                    <h2>{"What's included"}</h2>
                    <ul>
                        { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </section>
                <div class="legal-links">
                    <Link<Route> to={Route::Contact}>{"Talk to us about "}{service.title}</Link<Route>>
                    {" · "}
                    <Link<Route> to={Route::Services}>{"All services"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
