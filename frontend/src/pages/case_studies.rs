use yew::prelude::*;
use halftone_frontend::content::{find_service, CASE_STUDIES};

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <div class="landing">
            <section class="home-section">
                <h1>{"Case Studies"}</h1>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().map(|study| html! {
                        <article class="card">
                            <span class="card-eyebrow">{study.client}</span>
                            <h3>{study.headline}</h3>
                            <p>{study.outcome}</p>
                            <div class="tags">
                                { for study.services.iter().filter_map(|slug| find_service(slug)).map(|service| html! {
                                    <span class="tag">{service.title}</span>
                                }) }
                            </div>
                        </article>
                    }) }
                </div>
            </section>
        </div>
    }
}
