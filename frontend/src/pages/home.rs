use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use halftone_frontend::content::{CASE_STUDIES, SERVICES};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <section class="hero">
                <div class="hero__title">
                    <div class="stack stack--fade">
                        <span>{"Brands"}</span>
                        <span>{"Worth"}</span>
                        <span>{"Remembering"}</span>
                    </div>
                </div>

                <div class="hero__content">
                    <p>
                        {"Halftone is an independent design and marketing studio. We build identities, websites and campaigns for teams who care how the details land."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        <span>{"Start a project"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                </div>
            </section>

            <section class="home-section">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().take(3).map(|service| html! {
                        <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="card">
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </Link<Route>>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="section-link">{"All services →"}</Link<Route>>
            </section>

            <section class="home-section">
                <h2>{"Recent work"}</h2>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().map(|study| html! {
                        <div class="card">
                            <span class="card-eyebrow">{study.client}</span>
                            <h3>{study.headline}</h3>
                            <p>{study.outcome}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::CaseStudies} classes="section-link">{"See the case studies →"}</Link<Route>>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    padding: 8rem 2rem 6rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .hero__title {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .stack {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .stack span {
                    font-size: 4.5rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #FFB347);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    opacity: 0;
                    animation: fadeIn 0.5s forwards;
                }

                .stack span:nth-child(1) { animation-delay: 0.1s; }
                .stack span:nth-child(2) { animation-delay: 0.3s; }
                .stack span:nth-child(3) { animation-delay: 0.5s; }

                @keyframes fadeIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero__content {
                    max-width: 600px;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.6;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #FF7A45, #FFB347);
                    color: #1a1a1a;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .cta-button:hover .arrow {
                    transform: translateX(4px);
                }

                @media (max-width: 768px) {
                    .stack span {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
