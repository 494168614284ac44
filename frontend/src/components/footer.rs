use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::log;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // No newsletter provider yet, the address only goes to the console.
    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!("Newsletter signup:", (*email).clone());
            email.set(String::new());
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"halftone"}</span>
                    <p>{"Brand, web and growth for companies that would rather be remembered than noticed."}</p>
                </div>
                <form class="newsletter" {onsubmit}>
                    <label for="newsletter-email">{"Studio notes, once a month"}</label>
                    <div class="newsletter-row">
                        <input
                            id="newsletter-email"
                            type="email"
                            placeholder="you@company.com"
                            value={(*email).clone()}
                            {oninput}
                        />
                        <button type="submit">{"Subscribe"}</button>
                    </div>
                </form>
                <div class="footer-links">
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #141414;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding: 4rem 2rem 2rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 2fr 1fr;
                    gap: 2rem;
                }
                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }
                .newsletter-row {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 0.75rem;
                }
                .newsletter input {
                    flex: 1;
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    color: #fff;
                }
                .newsletter button {
                    background: #FF7A45;
                    border: none;
                    border-radius: 8px;
                    padding: 0.7rem 1.2rem;
                    color: #1a1a1a;
                    font-weight: 600;
                    cursor: pointer;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a {
                    color: #FF7A45;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .footer-links a:hover {
                    color: #FFB347;
                }
                @media (max-width: 768px) {
                    .footer-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
