use yew::prelude::*;
use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <div class="contact-intro">
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us a little about what you're planning. A real person reads every message."}</p>
                <p class="contact-direct">{"Prefer email? hello@halftone.studio"}</p>
            </div>
            <ContactForm />
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    padding: 8rem 2rem 4rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 4rem;
                    justify-content: center;
                    align-items: flex-start;
                }
                .contact-intro {
                    max-width: 380px;
                }
                .contact-intro h1 {
                    font-size: 3rem;
                    background: linear-gradient(45deg, #fff, #FFB347);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-intro p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .contact-direct {
                    margin-top: 2rem;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
