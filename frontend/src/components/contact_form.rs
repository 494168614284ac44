use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use halftone_frontend::contact::{
    BrowserTimer, ContactSubmissionFlow, Field, FlowSnapshot, SubmissionStatus, SupabaseStore,
};

type Flow = ContactSubmissionFlow<SupabaseStore, BrowserTimer>;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let snapshot = use_state(FlowSnapshot::default);

    // One flow per mounted form; dropping it on unmount cancels the pending reset.
    let flow = {
        let setter = snapshot.setter();
        use_state(move || {
            let flow = ContactSubmissionFlow::new(SupabaseStore::from_config(), BrowserTimer);
            flow.subscribe(move |next| setter.set(next.clone()));
            Rc::new(flow)
        })
    };

    let on_input = |field: Field| {
        let flow = (*flow).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            flow.update_field(field, input.value());
        })
    };

    let on_details = {
        let flow = (*flow).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            flow.update_field(Field::Details, input.value());
        })
    };

    let onsubmit = {
        let flow: Rc<Flow> = (*flow).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let flow = flow.clone();
            spawn_local(async move {
                flow.submit().await;
            });
        })
    };

    let draft = &snapshot.draft;
    let sending = snapshot.status.is_sending();

    html! {
        <div class="contact-form-container">
            <style>
                {r#"
                .contact-form-container {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(255, 122, 69, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    width: 100%;
                    max-width: 560px;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                }
                .contact-form input, .contact-form textarea {
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.9rem 1rem;
                    color: #fff;
                    font-size: 1rem;
                }
                .contact-form textarea {
                    min-height: 160px;
                    resize: vertical;
                }
                .contact-form button {
                    background: linear-gradient(45deg, #FF7A45, #FFB347);
                    border: none;
                    border-radius: 8px;
                    padding: 1rem;
                    color: #1a1a1a;
                    font-weight: 600;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }
                .contact-form button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .form-message {
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.95rem;
                }
                .form-message.error {
                    background: rgba(255, 68, 68, 0.1);
                    border: 1px solid rgba(255, 68, 68, 0.3);
                    color: #FF6B6B;
                }
                .form-message.success {
                    background: rgba(76, 175, 80, 0.1);
                    border: 1px solid rgba(76, 175, 80, 0.3);
                    color: #7BD88F;
                }
                "#}
            </style>
            {
                match &snapshot.status {
                    SubmissionStatus::Error(message) => html! {
                        <div class="form-message error">{ message }</div>
                    },
                    SubmissionStatus::Success => html! {
                        <div class="form-message success">
                            {"Thanks! Your message is on its way. We'll get back to you within two working days."}
                        </div>
                    },
                    _ => html! {},
                }
            }
            <form class="contact-form" {onsubmit}>
                <label>
                    { Field::FullName.label() }
                    <input
                        type="text"
                        name="full_name"
                        required=true
                        value={draft.full_name.clone()}
                        oninput={on_input(Field::FullName)}
                    />
                </label>
                <label>
                    { Field::Email.label() }
                    <input
                        type="email"
                        name="email"
                        required=true
                        value={draft.email.clone()}
                        oninput={on_input(Field::Email)}
                    />
                </label>
                <label>
                    { Field::Details.label() }
                    <textarea
                        name="details"
                        required=true
                        placeholder="Tell us about your project, timeline and budget"
                        value={draft.details.clone()}
                        oninput={on_details}
                    />
                </label>
                <button type="submit" disabled={sending}>
                    { if sending { "Sending..." } else { "Send message" } }
                </button>
            </form>
        </div>
    }
}
