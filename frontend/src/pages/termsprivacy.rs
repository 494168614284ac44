use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. What We Collect"}</h2>
                    <p>{"When you use the contact form we store:"}</p>
                    <ul>
                        <li>{"Your full name"}</li>
                        <li>{"Your email address"}</li>
                        <li>{"The project details you write to us"}</li>
                        <li>{"The time the message was sent"}</li>
                    </ul>
                    <p>{"We do not use tracking cookies or third-party analytics on this site."}</p>
                </section>

                <section>
                    <h2>{"2. Why We Collect It"}</h2>
                    <ul>
                        <li>{"To reply to your enquiry (legitimate interest)"}</li>
                        <li>{"To prepare a proposal if you ask for one (pre-contractual steps)"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Where It Is Stored"}</h2>
                    <p>{"Messages are stored in a managed Postgres database hosted in the EU. Access is limited to the Halftone team."}</p>
                </section>

                <section>
                    <h2>{"4. Retention"}</h2>
                    <p>{"Enquiries that do not become projects are deleted after 12 months."}</p>
                </section>

                <section>
                    <h2>{"5. Your Rights"}</h2>
                    <p>{"You can ask us to:"}</p>
                    <ul>
                        <li>{"Show you the data we hold about you"}</li>
                        <li>{"Correct it"}</li>
                        <li>{"Delete it"}</li>
                    </ul>
                    <p>{"Email: privacy@halftone.studio"}</p>
                </section>
                <LegalLinks />
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <div>
                <h1>{"Terms & Conditions"}</h1>

                <section>
                    <h2>{"1. About This Site"}</h2>
                    <p>{"This website is operated by Halftone Studio, Lda., Rua da Prata 80, Lisbon, Portugal."}</p>
                </section>

                <section>
                    <h2>{"2. Content"}</h2>
                    <p>{"Case studies and client work shown here are published with permission. Logos and trademarks belong to their owners."}</p>
                </section>

                <section>
                    <h2>{"3. Enquiries"}</h2>
                    <p>{"Sending a message through the contact form does not create a contract. Any project work is covered by a separate written agreement."}</p>
                </section>

                <section>
                    <h2>{"4. Liability"}</h2>
                    <p>{"The information on this site is provided as is. We are not liable for decisions made based on it."}</p>
                </section>

                <section>
                    <h2>{"5. Governing Law"}</h2>
                    <p>{"These terms are governed by Portuguese law."}</p>
                </section>
                <LegalLinks />
            </div>
        </div>
    }
}
