//! Contact section: direct links, availability note, and a message form.
//!
//! The form never submits anywhere. A complete draft is acknowledged in
//! place and the fields are cleared.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::{EXTERNAL, LinkGlyph};
use crate::components::section_title::SectionTitle;
use crate::content::ContactLink;
use crate::state::contact::{ContactField, ContactForm};
use crate::state::section::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let (contacts, availability) = content.with_value(|c| (c.contacts.clone(), c.profile.availability.clone()));

    let links = contacts
        .into_iter()
        .map(|link| view! { <ContactRow link=link/> })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Contact.as_str() class="section">
            <SectionTitle title="Let's Connect" subtitle="Ready to start your next project? Let's talk!"/>
            <div class="grid grid-2 contact">
                <div class="card">
                    <h3 class="contact__heading">"Get in touch"</h3>
                    <div class="contact__links">{links}</div>
                    <div class="availability">
                        <div class="availability__status">
                            <div class="status-dot status-dot--pulse"></div>
                            <span>{availability.title}</span>
                        </div>
                        <p class="muted">{availability.note}</p>
                    </div>
                </div>
                <div class="card">
                    <h3 class="contact__heading">"Send a message"</h3>
                    <ContactFormCard/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(link: ContactLink) -> impl IntoView {
    let (target, rel) = link.anchor_attrs();
    let external = link.is_external();

    view! {
        <a class="contact__link" href=link.href target=target rel=rel>
            <div class="contact__link-icon">
                <LinkGlyph kind=link.kind/>
            </div>
            <span>{link.label}</span>
            <Show when=move || external>
                <span class="icon contact__external" aria-hidden="true">{EXTERNAL}</span>
            </Show>
        </a>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| match f.submit() {
            Ok(_) => log::info!("contact message acknowledged locally"),
            Err(e) => log::debug!("contact form incomplete: {e}"),
        });
    };

    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_owned());
    let edit = move |field: ContactField| {
        move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)))
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <input
                    class="form-input"
                    type="text"
                    name="name"
                    required
                    placeholder="Your name"
                    prop:value=value(ContactField::Name)
                    on:input=edit(ContactField::Name)
                />
            </div>
            <div class="form-group">
                <input
                    class="form-input"
                    type="email"
                    name="email"
                    required
                    placeholder="Your email"
                    prop:value=value(ContactField::Email)
                    on:input=edit(ContactField::Email)
                />
            </div>
            <div class="form-group">
                <textarea
                    class="form-input form-input--message"
                    name="message"
                    required
                    rows="5"
                    placeholder="Tell me about your project..."
                    prop:value=value(ContactField::Message)
                    on:input=edit(ContactField::Message)
                ></textarea>
            </div>
            <button type="submit" class="btn-primary">
                "Send Message"
            </button>
            <Show when=move || form.with(|f| f.acknowledgement.is_some())>
                <p class="contact-form__ack" role="status">
                    {move || form.with(|f| f.acknowledgement.unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}
