//! Contact section: channels, socials and the message form.

use leptos::prelude::*;

use crate::components::field::{TextAreaField, TextField};
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::state::forms::{ContactForm, FormState};

#[component]
pub fn Contact(state: FormState<ContactForm>) -> impl IntoView {
    let FormState { form, errors } = state;

    view! {
        <section id="contact" class="section section--alt">
            <div class="section__heading">
                <h2>"Get In Touch"</h2>
                <p>"Have a project in mind? Let's discuss how we can bring your ideas to life"</p>
            </div>
            <div class="contact">
                <div class="contact__info">
                    <h3>"Contact Information"</h3>
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            let value = match channel.href {
                                Some(href) => {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer">{channel.value}</a>
                                    }
                                        .into_any()
                                }
                                None => view! { <span>{channel.value}</span> }.into_any(),
                            };
                            view! {
                                <div class="contact__channel">
                                    <p class="contact__label">{channel.label}</p>
                                    <p class="contact__value">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="contact__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="contact__availability">
                        "I'm currently available for new projects and collaborations. Let's create something amazing together!"
                    </p>
                </div>
                <form class="contact__form form" method="post" action="/contact">
                    <div class="form__row">
                        <TextField
                            label="Name"
                            name="name"
                            kind="text"
                            value=form.name
                            placeholder="Your name"
                            error=errors.get("name")
                        />
                        <TextField
                            label="Email"
                            name="email"
                            kind="email"
                            value=form.email
                            placeholder="your.email@example.com"
                            error=errors.get("email")
                        />
                    </div>
                    <TextField
                        label="Subject"
                        name="subject"
                        kind="text"
                        value=form.subject
                        placeholder="What's this about?"
                        error=errors.get("subject")
                    />
                    <TextAreaField
                        label="Message"
                        name="message"
                        rows="5"
                        value=form.message
                        placeholder="Tell me about your project..."
                        error=errors.get("message")
                    />
                    <button class="btn btn--primary" type="submit">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}
