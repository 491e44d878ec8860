//! Services section with a call to action.

use leptos::prelude::*;

use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="section__heading">
                <h2>"My Services"</h2>
                <p>"Comprehensive development solutions tailored to your business needs"</p>
            </div>
            <div class="services">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let class = format!("service service--{}", service.accent);
                        view! {
                            <article class=class>
                                <h3 class="service__title">{service.title}</h3>
                                <p class="service__description">{service.description}</p>
                                <ul class="service__features">
                                    {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <a class="service__more" href="#contact">"Learn More →"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="services__cta">
                <p>"Ready to start your project?"</p>
                <a class="btn btn--primary" href="#contact">"Get Started Today"</a>
            </div>
        </section>
    }
}
