use leptos::prelude::*;

use crate::{
    content::{Icon, SOCIAL_LINKS},
    motion::Motion,
    routes::Section,
};

use super::reveal::Reveal;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor() class="glow-section relative py-24">
            <div class="mx-auto w-full max-w-4xl px-6 text-center">
                <Reveal motion=Motion::fade_up().delayed(300)>
                    <h2 class="text-4xl font-bold text-gradient mb-12 flex items-center justify-center gap-4">
                        <i class=Icon::Handshake.class()></i>
                        "Let's Connect"
                        <i class=Icon::Rocket.class()></i>
                    </h2>
                </Reveal>
                <div class="grid gap-6 sm:grid-cols-2">
                    {SOCIAL_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, social)| {
                            view! {
                                <Reveal motion=Motion::fade_up().delayed(300).stagger(i + 1, 100)>
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link surface-card"
                                        style=format!("--accent: {};", social.accent)
                                    >
                                        <i class=format!("{} text-3xl", social.icon.class())></i>
                                        <span class="text-lg font-medium">{social.name}</span>
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
