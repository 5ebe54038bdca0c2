use leptos::prelude::*;

use crate::{content::ABOUT, motion::Motion, routes::Section};

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="relative py-24 overflow-hidden">
            <div class="dot-pattern absolute inset-0 opacity-50 pointer-events-none"></div>
            <div class="relative mx-auto w-full max-w-6xl px-6 grid md:grid-cols-2 gap-16 items-center">
                <Reveal motion=Motion::slide_from_left()>
                    <div class="profile-frame">
                        <img
                            src=ABOUT.image
                            alt="Profile"
                            class="w-full aspect-square object-cover rounded-2xl"
                        />
                    </div>
                </Reveal>
                <Reveal motion=Motion::slide_from_right()>
                    <h2 class="text-4xl font-bold text-gradient mb-2">{ABOUT.title}</h2>
                    <h3 class="text-xl font-semibold text-primary mb-6">{ABOUT.subtitle}</h3>
                    <p class="text-lg leading-relaxed text-muted-theme mb-8">{ABOUT.description}</p>
                    {ABOUT
                        .highlights
                        .iter()
                        .enumerate()
                        .map(|(i, h)| {
                            view! {
                                <Reveal
                                    motion=Motion::fade_up().stagger(i, 150)
                                    class="surface-card p-6 mb-4"
                                >
                                    <h4 class="text-lg font-semibold text-theme mb-2">{h.heading}</h4>
                                    <p class="text-muted-theme">{h.body}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
