use leptos::{html, prelude::*};

use crate::{
    content::{SkillCategory, SkillItem, SKILL_CATEGORIES},
    motion::{bar_width_style, Motion},
    routes::Section,
};

use super::reveal::{use_revealed, Reveal};

#[component]
fn SkillRow(skill: SkillItem, index: usize) -> impl IntoView {
    let bar = NodeRef::<html::Div>::new();
    let revealed = use_revealed(bar);
    let delay = 300 + index as u32 * 100;

    view! {
        <Reveal
            motion=Motion::slide_from_left().delayed(delay)
            class="skill-row flex items-center gap-4 py-3"
        >
            <i class=format!("{} text-2xl text-primary", skill.icon.class())></i>
            <div class="flex-1">
                <div class="flex justify-between text-theme">
                    <span>{skill.name}</span>
                    <span class="text-sm text-muted-theme">{format!("{}%", skill.level)}</span>
                </div>
                <div node_ref=bar class="progress-track mt-2">
                    <div
                        class="progress-bar"
                        style=move || bar_width_style(skill.level, revealed.get(), delay)
                    ></div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <Reveal motion=Motion::fade_up().delayed(200) class="surface-card p-8">
            <h3 class="text-xl font-semibold text-theme mb-4">{category.title}</h3>
            {category
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillRow skill=*skill index=index /> })
                .collect_view()}
        </Reveal>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="skills-section relative py-24">
            <div class="mx-auto w-full max-w-6xl px-6">
                <Reveal motion=Motion::fade_down()>
                    <h2 class="text-4xl font-bold text-center text-gradient mb-16">
                        "Technical Skills"
                    </h2>
                </Reveal>
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category=*category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
