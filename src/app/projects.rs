use leptos::prelude::*;

use crate::{
    content::{Icon, Project, PROJECTS},
    motion::Motion,
    routes::Section,
};

use super::reveal::Reveal;

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <Reveal motion=Motion::fade_up().stagger(index, 100) class="project-card surface-card overflow-hidden">
            <div class="project-image h-52 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500"
                />
            </div>
            <div class="p-6 flex flex-col gap-4">
                <h3 class="text-xl font-semibold text-theme">{project.title}</h3>
                <p class="text-muted-theme leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
                <div class="flex gap-6 mt-2">
                    <a
                        href=project.code_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                    >
                        <i class=Icon::GitHub.class()></i>
                        " View Code"
                    </a>
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                    >
                        <i class=Icon::ExternalLink.class()></i>
                        " Live Demo"
                    </a>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="glow-section relative py-24">
            <div class="mx-auto w-full max-w-6xl px-6">
                <div class="text-center mb-16">
                    <Reveal>
                        <h2 class="text-4xl font-bold text-gradient mb-4">"Featured Projects"</h2>
                    </Reveal>
                    <Reveal motion=Motion::fade_up().delayed(100)>
                        <p class="text-lg text-muted-theme">"Here are some of my recent works"</p>
                    </Reveal>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
