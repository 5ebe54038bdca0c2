mod about;
mod contact;
mod cursor;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    build_info,
    routes::{page_title, sections_for_path, Section},
};

use about::About;
use contact::Contact;
use cursor::CursorEffect;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
pub use theme::{use_theme, ThemeHandle, ThemeProvider};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta
            name="description"
            content="Portfolio of a full stack developer: projects, skills and contact."
        />

        <ThemeProvider>
            <Router>
                <Navbar />
                <CursorEffect />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Page path="/" /> } />
                        <Route path=path!("/about") view=|| view! { <Page path="/about" /> } />
                        <Route path=path!("/skills") view=|| view! { <Page path="/skills" /> } />
                        <Route
                            path=path!("/projects")
                            view=|| view! { <Page path="/projects" /> }
                        />
                        <Route path=path!("/contact") view=|| view! { <Page path="/contact" /> } />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </ThemeProvider>
    }
}

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::About => view! { <About /> }.into_any(),
        Section::Skills => view! { <Skills /> }.into_any(),
        Section::Projects => view! { <Projects /> }.into_any(),
        Section::Contact => view! { <Contact /> }.into_any(),
    }
}

/// Renders every section routed to `path`, in order.
#[component]
fn Page(path: &'static str) -> impl IntoView {
    let sections = sections_for_path(path).unwrap_or_default();
    // single-section pages sit below the fixed navbar
    let class = if sections.len() == 1 { "pt-20" } else { "" };
    view! {
        <Title text=page_title(path) />
        <div class=class>{sections.iter().copied().map(section_view).collect_view()}</div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <h1 class="text-7xl font-extrabold text-gradient">"404"</h1>
            <p class="text-lg text-muted-theme">"This page drifted out of orbit."</p>
            <a href="/" class="btn btn-primary">
                "Back home"
            </a>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = build_info::build_year().map(|y| format!("© {y} ")).unwrap_or_default();
    view! {
        <footer class="py-8 text-center text-sm text-muted-theme border-t border-theme">
            {year}
            "Tharsan. Built with Rust and Leptos."
        </footer>
    }
}
