use std::{cell::RefCell, rc::Rc};

use leptos::{ev, ev::MouseEvent, html, prelude::*};
use leptos_router::hooks::use_navigate;
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;

use crate::{
    content::HERO,
    motion::{parallax_style, scroll_progress, Motion},
    routes::Section,
    starfield::{Drag, Starfield, STAR_COUNT, STAR_RADIUS},
};

use super::{reveal::Reveal, theme::use_theme};

const STAR_SEED: u64 = 0x5eed_5747;

struct Scene {
    field: Starfield,
    ctx: web_sys::CanvasRenderingContext2d,
}

enum SceneState {
    Pending,
    Ready(Scene),
    Unavailable,
}

fn open_scene(canvas: &web_sys::HtmlCanvasElement) -> Option<Scene> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    Some(Scene {
        field: Starfield::generate(STAR_COUNT, STAR_RADIUS, STAR_SEED),
        ctx,
    })
}

fn draw(canvas: &web_sys::HtmlCanvasElement, scene: &Scene, color: &str) {
    let (w, h) = (canvas.client_width().max(0) as u32, canvas.client_height().max(0) as u32);
    if w == 0 || h == 0 {
        return;
    }
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    let ctx = &scene.ctx;
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    ctx.set_fill_style_str(color);
    for star in scene.field.project(w as f64, h as f64) {
        let size = (2.0 / star.depth).clamp(0.5, 2.5);
        ctx.fill_rect(star.x, star.y, size, size);
    }
}

#[component]
fn StarCanvas() -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let theme = use_theme();
    let state = Rc::new(RefCell::new(SceneState::Pending));
    let drag = StoredValue::new(Drag::default());

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        drag.update_value(|d| d.moved(e.client_x() as f64, e.client_y() as f64));
    });
    let _ = use_event_listener(use_window(), ev::mouseup, move |_| {
        drag.update_value(Drag::release);
    });

    // stops with the owning scope
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(el) = canvas.get_untracked() else {
            return;
        };
        let mut state = state.borrow_mut();
        if matches!(*state, SceneState::Pending) {
            *state = match open_scene(&el) {
                Some(scene) => SceneState::Ready(scene),
                None => {
                    log::warn!("2d canvas context unavailable, hero background disabled");
                    SceneState::Unavailable
                }
            };
        }
        if let SceneState::Ready(scene) = &mut *state {
            let (dx, dy) = drag.try_update_value(Drag::take).unwrap_or_default();
            scene.field.orbit(dx, dy, el.client_height() as f64);
            scene.field.advance(args.delta / 1000.0);
            draw(&el, scene, theme.mode().get_untracked().palette().primary);
        }
    });

    view! {
        <canvas
            node_ref=canvas
            class="absolute inset-0 w-full h-full opacity-70 cursor-grab active:cursor-grabbing"
            aria-hidden="true"
            on:mousedown=move |e: MouseEvent| {
                e.prevent_default();
                drag.update_value(|d| d.press(e.client_x() as f64, e.client_y() as f64));
            }
        ></canvas>
    }
}

fn page_progress(scroll_y: f64) -> f64 {
    // also keeps server rendering away from the DOM
    if scroll_y <= 0.0 {
        return 0.0;
    }
    let Some(root) = document().document_element() else {
        return 0.0;
    };
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    scroll_progress(scroll_y, root.scroll_height() as f64, viewport)
}

#[component]
pub fn Hero() -> impl IntoView {
    let (scroll_y, set_scroll_y) = signal(0.0);
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or_default());
    });

    let navigate = use_navigate();
    let to_projects = navigate.clone();
    let view_work = move |_: MouseEvent| {
        match document().get_element_by_id(Section::Projects.anchor()) {
            Some(el) => {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => to_projects("/projects", Default::default()),
        }
    };
    let get_in_touch = move |_: MouseEvent| {
        navigate("/contact", Default::default());
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    view! {
        <section id=Section::Hero.anchor() class="relative min-h-screen flex items-center overflow-hidden">
            <StarCanvas />
            <div class="relative z-10 mx-auto w-full max-w-6xl px-6 pt-24 grid lg:grid-cols-2 gap-12 items-center">
                <Reveal motion=Motion::slide_from_left()>
                    <Reveal motion=Motion::fade_up().lasting(500).delayed(200)>
                        <span class="block text-lg font-semibold tracking-wide text-primary">
                            {HERO.greeting}
                        </span>
                    </Reveal>
                    <Reveal motion=Motion::fade_up().lasting(500).delayed(400)>
                        <h1 class="text-5xl md:text-7xl font-extrabold leading-tight text-gradient">
                            {HERO.name}
                        </h1>
                    </Reveal>
                    <Reveal motion=Motion::fade_up().lasting(500).delayed(600)>
                        <h2 class="text-2xl md:text-4xl font-bold text-muted-theme mt-2">
                            {HERO.role}
                        </h2>
                    </Reveal>
                    <Reveal motion=Motion::fade_up().lasting(500).delayed(800)>
                        <p class="max-w-xl text-lg leading-relaxed text-muted-theme mt-6">
                            {HERO.description}
                        </p>
                    </Reveal>
                    <Reveal motion=Motion::fade_up().lasting(500).delayed(1000) class="flex flex-wrap gap-4 mt-8">
                        <button class="btn btn-primary" on:click=view_work>
                            "View My Work"
                        </button>
                        <button class="btn btn-outline" on:click=get_in_touch>
                            "Get in Touch"
                        </button>
                    </Reveal>
                </Reveal>
                <Reveal motion=Motion::pop_in().lasting(1000) class="hidden lg:flex justify-center">
                    <div
                        class="w-full h-full flex items-center justify-center"
                        style=move || parallax_style(page_progress(scroll_y.get()))
                    >
                        <div class="floating-blob"></div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
