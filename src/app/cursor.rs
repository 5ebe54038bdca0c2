use std::time::Duration;

use leptos::{ev, leptos_dom::helpers::TimeoutHandle, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::interaction::{
    cursor::{hovers_interactive, press, track_pointer, CursorCell, INTERACTIVE_ATTR},
    scope::{SharedSubscriptions, Timer},
    CursorState, HoverTarget, Point, Ripple,
};

#[derive(Clone, Copy)]
struct Overlay(WriteSignal<CursorState>);

impl CursorCell for Overlay {
    fn update<R>(&self, f: impl FnOnce(&mut CursorState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

struct WindowTimer;

impl Timer for WindowTimer {
    type Handle = TimeoutHandle;

    fn start<F>(&self, delay: Duration, fire: F) -> Option<TimeoutHandle>
    where
        F: FnOnce() + 'static,
    {
        set_timeout_with_handle(fire, delay)
            .map_err(|err| log::warn!("cursor timer not scheduled: {err:?}"))
            .ok()
    }

    fn cancel(handle: TimeoutHandle) {
        handle.clear();
    }
}

fn hold(scope: &SharedSubscriptions, release: impl FnOnce() + Send + Sync + 'static) {
    match scope.lock() {
        Ok(mut subs) => {
            subs.hold(release);
        }
        Err(_) => release(),
    }
}

fn ancestry(el: web_sys::Element) -> impl Iterator<Item = HoverTarget> {
    std::iter::successors(Some(el), |el| el.parent_element()).map(|el| HoverTarget {
        tag: el.tag_name(),
        classes: el.get_attribute("class").unwrap_or_default(),
        marked: el.has_attribute(INTERACTIVE_ATTR),
    })
}

fn client_point(e: &web_sys::MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

#[component]
pub fn CursorEffect() -> impl IntoView {
    let (cursor, set_cursor) = signal(CursorState::default());
    let overlay = Overlay(set_cursor);
    let scope = SharedSubscriptions::default();

    let trail_scope = scope.clone();
    hold(
        &scope,
        use_event_listener(use_document(), ev::mousemove, move |e| {
            track_pointer(&overlay, &trail_scope, &WindowTimer, client_point(&e));
        }),
    );

    // delegated, so elements rendered after mount are covered too
    hold(
        &scope,
        use_event_listener(use_document(), ev::mouseover, move |e| {
            let hovering = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| hovers_interactive(ancestry(el)));
            if cursor.with_untracked(|c| c.hovering()) != hovering {
                set_cursor.update(|c| c.set_hovering(hovering));
            }
        }),
    );

    hold(
        &scope,
        use_event_listener(use_document(), ev::mouseout, move |e| {
            if e.related_target().is_none() {
                set_cursor.update(CursorState::pointer_left);
            }
        }),
    );

    let click_scope = scope.clone();
    hold(
        &scope,
        use_event_listener(use_document(), ev::click, move |e| {
            press(
                &overlay,
                &click_scope,
                &WindowTimer,
                client_point(&e),
                js_sys::Date::now(),
            );
        }),
    );

    on_cleanup(move || {
        if let Ok(mut subs) = scope.lock() {
            subs.release_all();
        }
    });

    let hovering = Memo::new(move |_| cursor.with(|c| c.hovering()));

    view! {
        <div
            class="cursor-overlay"
            aria-hidden="true"
            class:hidden=move || !cursor.with(|c| c.visible())
        >
            <div
                class="cursor-dot"
                class:hovering=move || hovering.get()
                style=move || {
                    cursor
                        .with(|c| {
                            let p = c.pointer();
                            format!(
                                "left: {}px; top: {}px; transform: translate(-50%, -50%) scale({});",
                                p.x,
                                p.y,
                                c.scale(),
                            )
                        })
                }
            ></div>
            <div
                class="cursor-trail"
                class:hovering=move || hovering.get()
                style=move || {
                    cursor
                        .with(|c| {
                            let p = c.trail();
                            format!("left: {}px; top: {}px;", p.x, p.y)
                        })
                }
            ></div>
            <For
                each=move || cursor.with(|c| c.ripples().to_vec())
                key=|ripple| ripple.id
                children=move |ripple: Ripple| {
                    view! {
                        <div
                            class="cursor-ripple"
                            style=format!("left: {}px; top: {}px;", ripple.at.x, ripple.at.y)
                        ></div>
                    }
                }
            />
        </div>
    }
}
