use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion::Motion;

/// Flips to `true` the first time `target` enters the viewport, then stops
/// observing.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observer = use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|e| e.is_intersecting()) {
            set_revealed.set(true);
        }
    });
    let stop = observer.stop;
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
    revealed
}

#[component]
pub fn Reveal(
    #[prop(default = Motion::fade_up())] motion: Motion,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);

    view! {
        <div node_ref=target class=class style=move || motion.style(revealed.get())>
            {children()}
        </div>
    }
}
