use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_event_listener, use_window};

use crate::{
    interaction::NavState,
    routes::{is_active, NavItem, NAV_ITEMS},
};

use super::theme::use_theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let (nav, set_nav) = signal(NavState::default());
    let scrolled = Memo::new(move |_| nav.with(|n| n.scrolled()));
    let menu_open = Memo::new(move |_| nav.with(|n| n.menu_open()));

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_nav.update(|n| n.on_scroll(offset));
    });

    // the router handles the href; this closes the menu and returns to the
    // top in the same click
    let follow = move || {
        set_nav.update(NavState::navigate);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    let link = move |item: NavItem| {
        view! {
            <a
                href=item.path
                class=move || {
                    if is_active(&pathname.get(), &item) { "nav-link active" } else { "nav-link" }
                }
                on:click=move |_| follow()
            >
                {item.title}
            </a>
        }
    };

    view! {
        <nav
            class="fixed top-0 inset-x-0 z-[1000] py-4 transition-all duration-300 animate-drop-in"
            class:nav-scrolled=move || scrolled.get()
        >
            <div class="mx-auto w-full max-w-6xl px-6 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-theme" on:click=move |_| follow()>
                    "Port"
                    <span class="text-gradient">"folio"</span>
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS.into_iter().map(link).collect_view()}
                </div>
                <div class="flex items-center gap-2">
                    <button
                        class="icon-button"
                        aria-label="Toggle colour theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="icon-button md:hidden z-[1001]"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_nav.update(NavState::toggle_menu)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <div class="mobile-menu md:hidden fixed inset-0 z-[1000] flex flex-col items-center justify-center gap-8 animate-slide-in">
                {NAV_ITEMS.into_iter().map(link).collect_view()}
            </div>
        </Show>
    }
}
