use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{Palette, ThemeMode, ThemeStore};
#[cfg(feature = "hydrate")]
use crate::theme::{StorageError, ThemeStorage, THEME_STORAGE_KEY};

#[cfg(feature = "hydrate")]
type ActiveStorage = BrowserStorage;
#[cfg(not(feature = "hydrate"))]
type ActiveStorage = crate::theme::MemoryStorage;

/// Reads through leptos-use's local storage signal. Writes go straight to
/// `window.localStorage` so the flag is stored before `toggle` returns.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
pub struct BrowserStorage {
    stored: Signal<String>,
}

#[cfg(feature = "hydrate")]
impl ThemeStorage for BrowserStorage {
    fn read_flag(&self) -> Result<Option<String>, StorageError> {
        // the string codec reports a missing key as ""
        let flag = self.stored.get_untracked();
        Ok((!flag.is_empty()).then_some(flag))
    }

    fn write_flag(&self, value: &str) -> Result<(), StorageError> {
        window()
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

#[derive(Clone, Copy)]
pub struct ThemeHandle {
    mode: Signal<ThemeMode>,
    toggle: Callback<()>,
}

impl ThemeHandle {
    pub fn mode(&self) -> Signal<ThemeMode> {
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.get().palette()
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }

    pub fn toggle(&self) {
        self.toggle.run(());
    }
}

/// Panics outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme must be called inside a <ThemeProvider>")
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (mode, set_mode) = signal(ThemeMode::default());
    let store = StoredValue::new(None::<ThemeStore<ActiveStorage>>);

    #[cfg(feature = "hydrate")]
    let storage = {
        let (stored, _, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
        BrowserStorage { stored }
    };
    #[cfg(not(feature = "hydrate"))]
    let storage = ActiveStorage::default();
    let mut storage = Some(storage);

    // load after hydration so server and client render the same first frame
    Effect::watch(
        || (),
        move |_, _, _| {
            let Some(storage) = storage.take() else {
                return;
            };
            let loaded = ThemeStore::load(storage);
            set_mode.set(loaded.mode());
            store.set_value(Some(loaded));
        },
        true,
    );

    Effect::new(move |_| {
        let scheme = mode.get().scheme();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.set_attribute("data-theme", scheme) {
                log::debug!("could not tag document with theme: {err:?}");
            }
        }
    });

    let toggle = Callback::new(move |_: ()| {
        let next = store
            .try_update_value(|s| s.as_mut().map(|s| s.toggle()))
            .flatten()
            .unwrap_or_else(|| mode.get_untracked().toggled());
        set_mode.set(next);
    });

    provide_context(ThemeHandle {
        mode: mode.into(),
        toggle,
    });

    view! {
        <div
            class="theme-root min-h-screen"
            style=move || {
                let mode = mode.get();
                format!("{} color-scheme: {};", mode.palette().css_vars(), mode.scheme())
            }
        >
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    #[should_panic(expected = "inside a <ThemeProvider>")]
    fn test_use_theme_outside_provider_panics() {
        Owner::new().with(|| {
            use_theme();
        });
    }

    #[test]
    fn test_use_theme_reads_provided_handle() {
        Owner::new().with(|| {
            let (mode, set_mode) = signal(ThemeMode::Light);
            provide_context(ThemeHandle {
                mode: mode.into(),
                toggle: Callback::new(move |_: ()| set_mode.update(|m| *m = m.toggled())),
            });

            let theme = use_theme();
            assert_eq!(theme.mode().get_untracked(), ThemeMode::Light);
            theme.toggle();
            assert_eq!(theme.mode().get_untracked(), ThemeMode::Dark);
        });
    }
}
