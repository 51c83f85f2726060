use crate::screens::{BackendSetupScreen, HomeScreen, LoginScreen};
use dioxus::prelude::*;
use projtrack_client_core::{Notify, Services, SessionStore};
use std::path::PathBuf;
use std::sync::Arc;

pub const APP_DIR_NAME: &str = "projtrack";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Setup,
    Login,
    Home,
}

/// Home when a token is stored; Home still re-checks the session on mount.
pub fn initial_route(sessions: &SessionStore) -> Route {
    if sessions.is_logged_in() {
        Route::Home
    } else {
        Route::Login
    }
}

/// Per-user data directory holding `projtrack.db`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME))
}

/// Controller hook that bumps `revision`, re-rendering every component that read it.
pub fn redraw_hook(revision: SyncSignal<u64>) -> Notify {
    Arc::new(move || {
        let mut revision = revision;
        // The screen may already be gone when a late update lands.
        if let Ok(mut r) = revision.try_write() {
            *r += 1;
        };
    })
}

pub fn launch(services: Services) {
    let builder = dioxus::LaunchBuilder::new().with_context(services);
    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Projects Report")),
    );
    builder.launch(App);
}

#[component]
pub fn App() -> Element {
    let initial = use_context::<Services>();
    let services = use_context_provider(|| Signal::new(initial.clone()));
    let mut route = use_signal(|| initial_route(&services.peek().sessions));
    let is_dark = use_signal(|| false);

    let current_screen = match route() {
        Route::Setup => rsx! {
            BackendSetupScreen {
                is_dark: is_dark(),
                on_done: move |_| route.set(Route::Login),
            }
        },
        Route::Login => rsx! {
            LoginScreen {
                is_dark: is_dark(),
                on_login_success: move |_| route.set(Route::Home),
                on_go_setup: move |_| route.set(Route::Setup),
            }
        },
        Route::Home => rsx! {
            HomeScreen {
                is_dark: is_dark(),
                on_require_login: move |_| route.set(Route::Login),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}
