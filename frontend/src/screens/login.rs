use crate::app::redraw_hook;
use crate::theme::{button_style, field_style, AppColors};
use crate::widgets::{AlertDialog, GradientBackground, GradientCard};
use dioxus::prelude::*;
use projtrack_client_core::{LoginController, LoginOutcome, LoginPhase, Services};

#[component]
pub fn LoginScreen(
    is_dark: bool,
    on_login_success: EventHandler<()>,
    on_go_setup: EventHandler<()>,
) -> Element {
    let services = use_context::<Signal<Services>>();
    let revision = use_signal_sync(|| 0u64);
    let controller = use_hook(move || {
        let services = services.peek().clone();
        LoginController::new(services.api, services.sessions, redraw_hook(revision))
    });

    // Home opens once the "Login Successful" alert is dismissed.
    let mut logged_in = use_signal(|| false);

    // Subscribe to controller updates.
    let _ = revision();
    let state = controller.snapshot();
    let pending = state.phase == LoginPhase::Pending;

    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let link = AppColors::link(is_dark);
    let input_style = field_style(is_dark);
    let submit_style = format!("width: 100%; {}", button_style(primary, pending));

    let c_user = controller.clone();
    let c_pass = controller.clone();
    let c_submit = controller.clone();
    let c_alert = controller.clone();

    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 400px; margin: 0 auto; padding-top: 48px;",
                div { style: "text-align: center; margin-bottom: 24px;",
                    h1 { style: "font-size: 1.5rem; font-weight: bold; color: {on_surface}; margin: 16px 0 8px;", "Login" }
                    p { style: "color: {on_surface}; opacity: 0.8; font-size: 0.9rem;", "Sign in with your engineer account" }
                }
                GradientCard { is_dark,
                    form {
                        onsubmit: move |ev| ev.prevent_default(),
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Username" }
                            input {
                                r#type: "text",
                                placeholder: "Username",
                                autocomplete: "username",
                                value: "{state.username}",
                                oninput: move |ev| c_user.set_username(ev.value()),
                                style: "{input_style}",
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Password" }
                            input {
                                r#type: "password",
                                placeholder: "Password",
                                autocomplete: "current-password",
                                value: "{state.password}",
                                oninput: move |ev| c_pass.set_password(ev.value()),
                                style: "{input_style}",
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: pending,
                            onclick: move |_| {
                                let controller = c_submit.clone();
                                spawn(async move {
                                    if let LoginOutcome::LoggedIn(_) = controller.submit().await {
                                        logged_in.set(true);
                                    }
                                });
                            },
                            style: "{submit_style}",
                            if pending { "Signing in…" } else { "Login" }
                        }
                    }
                }
                button {
                    onclick: move |_| on_go_setup.call(()),
                    style: "margin-top: 16px; background: none; border: none; color: {link}; cursor: pointer; font-size: 0.9rem;",
                    "Configure backend"
                }
            }
            if let Some(alert) = state.alert.clone() {
                AlertDialog {
                    is_dark,
                    alert,
                    on_dismiss: move |_| {
                        c_alert.dismiss_alert();
                        if logged_in() {
                            on_login_success.call(());
                        }
                    },
                }
            }
        }
    }
}
