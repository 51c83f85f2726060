use crate::theme::{button_style, field_style, AppColors};
use crate::widgets::{GradientBackground, GradientCard};
use dioxus::prelude::*;
use projtrack_client_core::{ApiClient, BackendConfig, Services};

/// Setup form fields for a backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendAddress {
    /// `http` or `https`.
    pub scheme: String,
    pub host: String,
    /// Empty when the URL has no explicit port.
    pub port: String,
}

impl BackendAddress {
    pub fn parse(base_url: &str) -> Self {
        let (scheme, rest) = match base_url.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), base_url),
        };
        let authority = rest.split('/').next().unwrap_or(rest);
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
                (host.to_string(), port.to_string())
            }
            _ => (authority.to_string(), String::new()),
        };
        Self { scheme, host, port }
    }

    pub fn to_url(&self) -> projtrack_client_core::Result<String> {
        BackendConfig::url_from_host_port(&self.scheme, &self.host, &self.port)
    }
}

#[component]
pub fn BackendSetupScreen(is_dark: bool, on_done: EventHandler<()>) -> Element {
    let mut services = use_context::<Signal<Services>>();
    let saved = use_hook(|| BackendAddress::parse(&services.peek().api.config().base_url));
    let mut scheme = use_signal(|| saved.scheme.clone());
    let mut ip = use_signal(|| saved.host.clone());
    let mut port = use_signal(|| saved.port.clone());
    let address = move || BackendAddress {
        scheme: scheme(),
        host: ip(),
        port: port(),
    };
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut testing = use_signal(|| false);

    let on_surface = AppColors::on_surface(is_dark);
    let input_style = field_style(is_dark);
    let test_style = button_style("#49454F", testing());
    let save_style = button_style(AppColors::primary(is_dark), false);
    let error_color = AppColors::error(is_dark);
    let success_color = AppColors::success(is_dark);
    let link = AppColors::link(is_dark);

    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 480px; margin: 0 auto; padding-top: 24px;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Backend setup" }
                p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 24px; font-size: 0.9rem;",
                    "Set the protocol, IP and port of the project tracking server."
                }
                GradientCard { is_dark, title: "Server".to_string(),
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; color: {on_surface};", "Protocol" }
                        select {
                            style: "{input_style}",
                            onchange: move |ev| scheme.set(ev.value()),
                            for option_scheme in ["http", "https"] {
                                option {
                                    key: "{option_scheme}",
                                    value: option_scheme,
                                    selected: scheme() == option_scheme,
                                    "{option_scheme}"
                                }
                            }
                        }
                    }
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; color: {on_surface};", "IP address" }
                        input {
                            r#type: "text",
                            placeholder: "127.0.0.1",
                            value: "{ip()}",
                            oninput: move |ev| ip.set(ev.value()),
                            style: "{input_style}",
                        }
                    }
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; color: {on_surface};", "Port" }
                        input {
                            r#type: "text",
                            placeholder: "5000",
                            value: "{port()}",
                            oninput: move |ev| port.set(ev.value()),
                            style: "{input_style}",
                        }
                    }
                    if let Some(ref e) = error() {
                        p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                    }
                    if let Some(ref s) = success() {
                        p { style: "color: {success_color}; font-size: 0.875rem; margin-bottom: 12px;", "{s}" }
                    }
                    div { style: "display: flex; gap: 12px;",
                        button {
                            disabled: testing(),
                            onclick: move |_| {
                                error.set(None);
                                success.set(None);
                                let url = match address().to_url() {
                                    Ok(url) => url,
                                    Err(e) => {
                                        error.set(Some(e.to_string()));
                                        return;
                                    }
                                };
                                let config = BackendConfig {
                                    base_url: url,
                                    ..services.peek().api.config().clone()
                                };
                                testing.set(true);
                                spawn(async move {
                                    let res = match ApiClient::new(config) {
                                        Ok(client) => client.ping().await,
                                        Err(e) => Err(e),
                                    };
                                    testing.set(false);
                                    match res {
                                        Ok(status) => {
                                            tracing::info!("backend ping answered {}", status);
                                            success.set(Some(format!("Server reachable ({})", status)));
                                        }
                                        Err(e) => {
                                            tracing::warn!("backend ping failed: {}", e);
                                            error.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            },
                            style: "{test_style}",
                            if testing() { "Testing…" } else { "Test connection" }
                        }
                        button {
                            onclick: move |_| {
                                let saved = address()
                                    .to_url()
                                    .and_then(|url| services.write().set_backend_url(&url));
                                match saved {
                                    Ok(()) => {
                                        tracing::info!("backend set to {}", services.peek().api.config().base_url);
                                        on_done.call(());
                                    }
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                            },
                            style: "{save_style}",
                            "Save"
                        }
                    }
                }
                button {
                    onclick: move |_| on_done.call(()),
                    style: "margin-top: 16px; background: none; border: none; color: {link}; cursor: pointer; font-size: 0.9rem;",
                    "Back to login"
                }
            }
        }
    }
}
