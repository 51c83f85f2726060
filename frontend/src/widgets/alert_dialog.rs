use crate::theme::{button_style, AppColors};
use dioxus::prelude::*;
use projtrack_client_core::Alert;

/// Modal with a title, a message and a single OK button.
#[component]
pub fn AlertDialog(is_dark: bool, alert: Alert, on_dismiss: EventHandler<()>) -> Element {
    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let ok_style = button_style(AppColors::primary(is_dark), false);
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div {
                style: "background: {surface}; color: {on_surface}; border-radius: 12px; padding: 20px; width: 80%; max-width: 360px;",
                h3 { style: "margin: 0 0 8px;", "{alert.title}" }
                p { style: "margin: 0 0 16px;", "{alert.message}" }
                div { style: "text-align: right;",
                    button {
                        onclick: move |_| on_dismiss.call(()),
                        style: "{ok_style}",
                        "OK"
                    }
                }
            }
        }
    }
}
