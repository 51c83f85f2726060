use crate::theme::{spacing, AppColors};
use dioxus::prelude::*;

/// Form section: translucent surface with a primary accent edge and an optional heading.
#[component]
pub fn GradientCard(is_dark: bool, title: Option<String>, children: Element) -> Element {
    let accent = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let fill = if is_dark {
        "linear-gradient(135deg, rgba(73,69,79,0.92), rgba(28,27,31,0.92))"
    } else {
        "linear-gradient(135deg, rgba(255,255,255,0.97), rgba(224,247,250,0.9))"
    };
    rsx! {
        section {
            style: "background: {fill}; border-left: 4px solid {accent}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::MD} 0;",
            if let Some(title) = title {
                h2 { style: "margin: 0 0 {spacing::SM}; font-size: 1rem; color: {on_surface};", "{title}" }
            }
            {children}
        }
    }
}
