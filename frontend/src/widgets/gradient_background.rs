use crate::theme::{spacing, AppColors};
use dioxus::prelude::*;

/// Full-height screen backdrop fading from the theme background into the surface color.
#[component]
pub fn GradientBackground(is_dark: bool, children: Element) -> Element {
    let top = AppColors::background(is_dark);
    let bottom = if is_dark {
        AppColors::DARK_SURFACE
    } else {
        "#F5FDFE"
    };
    rsx! {
        div {
            class: "safe-area",
            style: "min-height: 100vh; padding: {spacing::SCREEN_PADDING}; box-sizing: border-box; background: linear-gradient(to bottom, {top}, {bottom});",
            {children}
        }
    }
}
