//! App theme: colors and spacing for the project tracking screens.

/// Light palette follows the field app's cyan background; dark is a muted slate.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_BACKGROUND: &'static str = "#E0F7FA";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#1C1B1F";
    pub const LIGHT_PRIMARY: &'static str = "#007BFF";
    pub const LIGHT_LINK: &'static str = "#6200EE";
    pub const LIGHT_DANGER: &'static str = "#FF6347";
    pub const LIGHT_SUCCESS: &'static str = "#029C76";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_BACKGROUND: &'static str = "#102A2E";
    pub const DARK_SURFACE: &'static str = "#1C1B1F";
    pub const DARK_ON_SURFACE: &'static str = "#E6E1E5";
    pub const DARK_PRIMARY: &'static str = "#5EA8FF";
    pub const DARK_LINK: &'static str = "#D0BCFF";
    pub const DARK_DANGER: &'static str = "#FF8A73";
    pub const DARK_SUCCESS: &'static str = "#029C76";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    pub const OUTLINE: &'static str = "#938F99";

    fn pick(is_dark: bool, dark: &'static str, light: &'static str) -> &'static str {
        if is_dark {
            dark
        } else {
            light
        }
    }

    pub fn background(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_BACKGROUND, Self::LIGHT_BACKGROUND)
    }
    pub fn surface(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_SURFACE, Self::LIGHT_SURFACE)
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_ON_SURFACE, Self::LIGHT_ON_SURFACE)
    }
    pub fn primary(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_PRIMARY, Self::LIGHT_PRIMARY)
    }
    /// Upload folder link and secondary text buttons.
    pub fn link(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_LINK, Self::LIGHT_LINK)
    }
    /// Logout.
    pub fn danger(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_DANGER, Self::LIGHT_DANGER)
    }
    pub fn success(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_SUCCESS, Self::LIGHT_SUCCESS)
    }
    pub fn error(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_ERROR, Self::LIGHT_ERROR)
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
    pub const SCREEN_PADDING: &'static str = "20px";
}

/// Shared inline style for text inputs and selects.
pub fn field_style(is_dark: bool) -> String {
    format!(
        "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        AppColors::OUTLINE,
        AppColors::on_surface(is_dark)
    )
}

/// Filled button in `color`; dimmed while `busy`.
pub fn button_style(color: &str, busy: bool) -> String {
    let opacity = if busy { "0.6" } else { "1" };
    format!(
        "padding: 12px 20px; border-radius: 8px; background: {}; color: white; font-weight: 600; border: none; cursor: pointer; opacity: {};",
        color, opacity
    )
}
