mod alert_dialog;
mod gradient_background;
mod gradient_card;

pub use alert_dialog::AlertDialog;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
