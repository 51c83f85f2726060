mod backend_setup;
mod home;
mod login;

pub use backend_setup::{BackendAddress, BackendSetupScreen};
pub use home::HomeScreen;
pub use login::LoginScreen;
