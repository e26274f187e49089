//! UI screens.

mod app;
mod empty_screen;
mod home_screen;
mod login_screen;
mod objects_screen;
mod process_screen;
mod product_list;
mod profile_screen;
mod registration_screen;
mod settings_screen;
mod view;

pub use app::App;
pub use empty_screen::EmptyScreen;
pub use home_screen::{HomeAction, HomeScreen, KeyContext, TabScreen};
pub use login_screen::{LoginAction, LoginScreen};
pub use objects_screen::{ObjectsAction, ObjectsScreen};
pub use process_screen::{ProcessAction, ProcessScreen};
pub use product_list::ProductList;
pub use profile_screen::{ProfileAction, ProfileScreen};
pub use registration_screen::{RegistrationAction, RegistrationScreen};
pub use settings_screen::{SettingsAction, SettingsScreen};
pub use view::{ViewContext, centered};
