mod footer_bar;
mod header_bar;
mod input;
mod tab_bar;
mod toggle;

pub use footer_bar::{FooterBar, FooterBarStyle, Hint};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use tab_bar::{Orientation, TabBar};
pub use toggle::Toggle;
