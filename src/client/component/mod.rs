pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
