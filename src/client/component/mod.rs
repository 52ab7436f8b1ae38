pub mod footer;
pub mod layout;
pub mod navigation;
pub mod page;

pub use footer::Footer;
pub use layout::Layout;
pub use navigation::Navigation;
pub use page::{LoadingNotice, Page, Section};
