mod controller;
mod page_error;

pub use controller::{PageController, PageSettings, PageState};
pub use page_error::PageError;
