use std::fmt::Debug;
use thiserror::Error;

/// Text surface of the page.
pub trait Presenter: Debug {
    fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), PresenterError>;

    fn alert(&mut self, message: &str);
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresenterError {
    #[error("no element with id '{0}'")]
    UnknownElement(String),
}
