use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SiteError {
    #[error("a carousel needs at least one slide")]
    EmptyCarousel,
    #[error("slide {index} is out of range for a carousel of {len}")]
    SlideOutOfRange { index: usize, len: usize },
    #[error("no building model at index {0}")]
    UnknownModel(usize),
}
