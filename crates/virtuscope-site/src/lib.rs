#![doc = include_str!("../README.md")]

pub mod carousel;
mod error;
pub mod model;
pub mod nav;
pub mod selector;
pub mod voice;

pub use carousel::{AUTOPLAY_INTERVAL, Carousel};
pub use error::SiteError;
pub use model::{BuildingModel, ModelViewer};
pub use nav::Section;
pub use selector::{LanguageOption, LanguageSelector};
pub use voice::{
    Feedback, RECOGNITION_LANGUAGE, RecognitionEvent, RecognizerError, SCROLL_STEP,
    SpeechRecognizer, VoiceAction, VoiceCommand, VoiceNavigator, match_transcript,
};
