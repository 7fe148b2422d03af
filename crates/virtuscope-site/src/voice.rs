//! Voice navigation: matching spoken transcripts to site commands.
//!
//! Speech recognition itself is provided by the host through
//! [`SpeechRecognizer`]; this module only decides what a transcript means and
//! what feedback to show.

use crate::nav::Section;
use thiserror::Error;
use virtuscope_i18n::Translator;

/// Pixels moved by "scroll down" and "scroll up".
pub const SCROLL_STEP: i32 = 300;

/// Language the recognizer is asked to listen for. Commands are English only.
pub const RECOGNITION_LANGUAGE: &str = "en-US";

/// What the page should do in response to a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoiceAction {
    /// Load another page.
    Navigate(&'static str),
    /// Smooth-scroll to an element id on the current page.
    ScrollTo(&'static str),
    /// Scroll vertically by this many pixels.
    ScrollBy(i32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoiceCommand {
    GoTo(Section),
    ScrollDown,
    ScrollUp,
}

impl VoiceCommand {
    /// Every command, in matching order.
    pub const fn all() -> [VoiceCommand; 8] {
        [
            VoiceCommand::GoTo(Section::Home),
            VoiceCommand::GoTo(Section::Services),
            VoiceCommand::GoTo(Section::About),
            VoiceCommand::GoTo(Section::Contact),
            VoiceCommand::GoTo(Section::Animation),
            VoiceCommand::GoTo(Section::Architecture),
            VoiceCommand::ScrollDown,
            VoiceCommand::ScrollUp,
        ]
    }

    /// The phrase that triggers the command.
    pub const fn phrase(self) -> &'static str {
        match self {
            VoiceCommand::GoTo(Section::Home) => "go to home",
            VoiceCommand::GoTo(Section::Services) => "go to services",
            VoiceCommand::GoTo(Section::Animation) => "go to animation",
            VoiceCommand::GoTo(Section::Architecture) => "go to architecture",
            VoiceCommand::GoTo(Section::About) => "go to about",
            VoiceCommand::GoTo(Section::Contact) => "go to contact",
            VoiceCommand::ScrollDown => "scroll down",
            VoiceCommand::ScrollUp => "scroll up",
        }
    }

    pub fn action(self) -> VoiceAction {
        match self {
            VoiceCommand::GoTo(section) => match section.anchor() {
                Some(anchor) => VoiceAction::ScrollTo(anchor),
                None => VoiceAction::Navigate(section.href()),
            },
            VoiceCommand::ScrollDown => VoiceAction::ScrollBy(SCROLL_STEP),
            VoiceCommand::ScrollUp => VoiceAction::ScrollBy(-SCROLL_STEP),
        }
    }
}

/// Finds the first command whose phrase occurs anywhere in `transcript`,
/// ignoring case.
pub fn match_transcript(transcript: &str) -> Option<VoiceCommand> {
    let transcript = transcript.to_lowercase();
    VoiceCommand::all()
        .into_iter()
        .find(|command| transcript.contains(command.phrase()))
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RecognizerError {
    #[error("speech recognition is not supported")]
    Unsupported,
    #[error("speech recognition failed to initialize: {0}")]
    Failed(String),
}

/// Events delivered by the host's recognizer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecognitionEvent {
    Started,
    /// The final transcript of one utterance.
    Result(String),
    Error(String),
    /// The recognizer stopped on its own.
    Ended,
}

/// A one-shot speech recognizer supplied by the host.
pub trait SpeechRecognizer {
    fn start(&mut self, language: &str) -> Result<(), RecognizerError>;

    fn abort(&mut self);
}

/// The bubble shown next to the microphone button.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Feedback {
    Listening,
    Executing(VoiceCommand),
    Unrecognized,
    Unsupported,
    Failed,
    Error(String),
}

impl Feedback {
    pub fn message(&self, translator: &Translator<'_>) -> String {
        match self {
            Feedback::Listening => translator.t("voice.listening").to_string(),
            Feedback::Executing(command) => {
                format!("{} {}", translator.t("voice.executing"), command.phrase())
            },
            Feedback::Unrecognized => translator.t("voice.unrecognized").to_string(),
            Feedback::Unsupported => translator.t("voice.unsupported").to_string(),
            Feedback::Failed => translator.t("voice.failed").to_string(),
            Feedback::Error(detail) => format!("{} {}", translator.t("voice.error"), detail),
        }
    }
}

/// Drives a [`SpeechRecognizer`] and interprets what it hears.
pub struct VoiceNavigator<R> {
    recognizer: R,
    listening: bool,
    transcript: Option<String>,
    feedback: Option<Feedback>,
}

impl<R: SpeechRecognizer> VoiceNavigator<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            listening: false,
            transcript: None,
            feedback: None,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The last thing heard, lowercased.
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// The microphone button.
    pub fn toggle(&mut self) {
        if self.listening {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Handles one recognizer event, returning the action to perform if a
    /// command was recognized.
    pub fn handle(&mut self, event: RecognitionEvent) -> Option<VoiceAction> {
        if !self.listening {
            tracing::debug!("Ignoring recognizer event while not listening: {:?}", event);
            return None;
        }

        match event {
            RecognitionEvent::Started => {
                self.feedback = Some(Feedback::Listening);
                None
            },
            RecognitionEvent::Result(transcript) => {
                let transcript = transcript.to_lowercase();
                let command = match_transcript(&transcript);
                self.transcript = Some(transcript);

                match command {
                    Some(command) => {
                        tracing::debug!("Voice command '{}'", command.phrase());
                        self.feedback = Some(Feedback::Executing(command));
                        self.stop();
                        Some(command.action())
                    },
                    None => {
                        self.feedback = Some(Feedback::Unrecognized);
                        None
                    },
                }
            },
            RecognitionEvent::Error(error) => {
                tracing::error!("Speech recognition error: {}", error);
                self.feedback = Some(Feedback::Error(error));
                self.stop();
                None
            },
            RecognitionEvent::Ended => {
                // Recognition is one-shot; keep listening until toggled off.
                self.start();
                None
            },
        }
    }

    fn start(&mut self) {
        match self.recognizer.start(RECOGNITION_LANGUAGE) {
            Ok(()) => self.listening = true,
            Err(e) => {
                tracing::error!("Speech recognition error: {}", e);
                self.feedback = Some(match e {
                    RecognizerError::Unsupported => Feedback::Unsupported,
                    RecognizerError::Failed(_) => Feedback::Failed,
                });
                self.listening = false;
            },
        }
    }

    fn stop(&mut self) {
        self.recognizer.abort();
        self.listening = false;
    }
}
