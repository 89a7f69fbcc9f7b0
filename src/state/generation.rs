//! Generation request lifecycle

use std::sync::Arc;

use eframe::egui;
use tokio::task::JoinHandle;

use crate::gemini::{GenerationError, PromptService};
use crate::history::PromptResult;
use crate::task::{PollResult, poll_task};

/// Phase of the generation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
    Succeeded,
    Failed,
}

/// Where a submission's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOrigin {
    /// Typed into the input box
    Input,
    /// Clicked from the genre catalog
    Example,
}

/// How a finished generation ended
#[derive(Debug)]
pub enum Completion {
    Succeeded {
        result: PromptResult,
        origin: SubmitOrigin,
    },
    Failed {
        cause: String,
        origin: SubmitOrigin,
    },
}

/// The generic user-facing failure message for a locale
pub fn failure_message(locale: &str) -> &'static str {
    match locale {
        "ko" => "AI가 응답을 생성하는 도중 오류가 발생했습니다. 다시 시도해 주세요.",
        _ => "Something went wrong while the AI was generating a response. Please try again.",
    }
}

/// Generation-related state
pub struct GenerationState {
    /// In-flight generation, at most one
    task: Option<JoinHandle<Result<PromptResult, GenerationError>>>,
    /// Origin of the in-flight submission
    origin: Option<SubmitOrigin>,
    pub phase: GenerationPhase,
    /// Currently displayed result
    pub result: Option<PromptResult>,
    /// User-facing error from the last attempt
    pub error: Option<String>,
    failure_message: &'static str,
}

impl GenerationState {
    pub fn new(locale: &str) -> Self {
        Self {
            task: None,
            origin: None,
            phase: GenerationPhase::Idle,
            result: None,
            error: None,
            failure_message: failure_message(locale),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.task.is_some()
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.failure_message = failure_message(locale);
    }

    /// Spawn a generation. Returns false if one is already in flight.
    pub fn start(
        &mut self,
        text: String,
        origin: SubmitOrigin,
        service: Arc<dyn PromptService>,
    ) -> bool {
        if self.task.is_some() {
            return false;
        }

        self.phase = GenerationPhase::Generating;
        self.error = None;
        self.origin = Some(origin);

        tracing::info!("Generating prompt for {:?}", text);
        self.task = Some(tokio::spawn(async move { service.generate(&text).await }));
        true
    }

    /// Show a stored result without generating
    pub fn show(&mut self, result: PromptResult) {
        self.result = Some(result);
        if self.task.is_none() {
            self.phase = GenerationPhase::Succeeded;
        }
    }

    /// Poll the async generation task for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<Completion> {
        let outcome = match poll_task(&mut self.task) {
            PollResult::Complete(Ok(outcome)) => outcome.map_err(|e| e.to_string()),
            PollResult::Complete(Err(e)) => Err(format!("Task panicked: {}", e)),
            PollResult::Pending => {
                ctx.request_repaint();
                return None;
            }
            PollResult::NoTask => return None,
        };

        let origin = self.origin.take().unwrap_or(SubmitOrigin::Input);
        match outcome {
            Ok(result) => {
                self.phase = GenerationPhase::Succeeded;
                self.result = Some(result.clone());
                Some(Completion::Succeeded { result, origin })
            }
            Err(cause) => {
                // The previously shown result stays on screen
                self.phase = GenerationPhase::Failed;
                self.error = Some(self.failure_message.to_string());
                Some(Completion::Failed { cause, origin })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_locales() {
        assert!(failure_message("ko").contains("오류"));
        assert!(failure_message("en").contains("try again"));
        assert_eq!(failure_message("de"), failure_message("en"));
    }

    #[test]
    fn test_show_marks_succeeded_when_idle() {
        let mut state = GenerationState::new("en");
        state.show(crate::history::tests::sample_result("loaded"));
        assert_eq!(state.phase, GenerationPhase::Succeeded);
        assert_eq!(state.result.as_ref().unwrap().title, "loaded");
    }
}
