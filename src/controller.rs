//! Application controller.
//!
//! Owns every piece of mutable app state: the input box, the generation state
//! machine (`Idle → Generating → Succeeded | Failed`), the displayed result and
//! error, the history list, and the selected genre tab. The UI only reads from
//! it and calls its transition methods.
//!
//! Only one generation may be in flight; submissions while generating, and
//! submissions whose trimmed text is empty, are ignored.

use std::sync::Arc;

use eframe::egui;

use crate::catalog::{self, GenreEntry};
use crate::gemini::PromptService;
use crate::history::{History, PromptResult};
use crate::state::{
    Completion, GenerationPhase, GenerationState, HistoryState, StateEvent, SubmitOrigin,
};

pub struct Controller {
    /// Text in the input box
    pub input: String,
    generation: GenerationState,
    history: HistoryState,
    selected_genre: &'static GenreEntry,
    service: Arc<dyn PromptService>,
}

impl Controller {
    pub fn new(service: Arc<dyn PromptService>, history: HistoryState, locale: &str) -> Self {
        Self {
            input: String::new(),
            generation: GenerationState::new(locale),
            history,
            selected_genre: catalog::default_genre(),
            service,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.generation.phase
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_generating()
    }

    pub fn result(&self) -> Option<&PromptResult> {
        self.generation.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.generation.error.as_deref()
    }

    pub fn history(&self) -> &History {
        self.history.history()
    }

    pub fn selected_genre(&self) -> &'static GenreEntry {
        self.selected_genre
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.generation.set_locale(locale);
    }

    /// Submit the input box contents
    pub fn submit(&mut self) -> Option<StateEvent> {
        let text = self.input.clone();
        self.submit_text(&text, SubmitOrigin::Input)
    }

    /// Submit a catalog example, leaving the input box untouched
    pub fn submit_example(&mut self, text: &str) -> Option<StateEvent> {
        self.submit_text(text, SubmitOrigin::Example)
    }

    fn submit_text(&mut self, text: &str, origin: SubmitOrigin) -> Option<StateEvent> {
        let text = text.trim();
        if text.is_empty() || self.generation.is_generating() {
            return None;
        }

        if !self
            .generation
            .start(text.to_string(), origin, Arc::clone(&self.service))
        {
            return None;
        }
        Some(StateEvent::StatusMessage("Generating...".to_string()))
    }

    /// Poll the in-flight generation and apply its outcome
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let Some(completion) = self.generation.poll(ctx) else {
            return Vec::new();
        };

        match completion {
            Completion::Succeeded { result, origin } => {
                let title = result.title.clone();
                let mut events = self.history.record(result);
                if origin == SubmitOrigin::Input {
                    self.input.clear();
                }
                events.push(StateEvent::StatusMessage(format!("Generated \"{}\"", title)));
                events
            }
            Completion::Failed { cause, .. } => vec![
                StateEvent::LogError(format!("Generation failed: {}", cause)),
                StateEvent::StatusMessage("Generation failed".to_string()),
            ],
        }
    }

    /// Display a history item without regenerating. Returns false for an unknown id.
    ///
    /// While a generation is in flight the item is shown but the phase stays
    /// `Generating`, so new submissions are still rejected; the in-flight
    /// result replaces the item when it lands.
    pub fn load_history_item(&mut self, id: &str) -> bool {
        let Some(item) = self.history.find(id) else {
            return false;
        };
        let result = item.result.clone();
        self.generation.show(result);
        true
    }

    /// Empty the history and delete its snapshot. The displayed result stays.
    pub fn clear_history(&mut self) -> Vec<StateEvent> {
        self.history.clear()
    }

    /// Switch the genre tab. Unknown ids are ignored.
    pub fn select_genre(&mut self, id: &str) -> bool {
        match catalog::by_id(id) {
            Some(genre) => {
                self.selected_genre = genre;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GenerationError;
    use crate::history::tests::sample_result;
    use crate::history::{HISTORY_LIMIT, HistoryStore};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Service returning a canned answer, optionally held until released
    struct MockService {
        reply: Mutex<Result<PromptResult, String>>,
        requests: Mutex<Vec<String>>,
        gate: Option<Arc<Notify>>,
    }

    impl MockService {
        fn ok(result: PromptResult) -> Self {
            Self {
                reply: Mutex::new(Ok(result)),
                requests: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn failing() -> Self {
            Self {
                reply: Mutex::new(Err("connection reset".to_string())),
                requests: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn gated(result: PromptResult, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::ok(result)
            }
        }

        fn set_reply(&self, reply: Result<PromptResult, String>) {
            *self.reply.lock().unwrap() = reply;
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PromptService for MockService {
        async fn generate(&self, user_text: &str) -> Result<PromptResult, GenerationError> {
            self.requests.lock().unwrap().push(user_text.to_string());
            if let Some(ref gate) = self.gate {
                gate.notified().await;
            }
            let reply = self.reply.lock().unwrap().clone();
            reply.map_err(GenerationError::MalformedPayload)
        }
    }

    /// Service whose generation task panics
    struct PanickingService;

    #[async_trait]
    impl PromptService for PanickingService {
        async fn generate(&self, _user_text: &str) -> Result<PromptResult, GenerationError> {
            panic!("backend blew up");
        }
    }

    fn fading_petals() -> PromptResult {
        PromptResult {
            style: "90s Korean Ballad, emotional piano, orchestral, nostalgic".to_string(),
            lyrics: "[Verse]...[Chorus]...".to_string(),
            title: "Fading Petals".to_string(),
            tags: vec!["ballad".to_string(), "piano".to_string(), "90s".to_string()],
            vibe: "melancholic and nostalgic".to_string(),
        }
    }

    fn controller_with(service: Arc<MockService>, store: Option<HistoryStore>) -> Controller {
        Controller::new(service, HistoryState::load(store), "en")
    }

    /// Drive the frame loop until the in-flight generation settles
    async fn settle(controller: &mut Controller) -> Vec<StateEvent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        while controller.is_generating() {
            tokio::task::yield_now().await;
            events.extend(controller.poll(&ctx));
        }
        events
    }

    #[tokio::test]
    async fn test_successful_generation_records_history() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);
        assert_eq!(controller.phase(), GenerationPhase::Idle);

        controller.input = "90s Korean Ballad".to_string();
        assert!(controller.submit().is_some());
        assert_eq!(controller.phase(), GenerationPhase::Generating);
        settle(&mut controller).await;

        assert_eq!(controller.phase(), GenerationPhase::Succeeded);
        assert_eq!(controller.result(), Some(&fading_petals()));
        assert_eq!(controller.history().len(), 1);
        let first = &controller.history().items()[0];
        assert_eq!(first.result, fading_petals());
        assert!(!first.id.is_empty());
        assert!(controller.input.is_empty());
        assert_eq!(service.requests(), vec!["90s Korean Ballad"]);
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);

        controller.input = "   \n".to_string();
        assert!(controller.submit().is_none());
        assert_eq!(controller.phase(), GenerationPhase::Idle);
        assert!(!controller.is_generating());
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_generating_is_ignored() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(MockService::gated(fading_petals(), gate.clone()));
        let mut controller = controller_with(service.clone(), None);

        controller.input = "first idea".to_string();
        assert!(controller.submit().is_some());

        controller.input = "second idea".to_string();
        assert!(controller.submit().is_none());
        assert!(controller.submit_example("Trance, builds, epic melody").is_none());
        assert!(controller.history().is_empty());
        assert!(controller.result().is_none());
        assert!(controller.error().is_none());

        gate.notify_one();
        settle(&mut controller).await;

        assert_eq!(controller.history().len(), 1);
        assert_eq!(service.requests(), vec!["first idea"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_result_and_history() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);

        controller.input = "ballad".to_string();
        controller.submit();
        settle(&mut controller).await;

        service.set_reply(Err("boom".to_string()));
        controller.input = "another".to_string();
        controller.submit();
        let events = settle(&mut controller).await;

        assert_eq!(controller.phase(), GenerationPhase::Failed);
        assert_eq!(controller.result(), Some(&fading_petals()));
        assert_eq!(controller.history().len(), 1);
        assert!(!controller.error().unwrap().is_empty());
        // The raw cause is logged, not shown
        assert!(!controller.error().unwrap().contains("boom"));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, StateEvent::LogError(msg) if msg.contains("boom")))
        );
        // Failed submissions leave the typed text for another try
        assert_eq!(controller.input, "another");
    }

    #[tokio::test]
    async fn test_new_submission_clears_error() {
        let service = Arc::new(MockService::failing());
        let mut controller = controller_with(service.clone(), None);

        controller.input = "idea".to_string();
        controller.submit();
        settle(&mut controller).await;
        assert!(controller.error().is_some());

        service.set_reply(Ok(fading_petals()));
        controller.submit();
        assert!(controller.error().is_none());
        settle(&mut controller).await;
        assert!(controller.error().is_none());
        assert_eq!(controller.phase(), GenerationPhase::Succeeded);
    }

    #[tokio::test]
    async fn test_korean_failure_message() {
        let service = Arc::new(MockService::failing());
        let mut controller = Controller::new(service, HistoryState::load(None), "ko");

        controller.input = "idea".to_string();
        controller.submit();
        settle(&mut controller).await;
        assert_eq!(controller.error(), Some(crate::state::failure_message("ko")));
    }

    #[tokio::test]
    async fn test_history_is_capped_at_limit() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);

        for i in 0..=HISTORY_LIMIT {
            service.set_reply(Ok(sample_result(&format!("song {}", i))));
            controller.input = format!("idea {}", i);
            controller.submit();
            settle(&mut controller).await;
        }

        let items = controller.history().items();
        assert_eq!(items.len(), HISTORY_LIMIT);
        assert_eq!(items[0].result.title, format!("song {}", HISTORY_LIMIT));
        assert_eq!(items[HISTORY_LIMIT - 1].result.title, "song 1");
    }

    #[tokio::test]
    async fn test_example_submission_leaves_input_untouched() {
        let example = "90s Boom Bap, lo-fi grit, soulful samples, male rap";
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);

        assert!(controller.select_genre("hiphop"));
        assert_eq!(controller.selected_genre().name, "Hip-Hop");
        assert!(controller.selected_genre().prompts.contains(&example));

        controller.input = "half-typed idea".to_string();
        assert!(controller.submit_example(example).is_some());
        settle(&mut controller).await;

        assert_eq!(service.requests(), vec![example]);
        assert_eq!(controller.input, "half-typed idea");
        assert_eq!(controller.history().len(), 1);
    }

    #[tokio::test]
    async fn test_load_history_item_does_not_reorder() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), None);

        for title in ["older", "newer"] {
            service.set_reply(Ok(sample_result(title)));
            controller.input = title.to_string();
            controller.submit();
            settle(&mut controller).await;
        }

        let before: Vec<_> = controller.history().items().to_vec();
        let older_id = before[1].id.clone();

        assert!(controller.load_history_item(&older_id));
        assert_eq!(controller.result(), Some(&before[1].result));
        assert_eq!(controller.phase(), GenerationPhase::Succeeded);
        assert_eq!(controller.history().items(), before.as_slice());
        assert_eq!(service.requests().len(), 2);

        assert!(!controller.load_history_item("missing"));
    }

    #[tokio::test]
    async fn test_clear_history_persists_and_keeps_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join("history.json"));
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service.clone(), Some(store.clone()));

        controller.input = "ballad".to_string();
        controller.submit();
        settle(&mut controller).await;
        assert!(store.path().exists());
        assert_eq!(store.load().items(), controller.history().items());

        controller.clear_history();
        assert!(controller.history().is_empty());
        assert_eq!(controller.result(), Some(&fading_petals()));
        assert!(!store.path().exists());

        // Simulated restart
        let reloaded = controller_with(service, Some(store));
        assert!(reloaded.history().is_empty());
    }

    #[tokio::test]
    async fn test_history_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join("history.json"));
        let service = Arc::new(MockService::ok(fading_petals()));

        let mut controller = controller_with(service.clone(), Some(store.clone()));
        controller.input = "ballad".to_string();
        controller.submit();
        settle(&mut controller).await;

        let reloaded = controller_with(service, Some(store));
        assert_eq!(reloaded.history(), controller.history());
        assert!(reloaded.result().is_none());
    }

    #[test]
    fn test_unknown_genre_is_ignored() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service, None);
        assert!(!controller.select_genre("polka"));
        assert_eq!(controller.selected_genre().id, catalog::default_genre().id);
    }

    #[tokio::test]
    async fn test_panicked_generation_counts_as_failure() {
        let service = Arc::new(MockService::ok(fading_petals()));
        let mut controller = controller_with(service, None);
        controller.input = "ballad".to_string();
        controller.submit();
        settle(&mut controller).await;
        let before = controller.history().clone();

        controller.service = Arc::new(PanickingService);
        controller.input = "crash".to_string();
        assert!(controller.submit().is_some());
        let events = settle(&mut controller).await;

        assert_eq!(controller.phase(), GenerationPhase::Failed);
        assert_eq!(controller.error(), Some(crate::state::failure_message("en")));
        assert_eq!(controller.history(), &before);
        assert_eq!(controller.result(), Some(&fading_petals()));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, StateEvent::LogError(msg) if msg.contains("panicked")))
        );
    }

    #[tokio::test]
    async fn test_load_history_while_generating_keeps_guard() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(MockService::gated(fading_petals(), gate.clone()));
        let mut controller = controller_with(service.clone(), None);

        controller.history.record(sample_result("stored"));
        let stored_id = controller.history().items()[0].id.clone();

        controller.input = "ballad".to_string();
        controller.submit();
        assert!(controller.load_history_item(&stored_id));
        assert_eq!(controller.result().unwrap().title, "stored");
        assert_eq!(controller.phase(), GenerationPhase::Generating);
        assert!(controller.submit_example("another idea").is_none());

        gate.notify_one();
        settle(&mut controller).await;
        assert_eq!(controller.phase(), GenerationPhase::Succeeded);
        assert_eq!(controller.result(), Some(&fading_petals()));
        assert_eq!(service.requests(), vec!["ballad"]);
    }
}
