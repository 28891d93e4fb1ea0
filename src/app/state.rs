use std::time::{Duration, Instant};

use crate::autocomplete::SuggestionList;
use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::detail::DetailRenderer;
use crate::input::{InputBinding, InputState};
use crate::layout::LayoutRegions;
use crate::source::worker::{FetchRequest, FetchResponse, FetchWorker};

/// Upper bound on how long the event loop blocks waiting for input
pub const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionList,
    pub details: DetailRenderer,
    pub regions: LayoutRegions,
    debouncer: Debouncer<String>,
    worker: Option<FetchWorker>,
    discard_stale_responses: bool,
    /// Id of the most recently dispatched suggestion request
    last_request_id: u64,
    /// Name of the last detail lookup that came back
    last_lookup: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the app; `worker` is `None` when running without a network
    pub fn new(config: &Config, worker: Option<FetchWorker>) -> Self {
        Self {
            input: InputState::new(),
            suggestions: SuggestionList::new(),
            details: DetailRenderer::new(),
            regions: LayoutRegions::new(),
            debouncer: Debouncer::from_millis(config.search.debounce_ms),
            worker,
            discard_stale_responses: config.search.discard_stale_responses,
            last_request_id: 0,
            last_lookup: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Current content of the input field
    pub fn query(&self) -> &str {
        self.input.value()
    }

    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    pub fn last_lookup(&self) -> Option<&str> {
        self.last_lookup.as_deref()
    }

    /// The input's content changed: (re)arm the suggestion debounce
    pub fn on_input_changed(&mut self) {
        let value = self.query().to_string();
        self.debouncer.schedule(value);
    }

    /// How long the event loop may wait for terminal input
    pub fn poll_timeout(&self) -> Duration {
        self.debouncer
            .time_until_ready()
            .map_or(TICK, |remaining| remaining.min(TICK))
    }

    /// Fire a due debounce and apply completed fetches
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if let Some(value) = self.debouncer.take_ready_at(now) {
            self.dispatch_suggestions(value);
        }
        self.drain_responses();
    }

    fn dispatch_suggestions(&mut self, query: String) {
        // Blank means no fetch, but the query itself is matched as typed
        if query.trim().is_empty() {
            self.suggestions.close();
            return;
        }

        self.last_request_id += 1;
        let request = FetchRequest::Suggestions {
            query,
            request_id: self.last_request_id,
        };
        self.send(request);
    }

    /// Commit flow: look up details for the current input value
    ///
    /// Returns false when the trimmed value is empty.
    pub fn commit(&mut self) -> bool {
        let name = self.query().trim().to_string();
        if name.is_empty() {
            return false;
        }
        log::debug!("Looking up details for {:?}", name);
        self.send(FetchRequest::Detail { name });
        true
    }

    /// Search trigger control activated
    pub fn press_search_button(&mut self) -> bool {
        self.suggestions.close();
        self.commit()
    }

    fn send(&mut self, request: FetchRequest) {
        match &self.worker {
            Some(worker) => {
                worker.send(request);
            }
            None => log::debug!("No fetch worker, dropping {:?}", request),
        }
    }

    fn drain_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(worker) = &self.worker {
            while let Some(response) = worker.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Suggestions {
                query,
                request_id,
                suggestions,
            } => {
                if self.discard_stale_responses && request_id < self.last_request_id {
                    log::debug!(
                        "Discarding stale suggestions for {:?} (request {}, latest {})",
                        query,
                        request_id,
                        self.last_request_id
                    );
                    return;
                }
                self.suggestions.render(suggestions, &query);
            }
            FetchResponse::Detail { name, outcome } => {
                self.details.present(&outcome, &name);
                self.last_lookup = Some(name);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
