use std::sync::Arc;

/// Events emitted while loading shows, for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The show collection is being fetched
    FetchingShows { url: String },

    /// The show collection has been loaded
    ShowsLoaded { count: usize },

    /// Loading the show collection failed
    ShowsFailed { error: String },

    /// A single show's detail is being fetched
    FetchingShow {
        /// Identifies the request; later requests have higher generations
        generation: u64,
        show_id: String,
        url: String,
    },

    /// A show's detail has been loaded and applied
    ShowLoaded {
        generation: u64,
        show_title: String,
        season_count: usize,
        episode_count: usize,
    },

    /// Loading a show's detail failed
    ShowFailed {
        generation: u64,
        show_id: String,
        error: String,
    },

    /// A detail response arrived after a newer request was started and was dropped
    StaleResponseIgnored {
        generation: u64,
        latest_generation: u64,
        show_id: String,
    },
}

/// Trait for reporting progress events while loading data.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
