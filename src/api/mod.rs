mod client;
mod types;

pub use client::{DEFAULT_API_BASE, PodcastApi};
pub use types::{Episode, Season, ShowDetail, ShowSummary};

#[cfg(test)]
pub(crate) use client::tests as mock;
