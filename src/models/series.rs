//! Series data model.
//!
//! A series owns its filename template, the number of the episode to watch
//! next, and the watch history of every known episode. Episodes are not
//! guaranteed to be numbered contiguously (a collection can have episodes
//! 1, 2, 4, 5), so lookups go through episode numbers, not indices.

use crate::models::episode::Episode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Display name, unique within the database.
    pub name: String,
    /// Filename template with the episode-number placeholder.
    pub template: String,
    /// The episode to start watching next.
    pub current_ep: u32,
    /// Watch history, ordered by episode number.
    pub episodes: Vec<Episode>,
}

impl Series {
    /// Create a new series with an unwatched history covering
    /// `first_ep..=last_ep`.
    pub fn new(name: String, template: String, first_ep: u32, last_ep: u32) -> Self {
        let episodes = (first_ep..=last_ep).map(Episode::new).collect();
        Self {
            name,
            template,
            current_ep: first_ep,
            episodes,
        }
    }

    /// Create a series from an existing history.
    pub fn with_history(
        name: String,
        template: String,
        current_ep: u32,
        episodes: Vec<Episode>,
    ) -> Self {
        Self {
            name,
            template,
            current_ep,
            episodes,
        }
    }

    /// Look up an episode by number.
    pub fn episode(&self, number: u32) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.number == number)
    }

    /// Look up an episode by number, mutably.
    pub fn episode_mut(&mut self, number: u32) -> Option<&mut Episode> {
        self.episodes.iter_mut().find(|ep| ep.number == number)
    }

    /// The episode to watch next.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode(self.current_ep)
    }

    /// The positional successor of the current episode.
    ///
    /// Not simply `current_ep + 1`: episode numbers can have gaps. At the
    /// end of the history the current episode is returned.
    pub fn next_episode(&self) -> Option<&Episode> {
        let idx = self
            .episodes
            .iter()
            .position(|ep| ep.number == self.current_ep)?;

        if idx + 1 < self.episodes.len() {
            self.episodes.get(idx + 1)
        } else {
            self.episodes.get(idx)
        }
    }

    /// Mark the current episode watched and advance to the successor.
    /// Returns the number of the episode that was watched.
    pub fn watch_current(&mut self) -> Option<u32> {
        let watched = self.current_ep;
        self.episode_mut(watched)?.watch();
        if let Some(next) = self.next_episode().map(|ep| ep.number) {
            self.current_ep = next;
        }
        Some(watched)
    }

    /// Total number of episodes in this series.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the series has any episodes at all.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// The final episode number.
    pub fn final_ep(&self) -> Option<u32> {
        self.episodes.last().map(|ep| ep.number)
    }

    /// When the first episode was first watched.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.episodes.first().and_then(|ep| ep.first_watched)
    }

    /// When the last episode was first watched.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.episodes.last().and_then(|ep| ep.first_watched)
    }

    /// Whether the last episode has been watched.
    pub fn finished(&self) -> bool {
        self.episodes.last().map(|ep| ep.watched()).unwrap_or(false)
    }
}
