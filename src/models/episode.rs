//! Episode data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single episode of a series and its watch history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Episode number.
    pub number: u32,
    /// When this episode was first watched.
    pub first_watched: Option<DateTime<Utc>>,
    /// When this episode was last watched.
    pub last_watched: Option<DateTime<Utc>>,
}

impl Episode {
    /// Create an unwatched episode.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            first_watched: None,
            last_watched: None,
        }
    }

    /// Create an episode with existing watch history.
    pub fn with_history(
        number: u32,
        first_watched: Option<DateTime<Utc>>,
        last_watched: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            number,
            first_watched,
            last_watched,
        }
    }

    /// Mark this episode as watched right now.
    pub fn watch(&mut self) {
        let now = Utc::now();
        self.last_watched = Some(now);
        if self.first_watched.is_none() {
            self.first_watched = Some(now);
        }
    }

    /// Whether this episode has been watched.
    pub fn watched(&self) -> bool {
        self.last_watched.is_some()
    }
}
