//! In-memory tracker for detached artwork generation jobs.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

/// State of one artwork job, keyed by its request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageJobState {
    InProgress,
    Completed { image_url: String },
    Failed { error: String },
}

/// Tracks in-flight artwork jobs for the status endpoint.
///
/// Terminal states are consumed by the first poll that observes them;
/// later polls fall through to the card row, which records the same
/// outcome durably. The map only holds jobs started since the process
/// came up, but a terminal entry nobody polls stays until process exit.
#[derive(Debug, Default)]
pub struct ImageJobTracker {
    jobs: Mutex<HashMap<Uuid, ImageJobState>>,
}

impl ImageJobTracker {
    /// Register a newly dispatched job.
    pub fn start(&self, request_id: Uuid) {
        self.lock().insert(request_id, ImageJobState::InProgress);
    }

    /// Record the terminal state for a job.
    pub fn finish(&self, request_id: Uuid, state: ImageJobState) {
        self.lock().insert(request_id, state);
    }

    /// Poll a job's state. A terminal state is removed from the tracker as
    /// it is returned; `None` means the tracker has never seen the id or
    /// has already handed out its terminal state.
    pub fn poll(&self, request_id: Uuid) -> Option<ImageJobState> {
        let mut jobs = self.lock();
        match jobs.get(&request_id) {
            Some(ImageJobState::InProgress) => Some(ImageJobState::InProgress),
            Some(_) => jobs.remove(&request_id),
            None => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, ImageJobState>> {
        // A poisoned tracker mutex means a panic mid-insert; the map is
        // still structurally sound, so keep serving.
        self.jobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_can_be_polled_repeatedly() {
        let tracker = ImageJobTracker::default();
        let id = Uuid::new_v4();
        tracker.start(id);

        assert_eq!(tracker.poll(id), Some(ImageJobState::InProgress));
        assert_eq!(tracker.poll(id), Some(ImageJobState::InProgress));
    }

    #[test]
    fn terminal_state_is_consumed_by_first_poll() {
        let tracker = ImageJobTracker::default();
        let id = Uuid::new_v4();
        tracker.start(id);
        tracker.finish(
            id,
            ImageJobState::Completed {
                image_url: "GEN_1.png".to_string(),
            },
        );

        assert_eq!(
            tracker.poll(id),
            Some(ImageJobState::Completed {
                image_url: "GEN_1.png".to_string()
            })
        );
        assert_eq!(tracker.poll(id), None);
    }

    #[test]
    fn unknown_id_polls_as_none() {
        let tracker = ImageJobTracker::default();
        assert_eq!(tracker.poll(Uuid::new_v4()), None);
    }
}
