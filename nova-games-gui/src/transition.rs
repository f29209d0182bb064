//! Fade/slide-in when switching between the browsing and player views.

/// Seconds a view takes to fade in.
const DURATION: f64 = 0.25;

/// Tracks when the current view appeared.
pub struct ViewTransition {
    enabled: bool,
    playing: bool,
    started_at: Option<f64>,
}

impl ViewTransition {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            playing: false,
            started_at: None,
        }
    }

    /// Progress of the current view's entrance in `0.0..=1.0`, eased.
    ///
    /// A change of `playing` restarts the entrance at time `now`.
    pub fn progress(&mut self, playing: bool, now: f64) -> f32 {
        if playing != self.playing || self.started_at.is_none() {
            self.playing = playing;
            self.started_at = Some(now);
        }
        if !self.enabled {
            return 1.0;
        }
        let started_at = self.started_at.unwrap_or(now);
        let t = ((now - started_at) / DURATION).clamp(0.0, 1.0) as f32;
        ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_starts_at_zero() {
        let mut tr = ViewTransition::new(true);
        assert_eq!(tr.progress(false, 10.0), 0.0);
        assert_eq!(tr.progress(false, 10.0 + DURATION), 1.0);
    }

    #[test]
    fn mode_change_restarts() {
        let mut tr = ViewTransition::new(true);
        tr.progress(false, 0.0);
        assert_eq!(tr.progress(false, 5.0), 1.0);
        assert_eq!(tr.progress(true, 5.0), 0.0);
        let mid = tr.progress(true, 5.0 + DURATION / 2.0);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn disabled_is_always_complete() {
        let mut tr = ViewTransition::new(false);
        assert_eq!(tr.progress(false, 0.0), 1.0);
        assert_eq!(tr.progress(true, 0.0), 1.0);
    }
}
