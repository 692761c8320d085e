use std::time::{Duration, Instant};

/// Per-session statistics shown next to the canvas
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Frames drawn in the current one-second window
    window_frames: u32,
    window_start: Instant,
    /// Frames drawn in the last complete window
    pub measured_fps: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            window_frames: 0,
            window_start: now,
            measured_fps: 0,
        }
    }

    /// Record one drawn frame
    pub fn on_frame(&mut self) {
        let now = Instant::now();
        self.elapsed_time = now.duration_since(self.start_time);
        self.window_frames += 1;

        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.measured_fps = self.window_frames;
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Returns true when `final_score` is a new high score
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
            return true;
        }
        false
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        assert!(metrics.on_game_over(10));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        assert!(!metrics.on_game_over(5));
        assert_eq!(metrics.high_score, 10);

        assert!(!metrics.on_game_over(10));
        assert!(metrics.on_game_over(15));
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 4);
    }

    #[test]
    fn test_frames_advance_clock() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.on_frame();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.on_frame();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_measured_fps_waits_for_full_window() {
        let mut metrics = GameMetrics::new();
        for _ in 0..10 {
            metrics.on_frame();
        }
        assert_eq!(metrics.measured_fps, 0);

        metrics.window_start -= Duration::from_secs(1);
        metrics.on_frame();
        assert_eq!(metrics.measured_fps, 11);
    }
}
