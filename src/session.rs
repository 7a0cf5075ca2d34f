use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunningMode {
    #[default]
    Image,
    Video,
}

/// Detection loop state, owned by whoever drives the pose engine.
#[derive(Debug, Clone)]
pub struct DetectionSession {
    running_mode: RunningMode,
    webcam_running: bool,
    last_video_time: Option<f64>,
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new(RunningMode::Image)
    }
}

impl DetectionSession {
    pub fn new(running_mode: RunningMode) -> Self {
        Self {
            running_mode,
            webcam_running: false,
            last_video_time: None,
        }
    }

    pub fn running_mode(&self) -> RunningMode {
        self.running_mode
    }

    pub fn webcam_running(&self) -> bool {
        self.webcam_running
    }

    pub fn last_video_time(&self) -> Option<f64> {
        self.last_video_time
    }

    /// Flips webcam predictions on or off and returns the new state.
    pub fn toggle_webcam(&mut self) -> bool {
        self.webcam_running = !self.webcam_running;
        log::debug!("webcam running: {}", self.webcam_running);
        self.webcam_running
    }

    /// Returns true when the engine has to be reconfigured for `mode`.
    pub fn switch_mode(&mut self, mode: RunningMode) -> bool {
        if self.running_mode == mode {
            return false;
        }
        log::debug!("running mode {:?} -> {:?}", self.running_mode, mode);
        self.running_mode = mode;
        true
    }

    /// Records `video_time` and reports whether that frame still needs detection.
    pub fn should_process_frame(&mut self, video_time: f64) -> bool {
        if self.last_video_time == Some(video_time) {
            return false;
        }
        self.last_video_time = Some(video_time);
        true
    }
}
