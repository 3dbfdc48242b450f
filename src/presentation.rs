//! Presentation collaborators consumed by the match director
//!
//! Rendering itself lives outside this crate; the director only needs the
//! narrow control surface below. The concrete types here back the
//! headless runner and the tests.

use crate::arena::table::EntityRef;

/// Camera framing control
pub trait CameraRig {
    /// Snap zoom and position to frame the current roster
    fn set_start_framing(&mut self);

    /// Register the entities the camera should follow; called once after
    /// spawn
    fn set_targets(&mut self, targets: &[EntityRef]);
}

/// Overlay text channel for round announcements and summaries
pub trait StatusDisplay {
    /// Replace the displayed text; an empty message clears it
    fn set_text(&mut self, message: &str);
}

/// Camera stub that records calls for inspection
#[derive(Debug, Default)]
pub struct StaticCamera {
    pub targets: Vec<EntityRef>,
    pub framing_snaps: u32,
}

impl CameraRig for StaticCamera {
    fn set_start_framing(&mut self) {
        self.framing_snaps += 1;
    }

    fn set_targets(&mut self, targets: &[EntityRef]) {
        self.targets = targets.to_vec();
    }
}

/// Status display that forwards messages to the log and keeps the
/// current text readable
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    pub current: String,
}

impl StatusDisplay for ConsoleDisplay {
    fn set_text(&mut self, message: &str) {
        if !message.is_empty() {
            tracing::info!("{}", message.replace('\n', " | "));
        }
        self.current = message.to_string();
    }
}
