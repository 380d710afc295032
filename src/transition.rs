use serde::{Deserialize, Serialize};

/// Millisecond timings for the open/close animation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationTiming {
    pub enter_delay_ms: u32,
    pub enter_ms: u32,
    pub exit_ms: u32,
    pub backdrop_ms: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            enter_ms: 300,
            exit_ms: 200,
            backdrop_ms: 200,
        }
    }
}

impl AnimationTiming {
    /// Time until both the modal and the backdrop have finished entering.
    pub fn enter_total_ms(&self) -> u32 {
        self.enter_delay_ms
            .saturating_add(self.enter_ms)
            .max(self.backdrop_ms)
    }

    pub fn exit_total_ms(&self) -> u32 {
        self.exit_ms.max(self.backdrop_ms)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    /// Whether the dialog has DOM to show in this phase.
    pub fn is_mounted(self) -> bool {
        self != Phase::Hidden
    }
}

/// What the caller has to do after driving the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Idle,
    /// Call `complete(epoch)` after `after_ms`.
    Wait { epoch: u64, after_ms: u32 },
}

/// Mount/unmount animation state, advanced by the `visible` prop and a timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
    epoch: u64,
}

impl Transition {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_visible(&mut self, visible: bool, timing: &AnimationTiming) -> Step {
        match (visible, self.phase) {
            (true, Phase::Hidden | Phase::Exiting) => {
                self.enter(Phase::Entering, timing.enter_total_ms())
            }
            (false, Phase::Entering | Phase::Visible) => {
                self.enter(Phase::Exiting, timing.exit_total_ms())
            }
            _ => Step::Idle,
        }
    }

    /// Whether a timer started for `epoch` still belongs to the running animation.
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.epoch && matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    /// Finish the running animation. Returns false for a stale timer.
    pub fn complete(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match self.phase {
            Phase::Entering => self.phase = Phase::Visible,
            Phase::Exiting => self.phase = Phase::Hidden,
            Phase::Hidden | Phase::Visible => return false,
        }
        true
    }

    fn enter(&mut self, phase: Phase, after_ms: u32) -> Step {
        self.phase = phase;
        self.epoch += 1;
        Step::Wait {
            epoch: self.epoch,
            after_ms,
        }
    }
}

/// Keyframes referenced by the per-phase styles below.
pub const KEYFRAMES_CSS: &str = "\
@keyframes image-lightbox-fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes image-lightbox-fade-out { from { opacity: 1; } to { opacity: 0; } }
@keyframes image-lightbox-modal-in {
    from { opacity: 0; transform: translateY(-100vh) scale(0.6); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes image-lightbox-modal-out {
    from { opacity: 1; transform: scale(1); }
    to { opacity: 0; transform: scale(0.7); }
}";

pub fn backdrop_animation(phase: Phase, timing: &AnimationTiming) -> String {
    match phase {
        Phase::Entering => format!(
            "animation: image-lightbox-fade-in {}ms ease both;",
            timing.backdrop_ms
        ),
        Phase::Exiting => format!(
            "animation: image-lightbox-fade-out {}ms ease both;",
            timing.backdrop_ms
        ),
        Phase::Visible => "opacity: 1;".to_string(),
        Phase::Hidden => "opacity: 0;".to_string(),
    }
}

pub fn modal_animation(phase: Phase, timing: &AnimationTiming) -> String {
    match phase {
        Phase::Entering => format!(
            "animation: image-lightbox-modal-in {}ms ease {}ms both;",
            timing.enter_ms, timing.enter_delay_ms
        ),
        Phase::Exiting => format!(
            "animation: image-lightbox-modal-out {}ms ease both;",
            timing.exit_ms
        ),
        Phase::Visible => "opacity: 1; transform: none;".to_string(),
        Phase::Hidden => "opacity: 0;".to_string(),
    }
}
