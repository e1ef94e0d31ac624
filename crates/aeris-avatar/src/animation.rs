//! Flight animation state machine.
//!
//! Three clips: a looping flight cycle while moving, a one-shot stop
//! transition when movement ends, and a looping idle hover. The machine
//! reacts to the per-frame moving flag and to clip-finished events from the
//! mixer, emitting [`Crossfade`] commands for the mixer to execute.

/// Crossfade duration used for every transition, seconds.
pub const FADE_SECONDS: f64 = 0.5;

/// The three avatar flight clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarClip {
    /// Looping flight cycle, active while any planar movement flag is held.
    Fly,
    /// One-shot deceleration played when movement stops; holds its last
    /// frame until the idle fade-in takes over.
    FlyStop,
    /// Looping hover, the resting state.
    FlyIdle,
}

impl AvatarClip {
    /// How the mixer should loop this clip.
    pub fn loop_mode(self) -> LoopMode {
        match self {
            AvatarClip::Fly | AvatarClip::FlyIdle => LoopMode::Repeat,
            AvatarClip::FlyStop => LoopMode::OnceClamped,
        }
    }
}

/// Loop behavior for a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Loop indefinitely.
    Repeat,
    /// Play once and clamp on the final frame.
    OnceClamped,
}

/// A command for the external mixer: fade `from` out and `to` in over
/// [`fade_seconds`](Self::fade_seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossfade {
    /// Clip to fade out.
    pub from: AvatarClip,
    /// Clip to reset, fade in, and play.
    pub to: AvatarClip,
    /// Fade duration in seconds.
    pub fade_seconds: f64,
}

/// Tracks the active clip and decides transitions.
#[derive(Clone, Copy, Debug)]
pub struct FlightAnimator {
    current: AvatarClip,
}

impl FlightAnimator {
    /// Starts in the idle hover, matching the initial clip the viewer
    /// plays before any input arrives.
    pub fn new() -> Self {
        Self {
            current: AvatarClip::FlyIdle,
        }
    }

    /// The clip that should currently be playing.
    pub fn current(&self) -> AvatarClip {
        self.current
    }

    /// Per-frame update with the planar-movement flag. Returns the
    /// crossfade to execute, if the state changed.
    ///
    /// Moving always wins: from idle or mid-stop, movement fades straight
    /// to the flight cycle. Releasing movement while flying fades to the
    /// one-shot stop clip; the stop-to-idle handoff waits for the mixer's
    /// finished event (see [`clip_finished`](Self::clip_finished)).
    pub fn update(&mut self, moving: bool) -> Option<Crossfade> {
        if moving {
            if self.current != AvatarClip::Fly {
                return Some(self.transition(AvatarClip::Fly));
            }
        } else if self.current == AvatarClip::Fly {
            return Some(self.transition(AvatarClip::FlyStop));
        }
        None
    }

    /// Notification from the mixer that a one-shot clip finished. Only the
    /// stop clip's completion matters: it hands off to the idle hover.
    pub fn clip_finished(&mut self, clip: AvatarClip) -> Option<Crossfade> {
        if clip == AvatarClip::FlyStop && self.current == AvatarClip::FlyStop {
            return Some(self.transition(AvatarClip::FlyIdle));
        }
        None
    }

    fn transition(&mut self, to: AvatarClip) -> Crossfade {
        let from = self.current;
        self.current = to;
        Crossfade {
            from,
            to,
            fade_seconds: FADE_SECONDS,
        }
    }
}

impl Default for FlightAnimator {
    fn default() -> Self {
        Self::new()
    }
}
