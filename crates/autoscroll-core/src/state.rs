//! Play state shared between the orchestrator and the effects.
//!
//! The orchestrator owns the only writable handle. Effects receive a
//! [`PlayStateView`] and query it every time they need to know whether
//! auto-scroll is running, instead of keeping their own copy.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayEvent {
    /// User clicked the control.
    Toggle,
    /// The document became hidden.
    TabHidden,
    /// The scroll driver reached the bottom of the page.
    BottomReached,
    /// The page may be about to unload. Navigation can still be cancelled,
    /// so this pauses without tearing anything down.
    PageLeaving,
}

impl PlayState {
    /// Transition table. `None` means the event is a no-op in this state.
    pub fn next(self, event: PlayEvent) -> Option<PlayState> {
        match (self, event) {
            (PlayState::Stopped, PlayEvent::Toggle) => Some(PlayState::Playing),
            (PlayState::Playing, PlayEvent::Toggle)
            | (PlayState::Playing, PlayEvent::TabHidden)
            | (PlayState::Playing, PlayEvent::BottomReached)
            | (PlayState::Playing, PlayEvent::PageLeaving) => Some(PlayState::Stopped),
            (PlayState::Stopped, PlayEvent::TabHidden)
            | (PlayState::Stopped, PlayEvent::BottomReached)
            | (PlayState::Stopped, PlayEvent::PageLeaving) => None,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlayState::Playing
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayState::Stopped => "stopped",
            PlayState::Playing => "playing",
        })
    }
}

/// Writable play state, held by the orchestrator.
#[derive(Debug, Default)]
pub struct PlayStateCell(Rc<Cell<PlayState>>);

impl PlayStateCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> PlayState {
        self.0.get()
    }

    pub(crate) fn set(&self, state: PlayState) {
        self.0.set(state);
    }

    pub fn view(&self) -> PlayStateView {
        PlayStateView(self.0.clone())
    }
}

/// Read-only handle onto the orchestrator's play state.
#[derive(Clone, Debug)]
pub struct PlayStateView(Rc<Cell<PlayState>>);

impl PlayStateView {
    pub fn get(&self) -> PlayState {
        self.0.get()
    }

    pub fn is_playing(&self) -> bool {
        self.get().is_playing()
    }
}
