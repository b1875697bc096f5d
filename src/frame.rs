use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::clock::TimeSource;
use crate::selector::SceneKind;
use crate::state::AppState;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: std::time::Instant,
    last_frame_time: std::time::Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = std::time::Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Cloneable stop flag shared between a running loop and whoever ends it
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Drives `state` one tick per frame until `token` is cancelled.
///
/// `on_frame` runs after each tick with the scene that was stepped; it stands
/// in for the draw call and is where callers cancel. Returns the number of
/// ticks run.
pub fn run_loop<T, F>(
    state: &mut AppState,
    clock: &T,
    frames: impl IntoIterator<Item = FrameInfo>,
    token: &CancellationToken,
    mut on_frame: F,
) -> u64
where
    T: TimeSource + ?Sized,
    F: FnMut(&AppState, SceneKind, FrameInfo),
{
    let mut ticks = 0;
    for frame in frames {
        if token.is_cancelled() {
            break;
        }
        let stepped = state.tick(clock.now_seconds());
        ticks += 1;
        on_frame(state, stepped, frame);
    }
    ticks
}
