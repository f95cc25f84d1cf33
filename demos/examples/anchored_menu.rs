// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One overlay's life on a scripted host: open, track, flip, dismiss.
//!
//! This example wires an [`OverlayBinding`] to a tiny in-memory
//! `HostPlatform` and walks through the interesting moments:
//! - a click gesture resolves to a toggle and the caller shows the panel,
//! - the initial frame places the panel above its reference,
//! - a burst of scroll events coalesces into a single recomputation,
//! - the reference ends up near the viewport top and the panel flips below,
//! - Escape closes the topmost overlay and teardown leaves nothing behind.
//!
//! Run:
//! - `cargo run -p bower_demos --example anchored_menu`

use std::collections::HashMap;

use bower_host::{
    Boundary, HostPlatform, ListenTarget, ListenerKind, OverlayBinding, OverlayConfig,
};
use bower_overlay::{Key, KeyPress, OverlayStack};
use bower_tracker::TrackEvent;
use bower_trigger::{Gesture, VisibilityIntent};
use kurbo::{Rect, Size};
use smallvec::SmallVec;

const REFERENCE: u32 = 1;
const FLOATING: u32 = 2;

/// Scripted platform: rects come from a table, listener/frame/tick ids are
/// counted so we can show that teardown releases everything.
struct ScriptedHost {
    rects: HashMap<u32, Rect>,
    viewport: Rect,
    next_id: u32,
    live_listeners: Vec<u32>,
    live_frames: Vec<u32>,
    live_ticks: Vec<u32>,
}

impl ScriptedHost {
    fn new() -> Self {
        Self {
            rects: HashMap::new(),
            viewport: Rect::new(0.0, 0.0, 1000.0, 1000.0),
            next_id: 0,
            live_listeners: Vec::new(),
            live_frames: Vec::new(),
            live_ticks: Vec::new(),
        }
    }

    fn id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn live_handles(&self) -> usize {
        self.live_listeners.len() + self.live_frames.len() + self.live_ticks.len()
    }
}

impl HostPlatform for ScriptedHost {
    type Element = u32;
    type ListenerId = u32;
    type FrameId = u32;
    type TickId = u32;

    fn element_rect(&self, element: u32) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    fn element_size(&self, element: u32) -> Option<Size> {
        self.rects.get(&element).map(|r| r.size())
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn client_rect(&self, container: u32) -> Option<Rect> {
        self.rects.get(&container).copied()
    }

    fn scroll_parents(&self, _element: u32) -> SmallVec<[u32; 4]> {
        SmallVec::new()
    }

    fn listen(&mut self, _target: ListenTarget<u32>, _kind: ListenerKind) -> u32 {
        let id = self.id();
        self.live_listeners.push(id);
        id
    }

    fn unlisten(&mut self, listener: u32) {
        self.live_listeners.retain(|l| *l != listener);
    }

    fn request_frame(&mut self) -> u32 {
        let id = self.id();
        self.live_frames.push(id);
        id
    }

    fn cancel_frame(&mut self, frame: u32) {
        self.live_frames.retain(|f| *f != frame);
    }

    fn defer_tick(&mut self) -> u32 {
        let id = self.id();
        self.live_ticks.push(id);
        id
    }

    fn cancel_tick(&mut self, tick: u32) {
        self.live_ticks.retain(|t| *t != tick);
    }
}

fn main() {
    let mut host = ScriptedHost::new();
    host.rects
        .insert(REFERENCE, Rect::new(100.0, 100.0, 150.0, 150.0));
    host.rects.insert(FLOATING, Rect::new(0.0, 0.0, 80.0, 30.0));

    let mut stack = OverlayStack::new();
    let mut binding: OverlayBinding<ScriptedHost> = OverlayBinding::new(
        REFERENCE,
        FLOATING,
        Boundary::Viewport,
        OverlayConfig::default(),
    );

    // A click on the reference: the trigger map says toggle, the caller
    // flips its visibility state to "shown" and enables the binding.
    let intent = binding.gesture(Gesture::Press);
    println!("click on reference -> {intent:?}");
    assert_eq!(intent, Some(VisibilityIntent::Toggle));
    binding.enable(&mut host, &mut stack);
    println!(
        "enabled: {} live listeners, {} pending frame(s), {} pending tick(s)",
        host.live_listeners.len(),
        host.live_frames.len(),
        host.live_ticks.len()
    );

    // The arming tick fires, then the initial placement frame.
    host.live_ticks.clear();
    binding.on_arm_tick(&mut host);
    host.live_frames.clear();
    let position = binding.on_frame(&host).expect("elements are attached");
    println!(
        "initial position: ({}, {}) as {:?}",
        position.x, position.y, position.placement
    );

    // A burst of scroll events within one frame coalesces.
    binding.on_track_event(&mut host, TrackEvent::Scroll);
    binding.on_track_event(&mut host, TrackEvent::Scroll);
    binding.on_track_event(&mut host, TrackEvent::Scroll);
    println!(
        "three scrolls -> {} scheduled frame(s)",
        host.live_frames.len()
    );

    // Meanwhile the page scrolled the reference near the viewport top; the
    // coalesced frame sees only the final geometry and flips the panel.
    host.rects
        .insert(REFERENCE, Rect::new(100.0, 10.0, 150.0, 60.0));
    host.live_frames.clear();
    let position = binding.on_frame(&host).expect("elements are attached");
    println!(
        "after scroll: ({}, {}) as {:?}",
        position.x, position.y, position.placement
    );

    // A press outside both elements asks the overlay to close.
    let dismissal = binding.on_press(&[77]);
    println!("press outside -> {dismissal:?}");
    binding.disable(&mut host, &mut stack);

    // Re-open and close with Escape instead.
    binding.enable(&mut host, &mut stack);
    let escape = KeyPress::new(Key::Escape);
    let dismissal = binding.on_key(&stack, &escape);
    println!("escape -> {dismissal:?}");
    binding.disable(&mut host, &mut stack);

    println!("after teardown: {} live handles", host.live_handles());
}
