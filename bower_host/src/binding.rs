// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-overlay binding: composition and scoped listener acquisition.

use bower_anchor::{Placement, PlacementRequest, PositionResult};
use bower_overlay::{Dismissal, KeyPress, OutsidePress, OverlayStack, trap};
use bower_tracker::{AnchorSource, FrameRequest, TrackEvent, Tracker};
use bower_trigger::{Gesture, Trigger, TriggerMap, VisibilityIntent};
use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::host::{Boundary, HostPlatform, ListenTarget, ListenerKind, boundary_rect};

/// Recognized configuration for one overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Requested placement.
    pub placement: Placement,
    /// Main-axis gap between reference and panel, in pixels.
    pub offset: f64,
    /// Gesture mode that opens/closes the overlay.
    pub trigger: Trigger,
    /// Whether trigger handlers short-circuit to no-ops.
    pub disabled: bool,
    /// Whether dismissal on outside press is installed while visible.
    pub dismiss_on_outside_press: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            offset: 8.0,
            trigger: Trigger::Click,
            disabled: false,
            dismiss_on_outside_press: true,
        }
    }
}

/// Adapter from the host platform to the tracker's measurement trait.
struct HostAnchors<'a, P: HostPlatform> {
    platform: &'a P,
    reference: P::Element,
    floating: P::Element,
    boundary: &'a Boundary<P::Element>,
}

impl<P: HostPlatform> AnchorSource for HostAnchors<'_, P> {
    fn reference_rect(&self) -> Option<Rect> {
        self.platform.element_rect(self.reference)
    }

    fn floating_size(&self) -> Option<Size> {
        self.platform.element_size(self.floating)
    }

    fn boundary_rect(&self) -> Rect {
        boundary_rect(self.platform, self.boundary)
    }
}

/// The live association between one reference element, one floating
/// element, and an enabled flag.
///
/// Created when the host mounts an overlay-bearing component;
/// [`OverlayBinding::enable`] when the panel becomes visible,
/// [`OverlayBinding::disable`] when it hides or its owner unmounts,
/// whichever comes first. At most one tracking loop runs per binding, and
/// every listener, frame, and tick handle acquired on enable is owned here
/// and released synchronously on disable — a binding can never touch
/// another binding's listeners.
pub struct OverlayBinding<P: HostPlatform> {
    reference: P::Element,
    floating: P::Element,
    boundary: Boundary<P::Element>,
    dismiss_on_outside_press: bool,
    tracker: Tracker,
    outside: OutsidePress<P::Element>,
    triggers: TriggerMap,
    enabled: bool,
    listeners: SmallVec<[P::ListenerId; 8]>,
    press_listener: Option<P::ListenerId>,
    frame: Option<P::FrameId>,
    arm_tick: Option<P::TickId>,
}

impl<P: HostPlatform> core::fmt::Debug for OverlayBinding<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverlayBinding")
            .field("enabled", &self.enabled)
            .field("boundary_is_viewport", &matches!(self.boundary, Boundary::Viewport))
            .field("tracker", &self.tracker)
            .field("outside", &self.outside.state())
            .finish_non_exhaustive()
    }
}

impl<P: HostPlatform> OverlayBinding<P> {
    /// Creates a disabled binding for the given elements.
    pub fn new(
        reference: P::Element,
        floating: P::Element,
        boundary: Boundary<P::Element>,
        config: OverlayConfig,
    ) -> Self {
        let mut triggers = TriggerMap::new(config.trigger);
        triggers.set_disabled(config.disabled);
        Self {
            reference,
            floating,
            boundary,
            dismiss_on_outside_press: config.dismiss_on_outside_press,
            tracker: Tracker::new(PlacementRequest {
                placement: config.placement,
                offset: config.offset,
            }),
            outside: OutsidePress::new(),
            triggers,
            enabled: false,
            listeners: SmallVec::new(),
            press_listener: None,
            frame: None,
            arm_tick: None,
        }
    }

    /// Whether the binding currently holds listeners and tracks position.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The floating element this binding positions.
    #[must_use]
    pub const fn floating(&self) -> P::Element {
        self.floating
    }

    /// The reference element this binding anchors to.
    #[must_use]
    pub const fn reference(&self) -> P::Element {
        self.reference
    }

    /// Acquires everything the visible panel needs, in one synchronous
    /// step: scroll listeners on the window and every scrollable ancestor
    /// of the reference, a resize listener, a mutation observer on the
    /// reference, a document key listener, the deferred outside-press
    /// listener, the stack registration, and the initial placement frame.
    ///
    /// Idempotent: enabling an enabled binding does nothing.
    pub fn enable(&mut self, platform: &mut P, stack: &mut OverlayStack<P::Element>) {
        if self.enabled {
            return;
        }
        self.enabled = true;

        self.listeners
            .push(platform.listen(ListenTarget::Window, ListenerKind::Scroll));
        for parent in platform.scroll_parents(self.reference) {
            self.listeners
                .push(platform.listen(ListenTarget::Element(parent), ListenerKind::Scroll));
        }
        self.listeners
            .push(platform.listen(ListenTarget::Window, ListenerKind::Resize));
        self.listeners.push(platform.listen(
            ListenTarget::Element(self.reference),
            ListenerKind::Mutation,
        ));
        self.listeners
            .push(platform.listen(ListenTarget::Document, ListenerKind::Key));

        // The document press listener is installed one tick from now so the
        // press that opened this overlay cannot dismiss it while bubbling.
        if self.dismiss_on_outside_press
            && self.outside.enable([self.reference, self.floating])
        {
            self.arm_tick = Some(platform.defer_tick());
        }

        stack.push(self.floating);

        if self.tracker.start() == FrameRequest::Schedule {
            self.frame = Some(platform.request_frame());
        }
    }

    /// Releases everything [`OverlayBinding::enable`] acquired, before
    /// returning: all listeners removed, pending frame and arming tick
    /// cancelled, stack entry dropped. No update or dismissal can be
    /// produced afterwards.
    ///
    /// Idempotent: disabling a disabled binding does nothing.
    pub fn disable(&mut self, platform: &mut P, stack: &mut OverlayStack<P::Element>) {
        if !self.enabled {
            return;
        }
        self.enabled = false;

        self.tracker.stop();
        if let Some(frame) = self.frame.take() {
            platform.cancel_frame(frame);
        }
        if let Some(tick) = self.arm_tick.take() {
            platform.cancel_tick(tick);
        }
        self.outside.disable();
        if let Some(listener) = self.press_listener.take() {
            platform.unlisten(listener);
        }
        for listener in self.listeners.drain(..) {
            platform.unlisten(listener);
        }
        stack.remove(self.floating);
    }

    /// Forwards a scroll/resize/mutation event; schedules the coalesced
    /// frame when one is not already pending.
    pub fn on_track_event(&mut self, platform: &mut P, event: TrackEvent) {
        if self.tracker.notify(event) == FrameRequest::Schedule {
            self.frame = Some(platform.request_frame());
        }
    }

    /// Runs the coalesced recomputation; call from the frame callback.
    ///
    /// `None` when the binding was disabled before the frame fired or an
    /// element vanished mid-update; the update is dropped silently either
    /// way.
    pub fn on_frame(&mut self, platform: &P) -> Option<PositionResult> {
        self.frame = None;
        let anchors = HostAnchors {
            platform,
            reference: self.reference,
            floating: self.floating,
            boundary: &self.boundary,
        };
        self.tracker.on_frame(&anchors)
    }

    /// Completes the deferred outside-press registration; call from the
    /// tick scheduled by [`OverlayBinding::enable`].
    pub fn on_arm_tick(&mut self, platform: &mut P) {
        self.arm_tick = None;
        if !self.enabled {
            return;
        }
        self.outside.arm();
        if self.press_listener.is_none() {
            self.press_listener =
                Some(platform.listen(ListenTarget::Document, ListenerKind::Press));
        }
    }

    /// Routes a document-level press, given the root→target path of the
    /// pressed node.
    #[must_use]
    pub fn on_press(&self, path: &[P::Element]) -> Option<Dismissal> {
        self.outside.on_press(path)
    }

    /// Routes a document-level key press through Escape arbitration.
    ///
    /// Returns a dismissal only when this binding's overlay is the topmost
    /// open one; with several overlays open, one press closes exactly one.
    #[must_use]
    pub fn on_key(
        &self,
        stack: &OverlayStack<P::Element>,
        key: &KeyPress,
    ) -> Option<Dismissal> {
        if !self.enabled {
            return None;
        }
        (stack.dismiss_on_key(key) == Some(self.floating)).then_some(Dismissal::EscapeKey)
    }

    /// Focus-trap navigation for a key press while this overlay is open.
    ///
    /// `focusables` must be the floating panel's focusable descendants
    /// measured fresh for this press.
    #[must_use]
    pub fn trap_next(
        &self,
        focusables: &[P::Element],
        active: Option<P::Element>,
        key: &KeyPress,
    ) -> trap::TrapOutcome<P::Element> {
        if !self.enabled {
            return trap::TrapOutcome {
                handled: false,
                next: None,
            };
        }
        trap::compute_next(focusables, active, key)
    }

    /// Resolves a gesture on the reference to a visibility intent, honoring
    /// the disable gate. The caller owns the visibility state and calls
    /// [`OverlayBinding::enable`]/[`OverlayBinding::disable`] on the
    /// resulting transition.
    #[must_use]
    pub fn gesture(&self, gesture: Gesture) -> Option<VisibilityIntent> {
        self.triggers.intent_for(gesture)
    }

    /// Flips the disabled gate without re-binding any handler.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.triggers.set_disabled(disabled);
    }

    /// Replaces the placement request; schedules a reposition frame when
    /// the panel is visible.
    pub fn set_placement(&mut self, platform: &mut P, placement: Placement, offset: f64) {
        let request = PlacementRequest { placement, offset };
        if self.tracker.set_request(request) == FrameRequest::Schedule {
            self.frame = Some(platform.request_frame());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use bower_overlay::Key;
    use hashbrown::{HashMap, HashSet};

    /// In-memory host: hands out ids and records what is currently
    /// installed, so tests can assert "zero dangling" directly.
    struct TestHost {
        rects: HashMap<u32, Rect>,
        parents: HashMap<u32, Vec<u32>>,
        viewport: Rect,
        next_id: u32,
        live_listeners: HashMap<u32, (ListenTarget<u32>, ListenerKind)>,
        live_frames: HashSet<u32>,
        live_ticks: HashSet<u32>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                rects: HashMap::new(),
                parents: HashMap::new(),
                viewport: Rect::new(0.0, 0.0, 1000.0, 1000.0),
                next_id: 0,
                live_listeners: HashMap::new(),
                live_frames: HashSet::new(),
                live_ticks: HashSet::new(),
            }
        }

        fn id(&mut self) -> u32 {
            self.next_id += 1;
            self.next_id
        }

        fn listener_count(&self, kind: ListenerKind) -> usize {
            self.live_listeners
                .values()
                .filter(|(_, k)| *k == kind)
                .count()
        }

        fn is_clean(&self) -> bool {
            self.live_listeners.is_empty()
                && self.live_frames.is_empty()
                && self.live_ticks.is_empty()
        }
    }

    impl HostPlatform for TestHost {
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

        fn scroll_parents(&self, element: u32) -> SmallVec<[u32; 4]> {
            self.parents
                .get(&element)
                .map(|v| v.iter().copied().collect())
                .unwrap_or_default()
        }

        fn listen(&mut self, target: ListenTarget<u32>, kind: ListenerKind) -> u32 {
            let id = self.id();
            self.live_listeners.insert(id, (target, kind));
            id
        }

        fn unlisten(&mut self, listener: u32) {
            assert!(
                self.live_listeners.remove(&listener).is_some(),
                "removed a listener that was not installed"
            );
        }

        fn request_frame(&mut self) -> u32 {
            let id = self.id();
            self.live_frames.insert(id);
            id
        }

        fn cancel_frame(&mut self, frame: u32) {
            assert!(
                self.live_frames.remove(&frame),
                "cancelled a frame that was not scheduled"
            );
        }

        fn defer_tick(&mut self) -> u32 {
            let id = self.id();
            self.live_ticks.insert(id);
            id
        }

        fn cancel_tick(&mut self, tick: u32) {
            assert!(
                self.live_ticks.remove(&tick),
                "cancelled a tick that was not scheduled"
            );
        }
    }

    const REFERENCE: u32 = 1;
    const FLOATING: u32 = 2;
    const SCROLLER: u32 = 3;

    /// Host with the reference inside one scrollable ancestor and the
    /// floating panel sized 80x30, matching the anchor crate's scenarios.
    fn host() -> TestHost {
        let mut host = TestHost::new();
        host.rects
            .insert(REFERENCE, Rect::new(100.0, 100.0, 150.0, 150.0));
        host.rects.insert(FLOATING, Rect::new(0.0, 0.0, 80.0, 30.0));
        host.rects
            .insert(SCROLLER, Rect::new(0.0, 0.0, 500.0, 500.0));
        host.parents.insert(REFERENCE, alloc::vec![SCROLLER]);
        host
    }

    fn binding() -> OverlayBinding<TestHost> {
        OverlayBinding::new(
            REFERENCE,
            FLOATING,
            Boundary::Viewport,
            OverlayConfig::default(),
        )
    }

    /// Fire the pending frame and the arming tick, as a host's event loop
    /// would after enable.
    fn settle(
        binding: &mut OverlayBinding<TestHost>,
        host: &mut TestHost,
    ) -> Option<PositionResult> {
        host.live_ticks.clear();
        binding.on_arm_tick(host);
        host.live_frames.clear();
        binding.on_frame(host)
    }

    #[test]
    fn enable_acquires_listeners_stack_entry_and_initial_frame() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);

        // Window scroll plus one per scrollable ancestor.
        assert_eq!(host.listener_count(ListenerKind::Scroll), 2);
        assert_eq!(host.listener_count(ListenerKind::Resize), 1);
        assert_eq!(host.listener_count(ListenerKind::Mutation), 1);
        assert_eq!(host.listener_count(ListenerKind::Key), 1);
        // The press listener is deferred to the arming tick.
        assert_eq!(host.listener_count(ListenerKind::Press), 0);
        assert_eq!(host.live_ticks.len(), 1);
        assert_eq!(host.live_frames.len(), 1);
        assert!(stack.contains(FLOATING));

        // Initial placement: the first concrete scenario.
        host.live_frames.clear();
        let position = binding.on_frame(&host).unwrap();
        assert_eq!((position.x, position.y), (85.0, 62.0));
        assert_eq!(position.placement, Placement::Top);
    }

    #[test]
    fn enable_is_idempotent() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        let installed = host.live_listeners.len();
        binding.enable(&mut host, &mut stack);
        assert_eq!(host.live_listeners.len(), installed);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn arm_tick_installs_the_press_listener() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        host.live_ticks.clear();
        binding.on_arm_tick(&mut host);
        assert_eq!(host.listener_count(ListenerKind::Press), 1);
    }

    #[test]
    fn disable_releases_everything_synchronously() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        let _ = settle(&mut binding, &mut host);
        // Leave a frame pending so disable has something to cancel.
        binding.on_track_event(&mut host, TrackEvent::Scroll);
        assert!(!host.live_frames.is_empty());

        binding.disable(&mut host, &mut stack);
        assert!(host.is_clean(), "dangling listeners/frames/ticks");
        assert!(stack.is_empty());
        // A frame that fires anyway produces nothing.
        assert!(binding.on_frame(&host).is_none());
        // Disable twice is a no-op.
        binding.disable(&mut host, &mut stack);
        assert!(host.is_clean());
    }

    #[test]
    fn disable_before_arm_tick_cancels_it_and_never_installs_press() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        binding.disable(&mut host, &mut stack);
        assert!(host.is_clean());
        assert_eq!(host.listener_count(ListenerKind::Press), 0);

        // The stale tick fires anyway: still no listener, no dismissal.
        binding.on_arm_tick(&mut host);
        assert_eq!(host.listener_count(ListenerKind::Press), 0);
        assert_eq!(binding.on_press(&[99]), None);
    }

    #[test]
    fn scroll_burst_coalesces_into_one_frame() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        let _ = settle(&mut binding, &mut host);

        binding.on_track_event(&mut host, TrackEvent::Scroll);
        binding.on_track_event(&mut host, TrackEvent::Scroll);
        binding.on_track_event(&mut host, TrackEvent::Resize);
        assert_eq!(host.live_frames.len(), 1);

        // The reference moved before the frame fired; the single update
        // reflects the final geometry, not an intermediate one.
        host.rects
            .insert(REFERENCE, Rect::new(300.0, 300.0, 350.0, 350.0));
        host.live_frames.clear();
        let position = binding.on_frame(&host).unwrap();
        assert_eq!((position.x, position.y), (285.0, 262.0));
    }

    #[test]
    fn vanished_reference_drops_the_update_not_the_loop() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        host.rects.remove(&REFERENCE);
        host.live_frames.clear();
        assert!(binding.on_frame(&host).is_none());

        // Reattached: the next event tracks again.
        host.rects
            .insert(REFERENCE, Rect::new(100.0, 100.0, 150.0, 150.0));
        binding.on_track_event(&mut host, TrackEvent::Mutation);
        host.live_frames.clear();
        assert!(binding.on_frame(&host).is_some());
    }

    #[test]
    fn press_routing_honors_arming_and_refs() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();

        binding.enable(&mut host, &mut stack);
        // Before the tick: the opening press is still bubbling.
        assert_eq!(binding.on_press(&[0, 99]), None);

        host.live_ticks.clear();
        binding.on_arm_tick(&mut host);
        // Inside the reference or panel: never outside.
        assert_eq!(binding.on_press(&[0, REFERENCE, 7]), None);
        assert_eq!(binding.on_press(&[0, FLOATING]), None);
        // Anywhere else: dismiss.
        assert_eq!(binding.on_press(&[0, 99]), Some(Dismissal::OutsidePress));
    }

    #[test]
    fn outside_press_dismissal_can_be_opted_out() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = OverlayBinding::new(
            REFERENCE,
            FLOATING,
            Boundary::Viewport,
            OverlayConfig {
                dismiss_on_outside_press: false,
                ..OverlayConfig::default()
            },
        );

        binding.enable(&mut host, &mut stack);
        assert!(host.live_ticks.is_empty());
        binding.on_arm_tick(&mut host);
        assert_eq!(host.listener_count(ListenerKind::Press), 0);
        assert_eq!(binding.on_press(&[99]), None);
    }

    #[test]
    fn escape_closes_only_the_topmost_of_two_overlays() {
        let mut host = host();
        host.rects.insert(20, Rect::new(0.0, 0.0, 10.0, 10.0));
        host.rects.insert(21, Rect::new(0.0, 0.0, 60.0, 40.0));
        let mut stack = OverlayStack::new();

        let mut lower = binding();
        let mut upper = OverlayBinding::new(20, 21, Boundary::Viewport, OverlayConfig::default());
        lower.enable(&mut host, &mut stack);
        upper.enable(&mut host, &mut stack);

        let escape = KeyPress::new(Key::Escape);
        assert_eq!(lower.on_key(&stack, &escape), None);
        assert_eq!(upper.on_key(&stack, &escape), Some(Dismissal::EscapeKey));

        // The topmost actually closes; the next press reaches the lower one.
        upper.disable(&mut host, &mut stack);
        assert_eq!(lower.on_key(&stack, &escape), Some(Dismissal::EscapeKey));

        // A press already consumed by a more specific handler is ignored.
        assert_eq!(lower.on_key(&stack, &escape.prevented()), None);
    }

    #[test]
    fn trap_navigation_wraps_inside_the_panel() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();
        binding.enable(&mut host, &mut stack);

        let tab = KeyPress::new(Key::Tab);
        let focusables = [10_u32, 11, 12];
        assert_eq!(binding.trap_next(&focusables, Some(12), &tab).next, Some(10));
        assert_eq!(
            binding.trap_next(&focusables, Some(10), &tab.shifted()).next,
            Some(12)
        );
        // A disabled binding traps nothing.
        binding.disable(&mut host, &mut stack);
        assert!(!binding.trap_next(&focusables, Some(10), &tab).handled);
    }

    #[test]
    fn disabled_hover_gestures_recover_without_rebinding() {
        let mut binding = OverlayBinding::<TestHost>::new(
            REFERENCE,
            FLOATING,
            Boundary::Viewport,
            OverlayConfig {
                trigger: Trigger::Hover,
                disabled: true,
                ..OverlayConfig::default()
            },
        );

        // Both hover handlers resolve to no-ops while disabled.
        assert_eq!(binding.gesture(Gesture::PointerEnter), None);
        assert_eq!(binding.gesture(Gesture::PointerLeave), None);

        // Flipping the gate is enough; the next gesture works.
        binding.set_disabled(false);
        assert_eq!(
            binding.gesture(Gesture::PointerEnter),
            Some(VisibilityIntent::Show)
        );
        assert_eq!(
            binding.gesture(Gesture::PointerLeave),
            Some(VisibilityIntent::Hide)
        );
    }

    #[test]
    fn container_boundary_clips_and_falls_back_when_detached() {
        let mut host = host();
        // Reference near the top of the scroll container: flips below
        // against the container's client rect.
        host.rects
            .insert(SCROLLER, Rect::new(0.0, 95.0, 500.0, 500.0));
        let mut stack = OverlayStack::new();
        let mut binding = OverlayBinding::new(
            REFERENCE,
            FLOATING,
            Boundary::Container(SCROLLER),
            OverlayConfig::default(),
        );

        binding.enable(&mut host, &mut stack);
        let position = settle(&mut binding, &mut host).unwrap();
        assert_eq!(position.placement, Placement::Bottom);

        // Container detached: boundary falls back to the viewport, which
        // has ample room above.
        host.rects.remove(&SCROLLER);
        binding.on_track_event(&mut host, TrackEvent::Scroll);
        host.live_frames.clear();
        let position = binding.on_frame(&host).unwrap();
        assert_eq!(position.placement, Placement::Top);
    }

    #[test]
    fn set_placement_repositions_a_visible_panel() {
        let mut host = host();
        let mut stack = OverlayStack::new();
        let mut binding = binding();
        binding.enable(&mut host, &mut stack);
        let _ = settle(&mut binding, &mut host);

        binding.set_placement(&mut host, Placement::BottomEnd, 4.0);
        assert_eq!(host.live_frames.len(), 1);
        host.live_frames.clear();
        let position = binding.on_frame(&host).unwrap();
        assert_eq!(position.placement, Placement::BottomEnd);
        assert_eq!((position.x, position.y), (70.0, 154.0));
    }
}
