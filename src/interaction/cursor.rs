use std::time::Duration;

use super::scope::{schedule, SharedSubscriptions, Timer};

pub const TRAIL_DELAY: Duration = Duration::from_millis(50);
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1000);
pub const PRESS_PULSE: Duration = Duration::from_millis(150);

pub const CLICKABLE_CLASS: &str = "clickable";
pub const INTERACTIVE_ATTR: &str = "data-interactive";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub at: Point,
    pub created_at: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTarget {
    pub tag: String,
    pub classes: String,
    pub marked: bool,
}

impl HoverTarget {
    pub fn is_interactive(&self) -> bool {
        self.marked
            || self.tag.eq_ignore_ascii_case("button")
            || self.tag.eq_ignore_ascii_case("a")
            || self
                .classes
                .split_whitespace()
                .any(|c| c == CLICKABLE_CLASS)
    }
}

/// True if any element on the path from the event target to the root is
/// interactive.
pub fn hovers_interactive<I>(chain: I) -> bool
where
    I: IntoIterator<Item = HoverTarget>,
{
    chain.into_iter().any(|t| t.is_interactive())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorState {
    pointer: Point,
    trail: Point,
    hovering: bool,
    pressed: bool,
    visible: bool,
    ripples: Vec<Ripple>,
    next_ripple: u64,
}

impl CursorState {
    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer = at;
        self.visible = true;
    }

    pub fn trail_arrived(&mut self, at: Point) {
        self.trail = at;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    pub fn click(&mut self, at: Point, now_ms: f64) -> RippleId {
        let id = RippleId(self.next_ripple);
        self.next_ripple += 1;
        self.pressed = true;
        self.ripples.push(Ripple {
            id,
            at,
            created_at: now_ms,
        });
        id
    }

    pub fn release_press(&mut self) {
        self.pressed = false;
    }

    pub fn remove_ripple(&mut self, id: RippleId) -> bool {
        let before = self.ripples.len();
        self.ripples.retain(|r| r.id != id);
        self.ripples.len() != before
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn trail(&self) -> Point {
        self.trail
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn scale(&self) -> f64 {
        if self.pressed {
            0.9
        } else {
            1.0
        }
    }
}

pub trait CursorCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut CursorState) -> R) -> Option<R>;
}

/// Moves the dot now and the trail after [`TRAIL_DELAY`].
pub fn track_pointer<C, T>(cell: &C, scope: &SharedSubscriptions, timer: &T, at: Point)
where
    C: CursorCell,
    T: Timer + 'static,
{
    cell.update(|c| c.pointer_moved(at));
    // not coalesced: every move lands on the trail in order
    let trail = cell.clone();
    schedule(scope, timer, TRAIL_DELAY, move || {
        trail.update(|c| c.trail_arrived(at));
    });
}

/// Adds a ripple and the press pulse, each undone by its own timer.
pub fn press<C, T>(cell: &C, scope: &SharedSubscriptions, timer: &T, at: Point, now_ms: f64)
where
    C: CursorCell,
    T: Timer + 'static,
{
    if let Some(id) = cell.update(|c| c.click(at, now_ms)) {
        let ripple = cell.clone();
        schedule(scope, timer, RIPPLE_LIFETIME, move || {
            ripple.update(|c| c.remove_ripple(id));
        });
    }
    let pulse = cell.clone();
    schedule(scope, timer, PRESS_PULSE, move || {
        pulse.update(CursorState::release_press);
    });
}
