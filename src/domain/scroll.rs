//! Page scroll state.
//!
//! The whole UI is one vertical document (compose form, then the result or
//! error panel). [`PageScroll`] tracks how far that document is scrolled and
//! animates "scroll into view" requests: a request names a [`Section`], the
//! renderer reports where each section starts, and every tick moves the
//! position a fraction of the remaining distance toward that line.

/// Fraction of the remaining distance covered per tick.
const EASING: f32 = 0.35;

/// Below this distance (in lines) the animation snaps to the target.
const SNAP_DISTANCE: f32 = 0.5;

/// A scroll-into-view destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Compose,
    Result,
    Error,
}

/// First document line of each visible section, as laid out by the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionAnchors {
    pub compose: Option<u16>,
    pub result: Option<u16>,
    pub error: Option<u16>,
}

impl SectionAnchors {
    pub fn get(&self, section: Section) -> Option<u16> {
        match section {
            Section::Compose => self.compose,
            Section::Result => self.result,
            Section::Error => self.error,
        }
    }
}

/// Scroll position with eased scroll-into-view.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    /// Largest valid offset (document height minus viewport height)
    max_scroll: u16,
    /// Offset the animation is heading to
    target: u16,
    /// Fractional position for smooth movement
    position: f32,
    /// Section waiting for the next layout before it can be resolved
    pending: Option<Section>,
    /// Anchors from the last layout
    anchors: SectionAnchors,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in lines from the top of the document.
    pub fn offset(&self) -> u16 {
        self.position.round() as u16
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    /// Whether the position is still moving toward the target.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || (self.position - self.target as f32).abs() > f32::EPSILON
    }

    /// Ask for `section` to be scrolled to the top of the viewport.
    ///
    /// Resolved at the next [`set_layout`](Self::set_layout), since the
    /// section may not be laid out yet.
    pub fn scroll_into_view(&mut self, section: Section) {
        self.pending = Some(section);
    }

    /// Record the latest layout and resolve any pending request.
    pub fn set_layout(&mut self, max_scroll: u16, anchors: SectionAnchors) {
        self.max_scroll = max_scroll;
        self.anchors = anchors;
        self.target = self.target.min(max_scroll);
        self.position = self.position.min(max_scroll as f32);

        if let Some(section) = self.pending {
            // A hidden section has no anchor; keep waiting for it to appear.
            if let Some(line) = anchors.get(section) {
                self.target = line.min(max_scroll);
                self.pending = None;
            }
        }
    }

    /// Advance the animation one step. Returns true if the offset changed.
    pub fn tick(&mut self) -> bool {
        let before = self.offset();
        let distance = self.target as f32 - self.position;
        if distance.abs() < SNAP_DISTANCE {
            self.position = self.target as f32;
        } else {
            self.position += distance * EASING;
        }
        self.offset() != before
    }

    /// Scroll by `delta` lines immediately, cancelling any animation.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.offset() as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
        self.pending = None;
        self.target = next;
        self.position = next as f32;
    }
}
