use alloc::sync::Arc;

use crate::clipview::ClipView;
use crate::{Easing, Point, Size};

/// A callback fired when a clip view state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ClipView, bool) + Send + Sync>;

/// Configuration for [`crate::ClipView`].
///
/// This type is designed to be cheap to clone: the callback is stored in an
/// `Arc` so adapters can tweak a few fields and call
/// `ClipView::set_options` without reallocating closures.
pub struct ClipViewOptions {
    /// Whether the content in this view is opaque.
    ///
    /// Opaque layers can skip blending during compositing. Defaults to
    /// `false` so content with transparent regions renders correctly.
    pub opaque: bool,

    /// Duration of animated scroll-to-visible transitions.
    pub scroll_duration_ms: u64,

    /// Timing curve for animated scrolls.
    pub easing: Easing,

    /// Initial scroll origin.
    pub initial_origin: Point,

    /// The initial viewport size, when known at construction.
    pub initial_viewport: Option<Size>,

    /// The initial content size, when known at construction.
    pub initial_content_size: Option<Size>,

    /// Optional callback fired when the clip view's state changes.
    ///
    /// The `is_scrolling` argument indicates whether a scroll is in
    /// progress (animated or event-driven).
    pub on_change: Option<OnChangeCallback>,

    /// Debounced delay for resetting `is_scrolling` after the last scroll
    /// event, checked on each idle `tick`.
    pub scroll_idle_delay_ms: u64,
}

impl ClipViewOptions {
    pub fn new() -> Self {
        Self {
            opaque: false,
            scroll_duration_ms: 250,
            easing: Easing::EaseOutCubic,
            initial_origin: Point::ZERO,
            initial_viewport: None,
            initial_content_size: None,
            on_change: None,
            scroll_idle_delay_ms: 150,
        }
    }

    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_initial_origin(mut self, origin: Point) -> Self {
        self.initial_origin = origin;
        self
    }

    pub fn with_initial_viewport(mut self, viewport: Option<Size>) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_initial_content_size(mut self, content_size: Option<Size>) -> Self {
        self.initial_content_size = content_size;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ClipView, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_scroll_idle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_idle_delay_ms = delay_ms;
        self
    }
}

impl Default for ClipViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ClipViewOptions {
    fn clone(&self) -> Self {
        Self {
            opaque: self.opaque,
            scroll_duration_ms: self.scroll_duration_ms,
            easing: self.easing,
            initial_origin: self.initial_origin,
            initial_viewport: self.initial_viewport,
            initial_content_size: self.initial_content_size,
            on_change: self.on_change.clone(),
            scroll_idle_delay_ms: self.scroll_idle_delay_ms,
        }
    }
}

impl core::fmt::Debug for ClipViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClipViewOptions")
            .field("opaque", &self.opaque)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("easing", &self.easing)
            .field("initial_origin", &self.initial_origin)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_content_size", &self.initial_content_size)
            .field("scroll_idle_delay_ms", &self.scroll_idle_delay_ms)
            .finish_non_exhaustive()
    }
}
