use alloc::sync::Arc;
use core::cell::Cell;

use crate::{
    ClipViewOptions, Easing, FrameState, FrameToken, OriginState, Point, Rect, ScrollAnimation,
    ScrollError, Size, ViewportState,
};

/// A headless clip view: the single source of truth for a scroll origin.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport/content geometry, scroll
///   events, and a per-frame `tick`.
/// - The compositing layer is synchronized by the adapter after every
///   origin mutation (see the `clipview-adapter` crate).
///
/// Scroll-to-visible requests are arbitrated here: an immediate request
/// snaps the origin to the clamped target, an animated request starts a
/// deceleration [`ScrollAnimation`] that `tick` advances one frame at a
/// time. At most one animation is active at any time; any newer scroll
/// request, external scroll event, or geometry change cancels it.
#[derive(Clone, Debug)]
pub struct ClipView {
    options: ClipViewOptions,
    viewport: Size,
    content_size: Size,
    origin: Point,
    animation: Option<ScrollAnimation>,
    generation: u64,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ClipView {
    /// Creates a new clip view from options.
    ///
    /// If `options.initial_viewport` and/or `options.initial_content_size`
    /// are set, those values are applied immediately and the initial origin
    /// is clamped against them.
    pub fn new(options: ClipViewOptions) -> Self {
        let viewport = options.initial_viewport.unwrap_or_default();
        let content_size = options.initial_content_size.unwrap_or_default();
        cv_debug!(
            opaque = options.opaque,
            scroll_duration_ms = options.scroll_duration_ms,
            "ClipView::new"
        );
        let mut v = Self {
            viewport,
            content_size,
            origin: options.initial_origin,
            animation: None,
            generation: 0,
            is_scrolling: false,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        v.origin = v.clamp_origin(v.origin);
        v
    }

    pub fn options(&self) -> &ClipViewOptions {
        &self.options
    }

    /// Replaces the options wholesale.
    ///
    /// Geometry is untouched (the `initial_*` fields only apply at
    /// construction) and an in-flight animation keeps running with the
    /// parameters it was started with.
    pub fn set_options(&mut self, options: ClipViewOptions) {
        self.options = options;
        cv_trace!(
            opaque = self.options.opaque,
            scroll_duration_ms = self.options.scroll_duration_ms,
            "ClipView::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ClipViewOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ClipView, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn is_opaque(&self) -> bool {
        self.options.opaque
    }

    /// Marks the content as opaque (or not) for layer compositing.
    ///
    /// This only affects how the backing layer is configured for blending;
    /// it never moves the scroll origin or disturbs a running animation.
    pub fn set_opaque(&mut self, opaque: bool) {
        if self.options.opaque == opaque {
            return;
        }
        self.options.opaque = opaque;
        self.notify();
    }

    pub fn set_scroll_duration_ms(&mut self, duration_ms: u64) {
        self.options.scroll_duration_ms = duration_ms;
        self.notify();
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.options.easing = easing;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// This is recommended for UI adapters: on a typical frame you might
    /// update the viewport, the origin, and the scrolling state together.
    /// Without batching, each setter may trigger `on_change`, which can be
    /// expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Records a scroll event at `now_ms` and marks the view as scrolling.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Debounce: resets `is_scrolling` once no scroll event has arrived for
    /// `scroll_idle_delay_ms`. Called automatically by idle `tick`s.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.scroll_idle_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The currently visible region, in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.viewport)
    }

    /// Updates the viewport size.
    ///
    /// A geometry change cancels any in-flight animation and re-clamps the
    /// origin to the new scrollable range.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        cv_debug!(
            width = viewport.width,
            height = viewport.height,
            "set_viewport_size"
        );
        self.batch_update(|v| {
            v.cancel_animation();
            v.viewport = viewport;
            v.origin = v.clamp_origin(v.origin);
            v.notify();
        });
    }

    /// Updates the content size. Same cancellation/re-clamp semantics as
    /// [`Self::set_viewport_size`].
    pub fn set_content_size(&mut self, content_size: Size) {
        if self.content_size == content_size {
            return;
        }
        cv_debug!(
            width = content_size.width,
            height = content_size.height,
            "set_content_size"
        );
        self.batch_update(|v| {
            v.cancel_animation();
            v.content_size = content_size;
            v.origin = v.clamp_origin(v.origin);
            v.notify();
        });
    }

    /// Applies viewport and content size in a single coalesced update.
    pub fn set_geometry(&mut self, viewport: Size, content_size: Size) {
        self.batch_update(|v| {
            v.set_viewport_size(viewport);
            v.set_content_size(content_size);
        });
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The maximum valid scroll origin: `content − viewport`, floored at
    /// zero on each axis.
    pub fn max_origin(&self) -> Point {
        Point::new(
            (self.content_size.width - self.viewport.width).max(0.0),
            (self.content_size.height - self.viewport.height).max(0.0),
        )
    }

    pub fn clamp_origin(&self, origin: Point) -> Point {
        let max = self.max_origin();
        Point::new(origin.x.clamp(0.0, max.x), origin.y.clamp(0.0, max.y))
    }

    /// Sets the origin directly, clamped to the valid scrollable range.
    ///
    /// This does not touch a running animation; use [`Self::scroll_to`] for
    /// "programmatic jump" semantics.
    pub fn set_origin(&mut self, origin: Point) {
        let origin = self.clamp_origin(origin);
        if self.origin == origin {
            return;
        }
        self.origin = origin;
        self.notify();
    }

    /// Applies a scroll offset update from your UI layer (wheel/drag/touch
    /// momentum), cancelling any in-flight animation and marking the view
    /// as scrolling.
    pub fn apply_scroll_event(&mut self, origin: Point, now_ms: u64) {
        cv_trace!(x = origin.x, y = origin.y, now_ms, "apply_scroll_event");
        self.batch_update(|v| {
            v.cancel_animation();
            v.set_origin(origin);
            v.notify_scroll_event(now_ms);
        });
    }

    /// Programmatically jumps to an origin (no animation).
    ///
    /// Returns the applied (clamped) origin.
    pub fn scroll_to(&mut self, origin: Point) -> Point {
        self.batch_update(|v| {
            v.cancel_animation();
            v.set_origin(origin);
        });
        self.origin
    }

    /// Starts a decelerated animation from the current origin to `target`
    /// (clamped), superseding any in-flight animation.
    ///
    /// Returns the clamped target. If the target equals the current origin
    /// nothing is scheduled.
    pub fn animate_to(&mut self, target: Point, now_ms: u64) -> Point {
        let to = self.clamp_origin(target);
        self.cancel_animation();
        if to == self.origin {
            return to;
        }
        cv_debug!(
            to_x = to.x,
            to_y = to.y,
            duration_ms = self.options.scroll_duration_ms,
            "animate_to"
        );
        self.generation = self.generation.wrapping_add(1);
        self.animation = Some(ScrollAnimation::new(
            self.origin,
            to,
            now_ms,
            self.options.scroll_duration_ms,
            self.options.easing,
        ));
        self.batch_update(|v| v.notify_scroll_event(now_ms));
        to
    }

    /// Computes the clamped origin that makes `rect` fully visible with the
    /// minimal shift, without applying it.
    ///
    /// On each axis: a rect already inside the viewport leaves the origin
    /// unchanged; a rect before the viewport aligns its near edge; a rect
    /// past the viewport shifts forward just enough for its far edge. A
    /// rect larger than the viewport aligns its near edge.
    pub fn target_origin_for(&self, rect: &Rect) -> Result<Point, ScrollError> {
        if self.viewport.is_empty() {
            return Err(ScrollError::Detached);
        }
        if rect.is_degenerate() {
            cv_warn!(
                width = rect.size.width,
                height = rect.size.height,
                "target_origin_for: degenerate rect"
            );
            return Err(ScrollError::DegenerateTarget);
        }
        let content = Rect::from_origin_size(Point::ZERO, self.content_size);
        if !rect.intersects(&content) {
            cv_warn!(
                x = rect.origin.x,
                y = rect.origin.y,
                "target_origin_for: rect outside content bounds"
            );
            return Err(ScrollError::DegenerateTarget);
        }

        let target = Point::new(
            axis_target(self.origin.x, self.viewport.width, rect.min_x(), rect.max_x()),
            axis_target(self.origin.y, self.viewport.height, rect.min_y(), rect.max_y()),
        );
        Ok(self.clamp_origin(target))
    }

    /// Scrolls the minimal amount needed to make `rect` fully visible.
    ///
    /// - A rect that is already fully visible is a no-op: the origin is
    ///   unchanged and no animation is scheduled.
    /// - `animated == false` snaps the origin to the clamped target.
    /// - `animated == true` starts a deceleration animation from the
    ///   current origin; the call returns once the animation is scheduled,
    ///   not once it completes. Drive it with [`Self::tick`].
    ///
    /// Any in-flight animation is cancelled by the new request.
    ///
    /// Fails with [`ScrollError::Detached`] when the viewport is empty and
    /// with [`ScrollError::DegenerateTarget`] when `rect` has no extent or
    /// lies entirely outside the content bounds; a failed request leaves
    /// all state untouched.
    pub fn scroll_to_visible(
        &mut self,
        rect: &Rect,
        animated: bool,
        now_ms: u64,
    ) -> Result<(), ScrollError> {
        let target = self.target_origin_for(rect)?;
        cv_debug!(
            target_x = target.x,
            target_y = target.y,
            animated,
            "scroll_to_visible"
        );
        if animated {
            self.animate_to(target, now_ms);
        } else {
            self.scroll_to(target);
        }
        Ok(())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    /// Cancels the in-flight animation, leaving the origin wherever the
    /// last tick put it. Invalidates outstanding [`FrameToken`]s.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// A validity token for the current animation generation.
    ///
    /// Capture one when scheduling a per-frame callback with the host; the
    /// token goes stale when the animation it was captured for is cancelled
    /// or completed, making [`Self::tick_frame`] a no-op.
    pub fn frame_token(&self) -> FrameToken {
        FrameToken(self.generation)
    }

    /// Advances the clip view by one frame.
    ///
    /// - If an animation is active, samples it at `now_ms`, updates the
    ///   origin, and returns the new origin. On completion the animation is
    ///   dropped and `is_scrolling` is cleared.
    /// - Otherwise, runs the `is_scrolling` debounce and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<Point> {
        let Some(animation) = self.animation else {
            self.update_scrolling(now_ms);
            return None;
        };

        let origin = animation.sample(now_ms);
        self.batch_update(|v| {
            v.set_origin(origin);
            v.notify_scroll_event(now_ms);
        });

        if animation.is_done(now_ms) {
            self.animation = None;
            self.generation = self.generation.wrapping_add(1);
            self.set_is_scrolling(false);
        }

        Some(self.origin)
    }

    /// Like [`Self::tick`], but only when `token` is still current.
    ///
    /// A pending host callback scheduled for an animation that has since
    /// been cancelled or superseded carries a stale token and does nothing.
    pub fn tick_frame(&mut self, token: FrameToken, now_ms: u64) -> Option<Point> {
        if token != self.frame_token() {
            cv_trace!(now_ms, "tick_frame: stale token");
            return None;
        }
        self.tick(now_ms)
    }

    /// Returns a lightweight snapshot of the current geometry.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            viewport: self.viewport,
            content: self.content_size,
        }
    }

    /// Returns a lightweight snapshot of the current origin.
    pub fn origin_state(&self) -> OriginState {
        OriginState {
            origin: self.origin,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of geometry + origin.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            origin: self.origin_state(),
        }
    }

    /// Restores geometry from a previously captured snapshot.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.set_geometry(viewport.viewport, viewport.content);
    }

    /// Restores the origin from a previously captured snapshot.
    ///
    /// When `state.is_scrolling` is `true`, this updates the internal
    /// scrolling timers as if a scroll event happened at `now_ms`.
    pub fn restore_origin_state(&mut self, state: OriginState, now_ms: u64) {
        if state.is_scrolling {
            self.apply_scroll_event(state.origin, now_ms);
            return;
        }
        self.batch_update(|v| {
            v.cancel_animation();
            v.set_origin(state.origin);
            v.set_is_scrolling(false);
        });
    }

    /// Restores both geometry + origin from a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.batch_update(|v| {
            v.restore_viewport_state(frame.viewport);
            v.restore_origin_state(frame.origin, now_ms);
        });
    }
}

/// Minimal shift on one axis so `[lo, hi]` fits inside a window of `view`
/// starting at `cur`. An interval larger than the window aligns `lo`.
fn axis_target(cur: f64, view: f64, lo: f64, hi: f64) -> f64 {
    if lo < cur {
        lo
    } else if hi > cur + view {
        (hi - view).min(lo)
    } else {
        cur
    }
}
