use clipview::{
    ClipView, ClipViewOptions, FrameState, FrameToken, Point, Rect, ScrollError, Size,
};

use crate::{LayerBridge, ScrollLayer, ScrollSource};

/// A framework-neutral controller that wraps a [`clipview::ClipView`] and a
/// compositing layer, and keeps the two in lockstep.
///
/// This type holds no UI objects beyond the [`ScrollLayer`] seam. Adapters
/// drive it by calling:
/// - `on_viewport_resize` / `on_content_resize` / `on_scroll` / `on_wheel`
///   when host events occur
/// - `tick(now_ms)` each frame tick (for animated scrolling and
///   `is_scrolling` debouncing)
///
/// Every mutating entry point ends by re-syncing the layer, so the layer's
/// displayed origin never drifts from the logical one.
#[derive(Clone, Debug)]
pub struct Controller<L> {
    view: ClipView,
    bridge: LayerBridge<L>,
}

impl<L: ScrollLayer> Controller<L> {
    pub fn new(options: ClipViewOptions, layer: L) -> Self {
        Self::from_view(ClipView::new(options), layer)
    }

    pub fn from_view(view: ClipView, layer: L) -> Self {
        let mut c = Self {
            view,
            bridge: LayerBridge::new(layer),
        };
        c.sync_now();
        c
    }

    pub fn view(&self) -> &ClipView {
        &self.view
    }

    /// Mutable access to the clip view.
    ///
    /// After mutating through this, call [`Self::sync_now`] (or wait for
    /// the next `tick`) to push the origin to the layer.
    pub fn view_mut(&mut self) -> &mut ClipView {
        &mut self.view
    }

    pub fn layer(&self) -> &L {
        self.bridge.layer()
    }

    pub fn bridge_mut(&mut self) -> &mut LayerBridge<L> {
        &mut self.bridge
    }

    pub fn into_parts(self) -> (ClipView, L) {
        (self.view, self.bridge.into_inner())
    }

    pub fn is_animating(&self) -> bool {
        self.view.is_animating()
    }

    pub fn cancel_animation(&mut self) {
        self.view.cancel_animation();
    }

    pub fn frame_token(&self) -> FrameToken {
        self.view.frame_token()
    }

    /// Pushes the current origin and opacity flag to the layer.
    pub fn sync_now(&mut self) {
        self.bridge.set_opaque(self.view.is_opaque());
        self.bridge.sync(self.view.origin());
    }

    pub fn on_viewport_resize(&mut self, viewport: Size) {
        self.view.set_viewport_size(viewport);
        self.sync_now();
    }

    pub fn on_content_resize(&mut self, content_size: Size) {
        self.view.set_content_size(content_size);
        self.sync_now();
    }

    /// Call when the host reports an absolute scroll position change (e.g.
    /// a scrollbar drag). Cancels any in-flight animation.
    pub fn on_scroll(&mut self, origin: Point, now_ms: u64) {
        self.view.apply_scroll_event(origin, now_ms);
        self.sync_now();
    }

    /// Call when the host forwards a scroll delta along with its input
    /// source classification.
    ///
    /// Continuous (momentum) input is applied as-is: the input system's own
    /// deceleration is authoritative and adding another would double up.
    /// Discrete wheel steps are routed through the deceleration animation;
    /// a step arriving mid-flight extends the in-flight target, so repeated
    /// clicks coalesce into one decaying glide.
    ///
    /// Returns the (clamped) origin the view is at or heading to.
    pub fn on_wheel(&mut self, dx: f64, dy: f64, source: ScrollSource, now_ms: u64) -> Point {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "clipview", dx, dy, ?source, now_ms, "on_wheel");
        let target = match source {
            ScrollSource::Continuous => {
                let target = self.view.origin().offset(dx, dy);
                self.view.apply_scroll_event(target, now_ms);
                self.view.origin()
            }
            ScrollSource::Discrete => {
                let base = self
                    .view
                    .animation()
                    .map(|a| a.to)
                    .unwrap_or_else(|| self.view.origin());
                self.view.animate_to(base.offset(dx, dy), now_ms)
            }
        };
        self.sync_now();
        target
    }

    /// Scrolls the minimal amount needed to make `rect` fully visible,
    /// optionally animated. See [`ClipView::scroll_to_visible`].
    pub fn scroll_to_visible(
        &mut self,
        rect: &Rect,
        animated: bool,
        now_ms: u64,
    ) -> Result<(), ScrollError> {
        let res = self.view.scroll_to_visible(rect, animated, now_ms);
        self.sync_now();
        res
    }

    /// Jumps to an origin immediately. Returns the applied (clamped) origin.
    pub fn scroll_to(&mut self, origin: Point) -> Point {
        let applied = self.view.scroll_to(origin);
        self.sync_now();
        applied
    }

    /// Starts a decelerated animation toward `target`. Returns the clamped
    /// target.
    pub fn animate_to(&mut self, target: Point, now_ms: u64) -> Point {
        let to = self.view.animate_to(target, now_ms);
        self.sync_now();
        to
    }

    pub fn set_opaque(&mut self, opaque: bool) {
        self.view.set_opaque(opaque);
        self.bridge.set_opaque(opaque);
    }

    /// Advances the controller by one frame and re-syncs the layer.
    ///
    /// Returns the new origin while an animation is driving it.
    pub fn tick(&mut self, now_ms: u64) -> Option<Point> {
        let moved = self.view.tick(now_ms);
        self.sync_now();
        moved
    }

    /// Like [`Self::tick`], but a stale [`FrameToken`] makes it a no-op.
    pub fn tick_frame(&mut self, token: FrameToken, now_ms: u64) -> Option<Point> {
        let moved = self.view.tick_frame(token, now_ms);
        self.sync_now();
        moved
    }

    pub fn frame_state(&self) -> FrameState {
        self.view.frame_state()
    }

    /// Restores a previously captured snapshot and re-syncs the layer.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.view.restore_frame_state(frame, now_ms);
        self.sync_now();
    }
}
