/// Errors reported synchronously by scroll-to-visible requests.
///
/// None of these are fatal: a failed request leaves the scroll origin
/// unchanged and the caller decides whether to retry with corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// The target rect has zero or negative extent, or lies entirely
    /// outside the content bounds.
    #[error("target rect is empty or outside the content bounds")]
    DegenerateTarget,

    /// The surface has no live viewport yet (empty viewport size), so there
    /// is nothing to scroll within.
    #[error("clip view is not attached to a live viewport")]
    Detached,
}
