use crate::{Point, Size};

/// A lightweight, serializable snapshot of the current viewport geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub viewport: Size,
    pub content: Size,
}

/// A lightweight, serializable snapshot of the current scroll origin.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OriginState {
    pub origin: Point,
    pub is_scrolling: bool,
}

/// A combined snapshot of viewport geometry + scroll origin.
///
/// This is useful for restoring UI state across frames or sessions without
/// coupling the clip view to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub origin: OriginState,
}
