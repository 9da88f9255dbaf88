/// Classification of a forwarded scroll event's input source.
///
/// Hosts report this alongside scroll deltas so exactly one party applies
/// deceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollSource {
    /// A discrete step source (scroll-wheel click). The device produces no
    /// momentum of its own, so the controller routes the step through its
    /// deceleration animation.
    Discrete,
    /// A continuous source (trackpad/touch momentum). The input system's
    /// own deceleration is authoritative; deltas are applied directly and
    /// any in-flight animation is cancelled.
    Continuous,
}
