#[cfg(feature = "tracing")]
macro_rules! cv_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "clipview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cv_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cv_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "clipview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cv_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cv_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "clipview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cv_warn {
    ($($tt:tt)*) => {};
}
