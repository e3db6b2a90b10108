//! Feature-gated tracing macros.
//!
//! With the `tracing` feature enabled, detectors and the analyzer emit spans
//! and events through the `tracing` crate. Without it the macros expand to
//! no-ops, so call sites need no `cfg` attributes.
//!
//! Both macros take the level first: `info` for study-level work, `debug` for
//! per-sample detector passes.

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    (info, $name:expr $(, $($field:tt)*)?) => {
        tracing::span!(tracing::Level::INFO, $name $(, $($field)*)?)
    };
    (debug, $name:expr $(, $($field:tt)*)?) => {
        tracing::span!(tracing::Level::DEBUG, $name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($level:ident, $name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an event with key/value fields, e.g. positive-pixel counts.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (info, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::event!(name: $name, tracing::Level::INFO, $($key = $value),+)
    };
    (debug, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::event!(name: $name, tracing::Level::DEBUG, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        let _ = ($(&$value,)+);
    }};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
