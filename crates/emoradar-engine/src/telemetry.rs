//! Logging shims. With the `telemetry` feature events go through `tracing`;
//! without it warnings use `eprintln!` and everything else is dropped.
//! Only plain format strings are passed so both paths accept the same input.

macro_rules! warn_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "telemetry")]
        {
            tracing::warn!($($arg)+);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            eprintln!($($arg)+);
        }
    }};
}

macro_rules! info_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "telemetry")]
        {
            tracing::info!($($arg)+);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}

macro_rules! debug_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "telemetry")]
        {
            tracing::debug!($($arg)+);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}
