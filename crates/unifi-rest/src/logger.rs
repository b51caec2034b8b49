// Caller-supplied log sinks
//
// The client reports two streams of messages: errors worth surfacing
// (skipped devices, undecodable payloads) and debug chatter (one line per
// site polled). Callers pick where each goes. Internals additionally emit
// `tracing` events regardless of the sinks.

use std::fmt;
use std::sync::Arc;

/// A log sink the client writes formatted messages into.
///
/// Always holds a callable, so there is no "unset" state to guard against;
/// [`Logger::discard`] is the default.
#[derive(Clone)]
pub struct Logger(Arc<dyn Fn(fmt::Arguments<'_>) + Send + Sync>);

impl Logger {
    /// Wrap any function that accepts formatted arguments.
    pub fn new(f: impl Fn(fmt::Arguments<'_>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A sink that drops every message.
    pub fn discard() -> Self {
        Self::new(|_| {})
    }

    /// Forward messages to `tracing` at ERROR level.
    pub fn tracing_error() -> Self {
        Self::new(|args| tracing::error!("{args}"))
    }

    /// Forward messages to `tracing` at DEBUG level.
    pub fn tracing_debug() -> Self {
        Self::new(|args| tracing::debug!("{args}"))
    }

    /// Write one message.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        (self.0)(args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger(..)")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn custom_logger_receives_formatted_messages() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let logger = Logger::new(move |args| sink.lock().unwrap().push(args.to_string()));

        logger.log(format_args!("polling site {}", "default"));
        logger.clone().log(format_args!("{} devices", 3));

        assert_eq!(*seen.lock().unwrap(), vec!["polling site default", "3 devices"]);
    }

    #[test]
    fn discard_logger_is_silent_and_default() {
        Logger::default().log(format_args!("nobody hears this"));
        assert_eq!(format!("{:?}", Logger::discard()), "Logger(..)");
    }
}
