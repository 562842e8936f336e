//! Notice handlers for symbol table observability.
//!
//! Each table operation reports a one-line notice (a definition, an applied
//! or undefined lookup, a reflection listing). Where the notices go is chosen
//! by the handler installed on the table:
//! - Tracing: `tracing` events (default)
//! - Stdout: plain lines on standard output
//! - Buffer: captured for assertions
//! - Silent: discarded
//!
//! Uses enum dispatch rather than trait objects, so every notice is a direct
//! match on the handler kind.

use std::sync::Arc;

use parking_lot::Mutex;

/// Target used for notices forwarded to `tracing`.
const NOTICE_TARGET: &str = "symb_table::notice";

/// Handler that writes notices to stdout.
#[derive(Default)]
pub struct StdoutNoticeHandler;

impl StdoutNoticeHandler {
    /// Emit a notice as one line.
    pub fn notice(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Handler that forwards notices to `tracing` at info level.
#[derive(Default)]
pub struct TracingNoticeHandler;

impl TracingNoticeHandler {
    /// Emit a notice as a `tracing` event.
    pub fn notice(&self, msg: &str) {
        tracing::info!(target: NOTICE_TARGET, "{msg}");
    }
}

/// Handler that captures notices in a buffer.
pub struct BufferNoticeHandler {
    buffer: Mutex<String>,
}

impl BufferNoticeHandler {
    /// Create an empty buffer handler.
    pub fn new() -> Self {
        BufferNoticeHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append a notice followed by a newline.
    pub fn notice(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// All captured notices.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drop captured notices.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferNoticeHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Notice handler selected by enum dispatch.
pub enum NoticeHandlerImpl {
    /// Plain lines on stdout.
    Stdout(StdoutNoticeHandler),
    /// `tracing` events (default).
    Tracing(TracingNoticeHandler),
    /// Captured in memory.
    Buffer(BufferNoticeHandler),
    /// Discards all notices.
    Silent,
}

impl NoticeHandlerImpl {
    /// Emit a notice.
    pub fn notice(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.notice(msg),
            Self::Tracing(h) => h.notice(msg),
            Self::Buffer(h) => h.notice(msg),
            Self::Silent => {}
        }
    }

    /// Captured notices.
    ///
    /// Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Tracing(_) | Self::Silent => String::new(),
        }
    }

    /// Drop captured notices. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Notice handler shared between a table and its owner.
pub type SharedNoticeHandler = Arc<NoticeHandlerImpl>;

/// Create a stdout notice handler.
pub fn stdout_handler() -> SharedNoticeHandler {
    Arc::new(NoticeHandlerImpl::Stdout(StdoutNoticeHandler))
}

/// Create a `tracing` notice handler.
pub fn tracing_handler() -> SharedNoticeHandler {
    Arc::new(NoticeHandlerImpl::Tracing(TracingNoticeHandler))
}

/// Create a buffer notice handler for capturing notices.
pub fn buffer_handler() -> SharedNoticeHandler {
    Arc::new(NoticeHandlerImpl::Buffer(BufferNoticeHandler::new()))
}

/// Create a handler that discards all notices.
pub fn silent_handler() -> SharedNoticeHandler {
    Arc::new(NoticeHandlerImpl::Silent)
}
