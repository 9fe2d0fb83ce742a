// Log capture for the terminal UI
//
// While the alternate screen is up nothing may print to the terminal, so TUI
// mode installs `TuiLogLayer` in place of the fmt layer. Events land in a
// bounded `LogBuffer` that the logs panel reads on every frame.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Entries kept before the oldest is dropped
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub level: Level,
    /// Formatted message, then any structured fields as ` key=value`
    pub text: String,
}

struct Ring {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    captured: u64,
}

/// Bounded, shared log history
///
/// The tracing layer must be `Send + Sync`, so this is the one place the
/// otherwise single-threaded board uses a lock.
#[derive(Clone)]
pub struct LogBuffer {
    ring: Arc<Mutex<Ring>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Arc::new(Mutex::new(Ring {
                entries: VecDeque::with_capacity(capacity),
                capacity: capacity.max(1),
                captured: 0,
            })),
        }
    }

    // Entries stay usable even if a holder panicked
    fn lock(&self) -> MutexGuard<'_, Ring> {
        self.ring.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push(&self, entry: LogEntry) {
        let mut ring = self.lock();
        if ring.entries.len() == ring.capacity {
            ring.entries.pop_front();
        }
        ring.entries.push_back(entry);
        ring.captured += 1;
    }

    /// The `n` most recent entries, oldest first
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let ring = self.lock();
        let skip = ring.entries.len().saturating_sub(n);
        ring.entries.iter().skip(skip).cloned().collect()
    }

    /// Events seen since startup, including evicted ones
    pub fn captured(&self) -> u64 {
        self.lock().captured
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracing layer feeding a `LogBuffer`
///
/// Level filtering is left to the `EnvFilter` on the registry.
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S: Subscriber> Layer<S> for TuiLogLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut line = LineVisitor::default();
        event.record(&mut line);

        self.buffer.push(LogEntry {
            at: Utc::now(),
            level: *event.metadata().level(),
            text: line.message + &line.fields,
        });
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // `format_args!` messages arrive here and Debug-print unquoted
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(text: &str) -> LogEntry {
        LogEntry {
            at: Utc::now(),
            level: Level::INFO,
            text: text.to_string(),
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<LogEntry> {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        buffer.tail(usize::MAX)
    }

    #[test]
    fn full_buffer_drops_oldest_but_counts_everything() {
        let buffer = LogBuffer::with_capacity(3);
        for i in 0..5 {
            buffer.push(entry(&format!("line {}", i)));
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.captured(), 5);
        let texts: Vec<String> = buffer.tail(10).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn tail_is_oldest_first() {
        let buffer = LogBuffer::new();
        for text in ["a", "b", "c"] {
            buffer.push(entry(text));
        }

        let texts: Vec<String> = buffer.tail(2).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn layer_captures_formatted_message_and_level() {
        let entries = capture(|| tracing::warn!("Added project {}", "Build shed"));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::WARN);
        assert_eq!(entries[0].text, "Added project Build shed");
    }

    #[test]
    fn structured_fields_follow_the_message() {
        let entries = capture(|| tracing::info!(people = 3, status = "active", "Added"));

        assert_eq!(entries[0].text, "Added people=3 status=active");
    }
}
