// Events delivered through the document
//
// Drag events carry a DataTransfer: a small MIME-keyed string store plus the
// allowed drop effect. The declared type list keeps insertion order, so the
// first type is the one a drop target inspects.

use super::NodeId;

/// Kinds of events the components listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    DragStart,
    DragEnd,
    DragOver,
    Drop,
    DragLeave,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Submit => "submit",
            EventKind::DragStart => "dragstart",
            EventKind::DragEnd => "dragend",
            EventKind::DragOver => "dragover",
            EventKind::Drop => "drop",
            EventKind::DragLeave => "dragleave",
        }
    }
}

/// Which operations a drag source allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    Uninitialized,
    Move,
}

/// Payload carried by a drag operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `format`, replacing any previous entry
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format.to_string(), data)),
        }
    }

    /// Data stored under `format`, or an empty string
    pub fn get_data(&self, format: &str) -> String {
        self.entries
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.clone())
            .unwrap_or_default()
    }

    /// Declared formats, in the order they were set
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// An event travelling from its target up through the ancestors
#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            data_transfer: None,
            default_prevented: false,
        }
    }

    /// Drag event carrying a payload
    pub fn drag(kind: EventKind, target: NodeId, data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            ..Self::new(kind, target)
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_transfer_replaces_same_format() {
        let mut dt = DataTransfer::new();
        dt.set_data("text/plain", "a");
        dt.set_data("text/html", "<b>a</b>");
        dt.set_data("text/plain", "b");

        assert_eq!(dt.get_data("text/plain"), "b");
        assert_eq!(dt.types(), vec!["text/plain", "text/html"]);
    }

    #[test]
    fn missing_format_reads_empty() {
        let dt = DataTransfer::new();
        assert_eq!(dt.get_data("text/plain"), "");
        assert!(dt.types().is_empty());
        assert_eq!(dt.effect_allowed, DropEffect::Uninitialized);
    }
}
