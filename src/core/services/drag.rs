use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data transfer type under which cards publish their payload.
pub const DRAG_MIME: &str = "application/x-kanban-task";

/// What a card puts on the drag data transfer. Tagged so that text dragged in
/// from elsewhere is never mistaken for a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragPayload {
    Task { id: String },
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("drag payload is empty")]
    Empty,

    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DragPayload {
    pub fn task(id: impl Into<String>) -> Self {
        DragPayload::Task { id: id.into() }
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        if raw.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn task_id(&self) -> &str {
        match self {
            DragPayload::Task { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_kind_tag() {
        let raw = DragPayload::task("1").encode().unwrap();
        assert_eq!(raw, r#"{"kind":"task","id":"1"}"#);
    }

    #[test]
    fn decodes_card_payload() {
        let payload = DragPayload::decode(r#"{"kind":"task","id":"abc"}"#).unwrap();
        assert_eq!(payload.task_id(), "abc");
    }

    #[test]
    fn rejects_foreign_drag_sources() {
        assert!(matches!(DragPayload::decode(""), Err(PayloadError::Empty)));
        assert!(matches!(DragPayload::decode("   "), Err(PayloadError::Empty)));
        // bare id, as a plain text drag would carry
        assert!(matches!(DragPayload::decode("1"), Err(PayloadError::Malformed(_))));
        assert!(matches!(
            DragPayload::decode(r#"{"kind":"file","id":"1"}"#),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(DragPayload::decode(r#"{"id":"1"}"#), Err(PayloadError::Malformed(_))));
    }
}
