//! Multi-document YAML loading.
//!
//! Documents are decoded one at a time so a malformed trailing document
//! does not discard what a rule could still inspect. Callers keep the raw
//! text alongside the decoded stream; some rules fall back to raw-text
//! scanning when decoding fails.

use serde::Deserialize;
use serde_yaml::Value;

/// Decoded top-level documents from one file's text.
#[derive(Debug)]
pub struct DocumentStream {
    /// Documents decoded before the end of stream or the first failure.
    pub documents: Vec<Value>,

    /// Decode failure that halted the stream, if any.
    pub error: Option<String>,
}

impl DocumentStream {
    /// Whether the whole stream decoded without error.
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

/// Decode a (possibly multi-document) YAML stream.
///
/// Empty documents (explicit `null`, bare `---`) are skipped, not errors.
/// Decoding halts at the first failure; documents decoded before the
/// failure point are retained.
pub fn load_documents(text: &str) -> DocumentStream {
    let mut documents = Vec::new();

    for doc in serde_yaml::Deserializer::from_str(text) {
        match Value::deserialize(doc) {
            Ok(Value::Null) => continue,
            Ok(value) => documents.push(value),
            Err(err) => {
                return DocumentStream {
                    documents,
                    error: Some(err.to_string()),
                };
            }
        }
    }

    DocumentStream {
        documents,
        error: None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
