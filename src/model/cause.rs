//! Structured, acyclic indeterminate-cause trees.
//!
//! Causes are meant for logging and debugging (§7). They are built fresh on
//! every evaluation and owned by the caller; nothing here shares sub-trees,
//! since structural copies are cheaper to reason about than the borrow
//! plumbing `Rc` sharing would demand for a tree this small (§9).

use serde::{Deserialize, Serialize};

/// The two failure classes an evaluation can attribute a cause to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseCode {
    #[serde(rename = "SYNTAX_ERROR")]
    SyntaxError,
    #[serde(rename = "PROCESSING_ERROR")]
    ProcessingError,
}

impl CauseCode {
    /// Lowercase rendering used when composing default descriptions such as
    /// `"Target with id foo has syntax_error"`.
    pub fn as_lowercase_str(&self) -> &'static str {
        match self {
            CauseCode::SyntaxError => "syntax_error",
            CauseCode::ProcessingError => "processing_error",
        }
    }
}

/// A node in an indeterminate-cause tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndeterminateCause {
    pub code: CauseCode,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IndeterminateCause>,
}

impl IndeterminateCause {
    pub fn syntax_error(description: impl Into<String>) -> Self {
        Self {
            code: CauseCode::SyntaxError,
            description: description.into(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn processing_error(description: impl Into<String>) -> Self {
        Self {
            code: CauseCode::ProcessingError,
            description: description.into(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_children(mut self, children: Vec<IndeterminateCause>) -> Self {
        self.children = children;
        self
    }

    /// Returns a copy of this cause with its top-level description replaced,
    /// leaving `code`, `content` and `children` untouched. Used at every
    /// composition boundary that attaches a default description such as
    /// `"<kind> with id <id> has <code>"` (§4.2, §4.4).
    pub fn described_as(&self, description: impl Into<String>) -> Self {
        Self {
            code: self.code,
            description: description.into(),
            content: self.content.clone(),
            children: self.children.clone(),
        }
    }

    /// Builds the `"<kind> with id <id> has <code_lowercase>"` default
    /// description and applies it via [`Self::described_as`].
    pub fn described_as_default(&self, kind: &str, id: &str) -> Self {
        self.described_as(format!(
            "{kind} with id {id} has {}",
            self.code.as_lowercase_str()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn described_as_default_preserves_children() {
        let child = IndeterminateCause::syntax_error("inner");
        let cause = IndeterminateCause::syntax_error("Expression is null")
            .with_children(vec![child.clone()]);

        let wrapped = cause.described_as_default("Target", "t1");

        assert_eq!(wrapped.description, "Target with id t1 has syntax_error");
        assert_eq!(wrapped.children, vec![child]);
        assert_eq!(wrapped.code, CauseCode::SyntaxError);
    }

    #[test]
    fn code_lowercase_rendering() {
        assert_eq!(CauseCode::SyntaxError.as_lowercase_str(), "syntax_error");
        assert_eq!(
            CauseCode::ProcessingError.as_lowercase_str(),
            "processing_error"
        );
    }
}
