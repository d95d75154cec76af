//! Form scaffolding from registry shapes.
//!
//! The registry's [`ContentShape`] describes what fields a kind expects;
//! this module joins that metadata with an [`EditSession`]'s draft values
//! to produce the rows an editing form renders. Purely descriptive — the
//! form never validates, and saving stays best-effort.

use meishi_types::{BlockKind, ContentShape, FieldSpec};
use serde_json::Value;

use crate::session::EditSession;

/// One editable form row: the declared field plus its current draft value.
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub spec: &'static FieldSpec,
    pub value: Option<Value>,
}

impl FormField {
    /// The draft value as text, for plain input widgets. Non-string values
    /// (lists, numbers) display empty — their widgets read `value` directly.
    pub fn text_value(&self) -> &str {
        match &self.value {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }
}

/// Build the form rows for a kind from the active session's draft.
///
/// Draft fields the shape doesn't declare are ignored (they still ride
/// along in the saved payload); declared fields missing from the draft
/// appear with no value.
pub fn form_fields(kind: BlockKind, session: &EditSession) -> Vec<FormField> {
    ContentShape::describe(kind)
        .fields
        .iter()
        .map(|spec| FormField {
            spec,
            value: session.field(spec.name).cloned(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
