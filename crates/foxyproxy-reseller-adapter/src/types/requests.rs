/*
[INPUT]:  Mandatory mutation fields and optional write properties
[OUTPUT]: JSON request bodies with optional keys omitted when absent
[POS]:    Data layer - request body construction for mutating calls
[UPDATE]: When the API adds common write properties or new mutation fields
*/

use serde_json::{Map, Value};

/// Optional properties accepted by account operations that write data
/// (activate, deactivate, update-password, delete, copy).
///
/// Both fields are additive: a mutation issued without any write parameters
/// still succeeds using only its mandatory fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteParameters {
    /// Free-form comment recorded with the change.
    pub comment: Option<String>,
    /// Names of the nodes the mutation targets. Empty means unspecified.
    pub node_names: Vec<String>,
}

impl WriteParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_node_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.node_names.is_empty()
    }
}

/// Assembles a mutation body field by field.
///
/// Keys are only inserted when a value is actually present: the API
/// distinguishes an absent `nodeNames` key from an empty list, so empty
/// optionals are dropped rather than serialized as `null` or `[]`. A builder
/// that never received a field yields no body at all.
#[derive(Debug, Default)]
pub(crate) struct MutationBody {
    fields: Map<String, Value>,
}

impl MutationBody {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a mandatory field.
    pub(crate) fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Merge the optional common write properties into the body.
    pub(crate) fn write_parameters(mut self, params: Option<&WriteParameters>) -> Self {
        if let Some(params) = params {
            if let Some(comment) = &params.comment {
                self.fields
                    .insert("comment".to_string(), Value::from(comment.clone()));
            }
            if !params.node_names.is_empty() {
                self.fields
                    .insert("nodeNames".to_string(), Value::from(params.node_names.clone()));
            }
        }
        self
    }

    /// Finish the body. `None` means the request carries no body.
    pub(crate) fn into_value(self) -> Option<Value> {
        if self.fields.is_empty() {
            None
        } else {
            Some(Value::Object(self.fields))
        }
    }
}
