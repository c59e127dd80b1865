//! Shared schema types for nodegen
//!
//! This crate contains the data model for a resolved node configuration:
//! the root [`NodeConfig`], its function descriptors, and the recursive
//! input field schema. It is consumed by the generator crate and kept
//! separate so the projection logic never depends on how the value was
//! materialized.

use serde::{Deserialize, Serialize};

/// Root configuration value describing all function schemas.
///
/// Constructed once per invocation by the config resolver and read-only
/// thereafter. Unknown top-level keys (node name, description, ...) are
/// kept in `extra`. Config emission serializes the raw module value, not
/// this typed view, so nothing is lost there either way; this model exists
/// for the type projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub functions: Vec<FunctionConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A named function and its full input schema.
///
/// `name` is expected to be unique within a configuration. The order of
/// `inputs` drives the order of generated declaration fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<InputField>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single typed, possibly nested, input field schema.
///
/// A missing `required` means optional. The kind discriminant lives in the
/// `type` key of the source JSON and is flattened into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: InputKind,
}

/// The tagged kind of an input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputKind {
    String,
    Number,
    Boolean,
    /// Secrets are plain strings at the type level.
    Secret,
    Select {
        #[serde(default)]
        multiple: bool,
    },
    Array {
        #[serde(rename = "itemsType")]
        items_type: ArrayItems,
    },
    Object {
        fields: Vec<InputField>,
    },
    /// Kinds introduced after this tool shipped land here instead of
    /// failing deserialization. The projector maps them to `any`.
    #[serde(other)]
    Unknown,
}

/// Element type of an `array` input: a bare primitive tag, or a nested
/// schema descriptor (itself tagged on `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayItems {
    Primitive(String),
    Schema(Box<InputKind>),
}
