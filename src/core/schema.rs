use serde::Serialize;
use std::collections::BTreeMap;

/// Primitive kinds understood by the completion API's response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A declared JSON response shape, sent alongside structured prompts.
///
/// The model is asked to answer with a document matching this schema. The reply is
/// still parsed defensively, since conformance is best effort on the provider side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
}

impl Schema {
    fn leaf(kind: SchemaType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: Some(description.into()),
            enum_values: Vec::new(),
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    /// A described string field.
    pub fn string(description: impl Into<String>) -> Self {
        Self::leaf(SchemaType::String, description)
    }

    /// A described number field.
    pub fn number(description: impl Into<String>) -> Self {
        Self::leaf(SchemaType::Number, description)
    }

    /// A string field restricted to `values`.
    pub fn enumeration<I, S>(values: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: values.into_iter().map(Into::into).collect(),
            ..Self::leaf(SchemaType::String, description)
        }
    }

    /// An object whose listed properties are all required, in the given order.
    pub fn object<I, S>(props: I) -> Self
    where
        I: IntoIterator<Item = (S, Schema)>,
        S: Into<String>,
    {
        let mut properties = BTreeMap::new();
        let mut order = Vec::new();
        for (name, schema) in props {
            let name = name.into();
            order.push(name.clone());
            properties.insert(name, schema);
        }
        Self {
            kind: SchemaType::Object,
            description: None,
            enum_values: Vec::new(),
            items: None,
            properties,
            required: order.clone(),
            property_ordering: order,
        }
    }

    /// An array of `item`.
    pub fn array_of(item: Schema) -> Self {
        Self {
            kind: SchemaType::Array,
            description: None,
            enum_values: Vec::new(),
            items: Some(Box::new(item)),
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }
}
