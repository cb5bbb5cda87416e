//! Form schema: the per-field rule table, fixed at form-definition time.

use crate::rules::Rule;
use crate::value::FieldKind;

/// One field's declaration: name, declared kind, and ordered rule chain.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Create a field declaration.
    pub fn new(name: impl Into<String>, kind: FieldKind, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            kind,
            rules,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The ordered rule chain. Rules run front to back; first failure wins.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Ordered collection of field declarations for one form.
///
/// Fields not declared here are always valid and keep the default
/// [`FieldKind::Text`] coercion.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// All declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared kind of a field; undeclared fields default to text.
    pub fn kind_of(&self, name: &str) -> FieldKind {
        self.field(name).map(FieldSpec::kind).unwrap_or_default()
    }

    /// Rule chain of a field; undeclared fields have an empty chain.
    pub fn rules_of(&self, name: &str) -> &[Rule] {
        self.field(name).map(FieldSpec::rules).unwrap_or(&[])
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fluent builder for [`Schema`].
///
/// # Example
///
/// ```
/// use formwork::rules::{email, min_length, required};
/// use formwork::schema::Schema;
///
/// let schema = Schema::builder()
///     .field("name", [required(), min_length(3)])
///     .field("email", [required(), email()])
///     .checkbox("terms", [required()])
///     .build();
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Declare a text field with its rule chain.
    pub fn field(self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.push(name, FieldKind::Text, rules)
    }

    /// Declare a checkbox-like field with its rule chain.
    pub fn checkbox(self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.push(name, FieldKind::Checkbox, rules)
    }

    fn push(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        self.fields
            .push(FieldSpec::new(name, kind, rules.into_iter().collect()));
        self
    }

    /// Finish building.
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}
