use crate::error::{ChartSpecError, Result, ResultWithContext};
use serde::{Deserialize, Serialize};

/// Declared type of a dataset field, as reported by the data binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Date,
}

impl FieldType {
    pub fn is_quantitative(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Integer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Encoding role a column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    X,
    Y,
    Color,
    Size,
    Sort,
    Facet,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ColumnRole::X => "x",
            ColumnRole::Y => "y",
            ColumnRole::Color => "color",
            ColumnRole::Size => "size",
            ColumnRole::Sort => "sort",
            ColumnRole::Facet => "facet",
        };
        f.write_str(name)
    }
}

/// A resolved column. Immutable once resolved for a dataset binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub quantitative: bool,
}

impl Column {
    pub fn from_field(field: &SchemaField) -> Self {
        Self {
            name: field.name.clone(),
            quantitative: field.field_type.is_quantitative(),
        }
    }
}

/// Column names requested for each role. X and Y are required; the rest
/// are optional encodings a chart type may or may not use.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecColumns {
    pub x: Column,
    pub y: Column,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Column>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Column>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Column>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<Column>,
}

impl SpecColumns {
    /// Resolve role bindings against the dataset schema. Missing or unknown
    /// bindings fail synchronously, before any assembly runs.
    pub fn resolve(schema: &[SchemaField], roles: &RoleBindings) -> Result<Self> {
        Ok(Self {
            x: Self::required(schema, roles.x.as_deref(), ColumnRole::X)?,
            y: Self::required(schema, roles.y.as_deref(), ColumnRole::Y)?,
            color: Self::optional(schema, roles.color.as_deref(), ColumnRole::Color)?,
            size: Self::optional(schema, roles.size.as_deref(), ColumnRole::Size)?,
            sort: Self::optional(schema, roles.sort.as_deref(), ColumnRole::Sort)?,
            facet: Self::optional(schema, roles.facet.as_deref(), ColumnRole::Facet)?,
        })
    }

    fn required(schema: &[SchemaField], name: Option<&str>, role: ColumnRole) -> Result<Column> {
        let name = name.ok_or_else(|| {
            ChartSpecError::configuration(format!("No column bound to required role {role}"))
        })?;
        Self::lookup(schema, name).with_context(|| format!("Failed to resolve role {role}"))
    }

    fn optional(
        schema: &[SchemaField],
        name: Option<&str>,
        role: ColumnRole,
    ) -> Result<Option<Column>> {
        match name {
            Some(name) => {
                let column = Self::lookup(schema, name)
                    .with_context(|| format!("Failed to resolve role {role}"))?;
                Ok(Some(column))
            }
            None => Ok(None),
        }
    }

    fn lookup(schema: &[SchemaField], name: &str) -> Result<Column> {
        schema
            .iter()
            .find(|field| field.name == name)
            .map(Column::from_field)
            .ok_or_else(|| {
                ChartSpecError::configuration(format!("Column {name} not present in schema"))
            })
    }
}
