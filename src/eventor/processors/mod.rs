//! Table extraction from parsed Eventor responses.
//!
//! Every response shape is described by a static [`ShapeSpec`]; [`extract_table`]
//! walks the tree once per shape and never fails on missing paths.

pub mod disciplines;
pub mod shapes;

pub use disciplines::{disciplines_table, DISCIPLINE_COLUMNS};
pub use shapes::{
    competitor_count_table, entries_table, entry_fees_table, event_classes_table, events_table,
    memberships_table, organisations_table, COMPETITOR_COUNT, ENTRIES, ENTRY_FEES, EVENTS,
    EVENT_CLASSES, MEMBERSHIPS, ORGANISATIONS,
};

use crate::constants::MULTI_VALUE_SEPARATOR;
use crate::eventor::models::{ApiResponse, Record, Table};
use crate::eventor::xml::Element;

/// How a column value is read, relative to the record node or its group node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Text of the first node at the path.
    Text(&'static str),
    /// Attribute of the first node at the path; `"."` is the node itself.
    Attr(&'static str, &'static str),
    /// Texts of every node at the path joined with `", "`.
    JoinedText(&'static str),
}

impl Lookup {
    pub fn resolve(&self, node: &Element) -> Option<String> {
        match *self {
            Lookup::Text(path) => node.find_text(path).map(str::to_string),
            Lookup::Attr(path, name) => node.find_attribute(path, name).map(str::to_string),
            Lookup::JoinedText(path) => {
                let parts: Vec<&str> = node
                    .find_all(path)
                    .into_iter()
                    .filter_map(Element::text)
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(MULTI_VALUE_SEPARATOR))
                }
            }
        }
    }
}

/// One output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: &'static str,
    /// Optional sub-structure the lookup is relative to. When the group node is
    /// missing the column is null.
    pub group: Option<&'static str>,
    pub lookup: Lookup,
}

impl FieldSpec {
    pub const fn text(column: &'static str, path: &'static str) -> Self {
        FieldSpec {
            column,
            group: None,
            lookup: Lookup::Text(path),
        }
    }

    pub const fn attr(column: &'static str, path: &'static str, name: &'static str) -> Self {
        FieldSpec {
            column,
            group: None,
            lookup: Lookup::Attr(path, name),
        }
    }

    pub const fn joined(column: &'static str, path: &'static str) -> Self {
        FieldSpec {
            column,
            group: None,
            lookup: Lookup::JoinedText(path),
        }
    }

    pub const fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }
}

/// Fields read once from a single node and repeated on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSpec {
    pub path: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Complete description of one response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    pub name: &'static str,
    /// Path of the repeating record node, searched from the document root.
    pub record_path: &'static str,
    pub context: Option<ContextSpec>,
    pub fields: &'static [FieldSpec],
}

impl ShapeSpec {
    /// Column list: context columns first, then record columns.
    pub fn columns(&self) -> Vec<&'static str> {
        self.context
            .iter()
            .flat_map(|context| context.fields.iter())
            .chain(self.fields.iter())
            .map(|field| field.column)
            .collect()
    }
}

/// Extracts one record per `shape.record_path` match, in document order.
///
/// `NoData` yields an empty table with the full column list.
pub fn extract_table(response: &ApiResponse, shape: &ShapeSpec) -> Table {
    let mut table = Table::new(shape.columns());
    let Some(root) = response.root() else {
        return table;
    };

    let context_values: Vec<(&'static str, Option<String>)> = match &shape.context {
        Some(context) => {
            let node = root.find(context.path);
            context
                .fields
                .iter()
                .map(|field| {
                    let value = node.and_then(|n| resolve_field(n, field, &mut Vec::new()));
                    (field.column, value)
                })
                .collect()
        }
        None => Vec::new(),
    };

    for node in root.find_all(shape.record_path) {
        let mut record = Record::new();
        for (column, value) in &context_values {
            record.push(*column, value.clone());
        }
        record_fields(node, shape.fields, &mut record);
        table.push(record);
    }

    table
}

fn record_fields(node: &Element, fields: &[FieldSpec], record: &mut Record) {
    // Group nodes resolved so far for this record
    let mut groups: Vec<(&'static str, Option<&Element>)> = Vec::new();
    for field in fields {
        record.push(field.column, resolve_field(node, field, &mut groups));
    }
}

fn resolve_field<'a>(
    node: &'a Element,
    field: &FieldSpec,
    groups: &mut Vec<(&'static str, Option<&'a Element>)>,
) -> Option<String> {
    let scope = match field.group {
        None => Some(node),
        Some(group) => match groups.iter().find(|(path, _)| *path == group) {
            Some((_, resolved)) => *resolved,
            None => {
                let resolved = node.find(group);
                groups.push((group, resolved));
                resolved
            }
        },
    };
    scope.and_then(|scope| field.lookup.resolve(scope))
}
