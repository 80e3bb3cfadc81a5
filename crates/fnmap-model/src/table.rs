#![deny(unsafe_code)]

use std::fmt;

/// Distinguished catch-all function group.
pub const OTHER_GROUP: &str = "OTHER";

/// The three raw columns, in schema order. Used as the exact-match
/// duplicate key.
pub const RAW_KEY_COLUMNS: [Column; 3] = [Column::Title, Column::Functions, Column::FunctionGroup];

/// The derived columns, used as the case/order-insensitive duplicate key.
pub const UPPERCASE_KEY_COLUMNS: [Column; 3] = [
    Column::UppercaseTitle,
    Column::UppercaseFunctions,
    Column::UppercaseGroup,
];

/// A single cell of the audited table.
///
/// `Tokens` holds a function list (split on `,`); everything else is plain
/// text. `Missing` is an absent/blank value, which is a reportable
/// condition rather than an error. The `Ord` impl puts grouping keys in a
/// stable natural order for report output.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Tokens(Vec<String>),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Tokens(tokens) => f.write_str(&tokens.join(", ")),
            CellValue::Missing => f.write_str("(null)"),
        }
    }
}

/// Addressable columns: the three loaded from the input file plus the
/// three derived by normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Column {
    Title,
    Functions,
    FunctionGroup,
    UppercaseTitle,
    UppercaseFunctions,
    UppercaseGroup,
}

impl Column {
    /// Column name as it appears in the input schema or report text.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Functions => "functions",
            Column::FunctionGroup => "function_group",
            Column::UppercaseTitle => "uppercase_title",
            Column::UppercaseFunctions => "uppercase_functions",
            Column::UppercaseGroup => "uppercase_group",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row as loaded from the input file. Immutable once loaded; blank
/// cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub title: Option<String>,
    pub functions: Option<String>,
    pub function_group: Option<String>,
}

impl Record {
    pub fn new(
        title: Option<String>,
        functions: Option<String>,
        function_group: Option<String>,
    ) -> Self {
        Self {
            title,
            functions,
            function_group,
        }
    }
}

/// A record augmented with the derived comparison columns. The original
/// fields are carried unchanged; normalization is append-only.
///
/// `uppercase_functions` keeps duplicate tokens: detecting them is one of
/// the audit goals.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRecord {
    pub record: Record,
    pub uppercase_title: Option<String>,
    pub uppercase_functions: Option<Vec<String>>,
    pub uppercase_group: Option<String>,
}

impl NormalizedRecord {
    /// Uniform cell accessor used by the generic checks.
    pub fn cell(&self, column: Column) -> CellValue {
        match column {
            Column::Title => text_cell(self.record.title.as_ref()),
            Column::Functions => text_cell(self.record.functions.as_ref()),
            Column::FunctionGroup => text_cell(self.record.function_group.as_ref()),
            Column::UppercaseTitle => text_cell(self.uppercase_title.as_ref()),
            Column::UppercaseFunctions => match &self.uppercase_functions {
                Some(tokens) => CellValue::Tokens(tokens.clone()),
                None => CellValue::Missing,
            },
            Column::UppercaseGroup => text_cell(self.uppercase_group.as_ref()),
        }
    }

    pub fn is_null(&self, column: Column) -> bool {
        self.cell(column).is_missing()
    }
}

fn text_cell(value: Option<&String>) -> CellValue {
    match value {
        Some(text) => CellValue::Text(text.clone()),
        None => CellValue::Missing,
    }
}
