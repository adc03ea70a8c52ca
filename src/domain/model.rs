use serde::Serialize;

pub const ID: &str = "id";
pub const EMAIL: &str = "email";
pub const NAME: &str = "name";
pub const DEPARTMENT: &str = "department";
pub const HOURS_WORKED: &str = "hours_worked";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }
}

/// 所有報表共用的基礎欄位，依宣告順序排列。
pub const BASE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text(ID),
    FieldSpec::text(EMAIL),
    FieldSpec::text(NAME),
    FieldSpec::text(DEPARTMENT),
    FieldSpec::integer(HOURS_WORKED),
];

pub fn is_base_field(column: &str) -> bool {
    BASE_FIELDS.iter().any(|field| field.name == column)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub department: String,
    pub hours_worked: i64,
}

impl BaseRecord {
    pub fn field_values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.name.clone(),
            self.department.clone(),
            self.hours_worked.to_string(),
        ]
    }
}

/// A fully assembled report row.
///
/// `FIELDS` is the variant's declared field order: base fields first, then the
/// variant's extensions. It drives both the trace line and the JSON key order,
/// so `field_values` and the `Serialize` impl must follow it.
pub trait ReportRecord: Serialize {
    const FIELDS: &'static [FieldSpec];

    fn field_values(&self) -> Vec<String>;
}

pub const PAY: &str = "pay";
pub const PAYOUT: &str = "payout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutRecord {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(rename = "pay")]
    pub rate: i64,
    pub payout: i64,
}

impl ReportRecord for PayoutRecord {
    const FIELDS: &'static [FieldSpec] = &[
        BASE_FIELDS[0],
        BASE_FIELDS[1],
        BASE_FIELDS[2],
        BASE_FIELDS[3],
        BASE_FIELDS[4],
        FieldSpec::integer(PAY),
        FieldSpec::integer(PAYOUT),
    ];

    fn field_values(&self) -> Vec<String> {
        let mut values = self.base.field_values();
        values.push(self.rate.to_string());
        values.push(self.payout.to_string());
        values
    }
}

/// Column names from a file's first line. Lives only while that file is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|column| column.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First position of `name`; duplicated columns resolve to the leftmost one.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// The first column that is not a base field.
    pub fn extra_index(&self) -> Option<usize> {
        self.columns.iter().position(|column| !is_base_field(column))
    }
}

/// Everything an extra-field computer may draw on for one data row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub values: &'a [String],
    pub header: &'a Header,
    pub base: &'a BaseRecord,
    pub extra_index: Option<usize>,
    pub hours_index: Option<usize>,
}

impl RowContext<'_> {
    pub fn raw(&self, index: Option<usize>) -> Option<&str> {
        index.and_then(|i| self.values.get(i)).map(String::as_str)
    }
}
