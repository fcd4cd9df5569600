use serde_json::Value;
use std::str::FromStr;

use crate::error::Error;

/// Column name and whether the API must provide it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub required: bool,
}
const fn required(name: &'static str) -> Column {
    Column { name, required: true }
}
const fn optional(name: &'static str) -> Column {
    Column { name, required: false }
}

// sysObjectID, location_id, uptime and last_polled_timetaken are missing on
// some LibreNMS versions.
const FULL_COLUMNS: [Column; 14] = [
    required("hostname"),
    required("device_id"),
    required("hardware"),
    required("os"),
    required("ip"),
    required("sysName"),
    optional("sysObjectID"),
    required("serial"),
    required("location"),
    optional("location_id"),
    optional("uptime"),
    required("sysDescr"),
    required("status"),
    optional("last_polled_timetaken"),
];

const BASIC_COLUMNS: [Column; 9] = [
    required("hostname"),
    required("device_id"),
    required("hardware"),
    required("os"),
    required("ip"),
    required("sysName"),
    required("serial"),
    required("location"),
    required("status"),
];

/// Which fixed list of columns ends up in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSet {
    #[default]
    Full,
    Basic,
}
impl ColumnSet {
    pub fn columns(&self) -> &'static [Column] {
        match self {
            ColumnSet::Full => &FULL_COLUMNS,
            ColumnSet::Basic => &BASIC_COLUMNS,
        }
    }
}
impl FromStr for ColumnSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ColumnSet::Full),
            "basic" => Ok(ColumnSet::Basic),
            other => Err(Error::Config(format!(
                "unknown column set '{other}' (expected 'full' or 'basic')"
            ))),
        }
    }
}

/// One device row, cells in table column order
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRecord {
    cells: Vec<Value>,
}
impl DeviceRecord {
    pub(crate) fn new(cells: Vec<Value>) -> DeviceRecord {
        DeviceRecord { cells }
    }
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }
    /// Hostname is always the first column
    pub fn hostname(&self) -> &str {
        self.cells.first().and_then(Value::as_str).unwrap_or_default()
    }
}

/// Devices sorted by hostname, projected onto a fixed column list
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTable {
    columns: Vec<String>,
    rows: Vec<DeviceRecord>,
}
impl DeviceTable {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<DeviceRecord>) -> DeviceTable {
        DeviceTable { columns, rows }
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn rows(&self) -> &[DeviceRecord] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Look up a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.cells.get(col)
    }
}

/// Render a cell the way it appears in text outputs
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn column_sets_have_fixed_shapes() {
        let full: Vec<&str> = ColumnSet::Full.columns().iter().map(|c| c.name).collect();
        assert_eq!(full.len(), 14);
        assert_eq!(full[0], "hostname");
        assert_eq!(full[13], "last_polled_timetaken");

        let basic: Vec<&str> = ColumnSet::Basic.columns().iter().map(|c| c.name).collect();
        assert_eq!(basic.len(), 9);
        assert!(ColumnSet::Basic.columns().iter().all(|c| c.required));
    }

    #[test]
    fn parses_column_set_names() {
        assert_eq!("basic".parse::<ColumnSet>().unwrap(), ColumnSet::Basic);
        assert_eq!(" FULL ".parse::<ColumnSet>().unwrap(), ColumnSet::Full);
        assert!("wide".parse::<ColumnSet>().is_err());
    }

    #[test]
    fn cells_render_as_plain_text() {
        assert_eq!(cell_to_string(&Value::Null), "");
        assert_eq!(cell_to_string(&json!("r1.lab")), "r1.lab");
        assert_eq!(cell_to_string(&json!(42)), "42");
        assert_eq!(cell_to_string(&json!(0.25)), "0.25");
        assert_eq!(cell_to_string(&json!(true)), "true");
        assert_eq!(cell_to_string(&json!(["a", 1])), "[\"a\",1]");
    }

    #[test]
    fn table_lookup_by_column_name() {
        let table = DeviceTable::new(
            vec!["hostname".into(), "device_id".into()],
            vec![DeviceRecord::new(vec![json!("core1"), json!(7)])],
        );
        assert_eq!(table.get(0, "device_id"), Some(&json!(7)));
        assert_eq!(table.get(0, "serial"), None);
        assert_eq!(table.get(1, "hostname"), None);
        assert_eq!(table.rows()[0].hostname(), "core1");
    }
}
