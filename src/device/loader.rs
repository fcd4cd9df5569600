use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::device::schema::{ColumnSet, DeviceRecord, DeviceTable, cell_to_string};
use crate::error::{Error, Result};

type FlatRow = IndexMap<String, Value>;

/// Flatten a device object, nested keys joined with '.'
pub fn flatten(device: &Map<String, Value>) -> FlatRow {
    let mut row = IndexMap::with_capacity(device.len());
    flatten_into(&mut row, None, device);
    row
}

fn flatten_into(row: &mut FlatRow, prefix: Option<&str>, object: &Map<String, Value>) {
    for (key, value) in object {
        let name = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match value {
            // empty objects contribute no columns
            Value::Object(inner) => flatten_into(row, Some(&name), inner),
            other => {
                row.insert(name, other.clone());
            }
        }
    }
}

/// Build the sorted, projected device table from raw API device objects
pub fn load_all_from(
    devices: &[Map<String, Value>],
    column_set: ColumnSet,
) -> Result<DeviceTable> {
    let mut rows: Vec<FlatRow> = devices.iter().map(flatten).collect();

    for (index, row) in rows.iter().enumerate() {
        match row.get("hostname") {
            None | Some(Value::Null) => {
                return Err(Error::Schema(format!("device at index {index} has no hostname")));
            }
            Some(_) => {}
        }
    }

    // stable, ties keep API order
    rows.sort_by_cached_key(|row| {
        row.get("hostname")
            .map(cell_to_string)
            .unwrap_or_default()
    });

    let present: IndexSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut columns = Vec::with_capacity(column_set.columns().len());
    for column in column_set.columns() {
        if !present.contains(column.name) && !rows.is_empty() {
            if column.required {
                return Err(Error::Schema(format!(
                    "required column '{}' is missing from the API response",
                    column.name
                )));
            }
            log::warn!(
                "optional column '{}' not returned by the API, leaving it empty",
                column.name
            );
        }
        columns.push(column.name.to_string());
    }

    let records = rows
        .into_iter()
        .map(|mut row| {
            let cells = columns
                .iter()
                .map(|c| row.swap_remove(c.as_str()).unwrap_or(Value::Null))
                .collect();
            DeviceRecord::new(cells)
        })
        .collect();

    Ok(DeviceTable::new(columns, records))
}
