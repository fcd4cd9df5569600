use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::device::DeviceTable;
use crate::device::schema::cell_to_string;
use crate::error::Error;
use crate::export::ExportFormat;

pub const SHEET_NAME: &str = "Sheet1";

/// Write `table` to `output_path` in `format`, returning the path written.
///
/// The path gets the format's extension appended when it is missing. An
/// existing file is overwritten.
pub fn export(
    table: &DeviceTable,
    format: ExportFormat,
    output_path: &Path,
) -> crate::error::Result<PathBuf> {
    let path = format.normalize_path(output_path);
    log::debug!("exporting {} devices as {format} to {}", table.len(), path.display());

    let written = match format {
        ExportFormat::Csv => write_csv_file(table, &path),
        ExportFormat::Excel => write_xlsx(table, &path),
    };
    written.map_err(|source| Error::Export {
        path: path.clone(),
        source,
    })?;

    log::info!("Wrote {} devices to {}", table.len(), path.display());
    Ok(path)
}

fn write_csv_file(table: &DeviceTable, path: &Path) -> Result<()> {
    let file = File::create(path).context("could not create csv file")?;
    write_csv(table, file)
}

/// Header row then one record per device, no index column
pub fn write_csv<W: io::Write>(table: &DeviceTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(table.columns())
        .context("failed writing csv header")?;
    for row in table.rows() {
        csv_writer
            .write_record(row.cells().iter().map(cell_to_string))
            .with_context(|| format!("failed writing csv row for {}", row.hostname()))?;
    }

    csv_writer.flush().context("failed flushing csv output")?;
    Ok(())
}

fn write_xlsx(table: &DeviceTable, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path).context("could not save workbook")?;
    Ok(())
}

/// Single `Sheet1` worksheet: bold header row, then one row per device
fn build_workbook(table: &DeviceTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let xlsx_row = index as u32 + 1;
        for (col, cell) in row.cells().iter().enumerate() {
            let xlsx_col = col as u16;
            match cell {
                Value::Null => {}
                Value::Bool(b) => {
                    worksheet.write_boolean(xlsx_row, xlsx_col, *b)?;
                }
                Value::Number(n) => match n.as_f64() {
                    Some(f) => {
                        worksheet.write_number(xlsx_row, xlsx_col, f)?;
                    }
                    None => {
                        worksheet.write_string(xlsx_row, xlsx_col, n.to_string())?;
                    }
                },
                other => {
                    worksheet
                        .write_string(xlsx_row, xlsx_col, cell_to_string(other))
                        .with_context(|| {
                            format!("failed writing cell for {}", row.hostname())
                        })?;
                }
            }
        }
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ColumnSet;
    use crate::device::schema::DeviceRecord;
    use serde_json::json;

    fn sample() -> DeviceTable {
        DeviceTable::new(
            vec![
                "hostname".into(),
                "device_id".into(),
                "location".into(),
                "uptime".into(),
            ],
            vec![
                DeviceRecord::new(vec![
                    json!("a-host"),
                    json!(1),
                    json!("DC1, rack 4"),
                    json!(3600),
                ]),
                DeviceRecord::new(vec![json!("b-host"), json!(2), json!("DC2"), Value::Null]),
            ],
        )
    }

    #[test]
    fn csv_has_header_and_no_index() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "hostname,device_id,location,uptime");
        assert_eq!(lines[1], "a-host,1,\"DC1, rack 4\",3600");
        assert_eq!(lines[2], "b-host,2,DC2,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn export_appends_extension_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export(&sample(), ExportFormat::Csv, &dir.path().join("devices")).unwrap();
        assert_eq!(path, dir.path().join("devices.csv"));
        assert!(path.exists());
    }

    #[test]
    fn workbook_has_a_single_sheet1() {
        let mut workbook = build_workbook(&sample()).unwrap();
        assert_eq!(workbook.worksheet_from_index(0).unwrap().name(), SHEET_NAME);
        assert_eq!(SHEET_NAME, "Sheet1");
        assert!(workbook.worksheet_from_index(1).is_err());
    }

    #[test]
    fn workbook_for_basic_columns_saves() {
        let devices = [("edge-1", 3), ("core-1", 7)];
        let table = DeviceTable::new(
            ColumnSet::Basic.columns().iter().map(|c| c.name.to_string()).collect(),
            devices
                .iter()
                .map(|(host, id)| {
                    let mut cells = vec![json!(host), json!(id)];
                    cells.resize(ColumnSet::Basic.columns().len() - 1, json!("x"));
                    cells.push(Value::Null);
                    DeviceRecord::new(cells)
                })
                .collect(),
        );

        let mut workbook = build_workbook(&table).unwrap();
        assert_eq!(workbook.worksheet_from_index(0).unwrap().name(), "Sheet1");
        assert!(workbook.worksheet_from_index(1).is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = export(&table, ExportFormat::Excel, &dir.path().join("basic")).unwrap();
        assert_eq!(path, dir.path().join("basic.xlsx"));
        assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn missing_directory_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("devices");
        let err = export(&sample(), ExportFormat::Csv, &target).unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
    }
}
