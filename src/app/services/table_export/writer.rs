//! CSV rendering and file output for star-schema tables

use super::stats::{ExportSummary, ExportedTable};
use crate::app::models::{StarSchema, TableSummary};
use crate::config::ExportConfig;
use crate::constants::BOM;
use crate::{Error, Result};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Renders tables as quoted CSV and writes them to disk
#[derive(Debug, Clone, Default)]
pub struct TableExporter {
    config: ExportConfig,
}

impl TableExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Render rows as CSV text
    ///
    /// The header row lists `columns` unquoted; every data value is quoted.
    /// Rows are separated by `\n` with no trailing line break. An empty
    /// table is an error.
    pub fn render_table<T: Serialize>(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[T],
    ) -> Result<String> {
        if rows.is_empty() {
            return Err(Error::empty_table(table));
        }

        let mut out = Vec::new();
        if self.config.include_bom {
            let mut bom = [0u8; 4];
            out.extend_from_slice(BOM.encode_utf8(&mut bom).as_bytes());
        }

        let header = self.write_records(table, QuoteStyle::Necessary, |writer| {
            writer.write_record(columns)
        })?;
        out.extend_from_slice(&header);

        let body = self.write_records(table, QuoteStyle::Always, |writer| {
            for row in rows {
                writer.serialize(row)?;
            }
            Ok(())
        })?;
        out.extend_from_slice(&body);

        if out.last() == Some(&b'\n') {
            out.pop();
        }

        String::from_utf8(out).map_err(|e| {
            Error::csv_export(table, format!("Rendered text is not UTF-8: {}", e), None)
        })
    }

    fn write_records<F>(&self, table: &str, quote_style: QuoteStyle, write: F) -> Result<Vec<u8>>
    where
        F: FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(self.config.delimiter as u8)
            .quote_style(quote_style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        write(&mut writer)
            .map_err(|e| Error::csv_export(table, "Failed to write rows", Some(e)))?;

        writer
            .into_inner()
            .map_err(|e| Error::csv_export(table, format!("Failed to flush rows: {}", e), None))
    }

    /// Render one table and write it to `<dir>/<table>.csv`
    pub fn export_table<T: Serialize>(
        &self,
        summary: &TableSummary,
        rows: &[T],
        output_dir: &Path,
    ) -> Result<ExportedTable> {
        let content = self.render_table(summary.name, summary.columns, rows)?;
        let path = output_dir.join(format!("{}.csv", summary.name));

        std::fs::write(&path, &content)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        debug!(
            "Wrote {} rows of {} to {}",
            rows.len(),
            summary.name,
            path.display()
        );

        Ok(ExportedTable {
            table: summary.name.to_string(),
            path,
            rows: rows.len(),
            bytes: content.len() as u64,
        })
    }

    /// Write every table of the schema into `output_dir`
    ///
    /// The directory is created if needed. Tables without rows are skipped
    /// with a warning instead of failing the whole export.
    pub fn export_all(&self, schema: &StarSchema, output_dir: &Path) -> Result<ExportSummary> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;

        let tables = schema.tables();
        let mut summary = ExportSummary::default();

        for table in &tables {
            if table.row_count == 0 {
                warn!("Table {} has no rows; skipping", table.name);
                summary.skipped.push(table.name.to_string());
                continue;
            }
            let exported = self.export_schema_table(schema, table, output_dir)?;
            summary.written.push(exported);
        }

        info!(
            "Exported {} tables ({} rows, {} bytes) to {}",
            summary.written.len(),
            summary.total_rows(),
            summary.total_bytes(),
            output_dir.display()
        );

        Ok(summary)
    }

    fn export_schema_table(
        &self,
        schema: &StarSchema,
        table: &TableSummary,
        output_dir: &Path,
    ) -> Result<ExportedTable> {
        use crate::constants::tables;

        match table.name {
            tables::FACT_DEVELOPMENT => self.export_table(table, &schema.facts, output_dir),
            tables::DIM_COLLABORATOR => {
                self.export_table(table, &schema.dim_collaborator, output_dir)
            }
            tables::DIM_COUNTRY => self.export_table(table, &schema.dim_country, output_dir),
            tables::DIM_MANAGER => self.export_table(table, &schema.dim_manager, output_dir),
            tables::DIM_CATEGORY => self.export_table(table, &schema.dim_category, output_dir),
            tables::DIM_COMPETENCY => {
                self.export_table(table, &schema.dim_competency, output_dir)
            }
            tables::DIM_SKILL_TYPE => {
                self.export_table(table, &schema.dim_skill_type, output_dir)
            }
            other => Err(Error::csv_export(other, "Unknown star-schema table", None)),
        }
    }
}
