use std::{fmt::Display, fs::File, path::Path};

use tracing::info;

use crate::{amount::format_amount, error::LedgerError, simulation::DailyReport};

impl Display for DailyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "### DAY {} ###", self.day)?;
        writeln!(
            f,
            "Profit from investments: {}",
            format_amount(self.investment_profit)
        )?;
        writeln!(f, "reinvestment:            {}", format_amount(self.reinvestment))?;
        writeln!(f, "principal invested:      {}", format_amount(self.total_invested))?;
        writeln!(f, "total returns:           {}", format_amount(self.total_returns))
    }
}

/// Writes daily reports to a CSV file as they are produced.
pub struct CsvExport {
    writer: csv::Writer<File>,
    rows: usize,
}

impl CsvExport {
    pub fn create(path: &Path) -> Result<Self, LedgerError> {
        let writer = csv::Writer::from_path(path)?;
        info!(path = %path.display(), "exporting daily reports");
        Ok(CsvExport { writer, rows: 0 })
    }

    pub fn write(&mut self, report: &DailyReport) -> Result<(), LedgerError> {
        self.writer.serialize(report)?;
        self.rows += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), LedgerError> {
        self.writer.flush()?;
        info!(rows = self.rows, "exported daily reports");
        Ok(())
    }
}
