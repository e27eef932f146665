//! Collaborators used by the terminal session

use super::traits::{BackHandler, SubmitHandler};
use crate::registration::MakerRecord;
use anyhow::Result;
use std::io::Write;

/// Keeps every accepted registration for the lifetime of the session
#[derive(Debug, Default)]
pub struct SubmissionLog {
    records: Vec<MakerRecord>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MakerRecord] {
        &self.records
    }

    /// Write each record as pretty JSON, one after another
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        for record in &self.records {
            serde_json::to_writer_pretty(&mut out, record)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl SubmitHandler for SubmissionLog {
    fn on_submit(&mut self, record: MakerRecord) -> Result<()> {
        tracing::info!(
            brand = %record.brand_name,
            maker = %record.maker_name,
            subscribed = record.subscribe_to_updates,
            "Registration submitted"
        );
        self.records.push(record);
        Ok(())
    }
}

/// Back navigation for a standalone session: leaving the form ends it
#[derive(Debug, Default)]
pub struct ExitOnBack {
    requested: bool,
}

impl ExitOnBack {
    pub fn requested(&self) -> bool {
        self.requested
    }
}

impl BackHandler for ExitOnBack {
    fn on_back(&mut self) {
        tracing::info!("Back requested, leaving registration form");
        self.requested = true;
    }
}
