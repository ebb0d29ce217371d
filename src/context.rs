use chrono::{Local, NaiveDateTime};

const STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Per-run state captured once at startup.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    started: NaiveDateTime,
}

impl RunContext {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(started: NaiveDateTime) -> Self {
        Self { started }
    }

    /// Sortable timestamp shared by every artifact of this run.
    pub fn stamp(&self) -> String {
        self.started.format(STAMP_FORMAT).to_string()
    }

    pub fn config_file_name(&self) -> String {
        format!("configs_{}.txt", self.stamp())
    }

    /// `index` starts at 1.
    pub fn qr_file_name(&self, index: usize) -> String {
        format!("{:04}_qr_code_{}.png", index, self.stamp())
    }
}
