//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sweeplog_domain::format_timestamp;
use sweeplog_engine::{BagStatus, HistoryIndex, RoomFrequency};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One row of the room inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    /// Room id
    pub room_id: String,
    /// Floor length
    pub length: u32,
    /// Floor width
    pub width: u32,
    /// Floor area
    pub area: u64,
    /// Number of recorded cleanings
    pub cleanings: usize,
    /// Most recent cleaning, formatted
    pub last_cleaned: Option<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in effect.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a frequency ranking as JSON.
    pub fn frequency_json(&self, ranking: &[RoomFrequency<'_>]) -> Result<String> {
        let rooms: Vec<serde_json::Value> = ranking
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "room": entry.room_id,
                    "cleanings": entry.count,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rooms)?)
    }

    /// Format a frequency ranking as a table.
    pub fn frequency_table(&self, ranking: &[RoomFrequency<'_>]) -> String {
        if ranking.is_empty() {
            return self.colorize("No rooms found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Room", "Cleanings"]);
        for (rank, entry) in ranking.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                entry.room_id.to_string(),
                entry.count.to_string(),
            ]);
        }

        self.render_table(builder)
    }

    /// Format the per-room cleaning history as JSON.
    pub fn history_json(&self, index: &HistoryIndex<'_>) -> Result<String> {
        let rooms: Vec<serde_json::Value> = index
            .iter()
            .map(|(room_id, events)| {
                let cleanings: Vec<String> = events
                    .iter()
                    .map(|event| format_timestamp(&event.timestamp))
                    .collect();
                serde_json::json!({
                    "room": room_id,
                    "cleanings": cleanings,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rooms)?)
    }

    /// Format a vacuum bag status as JSON.
    pub fn bag_json(&self, last_replaced: &str, status: &BagStatus) -> Result<String> {
        let value = serde_json::json!({
            "last_replaced": last_replaced,
            "coverage_sq_ft": status.coverage_sq_ft,
            "capacity_sq_ft": status.capacity_sq_ft,
            "remaining_sq_ft": status.remaining_sq_ft(),
            "overdue": status.is_overdue(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a coverage figure.
    pub fn coverage(&self, since: &str, sq_ft: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({ "since": since, "coverage_sq_ft": sq_ft });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text | OutputFormat::Table => {
                Ok(format!("{} SQ FT cleaned since {}", sq_ft, since))
            }
        }
    }

    /// Format the room inventory.
    pub fn inventory(&self, rows: &[InventoryRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.inventory_json(rows),
            OutputFormat::Table => Ok(self.inventory_table(rows)),
            OutputFormat::Text => Ok(self.inventory_text(rows)),
        }
    }

    fn inventory_json(&self, rows: &[InventoryRow]) -> Result<String> {
        let rooms: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "room": row.room_id,
                    "length": row.length,
                    "width": row.width,
                    "area_sq_ft": row.area,
                    "cleanings": row.cleanings,
                    "last_cleaned": row.last_cleaned,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rooms)?)
    }

    fn inventory_table(&self, rows: &[InventoryRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No rooms found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Room", "Size", "Area (SQ FT)", "Cleanings", "Last Cleaned"]);
        for row in rows {
            builder.push_record([
                row.room_id.clone(),
                format!("{}x{}", row.length, row.width),
                row.area.to_string(),
                row.cleanings.to_string(),
                row.last_cleaned.clone().unwrap_or_else(|| "never".to_string()),
            ]);
        }

        self.render_table(builder)
    }

    fn inventory_text(&self, rows: &[InventoryRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No rooms found.", "yellow");
        }

        rows.iter()
            .map(|row| {
                format!(
                    "{} ({}x{}, {} SQ FT): cleaned {} times, last {}",
                    row.room_id,
                    row.length,
                    row.width,
                    row.area,
                    row.cleanings,
                    row.last_cleaned.as_deref().unwrap_or("never")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
