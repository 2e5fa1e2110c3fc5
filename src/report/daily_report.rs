//! Daily registration report.
//!
//! Collects the clients registered on one day and renders them as plain text
//! laid out for one of three print formats.

use crate::models::Client;
use chrono::{DateTime, Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Paper layout for the printed report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    /// A4 portrait, 80 columns
    #[default]
    Portrait,

    /// A4 landscape, 120 columns
    Landscape,

    /// Receipt printer roll, 40 columns, one block per client
    Receipt,
}

impl PrintFormat {
    /// Line width in characters.
    pub fn width(self) -> usize {
        match self {
            Self::Portrait => 80,
            Self::Landscape => 120,
            Self::Receipt => 40,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Receipt => "receipt",
        }
    }
}

impl FromStr for PrintFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "receipt" => Ok(Self::Receipt),
            other => Err(format!(
                "unknown print format '{}' (expected portrait, landscape or receipt)",
                other
            )),
        }
    }
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One client line of the report, already in display form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub cpf: String,
    pub name: String,
    pub phone: String,
    pub status: String,
    pub medication: String,
    pub birth_date: String,
    pub support_done: bool,
}

impl ReportRow {
    fn from_client(client: &Client) -> Self {
        Self {
            cpf: client.cpf.formatted(),
            name: client.name.clone(),
            phone: client.phone.formatted(),
            status: client.short_treatment_status(),
            medication: client.medication.clone().unwrap_or_else(|| "-".to_string()),
            birth_date: client
                .birth_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
            support_done: client.support_done,
        }
    }

    fn support_label(&self) -> &'static str {
        if self.support_done {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Report of the clients registered on a single day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    /// Day the report covers
    pub date: NaiveDate,

    /// When the report was produced
    pub generated_at: DateTime<Local>,

    /// Whether any client has a medication recorded
    pub show_medication: bool,

    /// Whether any client is on antibiotic treatment
    pub show_birth_date: bool,

    pub rows: Vec<ReportRow>,
}

impl DailyReport {
    /// Build the report from the clients registered on `date`.
    ///
    /// Clients are listed in the order given.
    pub fn build(date: NaiveDate, generated_at: DateTime<Local>, clients: &[Client]) -> Self {
        Self {
            date,
            generated_at,
            show_medication: clients.iter().any(|c| c.medication.is_some()),
            show_birth_date: clients.iter().any(|c| c.treatment.antibiotic),
            rows: clients.iter().map(ReportRow::from_client).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Render the report as plain text for the given print format.
    pub fn render(&self, format: PrintFormat) -> String {
        let width = format.width();
        let mut lines = vec![
            "Daily Registration Report".to_string(),
            format!("Date: {}", self.date.format(DATE_FORMAT)),
            format!("Total registrations today: {}", self.total()),
            String::new(),
        ];

        if self.rows.is_empty() {
            lines.push("No clients registered today.".to_string());
        } else if format == PrintFormat::Receipt {
            self.render_blocks(width, &mut lines);
        } else {
            self.render_table(width, &mut lines);
        }

        lines.push(String::new());
        lines.push(format!(
            "Report generated at {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        ));

        let mut out = lines
            .iter()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    fn columns(&self) -> Vec<Column> {
        let mut columns = vec![
            Column::fixed("CPF", 14, |r| r.cpf.clone()),
            Column::flexible("Name", |r| r.name.clone()),
            Column::fixed("Phone", 15, |r| r.phone.clone()),
            Column::flexible("Status", |r| r.status.clone()),
        ];
        if self.show_medication {
            columns.push(Column::flexible("Medication", |r| r.medication.clone()));
        }
        if self.show_birth_date {
            columns.push(Column::fixed("Birth date", 10, |r| r.birth_date.clone()));
        }
        columns.push(Column::fixed("Support", 7, |r| r.support_label().to_string()));
        columns
    }

    fn render_table(&self, width: usize, lines: &mut Vec<String>) {
        let mut columns = self.columns();

        let fixed: usize = columns.iter().map(|c| c.width).sum();
        let separators = columns.len() - 1;
        let flexible = columns.iter().filter(|c| c.flexible).count();
        let spare = width.saturating_sub(fixed + separators);
        let share = spare / flexible;
        let mut leftover = spare % flexible;

        // Name is the first flexible column and takes the leftover
        for column in columns.iter_mut().filter(|c| c.flexible) {
            column.width = share + leftover;
            leftover = 0;
        }

        let header: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
        lines.push(join_cells(&columns, &header));
        lines.push("-".repeat(width));

        for row in &self.rows {
            let cells: Vec<String> = columns.iter().map(|c| (c.value)(row)).collect();
            lines.push(join_cells(&columns, &cells));
        }
    }

    fn render_blocks(&self, width: usize, lines: &mut Vec<String>) {
        let rule = "-".repeat(width);
        lines.push(rule.clone());

        for row in &self.rows {
            lines.extend(field_lines("CPF", &row.cpf, width));
            lines.extend(field_lines("Name", &row.name, width));
            lines.extend(field_lines("Phone", &row.phone, width));
            lines.extend(field_lines("Status", &row.status, width));
            if self.show_medication {
                lines.extend(field_lines("Medication", &row.medication, width));
            }
            if self.show_birth_date {
                lines.extend(field_lines("Birth date", &row.birth_date, width));
            }
            lines.extend(field_lines("Support", row.support_label(), width));
            lines.push(rule.clone());
        }
    }
}

struct Column {
    title: &'static str,
    width: usize,
    flexible: bool,
    value: fn(&ReportRow) -> String,
}

impl Column {
    fn fixed(title: &'static str, width: usize, value: fn(&ReportRow) -> String) -> Self {
        Self {
            title,
            width,
            flexible: false,
            value,
        }
    }

    fn flexible(title: &'static str, value: fn(&ReportRow) -> String) -> Self {
        Self {
            title,
            width: 0,
            flexible: true,
            value,
        }
    }
}

fn join_cells(columns: &[Column], cells: &[String]) -> String {
    columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| pad(&fit(cell, column.width), column.width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Label: value` wrapped to `width`, continuation lines indented under the value.
fn field_lines(label: &str, value: &str, width: usize) -> Vec<String> {
    let prefix = format!("{}: ", label);
    let indent = " ".repeat(prefix.chars().count());
    let available = width.saturating_sub(indent.len()).max(1);

    wrap(value, available)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { &prefix } else { &indent };
            format!("{}{}", lead, line)
        })
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split across lines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }

        if current_len > 0 && current_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('~');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
