//! Terminal rendering.
//!
//! Renderers return strings so they can be tested without a terminal; handlers print them.
//! Column widths are measured with `unicode-width` on the plain text, and colour is applied
//! after padding so escape codes never skew the alignment.

use colored::{ColoredString, Colorize};
use counselapp::api::{Listing, Records};
use counselapp::commands::dashboard::{CollectionSummary, DashboardDataset, DataPoint};
use counselapp::commands::{CmdMessage, MessageLevel};
use counselapp::config::CounselConfig;
use counselapp::filter::FilterState;
use counselapp::forms::{CounselorForm, DATE_FORMAT, FORM_FIELDS, TIME_FORMAT};
use counselapp::model::{ContentStatus, Counselor, Status, UserStatus};
use counselapp::view::ViewMode;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 40;
const BAR_WIDTH: usize = 40;
const BAR: &str = "█";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(listing: &Listing) {
    if !listing.records.is_empty() {
        print!("{}", render_listing(listing));
    }
    print_messages(&listing.messages);
}

pub(super) fn render_listing(listing: &Listing) -> String {
    match &listing.records {
        Records::Students(students) => render_table(
            &["ID", "Email", "College", "Status"],
            students
                .iter()
                .map(|s| {
                    Row::new(
                        vec![s.id.to_string(), s.email.clone(), s.college.clone()],
                        s.status.into(),
                    )
                })
                .collect(),
        ),
        Records::Counselors(counselors) => render_table(
            &["ID", "Name", "Email", "College", "Status"],
            counselors
                .iter()
                .map(|c| {
                    Row::new(
                        vec![
                            c.id.to_string(),
                            c.full_name(),
                            c.email.clone(),
                            c.college.clone(),
                        ],
                        c.status.into(),
                    )
                })
                .collect(),
        ),
        Records::Content(items) => render_table(
            &["ID", "Title", "Category", "Author", "Date", "Status"],
            items
                .iter()
                .map(|item| {
                    Row::new(
                        vec![
                            item.id.to_string(),
                            item.title.clone(),
                            item.category.clone(),
                            item.author.clone(),
                            item.date.format(DATE_FORMAT).to_string(),
                        ],
                        item.status.into(),
                    )
                })
                .collect(),
        ),
    }
}

struct Row {
    cells: Vec<String>,
    status: Status,
}

impl Row {
    fn new(cells: Vec<String>, status: Status) -> Self {
        Self { cells, status }
    }
}

/// Every column but the last holds plain text; the last is the coloured status.
fn render_table(headers: &[&str], rows: Vec<Row>) -> String {
    let rows: Vec<(Vec<String>, Status)> = rows
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> = row
                .cells
                .iter()
                .map(|c| truncate_to_width(c, MAX_CELL_WIDTH))
                .collect();
            cells.push(row.status.to_string());
            (cells, row.status)
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for (cells, _) in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    out.push_str(&format!("{}\n", header_line.join("  ").trim_end().bold()));

    let last = headers.len() - 1;
    for (cells, status) in &rows {
        let mut line: Vec<String> = cells[..last]
            .iter()
            .enumerate()
            .map(|(i, c)| pad(c, widths[i]))
            .collect();
        line.push(status_colored(*status).to_string());
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn status_colored(status: Status) -> ColoredString {
    let label = status.to_string();
    match status {
        Status::User(UserStatus::Active) => label.green(),
        Status::User(UserStatus::Inactive) => label.red(),
        Status::Content(ContentStatus::Published) => label.green(),
        Status::Content(ContentStatus::Draft) => label.yellow(),
        Status::Content(ContentStatus::Archived) => label.dimmed(),
    }
}

pub(super) fn render_counselor(c: &Counselor) -> String {
    let fmt_opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let fields = [
        ("ID", c.id.to_string()),
        ("Name", c.full_name()),
        ("Email", c.email.clone()),
        (
            "Birthdate",
            fmt_opt(c.birthdate.map(|d| d.format(DATE_FORMAT).to_string())),
        ),
        (
            "Shift",
            format!(
                "{} - {}",
                fmt_opt(c.starting_shift.map(|t| t.format(TIME_FORMAT).to_string())),
                fmt_opt(c.ending_shift.map(|t| t.format(TIME_FORMAT).to_string())),
            ),
        ),
        ("College", c.college_assignment.clone()),
        ("Status", status_colored(c.status.into()).to_string()),
    ];
    render_pairs(&fields)
}

pub(super) fn render_form(form: &CounselorForm) -> String {
    let fields: Vec<(&str, String)> = FORM_FIELDS
        .iter()
        .map(|field| (*field, form.get(field).unwrap_or_default().to_string()))
        .collect();
    render_pairs(&fields)
}

fn render_pairs<K: AsRef<str>>(fields: &[(K, String)]) -> String {
    let key_width = fields
        .iter()
        .map(|(k, _)| k.as_ref().width())
        .max()
        .unwrap_or(0);
    fields
        .iter()
        .map(|(k, v)| format!("  {}  {}\n", pad(k.as_ref(), key_width).dimmed(), v))
        .collect()
}

pub(super) fn render_status(mode: ViewMode, collection: &str, filter: &FilterState) -> String {
    let mut out = format!("collection: {}\nmode: {}\n", collection, mode);
    let query = filter.normalized_query();
    if !query.is_empty() {
        out.push_str(&format!("search: {}\n", query));
    }
    if let Some(category) = &filter.category {
        out.push_str(&format!("category: {}\n", category));
    }
    if let Some(status) = filter.status {
        out.push_str(&format!("status: {}\n", status));
    }
    out
}

pub(super) fn render_dashboard(ds: &DashboardDataset, summaries: &[CollectionSummary]) -> String {
    let mut out = format!("{} ({})\n", ds.college.bold(), ds.range);

    out.push_str(&format!(
        "\n{} (total {})\n",
        "Consultations".bold(),
        ds.consultation_total()
    ));
    out.push_str(&render_bars(&ds.consultation, ""));

    out.push_str(&format!("\n{}\n", "Student classification".bold()));
    out.push_str(&render_bars(&ds.classification, "%"));

    out.push_str(&format!("\n{}\n", "Engagement".bold()));
    out.push_str(&render_bars(&ds.engagement, ""));

    if !summaries.is_empty() {
        out.push_str(&format!("\n{}\n", "Records".bold()));
        for summary in summaries {
            let counts: Vec<String> = summary
                .by_status
                .iter()
                .map(|s| format!("{} {}", s.count, s.status))
                .collect();
            out.push_str(&format!(
                "  {} {} ({})\n",
                pad(summary.collection.as_str(), 10),
                summary.total,
                counts.join(", ")
            ));
        }
    }
    out
}

fn render_bars(points: &[DataPoint], unit: &str) -> String {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1);
    let label_width = points.iter().map(|p| p.label.width()).max().unwrap_or(0);
    points
        .iter()
        .map(|p| {
            let len = (p.value as usize * BAR_WIDTH) / max as usize;
            format!(
                "  {}  {} {}{}\n",
                pad(&p.label, label_width),
                BAR.repeat(len).cyan(),
                p.value,
                unit
            )
        })
        .collect()
}

pub(super) fn render_config(config: &CounselConfig) -> String {
    let fields = [
        ("id_floor", config.id_floor.to_string()),
        ("default_collection", config.default_collection.clone()),
        ("seed_mock_data", config.seed_mock_data.to_string()),
        ("log_filter", config.log_filter.clone()),
    ];
    fields
        .iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}
