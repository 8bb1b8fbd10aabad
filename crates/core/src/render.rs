use crate::{
    grid::{ResolvedSlot, WeeklyGrid},
    time_format::format_clock_12h,
};

const EMPTY_CELL: &str = "-";
const SNAPSHOT_MARKER: &str = " *";

/// Text shown for a field that is missing inside an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            subject: "N/A".to_string(),
            teacher: "Not Assigned".to_string(),
            room: "N/A".to_string(),
        }
    }
}

fn field_line(value: Option<&String>, placeholder: &str, from_snapshot: bool) -> String {
    let mut line = value.map_or_else(|| placeholder.to_string(), String::clone);
    if from_snapshot {
        line.push_str(SNAPSHOT_MARKER);
    }
    line
}

fn cell_lines(cell: Option<&ResolvedSlot>, placeholders: &Placeholders) -> Vec<String> {
    let Some(slot) = cell else {
        return vec![EMPTY_CELL.to_string()];
    };
    let marked = slot.snapshot_fields;

    let mut lines = vec![
        field_line(slot.subject_name.as_ref(), &placeholders.subject, marked.subject),
        field_line(slot.teacher_name.as_ref(), &placeholders.teacher, marked.teacher),
        field_line(slot.room.as_ref(), &placeholders.room, marked.room),
    ];
    if let Some(slot_type) = slot.slot_type {
        let label = slot_type.label().to_string();
        lines.push(field_line(Some(&label), "", marked.slot_type));
    }
    lines
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn push_row(out: &mut String, columns: &[Vec<String>], widths: &[usize]) {
    let height = columns.iter().map(Vec::len).max().unwrap_or(1);
    for line in 0..height {
        out.push('|');
        for (column, width) in columns.iter().zip(widths) {
            let text = column.get(line).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", text, width = width));
        }
        out.push('\n');
    }
}

/// Renders the grid as a fixed-width text table.
///
/// Values marked with `*` are shown from the snapshot taken when the slot
/// was created.
pub fn render_grid(grid: &WeeklyGrid, placeholders: &Placeholders) -> String {
    let header: Vec<Vec<String>> = std::iter::once(vec!["Time".to_string()])
        .chain(grid.days().iter().map(|day| vec![day.code().to_string()]))
        .collect();

    let body: Vec<Vec<Vec<String>>> = grid
        .rows()
        .iter()
        .map(|row| {
            let label = format!(
                "{} - {}",
                format_clock_12h(row.time.start),
                format_clock_12h(row.time.end)
            );
            std::iter::once(vec![label])
                .chain(row.cells.iter().map(|cell| cell_lines(cell.as_ref(), placeholders)))
                .collect()
        })
        .collect();

    let mut widths = vec![0usize; header.len()];
    for row in std::iter::once(&header).chain(body.iter()) {
        for (width, column) in widths.iter_mut().zip(row) {
            let widest = column.iter().map(|line| width_of(line)).max().unwrap_or(0);
            *width = (*width).max(widest);
        }
    }

    let rule = separator(&widths);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    push_row(&mut out, &header, &widths);
    out.push_str(&rule);
    out.push('\n');
    for row in &body {
        push_row(&mut out, row, &widths);
        out.push_str(&rule);
        out.push('\n');
    }
    out
}
