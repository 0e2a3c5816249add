use super::text::{pad, single_line, truncate};
use is_terminal::IsTerminal;
use mindbridge_engine::RenderFrame;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const MAX_CELL_WIDTH: usize = 40;
const MIN_CELL_WIDTH: usize = 8;
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub max_cell_width: usize,
    pub color: bool,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            max_cell_width: MAX_CELL_WIDTH,
            color: false,
        }
    }

    /// Narrower cells and bold headers when stdout is a terminal.
    pub fn detect(column_count: usize) -> Self {
        if !std::io::stdout().is_terminal() {
            return Self::plain();
        }

        let max_cell_width = match terminal_size() {
            Some((Width(width), _)) if column_count > 0 => {
                let per_column = (width as usize) / column_count;
                per_column
                    .saturating_sub(COLUMN_GAP.len())
                    .clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
            }
            _ => MAX_CELL_WIDTH,
        };

        Self {
            max_cell_width,
            color: true,
        }
    }
}

pub fn render(frame: &RenderFrame) -> String {
    render_with(frame, RenderOptions::detect(frame.columns.len()))
}

pub fn render_with(frame: &RenderFrame, options: RenderOptions) -> String {
    // Action columns carry no text; leave them out of the text layout
    let shown: Vec<usize> = (0..frame.columns.len())
        .filter(|&i| {
            frame.columns[i].name.is_some()
                || frame.rows.iter().any(|row| !row.cells[i].is_empty())
        })
        .collect();

    let headers: Vec<String> = shown
        .iter()
        .map(|&i| frame.columns[i].name.clone().unwrap_or_default())
        .collect();

    let cells: Vec<Vec<String>> = frame
        .rows
        .iter()
        .map(|row| {
            shown
                .iter()
                .map(|&i| truncate(&single_line(&row.cells[i]), options.max_cell_width))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    if let Some(caption) = &frame.caption {
        let caption = if options.color {
            caption.bold().to_string()
        } else {
            caption.clone()
        };
        out.push_str(&caption);
        out.push_str("\n\n");
    }

    let header_line = join_cells(&headers, &widths);
    if options.color {
        out.push_str(&header_line.bold().to_string());
    } else {
        out.push_str(&header_line);
    }
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&join_cells(&rule, &widths));
    out.push('\n');

    for row in &cells {
        out.push_str(&join_cells(row, &widths));
        out.push('\n');
    }

    if let Some(placeholder) = &frame.placeholder {
        out.push_str(placeholder);
        out.push('\n');
    }

    if !frame.loading {
        out.push('\n');
        out.push_str(&footer(frame));
        out.push('\n');
    }

    out
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn footer(frame: &RenderFrame) -> String {
    let page = &frame.page;
    if page.controls_visible {
        format!(
            "Page {} of {} (rows {}-{} of {})",
            page.current_page + 1,
            page.total_pages,
            page.first_item,
            page.last_item,
            page.total_items
        )
    } else if page.total_items == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", page.total_items)
    }
}
