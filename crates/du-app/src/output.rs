use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 2] = ["Style", "Conversion"];

/// Render `(style, conversion)` rows as a rounded two-column table.
///
/// Column widths follow terminal display width, so wide glyphs (emoji,
/// fullwidth forms) stay aligned. With `color`, borders and title are
/// magenta.
#[must_use]
pub fn render_table<'a>(
    title: &str,
    rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    color: bool,
) -> String {
    let rows: Vec<(&str, &str)> = rows.into_iter().collect();
    let widths = [
        column_width(HEADERS[0], rows.iter().map(|r| r.0)),
        column_width(HEADERS[1], rows.iter().map(|r| r.1)),
    ];
    // 2 cells of padding per column + 3 borders
    let total = widths[0] + widths[1] + 7;

    let paint = |s: String, bold: bool| -> String {
        match (color, bold) {
            (false, _) => s,
            (true, false) => s.magenta().to_string(),
            (true, true) => s.magenta().bold().to_string(),
        }
    };
    let rule = |left: char, mid: char, right: char| -> String {
        let line = format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(widths[0] + 2),
            "─".repeat(widths[1] + 2)
        );
        paint(line, false)
    };
    let row = |a: &str, b: &str, header: bool| -> String {
        let cell = |s: &str, w: usize| {
            let text = format!("{s}{}", " ".repeat(w.saturating_sub(s.width())));
            if header { paint(text, false) } else { text }
        };
        let bar = paint("│".to_string(), false);
        format!(
            "{bar} {} {bar} {} {bar}",
            cell(a, widths[0]),
            cell(b, widths[1])
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 5);
    if !title.is_empty() {
        let pad = total.saturating_sub(title.width()) / 2;
        lines.push(format!("{}{}", " ".repeat(pad), paint(title.to_string(), true)));
    }
    lines.push(rule('╭', '┬', '╮'));
    lines.push(row(HEADERS[0], HEADERS[1], true));
    lines.push(rule('├', '┼', '┤'));
    for &(a, b) in &rows {
        lines.push(row(a, b, false));
    }
    lines.push(rule('╰', '┴', '╯'));
    lines.join("\n")
}

/// Format an error for the terminal: canonical `_` become `-`.
#[must_use]
pub fn render_error(message: &str, color: bool) -> String {
    let message = message.replace('_', "-");
    if color {
        message.red().to_string()
    } else {
        message
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).fold(header.width(), usize::max)
}
