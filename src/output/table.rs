/// Renders an ASCII grid with centered headers and left-aligned cells.
///
/// Widths are measured in chars so accented names keep the columns aligned. A char is
/// not a terminal column though: wide CJK glyphs and combining marks still shift the
/// cells after them.
pub fn render<R: AsRef<[S]>, S: AsRef<str>>(headers: &[&str], rows: &[R]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.as_ref().chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&format_line(&widths, headers.iter().map(|h| h.to_string()), true));
    out.push_str(&border);
    for row in rows {
        let cells = (0..widths.len()).map(|i| {
            row.as_ref()
                .get(i)
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default()
        });
        out.push_str(&format_line(&widths, cells, false));
    }
    out.push_str(&border);
    out
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+\n", segments.join("+"))
}

fn format_line<I: Iterator<Item = String>>(widths: &[usize], cells: I, center: bool) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| {
            let gap = width - cell.chars().count();
            if center {
                let left = gap / 2;
                format!(" {}{}{} ", " ".repeat(left), cell, " ".repeat(gap - left))
            } else {
                format!(" {}{} ", cell, " ".repeat(gap))
            }
        })
        .collect();
    format!("|{}|\n", padded.join("|"))
}
