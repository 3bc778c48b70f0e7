//! Markdown table rendering.

use crate::models::AddressRecord;

/// Report columns, in order.
pub const HEADER: [&str; 4] = ["IP", "GCP Project", "Status", "User"];

/// Left aligned cell padded to `width` characters, `|` escaped.
///
/// # Examples
/// ```
/// use gcp_vpc_ip_summary::output::format_cell;
/// assert_eq!(format_cell("ab", 4), "ab  ");
/// ```
pub fn format_cell(value: &str, width: usize) -> String {
    let escaped = escape_cell(value);
    format!("{escaped:<width$}")
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Render a pipe table with a header row and a `---` separator row.
pub fn render_table(header: &[&str], rows: &[Vec<&str>]) -> String {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| escape_cell(cell).chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .max(3)
        })
        .collect();

    let format_row = |cells: &[&str]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format_cell(cells.get(i).copied().unwrap_or(""), *w))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    let mut table = format_row(header);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    table.push_str(&format!("| {} |\n", separator.join(" | ")));
    for row in rows {
        table.push_str(&format_row(row.as_slice()));
    }
    table
}

/// Full report document for one subnet. `records` must already be sorted.
pub fn render_report(subnet: &str, records: &[AddressRecord]) -> String {
    let rows: Vec<Vec<&str>> = records.iter().map(|r| r.table_row().to_vec()).collect();
    format!(
        "# Reserved IPs for {subnet}\n\n{}",
        render_table(&HEADER, &rows)
    )
}
