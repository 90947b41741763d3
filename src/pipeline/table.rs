//! HTML table fragment for internship rows

use crate::sql::{QueryResult, SqlValue};
use tera::escape_html;

/// Render `(title, link, stipend)` rows as an HTML table
///
/// Returns an empty string when there are no rows or when any row does not
/// have exactly three columns.
pub fn render(result: &QueryResult) -> String {
    if result.is_empty() || result.rows.iter().any(|row| row.len() != 3) {
        return String::new();
    }

    let mut html = String::from(
        r#"<table class="table table-striped table-bordered">
    <thead>
        <tr>
            <th>Internship Title</th>
            <th>Stipend</th>
        </tr>
    </thead>
    <tbody>
"#,
    );

    for row in &result.rows {
        html.push_str(&render_row(&row[0], &row[1], &row[2]));
    }

    html.push_str("    </tbody>\n</table>\n");
    html
}

fn render_row(title: &SqlValue, link: &SqlValue, stipend: &SqlValue) -> String {
    format!(
        r#"        <tr>
            <td><a href="{}" target="_blank">{}</a></td>
            <td>{}</td>
        </tr>
"#,
        escape_href(&link.to_string()),
        escape_html(&title.to_string()),
        escape_html(&stipend.to_string()),
    )
}

/// Escape a URL for a double-quoted attribute, leaving `/` readable
fn escape_href(url: &str) -> String {
    escape_html(url).replace("&#x2F;", "/")
}
