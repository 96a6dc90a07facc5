//! Markdown export functionality

use crate::error::Result;
use crate::statement::Statement;
use std::fmt::Write as _;
use std::path::Path;

/// Marker shown after the label of rows that carry the add-row affordance.
const EXPAND_MARKER: &str = "[+]";

/// Render the statement as a markdown table.
pub fn render_markdown(statement: &Statement) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, statement);
    out
}

/// Write the statement to a markdown file
pub fn write_markdown(path: &Path, statement: &Statement) -> Result<()> {
    std::fs::write(path, render_markdown(statement))?;
    Ok(())
}

fn write_table(out: &mut String, statement: &Statement) -> std::fmt::Result {
    writeln!(out, "# Profit & Loss")?;
    writeln!(out)?;

    if statement.rows.is_empty() {
        writeln!(out, "*Empty statement*")?;
        return Ok(());
    }

    write!(out, "|")?;
    for column in &statement.columns {
        write!(out, " {} |", escape_markdown(&column.header))?;
    }
    writeln!(out)?;

    write!(out, "|")?;
    for (i, _) in statement.columns.iter().enumerate() {
        // Text column left, figures right.
        write!(out, "{}", if i == 0 { "---|" } else { "---:|" })?;
    }
    writeln!(out)?;

    for row in &statement.rows {
        write!(out, "|")?;
        for (i, column) in statement.columns.iter().enumerate() {
            let text = escape_markdown(row.cell(&column.key).unwrap_or(""));
            if i == 0 && (row.is_header || row.is_total) && !text.is_empty() {
                write!(out, " **{}**", text)?;
            } else {
                write!(out, " {}", text)?;
            }
            if i == 0 && row.is_others {
                write!(out, " {}", EXPAND_MARKER)?;
            }
            write!(out, " |")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::EditEvent;
    use finsheet_engine::model::{ColumnKey, LineKind, RowId};

    #[test]
    fn test_render_seeded_statement() {
        let statement = Statement::seeded();
        let md = render_markdown(&statement);
        let lines: Vec<&str> = md.lines().collect();

        assert_eq!(lines[0], "# Profit & Loss");
        assert_eq!(
            lines[2],
            "| million | 2021 | 2022 | 2024 | Variance | Variance % |"
        );
        assert_eq!(lines[3], "|---|---:|---:|---:|---:|---:|");
        assert_eq!(lines[4], "| **Revenue** |  |  |  |  |  |");
        assert!(md.contains("| Other revenue [+] |"));
        assert!(md.contains("| **Total Revenue** | 165000.00 |"));
        assert!(md.contains("| Product sales | 120,000 | 135,500 | 150,250 | 30250.00 | 25.21% |"));
        assert_eq!(lines.len(), 4 + statement.rows.len());
    }

    #[test]
    fn test_render_escapes_pipes() {
        let mut statement = Statement::seeded();
        statement.edit(&EditEvent::new(RowId(2), ColumnKey::Label, "A|B"));
        assert!(render_markdown(&statement).contains("| A\\|B |"));
    }

    #[test]
    fn test_render_empty_statement() {
        let md = render_markdown(&Statement::new());
        assert!(md.contains("*Empty statement*"));
    }

    #[test]
    fn test_write_markdown_to_file() {
        let path = std::env::temp_dir().join(format!(
            "finsheet_md_{}_{:?}.md",
            std::process::id(),
            std::thread::current().id(),
        ));
        struct Cleanup(std::path::PathBuf);
        impl Drop for Cleanup {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
        let _cleanup = Cleanup(path.clone());

        let mut statement = Statement::seeded();
        statement.add_row(RowId(4), LineKind::Revenue).unwrap();
        write_markdown(&path, &statement).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("New Row 12"));
        assert_eq!(written, render_markdown(&statement));
    }
}
