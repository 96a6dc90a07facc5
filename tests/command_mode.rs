//! Integration tests for command mode (-c/--command flag)

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        // Tests must be deterministic and not depend on a user's ~/.config/finsheet/config.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn line_starting<'a>(stdout: &'a str, prefix: &str) -> &'a str {
    stdout
        .lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?} in:\n{}", prefix, stdout))
}

#[test]
fn test_seeded_statement_renders() {
    let (stdout, _, code) = run_command(&[]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("# Profit & Loss"));
    assert_eq!(
        line_starting(&stdout, "| **Total Revenue**"),
        "| **Total Revenue** | 165000.00 | 183700.00 | 203000.50 |  |  |"
    );
    assert_eq!(
        line_starting(&stdout, "| **Total Expenses**"),
        "| **Total Expenses** | 110000.00 | 116300.00 |  |  |  |"
    );
}

#[test]
fn test_edit_recomputes_variance_and_totals() {
    let (stdout, _, code) = run_command(&[
        "-c",
        "set 2 2021 1,000.00",
        "-c",
        "set 2 2024 1500",
    ]);
    assert_eq!(code, 0);
    assert_eq!(
        line_starting(&stdout, "| Product sales"),
        "| Product sales | 1,000 | 135,500 | 1,500 | 500.00 | 50.00% |"
    );
    assert!(line_starting(&stdout, "| **Total Revenue**").contains("| 46000.00 |"));
}

#[test]
fn test_non_numeric_edit_is_kept() {
    let (stdout, _, code) = run_command(&["-c", "set 9 2022 abc"]);
    assert_eq!(code, 0);
    assert!(line_starting(&stdout, "| Rent").starts_with("| Rent | 12,000 | abc |"));
    assert!(line_starting(&stdout, "| **Total Expenses**").contains("| 104300.00 |"));
}

#[test]
fn test_add_row_and_column() {
    let (stdout, _, code) = run_command(&["-c", "add-row 4", "-c", "add-column"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("| New Column 6 |"));

    let lines: Vec<&str> = stdout.lines().collect();
    let new_row = lines
        .iter()
        .position(|line| line.starts_with("| New Row 12 |"))
        .unwrap();
    assert!(lines[new_row + 1].starts_with("| Other revenue [+] |"));
}

#[test]
fn test_ignored_edit_warns_but_succeeds() {
    let (stdout, stderr, code) = run_command(&["-c", "set 5 2021 1"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("row 5 is not editable"));
    assert!(line_starting(&stdout, "| **Total Revenue**").contains("165000.00"));
}

#[test]
fn test_json_output() {
    let (stdout, _, code) = run_command(&["--format", "json"]);
    assert_eq!(code, 0);
    assert!(stdout.trim_start().starts_with('{'));
    assert!(stdout.contains("\"variancePercentage\": \"25.21%\""));
    assert!(stdout.contains("\"type\": \"TotalExpense\""));
}

#[test]
fn test_malformed_command_exit_code() {
    let (_, stderr, code) = run_command(&["-c", "delete 3"]);
    assert!(stderr.contains("Error: Invalid command 'delete 3'"));
    assert_eq!(code, 1);
}

#[test]
fn test_json_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.json");
    let path_arg = path.to_string_lossy().to_string();

    let (stdout, _, code) = run_command(&["-c", "add-column", "-f", "json", "-o", &path_arg]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Exported to "));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"field\": \"newColumn6\""));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_add_total_row_is_rejected() {
    let (stdout, stderr, code) = run_command(&["-c", "add-row 4 totalrevenue"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("cannot insert a TotalRevenue row"));
    assert!(stdout.is_empty());
}
