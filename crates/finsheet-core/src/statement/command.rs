//! Textual commands.
//!
//! ```text
//! set <row-id> <column> <value...>   edit one cell (value may contain spaces)
//! add-row <anchor-id> [type]         insert before anchor; type defaults to the anchor's
//! add-column                         append a text column
//! ```

use super::{EditEvent, EditOutcome, IgnoreReason, Statement};
use crate::error::{FinsheetError, Result};
use finsheet_engine::model::{ColumnKey, LineKind, RowId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Edit(EditEvent),
    AddRow { anchor: RowId, kind: Option<LineKind> },
    AddColumn,
}

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Edited(EditOutcome),
    RowAdded(RowId),
    RowRejected(IgnoreReason),
    ColumnAdded(ColumnKey),
}

/// Split off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

impl std::str::FromStr for Command {
    type Err = FinsheetError;

    fn from_str(input: &str) -> Result<Self> {
        let (verb, rest) = next_word(input);
        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (row, rest) = next_word(rest);
                let (column, rest) = next_word(rest);
                if row.is_empty() || column.is_empty() {
                    return Err(FinsheetError::command(
                        input,
                        "usage: set <row-id> <column> <value>",
                    ));
                }
                let row_id = row
                    .parse::<RowId>()
                    .map_err(|e| FinsheetError::command(input, e))?;
                // A single separator space; the rest is the value verbatim.
                let value = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
                Ok(Command::Edit(EditEvent::new(
                    row_id,
                    ColumnKey::parse(column),
                    value,
                )))
            }
            "add-row" => {
                let (anchor, rest) = next_word(rest);
                let (kind, extra) = next_word(rest);
                if anchor.is_empty() || !extra.trim().is_empty() {
                    return Err(FinsheetError::command(
                        input,
                        "usage: add-row <anchor-id> [type]",
                    ));
                }
                let anchor = anchor
                    .parse::<RowId>()
                    .map_err(|e| FinsheetError::command(input, e))?;
                let kind = if kind.is_empty() {
                    None
                } else {
                    let kind = kind
                        .parse::<LineKind>()
                        .map_err(|e| FinsheetError::command(input, e))?;
                    if kind.is_total() {
                        return Err(FinsheetError::command(
                            input,
                            format!("cannot insert a {} row", kind),
                        ));
                    }
                    Some(kind)
                };
                Ok(Command::AddRow { anchor, kind })
            }
            "add-column" => {
                if !rest.trim().is_empty() {
                    return Err(FinsheetError::command(input, "add-column takes no arguments"));
                }
                Ok(Command::AddColumn)
            }
            "" => Err(FinsheetError::command(input, "empty command")),
            other => Err(FinsheetError::command(
                input,
                format!("unknown command '{}'", other),
            )),
        }
    }
}

impl Statement {
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Edit(event) => CommandOutcome::Edited(self.edit(&event)),
            Command::AddRow { anchor, kind } => {
                let added = match kind {
                    Some(kind) => self.add_row(anchor, kind),
                    None => self.expand(anchor),
                };
                match added {
                    Ok(id) => CommandOutcome::RowAdded(id),
                    Err(reason) => CommandOutcome::RowRejected(reason),
                }
            }
            Command::AddColumn => CommandOutcome::ColumnAdded(self.add_column()),
        }
    }
}
