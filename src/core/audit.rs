use crate::db::log::AuditRow;
use crate::db::state::StateStore;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "break_start" => Colour::Yellow,
        "break_end" => Colour::Cyan,
        "clear" => Colour::Red,
        "sync" | "import" | "export" => Colour::Blue,
        "filter" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_label(row: &AuditRow) -> String {
    let label = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if label.chars().count() > MAX_OP_WIDTH {
        let mut s: String = label.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        label
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_audit(store: &StateStore) -> AppResult<()> {
        let rows = store.audit_trail()?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = rows
            .iter()
            .map(|r| op_label(r).chars().count())
            .max()
            .unwrap_or(10);
        let id_w = rows
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for row in &rows {
            let label = op_label(row);

            // only the operation word is coloured
            let coloured = match label.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&row.operation).paint(op), rest)
                }
                None => color_for_operation(&row.operation)
                    .paint(label.as_str())
                    .to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&coloured).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                coloured,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
