use std::io::{self, Write};
use tictactoe_engine::{AuditReport, Player, audit_engine};

/// Audits the engine for both marks and prints one line per mark.
pub fn run_audit<W: Write>(output: &mut W) -> io::Result<Vec<(Player, AuditReport)>> {
    let mut reports = Vec::new();
    for mark in [Player::X, Player::O] {
        let report = audit_engine(mark);
        writeln!(
            output,
            "Engine as {}: {} games, {} wins, {} draws, {} losses",
            mark, report.games, report.engine_wins, report.draws, report.engine_losses
        )?;
        reports.push((mark, report));
    }
    Ok(reports)
}
