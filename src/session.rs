//! The interactive prompt → load → report loop.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::config::Catalog;
use crate::filters::{FilterSelection, collect_filters};
use crate::input::LineSource;
use crate::loader::load_data;
use crate::output::print_all;

/// Runs iterations until the user answers anything but `yes` to the restart
/// prompt. Each iteration loads its own table.
///
/// # Errors
///
/// Returns the first fatal error: closed input while collecting filters, or
/// a dataset that cannot be loaded.
pub fn run_session<S, W>(catalog: &Catalog, source: &mut S, out: &mut W) -> Result<()>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut iteration = 0usize;
    loop {
        iteration += 1;
        info!(iteration, "Starting session iteration");

        let selection = collect_filters(source, out)?;
        run_once(catalog, &selection, out)?;

        writeln!(out, "\nWould you like to restart? Enter yes or no.")?;
        out.flush()?;
        let answer = source.next_line()?;
        if !wants_restart(answer.as_deref()) {
            break;
        }
    }

    info!(iterations = iteration, "Session finished");
    Ok(())
}

/// Loads one selection and prints every report for it.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or output fails.
pub fn run_once<W: Write + ?Sized>(
    catalog: &Catalog,
    selection: &FilterSelection,
    out: &mut W,
) -> Result<()> {
    let table = load_data(catalog, selection)?;
    if table.is_empty() {
        writeln!(out, "\nNo trips match {selection}.")?;
        return Ok(());
    }

    print_all(&table, out)?;
    out.flush()?;
    Ok(())
}

/// `true` only for a case-insensitive `yes`; closed input counts as no.
#[must_use]
pub fn wants_restart(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.to_lowercase() == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_restart() {
        assert!(wants_restart(Some("yes")));
        assert!(wants_restart(Some("YES")));
        assert!(wants_restart(Some("Yes")));
        assert!(!wants_restart(Some("y")));
        assert!(!wants_restart(Some("no")));
        assert!(!wants_restart(Some("yes ")));
        assert!(!wants_restart(Some("")));
        assert!(!wants_restart(None));
    }
}
