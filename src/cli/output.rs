use super::Masthead;
use crate::ResultSet;
use colored::*;
use std::io::{self, Write};

const ENTRY_MARKER: &str = " - ";

pub fn write_masthead<W: Write>(out: &mut W, masthead: &Masthead) -> io::Result<()> {
    writeln!(out, "{}", masthead)
}

pub fn print_masthead(masthead: &Masthead) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_masthead(&mut out, masthead)?;
    out.flush()
}

/// Write every file heading followed by its non-empty result lines.
pub fn write_report<W: Write>(out: &mut W, results: &ResultSet, colored_output: bool) -> io::Result<()> {
    for (path, lines) in results.iter() {
        if colored_output {
            writeln!(out, "{}", path.green())?;
        } else {
            writeln!(out, "{}", path)?;
        }

        for line in lines.iter().filter(|line| !line.is_empty()) {
            if colored_output {
                writeln!(out, "{}{}", ENTRY_MARKER, line.yellow())?;
            } else {
                writeln!(out, "{}{}", ENTRY_MARKER, line)?;
            }
        }
    }

    Ok(())
}

pub fn print_report(results: &ResultSet, colored_output: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, results, colored_output)?;
    out.flush()
}
