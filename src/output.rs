//! Terminal output for comparisons, highlighted pages and scan tables

use crate::search::{Completion, MatchKind, Segment};
use crate::session::PageResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Color used for a highlighted segment, `None` for plain text
fn segment_spec(kind: MatchKind) -> Option<ColorSpec> {
    let bg = match kind {
        MatchKind::Plain => return None,
        MatchKind::Exact => Color::Yellow,
        MatchKind::Prefix => Color::Green,
        // orange
        MatchKind::Both => Color::Ansi256(208),
    };

    let mut spec = ColorSpec::new();
    spec.set_bg(Some(bg)).set_fg(Some(Color::Black));
    Some(spec)
}

/// Write the per-strategy summary of one page
pub fn write_comparison<W: WriteColor>(out: &mut W, result: &PageResult) -> io::Result<()> {
    let cmp = &result.comparison;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "Page {} of {}", result.page, result.page_count)?;
    out.reset()?;

    write_strategy(out, "Normal Search", cmp.normal.match_count, cmp.normal.operation_cost)?;
    write_strategy(out, "Trie Prefix Search", cmp.trie.match_count, cmp.trie.operation_cost)?;

    if cmp.candidates.is_empty() {
        writeln!(out, "Candidates: (none)")?;
    } else {
        writeln!(out, "Candidates: {}", cmp.candidates.join(", "))?;
    }

    Ok(())
}

fn write_strategy<W: WriteColor>(
    out: &mut W,
    name: &str,
    matches: usize,
    ops: usize,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", name)?;
    out.reset()?;
    write!(out, ": Matches=")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", matches)?;
    out.reset()?;
    writeln!(out, ", Ops={}", ops)
}

/// Write page text with matches highlighted
pub fn write_highlighted<W: WriteColor>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }

        match segment_spec(segment.kind) {
            Some(spec) => {
                out.set_color(&spec)?;
                write!(out, "{}", segment.text)?;
                out.reset()?;
            }
            None => write!(out, "{}", segment.text)?,
        }
    }

    if !segments.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

/// Write one row per scanned page plus totals
pub fn write_scan_table<W: WriteColor>(out: &mut W, results: &[PageResult]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        out,
        "{:>6} {:>8} {:>11} {:>9} {:>15} {:>13}",
        "Page", "Words", "Normal ops", "Trie ops", "Normal matches", "Trie matches"
    )?;
    out.reset()?;

    let mut totals = [0usize; 5];
    for r in results {
        let c = &r.comparison;
        let row = [
            c.page_words,
            c.normal.operation_cost,
            c.trie.operation_cost,
            c.normal.match_count,
            c.trie.match_count,
        ];
        for (total, value) in totals.iter_mut().zip(row) {
            *total += value;
        }

        writeln!(
            out,
            "{:>6} {:>8} {:>11} {:>9} {:>15} {:>13}",
            r.page, row[0], row[1], row[2], row[3], row[4]
        )?;
    }

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        out,
        "{:>6} {:>8} {:>11} {:>9} {:>15} {:>13}",
        "Total", totals[0], totals[1], totals[2], totals[3], totals[4]
    )?;
    out.reset()?;

    Ok(())
}

/// Write a completion next to its linear baseline
pub fn write_completion<W: WriteColor>(out: &mut W, completion: &Completion) -> io::Result<()> {
    writeln!(
        out,
        "Trie: {} candidates for {:?}, Ops={}",
        completion.candidates.len(),
        completion.prefix,
        completion.trie_ops
    )?;
    for candidate in &completion.candidates {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "  {}", candidate)?;
        out.reset()?;
    }
    writeln!(
        out,
        "Linear: {} matching words, Ops={}",
        completion.linear_matches.len(),
        completion.linear_ops
    )
}

/// Print a page comparison, optionally followed by the highlighted page
pub fn print_comparison(
    result: &PageResult,
    segments: Option<&[Segment]>,
    color: bool,
) -> io::Result<()> {
    let mut out = stdout(color);
    write_comparison(&mut out, result)?;
    if let Some(segments) = segments {
        writeln!(out)?;
        write_highlighted(&mut out, segments)?;
    }
    Ok(())
}

pub fn print_scan_table(results: &[PageResult], color: bool) -> io::Result<()> {
    write_scan_table(&mut stdout(color), results)
}

pub fn print_completion(completion: &Completion, color: bool) -> io::Result<()> {
    write_completion(&mut stdout(color), completion)
}
