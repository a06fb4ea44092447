//! Text rendering of a scored layout, from a bare name-and-score block up
//! to the full per-tier stat listing.

use crate::analyze::Analysis;
use crate::catalog::StatCatalog;
use crate::config::OutputMode;
use crate::consts::{COL, ROW, SKIP_SLOTS};
use crate::language::Language;
use crate::layout::Layout;
use std::fmt::Write;

pub fn render(
    mode: OutputMode,
    layout: &Layout,
    analysis: &Analysis,
    catalog: &StatCatalog,
    lang: &Language,
) -> String {
    match mode {
        OutputMode::Quiet => quiet(layout, analysis, lang),
        OutputMode::Normal | OutputMode::Verbose => {
            let mut out = quiet(layout, analysis, lang);
            push_stats(&mut out, analysis, catalog);
            out
        }
    }
}

fn quiet(layout: &Layout, analysis: &Analysis, lang: &Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", layout.name);
    for row in 0..ROW {
        for col in 0..COL {
            let _ = write!(out, "{} ", lang.char_of(layout.at(row, col)));
        }
        out.push('\n');
    }
    let _ = writeln!(out, "score : {:.6}\n", analysis.score);
    out
}

fn push_stats(out: &mut String, analysis: &Analysis, catalog: &StatCatalog) {
    let _ = writeln!(out, "\nMONOGRAM STATS");
    for (stat, value) in catalog.mono.iter().zip(&analysis.mono) {
        if !stat.skip {
            let _ = writeln!(out, "{} : {:08.5}%", stat.name, value);
        }
    }

    let _ = writeln!(out, "\nBIGRAM STATS");
    for (stat, value) in catalog.bi.iter().zip(&analysis.bi) {
        if !stat.skip {
            let _ = writeln!(out, "{} : {:08.5}%", stat.name, value);
        }
    }

    let _ = writeln!(out, "\nTRIGRAM STATS");
    for (stat, value) in catalog.tri.iter().zip(&analysis.tri) {
        if !stat.skip {
            let _ = writeln!(out, "{} : {:08.5}%", stat.name, value);
        }
    }

    let _ = writeln!(out, "\nQUADGRAM STATS");
    for (stat, value) in catalog.quad.iter().zip(&analysis.quad) {
        if !stat.skip {
            let _ = writeln!(out, "{} : {:08.5}%", stat.name, value);
        }
    }

    let _ = writeln!(out, "\nSKIPGRAM STATS");
    for (stat, row) in catalog.skip.iter().zip(&analysis.skip) {
        if !stat.skip {
            let _ = write!(out, "{} :\n    |", stat.name);
            for d in 1..SKIP_SLOTS {
                let _ = write!(out, "{:06.3}|", row[d]);
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "\nMETA STATS");
    for (stat, value) in catalog.meta.iter().zip(&analysis.meta) {
        if !stat.skip {
            let _ = writeln!(out, "{} : {:08.5}%", stat.name, value);
        }
    }
    out.push('\n');
}
