//! Paired-column renderer
//!
//! Art on the left, facts on the right. Rows are paired by index up to the
//! longer of the two sequences; the shorter one is padded with blanks so the
//! fact column always starts at the same offset.

pub mod art;
pub mod palette;

use crate::facts::{FactKey, FactSet};
use crate::probe::UNKNOWN;
use art::ArtBlock;
use palette::Palette;

/// Columns between the art block and the facts
pub const GAP: usize = 4;

/// Build the output lines for one run
pub fn render(art: &ArtBlock, facts: &FactSet, palette: &Palette) -> Vec<String> {
    let width = art.width();
    let fact_lines = fact_lines(facts, palette);
    let rows = art.rows().len().max(fact_lines.len());
    let gap = " ".repeat(GAP);

    (0..rows)
        .map(|i| {
            let row = art.rows().get(i).copied().unwrap_or("");
            let pad = " ".repeat(width - row.chars().count());
            let fact = fact_lines.get(i).map(String::as_str).unwrap_or("");
            format!("{}{pad}{gap}{fact}", palette.art(row))
        })
        .collect()
}

/// Header, separator, then one `Label: value` line per fact other than user and host
fn fact_lines(facts: &FactSet, palette: &Palette) -> Vec<String> {
    let user = facts.get(FactKey::User).unwrap_or(UNKNOWN);
    let host = facts.get(FactKey::Host).unwrap_or(UNKNOWN);
    let header = format!("{user}@{host}");

    let mut lines = vec![palette.header(&header), "-".repeat(header.chars().count())];
    lines.extend(
        facts
            .iter()
            .filter(|(key, _)| !matches!(key, FactKey::User | FactKey::Host))
            .map(|(key, value)| format!("{} {value}", palette.label(&format!("{key}:")))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_facts() -> FactSet {
        FactSet::from_pairs(&[
            (FactKey::User, "alice"),
            (FactKey::Host, "box01"),
            (FactKey::Os, "Arch Linux"),
            (FactKey::Kernel, "6.9.1-arch1"),
            (FactKey::Uptime, "1h 5m"),
            (FactKey::Shell, "zsh"),
            (FactKey::De, "unknown"),
            (FactKey::Wm, "sway"),
            (FactKey::Term, "foot"),
            (FactKey::Cpu, "AMD Ryzen 7 5800X (8/16)"),
            (FactKey::Memory, "4.0GiB / 16.0GiB (25.0%)"),
            (FactKey::Disk, "unknown"),
        ])
    }

    /// The art column of a rendered line, assuming no color codes
    fn art_column(line: &str, width: usize) -> String {
        line.chars().take(width + GAP).collect()
    }

    #[test]
    fn header_and_separator() {
        let lines = render(&art::TUX, &sample_facts(), &Palette::plain());
        let width = art::TUX.width();
        assert_eq!(&lines[0][width + GAP..], "alice@box01");
        assert_eq!(&lines[1][width + GAP..], "-----------");
    }

    #[test]
    fn row_count_is_longer_sequence() {
        let facts = sample_facts();
        // 2 header lines + 10 labelled facts
        let lines = render(&art::TUX, &facts, &Palette::plain());
        assert_eq!(lines.len(), 12);

        static TALL: [&str; 20] = ["#"; 20];
        let tall = ArtBlock::new(&TALL);
        assert_eq!(render(&tall, &facts, &Palette::plain()).len(), 20);
    }

    #[test]
    fn fact_column_is_aligned() {
        let art = ArtBlock::new(&["/\\", "/  \\", "/____\\"]);
        let facts = sample_facts();
        let lines = render(&art, &facts, &Palette::plain());
        let width = art.width();

        for line in &lines {
            let column = art_column(line, width);
            assert_eq!(column.chars().count(), width + GAP, "line: {line:?}");
            assert!(column.ends_with(&" ".repeat(GAP)));
        }
        assert_eq!(&lines[2][width + GAP..], "OS: Arch Linux");
        assert_eq!(&lines[11][width + GAP..], "Disk: unknown");
    }

    #[test]
    fn art_rows_without_facts_keep_art() {
        let art = ArtBlock::new(&["a", "b", "c", "d"]);
        let facts = FactSet::from_pairs(&[(FactKey::User, "u"), (FactKey::Host, "h")]);
        let lines = render(&art, &facts, &Palette::plain());
        assert_eq!(lines, vec!["a    u@h", "b    ---", "c    ", "d    "]);
    }

    #[test]
    fn every_fact_but_gpu_has_a_labelled_value() {
        let lines = render(&art::TUX, &sample_facts(), &Palette::plain()).join("\n");
        for key in [
            FactKey::Os,
            FactKey::Kernel,
            FactKey::Uptime,
            FactKey::Shell,
            FactKey::De,
            FactKey::Wm,
            FactKey::Term,
            FactKey::Cpu,
            FactKey::Memory,
            FactKey::Disk,
        ] {
            let prefix = format!("{}: ", key.label());
            let line = lines
                .lines()
                .find(|line| line.contains(&prefix))
                .unwrap_or_else(|| panic!("missing {prefix}"));
            assert!(!line.split(&prefix).nth(1).unwrap().is_empty());
        }
        assert!(!lines.contains("GPU:"));
    }

    #[test]
    fn gpu_line_rendered_when_present() {
        let mut pairs = vec![(FactKey::User, "u"), (FactKey::Host, "h")];
        pairs.push((FactKey::Gpu, "Intel Corporation UHD Graphics 630"));
        let facts = FactSet::from_pairs(&pairs);
        let lines = render(&ArtBlock::new(&[]), &facts, &Palette::plain());
        assert_eq!(
            lines,
            vec![
                "    u@h",
                "    ---",
                "    GPU: Intel Corporation UHD Graphics 630",
            ]
        );
    }
}
