use comfy_table::Color;

use crate::pages::ManifestEntry;

use super::format::{create_styled_table, ellipsize, header_cell, styled_cell};

const DESC_COLUMN_CHARS: usize = 60;

pub(crate) fn print_releases_table(entries: &[&ManifestEntry], use_color: bool) {
    println!("{}", render_releases_table(entries, use_color));
}

fn render_releases_table(entries: &[&ManifestEntry], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Seq", use_color),
        header_cell("Date", use_color),
        header_cell("Title", use_color),
        header_cell("Description", use_color),
    ]);

    let seq_color = if use_color { Some(Color::Green) } else { None };
    for entry in entries {
        table.add_row(vec![
            styled_cell(&entry.seq, seq_color, false),
            styled_cell(&entry.date, None, false),
            styled_cell(&entry.title, None, true),
            styled_cell(&ellipsize(&entry.desc, DESC_COLUMN_CHARS), None, false),
        ]);
    }

    format!("\n  Releases\n\n{table}\n\n  {} release(s)\n", entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_entries_and_count() {
        let entry = ManifestEntry {
            date: "20250816".to_string(),
            seq: "6".to_string(),
            title: "Chromatic Echo".to_string(),
            desc: "Orbits.".to_string(),
        };
        let out = render_releases_table(&[&entry], false);
        assert!(out.contains("Chromatic Echo"));
        assert!(out.contains("20250816"));
        assert!(out.contains("1 release(s)"));
    }
}
