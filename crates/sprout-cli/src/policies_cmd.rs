//! `sprout policies` command: print the care duration table.

use sprout_core::{CareAction, Locale, PolicyRegistry, Species};
use unicode_width::UnicodeWidthStr;

/// Print durations for every species, or only `species` when given.
pub fn run_policies(species: Option<Species>, locale: Locale) {
    let registry = PolicyRegistry::with_defaults();
    print!("{}", render_policies(&registry, species, locale));
}

/// Render the duration table using the tokens a user types in `locale`.
pub fn render_policies(registry: &PolicyRegistry, species: Option<Species>, locale: Locale) -> String {
    let mut header = vec![String::new()];
    header.extend(
        CareAction::ALL
            .iter()
            .map(|a| locale.action_token(*a).to_string()),
    );

    let mut rows = vec![header];
    for policy in registry
        .iter()
        .filter(|p| species.is_none_or(|s| s == p.species()))
    {
        let mut row = vec![locale.species_token(policy.species()).to_string()];
        row.extend(
            CareAction::ALL
                .iter()
                .map(|a| format!("{}s", policy.duration_for(*a).as_secs())),
        );
        rows.push(row);
    }

    // Hangul is two terminal columns wide.
    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].width()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.width();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}
