//! CLI output for the navigation inspector
//!
//! Renders the menu a role would see on a given path, as a table or JSON.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use nitrosubs_core::navigation::SectionKind;
use nitrosubs_core::{display_initial, Capability, NavMenu, Role};

fn section_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Main => "main",
        SectionKind::Admin => "admin",
    }
}

fn requirement_name(requires: Option<Capability>) -> &'static str {
    match requires {
        Some(Capability::Admin) => "admin",
        Some(Capability::Leader) => "leader",
        None => "-",
    }
}

/// Format the menu (human or JSON)
pub fn format_menu(menu: &NavMenu, json: bool, no_color: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(menu).context("Failed to serialize menu");
    }

    if menu.sections.is_empty() {
        return Ok("No visible entries.".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["Section", "Label", "Route", "Icon", "Requires", "Active"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for section in &menu.sections {
        let section_label = match section.heading {
            Some(heading) => format!("{} ({})", section_name(section.kind), heading),
            None => section_name(section.kind).to_string(),
        };

        for item in &section.items {
            let active = if item.active { "●" } else { "" };
            let label_cell = if item.active && !no_color {
                Cell::new(item.entry.label).fg(Color::Green)
            } else {
                Cell::new(item.entry.label)
            };

            table.add_row(Row::from(vec![
                Cell::new(&section_label),
                label_cell,
                Cell::new(item.entry.route),
                Cell::new(item.entry.icon.name()),
                Cell::new(requirement_name(item.entry.requires)),
                Cell::new(active),
            ]));
        }
    }

    Ok(table.to_string())
}

/// One-line identity summary, as the header would present it
pub fn format_identity(name: Option<&str>, role: &Role) -> String {
    let caps = role.capabilities();
    format!(
        "[{}] {} - {} (admin: {}, leader: {})",
        display_initial(name),
        name.filter(|n| !n.is_empty()).unwrap_or("(sem nome)"),
        role.label(),
        if caps.is_admin() { "yes" } else { "no" },
        if caps.is_leader() { "yes" } else { "no" },
    )
}
