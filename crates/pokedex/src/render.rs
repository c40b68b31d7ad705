use colored::Colorize;
use pokedex_core::icon::IconState;
use pokedex_core::taxonomy::TaxonomyEntry;
use pokedex_core::view::{CardView, CatalogView};

use crate::prelude::new_table;

/// Convert a catalog frame to formatted text with colors
///
/// Loading and error frames replace the whole listing. `show_commands` adds
/// the `pokedex list --page N` hints used outside the interactive browser.
pub fn format_catalog_text(view: &CatalogView, show_commands: bool) -> String {
    if view.loading {
        return format!("{}\n", "Loading...".yellow());
    }

    if let Some(error) = &view.error {
        return format!("{} {}\n", "Error:".red().bold(), error.red());
    }

    let mut result = String::new();
    let pages = &view.pagination;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("POKÉDEX (Page {} of {})", pages.current_page, pages.total_pages)
            .bright_cyan()
            .bold()
    ));
    if let Some(filter) = &view.filter {
        result.push_str(&format!(
            "{}: {} ({} of {})\n",
            "Filter".green(),
            filter.bright_white().bold(),
            view.items.len(),
            view.total_records
        ));
    }
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if view.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No Pokémon on this page.".yellow()));
    } else {
        for card in &view.items {
            result.push_str(&format_card(card));
        }
    }

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!(
        "{} {} {} {}\n",
        "Page".bright_white(),
        pages.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pages.total_pages.to_string().bright_cyan().bold(),
    ));

    if show_commands {
        if let Some(command) = &pages.prev_page_command {
            result.push_str(&format!("  {}: {}\n", "Previous page".green(), command.cyan()));
        }
        if let Some(command) = &pages.next_page_command {
            result.push_str(&format!("  {}: {}\n", "Next page".green(), command.cyan()));
        }
    }

    result
}

fn format_card(card: &CardView) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {}\n",
        format!("#{}", card.id).yellow().bold(),
        card.name.white().bold()
    ));

    if let Some(image) = &card.image {
        result.push_str(&format!("    {}: {}\n", "Sprite".green(), image.cyan().underline()));
    }

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "Species".green(),
        card.species.bright_white(),
        "Types".green(),
        card.types.join(", ").bright_magenta()
    ));

    result.push_str(&format!(
        "    {}: {} kg | {}: {} m | {}: {}\n",
        "Weight".green(),
        card.weight_kg.to_string().bright_yellow(),
        "Height".green(),
        card.height_m.to_string().bright_yellow(),
        "Base XP".green(),
        card.base_experience
            .map(|xp| xp.to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_yellow()
    ));

    result.push_str(&format!(
        "    {}: {}\n",
        "Abilities".green(),
        card.abilities.bright_white()
    ));

    result
}

/// Header line with the resolved icon
pub fn format_header(name: &str, icon: &IconState) -> String {
    let title = "POKÉDEX".bright_red().bold();
    match icon {
        IconState::Loading => format!("{title} {}\n", "Loading...".yellow()),
        IconState::Ready { sprite_url } => {
            format!("{title} {} {}\n", name.bold(), sprite_url.cyan().underline())
        }
        IconState::Errored { message } => format!("{title} {}\n", message.red()),
    }
}

pub fn format_taxonomy_table(entries: &[TaxonomyEntry]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["NAME".bold(), "DISPLAY".bold()]);

    for entry in entries {
        table.add_row(prettytable::row![entry.name, entry.display_name]);
    }

    table
}
