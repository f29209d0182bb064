use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nova_games_catalog::{Catalog, Category, derive_categories, filter_games};

use crate::error::CliError;

/// Print the games matching `search` and `category`, in catalog order.
pub(crate) fn run_list(
    catalog: &Catalog,
    search: &str,
    category: Option<&str>,
) -> Result<(), CliError> {
    let category = resolve_category(catalog, category)?;
    let games = filter_games(catalog.games(), search, &category);

    if games.is_empty() {
        log::info!(
            "{}",
            "No games found".if_supports_color(Stdout, |t| t.bold())
        );
        log::info!("Try adjusting your search or category filter");
        return Ok(());
    }

    let width = games.iter().map(|g| g.title.len()).max().unwrap_or(0);
    for game in &games {
        log::info!(
            "  {:<width$}  {}  {}",
            game.title,
            format!("[{}]", game.category).if_supports_color(Stdout, |t| t.cyan()),
            game.id.if_supports_color(Stdout, |t| t.dimmed()),
            width = width,
        );
    }
    log::info!("");
    log::info!("{} of {} games", games.len(), catalog.len());
    Ok(())
}

/// Print each category with the number of games in it.
pub(crate) fn run_categories(catalog: &Catalog) {
    for category in derive_categories(catalog.games()) {
        let count = filter_games(catalog.games(), "", &category).len();
        log::info!(
            "  {} ({})",
            category
                .label()
                .if_supports_color(Stdout, |t| t.bold()),
            count
        );
    }
}

/// Print every field of one record.
pub(crate) fn run_show(catalog: &Catalog, id: &str) -> Result<(), CliError> {
    let game = catalog.get(id).ok_or_else(|| CliError::unknown_game(id))?;

    log::info!("{}", game.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Id:        {}", game.id);
    log::info!("  Category:  {}", game.category);
    log::info!(
        "  Thumbnail: {}",
        game.thumbnail.if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!(
        "  Embed URL: {}",
        game.iframe_url.if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}

/// Map a `--category` argument to one of the catalog's categories.
fn resolve_category(catalog: &Catalog, name: Option<&str>) -> Result<Category, CliError> {
    let Some(name) = name else {
        return Ok(Category::All);
    };
    let categories = derive_categories(catalog.games());
    let wanted = Category::from_label(name);
    if categories.contains(&wanted) {
        return Ok(wanted);
    }
    let available = categories
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");
    Err(CliError::UnknownCategory {
        name: name.to_string(),
        available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_games_catalog::GameRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            GameRecord::new("a", "Ping Pong", "t", "Sports", "u"),
            GameRecord::new("b", "Pong Master", "t", "Arcade", "u"),
        ])
        .unwrap()
    }

    #[test]
    fn missing_category_means_all() {
        assert_eq!(resolve_category(&catalog(), None).unwrap(), Category::All);
        assert_eq!(
            resolve_category(&catalog(), Some("All")).unwrap(),
            Category::All
        );
    }

    #[test]
    fn known_category_resolves() {
        assert_eq!(
            resolve_category(&catalog(), Some("Arcade")).unwrap(),
            Category::from_label("Arcade")
        );
    }

    #[test]
    fn unknown_category_lists_alternatives() {
        let err = resolve_category(&catalog(), Some("Racing")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown category: Racing (available: All, Sports, Arcade)"
        );
    }

    #[test]
    fn show_unknown_id_fails() {
        assert!(matches!(
            run_show(&catalog(), "zzz"),
            Err(CliError::UnknownGame(_))
        ));
    }
}
