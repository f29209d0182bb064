//! Integrity checks run before a catalog is accepted.

use std::collections::HashMap;

use crate::error::{CatalogIssue, RecordField};
use crate::types::GameRecord;

/// Check every record and report all problems found, in list order.
///
/// An empty result means the list can be wrapped in a
/// [`Catalog`](crate::Catalog).
pub fn validate(games: &[GameRecord]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, game) in games.iter().enumerate() {
        let fields = [
            (RecordField::Id, &game.id),
            (RecordField::Title, &game.title),
            (RecordField::Thumbnail, &game.thumbnail),
            (RecordField::Category, &game.category),
            (RecordField::IframeUrl, &game.iframe_url),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                issues.push(CatalogIssue::EmptyField {
                    index,
                    id: game.id.clone(),
                    field,
                });
            }
        }

        if game.id.trim().is_empty() {
            continue;
        }
        if let Some(&first) = seen.get(game.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                id: game.id.clone(),
                first,
                second: index,
            });
        } else {
            seen.insert(&game.id, index);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, title: &str) -> GameRecord {
        GameRecord::new(id, title, "thumb.png", "Arcade", "https://example.com/g")
    }

    #[test]
    fn clean_list_has_no_issues() {
        assert!(validate(&[game("a", "A"), game("b", "B")]).is_empty());
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(validate(&[]).is_empty());
    }

    #[test]
    fn whitespace_title_is_reported() {
        let issues = validate(&[game("a", "   ")]);
        assert_eq!(
            issues,
            vec![CatalogIssue::EmptyField {
                index: 0,
                id: "a".into(),
                field: RecordField::Title,
            }]
        );
    }

    #[test]
    fn duplicate_id_reports_both_positions() {
        let issues = validate(&[game("a", "A"), game("b", "B"), game("a", "C")]);
        assert_eq!(
            issues,
            vec![CatalogIssue::DuplicateId {
                id: "a".into(),
                first: 0,
                second: 2,
            }]
        );
    }

    #[test]
    fn empty_ids_are_not_reported_as_duplicates() {
        let issues = validate(&[game("", "A"), game("", "B")]);
        assert_eq!(issues.len(), 2);
        assert!(
            issues
                .iter()
                .all(|i| matches!(i, CatalogIssue::EmptyField { field: RecordField::Id, .. }))
        );
    }
}
