//! Event catalog derived from the system permission catalog.
//!
//! Every `(grouping, entity, action)` permission whose action is
//! subscribable becomes an [`Event`] in its grouping. Groupings appear in
//! first-seen order and events keep the catalog's order inside them.

use hookreg_core::hooks::{is_subscribable_action, Event, Grouping};
use hookreg_db::models::permission::PermissionRow;
use hookreg_db::HookStore;
use indexmap::IndexMap;

/// Filter and group permission rows into the subscribable event catalog.
///
/// Non-contiguous rows of the same grouping are merged into one
/// [`Grouping`]; no grouping is ever empty.
pub fn build_catalog<I>(permissions: I) -> Vec<Grouping>
where
    I: IntoIterator<Item = PermissionRow>,
{
    let mut groups: IndexMap<String, Vec<Event>> = IndexMap::new();

    for permission in permissions
        .into_iter()
        .filter(|p| is_subscribable_action(&p.action_name))
    {
        groups
            .entry(permission.grouping)
            .or_default()
            .push(Event::new(permission.action_name, permission.entity_name));
    }

    groups
        .into_iter()
        .map(|(name, events)| Grouping { name, events })
        .collect()
}

/// Read the permission catalog and build the event catalog from it.
pub async fn load_catalog(store: &dyn HookStore) -> Result<Vec<Grouping>, sqlx::Error> {
    let permissions = store.list_permissions().await?;
    let total = permissions.len();
    let catalog = build_catalog(permissions);

    tracing::debug!(
        permissions = total,
        groupings = catalog.len(),
        "Built event catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn perm(grouping: &str, entity: &str, action: &str) -> PermissionRow {
        PermissionRow {
            grouping: grouping.to_string(),
            entity_name: entity.to_string(),
            action_name: action.to_string(),
        }
    }

    fn sample_catalog() -> Vec<PermissionRow> {
        vec![
            perm("authorisation", "ROLE", "CREATE"),
            perm("authorisation", "ROLE", "READ"),
            perm("authorisation", "USER", "CREATE_CHECKER"),
            perm("portfolio", "CLIENT", "ACTIVATE"),
            perm("portfolio", "CLIENT", "CREATE"),
            perm("portfolio", "CLIENT", "READ_PERMISSIONS"),
            perm("portfolio", "LOAN", "DISBURSE"),
            perm("special", "REPORT", "CHECKER_MAKE"),
        ]
    }

    // -- Filtering ----------------------------------------------------------

    #[test]
    fn excluded_actions_never_become_events() {
        let catalog = build_catalog(sample_catalog());
        let actions: Vec<&str> = catalog
            .iter()
            .flat_map(|g| g.events.iter())
            .map(|e| e.action_name.as_str())
            .collect();

        assert!(actions.iter().all(|a| !a.contains("CHECKER") && !a.contains("READ")));
    }

    #[test]
    fn grouping_with_only_excluded_actions_is_dropped() {
        let catalog = build_catalog(sample_catalog());
        assert!(catalog.iter().all(|g| g.name != "special"));
        assert!(catalog.iter().all(|g| !g.events.is_empty()));
    }

    // -- Grouping -----------------------------------------------------------

    #[test]
    fn groupings_and_events_keep_catalog_order() {
        let catalog = build_catalog(sample_catalog());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "authorisation");
        assert_eq!(catalog[0].events, vec![Event::new("CREATE", "ROLE")]);
        assert_eq!(catalog[1].name, "portfolio");
        assert_eq!(
            catalog[1].events,
            vec![
                Event::new("ACTIVATE", "CLIENT"),
                Event::new("CREATE", "CLIENT"),
                Event::new("DISBURSE", "LOAN"),
            ]
        );
    }

    #[test]
    fn union_of_groupings_equals_filtered_input() {
        let input = sample_catalog();
        let expected: HashSet<(String, Event)> = input
            .iter()
            .filter(|p| is_subscribable_action(&p.action_name))
            .map(|p| {
                (
                    p.grouping.clone(),
                    Event::new(p.action_name.clone(), p.entity_name.clone()),
                )
            })
            .collect();

        let catalog = build_catalog(input);
        let flattened: Vec<(String, Event)> = catalog
            .iter()
            .flat_map(|g| g.events.iter().map(|e| (g.name.clone(), e.clone())))
            .collect();

        assert_eq!(flattened.len(), expected.len());
        assert_eq!(flattened.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn non_contiguous_grouping_is_merged() {
        let catalog = build_catalog(vec![
            perm("b", "X", "CREATE"),
            perm("a", "Y", "CREATE"),
            perm("b", "Z", "DELETE"),
        ]);

        let names: Vec<&str> = catalog.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(
            catalog[0].events,
            vec![Event::new("CREATE", "X"), Event::new("DELETE", "Z")]
        );
    }

    #[test]
    fn empty_catalog_yields_no_groupings() {
        assert!(build_catalog(Vec::new()).is_empty());
    }
}
