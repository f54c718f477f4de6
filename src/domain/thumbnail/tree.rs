use crate::domain::catalog::{CatalogRepository, Category, CategoryId};
use std::collections::BTreeSet;

/// Ids of `start` and every category below it.
///
/// A failed children lookup is treated as "no children" so that a partial
/// tree is still returned. A category reached a second time is not expanded
/// again, which keeps the walk finite even on a malformed cyclic hierarchy.
pub async fn resolve_subtree_ids(
    catalog: &dyn CatalogRepository,
    start: &Category,
) -> BTreeSet<CategoryId> {
    let mut ids = BTreeSet::from([start.id]);
    let mut pending = vec![start.id];

    while let Some(parent_id) = pending.pop() {
        let children = match catalog.get_children(parent_id).await {
            Ok(children) => children,
            Err(e) => {
                tracing::warn!(
                    category_id = %parent_id,
                    error = %e,
                    "Failed to read child categories, treating as leaf"
                );
                continue;
            }
        };

        for child in children {
            if ids.insert(child.id) {
                pending.push(child.id);
            } else {
                tracing::warn!(
                    category_id = %child.id,
                    parent_id = %parent_id,
                    "Category reached twice while walking the tree, not expanding it again"
                );
            }
        }
    }

    ids
}
