use sqlx::{Postgres, QueryBuilder};

use crate::models::{provided, ClientPatch};

/// Builds the dynamic UPDATE for a client patch: one assignment per
/// provided field, with binds numbered in the order the assignments are
/// emitted and the id bound last. Column names are fixed literals here;
/// caller input only ever travels through bound parameters.
///
/// Returns None for an empty patch, in which case no statement is issued.
pub(super) fn build_update<'a>(
    id: i32,
    patch: &'a ClientPatch,
) -> Option<QueryBuilder<'a, Postgres>> {
    if patch.is_empty() {
        return None;
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE clients SET ");
    {
        let mut assignments = builder.separated(", ");
        if let Some(value) = provided(&patch.first_name) {
            assignments.push("first_name = ");
            assignments.push_bind_unseparated(value);
        }
        if let Some(value) = provided(&patch.last_name) {
            assignments.push("last_name = ");
            assignments.push_bind_unseparated(value);
        }
        if let Some(value) = provided(&patch.email) {
            assignments.push("email = ");
            assignments.push_bind_unseparated(value);
        }
        if let Some(phones) = patch.phones.as_deref().filter(|p| !p.is_empty()) {
            assignments.push("phones = ");
            assignments.push_bind_unseparated(phones);
        }
    }
    builder.push(" WHERE id = ").push_bind(id);

    Some(builder)
}
