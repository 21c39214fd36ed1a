pub mod a001_user;
pub mod a002_booking;
pub mod a003_inquiry;
pub mod a004_concierge_request;
pub mod a005_event;
pub mod a006_partner;
pub mod a007_property;

use crate::shared::list_view::EntitySchema;

/// Every list resource of the app.
pub fn all_schemas() -> [&'static EntitySchema; 7] {
    [
        &a001_user::SCHEMA,
        &a002_booking::SCHEMA,
        &a003_inquiry::SCHEMA,
        &a004_concierge_request::SCHEMA,
        &a005_event::SCHEMA,
        &a006_partner::SCHEMA,
        &a007_property::SCHEMA,
    ]
}

pub fn schema_by_name(name: &str) -> Option<&'static EntitySchema> {
    all_schemas().into_iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schemas_are_consistent() {
        let mut names = HashSet::new();
        for schema in all_schemas() {
            assert!(names.insert(schema.name), "duplicate schema {}", schema.name);
            for field in schema.search_fields {
                assert!(
                    *field == "id" || schema.field(field).is_some(),
                    "{}: unknown search field {}",
                    schema.name,
                    field
                );
            }
            for field in [schema.date_field, schema.created_field, schema.status_field, schema.assign_field]
                .into_iter()
                .flatten()
            {
                assert!(schema.field(field).is_some(), "{}: unknown field {}", schema.name, field);
            }
            for (action, status) in schema.transitions {
                assert!(schema.supports(*action));
                let vocabulary = schema.status_field.and_then(|f| schema.vocabulary(f));
                assert!(vocabulary.is_some_and(|v| v.contains(status)));
            }
            for field in schema.fields {
                assert!(!field.aliases.is_empty(), "{}: {} has no aliases", schema.name, field.name);
            }
        }
        assert_eq!(schema_by_name("tickets").map(|s| s.endpoint), Some("/concierge/requests"));
        assert!(schema_by_name("orders").is_none());
    }
}
