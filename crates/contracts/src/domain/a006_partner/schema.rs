use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};

pub const VERIFICATION_STATUS: Vocabulary = Vocabulary::new(
    "verification",
    &[
        ("pending", "PENDING"),
        ("verified", "VERIFIED"),
        ("rejected", "REJECTED"),
    ],
);

pub const PARTNER_TYPE: Vocabulary = Vocabulary::new(
    "partner",
    &[
        ("agency", "AGENCY"),
        ("developer", "DEVELOPER"),
        ("service-provider", "SERVICE_PROVIDER"),
        ("individual", "INDIVIDUAL"),
    ],
);

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::text("company", &["companyName", "company_name", "businessName", "name"]),
    FieldSpec::text("contact", &["contactName", "contact_name", "user.name"]),
    FieldSpec::text("email", &["email", "contactEmail", "user.email"]),
    FieldSpec::text("license", &["licenseNumber", "license_number", "tradeLicense"]),
    FieldSpec::enumerated("partner_type", &["partnerType", "partner_type", "type"], &PARTNER_TYPE),
    FieldSpec::enumerated(
        "verification",
        &["verificationStatus", "verification_status", "status"],
        &VERIFICATION_STATUS,
    )
    .with_default("pending"),
    FieldSpec::timestamp("submitted_at", &["submittedAt", "createdAt", "created_at"]),
];

/// Partner verification queue for admins.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "partners",
    endpoint: "/partners",
    resource: "/partners",
    id_aliases: &["id", "_id", "partnerId"],
    fields: &FIELDS,
    search_fields: &["company", "contact", "email", "license", "id"],
    search_param: "search",
    collection_keys: &["partners"],
    date_field: Some("submitted_at"),
    created_field: Some("submitted_at"),
    status_field: Some("verification"),
    assign_field: None,
    transitions: &[
        (RowAction::Approve, "verified"),
        (RowAction::Reject, "rejected"),
    ],
    actions: &[RowAction::View, RowAction::Approve, RowAction::Reject],
    filter_mode: FilterMode::ServerVerified,
    stats_scope: StatsScope::LoadedSet,
    label: "Partner",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::dispatcher::{ActionDispatcher, Dispatch, MutationKind};
    use crate::shared::list_view::normalize::normalize_row;
    use crate::shared::list_view::source::mutation_request;
    use serde_json::json;

    #[test]
    fn test_approve_sends_wire_status() {
        let raw = json!({ "id": "p9", "businessName": "Gulf Realty", "status": "PENDING" });
        let row = normalize_row(&raw, &SCHEMA).unwrap();
        assert_eq!(row.get("verification"), Some("pending"));

        let mut dispatcher = ActionDispatcher::new();
        let Ok(Dispatch::Mutate(request)) = dispatcher.dispatch(RowAction::Approve, &row, &SCHEMA)
        else {
            panic!("approve should mutate immediately");
        };
        assert_eq!(
            request.kind,
            MutationKind::SetStatus {
                status: "VERIFIED".to_string()
            }
        );
        assert_eq!(request.submitted.get("verification"), Some("verified"));
        assert_eq!(mutation_request(&request, &SCHEMA).path, "/partners/p9/status");
    }
}
