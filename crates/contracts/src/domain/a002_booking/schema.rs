use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};

// ============================================================================
// Vocabularies
// ============================================================================

pub const BOOKING_STATUS: Vocabulary = Vocabulary::new(
    "booking",
    &[
        ("pending", "PENDING"),
        ("confirmed", "CONFIRMED"),
        ("cancelled", "CANCELLED"),
        ("completed", "COMPLETED"),
    ],
);

// ============================================================================
// Schema
// ============================================================================

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::text(
        "property",
        &["property.title", "propertyTitle", "property_title", "propertyName"],
    ),
    FieldSpec::text("location", &["property.location", "location"]),
    FieldSpec::timestamp("check_in", &["checkIn", "check_in", "startDate"]),
    FieldSpec::timestamp("check_out", &["checkOut", "check_out", "endDate"]),
    FieldSpec::number("guests", &["guests", "numberOfGuests", "guestCount"]),
    FieldSpec::number("total_price", &["totalPrice", "total_price", "amount"]),
    FieldSpec::enumerated("status", &["status", "bookingStatus"], &BOOKING_STATUS)
        .with_default("pending"),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at", "bookedAt"]),
];

/// The signed-in client's bookings. The endpoint returns the whole list, so
/// filtering, paging and the summary cards all work over the loaded set.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "bookings",
    endpoint: "/bookings/my-bookings",
    resource: "/bookings",
    id_aliases: &["id", "_id", "bookingId", "reference"],
    fields: &FIELDS,
    search_fields: &["property", "location", "id"],
    search_param: "search",
    collection_keys: &["bookings"],
    date_field: Some("check_in"),
    created_field: Some("created_at"),
    status_field: Some("status"),
    assign_field: None,
    transitions: &[(RowAction::Close, "cancelled")],
    actions: &[RowAction::View, RowAction::Close],
    filter_mode: FilterMode::Client,
    stats_scope: StatsScope::LoadedSet,
    label: "Booking",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::source::parse_page;
    use serde_json::json;

    #[test]
    fn test_bookings_envelope_and_nested_property() {
        let body = json!({
            "success": true,
            "data": {
                "bookings": [
                    {
                        "bookingId": "BK-1",
                        "property": { "title": "Marina Loft", "location": "Dubai Marina" },
                        "check_in": "2024-05-01",
                        "numberOfGuests": 2,
                        "totalPrice": 1800,
                        "status": "CONFIRMED"
                    }
                ]
            }
        });
        let page = parse_page(&body, &SCHEMA).unwrap();
        assert!(!page.paginated);
        let row = &page.rows[0];
        assert_eq!(row.id, "BK-1");
        assert_eq!(row.get("property"), Some("Marina Loft"));
        assert_eq!(row.get("location"), Some("Dubai Marina"));
        assert_eq!(row.get("guests"), Some("2"));
        assert_eq!(row.get("check_out"), Some(""));
        assert_eq!(row.get("status"), Some("confirmed"));
    }
}
