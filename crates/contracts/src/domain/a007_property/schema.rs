use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, FixtureSource, ListError, RowAction, StatsScope,
    Vocabulary,
};

// ============================================================================
// Vocabularies
// ============================================================================

pub const PROPERTY_TYPE: Vocabulary = Vocabulary::new(
    "property",
    &[
        ("villa", "VILLA"),
        ("apartment", "APARTMENT"),
        ("penthouse", "PENTHOUSE"),
        ("townhouse", "TOWNHOUSE"),
    ],
);

pub const LISTING_TYPE: Vocabulary = Vocabulary::new(
    "listing",
    &[("sale", "FOR_SALE"), ("rent", "FOR_RENT")],
);

// ============================================================================
// Schema
// ============================================================================

static FIELDS: [FieldSpec; 10] = [
    FieldSpec::text("title", &["title", "name"]),
    FieldSpec::text("location", &["location", "address.area", "area_name"]),
    FieldSpec::text("city", &["address.city", "city"]),
    FieldSpec::number("price", &["price", "priceAed", "price_aed"]),
    FieldSpec::number("bedrooms", &["bedrooms", "beds"]),
    FieldSpec::number("bathrooms", &["bathrooms", "baths"]),
    FieldSpec::number("area", &["areaSqft", "area_sqft", "size"]),
    FieldSpec::enumerated("property_type", &["propertyType", "property_type", "type"], &PROPERTY_TYPE),
    FieldSpec::enumerated("listing", &["listingType", "listing_type", "purpose"], &LISTING_TYPE)
        .with_default("sale"),
    FieldSpec::text("image", &["imageUrl", "image_url", "image"]),
];

/// Public property listings, served from bundled fixture data.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "properties",
    endpoint: "/properties",
    resource: "/properties",
    id_aliases: &["id", "_id", "slug"],
    fields: &FIELDS,
    search_fields: &["title", "location", "city"],
    search_param: "search",
    collection_keys: &["properties"],
    date_field: None,
    created_field: None,
    status_field: None,
    assign_field: None,
    transitions: &[],
    actions: &[RowAction::View],
    filter_mode: FilterMode::Client,
    stats_scope: StatsScope::LoadedSet,
    label: "Property",
};

const FIXTURES: &str = include_str!("../../../fixtures/properties.json");

/// Listing data bundled with the app.
pub fn fixture_source() -> Result<FixtureSource, ListError> {
    FixtureSource::from_json(&SCHEMA, FIXTURES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::query::{QueryState, SortSpec};
    use crate::shared::list_view::source::DataSource;

    #[tokio::test]
    async fn test_fixtures_normalize_across_naming_styles() {
        let source = fixture_source().unwrap();
        assert_eq!(source.len(), 12);

        let mut query = QueryState::new(100);
        query.set_filter("property_type", "VILLA");
        query.sort = Some(SortSpec::desc("price"));
        let page = source.fetch(&query).await.unwrap();
        assert!(!page.rows.is_empty());
        assert!(page
            .rows
            .iter()
            .all(|row| row.get("property_type") == Some("villa")));
        let prices: Vec<f64> = page
            .rows
            .iter()
            .map(|row| row.get_or_empty("price").parse().unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
        assert!(page.rows.iter().all(|row| !row.get_or_empty("city").is_empty()));
    }

    #[tokio::test]
    async fn test_search_by_location() {
        let source = fixture_source().unwrap();
        let mut query = QueryState::new(5);
        query.set_search("marina");
        let page = source.fetch(&query).await.unwrap();
        assert!(page.total_items >= 1);
        assert!(page.rows.len() <= 5);
    }
}
