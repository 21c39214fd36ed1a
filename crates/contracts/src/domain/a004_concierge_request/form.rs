//! Public concierge service request form.

use super::schema::SCHEMA;
use crate::shared::list_view::dispatcher::validate_draft;
use crate::shared::list_view::error::ListError;
use crate::shared::list_view::filter::parse_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Fields of the request form, in display order.
pub const REQUEST_FORM_FIELDS: [&str; 6] = [
    "client_name",
    "email",
    "phone",
    "service_type",
    "preferred_date",
    "description",
];

/// Empty draft, optionally with a preselected service.
pub fn new_request_draft(service: Option<&str>) -> BTreeMap<String, String> {
    let mut draft: BTreeMap<String, String> = REQUEST_FORM_FIELDS
        .iter()
        .map(|f| (f.to_string(), String::new()))
        .collect();
    if let Some(service) = service {
        draft.insert("service_type".to_string(), service.to_string());
    }
    draft
}

/// Field rules plus "preferred date is a real date, not in the past".
pub fn validate_request(
    draft: &BTreeMap<String, String>,
    today: NaiveDate,
) -> Result<(), ListError> {
    let mut errors = validate_draft(draft, &SCHEMA);
    if !errors.contains_key("preferred_date") {
        let value = draft.get("preferred_date").map(String::as_str).unwrap_or("");
        match parse_date(value) {
            Some(date) if date < today => {
                errors.insert(
                    "preferred_date".to_string(),
                    "Preferred date cannot be in the past".to_string(),
                );
            }
            Some(_) => {}
            None => {
                errors.insert(
                    "preferred_date".to_string(),
                    "Preferred date is not a valid date".to_string(),
                );
            }
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ListError::validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn filled() -> BTreeMap<String, String> {
        let mut draft = new_request_draft(Some("airport-transfer"));
        draft.insert("client_name".into(), "Lara Haddad".into());
        draft.insert("email".into(), "lara@example.com".into());
        draft.insert("phone".into(), "+971501234567".into());
        draft.insert("preferred_date".into(), "2024-03-12".into());
        draft
    }

    #[test]
    fn test_complete_request_passes() {
        assert!(validate_request(&filled(), today()).is_ok());
    }

    #[test]
    fn test_missing_and_invalid_fields() {
        let draft = new_request_draft(None);
        let Err(ListError::Validation { fields }) = validate_request(&draft, today()) else {
            panic!("expected validation failure");
        };
        assert_eq!(fields.get("service_type").map(String::as_str), Some("Please choose a service"));
        assert!(fields.contains_key("client_name"));
        assert!(fields.contains_key("preferred_date"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn test_past_date_rejected() {
        let mut draft = filled();
        draft.insert("preferred_date".into(), "2024-03-01".into());
        let err = validate_request(&draft, today()).unwrap_err();
        assert_eq!(err.user_message(), "Preferred date cannot be in the past");
    }

    #[test]
    fn test_unknown_service_rejected() {
        let mut draft = filled();
        draft.insert("service_type".into(), "helicopter".into());
        assert!(validate_request(&draft, today()).is_err());
    }
}
