/// Bidirectional mapping between UI enum values (`in-progress`) and wire
/// enum values (`IN_PROGRESS`) for one enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub name: &'static str,
    /// `(ui, wire)` pairs, in display order.
    pub values: &'static [(&'static str, &'static str)],
}

impl Vocabulary {
    pub const fn new(name: &'static str, values: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, values }
    }

    /// Lower-case, dash-separated form of any casing/separator variant.
    pub fn canonical(raw: &str) -> String {
        raw.trim().to_lowercase().replace(['_', ' '], "-")
    }

    /// Wire or UI value -> UI value. Unknown values come back canonicalized.
    pub fn to_ui(&self, raw: &str) -> String {
        let canonical = Self::canonical(raw);
        self.values
            .iter()
            .find(|(ui, wire)| *ui == canonical || Self::canonical(wire) == canonical)
            .map(|(ui, _)| ui.to_string())
            .unwrap_or(canonical)
    }

    /// UI value -> wire value. Unknown values become SCREAMING_SNAKE_CASE.
    pub fn to_wire(&self, ui: &str) -> String {
        let canonical = Self::canonical(ui);
        self.values
            .iter()
            .find(|(known, wire)| *known == canonical || Self::canonical(wire) == canonical)
            .map(|(_, wire)| wire.to_string())
            .unwrap_or_else(|| canonical.to_uppercase().replace('-', "_"))
    }

    pub fn contains(&self, value: &str) -> bool {
        let canonical = Self::canonical(value);
        self.values.iter().any(|(ui, _)| *ui == canonical)
    }

    pub fn ui_values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(ui, _)| *ui)
    }

    /// i18n key for a value, e.g. `status.ticket.in-progress`.
    pub fn label_key(&self, ui: &str) -> String {
        format!("status.{}.{}", self.name, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKET: Vocabulary = Vocabulary::new(
        "ticket",
        &[
            ("pending", "PENDING"),
            ("in-progress", "IN_PROGRESS"),
            ("completed", "COMPLETED"),
        ],
    );

    #[test]
    fn test_all_casings_map_to_ui_value() {
        for raw in ["IN_PROGRESS", "in_progress", "in-progress", "In Progress"] {
            assert_eq!(TICKET.to_ui(raw), "in-progress");
        }
        assert_eq!(TICKET.to_ui("COMPLETED"), "completed");
    }

    #[test]
    fn test_ui_to_wire() {
        assert_eq!(TICKET.to_wire("in-progress"), "IN_PROGRESS");
        assert_eq!(TICKET.to_wire("pending"), "PENDING");
        assert_eq!(TICKET.to_wire("on-hold"), "ON_HOLD");
    }

    #[test]
    fn test_unknown_values_are_canonicalized() {
        assert_eq!(TICKET.to_ui("ON_HOLD"), "on-hold");
        assert!(!TICKET.contains("on-hold"));
        assert!(TICKET.contains("IN_PROGRESS"));
    }
}
