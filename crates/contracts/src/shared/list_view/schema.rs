use super::dispatcher::RowAction;
use super::status::Vocabulary;
use crate::shared::validation::ValidationRules;

/// How a field's raw value is interpreted during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    Timestamp,
    Enum(&'static Vocabulary),
}

impl FieldKind {
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            FieldKind::Enum(vocabulary) => vocabulary.to_ui(raw),
            FieldKind::Flag => match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "y" => "true".to_string(),
                _ => "false".to_string(),
            },
            FieldKind::Text | FieldKind::Number | FieldKind::Timestamp => raw.trim().to_string(),
        }
    }

    /// Value to send to the backend for this field.
    pub fn to_wire(&self, ui: &str) -> String {
        match self {
            FieldKind::Enum(vocabulary) => vocabulary.to_wire(ui),
            _ => ui.to_string(),
        }
    }
}

/// One logical attribute of an entity and the ordered backend names it may
/// arrive under. The first flat (non-dotted) alias is used when writing back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub default: &'static str,
    pub kind: FieldKind,
    pub editable: bool,
    pub rules: ValidationRules,
}

impl FieldSpec {
    pub const fn text(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            default: "",
            kind: FieldKind::Text,
            editable: false,
            rules: ValidationRules::none(),
        }
    }

    pub const fn number(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            kind: FieldKind::Number,
            default: "0",
            ..Self::text(name, aliases)
        }
    }

    pub const fn timestamp(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            kind: FieldKind::Timestamp,
            ..Self::text(name, aliases)
        }
    }

    pub const fn flag(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            kind: FieldKind::Flag,
            default: "false",
            ..Self::text(name, aliases)
        }
    }

    pub const fn enumerated(
        name: &'static str,
        aliases: &'static [&'static str],
        vocabulary: &'static Vocabulary,
    ) -> Self {
        Self {
            kind: FieldKind::Enum(vocabulary),
            ..Self::text(name, aliases)
        }
    }

    pub const fn editable(self) -> Self {
        Self {
            editable: true,
            ..self
        }
    }

    pub const fn with_rules(self, rules: ValidationRules) -> Self {
        Self { rules, ..self }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Backend name used in request bodies.
    pub fn wire_name(&self) -> &'static str {
        self.aliases
            .iter()
            .copied()
            .find(|alias| !alias.contains('.'))
            .unwrap_or(self.name)
    }

    pub fn vocabulary(&self) -> Option<&'static Vocabulary> {
        match self.kind {
            FieldKind::Enum(vocabulary) => Some(vocabulary),
            _ => None,
        }
    }

    /// i18n key for the column/field label.
    pub fn label_key(&self, entity: &str) -> String {
        format!("{}.fields.{}", entity, self.name)
    }
}

/// Where predicates are evaluated for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Backend filters and pages; results are used as-is.
    Server,
    /// Backend filters and pages; predicates are re-applied to the page.
    ServerVerified,
    /// Everything is fetched once; filtering and paging happen locally.
    Client,
}

/// What the summary cards are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsScope {
    CurrentPage,
    LoadedSet,
    Endpoint(&'static str),
}

/// Declarative description of one list resource.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Stable name, also the i18n namespace.
    pub name: &'static str,
    /// Read endpoint.
    pub endpoint: &'static str,
    /// Base path for `/:id` mutations.
    pub resource: &'static str,
    pub id_aliases: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub search_fields: &'static [&'static str],
    /// `search` or `q`.
    pub search_param: &'static str,
    /// Extra collection keys tried after the standard envelope rules.
    pub collection_keys: &'static [&'static str],
    /// Field used by the `date_from`/`date_to` range filter.
    pub date_field: Option<&'static str>,
    /// Field used by the "last 24 hours" stat.
    pub created_field: Option<&'static str>,
    /// Enumerated field driven by close/approve/reject.
    pub status_field: Option<&'static str>,
    /// Field written by the assign action.
    pub assign_field: Option<&'static str>,
    /// UI status value each status action moves a row to.
    pub transitions: &'static [(RowAction, &'static str)],
    pub actions: &'static [RowAction],
    pub filter_mode: FilterMode,
    pub stats_scope: StatsScope,
    /// Singular label used in toast messages.
    pub label: &'static str,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    pub fn vocabulary(&self, field: &str) -> Option<&'static Vocabulary> {
        self.field(field).and_then(FieldSpec::vocabulary)
    }

    pub fn enum_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Enum(_)))
    }

    pub fn editable_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        fields.iter().filter(|f| f.editable)
    }

    pub fn supports(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn transition(&self, action: RowAction) -> Option<&'static str> {
        self.transitions
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, status)| *status)
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource.trim_end_matches('/'), id)
    }
}
