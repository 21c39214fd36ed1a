//! Row action dispatcher: maps action clicks to modal transitions or
//! mutation requests.
//!
//! Modal lifecycle: `Closed -> Open -> { Saving -> Closed | Open(error) } | Closed`.
//! At most one modal is open per controller, and a row with a mutation in
//! flight accepts no further mutations.

use super::error::ListError;
use super::row::Row;
use super::schema::{EntitySchema, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Assign,
    Close,
    Approve,
    Reject,
}

impl RowAction {
    pub const ALL: [RowAction; 7] = [
        RowAction::View,
        RowAction::Edit,
        RowAction::Delete,
        RowAction::Assign,
        RowAction::Close,
        RowAction::Approve,
        RowAction::Reject,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::Assign => "assign",
            RowAction::Close => "close",
            RowAction::Approve => "approve",
            RowAction::Reject => "reject",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.tag() == tag.trim())
    }

    /// Actions that fire a status mutation without a modal.
    pub fn is_status_change(&self) -> bool {
        matches!(self, RowAction::Close | RowAction::Approve | RowAction::Reject)
    }

    /// Past tense used in toast messages.
    pub fn past_tense(&self) -> &'static str {
        match self {
            RowAction::View => "viewed",
            RowAction::Edit => "updated",
            RowAction::Delete => "deleted",
            RowAction::Assign => "assigned",
            RowAction::Close => "closed",
            RowAction::Approve => "approved",
            RowAction::Reject => "rejected",
        }
    }

    /// i18n key for button labels.
    pub fn label_key(&self) -> String {
        format!("actions.{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    View,
    Edit,
    Assign,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Open,
    Saving,
}

/// An open modal. A closed modal is simply `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub kind: ModalKind,
    pub target: Row,
    pub phase: ModalPhase,
    /// Editable values (edit/assign forms).
    pub draft: BTreeMap<String, String>,
    pub error: Option<String>,
    pub field_errors: BTreeMap<String, String>,
}

impl ModalState {
    fn open(kind: ModalKind, target: Row, draft: BTreeMap<String, String>) -> Self {
        Self {
            kind,
            target,
            phase: ModalPhase::Open,
            draft,
            error: None,
            field_errors: BTreeMap::new(),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.phase == ModalPhase::Saving
    }

    pub fn draft_value(&self, field: &str) -> &str {
        self.draft.get(field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Update { changes: BTreeMap<String, String> },
    Delete,
    SetStatus { status: String },
    Assign { assignee: String },
}

/// A mutating call to perform, plus the row as it should look afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub row_id: String,
    pub action: RowAction,
    pub kind: MutationKind,
    /// Target row with the submitted values applied; the fallback used when
    /// the server response is incomplete.
    pub submitted: Row,
}

/// What a dispatched action resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Opened(ModalKind),
    Mutate(MutationRequest),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("action '{}' is not available here", .0.tag())]
    Unsupported(RowAction),
    #[error("another dialog is already open")]
    ModalBusy,
    #[error("an action for this item is still in progress")]
    RowBusy(String),
    #[error("item {0} is no longer in the list")]
    RowNotFound(String),
    #[error("nothing to confirm")]
    NothingToConfirm,
    /// The edit draft equals the row; the modal was closed without a call.
    #[error("nothing was changed")]
    Unchanged,
    #[error("{}", .0.user_message())]
    Invalid(ListError),
}

#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    modal: Option<ModalState>,
    pending: BTreeSet<String>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    pub fn is_pending(&self, row_id: &str) -> bool {
        self.pending.contains(row_id)
    }

    pub fn dispatch(
        &mut self,
        action: RowAction,
        row: &Row,
        schema: &EntitySchema,
    ) -> Result<Dispatch, DispatchError> {
        if !schema.supports(action) {
            return Err(DispatchError::Unsupported(action));
        }

        if action != RowAction::View && self.is_pending(&row.id) {
            return Err(DispatchError::RowBusy(row.id.clone()));
        }

        match action {
            RowAction::View => self.open(ModalKind::View, row, BTreeMap::new()),
            RowAction::Edit => {
                let draft = schema
                    .editable_fields()
                    .map(|f| (f.name.to_string(), row.get_or_empty(f.name).to_string()))
                    .collect();
                self.open(ModalKind::Edit, row, draft)
            }
            RowAction::Assign => {
                let field = schema
                    .assign_field
                    .ok_or(DispatchError::Unsupported(action))?;
                let draft = BTreeMap::from([(
                    field.to_string(),
                    row.get_or_empty(field).to_string(),
                )]);
                self.open(ModalKind::Assign, row, draft)
            }
            RowAction::Delete => self.open(ModalKind::ConfirmDelete, row, BTreeMap::new()),
            RowAction::Close | RowAction::Approve | RowAction::Reject => {
                let (field, status) = schema
                    .status_field
                    .zip(schema.transition(action))
                    .ok_or(DispatchError::Unsupported(action))?;
                let wire = schema
                    .vocabulary(field)
                    .map(|v| v.to_wire(status))
                    .unwrap_or_else(|| status.to_string());
                let mut submitted = row.clone();
                submitted.set(field, status);
                self.pending.insert(row.id.clone());
                Ok(Dispatch::Mutate(MutationRequest {
                    row_id: row.id.clone(),
                    action,
                    kind: MutationKind::SetStatus { status: wire },
                    submitted,
                }))
            }
        }
    }

    fn open(
        &mut self,
        kind: ModalKind,
        row: &Row,
        draft: BTreeMap<String, String>,
    ) -> Result<Dispatch, DispatchError> {
        if self.modal.is_some() {
            return Err(DispatchError::ModalBusy);
        }
        self.modal = Some(ModalState::open(kind, row.clone(), draft));
        Ok(Dispatch::Opened(kind))
    }

    /// Updates one draft value of an open edit/assign modal.
    pub fn set_draft(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.modal.as_mut() {
            Some(modal)
                if modal.phase == ModalPhase::Open
                    && matches!(modal.kind, ModalKind::Edit | ModalKind::Assign)
                    && modal.draft.contains_key(field) =>
            {
                modal.draft.insert(field.to_string(), value.into());
                modal.field_errors.remove(field);
                true
            }
            _ => false,
        }
    }

    /// Closes the modal unless a save is in progress.
    pub fn cancel(&mut self) -> bool {
        match &self.modal {
            Some(modal) if modal.phase == ModalPhase::Saving => false,
            Some(_) => {
                self.modal = None;
                true
            }
            None => false,
        }
    }

    /// Confirms the open modal, producing the mutation to run.
    ///
    /// The only path to a delete call is through a ConfirmDelete modal.
    pub fn confirm(&mut self, schema: &EntitySchema) -> Result<MutationRequest, DispatchError> {
        let modal = self.modal.as_mut().ok_or(DispatchError::NothingToConfirm)?;
        if modal.phase == ModalPhase::Saving {
            return Err(DispatchError::RowBusy(modal.target.id.clone()));
        }

        let (kind, action, submitted) = match modal.kind {
            ModalKind::View => return Err(DispatchError::NothingToConfirm),
            ModalKind::ConfirmDelete => {
                (MutationKind::Delete, RowAction::Delete, modal.target.clone())
            }
            ModalKind::Edit => {
                let field_errors = validate_draft(&modal.draft, schema);
                if !field_errors.is_empty() {
                    modal.field_errors = field_errors.clone();
                    return Err(DispatchError::Invalid(ListError::validation(field_errors)));
                }
                let mut submitted = modal.target.clone();
                let mut changes = BTreeMap::new();
                for (field, value) in &modal.draft {
                    let value = value.trim().to_string();
                    if modal.target.get(field) != Some(value.as_str()) {
                        changes.insert(field.clone(), value.clone());
                    }
                    submitted.set(field.clone(), value);
                }
                if changes.is_empty() {
                    self.modal = None;
                    return Err(DispatchError::Unchanged);
                }
                (MutationKind::Update { changes }, RowAction::Edit, submitted)
            }
            ModalKind::Assign => {
                let field = schema
                    .assign_field
                    .ok_or(DispatchError::Unsupported(RowAction::Assign))?;
                let assignee = modal.draft_value(field).trim().to_string();
                if assignee.is_empty() {
                    let errors =
                        BTreeMap::from([(field.to_string(), "Assignee is required".to_string())]);
                    modal.field_errors = errors.clone();
                    return Err(DispatchError::Invalid(ListError::validation(errors)));
                }
                let mut submitted = modal.target.clone();
                submitted.set(field, assignee.clone());
                (MutationKind::Assign { assignee }, RowAction::Assign, submitted)
            }
        };

        modal.phase = ModalPhase::Saving;
        modal.error = None;
        modal.field_errors.clear();
        let row_id = modal.target.id.clone();
        self.pending.insert(row_id.clone());

        Ok(MutationRequest {
            row_id,
            action,
            kind,
            submitted,
        })
    }

    /// Records the end of a mutation: success closes its modal, failure
    /// reopens it with the message so the user can retry or cancel.
    pub fn settle(&mut self, request: &MutationRequest, result: Result<(), String>) {
        self.pending.remove(&request.row_id);

        let owns_modal = self
            .modal
            .as_ref()
            .is_some_and(|m| m.target.id == request.row_id && m.phase == ModalPhase::Saving);
        if !owns_modal {
            return;
        }

        match result {
            Ok(()) => self.modal = None,
            Err(message) => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.phase = ModalPhase::Open;
                    modal.error = Some(message);
                }
            }
        }
    }
}

/// Per-field validation of an edit draft against the schema rules.
pub fn validate_draft(
    draft: &BTreeMap<String, String>,
    schema: &EntitySchema,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    for (name, value) in draft {
        let Some(field) = schema.field(name) else {
            continue;
        };
        let label = humanize(field.name);
        if let Err(message) = field.rules.validate_string(value, &label) {
            errors.insert(name.clone(), message);
            continue;
        }
        if let FieldKind::Enum(vocabulary) = field.kind {
            if !value.trim().is_empty() && !vocabulary.contains(value) {
                errors.insert(name.clone(), format!("{} has an unknown value", label));
            }
        }
    }
    errors
}

/// `client_name` -> `Client name`.
fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::{ticket, TICKETS};

    #[test]
    fn test_delete_requires_confirmation() {
        let mut d = ActionDispatcher::new();
        let row = ticket("5", "Ali", "pending");

        let out = d.dispatch(RowAction::Delete, &row, &TICKETS).unwrap();
        assert_eq!(out, Dispatch::Opened(ModalKind::ConfirmDelete));
        assert!(!d.is_pending("5"));

        let request = d.confirm(&TICKETS).unwrap();
        assert_eq!(request.kind, MutationKind::Delete);
        assert!(d.is_pending("5"));
        assert!(d.modal().unwrap().is_saving());
    }

    #[test]
    fn test_cancelled_delete_never_produces_a_request() {
        let mut d = ActionDispatcher::new();
        let row = ticket("5", "Ali", "pending");
        d.dispatch(RowAction::Delete, &row, &TICKETS).unwrap();
        assert!(d.cancel());
        assert_eq!(d.confirm(&TICKETS), Err(DispatchError::NothingToConfirm));
    }

    #[test]
    fn test_one_modal_at_a_time() {
        let mut d = ActionDispatcher::new();
        d.dispatch(RowAction::View, &ticket("1", "A", "pending"), &TICKETS)
            .unwrap();
        assert_eq!(
            d.dispatch(RowAction::Edit, &ticket("2", "B", "pending"), &TICKETS),
            Err(DispatchError::ModalBusy)
        );
        assert_eq!(d.confirm(&TICKETS), Err(DispatchError::NothingToConfirm));
    }

    #[test]
    fn test_edit_validation_blocks_submission() {
        let mut d = ActionDispatcher::new();
        d.dispatch(RowAction::Edit, &ticket("1", "Ann", "pending"), &TICKETS)
            .unwrap();
        assert!(d.set_draft("client_name", "  "));
        assert!(d.set_draft("email", "not-an-email"));

        let err = d.confirm(&TICKETS).unwrap_err();
        assert!(matches!(err, DispatchError::Invalid(ListError::Validation { .. })));
        let modal = d.modal().unwrap();
        assert_eq!(modal.phase, ModalPhase::Open);
        assert_eq!(modal.field_errors.len(), 2);
        assert!(!d.is_pending("1"));

        d.set_draft("client_name", "Ann Lee");
        d.set_draft("email", "ann@example.com");
        let request = d.confirm(&TICKETS).unwrap();
        match request.kind {
            MutationKind::Update { changes } => {
                assert_eq!(changes.get("client_name").map(String::as_str), Some("Ann Lee"));
                assert!(!changes.contains_key("status"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(request.submitted.get("client_name"), Some("Ann Lee"));
    }

    #[test]
    fn test_unchanged_edit_closes_without_a_call() {
        let mut d = ActionDispatcher::new();
        d.dispatch(RowAction::Edit, &ticket("1", "Ann", "pending"), &TICKETS)
            .unwrap();
        // Whitespace around an unchanged value is not a change.
        assert!(d.set_draft("client_name", " Ann "));

        assert_eq!(d.confirm(&TICKETS), Err(DispatchError::Unchanged));
        assert!(d.modal().is_none());
        assert!(!d.is_pending("1"));
    }

    #[test]
    fn test_failed_mutation_reopens_modal_with_message() {
        let mut d = ActionDispatcher::new();
        d.dispatch(RowAction::Delete, &ticket("9", "Z", "pending"), &TICKETS)
            .unwrap();
        let request = d.confirm(&TICKETS).unwrap();
        assert!(!d.cancel());

        d.settle(&request, Err("Ticket is locked".to_string()));
        let modal = d.modal().unwrap();
        assert_eq!(modal.phase, ModalPhase::Open);
        assert_eq!(modal.error.as_deref(), Some("Ticket is locked"));
        assert!(!d.is_pending("9"));

        let retry = d.confirm(&TICKETS).unwrap();
        d.settle(&retry, Ok(()));
        assert!(d.modal().is_none());
    }

    #[test]
    fn test_status_change_marks_row_pending() {
        let mut d = ActionDispatcher::new();
        let row = ticket("3", "C", "in-progress");
        let out = d.dispatch(RowAction::Close, &row, &TICKETS).unwrap();
        let request = match out {
            Dispatch::Mutate(request) => request,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(
            request.kind,
            MutationKind::SetStatus {
                status: "COMPLETED".to_string()
            }
        );
        assert_eq!(request.submitted.get("status"), Some("completed"));
        assert_eq!(
            d.dispatch(RowAction::Close, &row, &TICKETS),
            Err(DispatchError::RowBusy("3".to_string()))
        );
        assert!(d.dispatch(RowAction::View, &row, &TICKETS).is_ok());

        d.settle(&request, Ok(()));
        assert!(!d.is_pending("3"));
        // The unrelated view modal stays open.
        assert_eq!(d.modal().unwrap().kind, ModalKind::View);
    }

    #[test]
    fn test_unsupported_actions() {
        let mut d = ActionDispatcher::new();
        assert_eq!(
            d.dispatch(RowAction::Approve, &ticket("1", "A", "pending"), &TICKETS),
            Err(DispatchError::Unsupported(RowAction::Approve))
        );
    }

    #[test]
    fn test_assign_requires_assignee() {
        let mut d = ActionDispatcher::new();
        d.dispatch(RowAction::Assign, &ticket("4", "D", "pending"), &TICKETS)
            .unwrap();
        assert!(matches!(d.confirm(&TICKETS), Err(DispatchError::Invalid(_))));
        d.set_draft("assigned_to", "Concierge Nora");
        let request = d.confirm(&TICKETS).unwrap();
        assert_eq!(
            request.kind,
            MutationKind::Assign {
                assignee: "Concierge Nora".to_string()
            }
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for action in RowAction::ALL {
            assert_eq!(RowAction::from_tag(action.tag()), Some(action));
        }
        assert_eq!(RowAction::from_tag("archive"), None);
    }
}
