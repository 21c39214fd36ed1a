use super::rows::column_label_key;
use super::ListPageSpec;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::list_view::{FieldKind, FieldSpec, ListController, ModalKind, Row};
use leptos::prelude::*;
use thaw::*;

/// View, edit, assign and delete-confirmation dialogs of a list page.
///
/// Reads its target and initial draft once; phase, error and field errors
/// stay reactive so the dialog reflects the in-flight mutation.
#[component]
pub fn RowModal(
    spec: ListPageSpec,
    ctrl: RwSignal<ListController>,
    kind: ModalKind,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// `(field, value)` written into the draft before confirming.
    on_draft: Callback<(String, String)>,
) -> impl IntoView {
    let i18n = use_i18n();
    let Some(initial) = ctrl.with_untracked(|c| c.modal().cloned()) else {
        return ().into_any();
    };
    let schema = spec.schema;
    let row_title = spec.row_title(&initial.target);

    let saving = Signal::derive(move || ctrl.with(|c| c.modal().is_some_and(|m| m.is_saving())));
    let error = move || ctrl.with(|c| c.modal().and_then(|m| m.error.clone()));

    let title_key = match kind {
        ModalKind::View => "modal.view_title",
        ModalKind::Edit => "modal.edit_title",
        ModalKind::Assign => "modal.assign_title",
        ModalKind::ConfirmDelete => "modal.delete_title",
    };
    let title_name = row_title.clone();
    let title = Signal::derive(move || i18n.t_args(title_key, &[("name", title_name.clone())]));

    // Draft inputs of the edit/assign forms, pushed into the controller on save.
    let inputs: Vec<(&'static FieldSpec, RwSignal<String>)> = match kind {
        ModalKind::Edit => schema
            .editable_fields()
            .map(|f| (f, RwSignal::new(initial.draft_value(f.name).to_string())))
            .collect(),
        ModalKind::Assign => schema
            .assign_field
            .and_then(|name| schema.field(name))
            .map(|f| vec![(f, RwSignal::new(initial.draft_value(f.name).to_string()))])
            .unwrap_or_default(),
        ModalKind::View | ModalKind::ConfirmDelete => Vec::new(),
    };
    let inputs = StoredValue::new(inputs);

    let submit = move |_| {
        inputs.with_value(|inputs| {
            for (field, value) in inputs {
                on_draft.run((field.name.to_string(), value.get_untracked()));
            }
        });
        on_confirm.run(());
    };

    let body = match kind {
        ModalKind::View => view_body(spec, &initial.target).into_any(),
        ModalKind::Edit | ModalKind::Assign => {
            let fields = inputs
                .get_value()
                .into_iter()
                .map(|(field, value)| form_field(spec, ctrl, field, value, saving))
                .collect_view();
            view! { <div class="form">{fields}</div> }.into_any()
        }
        ModalKind::ConfirmDelete => {
            let name = row_title.clone();
            view! {
                <p class="modal-message">
                    {move || i18n.t_args("modal.delete_message", &[("name", name.clone())])}
                </p>
            }
            .into_any()
        }
    };

    let footer = match kind {
        ModalKind::View => view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                {move || i18n.t("common.close")}
            </Button>
        }
        .into_any(),
        ModalKind::ConfirmDelete => view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(()) disabled=saving>
                {move || i18n.t("common.cancel")}
            </Button>
            <Button appearance=ButtonAppearance::Primary class="button--danger" on_click=submit disabled=saving>
                {move || if saving.get() { i18n.t("common.deleting") } else { i18n.t("common.delete") }}
            </Button>
        }
        .into_any(),
        ModalKind::Edit | ModalKind::Assign => view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(()) disabled=saving>
                {move || i18n.t("common.cancel")}
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=submit disabled=saving>
                {move || if saving.get() { i18n.t("common.saving") } else { i18n.t("common.save") }}
            </Button>
        }
        .into_any(),
    };

    view! {
        <ModalFrame on_close=on_cancel title=title>
            <div class="modal-body">
                {move || error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {body}
            </div>
            <div class="modal-footer">{footer}</div>
        </ModalFrame>
    }
    .into_any()
}

fn view_body(spec: ListPageSpec, row: &Row) -> impl IntoView {
    let i18n = use_i18n();
    let schema = spec.schema;
    let items = schema
        .fields
        .iter()
        .map(|field| {
            let key = column_label_key(schema, field.name);
            let raw = row.get_or_empty(field.name).to_string();
            let value = match field.kind {
                FieldKind::Enum(vocabulary) if !raw.is_empty() => {
                    view! { <StatusBadge vocabulary=vocabulary value=raw /> }.into_any()
                }
                FieldKind::Timestamp => view! { <span>{format_datetime(&raw)}</span> }.into_any(),
                _ if raw.is_empty() => view! { <span class="detail-list__empty">"—"</span> }.into_any(),
                _ => view! { <span>{raw}</span> }.into_any(),
            };
            view! {
                <div class="detail-list__item">
                    <dt>{move || i18n.t(&key)}</dt>
                    <dd>{value}</dd>
                </div>
            }
        })
        .collect_view();
    let extra = spec.detail.map(|detail| detail(row.id.clone()));

    view! {
        <dl class="detail-list">
            <div class="detail-list__item">
                <dt>{move || i18n.t("common.id")}</dt>
                <dd>{row.id.clone()}</dd>
            </div>
            {items}
        </dl>
        {extra}
    }
}

fn form_field(
    spec: ListPageSpec,
    ctrl: RwSignal<ListController>,
    field: &'static FieldSpec,
    value: RwSignal<String>,
    saving: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let key = column_label_key(spec.schema, field.name);
    let field_error = move || {
        ctrl.with(|c| c.modal().and_then(|m| m.field_errors.get(field.name).cloned()))
    };

    let input = match field.kind {
        FieldKind::Enum(vocabulary) => {
            let options = vocabulary
                .ui_values()
                .map(|option| {
                    let option_key = vocabulary.label_key(option);
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {move || i18n.t(&option_key)}
                        </option>
                    }
                })
                .collect_view();
            view! {
                <select
                    class="form__select"
                    prop:value=move || value.get()
                    disabled=move || saving.get()
                    on:change=move |ev| value.set(event_target_value(&ev))
                >
                    <option value="" selected=move || value.get().is_empty()>
                        {move || i18n.t("common.choose")}
                    </option>
                    {options}
                </select>
            }
            .into_any()
        }
        FieldKind::Number => view! {
            <Input value=value input_type=InputType::Number disabled=saving />
        }
        .into_any(),
        _ => view! { <Input value=value disabled=saving /> }.into_any(),
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || field_error().is_some()>
            <Label>{move || i18n.t(&key)}</Label>
            {input}
            {move || field_error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
