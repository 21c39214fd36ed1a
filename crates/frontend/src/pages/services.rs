//! Concierge services and the public request form.

use crate::shared::http::GlooTransport;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MARKETING;
use crate::shared::toast::use_toasts;
use chrono::Utc;
use contracts::domain::a004_concierge_request::{
    new_request_draft, validate_request, REQUEST_FORM_FIELDS, SCHEMA, SERVICE_TYPE,
};
use contracts::shared::list_view::{ListError, Notifier, RestSource, Toast};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use thaw::*;

fn service_icon(service: &str) -> &'static str {
    match service {
        "airport-transfer" => "map-pin",
        "property-viewing" => "eye",
        "interior-design" => "star",
        "moving" => "home",
        "cleaning" => "check-circle",
        "legal" => "briefcase",
        _ => "briefcase",
    }
}

fn input_type(field: &str) -> &'static str {
    match field {
        "email" => "email",
        "phone" => "tel",
        "preferred_date" => "date",
        _ => "text",
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let i18n = use_i18n();
    let draft = RwSignal::new(new_request_draft(None));

    let services = SERVICE_TYPE
        .ui_values()
        .map(|service| {
            let title_key = SERVICE_TYPE.label_key(service);
            let text_key = format!("services.items.{}", service);
            view! {
                <div class="feature-card">
                    <div class="feature-card__icon">{icon(service_icon(service))}</div>
                    <h3 class="feature-card__title">{move || i18n.t(&title_key)}</h3>
                    <p class="feature-card__text">{move || i18n.t(&text_key)}</p>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| draft.update(|d| {
                            d.insert("service_type".to_string(), service.to_string());
                        })
                    >
                        {move || i18n.t("services.request")}
                    </Button>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="services--marketing" category=PAGE_CAT_MARKETING>
            <section class="hero hero--compact">
                <h1 class="hero__title">{move || i18n.t("services.title")}</h1>
                <p class="hero__subtitle">{move || i18n.t("services.subtitle")}</p>
            </section>
            <section class="feature-grid">{services}</section>
            <RequestForm draft=draft />
        </PageFrame>
    }
}

#[component]
fn RequestForm(draft: RwSignal<BTreeMap<String, String>>) -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let values = draft.get_untracked();
        match validate_request(&values, Utc::now().date_naive()) {
            Ok(()) => errors.set(BTreeMap::new()),
            Err(ListError::Validation { fields }) => {
                errors.set(fields);
                return;
            }
            Err(err) => {
                toasts.notify(Toast::error(err.user_message()));
                return;
            }
        }

        submitting.set(true);
        spawn_local(async move {
            let source = RestSource::new(GlooTransport, &SCHEMA);
            match source.create(&values).await {
                Ok(_) => {
                    toasts.notify(Toast::success(i18n.t("services.form.sent")));
                    draft.try_set(new_request_draft(None));
                }
                Err(err) => {
                    log::warn!("concierge request failed: {}", err);
                    toasts.notify(Toast::error(err.user_message()));
                }
            }
            submitting.try_set(false);
        });
    };

    let fields = REQUEST_FORM_FIELDS
        .iter()
        .map(|&name| {
            let label_key = SCHEMA
                .field(name)
                .map(|f| f.label_key(SCHEMA.name))
                .unwrap_or_default();
            let value = move || draft.with(|d| d.get(name).cloned().unwrap_or_default());
            let set_value = move |v: String| {
                draft.update(|d| {
                    d.insert(name.to_string(), v);
                });
                errors.update(|e| {
                    e.remove(name);
                });
            };
            let error = move || errors.with(|e| e.get(name).cloned());

            let input = match name {
                "service_type" => {
                    let options = SERVICE_TYPE
                        .ui_values()
                        .map(|service| {
                            let key = SERVICE_TYPE.label_key(service);
                            view! {
                                <option value=service selected=move || value() == service>
                                    {move || i18n.t(&key)}
                                </option>
                            }
                        })
                        .collect_view();
                    view! {
                        <select
                            class="form__select"
                            prop:value=value
                            on:change=move |ev| set_value(event_target_value(&ev))
                        >
                            <option value="" selected=move || value().is_empty()>
                                {move || i18n.t("common.choose")}
                            </option>
                            {options}
                        </select>
                    }
                    .into_any()
                }
                "description" => view! {
                    <textarea
                        class="form__textarea"
                        rows="4"
                        prop:value=value
                        on:input=move |ev| set_value(event_target_value(&ev))
                    ></textarea>
                }
                .into_any(),
                _ => view! {
                    <input
                        class="form__input"
                        type=input_type(name)
                        prop:value=value
                        on:input=move |ev| set_value(event_target_value(&ev))
                    />
                }
                .into_any(),
            };

            view! {
                <div class="form__group" class:form__group--invalid=move || error().is_some()>
                    <Label>{move || i18n.t(&label_key)}</Label>
                    {input}
                    {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="request-form">
            <h2>{move || i18n.t("services.form.title")}</h2>
            <form class="form" on:submit=on_submit novalidate=true>
                {fields}
                <div class="form__actions">
                    <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { i18n.t("common.sending") } else { i18n.t("services.form.submit") }}
                    </button>
                </div>
            </form>
        </section>
    }
}
