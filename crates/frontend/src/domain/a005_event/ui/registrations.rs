//! Attendee list shown inside the event view modal.

use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::http::GlooTransport;
use crate::shared::i18n::use_i18n;
use contracts::domain::a005_event::{REGISTRATIONS, REGISTRATIONS_SEGMENT, SCHEMA};
use contracts::shared::list_view::{RestSource, Row};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn registrations_detail(event_id: String) -> AnyView {
    view! { <RegistrationsPanel event_id=event_id /> }.into_any()
}

#[component]
fn RegistrationsPanel(event_id: String) -> impl IntoView {
    let i18n = use_i18n();
    let (rows, set_rows) = signal(None::<Result<Vec<Row>, String>>);

    spawn_local(async move {
        let source = RestSource::new(GlooTransport, &SCHEMA);
        let result = source
            .fetch_children(&event_id, REGISTRATIONS_SEGMENT, &REGISTRATIONS)
            .await
            .map_err(|e| {
                log::warn!("registrations of {}: {}", event_id, e);
                e.user_message()
            });
        set_rows.try_set(Some(result));
    });

    let status_vocabulary = REGISTRATIONS.vocabulary("status");

    let content = move || match rows.get() {
        None => view! { <p class="list-state">{i18n.t("common.loading")}</p> }.into_any(),
        Some(Err(message)) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
        Some(Ok(rows)) if rows.is_empty() => {
            view! { <p class="list-state">{i18n.t("registrations.empty")}</p> }.into_any()
        }
        Some(Ok(rows)) => rows
            .into_iter()
            .map(|row| {
                let status = row.get_or_empty("status").to_string();
                let badge = status_vocabulary
                    .filter(|_| !status.is_empty())
                    .map(|vocabulary| view! { <StatusBadge vocabulary=vocabulary value=status /> });
                view! {
                    <li class="registrations__item">
                        <span class="registrations__name">{row.get_or_empty("name").to_string()}</span>
                        <span class="registrations__email">{row.get_or_empty("email").to_string()}</span>
                        <span class="registrations__date">{format_datetime(row.get_or_empty("registered_at"))}</span>
                        {badge}
                    </li>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section class="registrations">
            <h3 class="registrations__title">{move || i18n.t("registrations.title")}</h3>
            <ul class="registrations__list">{content}</ul>
        </section>
    }
}
