use crate::shared::i18n::use_i18n;
use contracts::shared::list_view::Vocabulary;
use leptos::prelude::*;

/// Colour variant of a vocabulary value.
pub fn badge_variant(ui_value: &str) -> &'static str {
    match ui_value {
        "active" | "confirmed" | "completed" | "published" | "verified" | "responded"
        | "attended" => "success",
        "pending" | "new" | "in-progress" | "draft" | "medium" | "registered" => "warning",
        "cancelled" | "suspended" | "rejected" | "closed" | "urgent" | "high" | "inactive" => {
            "error"
        }
        _ => "neutral",
    }
}

/// Translated vocabulary value rendered as a coloured badge.
#[component]
pub fn StatusBadge(vocabulary: &'static Vocabulary, #[prop(into)] value: String) -> impl IntoView {
    let i18n = use_i18n();
    let class = format!("badge badge--{}", badge_variant(&value));
    let key = vocabulary.label_key(&value);
    let fallback = value.clone();
    let text = move || {
        if fallback.is_empty() {
            String::new()
        } else {
            i18n.t(&key)
        }
    };

    view! { <span class=class>{text}</span> }
}
