use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Success,
    Warning,
    Error,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Error => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count shown in the card (None while the first load is running)
    #[prop(into)]
    value: Signal<Option<usize>>,
    tone: CardTone,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
