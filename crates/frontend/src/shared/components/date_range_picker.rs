use crate::shared::i18n::use_i18n;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

/// `(first day, last day)` of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day(1).unwrap_or(day);
    let next_month = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
    };
    let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(day);
    (start, end)
}

/// Two `yyyy-mm-dd` inputs with quick ranges. An empty side is unbounded.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    /// Called with `(from, to)` on every change.
    on_change: Callback<(String, String)>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    let i18n = use_i18n();

    let this_month = move |_| {
        let (start, end) = month_bounds(Utc::now().date_naive());
        on_change.run((start.format("%Y-%m-%d").to_string(), end.format("%Y-%m-%d").to_string()));
    };

    let last_30_days = move |_| {
        let today = Utc::now().date_naive();
        let start = today - Duration::days(30);
        on_change.run((start.format("%Y-%m-%d").to_string(), today.format("%Y-%m-%d").to_string()));
    };

    view! {
        <div class="date-range">
            <span class="date-range__label">{move || label.get()}</span>
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_from.get()
                on:change=move |ev| on_change.run((event_target_value(&ev), date_to.get_untracked()))
            />
            <span class="date-range__sep">"–"</span>
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_to.get()
                on:change=move |ev| on_change.run((date_from.get_untracked(), event_target_value(&ev)))
            />
            <button class="date-range__quick" on:click=this_month>
                {move || i18n.t("list.this_month")}
            </button>
            <button class="date-range__quick" on:click=last_30_days>
                {move || i18n.t("list.last_30_days")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let feb = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
        assert_eq!(
            month_bounds(feb),
            (NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        let dec = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(month_bounds(dec).1, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }
}
