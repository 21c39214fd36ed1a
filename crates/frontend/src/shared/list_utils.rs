/// Утилиты для списков: поле поиска, индикаторы сортировки, подсветка совпадений

use contracts::shared::config::app_config;
use contracts::shared::list_view::{Debouncer, SortSpec};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let term = term.trim();
    if term.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, term);
    if parts.len() == 1 && !parts[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    parts
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                view! { <mark class="search-hit">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Разбивает текст на фрагменты `(текст, совпадение)`
fn split_matches(text: &str, term: &str) -> Vec<(String, bool)> {
    let text_lower = text.to_lowercase();
    let term_lower = term.to_lowercase();
    // Вне ASCII lowercase может менять длину в байтах: без подсветки
    if term_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    while let Some(pos) = text_lower[last..].find(&term_lower) {
        let start = last + pos;
        let end = start + term_lower.len();
        if start > last {
            parts.push((text[last..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last = end;
    }
    if last < text.len() || parts.is_empty() {
        parts.push((text[last..].to_string(), false));
    }
    parts
}

/// Получить индикатор сортировки для заголовка
pub fn sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => {
            if s.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// Компонент поиска с debounce и кнопкой очистки
///
/// Нажатия внутри окна debounce дают один вызов `on_change` с последним
/// текстом; очистка срабатывает сразу.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] placeholder: Signal<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::<String>::from_millis(
        app_config().list.debounce_ms,
    ));

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let ticket = debouncer.try_update_value(|d| d.push(new_value));
        let delay = debouncer.with_value(|d| d.delay().as_millis() as u32);
        if let Some(ticket) = ticket {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                if let Some(term) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                    on_change.run(term);
                }
            });
        }
    };

    // Сброс фильтров снаружи очищает и поле
    Effect::new(move |_| {
        if value.get().is_empty() {
            debouncer.update_value(|d| d.cancel());
            set_input_value.set(String::new());
        }
    });

    let clear_filter = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="search"
                class="search-input__field"
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Marina View Villa", "view"),
            vec![
                ("Marina ".to_string(), false),
                ("View".to_string(), true),
                (" Villa".to_string(), false)
            ]
        );
        assert_eq!(split_matches("abc", "x"), vec![("abc".to_string(), false)]);
        assert_eq!(split_matches("aa", "a"), vec![("a".to_string(), true), ("a".to_string(), true)]);
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::asc("price");
        assert_eq!(sort_indicator(Some(&sort), "price"), " ▲");
        assert_eq!(sort_indicator(Some(&SortSpec::desc("price")), "price"), " ▼");
        assert_eq!(sort_indicator(Some(&sort), "title"), " ⇅");
        assert_eq!(sort_indicator(None, "title"), " ⇅");
    }
}
