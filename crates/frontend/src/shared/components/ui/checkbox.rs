use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let label_for = id.clone();

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=is_disabled>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
