use leptos::prelude::*;

/// Button with variants ("primary" by default, "secondary", "ghost", "danger")
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "sm" renders a compact icon button
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows a busy marker and blocks clicks while true
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), size_class())
            class:button--busy=is_busy
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                // the click bubbles to row handlers otherwise
                ev.stop_propagation();
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
