use leptos::prelude::*;

/// Decorative SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "size-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Header icons; step icons are named in `core::content::STEPS`
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
