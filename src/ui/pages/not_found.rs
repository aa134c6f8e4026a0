//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Answer with a real 404 status during server rendering
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página não encontrada | SmartAgenda" />

        <div class="flex min-h-screen flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="mb-4 text-6xl font-extrabold text-sa-ink">"404"</h1>

                <h2 class="mb-2 text-2xl font-bold text-sa-ink">"Página não encontrada"</h2>

                <p class="mx-auto mb-8 max-w-md text-sa-muted">
                    "O endereço que você procurou não existe ou foi movido."
                </p>

                <A href="/" attr:class="btn btn-primary">
                    "Voltar para o início"
                </A>
            </div>
        </div>
    }
}
