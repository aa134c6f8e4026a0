//! Banner carousel component
//!
//! Binds a [`CarouselController`] to the DOM: the active slide is mirrored into
//! a signal through a controller listener, and the previous/next buttons and the
//! indicator dots call back into the controller. The controller (and with it the
//! auto-advance timer) only exists in the browser; the server renders slide 0.

use leptos::prelude::*;

use crate::core::{AdvancePolicy, CarouselError, CarouselOptions, DisplayItem};

#[cfg(feature = "hydrate")]
use crate::core::CarouselController;
#[cfg(not(feature = "hydrate"))]
use crate::core::CarouselState;

/// Options used by the landing page banners
pub fn banner_options() -> CarouselOptions {
    CarouselOptions::default().policy(AdvancePolicy::ResetOnInteraction)
}

/// Reactive handle shared by the carousel's buttons
#[derive(Clone, Copy)]
struct CarouselBinding {
    selected: RwSignal<usize>,
    #[cfg(feature = "hydrate")]
    controller: StoredValue<CarouselController<DisplayItem>, LocalStorage>,
}

impl CarouselBinding {
    /// Create the controller, subscribe the `selected` signal and start auto-advance.
    ///
    /// The listener and the timer are released when the owning component unmounts.
    fn mount(items: Vec<DisplayItem>, options: CarouselOptions) -> Result<Self, CarouselError> {
        let selected = RwSignal::new(0usize);

        #[cfg(feature = "hydrate")]
        {
            use crate::core::BrowserScheduler;
            use std::rc::Rc;

            let controller = CarouselController::new(items, options, Rc::new(BrowserScheduler))?;
            let listener = controller.subscribe(move |index| selected.set(index));
            controller.activate();

            let controller = StoredValue::new_local(controller);
            on_cleanup(move || {
                controller.try_with_value(|c| {
                    c.unsubscribe(listener);
                    c.deactivate();
                });
            });

            Ok(Self {
                selected,
                controller,
            })
        }

        #[cfg(not(feature = "hydrate"))]
        {
            CarouselState::new(items, options.looping)?;
            Ok(Self { selected })
        }
    }

    fn next(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.controller.with_value(|c| c.next());
        }
    }

    fn previous(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.controller.with_value(|c| c.previous());
        }
    }

    fn go_to(&self, index: usize) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = self.controller.with_value(|c| c.go_to(index)) {
                leptos::logging::warn!("Ignoring slide selection: {}", err);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = index;
        }
    }
}

/// Auto-rotating banner carousel with previous/next buttons and indicator dots
#[component]
pub fn BannerCarousel(
    /// Slides, in display order
    items: Vec<DisplayItem>,
    /// Navigation and auto-advance settings
    #[prop(default = banner_options())]
    options: CarouselOptions,
) -> impl IntoView {
    let binding = match CarouselBinding::mount(items.clone(), options) {
        Ok(binding) => binding,
        Err(err) => {
            leptos::logging::error!("Banner carousel disabled: {}", err);
            return ().into_any();
        }
    };
    let selected = binding.selected;

    let slides = items
        .iter()
        .map(|item| {
            view! {
                <div class="min-w-0 shrink-0 grow-0 basis-full">
                    <img src=item.image_source.clone() alt=item.alt_text.clone() class="w-full" />
                </div>
            }
        })
        .collect_view();

    let indicators = (0..items.len())
        .map(|index| {
            view! {
                <button
                    class="size-2.5 rounded-full transition"
                    class=("bg-sa-brand", move || selected.get() == index)
                    class=("bg-[#b8d9c5]", move || selected.get() != index)
                    aria-label=format!("Ir para slide {}", index + 1)
                    aria-current=move || (selected.get() == index).then_some("true")
                    on:click=move |_| binding.go_to(index)
                />
            }
        })
        .collect_view();

    view! {
        <div class="relative mt-5 overflow-hidden rounded-3xl border border-sa-line bg-white">
            // Rotates on its own, so slide changes are not announced
            <div class="overflow-hidden" aria-live="off">
                <div
                    class="flex transition-transform duration-500 ease-out"
                    style:transform=move || format!("translateX(-{}%)", selected.get() * 100)
                >
                    {slides}
                </div>
            </div>

            <button
                class="absolute top-1/2 left-2 z-10 grid size-9 -translate-y-1/2 place-items-center rounded-full border border-sa-line bg-white/90 text-xl"
                on:click=move |_| binding.previous()
                aria-label="Slide anterior"
            >
                "‹"
            </button>
            <button
                class="absolute top-1/2 right-2 z-10 grid size-9 -translate-y-1/2 place-items-center rounded-full border border-sa-line bg-white/90 text-xl"
                on:click=move |_| binding.next()
                aria-label="Próximo slide"
            >
                "›"
            </button>

            <div class="absolute bottom-3 left-1/2 flex -translate-x-1/2 gap-1.5 rounded-full bg-white/75 px-2 py-1 backdrop-blur">
                {indicators}
            </div>
        </div>
    }
    .into_any()
}
