//! Landing page component
//!
//! The SmartAgenda marketing page, shared by all three page variants:
//! - SEO meta tags and JSON-LD for search engines
//! - Sticky header with desktop navigation and a mobile menu
//! - Hero with the logo-clipped photo and call-to-action buttons
//! - Segments, step-by-step explainer, feature list and campaign banners,
//!   ordered per variant
//! - Lead-capture form and footer
//!
//! Scroll reveals are plain CSS transitions toggled by an IntersectionObserver.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{
    self, BUSINESS_TYPES, FEATURE_PANEL_ALT, FEATURE_PANEL_SRC, FEATURES, HERO_PHOTO, LOGO_SRC,
    NAV_LINKS, PublicUrl, SEGMENTS, STEPS, StructuredData,
};
use crate::core::{PageVariant, Section};
use crate::ui::carousel::BannerCarousel;
use crate::ui::icon::{Icon, icons};

/// Landing page for one of the page variants
#[component]
pub fn LandingPage(variant: PageVariant) -> impl IntoView {
    let sections = variant
        .sections()
        .iter()
        .map(|section| match section {
            Section::Segments => view! { <SegmentsSection /> }.into_any(),
            Section::Steps => view! { <StepsSection /> }.into_any(),
            Section::Features => view! { <FeaturesSection /> }.into_any(),
            Section::Banners => view! { <BannersSection /> }.into_any(),
            Section::Contact => view! { <ContactSection /> }.into_any(),
        })
        .collect_view();

    view! {
        <SeoMeta variant=variant />

        <div class="relative overflow-hidden">
            // Background decoration
            <div aria-hidden="true" class="pointer-events-none fixed -left-24 top-36 -z-10 h-56 w-56 rotate-12 rounded-[2.5rem] bg-radial from-[#25d36655] via-[#25d3661a] to-transparent"></div>
            <div aria-hidden="true" class="pointer-events-none fixed -right-8 top-96 -z-10 h-40 w-40 rounded-[5rem] border-2 border-[#25d3662a]"></div>

            <Header />

            <main id="inicio">
                <Hero variant=variant />
                {sections}
            </main>

            <Footer />

            <LandingStyles />
            <ScrollRevealScript />
        </div>
    }
}

/// Header with logo, navigation and mobile menu toggle
#[component]
fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Close the mobile menu on Escape
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && menu_open.get_untracked() {
                set_menu_open.set(false);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    let close_menu = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class="sticky top-0 z-30 border-b border-[#ddf0e3] bg-[#f5fff8de] backdrop-blur-sm">
            <div class="mx-auto flex min-h-18 w-[min(1160px,92vw)] items-center justify-between gap-2">
                <a href="#inicio" class="inline-flex items-center gap-2" aria-label="SmartAgenda início">
                    <Logo />
                </a>

                // Desktop navigation
                <nav id="main-nav" class="hidden md:flex md:items-center md:gap-5">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a class="block py-2 text-sm font-semibold" href=*href on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <a class="btn btn-primary px-3.5 py-2 text-[0.72rem] tracking-wide" href="#contato">
                        "TESTE GRÁTIS"
                    </a>

                    <button
                        class="inline-flex items-center justify-center rounded-xl border border-sa-line bg-white p-2 text-sa-ink md:hidden"
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="mobile-nav"
                        aria-label="Abrir menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon name=icons::X /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile navigation
            <nav
                id="mobile-nav"
                class="mobile-nav absolute top-full right-0 left-0 z-40 w-full border-t border-sa-line bg-white shadow-[0_18px_25px_rgba(17,32,26,0.08)] md:hidden"
                class=("mobile-nav-open", move || menu_open.get())
                aria-hidden=move || (!menu_open.get()).to_string()
            >
                <div class="mx-auto grid w-[min(1160px,92vw)] py-3">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a class="block py-3 text-base font-semibold" href=*href on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        class="mt-2 inline-flex w-fit rounded-full border border-sa-ink px-6 py-2 text-sm font-black tracking-wide"
                        href="#contato"
                        on:click=close_menu
                    >
                        "JÁ SOU CLIENTE"
                    </a>
                </div>
            </nav>
        </header>
    }
}

/// Hero: headline, logo-clipped photo and call-to-action buttons
#[component]
fn Hero(variant: PageVariant) -> impl IntoView {
    let hero = variant.hero();

    view! {
        <section class="section pt-10 md:pt-16">
            <div class="mx-auto grid w-[min(1160px,92vw)] items-center gap-8 md:grid-cols-[1.06fr_0.94fr] md:gap-10">
                <div class="landing-fade-in-up">
                    <p class="eyebrow">{hero.eyebrow}</p>
                    <h1 class="mt-4 max-w-[16ch] text-4xl leading-[1.08] font-extrabold tracking-[-0.03em] text-balance sm:text-5xl md:text-6xl">
                        {hero.headline}" "
                        <span class="text-sa-brand-dark">{hero.highlight}</span>
                    </h1>
                    <p class="mt-4 max-w-[44ch] text-base text-sa-muted sm:text-lg">{hero.subtitle}</p>
                </div>

                <div id="demo" class="landing-scale-in rounded-3xl bg-transparent p-2 sm:p-3">
                    <div class="mt-1 flex justify-center">
                        <LogoClippedPhoto src=HERO_PHOTO.src alt=HERO_PHOTO.alt />
                    </div>
                </div>
            </div>

            <div class="mx-auto mt-2 flex w-[min(1160px,92vw)] flex-col gap-3 md:-mt-1 md:max-w-[320px]">
                <a href="#contato" class="btn btn-primary w-full">{hero.primary_cta}</a>
                <a href=hero.secondary_href class="btn btn-secondary w-full">{hero.secondary_cta}</a>
            </div>
        </section>
    }
}

// Logo outline, in the logo's own (y-up) coordinate space
const LOGO_FLIP: &str = "matrix(1,0,0,-1,0,1024)";
const LOGO_BODY: &str = "M511.6535 802.065C587.3637 802.065 653.4958 800.8411 686.4439 786.7526 745.7698 765.1597 792.503 718.4265 814.0959 659.1006 826.7242 631.6621 829.4083 564.9903 829.4083 511 829.4083 457.0098 826.7242 390.338 814.0959 362.8995 792.503 303.5736 745.7698 256.8404 686.4439 235.2475 653.4958 221.159 587.3637 219.9351 511.6535 219.9351 435.9434 219.9351 369.8113 221.159 336.8632 235.2475 277.5373 256.8404 230.8041 303.5736 209.2112 362.8995 196.5829 390.338 193.8988 457.0098 193.8988 511 193.8988 564.9903 196.5829 631.6621 209.2112 659.1006 230.8041 718.4265 277.5373 765.1597 336.8632 786.7526 369.8113 800.8411 435.9434 802.065 511.6535 802.065Z";
const LOGO_LEFT_RING: &str = "M345.9329 842.0037C348.863 842.0037 351.7705 841.4911 354.5239 840.4889 361.501 837.9495 366.9971 832.4534 369.5365 825.4763 371.0514 821.1022 371.0514 814.5412 371.0514 803.606V780.9741C371.0514 770.039 371.0514 763.4779 369.5365 759.1039 366.9971 752.1268 361.501 746.6307 354.5239 744.0913 351.7705 743.0891 348.863 742.5764 345.9329 742.5764 343.0028 742.5764 340.0953 743.0891 337.3419 744.0913 330.3648 746.6307 324.8687 752.1268 322.3293 759.1039 320.8145 763.4779 320.8145 770.039 320.8145 780.9741V803.606C320.8145 814.5412 320.8145 821.1022 322.3293 825.4763 324.8687 832.4534 330.3648 837.9495 337.3419 840.4889 340.0953 841.4911 343.0028 842.0037 345.9329 842.0037Z";
const LOGO_RIGHT_RING: &str = "M677.7243 842.0037C680.6544 842.0037 683.5619 841.4911 686.3153 840.4889 693.2923 837.9495 698.7884 832.4534 701.3279 825.4763 702.8427 821.1022 702.8427 814.5412 702.8427 803.606V780.9741C702.8427 770.039 702.8427 763.4779 701.3279 759.1039 698.7884 752.1268 693.2923 746.6307 686.3153 744.0913 683.5619 743.0891 680.6544 742.5764 677.7243 742.5764 674.7942 742.5764 671.8866 743.0891 669.1332 744.0913 662.1562 746.6307 656.6601 752.1268 654.1206 759.1039 652.6058 763.4779 652.6058 770.039 652.6058 780.9741V803.606C652.6058 814.5412 652.6058 821.1022 654.1206 825.4763 656.6601 832.4534 662.1562 837.9495 669.1332 840.4889 671.8866 841.4911 674.7942 842.0037 677.7243 842.0037Z";
const LOGO_TOP_BAND: &str = "M511.6536 802.065C587.3637 802.065 653.4958 800.8411 686.4439 786.7526 716.0423 775.9175 742.558 758.8574 764.4198 737.0765 778.1185 723.4284 790.024 707.8761 799.7119 690.7471L223.7572 690.7519C233.382 707.8836 245.2353 723.4347 258.8873 737.0765 280.7059 758.8786 307.2238 775.9521 336.8632 786.7526 369.8113 800.8411 435.9434 802.065 511.6536 802.065Z";

/// Photo clipped to the SmartAgenda logo shape
#[component]
fn LogoClippedPhoto(src: &'static str, alt: &'static str) -> impl IntoView {
    // One hero per page, so a fixed id is unique
    let clip_id = "hero-logo-clip";

    view! {
        <svg
            viewBox="230 190 560 690"
            class="reveal h-[450px] w-[322px] sm:h-[560px] sm:w-[400px]"
            role="img"
            aria-label=alt
        >
            <defs>
                <clipPath id=clip_id clipPathUnits="userSpaceOnUse">
                    <path transform=LOGO_FLIP d=LOGO_BODY />
                    <path transform=LOGO_FLIP d=LOGO_LEFT_RING />
                    <path transform=LOGO_FLIP d=LOGO_RIGHT_RING />
                </clipPath>
            </defs>
            <image
                href=src
                x="230"
                y="190"
                width="560"
                height="690"
                preserveAspectRatio="xMidYMid slice"
                clip-path=format!("url(#{})", clip_id)
            />
            <path transform=LOGO_FLIP d=LOGO_TOP_BAND fill="#11201A" fill-opacity="0.18" />
            <path
                transform=LOGO_FLIP
                d=LOGO_BODY
                fill="none"
                stroke="#FFFFFF"
                stroke-opacity="0.78"
                stroke-width="8"
            />
        </svg>
    }
}

/// Audience segments
#[component]
fn SegmentsSection() -> impl IntoView {
    view! {
        <section class="section py-6 md:py-8" id="segmentos">
            <div class="mx-auto w-[min(1160px,92vw)] reveal">
                <p class="max-w-[58ch] text-sa-muted">
                    "Ideal para negócios que vendem tempo e precisam de agenda organizada sem complicação."
                </p>
                <div class="mt-4 flex flex-wrap gap-2.5 text-sm font-semibold">
                    {SEGMENTS
                        .iter()
                        .map(|segment| {
                            view! {
                                <span class="rounded-full border border-sa-line bg-white px-3 py-1.5">{*segment}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// "How it works" explainer cards
#[component]
fn StepsSection() -> impl IntoView {
    view! {
        <section class="section" id="como-funciona">
            <div class="mx-auto w-[min(1160px,92vw)]">
                <SectionHeading eyebrow="Fluxo simples" title="Do “oi” ao agendamento confirmado" />

                <div class="mt-6 grid gap-3 md:grid-cols-2">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <article
                                    class="reveal rounded-2xl border border-sa-line bg-white p-4"
                                    style=format!("transition-delay: {}ms", i * 50)
                                >
                                    <div class="mb-2 inline-flex rounded-xl bg-[#edfff4] p-2 text-sa-brand-dark">
                                        <Icon name=step.icon />
                                    </div>
                                    <h3 class="text-base font-extrabold">{format!("{}. {}", i + 1, step.title)}</h3>
                                    <p class="mt-2 text-sm text-sa-muted sm:text-base">{step.text}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature list beside the dashboard screenshot
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="section" id="recursos">
            <div class="mx-auto grid w-[min(1160px,92vw)] items-center gap-5 md:grid-cols-[1.02fr_0.98fr]">
                <div class="reveal">
                    <p class="eyebrow">"Recursos principais"</p>
                    <h2 class="section-title mt-3">"Plataforma completa para operação diária"</h2>
                    <ul class="mt-5 list-disc space-y-2 pl-5 text-sm text-sa-muted sm:text-base">
                        {FEATURES.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="reveal overflow-hidden rounded-3xl border border-sa-line bg-white shadow-[0_20px_40px_rgba(17,32,26,0.08)]">
                    <img src=FEATURE_PANEL_SRC alt=FEATURE_PANEL_ALT />
                </div>
            </div>
        </section>
    }
}

/// Campaign banners carousel
#[component]
fn BannersSection() -> impl IntoView {
    view! {
        <section class="section" id="materiais">
            <div class="mx-auto w-[min(1160px,92vw)]">
                <SectionHeading eyebrow="Materiais visuais" title="Banners e peças de campanha (amostras)" />
                <BannerCarousel items=content::banner_items() />
            </div>
        </section>
    }
}

/// Contact pitch and lead-capture form
#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="section" id="contato">
            <div class="mx-auto grid w-[min(1160px,92vw)] gap-5 rounded-3xl border border-sa-line bg-linear-to-br from-white to-[#ebffef] p-4 shadow-[0_20px_40px_rgba(17,32,26,0.08)] md:grid-cols-[1.05fr_0.95fr] md:p-6">
                <div>
                    <p class="eyebrow">"Pronto para testar?"</p>
                    <h2 class="section-title mt-3">"Ganhe tempo e aumente seus agendamentos no WhatsApp."</h2>
                    <p class="mt-3 max-w-[48ch] text-sa-muted">
                        "Fale com o time SmartAgenda e veja uma simulação para o seu negócio."
                    </p>
                </div>

                <LeadForm />
            </div>
        </section>
    }
}

/// Lead-capture form, validated by the browser and posted as-is
#[component]
fn LeadForm() -> impl IntoView {
    view! {
        <form class="grid gap-3" action="#" method="post">
            <label class="grid gap-1 text-sm font-bold">
                "Nome"
                <input class="form-input" type="text" name="nome" placeholder="Seu nome" autocomplete="name" required=true />
            </label>
            <label class="grid gap-1 text-sm font-bold">
                "WhatsApp"
                <input class="form-input" type="tel" name="whatsapp" placeholder="(11) 99999-9999" autocomplete="tel" required=true />
            </label>
            <label class="grid gap-1 text-sm font-bold">
                "Tipo de negócio"
                <select class="form-input" name="negocio" required=true>
                    <option value="" disabled=true selected=true>"Selecione"</option>
                    {BUSINESS_TYPES
                        .iter()
                        .map(|kind| view! { <option value=*kind>{*kind}</option> })
                        .collect_view()}
                </select>
            </label>
            <button class="btn btn-primary mt-1" type="submit">"Quero uma demonstração"</button>
        </form>
    }
}

/// Eyebrow plus section title
#[component]
fn SectionHeading(eyebrow: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="reveal max-w-[54ch] space-y-3">
            <p class="eyebrow">{eyebrow}</p>
            <h2 class="section-title">{title}</h2>
        </div>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <img src=LOGO_SRC alt="Logo SmartAgenda" class="size-8 rounded-xl" />
        <span class="font-display text-[0.9rem] leading-[0.9] font-bold">
            <span class="block">"Smart"</span>
            <span class="block">"Agenda"</span>
        </span>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let notice = content::copyright_notice(chrono::Utc::now());

    view! {
        <footer class="border-t border-sa-line py-6">
            <div class="mx-auto flex w-[min(1160px,92vw)] flex-wrap items-center justify-between gap-3 text-sm text-sa-muted">
                <p>{notice}</p>
                <a href="#inicio" class="font-semibold text-sa-ink">"Voltar ao topo"</a>
            </div>
        </footer>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta(variant: PageVariant) -> impl IntoView {
    let seo = variant.seo();
    let site = use_context::<PublicUrl>().unwrap_or_default();
    let structured = StructuredData::for_variant(variant, &site).to_json();

    view! {
        <Title text=seo.title />

        <Meta name="description" content=seo.description />
        <Meta name="theme-color" content="#25d366" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="pt_BR" />
        <Meta property="og:title" content=seo.title />
        <Meta property="og:description" content=seo.description />
        <Meta property="og:url" content=site.absolute(variant.path()) />
        <Meta property="og:image" content=site.absolute(content::BANNERS[0].src) />

        <script type="application/ld+json" inner_html=structured></script>
    }
}

/// CSS for buttons, reveals and the mobile menu
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .section { padding-block: 3.5rem; }

            .eyebrow {
                font-size: 0.78rem;
                font-weight: 800;
                letter-spacing: 0.12em;
                text-transform: uppercase;
                color: var(--color-sa-brand-dark);
            }

            .section-title {
                font-size: clamp(1.875rem, 4vw, 3rem);
                line-height: 1.15;
                font-weight: 800;
                letter-spacing: -0.02em;
                text-wrap: balance;
            }

            /* Buttons */
            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                border-radius: 999px;
                padding: 0.85rem 1.5rem;
                font-weight: 800;
                transition: transform 0.2s, box-shadow 0.2s, background-color 0.2s;
            }
            .btn-primary {
                background-color: var(--color-sa-brand);
                color: var(--color-sa-ink);
                box-shadow: 0 10px 20px -8px rgba(37, 211, 102, 0.6);
            }
            .btn-primary:hover { transform: translateY(-1px); background-color: #1fbf5b; }
            .btn-secondary {
                border: 2px solid var(--color-sa-ink);
                background-color: white;
                color: var(--color-sa-ink);
            }
            .btn-secondary:hover { transform: translateY(-1px); }

            .form-input {
                border-radius: 0.75rem;
                border: 1px solid #c9e3d4;
                background-color: white;
                padding: 0.625rem 0.75rem;
                font-weight: 500;
            }

            /* Load animations */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes landing-scale-in {
                from { opacity: 0; transform: scale(0.97); }
                to { opacity: 1; transform: scale(1); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.45s ease-out both; }
            .landing-scale-in { animation: landing-scale-in 0.45s ease-out 0.1s both; }

            /* Scroll reveals, one-shot */
            .reveal {
                opacity: 0;
                transform: translateY(18px);
                transition: opacity 0.35s ease-out, transform 0.35s ease-out;
            }
            .reveal.visible { opacity: 1; transform: translateY(0); }

            /* Mobile menu */
            .mobile-nav {
                opacity: 0;
                visibility: hidden;
                pointer-events: none;
                transform: translateY(-16px);
                transition: opacity 0.24s ease-out, transform 0.24s ease-out, visibility 0.24s;
            }
            .mobile-nav.mobile-nav-open {
                opacity: 1;
                visibility: visible;
                pointer-events: auto;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .mobile-nav, .landing-fade-in-up, .landing-scale-in {
                    animation: none;
                    transition: none;
                    opacity: 1;
                    transform: none;
                }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered reveals using IntersectionObserver
#[component]
fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveals() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.3
                    });

                    document.querySelectorAll('.reveal').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveals);
                } else {
                    initReveals();
                }
            })();
            "#
        </script>
    }
}
