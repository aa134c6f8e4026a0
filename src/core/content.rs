//! Static page content: copy, asset paths and the three page variants.
//!
//! All text is Brazilian Portuguese, as shown on the live page.

use serde::Serialize;

use super::carousel::DisplayItem;

pub const PRODUCT_NAME: &str = "SmartAgenda";

pub const LOGO_SRC: &str = "/logo.svg";

pub const FEATURE_PANEL_SRC: &str = "/images/features-panel.svg";

pub const FEATURE_PANEL_ALT: &str = "Painel web do SmartAgenda com serviços e horários";

/// Photo clipped by the logo outline in the hero
pub const HERO_PHOTO: Asset = Asset {
    src: "/images/cabeleireiro.svg",
    alt: "Profissional de beleza em atendimento",
};

/// Image reference with its accessible description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Campaign banners, in carousel order
pub const BANNERS: [Asset; 3] = [
    Asset {
        src: "/images/banner-conversion.svg",
        alt: "Banner de conversão de leads para agendamentos",
    },
    Asset {
        src: "/images/banner-whatsapp.svg",
        alt: "Banner sobre agendamento via WhatsApp",
    },
    Asset {
        src: "/images/banner-operations.svg",
        alt: "Banner sobre organização operacional do salão",
    },
];

/// Carousel items built from [`BANNERS`]
pub fn banner_items() -> Vec<DisplayItem> {
    BANNERS
        .iter()
        .map(|banner| DisplayItem::new(banner.src, banner.alt))
        .collect()
}

/// One card of the "how it works" explainer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub text: &'static str,
    /// Icon name under `/icons`
    pub icon: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        title: "Cliente chama no WhatsApp",
        text: "Ele escreve como já escreve hoje: “tem horário amanhã à tarde?”.",
        icon: "message-circle-more",
    },
    Step {
        title: "IA entende a intenção",
        text: "O SmartAgenda interpreta serviço, horário e preferências em linguagem natural.",
        icon: "sparkles",
    },
    Step {
        title: "Agenda valida em tempo real",
        text: "Slots disponíveis são oferecidos sem risco de choque entre profissionais.",
        icon: "shield-check",
    },
    Step {
        title: "Confirmação instantânea",
        text: "Cliente recebe confirmação no chat e sua agenda fica atualizada automaticamente.",
        icon: "calendar-clock",
    },
];

pub const FEATURES: [&str; 5] = [
    "Configuração de serviços, duração e equipe",
    "Bloqueio automático de conflitos de agenda",
    "Reagendamento e cancelamento via WhatsApp",
    "Painel web simples para gestão diária",
    "Experiência pensada para baixa maturidade digital",
];

pub const SEGMENTS: [&str; 4] = ["Barbearias", "Salões de beleza", "Estética", "Autônomos"];

/// Options of the lead form "business type" select
pub const BUSINESS_TYPES: [&str; 4] = ["Barbearia", "Salão de beleza", "Estética", "Autônomo(a)"];

/// Header navigation: (label, anchor)
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Como funciona", "#como-funciona"),
    ("Recursos", "#recursos"),
    ("Segmentos", "#segmentos"),
];

/// Page sections below the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Segments,
    Steps,
    Features,
    Banners,
    Contact,
}

/// Hero copy of a page variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub eyebrow: &'static str,
    pub headline: &'static str,
    /// Emphasised tail of the headline
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    /// Anchor the secondary call to action points at
    pub secondary_href: &'static str,
}

/// Search engine and social preview copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// The three near-identical versions of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    /// Original page, served at `/`
    #[default]
    Classic,
    /// Steps-first page for visitors who want to know how it works
    Focus,
    /// Launch campaign page leading with the banners
    Campaign,
}

impl PageVariant {
    pub const ALL: [PageVariant; 3] = [PageVariant::Classic, PageVariant::Focus, PageVariant::Campaign];

    /// Route the variant is served at
    pub fn path(&self) -> &'static str {
        match self {
            PageVariant::Classic => "/",
            PageVariant::Focus => "/foco",
            PageVariant::Campaign => "/campanha",
        }
    }

    /// Router segment for [`path`](Self::path), without the leading slash
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn hero(&self) -> HeroCopy {
        match self {
            PageVariant::Classic => HeroCopy {
                eyebrow: "WhatsApp-first para pequenos negócios",
                headline: "Seu atendimento agenda sozinho.",
                highlight: "Em segundos.",
                subtitle: "O SmartAgenda conversa com seus clientes no WhatsApp, entende o pedido e confirma horários automaticamente. Sem app para o cliente final e sem equipe presa no celular.",
                primary_cta: "TESTE GRÁTIS",
                secondary_cta: "Ver demonstração",
                secondary_href: "#demo",
            },
            PageVariant::Focus => HeroCopy {
                eyebrow: "Agenda cheia, celular livre",
                headline: "Pare de responder horário por horário.",
                highlight: "Deixe a IA confirmar.",
                subtitle: "Seus clientes continuam no WhatsApp. O SmartAgenda oferece os horários livres, confirma e atualiza a agenda da equipe sem ninguém parar o atendimento.",
                primary_cta: "COMECE AGORA",
                secondary_cta: "Como funciona",
                secondary_href: "#como-funciona",
            },
            PageVariant::Campaign => HeroCopy {
                eyebrow: "Campanha de lançamento",
                headline: "Sua agenda no WhatsApp, pronta hoje.",
                highlight: "Teste sem compromisso.",
                subtitle: "Veja as peças da campanha e descubra como barbearias e salões estão substituindo a troca de mensagens por confirmações automáticas.",
                primary_cta: "QUERO TESTAR",
                secondary_cta: "Ver materiais",
                secondary_href: "#materiais",
            },
        }
    }

    /// Section order below the hero
    pub fn sections(&self) -> &'static [Section] {
        match self {
            PageVariant::Classic => &[
                Section::Segments,
                Section::Steps,
                Section::Features,
                Section::Banners,
                Section::Contact,
            ],
            PageVariant::Focus => &[
                Section::Steps,
                Section::Segments,
                Section::Features,
                Section::Banners,
                Section::Contact,
            ],
            PageVariant::Campaign => &[
                Section::Banners,
                Section::Segments,
                Section::Steps,
                Section::Features,
                Section::Contact,
            ],
        }
    }

    pub fn seo(&self) -> SeoCopy {
        match self {
            PageVariant::Classic => SeoCopy {
                title: "SmartAgenda - Agendamento automático pelo WhatsApp",
                description: "O SmartAgenda conversa com seus clientes no WhatsApp e confirma horários automaticamente. Ideal para barbearias, salões, estética e autônomos.",
            },
            PageVariant::Focus => SeoCopy {
                title: "SmartAgenda - Como funciona o agendamento por IA",
                description: "Do “oi” ao agendamento confirmado: veja como a IA do SmartAgenda entende pedidos no WhatsApp e evita choques de horário.",
            },
            PageVariant::Campaign => SeoCopy {
                title: "SmartAgenda - Teste grátis",
                description: "Campanha de lançamento do SmartAgenda: teste o agendamento automático pelo WhatsApp no seu negócio.",
            },
        }
    }
}

/// Externally visible base URL, provided as context by the server.
///
/// Without one, links stay relative to the site root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicUrl(pub Option<String>);

impl PublicUrl {
    pub fn new(base: Option<String>) -> Self {
        Self(base.map(|url| url.trim_end_matches('/').to_string()))
    }

    /// Prefix a site-root path (`/foco`) with the base URL
    pub fn absolute(&self, path: &str) -> String {
        match &self.0 {
            Some(base) => format!("{base}{path}"),
            None => path.to_string(),
        }
    }
}

/// Footer copyright line, dated in UTC on both server and client
pub fn copyright_notice(now: chrono::DateTime<chrono::Utc>) -> String {
    use chrono::Datelike;

    format!("© {} {PRODUCT_NAME}. Todos os direitos reservados.", now.year())
}

/// schema.org description embedded as JSON-LD
#[derive(Debug, Clone, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "applicationCategory")]
    application_category: &'static str,
    #[serde(rename = "operatingSystem")]
    operating_system: &'static str,
    description: &'static str,
    url: String,
    image: Vec<String>,
    #[serde(rename = "featureList")]
    feature_list: Vec<&'static str>,
    audience: Vec<&'static str>,
}

impl StructuredData {
    pub fn for_variant(variant: PageVariant, site: &PublicUrl) -> Self {
        Self {
            context: "https://schema.org",
            kind: "SoftwareApplication",
            name: PRODUCT_NAME,
            application_category: "BusinessApplication",
            operating_system: "Web",
            description: variant.seo().description,
            url: site.absolute(variant.path()),
            image: BANNERS.iter().map(|banner| site.absolute(banner.src)).collect(),
            feature_list: FEATURES.to_vec(),
            audience: SEGMENTS.to_vec(),
        }
    }

    /// Serialize for an inline `<script type="application/ld+json">`
    pub fn to_json(&self) -> String {
        // Only strings: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_banner_items_keep_order() {
        let items = banner_items();

        assert_eq!(items.len(), BANNERS.len());
        assert_eq!(items[0].image_source, "/images/banner-conversion.svg");
        assert_eq!(items[2].alt_text, "Banner sobre organização operacional do salão");
    }

    #[test]
    fn test_banner_alts_are_unique() {
        let alts: HashSet<_> = BANNERS.iter().map(|b| b.alt).collect();
        assert_eq!(alts.len(), BANNERS.len());
    }

    #[test]
    fn test_variant_segments() {
        assert_eq!(PageVariant::Classic.segment(), "");
        assert_eq!(PageVariant::Focus.segment(), "foco");
        assert_eq!(PageVariant::Campaign.segment(), "campanha");
    }

    #[test]
    fn test_public_url_absolute() {
        let site = PublicUrl::new(Some("https://smartagenda.com.br/".to_string()));

        assert_eq!(site.absolute("/foco"), "https://smartagenda.com.br/foco");
        assert_eq!(site.absolute("/"), "https://smartagenda.com.br/");
        assert_eq!(PublicUrl::default().absolute("/foco"), "/foco");
    }

    #[test]
    fn test_copyright_notice_uses_utc_year() {
        use chrono::TimeZone;

        let new_years_eve = chrono::Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            copyright_notice(new_years_eve),
            "© 2026 SmartAgenda. Todos os direitos reservados."
        );
    }

    #[test]
    fn test_every_variant_has_all_sections_once() {
        for variant in PageVariant::ALL {
            let sections = variant.sections();
            let unique: HashSet<_> = sections.iter().collect();

            assert_eq!(sections.len(), 5, "{variant:?}");
            assert_eq!(unique.len(), 5, "{variant:?}");
            assert_eq!(sections.last(), Some(&Section::Contact));
        }
    }

    #[test]
    fn test_campaign_leads_with_banners() {
        assert_eq!(PageVariant::Campaign.sections()[0], Section::Banners);
        assert_eq!(PageVariant::Focus.sections()[0], Section::Steps);
    }

    #[test]
    fn test_secondary_cta_targets_existing_anchor() {
        let anchors = ["#demo", "#como-funciona", "#materiais"];
        for variant in PageVariant::ALL {
            assert!(anchors.contains(&variant.hero().secondary_href));
        }
    }

    #[test]
    fn test_structured_data_json() {
        let json = StructuredData::for_variant(PageVariant::Focus, &PublicUrl::default()).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], "SmartAgenda");
        assert_eq!(value["url"], "/foco");
        assert_eq!(value["featureList"].as_array().unwrap().len(), 5);
        assert_eq!(value["image"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_structured_data_urls_are_absolute_with_public_url() {
        let site = PublicUrl::new(Some("https://smartagenda.com.br".to_string()));
        let data = StructuredData::for_variant(PageVariant::Campaign, &site);

        assert_eq!(data.url, "https://smartagenda.com.br/campanha");
        assert!(data.image.iter().all(|src| src.starts_with("https://smartagenda.com.br/images/")));
    }

    #[test]
    fn test_steps_have_icons() {
        let icons = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for step in STEPS {
            assert!(!step.title.is_empty());
            assert!(icons.join(format!("{}.svg", step.icon)).is_file(), "{}", step.icon);
        }
    }
}
