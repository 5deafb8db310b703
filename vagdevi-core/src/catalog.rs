use std::fmt;

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselItem;

/// The pages of the showcase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Products,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Products, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Products => "/products",
            Page::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        Self::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    /// Window title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Vagdevi Foods",
            Page::Products => "Our Products - Vagdevi Foods",
            Page::Contact => "Contact Us - Vagdevi Food Products",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub packaging_images: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiceVariety {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Processing options, e.g. "Steam Rice".
    pub variants: &'static [&'static str],
}

impl RiceVariety {
    pub fn enquiry_subject(&self) -> String {
        format!("Enquiry about {}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyProfile {
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// Carousel items for every packaging image of every brand, in brand order.
pub fn packaging_carousel(brands: &[Brand]) -> Vec<CarouselItem> {
    brands
        .iter()
        .flat_map(|brand| {
            brand
                .packaging_images
                .iter()
                .enumerate()
                .map(move |(idx, source)| {
                    CarouselItem::new(
                        format!("brand-{}-{idx}", brand.name),
                        *source,
                        format!("{} Rice {}", brand.name, idx + 1),
                    )
                })
        })
        .collect()
}

/// Names joined for prose, e.g. "Dwaraka and Surya".
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRANDS: [Brand; 2] = [
        Brand {
            name: "Dwaraka",
            tagline: "Tradition",
            description: "",
            logo: "dwaraka.png",
            packaging_images: &["d0.png", "d1.png"],
        },
        Brand {
            name: "Surya",
            tagline: "Purity",
            description: "",
            logo: "surya.png",
            packaging_images: &["s0.png"],
        },
    ];

    #[test]
    fn carousel_ids_follow_brand_and_position() {
        let items = packaging_carousel(&BRANDS);
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["brand-Dwaraka-0", "brand-Dwaraka-1", "brand-Surya-0"]);
        assert_eq!(items[1].label, "Dwaraka Rice 2");
        assert_eq!(items[2].source, "s0.png");
    }

    #[test]
    fn page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/contact?product=JSR"), Some(Page::Contact));
        assert_eq!(Page::from_path("/about"), None);
    }

    #[test]
    fn titles_per_page() {
        assert_eq!(Page::Home.title(), "Vagdevi Foods");
        assert_eq!(Page::Products.title(), "Our Products - Vagdevi Foods");
        assert_eq!(Page::Contact.title(), "Contact Us - Vagdevi Food Products");
    }

    #[test]
    fn names_join_for_prose() {
        assert_eq!(join_names(["Dwaraka", "Surya"]), "Dwaraka and Surya");
        assert_eq!(join_names(["A", "B", "C"]), "A, B and C");
        assert_eq!(join_names(["A"]), "A");
        assert_eq!(join_names(std::iter::empty()), "");
    }
}
