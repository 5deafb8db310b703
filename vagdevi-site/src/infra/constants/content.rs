//! Static copy and catalog data rendered by the pages.

use vagdevi_core::catalog::{
    Brand, CompanyProfile, CoreValue, Faq, Market, NavLink, Page, RiceVariety,
};

pub const COMPANY: CompanyProfile = CompanyProfile {
    short_name: "Vagdevi Foods",
    tagline: "Quality · Trust · Supply",
    address: "Sy. No. 112, Yadgarpalle Village, Miryalaguda Mandal, Nalgonda District, Telangana 508207",
    email: "info@vagdevifoods.com",
    phone: "+91 98480 12345",
};

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        page: Page::Home,
    },
    NavLink {
        label: "Products",
        page: Page::Products,
    },
    NavLink {
        label: "Contact",
        page: Page::Contact,
    },
];

pub mod hero {
    pub const HEADLINE: &str = "The Gold Standard";
    pub const HEADLINE_ACCENT: &str = "of Premium Rice";
    pub const INTRO: &str = "Experience the purity and tradition in every grain. Vagdevi Foods brings you the finest selection of rice, processed with care and delivered with trust.";
    pub const PRIMARY_ACTION: &str = "View Products";
    pub const SECONDARY_ACTION: &str = "Contact Us";
}

pub const BRANDS: [Brand; 2] = [
    Brand {
        name: "Dwaraka",
        tagline: "The Essence of Purity",
        description: "Dwaraka rice is sourced from the finest paddy fields of Telangana and milled to preserve its natural aroma and softness. A household name for everyday meals and festive feasts alike.",
        logo: "assets/brands/dwaraka-logo.png",
        packaging_images: &[
            "assets/brands/dwaraka-pack-1.png",
            "assets/brands/dwaraka-pack-2.png",
            "assets/brands/dwaraka-pack-3.png",
        ],
    },
    Brand {
        name: "Surya",
        tagline: "Radiance in Every Grain",
        description: "Surya brings bright, long grains with a consistent cook, trusted by hotels, caterers and retailers who need dependable quality at scale.",
        logo: "assets/brands/surya-logo.png",
        packaging_images: &[
            "assets/brands/surya-pack-1.png",
            "assets/brands/surya-pack-2.png",
        ],
    },
];

const BOTH_PROCESSES: &[&str] = &["Steam Rice", "Double Boiled Rice"];

pub const VARIETIES: [RiceVariety; 6] = [
    RiceVariety {
        name: "HMT Rice",
        description: "Fine, aromatic grains that cook soft and fluffy. A favourite for daily meals across South India.",
        image: "assets/varieties/hmt.jpg",
        variants: BOTH_PROCESSES,
    },
    RiceVariety {
        name: "JSR Rice",
        description: "Uniform, separate grains that hold up in biryanis and pulaos. A reliable choice for HORECA kitchens.",
        image: "assets/varieties/jsr.jpg",
        variants: BOTH_PROCESSES,
    },
    RiceVariety {
        name: "RNR Rice",
        description: "Telangana Sona with a low glycemic index, double boiled to retain its nutrients.",
        image: "assets/varieties/rnr.jpg",
        variants: BOTH_PROCESSES,
    },
    RiceVariety {
        name: "Sona Masoori",
        description: "Light, lightly aromatic medium grains, ideal for everyday rice and tiffin preparations.",
        image: "assets/varieties/sona-masoori.jpg",
        variants: BOTH_PROCESSES,
    },
    RiceVariety {
        name: "BPT Rice",
        description: "Bapatla's classic medium grain with a mild sweetness and excellent water absorption.",
        image: "assets/varieties/bpt.jpg",
        variants: BOTH_PROCESSES,
    },
    RiceVariety {
        name: "Pink Surya Rice",
        description: "Our signature export variety, polished to a soft pink sheen with a firm, non-sticky cook.",
        image: "assets/varieties/pink-surya.jpg",
        variants: &["Steam Rice"],
    },
];

/// Varieties featured on the home page.
pub const FEATURED_VARIETIES: usize = 4;

pub const CORE_VALUES: [CoreValue; 4] = [
    CoreValue {
        title: "Quality",
        description: "Every batch is graded, cleaned and sorted so each grain meets the same exacting standard.",
    },
    CoreValue {
        title: "Trust",
        description: "Transparent sourcing and honest dealings have built relationships that span generations.",
    },
    CoreValue {
        title: "Supply",
        description: "Modern milling and storage keep our partners stocked through every season.",
    },
    CoreValue {
        title: "Sustainability",
        description: "We work with local farmers on fair terms and responsible water use.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "How to choose the best steam rice for hotels?",
        answer: "When choosing steam rice for hotels, focus on grain length, aroma, and cooking consistency. JSR Steam Rice is an excellent choice as it delivers uniform, separate grains that hold up well in biryanis and pulaos, making it a reliable option for HORECA procurement.",
    },
    Faq {
        question: "What is RNR boiled rice and why is it considered a healthy option?",
        answer: "RNR boiled rice, also known as Telangana Sona, is a premium variety known for its low glycemic index. This makes it a healthier option for diabetics and health-conscious consumers. Our RNR Boiled Rice is double-boiled to perfection, ensuring it retains maximum nutrients.",
    },
    Faq {
        question: "Are you a bulk rice supplier for supermarkets?",
        answer: "Yes, we are a leading bulk rice supplier for supermarkets and retailers across India. We offer high-quality packaging, transparent supply chain management, and efficient fulfillment to meet the demands of modern retail. Contact us for a quote.",
    },
];

pub const MARKETS: [Market; 5] = [
    Market { name: "Telangana" },
    Market {
        name: "Andhra Pradesh",
    },
    Market { name: "Karnataka" },
    Market { name: "Tamil Nadu" },
    Market {
        name: "Maharashtra",
    },
];

/// Markets named in the home page summary.
pub const HIGHLIGHTED_MARKETS: usize = 3;

pub const FARMER_MASCOT: &str = "assets/farmer-mascot.png";
pub const NAV_LOGO: &str = "assets/logo.png";

pub mod contact {
    pub const TITLE: &str = "Get In Touch";
    pub const SUBTITLE: &str = "We'd love to hear from you. Whether it's a question about our products, a partnership opportunity, or just saying hello.";
    pub const FORM_TITLE: &str = "Send a Message";
    pub const FORM_SUBTITLE: &str = "Fill out the form below and we'll get back to you within 24 hours.";
    pub const SUCCESS_TITLE: &str = "Message Sent!";
    pub const SUCCESS_BODY: &str = "Thank you for reaching out. Our team will review your message and get back to you shortly.";
    pub const SEND_ANOTHER: &str = "Send another message";
    pub const SUBMIT: &str = "Send Message";
    pub const SUBMITTING: &str = "Sending...";
    pub const EMAIL_NOTE: &str = "For sales and general inquiries.";
    pub const HOURS: &str = "Mon - Sat, 9 AM - 6 PM IST.";
}
