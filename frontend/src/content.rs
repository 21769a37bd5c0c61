// Static copy for the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    AiMirror,
    Gallery,
    Contact,
}

impl Section {
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::AiMirror,
        Section::Gallery,
        Section::Contact,
    ];

    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::AiMirror => "ai-mirror",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::AiMirror => "AI Mirror",
            Section::Gallery => "Gallery",
            Section::Contact => "Book Now",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Service {
    pub fn booking_option(&self) -> String {
        format!("{} - {}", self.name, self.price)
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "The Algorithm Fade",
        price: "$45",
        duration: "45 min",
        description: "AI-precision fade with mathematical perfection",
        icon: "fa-scissors",
    },
    Service {
        name: "Virtual Reality Cut",
        price: "$65",
        duration: "60 min",
        description: "Experience your future style with our AI mirror",
        icon: "fa-camera",
    },
    Service {
        name: "Neural Network Beard",
        price: "$35",
        duration: "30 min",
        description: "AI-enhanced beard shaping and styling",
        icon: "fa-wand-magic-sparkles",
    },
    Service {
        name: "Precision Enhancement",
        price: "$55",
        duration: "50 min",
        description: "Micro-precision trimming with robotic accuracy",
        icon: "fa-bolt",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    pub fn avatar(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Chen",
        rating: 5,
        text: "The AI mirror showed me exactly how I'd look - mind blown! Best haircut of my life.",
    },
    Testimonial {
        name: "Marcus Johnson",
        rating: 5,
        text: "This place is the future. The precision is incredible, and the atmosphere is amazing.",
    },
    Testimonial {
        name: "David Park",
        rating: 5,
        text: "Cyber-noir vibes with cutting-edge tech. My beard has never looked better.",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct GalleryTile {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryTile] = &[
    GalleryTile {
        image: "professional-barber-precision-fade-haircut.jpg",
        alt: "Precision Fade",
        title: "Precision Fade",
        caption: "AI-enhanced technique",
    },
    GalleryTile {
        image: "luxury-black-gold-barber-chair-modern-salon.jpg",
        alt: "Luxury Experience",
        title: "Luxury Experience",
        caption: "Premium comfort & style",
    },
    GalleryTile {
        image: "mens-trendy-hairstyles-2025-fade-crop-collection.jpg",
        alt: "2025 Styles",
        title: "2025 Trends",
        caption: "Cutting-edge styles",
    },
];

pub const HERO_IMAGE: &str = "luxury-modern-black-gold-barber-chairs-salon-interior.jpg";
pub const MIRROR_PREVIEW_IMAGE: &str = "ai-gan-powered-ar-virtual-hairstyle-try-on-interface.jpg";

pub const MIRROR_FEATURES: &[&str] = &[
    "Face shape detection",
    "Hair texture analysis",
    "Style recommendations",
];

#[derive(Debug, PartialEq, Eq)]
pub struct ContactCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Location",
        icon: "fa-location-dot",
        lines: &["123 Cyber Street, Future District", "Neo City, NC 2025"],
    },
    ContactCard {
        title: "Hours",
        icon: "fa-clock",
        lines: &["Mon-Fri: 9AM - 8PM", "Sat-Sun: 10AM - 6PM"],
    },
    ContactCard {
        title: "Contact",
        icon: "fa-phone",
        lines: &["(555) 123-EDGE", "info@razorsedge.ai"],
    },
];

pub const FOOTER_BADGES: &[(&str, &str)] = &[
    ("fa-users", "1000+ Happy Clients"),
    ("fa-award", "Best of 2025"),
    ("fa-wand-magic-sparkles", "AI-Powered"),
];
