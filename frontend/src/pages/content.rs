// Copy for the landing page. Rendered by iteration in `home.rs`.

#[derive(Clone, Copy, PartialEq)]
pub enum Icon {
    Layers,
    Code,
    Shield,
    Panel,
    Cube,
    Pen,
}

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Layers,
        title: "No-Code Development",
        body: "Rapidly deploy scalable applications using cutting-edge no-code platforms without compromising on quality.",
    },
    Service {
        icon: Icon::Code,
        title: "Low-Code Solutions",
        body: "Custom functionality meets development speed. We bridge the gap between off-the-shelf and bespoke code.",
    },
    Service {
        icon: Icon::Shield,
        title: "Enterprise Security",
        body: "Built with security first. Your data and your users are protected by industry-standard practices.",
    },
];

pub const MARQUEE: &[&str] = &[
    "Flutterflow",
    "Directus",
    "Framer",
    "Firebase",
    "Supabase",
    "Filament",
    "Weweb",
    "Claude code",
    "Frappe",
    "NextJS",
    "n8n",
];

pub struct WorkItem {
    pub title: &'static str,
    pub body: &'static str,
    pub gradient: &'static str,
    pub tags: &'static [&'static str],
}

pub const WORK: &[WorkItem] = &[
    WorkItem {
        title: "Filasuite",
        body: "Built a complete ERP Application Software using Filament Laravel for SMEs Business.",
        gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        tags: &["Filament", "Flutterflow", "n8n"],
    },
    WorkItem {
        title: "Kaspoint",
        body: "Mobile Point of Sale System for SMEs Business using Flutterflow and Firebase. Helped SMEs 100+ Business.",
        gradient: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        tags: &["Flutterflow", "Directus", "Firebase"],
    },
    WorkItem {
        title: "Solois",
        body: "Simple dashboard for Solopreneur and Freelancer to manage invoices, clients and projects.",
        gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        tags: &["Filament", "Flutterflow", "Firebase"],
    },
];

pub const PROCESS: &[(&str, &str)] = &[
    ("Discovery", "We dive deep into your business goals, target audience, and technical requirements to craft the perfect solution."),
    ("Design", "Our designers create stunning, user-centric interfaces that align with your brand and engage your users."),
    ("Development", "Using the best no-code and low-code tools, we build your application with speed and precision."),
    ("Launch & Support", "We ensure a smooth launch and provide ongoing support to keep your application running flawlessly."),
];

pub struct Expertise {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const EXPERTISE: &[Expertise] = &[
    Expertise { icon: Icon::Code, title: "Fullstack Engineering", body: "End-to-end development expertise" },
    Expertise { icon: Icon::Panel, title: "ERP Solutions", body: "ERPNext consulting & optimization" },
    Expertise { icon: Icon::Cube, title: "Digital Transformation", body: "Strategic technology implementation" },
    Expertise { icon: Icon::Pen, title: "Technology Strategy", body: "Business-aligned tech roadmaps" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Vanlab transformed our idea into a fully functional platform in just 6 weeks. Their expertise in no-code development is unmatched.",
        initials: "JD",
        name: "John Davis",
        role: "CEO, TechStart Inc.",
    },
    Testimonial {
        quote: "The team's attention to detail and commitment to quality is exceptional. They delivered beyond our expectations.",
        initials: "SM",
        name: "Sarah Martinez",
        role: "Founder, GrowthHub",
    },
    Testimonial {
        quote: "Working with Vanlab was a game-changer. They understood our vision and brought it to life with incredible speed.",
        initials: "MK",
        name: "Michael Kim",
        role: "CTO, DataFlow",
    },
];

/// (counter target, label)
pub const STATS: &[(u32, &str)] = &[
    (50, "Projects Delivered"),
    (20, "Client Satisfaction"),
    (12, "Years Experience"),
    (24, "Support Hours"),
];

/// (fragment, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#work", "Work"),
    ("#about", "About"),
];

pub const FOOTER_GROUPS: &[(&str, &[&str])] = &[
    ("Company", &["About", "Careers", "Contact"]),
    ("Social", &["Twitter", "LinkedIn", "Instagram"]),
];
