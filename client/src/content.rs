//! Static site copy: navigation, skills, services and contact channels.

/// Owner name shown in the hero and footer.
pub const OWNER_NAME: &str = "Farman Ali";
/// Role line under the hero heading.
pub const OWNER_ROLE: &str = "MERN Stack Developer";
pub const HERO_PITCH: &str = "Building modern web applications and digital solutions that make a difference. \
     Specialized in React, Node.js, and creating exceptional user experiences.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "With over 3 years of experience in web development, I specialize in creating high-performance, \
     scalable applications using the MERN stack. I'm passionate about clean code, user experience, \
     and bringing innovative ideas to life.",
    "I enjoy working on challenging projects that push the boundaries of what's possible on the web. \
     From concept to deployment, I ensure every project meets the highest standards of quality and performance.",
];

pub const GITHUB_URL: &str = "https://github.com/Farman-Ali-1";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/farman-khan-dev/";
pub const EMAIL: &str = "engrfarmanali44@gmail.com";
pub const WHATSAPP_DISPLAY: &str = "+92 308 4401935";
pub const WHATSAPP_URL: &str = "https://wa.me/923084401935";
pub const LOCATION: &str = "Pakistan";

/// An in-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Services", href: "#services" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Blog", href: "#blog" },
    NavItem { name: "Contact", href: "#contact" },
];

/// Footer quick links are a subset of the header navigation.
pub const FOOTER_LINKS: [NavItem; 4] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill { name: "Frontend Development", icon: "◎", description: "React, Next.js, TypeScript, Tailwind CSS" },
    Skill { name: "Backend Development", icon: "▤", description: "Node.js, Express, MongoDB, PostgreSQL" },
    Skill { name: "Mobile Development", icon: "▯", description: "React Native, Flutter" },
    Skill { name: "Full Stack Development", icon: "</>", description: "MERN, MEAN, JAMstack" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    /// CSS modifier selecting the card's accent gradient.
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Web Development",
        description: "Custom web applications built with React, Node.js, and modern technologies for optimal performance.",
        features: ["Responsive Design", "SEO Optimization", "Performance Tuning", "Modern UI/UX"],
        accent: "blue",
    },
    Service {
        title: "App Development",
        description: "Cross-platform mobile applications using React Native and Flutter for iOS and Android.",
        features: ["Native Performance", "Cross Platform", "App Store Ready", "Real-time Features"],
        accent: "purple",
    },
    Service {
        title: "SaaS Development",
        description: "Scalable Software as a Service solutions with robust architecture and seamless integrations.",
        features: ["Cloud Architecture", "API Integration", "Database Design", "Security Implementation"],
        accent: "emerald",
    },
];

/// A way to reach the site owner. `href` is `None` for informational rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { label: "Email", value: EMAIL, href: Some("mailto:engrfarmanali44@gmail.com") },
    ContactChannel { label: "WhatsApp", value: WHATSAPP_DISPLAY, href: Some(WHATSAPP_URL) },
    ContactChannel { label: "Location", value: LOCATION, href: None },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] =
    [SocialLink { label: "LinkedIn", href: LINKEDIN_URL }, SocialLink { label: "GitHub", href: GITHUB_URL }];

pub const FOOTER_LINKS_EXTERNAL: [SocialLink; 4] = [
    SocialLink { label: "Email", href: "mailto:engrfarmanali44@gmail.com" },
    SocialLink { label: "WhatsApp", href: WHATSAPP_URL },
    SocialLink { label: "LinkedIn", href: LINKEDIN_URL },
    SocialLink { label: "GitHub", href: GITHUB_URL },
];

/// Placeholder traffic figures shown on the admin dashboard.
pub const DASHBOARD_VIEWS: &str = "2.4K";
pub const DASHBOARD_VISITORS: &str = "1.2K";
