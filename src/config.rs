pub const SITE_NAME: &str = "Aiman Uddin Siam";
pub const SITE_TITLE: &str = "Frontend Web Developer";
pub const SITE_DESCRIPTION: &str = "Passionate Frontend Web Developer from Bangladesh specializing in React, Next.js, and modern web technologies.";
pub const SITE_URL: &str = "https://aiman-portfolio.vercel.app";
pub const CONTACT_EMAIL: &str = "ausiaam83@gmail.com";
pub const CONTACT_PHONE: &str = "+8801538288739";
pub const LOCATION: &str = "Mirsarai, Chattogram";
pub const COMPANY: &str = "Growthly IT";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1fQ1pCAnayziyGm7ad3CIwDZEMXlrWmqq/view?usp=sharing";

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Section anchors in page order. The stepper and the navbar menu both walk this list.
pub const SECTIONS: [&str; 5] = ["home", "about", "projects", "services", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Twitter",
        href: "#",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: "devicon-github-plain",
    },
];

const DEFAULT_SERVICE_ID: &str = "service_f6sp9ta";
const DEFAULT_TEMPLATE_ID: &str = "template_pw8zz0t";
const DEFAULT_PUBLIC_KEY: &str = "your_public_key_here";

/// Settings for the transactional email provider behind the contact form.
///
/// Values are fixed at compile time from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
/// `EMAILJS_PUBLIC_KEY` and `CONTACT_RECIPIENT`, since the browser bundle has no
/// runtime environment to read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
    pub recipient: &'static str,
}

impl EmailJsConfig {
    pub const ENDPOINT: &'static str = "https://api.emailjs.com/api/v1.0/email/send";

    pub const fn from_env() -> Self {
        Self {
            service_id: or_default(option_env!("EMAILJS_SERVICE_ID"), DEFAULT_SERVICE_ID),
            template_id: or_default(option_env!("EMAILJS_TEMPLATE_ID"), DEFAULT_TEMPLATE_ID),
            public_key: or_default(option_env!("EMAILJS_PUBLIC_KEY"), DEFAULT_PUBLIC_KEY),
            recipient: or_default(option_env!("CONTACT_RECIPIENT"), CONTACT_EMAIL),
        }
    }

    /// The placeholder key is what ships when nobody configured the provider.
    pub fn is_configured(&self) -> bool {
        self.public_key != DEFAULT_PUBLIC_KEY && !self.public_key.is_empty()
    }
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Year shown in the footer copyright, taken from the build timestamp.
pub fn copyright_year() -> &'static str {
    BUILD_TIME.get(..4).unwrap_or(BUILD_TIME)
}

pub fn build_date() -> &'static str {
    BUILD_TIME.get(..10).unwrap_or(BUILD_TIME)
}
