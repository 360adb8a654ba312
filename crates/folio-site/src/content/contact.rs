//! Social links and contact details.

use super::Icon;

/// An outbound profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

/// A labelled contact detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: Icon::GitHub, href: "https://github.com/" },
    SocialLink { label: "LinkedIn", icon: Icon::LinkedIn, href: "https://linkedin.com/" },
    SocialLink { label: "Email", icon: Icon::Mail, href: "mailto:hello@example.com" },
];

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { icon: Icon::MapPin, label: "Location", value: "San Francisco, CA" },
    ContactInfo { icon: Icon::Mail, label: "Email", value: "hello@example.com" },
    ContactInfo { icon: Icon::Phone, label: "Phone", value: "+1 (555) 123-4567" },
];
