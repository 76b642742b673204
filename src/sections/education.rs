use dioxus::prelude::*;

use crate::components::{ExternalLink, SectionTitle};
use crate::content::{ACHIEVEMENTS, CERTIFICATIONS, EDUCATION};
use crate::scroll_spy::Section;

#[component]
pub fn Education() -> Element {
    rsx! {
        section { id: Section::Education.id(), class: "section", aria_labelledby: "education-title",
            SectionTitle { id: "education-title", title: "Education & Certifications" }
            div { class: "education-grid",
                div { class: "card",
                    h3 { class: "card-eyebrow", "Education" }
                    for entry in EDUCATION.iter() {
                        div { key: "{entry.title}", class: "education-entry",
                            h4 { "{entry.title}" }
                            p { class: "education-institution", "{entry.institution}" }
                            p { class: "education-detail", "{entry.detail}" }
                        }
                    }
                }
                div { class: "card",
                    h3 { class: "card-eyebrow", "Certifications" }
                    ul { class: "certification-list",
                        for cert in CERTIFICATIONS.iter() {
                            li { key: "{cert.title}", class: "certification",
                                div {
                                    h4 { "{cert.title}" }
                                    p { class: "certification-meta", "{cert.issuer} · {cert.period}" }
                                }
                                ExternalLink {
                                    href: "{cert.document}",
                                    class: "certificate-link",
                                    aria_label: "View {cert.title} certificate",
                                    "View"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Achievements() -> Element {
    rsx! {
        section { class: "section", aria_labelledby: "achievements-title",
            SectionTitle { id: "achievements-title", title: "Achievements" }
            div { class: "achievements-grid",
                for achievement in ACHIEVEMENTS.iter() {
                    div { key: "{achievement.title}", class: "card achievement",
                        span { class: "achievement-icon", aria_hidden: "true", "{achievement.icon}" }
                        h3 { "{achievement.title}" }
                        p { "{achievement.description}" }
                    }
                }
            }
        }
    }
}
