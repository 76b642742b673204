use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::content::{QUICK_FACTS, SOFT_SKILLS};
use crate::scroll_spy::Section;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Section::About.id(), class: "section", aria_labelledby: "about-title",
            SectionTitle { id: "about-title", title: "About Me" }
            div { class: "about-grid",
                div { class: "about-copy",
                    p { "I am a Computer Science student focused on full-stack and backend development, building scalable applications through clean, efficient code." }
                    p { "My interests include API design, distributed systems, and performance optimization. Currently exploring cloud technologies and microservices architecture." }
                }
                div { class: "card quick-facts",
                    h3 { class: "card-eyebrow", "Quick Facts" }
                    ul {
                        for (icon, fact) in QUICK_FACTS.iter() {
                            li { key: "{fact}",
                                span { class: "fact-icon", aria_hidden: "true", "{icon}" }
                                span { "{fact}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

const SOFT_SKILL_ICONS: [&str; 4] = ["↗", "☰", "◷", "✓"];

#[component]
pub fn HowIWork() -> Element {
    rsx! {
        section { class: "section", aria_labelledby: "how-i-work-title",
            SectionTitle { id: "how-i-work-title", title: "How I Work" }
            p { class: "section-lead",
                "I focus on building maintainable software through clear communication, structured problem-solving, and ownership of features from idea to deployment."
            }
            div { class: "soft-skills",
                for (index, skill) in SOFT_SKILLS.iter().enumerate() {
                    div { key: "{skill.title}", class: "card soft-skill", tabindex: "0", aria_label: "{skill.title}",
                        span { class: "soft-skill-icon", aria_hidden: "true",
                            "{SOFT_SKILL_ICONS[index % SOFT_SKILL_ICONS.len()]}"
                        }
                        div {
                            h3 { "{skill.title}" }
                            p { "{skill.description}" }
                        }
                    }
                }
            }
        }
    }
}
