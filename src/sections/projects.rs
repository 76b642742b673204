use dioxus::prelude::*;

use crate::components::{ExternalLink, SectionTitle};
use crate::content::{ProjectEntry, PROJECTS};
use crate::scroll_spy::Section;
use crate::state::AppState;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: Section::Projects.id(), class: "section", aria_labelledby: "projects-title",
            SectionTitle { id: "projects-title", title: "Projects" }
            div { class: "projects-list",
                for project in PROJECTS.iter() {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let expanded = state.read().is_expanded(project.id);
    let details_id = format!("project-details-{}", project.id);
    let id = project.id;
    let toggle_label = if expanded {
        format!("Collapse {} details", project.title)
    } else {
        format!("Expand {} details", project.title)
    };

    rsx! {
        article { class: "card project-card",
            div { class: "project-head",
                div {
                    if project.featured {
                        span { class: "badge badge-featured", "Featured" }
                    }
                    h3 { class: "project-title", "{project.title}" }
                    p { class: "project-summary", "{project.short_desc}" }
                }
                button {
                    r#type: "button",
                    class: "project-toggle",
                    aria_expanded: "{expanded}",
                    aria_controls: "{details_id}",
                    aria_label: "{toggle_label}",
                    onclick: move |_| state.write().toggle_project(id),
                    if expanded { "−" } else { "+" }
                }
            }
            ul { class: "tech-list", aria_label: "Technologies used",
                for tech in project.tech.iter() {
                    li { key: "{tech}", class: "tech-tag", "{tech}" }
                }
            }
            if expanded {
                div { id: "{details_id}", class: "project-details",
                    div { class: "project-detail",
                        h4 { "Problem" }
                        p { "{project.problem}" }
                    }
                    div { class: "project-detail",
                        h4 { "Solution" }
                        p { "{project.solution}" }
                    }
                    div { class: "project-detail",
                        h4 { "Key Features" }
                        ul {
                            for feature in project.features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                    }
                    div { class: "project-detail project-impact",
                        h4 { "Why This Matters" }
                        p { "{project.impact}" }
                    }
                }
            }
            div { class: "project-links",
                ExternalLink {
                    href: "{project.github}",
                    class: "button-outline",
                    aria_label: "View {project.title} source code on GitHub",
                    "View Code"
                }
                if project.has_demo() {
                    ExternalLink {
                        href: "{project.demo}",
                        class: "button-primary",
                        aria_label: "View {project.title} live site",
                        "Live Site"
                    }
                }
            }
        }
    }
}
