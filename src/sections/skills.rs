use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::content::{SkillCategory, SKILL_CATEGORIES};
use crate::scroll_spy::Section;
use crate::state::AppState;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: Section::Skills.id(), class: "section", aria_labelledby: "skills-title",
            SectionTitle { id: "skills-title", title: "Technical Skills" }
            div { class: "skills-grid",
                for category in SKILL_CATEGORIES.iter() {
                    SkillCard { key: "{category.key}", category }
                }
            }
        }
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "card skill-card",
            div { class: "skill-card-header",
                span { class: "skill-card-icon", aria_hidden: "true", "{category.icon}" }
                h3 { "{category.title}" }
            }
            ul { class: "skill-list",
                for (index, skill) in category.skills.iter().enumerate() {
                    {
                        let key = category.key_for(index);
                        let hovered = state.read().is_hovered(key);
                        // Bars stay empty until their row is hovered.
                        let width = if hovered { skill.percent } else { 0 };
                        rsx! {
                            li {
                                key: "{key}",
                                class: "skill-row",
                                onmouseenter: move |_| state.write().hover_skill(key),
                                onmouseleave: move |_| state.write().clear_skill_hover(),
                                div { class: "skill-row-head",
                                    span { class: "skill-name", "{skill.name}" }
                                    span { class: "skill-level {skill.level.css_class()}", "{skill.level.label()}" }
                                }
                                div {
                                    class: "skill-bar",
                                    role: "progressbar",
                                    aria_label: "{skill.name} proficiency",
                                    aria_valuemin: "0",
                                    aria_valuemax: "100",
                                    aria_valuenow: "{skill.percent}",
                                    div { class: "skill-bar-fill", style: "width: {width}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
