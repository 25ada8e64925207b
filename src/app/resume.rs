use leptos::prelude::*;

use crate::portfolio::{EducationEntry, Experience, SkillCategory};
use crate::section::SectionId;

use super::icons::BookOpenIcon;
use super::{PageSection, PageState};

const CARD: &str = "bg-zinc-900/50 border border-white/10 rounded-2xl p-8 card-hover";

/// Cards in a list enter one after another, 100ms apart.
pub(super) fn stagger(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

#[component]
pub(super) fn SectionHeading(id: SectionId, #[prop(into)] text: String) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <h2 class=move || {
            format!(
                "text-4xl md:text-5xl font-bold mb-16 text-center animated-heading {}",
                state.fade(id),
            )
        }>{text}</h2>
    }
}

#[component]
pub fn ExperienceList(entries: &'static [Experience]) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection
            id=SectionId::Experience
            class="py-24 px-6 bg-gradient-to-b from-transparent to-black/50"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading id=SectionId::Experience text="Experience" />
                <div class="space-y-8">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <div
                                    class=move || {
                                        format!("{CARD} {}", state.fade(SectionId::Experience))
                                    }
                                    style=stagger(index)
                                    data-experience=index.to_string()
                                >
                                    <div class="flex items-start gap-4">
                                        <div class="flex-1">
                                            <h3
                                                class="text-2xl font-semibold mb-1"
                                                style="color: #723ee7"
                                            >
                                                {exp.title.as_str()}
                                            </h3>
                                            <p class="text-gray-400 mb-1">
                                                {format!("{}, {}", exp.employer, exp.location)}
                                            </p>
                                            <p class="text-sm text-gray-500 mb-4">
                                                {exp.period.as_str()}
                                            </p>
                                            <ul class="space-y-2">
                                                {exp
                                                    .achievements
                                                    .iter()
                                                    .map(|achievement| {
                                                        view! {
                                                            <li class="flex items-start gap-3 text-gray-300">
                                                                <span class="text-purple-400 mt-1 text-lg leading-none flex-shrink-0">
                                                                    "•"
                                                                </span>
                                                                <span class="leading-relaxed">
                                                                    {achievement.as_str()}
                                                                </span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn SkillsList(categories: &'static [SkillCategory]) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection id=SectionId::Skills class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading id=SectionId::Skills text="Skills" />
                <div class="space-y-8">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <div
                                    class=move || state.fade(SectionId::Skills)
                                    style=stagger(index)
                                    data-skill-category=category.name.as_str()
                                >
                                    <h3 class="text-xl font-semibold mb-4 text-gray-300">
                                        {category.name.as_str()}
                                    </h3>
                                    <div class="flex flex-wrap gap-3 bounce-in">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-4 py-2 bg-white/5 border border-white/10 rounded-full text-sm skill-tag hover:cursor-default">
                                                        {skill.as_str()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn EducationList(entries: &'static [EducationEntry]) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection id=SectionId::Education class="py-24 px-6">
            <div class="max-w-4xl mx-auto">
                <SectionHeading id=SectionId::Education text="Education" />
                <div class="space-y-8">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, edu)| {
                            view! {
                                <div
                                    class=move || {
                                        format!("{CARD} {}", state.fade(SectionId::Education))
                                    }
                                    style=stagger(index)
                                    data-education=index.to_string()
                                >
                                    <div class="flex items-start gap-4">
                                        <BookOpenIcon class="w-6 h-6 text-blue-400 mt-1" />
                                        <div class="flex-1">
                                            <h3 class="text-2xl font-semibold mb-2">
                                                {edu.degree.as_str()}
                                            </h3>
                                            <p class="text-gray-400 mb-2">
                                                {edu.institution.as_str()}
                                            </p>
                                            <p class="text-sm text-gray-500 mb-4">
                                                {edu.period.as_str()}
                                            </p>
                                            <p class="text-gray-300">{edu.focus.as_str()}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{is_sorted, positions, render, render_with};
    use crate::portfolio::portfolio;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), "animation-delay: 0ms");
        assert_eq!(stagger(3), "animation-delay: 300ms");
    }

    #[test]
    fn test_experience_matches_source() {
        let entries = portfolio().experiences.as_slice();
        let html = render(|| view! { <ExperienceList entries /> });
        assert!(html.contains("id=\"experience\""));
        assert_eq!(html.matches("data-experience=").count(), entries.len());

        let titles = entries.iter().map(|e| e.title.as_str()).collect::<Vec<_>>();
        assert!(is_sorted(&positions(&html, &titles)));

        let achievements = entries.iter().map(|e| e.achievements.len()).sum::<usize>();
        assert_eq!(html.matches("<li").count(), achievements);
    }

    #[test]
    fn test_skills_match_source() {
        let categories = portfolio().skills.as_slice();
        let html = render(|| view! { <SkillsList categories /> });
        assert_eq!(html.matches("data-skill-category=").count(), categories.len());

        let tags = categories.iter().map(|c| c.skills.len()).sum::<usize>();
        assert_eq!(html.matches("skill-tag").count(), tags);

        // Categories keep source order, and each category's tags follow it
        let text = |s: &str| format!(">{}<", s.replace('&', "&amp;"));
        let needles = categories
            .iter()
            .flat_map(|c| std::iter::once(text(&c.name)).chain(c.skills.iter().map(|s| text(s))))
            .collect::<Vec<_>>();
        let needles = needles.iter().map(String::as_str).collect::<Vec<_>>();
        assert!(is_sorted(&positions(&html, &needles)));
    }

    #[test]
    fn test_education_matches_source() {
        let entries = portfolio().education.as_slice();
        let html = render(|| view! { <EducationList entries /> });
        assert_eq!(html.matches("data-education=").count(), entries.len());

        let degrees = entries.iter().map(|e| e.degree.as_str()).collect::<Vec<_>>();
        assert!(is_sorted(&positions(&html, &degrees)));
    }

    #[test]
    fn test_cards_hidden_until_section_revealed() {
        let entries = portfolio().education.as_slice();
        let html = render(|| view! { <EducationList entries /> });
        assert!(!html.contains("fade-in"));

        let html = render_with(
            || {
                let state = PageState::new();
                state.visible.update(|v| {
                    v.reveal(SectionId::Education);
                });
                state
            },
            || view! { <EducationList entries /> },
        );
        // heading plus one card per entry
        assert_eq!(html.matches("fade-in").count(), entries.len() + 1);
        assert!(!html.contains("opacity-0"));
    }
}
