use leptos::prelude::*;

use crate::portfolio::Project;
use crate::section::SectionId;

use super::icons::{GithubIcon, ProjectIconView};
use super::resume::{stagger, SectionHeading};
use super::{PageSection, PageState};

/// Technology labels are separated by a bullet, except after the last one.
fn tech_label(tech: &str, index: usize, count: usize) -> String {
    if index + 1 < count {
        format!("{tech} •")
    } else {
        tech.to_string()
    }
}

#[component]
pub fn ProjectsGrid(projects: &'static [Project], github: &'static str) -> impl IntoView {
    let state = expect_context::<PageState>();
    let card_class = move |base: &'static str| {
        move || format!("{base} {}", state.fade(SectionId::Projects))
    };

    view! {
        <PageSection
            id=SectionId::Projects
            class="py-24 px-6 bg-gradient-to-b from-transparent to-black/50"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading id=SectionId::Projects text="Featured Projects" />
                <div class="grid md:grid-cols-2 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let count = project.tech.len();
                            view! {
                                <div
                                    class=card_class(
                                        "bg-zinc-900/50 border border-white/10 rounded-2xl p-8 card-hover",
                                    )
                                    style=stagger(index)
                                    data-project=index.to_string()
                                >
                                    <div class="flex items-start gap-4 mb-4">
                                        <div class="p-2 bg-blue-500/10 rounded-lg text-blue-400">
                                            <ProjectIconView icon=project.icon />
                                        </div>
                                        <h3 class="text-2xl font-semibold flex-1">
                                            {project.title.as_str()}
                                        </h3>
                                    </div>
                                    <p class="text-gray-400 mb-4">{project.description.as_str()}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tech
                                            .iter()
                                            .enumerate()
                                            .map(|(i, tech)| {
                                                view! {
                                                    <span class="text-sm text-gray-500">
                                                        {tech_label(tech, i, count)}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div
                        class=card_class(
                            "bg-gradient-to-br from-blue-900/20 to-purple-900/20 border border-white/10 rounded-2xl p-8 card-hover",
                        )
                        style=stagger(projects.len())
                        data-github-card=""
                    >
                        <h3 class="text-2xl font-semibold mb-3">"More on GitHub"</h3>
                        <p class="text-gray-400 mb-6">
                            "Explore my complete portfolio of projects, contributions, and open-source work on GitHub."
                        </p>
                        <a
                            href=github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-full font-medium transition-all hover:scale-105"
                        >
                            <GithubIcon />
                            "View on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </PageSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{is_sorted, positions, render};
    use crate::portfolio::portfolio;

    #[test]
    fn test_tech_label() {
        assert_eq!(tech_label("Rust", 0, 3), "Rust •");
        assert_eq!(tech_label("Leptos", 1, 3), "Leptos •");
        assert_eq!(tech_label("Axum", 2, 3), "Axum");
        assert_eq!(tech_label("Solo", 0, 1), "Solo");
    }

    #[test]
    fn test_projects_match_source() {
        let content = portfolio();
        let projects = content.projects.as_slice();
        let github = content.profile.github.as_str();
        let html = render(|| view! { <ProjectsGrid projects github /> });

        assert!(html.contains("id=\"projects\""));
        assert_eq!(html.matches("data-project=").count(), projects.len());
        assert_eq!(html.matches("data-icon=").count(), projects.len());

        let mut needles = projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        // The GitHub card always closes the grid
        needles.push("More on GitHub");
        assert!(is_sorted(&positions(&html, &needles)));

        let bullets = projects.iter().map(|p| p.tech.len() - 1).sum::<usize>();
        assert_eq!(html.matches(" •").count(), bullets);
        assert!(html.contains(&format!("href=\"{github}\"")));
    }
}
