mod browser;
mod contact;
mod hero;
mod icons;
mod nav;
mod projects;
mod resume;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::portfolio;
use crate::section::SectionId;
use crate::tracker::{ScrollSnapshot, VisibleSections};

use contact::{Contact, Footer};
use hero::{About, Hero};
use nav::{NavBar, ScrollRails};
use projects::ProjectsGrid;
use resume::{EducationList, ExperienceList, SkillsList};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Transient UI state shared by every part of the page.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub scroll: RwSignal<ScrollSnapshot>,
    pub visible: RwSignal<VisibleSections>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            scroll: RwSignal::new(ScrollSnapshot::default()),
            visible: RwSignal::new(VisibleSections::default()),
        }
    }

    /// `fade-in` once the section has been revealed, `opacity-0` before.
    pub fn fade(&self, id: SectionId) -> &'static str {
        self.visible.with(|v| v.fade_class(id))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let content = portfolio();
    let state = PageState::new();
    provide_context(state);
    browser::use_scroll_tracker(state.scroll);

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=content.profile.headline.clone() />
        <NavBar />
        <div class="min-h-screen bg-black text-white overflow-x-hidden w-full relative">
            <ScrollRails />
            <Hero profile=&content.profile />
            <About text=content.about.as_str() />
            <ExperienceList entries=content.experiences.as_slice() />
            <SkillsList categories=content.skills.as_slice() />
            <ProjectsGrid projects=content.projects.as_slice() github=content.profile.github.as_str() />
            <EducationList entries=content.education.as_slice() />
            <Contact profile=&content.profile blurb=content.contact.as_str() />
            <Footer profile=&content.profile />
        </div>
    }
}

/// A top-level `<section>` that reveals itself the first time it scrolls into view.
#[component]
pub fn PageSection(
    id: SectionId,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<PageState>();
    let node_ref = NodeRef::<html::Section>::new();
    browser::use_reveal(node_ref, id, state.visible);

    view! {
        <section id=id.as_str() class=class node_ref=node_ref>
            {children()}
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_support {
    use leptos::prelude::*;

    use super::PageState;

    /// Renders `f` to HTML inside a fresh owner with page state provided.
    pub fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView,
    {
        render_with(PageState::new, f)
    }

    pub fn render_with<S, F, V>(state: S, f: F) -> String
    where
        S: FnOnce() -> PageState,
        F: FnOnce() -> V,
        V: IntoView,
    {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(state());
            f().into_view().to_html()
        })
    }

    /// Byte offsets of each needle in `html`, panicking when one is missing.
    pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| {
                html.find(n)
                    .unwrap_or_else(|| panic!("{n:?} missing from rendered html"))
            })
            .collect()
    }

    pub fn is_sorted(offsets: &[usize]) -> bool {
        offsets.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::test_support::{is_sorted, positions, render};
    use super::*;

    fn page_html() -> String {
        render(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }
        })
    }

    #[test]
    fn test_page_sections_in_priority_order() {
        let html = page_html();
        let openings = SectionId::ALL.map(|id| format!("<section id=\"{id}\""));
        for opening in &openings {
            assert_eq!(html.matches(opening.as_str()).count(), 1, "{opening}");
        }
        assert_eq!(html.matches("<section").count(), SectionId::ALL.len());

        let mut needles = openings.iter().map(String::as_str).collect::<Vec<_>>();
        needles.push("<footer");
        assert!(is_sorted(&positions(&html, &needles)));
    }

    #[test]
    fn test_nav_targets_resolve_to_sections() {
        let html = page_html();
        let targets = html
            .split("data-section=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect::<Vec<_>>();
        assert_eq!(targets.len(), SectionId::ALL.len());
        for target in targets {
            let id = target.parse::<SectionId>().unwrap();
            assert!(html.contains(&format!("<section id=\"{id}\"")), "{target}");
        }
    }
}
