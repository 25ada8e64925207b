use leptos::prelude::*;

use crate::portfolio::Profile;
use crate::section::SectionId;

use super::icons::MailIcon;
use super::{PageSection, PageState};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Contact(profile: &'static Profile, blurb: &'static str) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection
            id=SectionId::Contact
            class="py-24 px-6 bg-gradient-to-b from-transparent to-black"
        >
            <div class=move || {
                format!("max-w-4xl mx-auto text-center {}", state.fade(SectionId::Contact))
            }>
                <h2 class="text-4xl md:text-5xl font-bold mb-8">"Let's Connect"</h2>
                <p class="text-gray-400 text-lg mb-12">{blurb}</p>
                <div class="flex flex-col md:flex-row gap-4 justify-center items-center">
                    <a
                        href=profile.mailto()
                        class="inline-flex items-center gap-2 px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-full font-medium transition-all hover:scale-105"
                    >
                        <MailIcon />
                        {profile.email.as_str()}
                    </a>
                </div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="py-8 px-6 border-t border-gray-800">
            <div class="max-w-7xl mx-auto text-center text-gray-500">
                <p>
                    {format!("© {BUILD_YEAR} {}. {}", profile.name, profile.footer_tagline)}
                </p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::render;
    use crate::portfolio::portfolio;

    #[test]
    fn test_contact_mailto() {
        let content = portfolio();
        let profile = &content.profile;
        let blurb = content.contact.as_str();
        let html = render(|| view! { <Contact profile blurb /> });
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains(&format!("href=\"mailto:{}\"", profile.email)));
        // mail links stay in the current browsing context
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_footer() {
        let profile = &portfolio().profile;
        let html = render(|| view! { <Footer profile /> });
        assert!(html.contains(&format!("© {BUILD_YEAR} {}", profile.name)));
        assert_eq!(BUILD_YEAR.len(), 4);
    }
}
