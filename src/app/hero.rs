use leptos::prelude::*;

use crate::portfolio::Profile;
use crate::section::SectionId;

use super::icons::{ChevronDownIcon, GithubIcon, LinkedinIcon};
use super::{PageSection, PageState};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection
            id=SectionId::Home
            class="min-h-screen flex items-center justify-center relative hero-gradient w-full"
        >
            <div class=move || {
                format!("text-center px-6 w-full {}", state.fade(SectionId::Home))
            }>
                <img
                    src=profile.image.as_str()
                    alt=profile.image_alt.as_str()
                    class="w-52 h-52 md:w-64 md:h-64 rounded-full mx-auto mb-8 border-2 border-white/10 shadow-2xl object-cover"
                    style="object-position: center 35%"
                />
                <h1 class="text-5xl md:text-7xl font-bold mb-4 gradient-text">
                    {profile.name.as_str()}
                </h1>
                <p class="text-xl md:text-2xl text-gray-400 mb-4">{profile.headline.as_str()}</p>
                <p class="text-gray-500 max-w-4xl mx-auto mb-8 text-lg leading-relaxed text-center">
                    {profile.summary.as_str()}
                </p>
                <div class="flex gap-4 justify-center">
                    <a
                        href=profile.github.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-full font-medium transition-all hover:scale-105 flex items-center gap-2"
                    >
                        <GithubIcon />
                        "GitHub"
                    </a>
                    <a
                        href=profile.linkedin.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 bg-white/10 hover:bg-white/20 backdrop-blur rounded-full font-medium transition-all hover:scale-105 flex items-center gap-2 border border-white/20"
                    >
                        <LinkedinIcon />
                        "LinkedIn"
                    </a>
                </div>
                <div class="mt-16 animate-bounce">
                    <ChevronDownIcon class="w-6 h-6 mx-auto text-gray-500" />
                </div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn About(text: &'static str) -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <PageSection id=SectionId::About class="py-24 px-6">
            <div class=move || format!("max-w-4xl mx-auto {}", state.fade(SectionId::About))>
                <h2 class="text-4xl md:text-5xl font-bold mb-8 text-center animated-heading">
                    "About Me"
                </h2>
                <p class="text-gray-400 text-lg leading-relaxed text-center">{text}</p>
            </div>
        </PageSection>
    }
}
