use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconView};
use crate::components::navbar::use_section_navigator;
use crate::components::remote_image::RemoteImage;
use crate::content;
use crate::navigation::Section;
use crate::utils::attr_values;

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_section_navigator();

    html! {
        <header class="relative h-[90vh] flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <RemoteImage
                    sources={attr_values(&content::HERO_IMAGES)}
                    alt="Luxury Swimming Pool"
                    class="w-full h-full object-cover animate-fade-in"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-slate-900/80 via-slate-900/40 to-slate-900/90"></div>
            </div>

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto mt-12">
                <div class="inline-block px-4 py-1.5 bg-cyan-500/20 backdrop-blur-sm border border-cyan-400/30 rounded-full text-cyan-300 text-sm font-semibold mb-6 animate-fade-in-up">
                    { content::HERO_BADGE }
                </div>
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-white mb-6 leading-tight drop-shadow-lg">
                    { content::HERO_TITLE }
                </h1>
                <p class="text-lg md:text-xl text-slate-200 mb-10 max-w-2xl mx-auto leading-relaxed drop-shadow-md">
                    { content::HERO_LEAD }
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button onclick={navigator.to(Section::Technology)}>
                        <IconView icon={Icon::Bolt} />
                        {"המהפכה הירוקה"}
                    </Button>
                    <Button variant={ButtonVariant::Outline} onclick={navigator.to(Section::Services)}>
                        {"לכל השירותים"}
                    </Button>
                </div>
            </div>
        </header>
    }
}
