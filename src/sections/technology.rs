use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::remote_image::RemoteImage;
use crate::content;
use crate::navigation::Section;
use crate::utils::attr_values;

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <section id={Section::Technology.id()} class="py-24 bg-slate-900 text-white relative overflow-hidden">
            <div class="absolute top-0 right-0 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl -translate-y-1/2 translate-x-1/2"></div>
            <div class="absolute bottom-0 left-0 w-96 h-96 bg-blue-600/10 rounded-full blur-3xl translate-y-1/2 -translate-x-1/2"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex flex-col lg:flex-row items-center gap-16">
                    <div class="lg:w-1/2">
                        <div class="inline-flex items-center gap-2 px-3 py-1 bg-cyan-900/50 border border-cyan-700 rounded-full text-cyan-400 text-sm font-semibold mb-6">
                            <IconView icon={Icon::Bolt} />
                            { content::TECH_BADGE }
                        </div>
                        <h2 class="text-3xl md:text-5xl font-bold mb-6 leading-tight">
                            { content::TECH_HEADLINE }
                            <br />
                            <span class="text-cyan-400">{ content::TECH_HEADLINE_ACCENT }</span>
                        </h2>
                        <p class="text-slate-300 text-lg mb-8 leading-relaxed">{ content::TECH_BODY }</p>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                            { for content::TECH_FEATURES.iter().map(|feature| html! {
                                <div key={*feature} class="flex items-center gap-3">
                                    <div class="w-8 h-8 rounded-full bg-cyan-500/20 flex items-center justify-center text-cyan-400">
                                        <IconView icon={Icon::CheckCircle} />
                                    </div>
                                    <span class="font-medium text-slate-200">{ *feature }</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="lg:w-1/2 relative">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl border border-slate-700/50 group bg-white/5 p-4">
                            <RemoteImage
                                sources={attr_values(&content::TECH_IMAGES)}
                                alt="NEC-20 Ionization System"
                                class="w-full object-contain transform group-hover:scale-105 transition-transform duration-700"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-slate-900/90 to-transparent flex items-end p-8 pointer-events-none">
                                <div>
                                    <p class="text-cyan-400 font-bold tracking-wider text-sm uppercase mb-1">{ content::TECH_CAPTION_KICKER }</p>
                                    <p class="text-white text-xl font-bold">{ content::TECH_CAPTION }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
