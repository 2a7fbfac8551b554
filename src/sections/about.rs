use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::remote_image::RemoteImage;
use crate::content;
use crate::navigation::Section;
use crate::utils::attr_values;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row gap-12 items-center">
                    <div class="md:w-1/2 relative">
                        <div class="absolute -top-4 -right-4 w-24 h-24 bg-cyan-100 rounded-full -z-10"></div>
                        <RemoteImage
                            sources={attr_values(&content::ABOUT_IMAGES)}
                            alt="RST Project Construction"
                            class="rounded-2xl shadow-lg w-full object-cover h-[400px]"
                        />
                        <div class="absolute bottom-6 right-6 bg-white p-4 rounded-xl shadow-lg border-r-4 border-cyan-500">
                            <p class="text-3xl font-bold text-slate-900">{"20+"}</p>
                            <p class="text-sm text-slate-600">{"שנות ניסיון"}</p>
                        </div>
                    </div>
                    <div class="md:w-1/2">
                        <h3 class="text-cyan-600 font-bold uppercase tracking-wider mb-2">{ content::ABOUT_KICKER }</h3>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">{ content::ABOUT_TITLE }</h2>
                        <p class="text-slate-600 text-lg mb-6 leading-relaxed">
                            { content::ABOUT_INTRO_PREFIX }
                            <strong>{ content::ABOUT_FOUNDER }</strong>
                            { content::ABOUT_INTRO_SUFFIX }
                        </p>
                        <p class="text-slate-600 mb-8 leading-relaxed">{ content::ABOUT_BODY }</p>
                        <div class="flex gap-4">
                            { for content::ABOUT_CHIPS.iter().map(|&(icon, label)| html! {
                                <div key={label} class="flex items-center gap-2 text-slate-700 font-medium bg-white px-4 py-2 rounded-lg shadow-sm border border-slate-100">
                                    <IconView icon={icon} class="text-cyan-500" />
                                    { label }
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
