use yew::prelude::*;

use crate::components::navbar::use_section_navigator;
use crate::components::remote_image::{logo_sources, RemoteImage};
use crate::config;
use crate::content;
use crate::navigation::Section;

pub fn copyright_line(year: u32) -> String {
    format!("© {} RST Israel - רומן טשימוב. כל הזכויות שמורות.", year)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_section_navigator();

    html! {
        <footer class="bg-slate-900 text-slate-400 py-12 border-t border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-4 gap-8">
                <div class="col-span-1 md:col-span-2">
                    <div class="text-white mb-4">
                        <RemoteImage
                            sources={logo_sources()}
                            alt="RST Logo"
                            class="h-10 mb-2 object-contain bg-white/10 rounded p-1"
                        />
                        <h3 class="text-xl font-bold text-white mb-1">{ config::COMPANY_NAME }</h3>
                    </div>
                    <p class="max-w-sm mb-4 text-sm leading-relaxed">{ content::FOOTER_BLURB }</p>
                </div>

                <div>
                    <h4 class="text-white font-bold mb-4">{"ניווט מהיר"}</h4>
                    <ul class="space-y-2 text-sm">
                        { for Section::ALL.iter().map(|&section| html! {
                            <li key={section.id()}>
                                <button onclick={navigator.to(section)} class="hover:text-cyan-400 transition-colors">
                                    { section.footer_label() }
                                </button>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4 class="text-white font-bold mb-4">{"פרטי התקשרות"}</h4>
                    <ul class="space-y-2 text-sm">
                        <li>{ config::ADDRESS }</li>
                        <li>{ format!("טל: {}", config::PHONE) }</li>
                        <li>{ format!("פקס: {}", config::FAX) }</li>
                        <li>{ config::EMAIL }</li>
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-12 pt-8 border-t border-slate-800 text-center text-sm flex flex-col md:flex-row justify-between items-center gap-4">
                <p>{ copyright_line(current_year()) }</p>
                <div class="flex gap-4 items-center">
                    <span class="text-slate-500">{"נבנה ע\"י"}</span>
                    <span class="font-bold text-cyan-500">{"B.A. אתרים"}</span>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert!(copyright_line(2026).starts_with("© 2026 RST Israel"));
    }
}
