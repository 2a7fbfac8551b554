use yew::prelude::*;

use crate::components::icon::{Icon, IconView};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub features: Vec<AttrValue>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-slate-100 hover:shadow-xl hover:-translate-y-1 transition-all duration-300 group h-full flex flex-col">
            <div class="w-12 h-12 bg-cyan-50 rounded-xl flex items-center justify-center mb-4 group-hover:bg-cyan-600 transition-colors duration-300">
                <IconView icon={props.icon} class="text-xl text-cyan-600 group-hover:text-white transition-colors duration-300" />
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-3">{ props.title.clone() }</h3>
            <p class="text-slate-600 mb-6 flex-grow leading-relaxed text-sm">{ props.description.clone() }</p>
            if !props.features.is_empty() {
                <ul class="space-y-2 mt-auto pt-4 border-t border-slate-100">
                    { for props.features.iter().map(|item| html! {
                        <li key={item.to_string()} class="flex items-start gap-2 text-sm text-slate-700">
                            <IconView icon={Icon::CheckCircle} class="text-cyan-500 mt-0.5 flex-shrink-0" />
                            <span>{ item.clone() }</span>
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}
