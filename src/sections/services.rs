use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::section_heading::SectionHeading;
use crate::content::{SERVICES, SERVICES_SUBTITLE, SERVICES_TITLE};
use crate::navigation::Section;
use crate::utils::attr_values;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="py-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <SectionHeading title={SERVICES_TITLE} subtitle={AttrValue::Static(SERVICES_SUBTITLE)} />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for SERVICES.iter().map(|service| html! {
                    <FeatureCard
                        key={service.title}
                        icon={service.icon}
                        title={service.title}
                        description={service.description}
                        features={attr_values(service.features)}
                    />
                }) }
            </div>
        </section>
    }
}
