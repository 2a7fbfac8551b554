use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let (align, bar_align) = if props.centered {
        ("text-center", "mx-auto")
    } else {
        ("text-right", "ml-auto")
    };
    html! {
        <div class={classes!("mb-12", align)}>
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">{ props.title.clone() }</h2>
            <div class={classes!("h-1.5", "w-20", "bg-cyan-500", "rounded-full", "mb-6", bar_align)}></div>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="text-lg text-slate-600 max-w-2xl mx-auto leading-relaxed">{ subtitle }</p>
            }
        </div>
    }
}
