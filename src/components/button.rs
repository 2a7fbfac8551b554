use yew::prelude::*;

const BASE_CLASSES: &str = "px-6 py-3 rounded-lg font-medium transition-all duration-300 flex items-center gap-2 transform active:scale-95";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-cyan-600 text-white hover:bg-cyan-700 shadow-lg hover:shadow-cyan-500/30",
            ButtonVariant::Secondary => "bg-white text-slate-800 border border-slate-200 hover:border-cyan-500 hover:text-cyan-600",
            ButtonVariant::Outline => "bg-transparent border-2 border-white text-white hover:bg-white/10",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, extra: &Classes) -> Classes {
    classes!(BASE_CLASSES, variant.classes(), extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind.clone()}
            class={button_classes(props.variant, &props.class)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
