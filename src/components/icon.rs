use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bolt,
    Ruler,
    ShieldCheck,
    Phone,
    Menu,
    Close,
    CheckCircle,
    Settings,
    ArrowLeft,
    ThermometerSun,
    Robot,
    Gauge,
    UserCheck,
    MapPin,
    Mail,
    Printer,
}

impl Icon {
    /// Font Awesome class for the glyph.
    pub fn fa_class(self) -> &'static str {
        match self {
            Icon::Bolt => "fa-bolt",
            Icon::Ruler => "fa-ruler-combined",
            Icon::ShieldCheck => "fa-shield-halved",
            Icon::Phone => "fa-phone",
            Icon::Menu => "fa-bars",
            Icon::Close => "fa-xmark",
            Icon::CheckCircle => "fa-circle-check",
            Icon::Settings => "fa-gear",
            Icon::ArrowLeft => "fa-arrow-left",
            Icon::ThermometerSun => "fa-temperature-high",
            Icon::Robot => "fa-robot",
            Icon::Gauge => "fa-gauge-high",
            Icon::UserCheck => "fa-user-check",
            Icon::MapPin => "fa-location-dot",
            Icon::Mail => "fa-envelope",
            Icon::Printer => "fa-print",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <i class={classes!("fas", props.icon.fa_class(), props.class.clone())} aria-hidden="true"></i>
    }
}
