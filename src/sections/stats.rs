use yew::prelude::*;

use crate::content::STATS;

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    html! {
        <div class="bg-white py-10 shadow-sm border-b border-slate-100 relative z-20 -mt-10 mx-4 md:mx-auto max-w-6xl rounded-2xl flex flex-wrap justify-around gap-8">
            { for STATS.iter().map(|stat| html! {
                <div key={stat.label} class="text-center">
                    <p class="text-3xl font-bold text-slate-800">{ stat.value }</p>
                    <p class="text-sm text-slate-500">{ stat.label }</p>
                </div>
            }) }
        </div>
    }
}
