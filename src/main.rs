use rst_site::{config, App};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));

    log::info!("Rendering RST Israel site (base path: {:?})", config::get_base_path());
    yew::Renderer::<App>::new().render();
}
