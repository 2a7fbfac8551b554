/// Path prefix the site is served under, e.g. `/rst-israel` on GitHub Pages.
/// Set `SITE_BASE_PATH` at build time; empty means the site lives at the root.
pub fn get_base_path() -> &'static str {
    normalize_base_path(option_env!("SITE_BASE_PATH").unwrap_or(""))
}

fn normalize_base_path(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || !trimmed.starts_with('/') {
        ""
    } else {
        trimmed
    }
}

/// URL for a file deployed next to `index.html`, under the base path.
pub fn asset_url(path: &str) -> String {
    join_asset(get_base_path(), path)
}

fn join_asset(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Router basename, `None` when served from the root.
pub fn router_basename() -> Option<&'static str> {
    match get_base_path() {
        "" => None,
        base => Some(base),
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

// Brand
pub const COMPANY_NAME: &str = "אר.אס.טי ישראל";
pub const PHONE: &str = "02-9709998";
pub const FAX: &str = "02-9974717";
pub const EMAIL: &str = "rst@rstisrael.com";
pub const ADDRESS: &str = "א.ת. עפרה, מיקוד 9062700";

// Remote assets hosted on the company's existing site.
pub const REMOTE_LOGO: &str = "https://www.rstisrael.com/wp-content/themes/Netbuy/images/logo.png";
// Not bundled by Trunk; copied into the deployed root alongside `index.html`.
pub const LOCAL_LOGO: &str = "/logo.png";
