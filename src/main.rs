//! Browser entry point (built with `--features csr`).

fn main() {
    #[cfg(feature = "csr")]
    {
        let config = ticketapp::config::AppConfig::from_env();
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(config.log_level);
        log::info!("ticketapp starting (base: {})", config.base_url.as_deref().unwrap_or("/"));
        leptos::mount::mount_to_body(ticketapp::app::App);
    }
}
