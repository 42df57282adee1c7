use aivia_client::App;
use auth_flow::config::ClientConfig;
use leptos::*;

fn main() {
    let (config, config_error) = match ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(error) => (ClientConfig::default(), Some(error)),
    };
    let level = config.level_filter().to_level().unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    if let Some(error) = config_error {
        log::error!("Ignoring build configuration, using defaults. {error}");
    }
    mount_to_body(move |cx| view! { cx, <App config=config/> })
}
