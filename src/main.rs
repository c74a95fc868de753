#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env is optional; the bundled config covers the defaults
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    let _ = tracing_subscriber::fmt().try_init();
}

// The web renderer installs its own console logger.
#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    load_dotenv();
    init_logging();
    tracing::info!(
        api = %docchat::config::ApiConfig::from_env().base_url(),
        "starting docchat"
    );
    dioxus::launch(docchat::ui::App);
}
