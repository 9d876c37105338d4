#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env is a desktop dev convenience; deployments set the vars directly.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn main() {
    load_dotenv();
    tracing_subscriber::fmt::init();
    dioxus::launch(duvidas::ui::App);
}
