#[cfg(target_os = "macos")]
mod alert;
#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
mod cursor;
#[cfg(target_os = "macos")]
mod display;
#[cfg(target_os = "macos")]
mod status_item;
#[cfg(target_os = "macos")]
mod timer;

#[cfg(not(target_os = "macos"))]
fn main() {
    env_logger::init();
    eprintln!("rezzler is only supported on macOS");
}

#[cfg(target_os = "macos")]
fn main() {
    env_logger::init();
    log::info!("Rezzler starting...");
    app::run();
}
