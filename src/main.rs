#[cfg(any(target_arch = "wasm32", test))]
mod anchors;
#[cfg(any(target_arch = "wasm32", test))]
mod carousel;
#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod content;
#[cfg(any(target_arch = "wasm32", test))]
mod error;
#[cfg(any(target_arch = "wasm32", test))]
mod feedback;
#[cfg(any(target_arch = "wasm32", test))]
mod grid;
#[cfg(any(target_arch = "wasm32", test))]
mod logging;
#[cfg(any(target_arch = "wasm32", test))]
mod menu;
#[cfg(any(target_arch = "wasm32", test))]
mod shake;
#[cfg(any(target_arch = "wasm32", test))]
mod slider;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
