#[cfg(target_arch = "wasm32")]
mod footer_tests;
