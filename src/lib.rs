#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod dom;
mod events;
mod fetch;
mod input;
mod layout;
mod mount;
mod render;
mod slider;

use config::MountConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("range-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let roots = dom::query_all(&document, constants::MOUNT_SELECTOR)?;
    if roots.is_empty() {
        log::warn!("[mount] no {} elements on the page", constants::MOUNT_SELECTOR);
    }

    // Each mount fetches on its own; a failing one never blocks the others.
    for root in roots {
        let config = match MountConfig::from_attrs(|name| root.get_attribute(name)) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[mount] skipping {}: {:#}", root.id(), e);
                continue;
            }
        };
        spawn_local(async move {
            if let Err(e) = mount::mount(root, config).await {
                log::error!("[mount] {:?}", e);
            }
        });
    }
    Ok(())
}
