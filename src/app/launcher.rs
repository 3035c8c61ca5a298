use leptos::prelude::*;

use crate::contact::LinkLauncher;

/// Opens links through the browser: web pages in a new tab, `mailto:` and
/// `tel:` through the current location so the OS handler picks them up.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl LinkLauncher for BrowserLauncher {
    fn open(&self, url: &str) {
        let res = if url.starts_with("http://") || url.starts_with("https://") {
            window()
                .open_with_url_and_target(url, "_blank")
                .map(|_| ())
        } else {
            window().location().set_href(url)
        };
        if let Err(e) = res {
            log::warn!("couldn't open {url}: {e:?}");
        }
    }
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("couldn't show alert: {e:?}");
    }
}
