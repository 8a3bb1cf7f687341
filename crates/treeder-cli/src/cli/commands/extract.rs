//! `treeder extract <text>` – print the URL found in shared text.

use treeder_core::share::extract_url;

pub fn run_extract(text: &str) {
    match extract_url(Some(text)) {
        Some(url) => println!("{url}"),
        None => {
            tracing::debug!("no url in shared text");
            eprintln!("no URL found");
        }
    }
}
