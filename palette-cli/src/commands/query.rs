//! CLI command for the color query endpoint

use palettefield::query::{Caller, ColorQuery, ColorQueryEndpoint};
use themepalette::theme::ThemeLocation;

/// The local user: trusted, and never sends a nonce
struct LocalUser;

impl Caller for LocalUser {
    fn can_edit_posts(&self) -> bool {
        true
    }

    fn verify_nonce(&self, _nonce: &str) -> bool {
        false
    }
}

pub fn execute(location: ThemeLocation, source: Option<&str>) -> anyhow::Result<()> {
    let endpoint = ColorQueryEndpoint::new(location);
    let request = ColorQuery {
        source: source.map(str::to_owned),
        nonce: None,
    };

    let response = endpoint.handle(&LocalUser, &request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
