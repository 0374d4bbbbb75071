use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "prepbite_storefront=debug,prepbite_order=debug,prepbite_store=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Fails if a subscriber is already installed, which hosts and tests that
/// initialise more than once can ignore.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        let filter: tracing_subscriber::EnvFilter = DEFAULT_FILTER.parse().unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("prepbite_storefront=debug"));
        assert!(rendered.contains("prepbite_order=debug"));
        assert!(rendered.contains("prepbite_store=info"));
    }
}
