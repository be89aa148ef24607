use sipforge_core::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod application;
mod presentation {
    pub mod cli;
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sipforge_core=info,sipforgedev=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    application::run()
}
