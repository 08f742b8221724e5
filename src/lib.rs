//! Riverbed - delta-driven mutable and immutable builders
//!
//! Builders accumulate typed deltas against a kernel and merge them into a
//! finished value. Mutable builders mutate one owned state under a lock;
//! immutable builders share a persistent history and replay it on every
//! `build`/`done`. The builder machinery lives in `riverbed_core`; this crate
//! re-exports it and adds configuration, error handling and logging setup.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Re-export commonly used items for convenience
pub use self::core::{load_config_or_default, BuilderConfig, Config, Error, LoggingConfig, Result};
pub use riverbed_core::{
    enum_key, BuilderError, BuilderKey, DeltaKind, EnumKey, EnumKeySet, EnumMap, EnumMapBuilder,
    EnumMapKernel, HashMapBuilder, HashMapKernel, ImmutableBuilder, ImmutableBuilderCore,
    ImmutableEnumMapBuilder, ImmutableHashMapBuilder, ImmutableListBuilder, ImmutableMapBuilder,
    ListOp, MapDelta, MapKernel, MutableBuilder, MutableBuilderCore, MutableListBuilder,
    MutableMapBuilder, Transform,
};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize tracing from `RUST_LOG`, leaving builder settings at their defaults
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!("Initializing {} v{}", NAME, VERSION);
    Ok(())
}

/// Initialize tracing and builder settings from a loaded configuration
pub fn init_with_config(config: &Config) -> Result<()> {
    config.validate()?;

    if !riverbed_core::core::settings::install(config.builder.fold_settings()) {
        tracing::warn!("Builder settings were already installed; keeping the earlier ones");
    }

    let filter = tracing_subscriber::EnvFilter::try_new(&config.logging.level)
        .map_err(|e| Error::config(format!("Invalid log level: {}", e)))?;
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.logging.format.as_str() {
        "json" => subscriber.json().try_init(),
        "compact" => subscriber.compact().try_init(),
        _ => subscriber.pretty().try_init(),
    };
    installed.map_err(|e| Error::config(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        chain_depth_warning = config.builder.chain_depth_warning,
        "Initializing {} v{}",
        NAME,
        VERSION
    );
    Ok(())
}
