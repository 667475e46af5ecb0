pub mod loader;
pub mod run_config;

pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use run_config::{CompileConfig, GenerationConfig, OutputConfig, SenderIdentity, TailorConfig};
