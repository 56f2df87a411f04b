pub mod batch;
pub mod config;
pub mod extract;
pub mod pacer;
pub mod portal;
pub mod progress;
pub mod records;
pub mod testing;

pub use batch::{BatchError, BatchRunner, BatchSummary};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DuplicateMode,
    ExtractorConfig, OutputConfig, PacingConfig, PortalConfig,
};
pub use extract::{Extraction, FieldExtractor};
pub use pacer::Pacer;
pub use portal::{AuthError, Credentials, FetchError, PortalClient, PortalSession, StatusPortal};
pub use progress::{ConsoleProgress, NullProgress, ProgressReport, ProgressSink};
pub use records::{read_identifiers, CaseIdentifier, LookupResult, ResultWriter, WriteError};
