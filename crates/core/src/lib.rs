pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod loader;
pub mod strip;
pub mod stripper;

pub use config::{StripConfig, StripConfigBuilder};
pub use document::StrippedDocument;
pub use error::{Result, TexproseError};
pub use extract::extract_body;
pub use loader::{load_flattened, strip_comment};
pub use strip::{
    remove_braced_commands, remove_environments, remove_formulas, remove_optioned_commands, remove_stopwords,
    remove_unbraced_commands,
};
pub use stripper::{Stripper, strip_document, strip_file};
