//! Settings file discovery and loading for the SQL linter.
//!
//! The engine itself never touches the file system; hosts use this crate to
//! turn a `.sqlintrc.yaml` (or JSON) file into [`Settings`] and pass the value
//! to [`sqlint_linter::Linter::new`].
//!
//! ```yaml
//! maxNumberOfProblems: 200
//! lint:
//!   extends: recommended
//!   rules:
//!     leading-comma:
//!       severity: error
//!       options:
//!         position: leading
//! ```

mod error;
mod loader;

pub use error::{ConfigError, Result};
pub use loader::{find_settings, load_settings, load_settings_from_str, CONFIG_FILES};
pub use sqlint_linter::Settings;
