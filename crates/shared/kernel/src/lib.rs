//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it only owns configuration loading.
//!
//! ## Config loading
//! ```rust
//! use wordcheck_kernel::config::load_config_from;
//! use wordcheck_kernel::domain::config::CheckConfig;
//!
//! let vars = [("WORDCHECK__LOG__LEVEL".to_owned(), "debug".to_owned())].into_iter().collect();
//! let cfg: CheckConfig = load_config_from(vars).unwrap();
//! assert_eq!(cfg.log.level, "debug");
//! ```

pub mod config;

pub use wordcheck_domain as domain;
