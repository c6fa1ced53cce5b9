#![allow(non_snake_case)]
//! PaletteField - theme color field for form builders
//!
//! Composes the `themepalette` engine into the pieces a host form framework
//! wires up: typed field definitions, the field's render/load/update/format
//! hooks, the color query endpoint, and the debounced source refresh of the
//! field settings screen.

// Re-export the engine
pub use themepalette;

pub mod config;
pub mod definition;
pub mod error;
pub mod field;
pub mod navigation;
pub mod query;
pub mod refresh;

pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::definition::FieldDefinition;
    pub use crate::error::{Error, Result};
    pub use crate::field::{ColorChoice, ColorOption, FieldView, ThemeColorField};
    pub use crate::navigation::{NavKey, NavOutcome, OptionCursor, Preview};
    pub use crate::query::{Caller, ColorList, ColorQuery, ColorQueryEndpoint, QueryError, QueryResponse};
    pub use crate::refresh::{Debouncer, FilterEditor};
    pub use themepalette::prelude::{
        FieldSettings, FormattedValue, PaletteProvider, PaletteSource, ReturnFormat, ThemeDocument,
        ThemeLocation,
    };
}
