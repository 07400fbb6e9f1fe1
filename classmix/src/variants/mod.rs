//! Declarative variant resolution over class values.
//!
//! A [`VariantConfig`] declares named axes of variation ("size", "color"),
//! the class fragments each option contributes, default selections, and
//! compound rules that fire on specific combinations. A [`VariantResolver`]
//! binds a configuration to a base class once and resolves [`Props`] per
//! call. Resolution degrades gracefully: unknown axes and option keys
//! contribute nothing rather than failing a render path.

mod config;
mod props;
mod resolver;


pub use config::{CompoundVariant, Match, VariantConfig};
pub use props::{Props, VariantValue};
pub use resolver::VariantResolver;
