//! Identity resolution and constraint-ordered placement for Babel plugin
//! configuration.
//!
//! A Babel configuration holds an ordered list of plugin declarations, and the
//! order is meaningful: it is the order the plugins run in. Tooling that edits
//! such a configuration faces two recurring problems. The same plugin can be
//! declared in many shapes - `"mod"`, `"babel-plugin-mod"`, a filesystem path
//! into `node_modules`, or a tuple bundling the plugin with options - so
//! telling whether a plugin is already present requires resolving every shape
//! to one canonical identity. And inserting a new declaration often comes with
//! ordering requirements relative to plugins already in the list, which may or
//! may not be satisfiable.
//!
//! `babel_plugin_order` solves exactly these two problems and nothing else: it
//! never loads plugin code, never touches the filesystem, and never validates
//! that a referenced module exists.
//!
//! # Core Concepts
//!
//! - [`PluginReference`]: A single declaration - a bare module string, a
//!   loaded [`PluginImplementation`], or a [`PluginTuple`] carrying
//!   configuration and an optional instance id.
//!
//! - [`CanonicalName`]: The comparison identity of a declaration, produced by
//!   the same shorthand resolution Babel applies to plugin names
//!   (`"mod"` → `"babel-plugin-mod"`, `"@babel/mod"` → `"@babel/plugin-mod"`).
//!
//! - [`ConfigurationTarget`]: The host holding the list. A plain
//!   `Vec<PluginReference>` works directly; [`BabelOptions`] models a full
//!   options object that keeps its sibling options intact.
//!
//! - [`AddPluginOptions`]: `before`/`after` placement constraints for
//!   [`add_plugin`]. Contradictory constraints fail with [`PlacementError`]
//!   and leave the target untouched.
//!
//! # Example
//!
//! ```
//! use babel_plugin_order::{ add_plugin, has_plugin, AddPluginOptions, BabelOptions };
//!
//! # fn main() -> Result<(), babel_plugin_order::PlacementError> {
//! let mut options = BabelOptions::default();
//!
//! // The list is created on first insertion.
//! add_plugin( &mut options, "@babel/plugin-proposal-class-properties", AddPluginOptions::new() )?;
//!
//! // Declarations are found whatever shape they are asked for in.
//! assert!( has_plugin( &options, "@babel/proposal-class-properties" ));
//!
//! // Decorators must run before class properties.
//! let index = add_plugin(
//!     &mut options,
//!     "@babel/plugin-proposal-decorators",
//!     AddPluginOptions::new().before([ "@babel/plugin-proposal-class-properties" ]),
//! )?;
//! assert_eq!( index, 0 );
//! # Ok(())
//! # }
//! ```
//!
//! # Matching Configured Declarations
//!
//! A bare reference matches any declaration with the same name. A tuple
//! narrows the match: its config value must be structurally equal to the
//! candidate's, and its instance id - used when the same plugin appears
//! multiple times - must agree. An explicitly empty config position matches
//! any configured candidate, which is how a specific instance is addressed
//! without repeating its configuration:
//!
//! ```
//! use babel_plugin_order::{ has_plugin, PluginReference };
//! use serde_json::json ;
//!
//! let plugins: Vec<PluginReference> = vec![
//!     PluginReference::from( "emotion" ).with_config( json!({ "sourceMap": true })).with_instance_id( "dev" ),
//!     PluginReference::from( "emotion" ).with_config( json!({ "sourceMap": false })).with_instance_id( "prod" ),
//! ];
//!
//! assert!( has_plugin( &plugins, PluginReference::from( "emotion" )));
//! assert!( has_plugin( &plugins, PluginReference::from( "emotion" ).with_undefined_config().with_instance_id( "prod" )));
//! assert!( !has_plugin( &plugins, PluginReference::from( "emotion" ).with_undefined_config().with_instance_id( "test" )));
//! ```
//!
//! # Serialized Configuration
//!
//! All declaration shapes round-trip through serde using the conventional
//! Babel JSON forms, so a configuration file can be edited in place:
//!
//! ```
//! use babel_plugin_order::{ add_plugin, AddPluginOptions, BabelOptions };
//! use serde_json::json ;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut options: BabelOptions = serde_json::from_value( json!({
//!     "loose": true,
//!     "plugins": [ "a", [ "b", { "lazy": true }]],
//! }))?;
//!
//! add_plugin( &mut options, "c", AddPluginOptions::new().after([ "b" ]))?;
//!
//! assert_eq!( serde_json::to_value( &options )?, json!({
//!     "loose": true,
//!     "plugins": [ "a", [ "b", { "lazy": true }], "c" ],
//! }));
//! # Ok(())
//! # }
//! ```

mod canonical_name ;
mod config ;
mod identity ;
mod placement ;
mod reference ;
mod target ;

pub use canonical_name::CanonicalName ;
pub use config::{ add_plugin, find_plugin, has_plugin };
pub use identity::find_plugin_index ;
pub use placement::{ AddPluginOptions, PlacementError };
pub use reference::{ ConfigSlot, PluginImplementation, PluginReference, PluginTuple };
pub use target::{ BabelOptions, ConfigurationTarget };
