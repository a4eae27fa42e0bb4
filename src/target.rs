//! Configuration targets holding an ordered plugin list.

use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };

use crate::PluginReference ;



/// A host object carrying (or able to carry) an ordered plugin list.
///
/// The lookup and placement operations never know the host's shape; they only
/// read the current list and, once an insertion is known to succeed, obtain a
/// mutable handle to it. Creating the list on first use is the target's
/// concern, which keeps "no list configured yet" distinct from "empty list".
pub trait ConfigurationTarget {
    /// The configured plugin list, if one exists yet.
    fn plugins( &self ) -> Option<&[PluginReference]> ;

    /// A mutable handle to the plugin list, materializing an empty one first
    /// if none was configured.
    fn plugins_mut( &mut self ) -> &mut Vec<PluginReference> ;
}

/// A plain list is its own target; it is always considered materialized.
impl ConfigurationTarget for Vec<PluginReference> {
    fn plugins( &self ) -> Option<&[PluginReference]> { Some( self )}
    fn plugins_mut( &mut self ) -> &mut Vec<PluginReference> { self }
}

/// A Babel options object: a plugin list plus arbitrary sibling options.
///
/// Sibling options are carried through untouched, so editing the plugin list
/// of a deserialized configuration preserves everything else on round-trip.
///
/// ```
/// use babel_plugin_order::BabelOptions ;
/// use serde_json::json ;
///
/// let options: BabelOptions = serde_json::from_value( json!({
///     "loose": true,
///     "plugins": [ "a", [ "b", { "lazy": true } ]],
/// })).unwrap();
///
/// assert_eq!( options.plugins.as_ref().map( Vec::len ), Some( 2 ));
/// assert_eq!( options.rest[ "loose" ], json!( true ));
/// ```
#[derive( Debug, Clone, Default, PartialEq, Serialize, Deserialize )]
pub struct BabelOptions {
    /// The ordered plugin list; `None` until one is configured.
    #[serde( default, skip_serializing_if = "Option::is_none" )]
    pub plugins: Option<Vec<PluginReference>>,
    /// All other options, preserved as-is.
    #[serde( flatten )]
    pub rest: Map<String, Value>,
}

impl ConfigurationTarget for BabelOptions {
    fn plugins( &self ) -> Option<&[PluginReference]> {
        self.plugins.as_deref()
    }

    fn plugins_mut( &mut self ) -> &mut Vec<PluginReference> {
        self.plugins.get_or_insert_with( Vec::new )
    }
}
