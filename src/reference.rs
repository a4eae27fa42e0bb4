//! Plugin declaration shapes.
//!
//! A Babel configuration declares plugins in three shapes: a bare module
//! string, an already-loaded implementation, or a tuple bundling either of
//! those with configuration and an optional instance identifier.
//! [`PluginReference`] models the shapes as explicit variants so the rest of
//! the crate can pattern-match instead of probing structure at runtime.

use std::fmt ;

use pipe_trait::Pipe ;
use serde::de::{ self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor };
use serde::ser::{ SerializeSeq, Serializer };
use serde::{ Deserialize, Serialize };
use serde_json::Value ;

use crate::CanonicalName ;



/// Marker prefix requesting that the remainder be treated as a module path
/// verbatim, bypassing all name resolution.
const MODULE_MARKER: &str = "module:";

/// The path segment marking a package root boundary inside a module path.
const PACKAGE_ROOT: &str = "node_modules";

/// A single plugin declaration within a configuration list.
///
/// Bare strings and tuple declarations correspond to the shapes Babel accepts
/// in its `plugins` array; implementations stand in for plugin code handed
/// over directly rather than referenced by name.
#[derive( Debug, Clone, PartialEq )]
pub enum PluginReference {
    /// A module to load: a package name, a filesystem path, or a
    /// `module:`-prefixed path.
    Bare( String ),
    /// An already-loaded implementation supplied directly.
    Implementation( PluginImplementation ),
    /// A plugin bundled with configuration and/or an instance identifier.
    Tuple( PluginTuple ),
}

/// An opaque, already-loaded plugin implementation.
///
/// Only the optional `name` is ever consulted; the implementation itself is
/// never inspected.
#[derive( Debug, Clone, Default, PartialEq, Serialize, Deserialize )]
pub struct PluginImplementation {
    /// The name the implementation reports for itself, if any.
    #[serde( default, skip_serializing_if = "Option::is_none" )]
    pub name: Option<String>,
}

impl PluginImplementation {

    /// Creates an implementation reference reporting the given name.
    pub fn named( name: impl Into<String> ) -> Self {
        Self { name: Some( name.into() )}
    }

    /// Creates an implementation reference without a name.
    ///
    /// Anonymous implementations have no identity and never match anything.
    pub fn anonymous() -> Self {
        Self { name: None }
    }

}

/// The configuration position of a [`PluginTuple`].
///
/// Declarations distinguish between a tuple that never had a config position
/// at all, one whose position exists but holds no value, and one carrying a
/// concrete value. The distinction drives matching; see
/// [`PluginReference::matches`].
#[derive( Debug, Clone, Default, PartialEq )]
pub enum ConfigSlot {
    /// No config position was declared.
    #[default] Omitted,
    /// The config position exists but holds no value.
    Undefined,
    /// A concrete, opaque configuration value.
    Value( Value ),
}

/// A plugin bundled with optional configuration and an optional instance
/// identifier allowing multiple instances of the same plugin to coexist.
#[derive( Debug, Clone, PartialEq )]
pub struct PluginTuple {
    plugin: Box<PluginReference>,
    config: ConfigSlot,
    instance_id: Option<String>,
}

impl PluginTuple {

    /// Creates a tuple declaration.
    ///
    /// An identified tuple always has a config position, even an empty one:
    /// an `Omitted` slot alongside an instance id is recorded as `Undefined`.
    pub fn new( plugin: PluginReference, config: ConfigSlot, instance_id: Option<String> ) -> Self {
        let config = match ( &config, &instance_id ) {
            ( ConfigSlot::Omitted, Some( _ )) => ConfigSlot::Undefined,
            _ => config,
        };
        Self { plugin: Box::new( plugin ), config, instance_id }
    }

    /// The plugin being declared.
    #[inline] pub fn plugin( &self ) -> &PluginReference { &self.plugin }

    /// The configuration position.
    #[inline] pub fn config( &self ) -> &ConfigSlot { &self.config }

    /// The instance identifier, if one was declared.
    #[inline] pub fn instance_id( &self ) -> Option<&str> { self.instance_id.as_deref() }

    /// Whether this tuple constrains matching beyond the plugin name.
    ///
    /// A singleton tuple matches as loosely as a bare reference does.
    pub(crate) fn is_constrained( &self ) -> bool {
        self.config != ConfigSlot::Omitted
    }

}

impl PluginReference {

    /// Creates a bare reference from a module name or path.
    pub fn bare( name: impl Into<String> ) -> Self {
        Self::Bare( name.into() )
    }

    /// Bundles this reference with a concrete configuration value.
    pub fn with_config( self, config: impl Into<Value> ) -> Self {
        self.with_config_slot( ConfigSlot::Value( config.into() ))
    }

    /// Bundles this reference with an explicitly empty configuration position.
    ///
    /// Useful when matching: an empty position matches configured candidates
    /// regardless of their config value, while still constraining on the
    /// instance id if one is attached.
    pub fn with_undefined_config( self ) -> Self {
        self.with_config_slot( ConfigSlot::Undefined )
    }

    /// Attaches an instance identifier, disambiguating between multiple
    /// instances of the same plugin.
    pub fn with_instance_id( self, id: impl Into<String> ) -> Self {
        match self {
            Self::Tuple( tuple ) => Self::Tuple( PluginTuple::new(
                *tuple.plugin,
                tuple.config,
                Some( id.into() ),
            )),
            other => Self::Tuple( PluginTuple::new( other, ConfigSlot::Omitted, Some( id.into() ))),
        }
    }

    fn with_config_slot( self, config: ConfigSlot ) -> Self {
        match self {
            Self::Tuple( tuple ) => Self::Tuple( PluginTuple::new(
                *tuple.plugin,
                config,
                tuple.instance_id,
            )),
            other => Self::Tuple( PluginTuple::new( other, config, None )),
        }
    }

    /// Resolves the canonical identity of this declaration.
    ///
    /// Returns `None` only for anonymous implementations, which carry no
    /// name-bearing part. Configuration and instance identifiers are never
    /// consulted; resolution is deterministic.
    ///
    /// ```
    /// use babel_plugin_order::PluginReference ;
    ///
    /// let reference = PluginReference::from( "/x/node_modules/@s/pkg/lib/i.js" );
    /// assert_eq!( reference.canonical_name().unwrap(), "@s/babel-plugin-pkg" );
    /// ```
    pub fn canonical_name( &self ) -> Option<CanonicalName> {
        match self {
            Self::Tuple( tuple ) => tuple.plugin().canonical_name(),
            Self::Implementation( implementation ) => {
                implementation.name.as_deref().map( CanonicalName::normalize )
            }
            Self::Bare( value ) => Some( resolve_bare( value )),
        }
    }

    /// Whether this declaration and `candidate` denote the same configured
    /// entry.
    ///
    /// Both must resolve to the same canonical name. Beyond the name:
    ///
    /// - a declaration without explicit config matches any candidate with the
    ///   same name, however the candidate is configured;
    /// - a declaration with config never matches an unconfigured candidate;
    /// - mismatched instance ids never match, regardless of config;
    /// - an [`Undefined`]( ConfigSlot::Undefined ) config position matches any
    ///   candidate config;
    /// - otherwise the two config values must be structurally equal.
    ///
    /// The instance-id comparison runs before the structural config
    /// comparison, so mismatched ids short-circuit the deep check.
    pub fn matches( &self, candidate: &PluginReference ) -> bool {
        let Some( name ) = self.canonical_name() else { return false };
        candidate.canonical_name().is_some_and(| candidate_name | candidate_name == name )
            && self.has_same_config( candidate )
    }

    /// The config-matching half of [`PluginReference::matches`], assuming the
    /// canonical names already agree.
    pub(crate) fn has_same_config( &self, candidate: &PluginReference ) -> bool {
        let Self::Tuple( wanted ) = self else { return true };
        if !wanted.is_constrained() {
            return true;
        }

        let Self::Tuple( candidate ) = candidate else { return false };
        if !candidate.is_constrained() {
            return false;
        }

        if wanted.instance_id().is_some_and(| id | candidate.instance_id() != Some( id )) {
            return false;
        }

        match wanted.config() {
            ConfigSlot::Value( wanted_config ) => match candidate.config() {
                ConfigSlot::Value( candidate_config ) => wanted_config == candidate_config,
                ConfigSlot::Omitted | ConfigSlot::Undefined => false,
            },
            ConfigSlot::Omitted | ConfigSlot::Undefined => true,
        }
    }

    /// The name used when reporting this declaration in errors and logs.
    pub(crate) fn display_name( &self ) -> String {
        self.canonical_name()
            .map_or_else(|| self.to_string(), | name | name.to_string() )
    }

}

/// Resolves a bare module string: the `module:` carve-out first, then package
/// extraction for paths crossing a package root, then plain normalization.
fn resolve_bare( value: &str ) -> CanonicalName {
    if let Some( verbatim ) = value.strip_prefix( MODULE_MARKER ) {
        return CanonicalName::verbatim( verbatim );
    }
    match tail_after_package_root( value ) {
        Some( tail ) => package_name_token( tail ).pipe(| token | CanonicalName::normalize( &token )),
        None => CanonicalName::normalize( value ),
    }
}

/// Returns the path tail following the last package root boundary, if any.
///
/// A boundary is a `node_modules` segment delimited by `/` or `\` on both
/// sides; mixed separator styles are accepted.
fn tail_after_package_root( path: &str ) -> Option<&str> {
    path.match_indices( PACKAGE_ROOT )
        .filter(|( index, segment )| {
            let before = path[..*index].chars().last();
            let after = path[index + segment.len()..].chars().next();
            matches!( before, Some( '/' | '\\' )) && matches!( after, Some( '/' | '\\' ))
        })
        .last()
        .map(|( index, segment )| &path[index + segment.len() + 1..] )
}

/// Extracts the leading package-name token from a path relative to a package
/// root: an optional `@scope` prefix plus one more segment. Scoped tokens are
/// rejoined with `/` whatever the separator style of the path.
fn package_name_token( package_path: &str ) -> String {
    let mut segments = package_path.split([ '/', '\\' ]);
    let first = segments.next().unwrap_or_default();
    match segments.next() {
        Some( name ) if first.starts_with( '@' ) => format!( "{first}/{name}" ),
        _ => first.to_string(),
    }
}

impl fmt::Display for PluginReference {
    /// Formats the declaration's name-bearing part, for diagnostics.
    fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
        match self {
            Self::Bare( value ) => f.write_str( value ),
            Self::Implementation( implementation ) => {
                f.write_str( implementation.name.as_deref().unwrap_or( "<anonymous plugin>" ))
            }
            Self::Tuple( tuple ) => fmt::Display::fmt( tuple.plugin(), f ),
        }
    }
}

impl From<&str> for PluginReference {
    fn from( name: &str ) -> Self { Self::Bare( name.to_string() )}
}

impl From<String> for PluginReference {
    fn from( name: String ) -> Self { Self::Bare( name )}
}

impl From<PluginImplementation> for PluginReference {
    fn from( implementation: PluginImplementation ) -> Self { Self::Implementation( implementation )}
}

impl From<PluginTuple> for PluginReference {
    fn from( tuple: PluginTuple ) -> Self { Self::Tuple( tuple )}
}

impl Serialize for PluginReference {
    fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bare( value ) => serializer.serialize_str( value ),
            Self::Implementation( implementation ) => implementation.serialize( serializer ),
            Self::Tuple( tuple ) => tuple.serialize( serializer ),
        }
    }
}

impl Serialize for PluginTuple {
    /// Serializes as the 1-3 element array shape Babel configurations use:
    /// `[plugin]`, `[plugin, config]`, or `[plugin, config, instance_id]`.
    /// An empty config position serializes as `null`.
    fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error> {
        let length = match ( &self.config, &self.instance_id ) {
            ( ConfigSlot::Omitted, None ) => 1,
            ( _, None ) => 2,
            ( _, Some( _ )) => 3,
        };
        let mut seq = serializer.serialize_seq( Some( length ))?;
        seq.serialize_element( &*self.plugin )?;
        if length > 1 {
            match &self.config {
                ConfigSlot::Value( value ) => seq.serialize_element( value )?,
                ConfigSlot::Omitted | ConfigSlot::Undefined => seq.serialize_element( &Value::Null )?,
            }
        }
        if let Some( id ) = &self.instance_id {
            seq.serialize_element( id )?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PluginReference {
    fn deserialize<D: Deserializer<'de>>( deserializer: D ) -> Result<Self, D::Error> {
        deserializer.deserialize_any( ReferenceVisitor )
    }
}

struct ReferenceVisitor ;

impl<'de> Visitor<'de> for ReferenceVisitor {
    type Value = PluginReference ;

    fn expecting( &self, f: &mut fmt::Formatter ) -> fmt::Result {
        f.write_str( "a plugin name, an implementation object, or a plugin tuple" )
    }

    fn visit_str<E: de::Error>( self, value: &str ) -> Result<Self::Value, E> {
        Ok( PluginReference::Bare( value.to_string() ))
    }

    fn visit_map<A: MapAccess<'de>>( self, map: A ) -> Result<Self::Value, A::Error> {
        PluginImplementation::deserialize( de::value::MapAccessDeserializer::new( map ))
            .map( PluginReference::Implementation )
    }

    fn visit_seq<A: SeqAccess<'de>>( self, mut seq: A ) -> Result<Self::Value, A::Error> {
        let plugin: PluginReference = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length( 0, &"a tuple with at least a plugin entry" ))?;

        // A `null` config position is an empty slot, not a config value.
        let config = match seq.next_element::<Value>()? {
            None => ConfigSlot::Omitted,
            Some( Value::Null ) => ConfigSlot::Undefined,
            Some( value ) => ConfigSlot::Value( value ),
        };
        let instance_id = seq.next_element::<Option<String>>()?.flatten();

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err( de::Error::invalid_length( 4, &"a plugin tuple of at most three entries" ));
        }

        Ok( PluginReference::Tuple( PluginTuple::new( plugin, config, instance_id )))
    }
}
