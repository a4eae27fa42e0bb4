//! Plugin configuration operations over a target.
//!
//! The three entry points cover the lifecycle of a declaration: check for it,
//! retrieve it, add it with placement constraints.

use log::debug ;

use crate::identity::{ find_plugin_entry, find_plugin_index };
use crate::placement::{ placement_index, AddPluginOptions, PlacementError };
use crate::{ ConfigurationTarget, PluginReference };



/// Indicates whether a matching plugin declaration is already configured.
///
/// With a bare `plugin`, any declaration resolving to the same canonical name
/// matches; a tuple carrying config and/or an instance id narrows the search
/// to declarations matching those too (see [`PluginReference::matches`]).
///
/// ```
/// use babel_plugin_order::{ has_plugin, PluginReference };
///
/// let plugins: Vec<PluginReference> = vec![ "short-name".into() ];
///
/// assert!( has_plugin( &plugins, "short-name" ));
/// assert!( has_plugin( &plugins, "babel-plugin-short-name" ));
/// assert!( !has_plugin( &plugins, "other" ));
/// ```
pub fn has_plugin<T>( target: &T, plugin: impl Into<PluginReference> ) -> bool
where
    T: ConfigurationTarget + ?Sized,
{
    let wanted = plugin.into();
    find_plugin_index( target.plugins().unwrap_or_default(), &wanted ).is_some()
}

/// Finds the configured declaration for the given plugin name.
///
/// The name may come in any shape [`PluginReference::canonical_name`]
/// resolves: short name, full package name, or module path. The first
/// matching declaration in list order is returned.
pub fn find_plugin<'t, T>( target: &'t T, name: &str ) -> Option<&'t PluginReference>
where
    T: ConfigurationTarget + ?Sized,
{
    let wanted = PluginReference::from( name );
    find_plugin_entry( target.plugins()?, &wanted ).map(|( _, entry )| entry )
}

/// Adds a plugin declaration to the target's configuration and returns the
/// index it was inserted at.
///
/// The declaration lands at the position chosen by the constraints in
/// `options`, or at the end of the list when nothing bounds it. The target's
/// plugin list is materialized - and mutated - only once the constraints are
/// known to be satisfiable, so a failed call leaves the target untouched.
///
/// ```
/// use babel_plugin_order::{ add_plugin, AddPluginOptions, PluginReference };
///
/// let mut plugins: Vec<PluginReference> = vec![ "a".into(), "b".into(), "c".into() ];
///
/// let index = add_plugin(
///     &mut plugins,
///     "babel-plugin-foo",
///     AddPluginOptions::new().before([ "c" ]).after([ "b" ]),
/// ).unwrap();
///
/// assert_eq!( index, 2 );
/// assert_eq!( plugins[ 2 ].to_string(), "babel-plugin-foo" );
/// ```
///
/// # Errors
/// Returns [`PlacementError::Unsatisfiable`] when the `before` and `after`
/// constraints contradict each other.
pub fn add_plugin<T>(
    target: &mut T,
    plugin: impl Into<PluginReference>,
    options: AddPluginOptions,
) -> Result<usize, PlacementError>
where
    T: ConfigurationTarget + ?Sized,
{
    let plugin = plugin.into();
    let bounded = placement_index( target.plugins().unwrap_or_default(), &plugin, &options )?;

    let plugins = target.plugins_mut();
    let index = bounded.unwrap_or( plugins.len() );
    debug!( "inserting {} at index {} of {}", plugin, index, plugins.len() );
    plugins.insert( index, plugin );
    Ok( index )
}
