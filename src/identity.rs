//! Locating declarations within an ordered plugin list.

use itertools::Itertools ;

use crate::PluginReference ;



/// Finds the first declaration matching `wanted` and returns its index.
///
/// The scan is a single linear pass in list order: when several entries match,
/// the earliest one always wins, so repeated lookups are deterministic.
///
/// ```
/// use babel_plugin_order::{ find_plugin_index, PluginReference };
///
/// let plugins: Vec<PluginReference> = vec![ "a".into(), "short-name".into() ];
/// let wanted = PluginReference::from( "babel-plugin-short-name" );
///
/// assert_eq!( find_plugin_index( &plugins, &wanted ), Some( 1 ));
/// ```
pub fn find_plugin_index( plugins: &[PluginReference], wanted: &PluginReference ) -> Option<usize> {
    find_plugin_entry( plugins, wanted ).map(|( index, _ )| index )
}

/// Finds the first declaration matching `wanted`, returning both its index and
/// the declaration itself.
///
/// The wanted name is resolved once up front; a declaration that resolves to
/// no name at all matches nothing.
pub(crate) fn find_plugin_entry<'a>(
    plugins: &'a [PluginReference],
    wanted: &PluginReference,
) -> Option<( usize, &'a PluginReference )> {
    let name = wanted.canonical_name()?;
    plugins.iter().find_position(| candidate | {
        candidate.canonical_name().is_some_and(| candidate_name | candidate_name == name )
            && wanted.has_same_config( candidate )
    })
}
