//! Constraint-bounded placement of a new declaration.
//!
//! Placement works on a closed index range: `after` constraints push the
//! lower bound up past the last of the entries they name, `before` constraints
//! pull the upper bound down to the first of theirs. A crossing of the two
//! bounds is the only failure mode in the crate.

use thiserror::Error ;

use crate::identity::find_plugin_index ;
use crate::PluginReference ;



/// Relative-ordering constraints for [`add_plugin`]( crate::add_plugin ).
///
/// Constraints reference plugins already in the list, in any shape
/// [`PluginReference`] accepts; constraints whose plugin is not currently
/// configured are silently ignored.
///
/// ```
/// use babel_plugin_order::AddPluginOptions ;
///
/// let options = AddPluginOptions::new()
///     .before([ "@babel/plugin-proposal-class-properties" ])
///     .after([ "@babel/plugin-proposal-decorators" ]);
/// ```
#[derive( Debug, Clone, Default )]
pub struct AddPluginOptions {
    before: Vec<PluginReference>,
    after: Vec<PluginReference>,
}

impl AddPluginOptions {

    /// Creates an empty constraint set: the declaration is appended at the
    /// end of the list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the new declaration to appear before every listed plugin.
    pub fn before<I>( mut self, plugins: I ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PluginReference>,
    {
        self.before.extend( plugins.into_iter().map( Into::into ));
        self
    }

    /// Requires the new declaration to appear after every listed plugin.
    pub fn after<I>( mut self, plugins: I ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PluginReference>,
    {
        self.after.extend( plugins.into_iter().map( Into::into ));
        self
    }

}

/// Errors computing a placement for a new declaration.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum PlacementError {
    /// The `after` constraints push the declaration past a position the
    /// `before` constraints forbid it from reaching.
    #[error( "unable to satisfy placement constraints for Babel plugin {0}" )] Unsatisfiable( String ),
}

/// Computes the insertion index satisfying every constraint in `options`.
///
/// `Ok( None )` means no constraint bounded the placement and the declaration
/// belongs at the end of the list. When both bounds exist, the upper bound is
/// chosen: the declaration lands directly before the first `before` entry,
/// which also satisfies every `after` entry once the bounds are known not to
/// cross.
pub(crate) fn placement_index(
    plugins: &[PluginReference],
    plugin: &PluginReference,
    options: &AddPluginOptions,
) -> Result<Option<usize>, PlacementError> {
    let earliest = options
        .after
        .iter()
        .filter_map(| constraint | find_plugin_index( plugins, constraint ))
        .max()
        .map(| index | index + 1 );
    let latest = options
        .before
        .iter()
        .filter_map(| constraint | find_plugin_index( plugins, constraint ))
        .min();

    if earliest.zip( latest ).is_some_and(|( earliest, latest )| earliest > latest ) {
        return Err( PlacementError::Unsatisfiable( plugin.display_name() ));
    }

    Ok( latest.or( earliest ))
}
