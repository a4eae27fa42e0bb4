use babel_plugin_order::{ add_plugin, AddPluginOptions, PlacementError };

#[test]
fn rejects_unsatisfiable_constraints() {
    let mut plugins = plugin_list![ "a", "b", "c", "d", "e" ];

    let result = add_plugin(
        &mut plugins,
        "babel-plugin-foo",
        AddPluginOptions::new().before([ "c" ]).after([ "d" ]),
    );

    assert_eq!( result, Err( PlacementError::Unsatisfiable( "babel-plugin-foo".to_string() )));
}

#[test]
fn conflict_errors_name_the_plugin_canonically() {
    let mut plugins = plugin_list![ "a", "b" ];

    let error = add_plugin( &mut plugins, "foo", AddPluginOptions::new().before([ "a" ]).after([ "b" ]))
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "unable to satisfy placement constraints for Babel plugin babel-plugin-foo",
    );
}

#[test]
fn a_failed_insertion_leaves_the_list_untouched() {
    let mut plugins = plugin_list![ "a", "b", "c", "d", "e" ];
    let snapshot = plugins.clone();

    let result = add_plugin( &mut plugins, "foo", AddPluginOptions::new().before([ "c" ]).after([ "d" ]));

    assert!( result.is_err() );
    assert_eq!( plugins, snapshot );
}

#[test]
fn an_entry_constrained_around_itself_conflicts() {
    let mut plugins = plugin_list![ "a", "b", "c" ];

    let result = add_plugin( &mut plugins, "foo", AddPluginOptions::new().before([ "b" ]).after([ "b" ]));

    assert!( result.is_err() );
}
