use babel_plugin_order::{ find_plugin, PluginReference };
use once_cell::sync::Lazy ;
use serde_json::json ;

static PLUGINS: Lazy<Vec<PluginReference>> = Lazy::new(|| plugin_list![
    "short-name",
    PluginReference::from( "babel-plugin-long-name" ).with_config( json!({})).with_instance_id( "id" ),
    "/path/to/node_modules/babel-plugin-full-path/index.js",
    "/path/to/node_modules/@scope/babel-plugin-scoped-path/lib/plugin.js",
]);

#[test]
fn locates_plugins_by_short_and_normalized_names() {
    assert_eq!( find_plugin( &*PLUGINS, "nonexistent" ), None );

    assert_eq!( find_plugin( &*PLUGINS, "short-name" ), Some( &PLUGINS[ 0 ]));
    assert_eq!( find_plugin( &*PLUGINS, "babel-plugin-short-name" ), Some( &PLUGINS[ 0 ]));

    assert_eq!( find_plugin( &*PLUGINS, "long-name" ), Some( &PLUGINS[ 1 ]));
    assert_eq!( find_plugin( &*PLUGINS, "babel-plugin-long-name" ), Some( &PLUGINS[ 1 ]));

    assert_eq!( find_plugin( &*PLUGINS, "full-path" ), Some( &PLUGINS[ 2 ]));
    assert_eq!( find_plugin( &*PLUGINS, "babel-plugin-full-path" ), Some( &PLUGINS[ 2 ]));

    assert_eq!( find_plugin( &*PLUGINS, "@scope/scoped-path" ), Some( &PLUGINS[ 3 ]));
    assert_eq!( find_plugin( &*PLUGINS, "@scope/babel-plugin-scoped-path" ), Some( &PLUGINS[ 3 ]));
}

#[test]
fn locates_plugins_by_module_path() {
    let from_other_checkout = "/other/checkout/node_modules/babel-plugin-full-path/lib/index.js";
    assert_eq!( find_plugin( &*PLUGINS, from_other_checkout ), Some( &PLUGINS[ 2 ]));
}

#[test]
fn returns_the_first_match_in_list_order() {
    let plugins = plugin_list![ "duplicated", "babel-plugin-duplicated" ];
    assert_eq!( find_plugin( &plugins, "duplicated" ), Some( &plugins[ 0 ]));
}
