use babel_plugin_order::{ add_plugin, AddPluginOptions, PluginReference };
use serde_json::json ;

fn instances() -> Vec<PluginReference> {
    plugin_list![
        PluginReference::from( "short-name" ).with_config( json!({ "config": true })).with_instance_id( "instance-1" ),
        PluginReference::from( "short-name" ).with_config( json!({ "config": false })).with_instance_id( "instance-2" ),
    ]
}

#[test]
fn constraints_may_target_a_specific_instance() {
    let mut plugins = instances();
    let constraint = PluginReference::from( "short-name" )
        .with_undefined_config()
        .with_instance_id( "instance-2" );

    let index = add_plugin( &mut plugins, "foo", AddPluginOptions::new().after([ constraint ])).unwrap();

    assert_eq!( index, 2 );
}

#[test]
fn bare_constraints_bind_to_the_first_matching_instance() {
    let mut plugins = instances();

    let index = add_plugin( &mut plugins, "foo", AddPluginOptions::new().before([ "short-name" ])).unwrap();

    assert_eq!( index, 0 );
}
