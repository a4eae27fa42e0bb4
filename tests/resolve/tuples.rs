use babel_plugin_order::{ ConfigSlot, PluginReference, PluginTuple };
use serde_json::json ;

#[test]
fn resolves_names_from_tuple_declarations() {
    let configured = PluginReference::from( "foo" ).with_config( json!({}) );
    assert_eq!( configured.canonical_name().unwrap(), "babel-plugin-foo" );

    let identified = PluginReference::from( PluginTuple::new(
        "babel-plugin-bar".into(),
        ConfigSlot::Omitted,
        Some( "id".to_string() ),
    ));
    assert_eq!( identified.canonical_name().unwrap(), "babel-plugin-bar" );
}

#[test]
fn resolution_never_consults_config_or_instance_id() {
    let plain = PluginReference::from( "foo" );
    let loaded = PluginReference::from( "foo" )
        .with_config( json!({ "heavy": [ 1, 2, 3 ]}))
        .with_instance_id( "i9" );
    assert_eq!( plain.canonical_name(), loaded.canonical_name() );
}
