use babel_plugin_order::{ add_plugin, AddPluginOptions, BabelOptions };
use serde_json::json ;

#[test]
fn materializes_the_plugin_list_on_first_insertion() {
    let mut target = BabelOptions::default();

    add_plugin( &mut target, "babel-plugin-foo", AddPluginOptions::new() ).unwrap();

    assert_eq!(
        serde_json::to_value( &target ).unwrap(),
        json!({ "plugins": [ "babel-plugin-foo" ]}),
    );
}

#[test]
fn leaves_existing_configuration_alone() {
    let mut target: BabelOptions = serde_json::from_value( json!({
        "loose": true,
        "sourceMaps": "inline",
        "plugins": [ "my-existing-plugin" ],
    })).unwrap();

    add_plugin( &mut target, "babel-plugin-foo", AddPluginOptions::new() ).unwrap();

    assert_eq!( serde_json::to_value( &target ).unwrap(), json!({
        "loose": true,
        "sourceMaps": "inline",
        "plugins": [ "my-existing-plugin", "babel-plugin-foo" ],
    }));
}
