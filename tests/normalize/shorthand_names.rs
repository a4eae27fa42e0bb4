use babel_plugin_order::CanonicalName ;

#[test]
fn normalizes_shorthand_plugin_names() {
    assert_eq!( CanonicalName::normalize( "mod" ), "babel-plugin-mod" );
    assert_eq!( CanonicalName::normalize( "@babel/mod" ), "@babel/plugin-mod" );
    assert_eq!( CanonicalName::normalize( "@scope" ), "@scope/babel-plugin" );
    assert_eq!( CanonicalName::normalize( "@scope/mod" ), "@scope/babel-plugin-mod" );
}

#[test]
fn scope_splitting_keeps_the_remainder_after_the_first_separator() {
    assert_eq!( CanonicalName::normalize( "@scope/mod/extra" ), "@scope/babel-plugin-mod/extra" );
    assert_eq!( CanonicalName::normalize( "@babel/mod/extra" ), "@babel/plugin-mod/extra" );
}
