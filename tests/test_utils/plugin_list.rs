macro_rules! plugin_list {
    ($( $plugin:expr ),* $(,)?) => {
        vec![ $( babel_plugin_order::PluginReference::from( $plugin ) ),* ]
    };
}
