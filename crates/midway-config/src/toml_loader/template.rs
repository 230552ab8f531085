//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Midway Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[general]
# Closable windows allowed before the oldest one is closed to make room.
# window_limit = 64        # 4-64

[interface]
# toolbar_show_research = true
# enlarged_ui = false

[display]
# width = 1280             # 64-16384
# height = 720             # 64-16384
# top_toolbar_height = 27  # 0-200

[debug]
# Behaviour when a window is requested that nothing can open.
# unroutable_intents = "auto"   # auto, abort, log

[logging]
# level = "midway=info"
"##
    .to_string()
}
