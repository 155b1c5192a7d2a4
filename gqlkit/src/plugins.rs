//! Plugin dispatch for configured outputs.

use gqlkit_codegen::Plugin;
use gqlkit_codegen_java::Generator as JavaGenerator;
use gqlkit_codegen_typescript::Generator as TypeScriptGenerator;
use gqlkit_config::PluginKind;

/// The generation module behind a configured plugin name.
pub fn plugin_for(kind: PluginKind) -> Box<dyn Plugin> {
    match kind {
        PluginKind::JavaResolvers => Box::new(JavaGenerator::new()),
        PluginKind::TypescriptClient => Box::new(TypeScriptGenerator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_names_match_config() {
        for kind in [PluginKind::JavaResolvers, PluginKind::TypescriptClient] {
            assert_eq!(plugin_for(kind).name(), kind.as_str());
        }
    }
}
