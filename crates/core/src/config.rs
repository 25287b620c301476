use std::path::PathBuf;

use derive_builder::Builder;
use ll_domain::Layout;

/// Everything one invocation needs: what to list and how wide to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ListConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub target: PathBuf,
    #[builder(default)]
    pub layout: Layout,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { target: PathBuf::from("."), layout: Layout::default() }
    }
}

#[cfg(test)]
mod tests {
    use ll_domain::LayoutBuilder;

    use super::*;

    #[test]
    fn defaults_list_the_current_directory() {
        let config = ListConfigBuilder::default().build().unwrap();
        assert_eq!(config, ListConfig::default());
        assert_eq!(config.target, PathBuf::from("."));
    }

    #[test]
    fn target_and_layout_are_settable() {
        let layout = LayoutBuilder::default().filename_width(20usize).build().unwrap();
        let config = ListConfigBuilder::default().target("/tmp").layout(layout).build().unwrap();
        assert_eq!(config.target, PathBuf::from("/tmp"));
        assert_eq!(config.layout.filename_width, 20);
    }
}
