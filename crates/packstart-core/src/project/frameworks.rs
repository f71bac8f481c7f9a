//! Per-framework package and plugin tables used by the generators.

/// Packages and snowpack plugin entries a framework choice pulls in.
#[derive(Debug)]
pub struct FrameworkSupport {
    pub prod_packages: &'static [&'static str],
    pub dev_packages: &'static [&'static str],
    pub ts_packages: &'static [&'static str],
    pub wtr_packages: &'static [&'static str],
    /// Entries for the `plugins` list of the generated snowpack config,
    /// already quoted.
    pub config_plugins: &'static [&'static str],
}

static BLANK: FrameworkSupport = FrameworkSupport {
    prod_packages: &[],
    dev_packages: &[],
    ts_packages: &[],
    wtr_packages: &[],
    config_plugins: &[],
};

static REACT: FrameworkSupport = FrameworkSupport {
    prod_packages: &["react", "react-dom"],
    dev_packages: &["@snowpack/plugin-react-refresh", "@snowpack/plugin-dotenv"],
    ts_packages: &["@types/react", "@types/react-dom"],
    wtr_packages: &["@testing-library/react"],
    config_plugins: &[
        "'@snowpack/plugin-react-refresh'",
        "'@snowpack/plugin-dotenv'",
    ],
};

static VUE: FrameworkSupport = FrameworkSupport {
    prod_packages: &["vue"],
    dev_packages: &["@snowpack/plugin-vue", "@snowpack/plugin-dotenv"],
    ts_packages: &[],
    wtr_packages: &["@testing-library/vue"],
    config_plugins: &["'@snowpack/plugin-vue'", "'@snowpack/plugin-dotenv'"],
};

static SVELTE: FrameworkSupport = FrameworkSupport {
    prod_packages: &["svelte"],
    dev_packages: &["@snowpack/plugin-svelte", "@snowpack/plugin-dotenv"],
    ts_packages: &["svelte-preprocess"],
    wtr_packages: &["@testing-library/svelte"],
    config_plugins: &["'@snowpack/plugin-svelte'", "'@snowpack/plugin-dotenv'"],
};

static PREACT: FrameworkSupport = FrameworkSupport {
    prod_packages: &["preact"],
    dev_packages: &["@prefresh/snowpack", "@snowpack/plugin-dotenv"],
    ts_packages: &[],
    wtr_packages: &["@testing-library/preact"],
    config_plugins: &["'@prefresh/snowpack'", "'@snowpack/plugin-dotenv'"],
};

static LIT_ELEMENT: FrameworkSupport = FrameworkSupport {
    prod_packages: &["lit-element", "lit-html"],
    dev_packages: &[
        "@babel/plugin-proposal-class-properties",
        "@babel/plugin-proposal-decorators",
        "@snowpack/plugin-babel",
        "@snowpack/plugin-dotenv",
    ],
    ts_packages: &["@babel/preset-typescript"],
    wtr_packages: &[],
    config_plugins: &["'@snowpack/plugin-babel'", "'@snowpack/plugin-dotenv'"],
};

/// Table lookup for a canonical framework value; the blank template has no
/// extra packages.
pub fn framework_support(js_framework: &str) -> &'static FrameworkSupport {
    match js_framework {
        "react" => &REACT,
        "vue" => &VUE,
        "svelte" => &SVELTE,
        "preact" => &PREACT,
        "lit-element" => &LIT_ELEMENT,
        _ => &BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_framework_has_no_packages() {
        let support = framework_support("blank");
        assert!(support.prod_packages.is_empty());
        assert!(support.config_plugins.is_empty());
    }

    #[test]
    fn react_pulls_refresh_plugin() {
        let support = framework_support("react");
        assert!(support.dev_packages.contains(&"@snowpack/plugin-react-refresh"));
    }
}
