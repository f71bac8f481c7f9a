//! Project generation: everything that runs after option resolution to turn
//! a [`ResolvedOptions`](crate::options::ResolvedOptions) into a working
//! project directory.

pub mod assets;
pub mod base;
pub mod frameworks;
pub mod init;
pub mod manifest;
pub mod packages;
pub mod quickstart;
pub mod snowpack_config;

pub use assets::AssetPaths;
pub use base::create_base;
pub use init::{init_eslint, init_git, init_tailwind};
pub use manifest::generate_package_json;
pub use packages::install;
pub use quickstart::print_quickstart;
pub use snowpack_config::generate_snowpack_config;

#[cfg(test)]
pub(crate) mod testing {
    use super::assets::AssetPaths;
    use crate::options::ResolvedOptions;
    use std::fs;
    use std::path::Path;

    /// A resolved set matching the builtin defaults, scaffolding a blank
    /// JavaScript app under the MIT license.
    pub fn resolved_fixture() -> ResolvedOptions {
        ResolvedOptions {
            project_dir: "new-app".into(),
            js_framework: "blank".into(),
            typescript: false,
            code_formatters: vec!["eslint".into()],
            sass: false,
            css_framework: None,
            bundler: Some("webpack".into()),
            plugins: vec![],
            other_prod_deps: vec![],
            other_dev_deps: vec![],
            license: Some("mit".into()),
            author: Some("Jane Doe".into()),
            use_yarn: false,
            use_pnpm: false,
            skip_tailwind_init: false,
            skip_eslint_init: false,
            skip_git_init: false,
        }
    }

    /// Lay out a minimal asset tree (blank template plus the shared base
    /// files) under `root` and return paths into it.
    pub fn write_asset_fixture(root: &Path) -> AssetPaths {
        let assets = root.join("assets");
        let base = assets.join("base-files");
        fs::create_dir_all(base.join("licenses")).unwrap();
        fs::write(base.join("gitignore"), ".build\nnode_modules\n").unwrap();
        fs::write(base.join("prettierrc"), "{\n  \"trailingComma\": \"es5\"\n}\n").unwrap();
        fs::write(base.join("wtr.config.mjs"), "export default {};\n").unwrap();
        fs::write(
            base.join("postcss.config.js"),
            concat!(
                "module.exports = {\n",
                "  plugins: [\n",
                "    require('postcss-preset-env'),\n",
                "    require('tailwindcss'),\n",
                "    require('cssnano'),\n",
                "  ],\n",
                "};\n",
            ),
        )
        .unwrap();
        fs::write(
            base.join("snowpack.config.mjs"),
            concat!(
                "/** @type {import(\"snowpack\").SnowpackUserConfig } */\n",
                "export default {\n",
                "  mount: {\n",
                "    public: { url: '/', static: true },\n",
                "    src: { url: '/dist' },\n",
                "  },\n",
                "  plugins: [\n",
                "    /* plugins */\n",
                "  ],\n",
                "  optimize: {\n",
                "    /* optimize */\n",
                "  },\n",
                "};\n",
            ),
        )
        .unwrap();
        fs::write(
            base.join("licenses").join("mit"),
            "MIT License\n\nCopyright (c) YYYY Author\n",
        )
        .unwrap();

        let blank = assets.join("templates").join("blank");
        fs::create_dir_all(blank.join("src")).unwrap();
        fs::create_dir_all(blank.join("public")).unwrap();
        fs::write(blank.join("README.md"), "# New Project\n\nnpm run start\n").unwrap();
        fs::write(blank.join("src").join("index.js"), "console.log('hi');\n").unwrap();
        fs::write(blank.join("src").join("index.css"), "body {}\n").unwrap();
        fs::write(
            blank.join("public").join("index.html"),
            "<!DOCTYPE html>\n<title>New Project</title>\n",
        )
        .unwrap();

        AssetPaths::new(assets)
    }

    /// Lay out an extra named template next to the fixture's blank one,
    /// returning its directory for per-test additions.
    pub fn write_template(assets: &AssetPaths, name: &str) -> std::path::PathBuf {
        let dir = assets.template_dir(name);
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::create_dir_all(dir.join("public")).unwrap();
        fs::write(dir.join("README.md"), "# New Project\n\nnpm run start\n").unwrap();
        fs::write(
            dir.join("public").join("index.html"),
            "<!DOCTYPE html>\n<title>New Project</title>\n",
        )
        .unwrap();
        fs::write(dir.join("tsconfig.json"), "{}\n").unwrap();
        dir
    }
}
