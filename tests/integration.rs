use bettertree::fs::absolute_root;
use bettertree::output::{self, OutputFormat};
use bettertree::preferences::{InvocationArgs, Preferences, parse_name_list};
use bettertree::{
    OrderingPolicy, TraversalConfigBuilder, TreeError, format_size, generate_tree, render,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn root_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    let config = TraversalConfigBuilder::new().no_limit_depth().build();
    let tree = render(dir.path(), &config).unwrap();
    let expected = format!("{}\n└── src\n    └── main.rs\n", root_name(dir.path()));
    assert_eq!(tree, expected);
}
#[test]
fn line_count_matches_visible_entries() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a/b/c")).unwrap();
    fs::create_dir_all(root.join("d")).unwrap();
    fs::write(root.join("a/one.txt"), "1").unwrap();
    fs::write(root.join("a/b/two.txt"), "2").unwrap();
    fs::write(root.join("a/b/c/three.txt"), "3").unwrap();
    fs::write(root.join("four.txt"), "4").unwrap();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::create_dir_all(root.join("a/node_modules/pkg")).unwrap();
    let config = TraversalConfigBuilder::new()
        .no_limit_depth()
        .exclude("node_modules")
        .build();
    let tree = render(root, &config).unwrap();
    // a, b, c, d, one.txt, two.txt, three.txt, four.txt + root
    assert_eq!(tree.lines().filter(|l| !l.trim().is_empty()).count(), 9);
    assert!(!tree.contains(".git"));
    assert!(!tree.contains("node_modules"));
    assert!(!tree.contains("pkg"));
}
#[test]
fn hidden_entries_skipped_without_exclusions() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    fs::write(dir.path().join("visible.txt"), "x").unwrap();
    let tree = render(dir.path(), &TraversalConfigBuilder::new().build()).unwrap();
    assert_eq!(tree, format!("{}\n└── visible.txt\n", root_name(dir.path())));
}
#[test]
fn render_is_idempotent() {
    let dir = tempdir().unwrap();
    for name in ["x", "y", "z"] {
        fs::create_dir(dir.path().join(name)).unwrap();
        fs::write(dir.path().join(name).join("f.txt"), name).unwrap();
    }
    let config = TraversalConfigBuilder::new().show_size(true).build();
    let first = render(dir.path(), &config).unwrap();
    let second = render(dir.path(), &config).unwrap();
    assert_eq!(first, second);
}
#[test]
fn depth_one_lists_only_direct_children() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/leaf.txt"), "leaf").unwrap();
    let config = TraversalConfigBuilder::new().max_depth(1).build();
    let tree = render(dir.path(), &config).unwrap();
    assert!(tree.contains("└── sub\n"));
    assert!(!tree.contains("leaf.txt"));
}
#[test]
fn sizes_hidden_unless_requested() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), vec![0u8; 1536]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let plain = render(dir.path(), &TraversalConfigBuilder::new().build()).unwrap();
    assert!(!plain.contains('('));
    let config = TraversalConfigBuilder::new()
        .show_size(true)
        .ordering(OrderingPolicy::Sorted)
        .build();
    let sized = render(dir.path(), &config).unwrap();
    let root_size = fs::metadata(dir.path()).unwrap().len();
    let sub_size = fs::metadata(dir.path().join("sub")).unwrap().len();
    let expected = format!(
        "{} ({})\n├── data.bin (1.5 KB)\n└── sub ({})\n",
        root_name(dir.path()),
        format_size(root_size),
        format_size(sub_size),
    );
    assert_eq!(sized, expected);
}
#[test]
fn root_errors() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let config = TraversalConfigBuilder::new().build();
    assert!(matches!(
        render(&file, &config),
        Err(TreeError::NotADirectory(_))
    ));
    let missing = render(dir.path().join("missing"), &config).unwrap_err();
    assert!(missing.is_filesystem());
    assert!(missing.to_string().contains("missing"));
}
#[test]
fn generate_and_format_outputs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# hi").unwrap();
    let result = generate_tree(dir.path(), TraversalConfigBuilder::new().build()).unwrap();
    let text = output::format_result(&result, OutputFormat::Text, false).unwrap();
    assert_eq!(text, result.tree);
    let markdown = output::format_result(&result, OutputFormat::Markdown, false).unwrap();
    assert!(markdown.starts_with("# Directory Tree\n\n```\n"));
    assert!(markdown.ends_with("└── README.md\n```\n"));
    let json = output::format_result(&result, OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tree"], result.tree);
    assert_eq!(value["config"]["ordering"], "platform-default");
    let target = dir.path().join(format!("tree.{}", OutputFormat::Markdown.extension()));
    output::write_result_to_file(&result, OutputFormat::Markdown, &target, false).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), markdown);
}
#[test]
fn color_markers_are_stripped() {
    let colored = "root\n├── <#FF00aa>src</#>\n└── README.md\n";
    assert_eq!(
        output::strip_color_markers(colored),
        "root\n├── src\n└── README.md\n"
    );
    assert_eq!(output::strip_color_markers("<#12345>x"), "<#12345>x");
}
#[test]
fn preferences_defaults_and_merge() {
    let prefs = Preferences::load(None).unwrap();
    assert_eq!(prefs.effective_default_depth(), 2);
    let config = prefs.merge(&InvocationArgs::default());
    assert_eq!(config.max_depth, Some(2));
    assert!(config.show_size);
    assert_eq!(config.excluded, parse_name_list(".git, node_modules"));
    let args = InvocationArgs {
        depth: Some(-1),
        exclude: Some(" target ,dist,,".into()),
        show_size: Some("FALSE".into()),
    };
    let config = prefs.merge(&args);
    assert_eq!(config.max_depth, None);
    assert!(!config.show_size);
    assert_eq!(
        config.excluded,
        parse_name_list(".git,node_modules,target,dist")
    );
}
#[test]
fn preferences_from_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    fs::write(&path, "default_depth = 0\ndefault_excluded_dirs = \"build\"\n").unwrap();
    let prefs = Preferences::load(Some(path.as_path())).unwrap();
    assert_eq!(prefs.effective_default_depth(), 2);
    let config = prefs.merge(&InvocationArgs::default());
    assert_eq!(config.excluded, parse_name_list("build"));
    fs::write(&path, "default_depth = \"deep\"\n").unwrap();
    assert!(matches!(
        Preferences::load(Some(path.as_path())),
        Err(TreeError::Preferences { .. })
    ));
    assert!(Preferences::load(Some(dir.path().join("absent.toml").as_path()))
        .unwrap_err()
        .is_filesystem());
}
#[cfg(unix)]
#[test]
fn symlinked_root_keeps_its_own_name() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("target_dir")).unwrap();
    fs::write(dir.path().join("target_dir/inside.txt"), "x").unwrap();
    let alias = dir.path().join("alias");
    std::os::unix::fs::symlink(dir.path().join("target_dir"), &alias).unwrap();
    let root = absolute_root(&alias).unwrap();
    assert_eq!(root, alias);
    let tree = render(&root, &TraversalConfigBuilder::new().build()).unwrap();
    assert_eq!(tree, "alias\n└── inside.txt\n");
}
#[test]
fn relative_root_is_made_absolute() {
    let root = absolute_root(Path::new("some/dir")).unwrap();
    assert!(root.is_absolute());
    assert!(root.ends_with("some/dir"));
}
