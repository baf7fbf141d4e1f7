//! End-to-end pipeline tests with in-memory tools.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use fontcull::config::{Config, RenderStyle};
use fontcull::inventory::PackageRepository;
use fontcull::render::{FontLocator, Rasterizer};
use fontcull::runner::{run_preview, PreviewOutcome, Services, PREVIEW_INSTALLED_KEY};
use fontcull::shell::DocumentOpener;
use fontcull::ui::MockUI;
use fontcull::{FontcullError, Result};
use tempfile::TempDir;

/// A Homebrew stand-in. Installing a cask gives it one font file.
struct FakeBrew {
    installed: RefCell<Vec<String>>,
    available: Vec<String>,
    broken: HashSet<String>,
    install_calls: RefCell<Vec<String>>,
}

impl FakeBrew {
    fn new(installed: &[&str], available: &[&str]) -> Self {
        Self {
            installed: RefCell::new(installed.iter().map(|s| s.to_string()).collect()),
            available: available.iter().map(|s| s.to_string()).collect(),
            broken: HashSet::new(),
            install_calls: RefCell::new(Vec::new()),
        }
    }

    fn broken(mut self, names: &[&str]) -> Self {
        self.broken = names.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl PackageRepository for FakeBrew {
    fn installed(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(self.installed.borrow().clone())
    }

    fn available(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(self.available.clone())
    }

    fn install(&self, package: &str, log_file: &Path) -> Result<()> {
        self.install_calls.borrow_mut().push(package.to_string());
        if self.broken.contains(package) {
            return Err(FontcullError::InstallFailed {
                package: package.to_string(),
                log: log_file.to_path_buf(),
            });
        }
        self.installed.borrow_mut().push(package.to_string());
        Ok(())
    }
}

/// Every package directory holds the fonts listed for it, or one default font.
#[derive(Default)]
struct FakeFonts {
    overrides: HashMap<String, Vec<PathBuf>>,
}

impl FontLocator for FakeFonts {
    fn locate(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let package = dir.file_name().unwrap().to_string_lossy().into_owned();
        Ok(self
            .overrides
            .get(&package)
            .cloned()
            .unwrap_or_else(|| vec![PathBuf::from(format!("/fonts/{}-Regular.ttf", package))]))
    }
}

#[derive(Default)]
struct FakeMagick {
    samples: RefCell<Vec<PathBuf>>,
}

impl Rasterizer for FakeMagick {
    fn render_sample(&self, _font: &Path, _style: &RenderStyle, output: &Path) -> Result<()> {
        std::fs::write(output, b"sample")?;
        self.samples.borrow_mut().push(output.to_path_buf());
        Ok(())
    }

    fn montage(&self, _images: &[PathBuf], output: &Path) -> Result<()> {
        std::fs::write(output, b"montage")?;
        Ok(())
    }
}

#[derive(Default)]
struct FakeOpener {
    opened: RefCell<Vec<PathBuf>>,
}

impl DocumentOpener for FakeOpener {
    fn open(&self, path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

fn config(temp: &TempDir) -> Config {
    Config {
        brew_prefix: temp.path().join("homebrew"),
        output_dir: temp.path().join("previews"),
        log_file: temp.path().join("install-errors.log"),
        html_file: temp.path().join("preview.html"),
        ..Default::default()
    }
}

fn default_tools() -> (FakeFonts, FakeMagick, FakeOpener) {
    (FakeFonts::default(), FakeMagick::default(), FakeOpener::default())
}

fn run(
    config: &Config,
    brew: &FakeBrew,
    fonts: &FakeFonts,
    magick: &FakeMagick,
    opener: &FakeOpener,
    ui: &mut MockUI,
) -> Result<PreviewOutcome> {
    let services = Services {
        repo: brew,
        locator: fonts,
        rasterizer: magick,
        opener,
    };
    run_preview(config, &services, ui)
}

#[test]
fn installs_missing_and_previews_everything() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono", "font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { html, state } = outcome else {
        panic!("expected a gallery");
    };
    assert_eq!(state.inventory.missing, vec!["font-b-mono"]);
    assert_eq!(*brew.install_calls.borrow(), vec!["font-b-mono"]);
    assert_eq!(state.preview, vec!["font-a-mono", "font-b-mono"]);
    assert_eq!(state.montages.len(), 2);

    let page = std::fs::read_to_string(&html).unwrap();
    assert_eq!(page.matches("<section").count(), 2);
    assert!(page.contains("value=\"font-a-mono\""));
    assert!(page.contains("value=\"font-b-mono\""));
    assert_eq!(*opener.opened.borrow(), vec![config.html_file.clone()]);
}

#[test]
fn nothing_missing_previews_available_set() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono", "font-b-mono"], &["font-b-mono", "font-a-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { state, .. } = outcome else {
        panic!("expected a gallery");
    };
    assert!(brew.install_calls.borrow().is_empty());
    assert_eq!(state.preview, state.inventory.available);
}

#[test]
fn failed_install_is_left_out_of_gallery() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono", "font-b-mono", "font-c-mono"])
        .broken(&["font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { html, state } = outcome else {
        panic!("expected a gallery");
    };
    assert_eq!(state.preview, vec!["font-a-mono", "font-c-mono"]);
    assert_eq!(state.installs.failed, vec!["font-b-mono"]);
    let page = std::fs::read_to_string(html).unwrap();
    assert!(!page.contains("font-b-mono"));
    assert!(ui.has_warning("font-b-mono"));
}

#[test]
fn declining_fallback_exits_without_gallery() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono", "font-b-mono"])
        .broken(&["font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();
    ui.set_prompt_response(PREVIEW_INSTALLED_KEY, "no");

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    assert_eq!(outcome, PreviewOutcome::Declined);
    assert_eq!(ui.prompts_shown(), &[PREVIEW_INSTALLED_KEY]);
    assert!(!config.html_file.exists());
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn fallback_defaults_to_no() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&[], &["font-b-mono"]).broken(&["font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();
    assert_eq!(outcome, PreviewOutcome::Declined);
}

#[test]
fn accepting_fallback_previews_installed() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(
        &["font-z-mono-nerd", "font-a-mono"],
        &["font-a-mono", "font-b-mono"],
    )
    .broken(&["font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();
    ui.set_prompt_response(PREVIEW_INSTALLED_KEY, "yes");

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { state, .. } = outcome else {
        panic!("expected a gallery");
    };
    assert_eq!(state.preview, vec!["font-a-mono", "font-z-mono-nerd"]);
    assert_eq!(state.montages.len(), 2);
}

#[test]
fn package_without_fonts_does_not_fail_run() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono", "font-b-mono"], &["font-a-mono", "font-b-mono"]);
    let fonts = FakeFonts {
        overrides: HashMap::from([("font-a-mono".to_string(), Vec::new())]),
    };
    let (magick, opener) = (FakeMagick::default(), FakeOpener::default());
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { html, state } = outcome else {
        panic!("expected a gallery");
    };
    assert_eq!(state.montages.len(), 1);
    let page = std::fs::read_to_string(html).unwrap();
    assert_eq!(page.matches("<section").count(), 1);
}

#[test]
fn no_fonts_anywhere_is_nothing_to_preview() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono"]);
    let fonts = FakeFonts {
        overrides: HashMap::from([("font-a-mono".to_string(), Vec::new())]),
    };
    let (magick, opener) = (FakeMagick::default(), FakeOpener::default());
    let mut ui = MockUI::new();

    let err = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap_err();
    assert!(matches!(err, FontcullError::NothingToPreview));
    assert!(!config.html_file.exists());
}

#[test]
fn one_sample_per_font_file() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono"]);
    let fonts = FakeFonts {
        overrides: HashMap::from([(
            "font-a-mono".to_string(),
            vec![
                PathBuf::from("/fonts/A-Regular.ttf"),
                PathBuf::from("/fonts/A-Bold.ttf"),
                PathBuf::from("/fonts/A-Italic.otf"),
            ],
        )]),
    };
    let (magick, opener) = (FakeMagick::default(), FakeOpener::default());
    let mut ui = MockUI::new();

    run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    assert_eq!(magick.samples.borrow().len(), 3);
    assert!(config.montage_path("font-a-mono").exists());
    assert!(!config.staging_dir("font-a-mono").exists());
}

#[test]
fn skip_install_previews_installed_only() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        install_missing: false,
        open_gallery: false,
        ..config(&temp)
    };
    let brew = FakeBrew::new(&["font-a-mono"], &["font-a-mono", "font-b-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    let outcome = run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    let PreviewOutcome::Published { state, .. } = outcome else {
        panic!("expected a gallery");
    };
    assert!(brew.install_calls.borrow().is_empty());
    assert_eq!(state.preview, vec!["font-a-mono"]);
    assert!(opener.opened.borrow().is_empty());
    assert!(!config.log_file.exists());
}

#[test]
fn install_log_is_truncated_each_run() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    std::fs::write(&config.log_file, "from last time\n").unwrap();
    let brew = FakeBrew::new(&[], &["font-a-mono"]);
    let (fonts, magick, opener) = default_tools();
    let mut ui = MockUI::new();

    run(&config, &brew, &fonts, &magick, &opener, &mut ui).unwrap();

    assert_eq!(std::fs::read_to_string(&config.log_file).unwrap(), "");
}
