#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use compose_autolayout::{
    Bounds, BoundsSettable, ContainerStyle, Drawable, ItemStyle, Measurable, Size,
};
use image::RgbaImage;
use serde::Deserialize;

pub type Shared<T> = Rc<RefCell<T>>;

/// Install the test logger once per binary; `RUST_LOG` controls verbosity.
pub fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

/// Observable state of a [`Recorder`].
#[derive(Debug, Default)]
pub struct RecorderState {
    pub bounds: Option<Bounds>,
    pub paints: usize,
    pub measures: usize,
}

/// Measurable mock child that records the geometry it receives.
pub struct Recorder {
    label: String,
    size: Size,
    state: Shared<RecorderState>,
    paint_log: Option<Shared<Vec<String>>>,
}

impl Recorder {
    pub fn new(label: &str, width: i32, height: i32) -> (Self, Shared<RecorderState>) {
        let state = Rc::new(RefCell::new(RecorderState::default()));
        let recorder = Self {
            label: label.to_owned(),
            size: Size::new(width, height),
            state: Rc::clone(&state),
            paint_log: None,
        };
        (recorder, state)
    }

    /// Append this recorder's label to `log` every time it paints.
    #[must_use]
    pub fn logging_to(mut self, log: &Shared<Vec<String>>) -> Self {
        self.paint_log = Some(Rc::clone(log));
        self
    }
}

impl Drawable for Recorder {
    fn paint(&mut self, _background: &RgbaImage, _target: &mut RgbaImage) {
        self.state.borrow_mut().paints += 1;
        if let Some(log) = &self.paint_log {
            log.borrow_mut().push(self.label.clone());
        }
    }

    fn measurable(&mut self) -> Option<&mut dyn Measurable> {
        Some(self)
    }

    fn bounds_settable(&mut self) -> Option<&mut dyn BoundsSettable> {
        Some(self)
    }
}

impl Measurable for Recorder {
    fn intrinsic_size(&mut self) -> Size {
        self.state.borrow_mut().measures += 1;
        self.size
    }
}

impl BoundsSettable for Recorder {
    fn set_bounds(&mut self, bounds: Bounds) {
        self.state.borrow_mut().bounds = Some(bounds);
    }
}

/// Blank 800x600 canvas pair: `(background, target)`.
pub fn canvases() -> (RgbaImage, RgbaImage) {
    (RgbaImage::new(800, 600), RgbaImage::new(800, 600))
}

/// Expected geometry; unset fields are not checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Expect {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Expect {
    /// # Panics
    /// Panics if any expected field differs from `bounds`.
    pub fn check(&self, bounds: Bounds, what: &str) {
        if let Some(x) = self.x {
            assert_eq!(bounds.x, x, "[{what}] x mismatch");
        }
        if let Some(y) = self.y {
            assert_eq!(bounds.y, y, "[{what}] y mismatch");
        }
        if let Some(width) = self.width {
            assert_eq!(bounds.width, width, "[{what}] width mismatch");
        }
        if let Some(height) = self.height {
            assert_eq!(bounds.height, height, "[{what}] height mismatch");
        }
    }

    /// # Panics
    /// Panics if the expected outer width or height differs from `size`.
    pub fn check_size(&self, size: Size, what: &str) {
        if let Some(width) = self.width {
            assert_eq!(size.width, width, "[{what}] outer width mismatch");
        }
        if let Some(height) = self.height {
            assert_eq!(size.height, height, "[{what}] outer height mismatch");
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FixtureItem {
    pub name: String,
    pub size: (i32, i32),
    #[serde(default)]
    pub style: ItemStyle,
    #[serde(default)]
    pub expect: Expect,
}

/// One layout case described in JSON.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub origin: (i32, i32),
    #[serde(default)]
    pub container: ContainerStyle,
    pub items: Vec<FixtureItem>,
    #[serde(default)]
    pub expect_outer: Expect,
}

/// Returns the directory containing JSON layout fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// All `.json` fixtures, sorted by path.
///
/// # Errors
/// Returns an error if the fixtures directory cannot be read.
pub fn fixture_files() -> Result<Vec<PathBuf>> {
    let dir = fixtures_dir();
    let entries =
        fs::read_dir(&dir).with_context(|| format!("reading fixtures dir {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one fixture file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid fixture.
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing fixture {}", path.display()))
}
