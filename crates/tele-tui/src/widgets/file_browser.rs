//! Directory browser used to pick a script file.
//!
//! `FileBrowser` is the capability the source controller depends on; it
//! only needs `update` and the outcome queries. `DirBrowser` lists one
//! directory level at a time using `ignore`'s walker.

use std::cmp::Ordering;
use std::mem;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ignore::WalkBuilder;

use crate::common::keys;

/// Result of feeding a key to a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    /// Navigation or nothing; the browser handled it internally.
    Idle,
    /// A selectable file was chosen.
    Selected(PathBuf),
    /// The user tried to choose an entry that is not selectable.
    Disabled(PathBuf),
}

impl BrowserOutcome {
    pub fn did_select_file(&self) -> Option<&Path> {
        match self {
            Self::Selected(path) => Some(path),
            _ => None,
        }
    }

    pub fn did_select_disabled_file(&self) -> Option<&Path> {
        match self {
            Self::Disabled(path) => Some(path),
            _ => None,
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// False for files the browser will refuse to select.
    pub enabled: bool,
}

/// Browser configuration.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    pub start_dir: PathBuf,
    /// Extensions without the leading dot; empty allows every file.
    pub allowed_extensions: Vec<String>,
    pub show_hidden: bool,
    /// Number of visible rows.
    pub height: usize,
    /// Enter on a directory opens it; when false directories only open
    /// with `l`/right and Enter reports them as disabled.
    pub dir_allowed: bool,
    pub file_allowed: bool,
}

impl BrowserOptions {
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            start_dir,
            allowed_extensions: Vec::new(),
            show_hidden: false,
            height: 10,
            dir_allowed: true,
            file_allowed: true,
        }
    }
}

/// Capability consumed by the source controller for file selection.
pub trait FileBrowser {
    fn update(&mut self, key: KeyEvent) -> BrowserOutcome;

    fn current_dir(&self) -> &Path;

    fn entries(&self) -> &[BrowserEntry];

    /// Index of the highlighted entry.
    fn selected(&self) -> usize;

    /// Index of the first visible entry.
    fn offset(&self) -> usize;

    fn height(&self) -> usize;

    fn set_height(&mut self, height: usize);

    /// Listing problem to show instead of entries, if any.
    fn status(&self) -> Option<&str>;
}

/// Filesystem-backed browser.
#[derive(Debug)]
pub struct DirBrowser {
    options: BrowserOptions,
    current_dir: PathBuf,
    entries: Vec<BrowserEntry>,
    selected: usize,
    offset: usize,
    /// Cursor positions of parent directories, restored when going back.
    stack: Vec<(usize, usize)>,
    status: Option<String>,
}

impl DirBrowser {
    pub fn open(options: BrowserOptions) -> Self {
        let current_dir = options.start_dir.clone();
        let mut browser = Self {
            options,
            current_dir,
            entries: Vec::new(),
            selected: 0,
            offset: 0,
            stack: Vec::new(),
            status: None,
        };
        browser.reload();
        browser
    }

    fn reload(&mut self) {
        match list_dir(&self.current_dir, &self.options) {
            Ok(entries) => {
                tracing::debug!(
                    dir = %self.current_dir.display(),
                    count = entries.len(),
                    "listed directory"
                );
                self.entries = entries;
                self.status = None;
            }
            Err(err) => {
                tracing::warn!(dir = %self.current_dir.display(), %err, "cannot list directory");
                self.entries.clear();
                self.status = Some(format!("Cannot read {}: {err}", self.current_dir.display()));
            }
        }
    }

    fn enter_dir(&mut self, path: PathBuf) {
        self.stack.push((self.selected, self.offset));
        self.current_dir = path;
        self.selected = 0;
        self.offset = 0;
        self.reload();
    }

    fn go_parent(&mut self) {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let child = mem::replace(&mut self.current_dir, parent);
        self.reload();

        if let Some((selected, offset)) = self.stack.pop() {
            self.selected = selected;
            self.offset = offset;
        } else {
            // Went above the start directory; highlight where we came from.
            self.selected = self
                .entries
                .iter()
                .position(|e| e.path == child)
                .unwrap_or(0);
            self.offset = 0;
        }
        self.clamp();
    }

    fn move_to(&mut self, index: usize) {
        self.selected = index;
        self.clamp();
    }

    fn clamp(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        let height = self.options.height.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }

    fn choose(&mut self, via_enter: bool) -> BrowserOutcome {
        let Some(entry) = self.entries.get(self.selected).cloned() else {
            return BrowserOutcome::Idle;
        };

        if entry.is_dir {
            if via_enter && !self.options.dir_allowed {
                return BrowserOutcome::Disabled(entry.path);
            }
            self.enter_dir(entry.path);
            return BrowserOutcome::Idle;
        }

        if !via_enter {
            return BrowserOutcome::Idle;
        }
        if entry.enabled {
            BrowserOutcome::Selected(entry.path)
        } else {
            BrowserOutcome::Disabled(entry.path)
        }
    }
}

impl FileBrowser for DirBrowser {
    fn update(&mut self, key: KeyEvent) -> BrowserOutcome {
        if matches!(key.kind, KeyEventKind::Release) {
            return BrowserOutcome::Idle;
        }

        let page = self.options.height.max(1);
        if keys::is_up(&key) {
            self.move_to(self.selected.saturating_sub(1));
        } else if keys::is_down(&key) {
            self.move_to(self.selected + 1);
        } else if key.code == KeyCode::Home || keys::is_char(&key, 'g') {
            self.move_to(0);
        } else if key.code == KeyCode::End || keys::is_char(&key, 'G') {
            self.move_to(self.entries.len().saturating_sub(1));
        } else if key.code == KeyCode::PageUp {
            self.move_to(self.selected.saturating_sub(page));
        } else if key.code == KeyCode::PageDown {
            self.move_to(self.selected + page);
        } else if key.code == KeyCode::Enter {
            return self.choose(true);
        } else if key.code == KeyCode::Right || keys::is_char(&key, 'l') {
            return self.choose(false);
        } else if matches!(key.code, KeyCode::Left | KeyCode::Backspace)
            || keys::is_char(&key, 'h')
        {
            self.go_parent();
        }

        BrowserOutcome::Idle
    }

    fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn height(&self) -> usize {
        self.options.height
    }

    fn set_height(&mut self, height: usize) {
        self.options.height = height;
        self.clamp();
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Lists the direct children of `dir`, directories first, then by name.
pub fn list_dir(dir: &Path, options: &BrowserOptions) -> Result<Vec<BrowserEntry>, ignore::Error> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(!options.show_hidden)
        .max_depth(Some(1))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = result?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path().to_path_buf();
        let is_dir = if entry.path_is_symlink() {
            path.is_dir()
        } else {
            entry.file_type().is_some_and(|ft| ft.is_dir())
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let enabled = is_dir || (options.file_allowed && extension_allowed(&path, options));

        entries.push(BrowserEntry {
            name,
            path,
            is_dir,
            enabled,
        });
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

fn extension_allowed(path: &Path, options: &BrowserOptions) -> bool {
    if options.allowed_extensions.is_empty() {
        return true;
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    options
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::KeyModifiers;
    use tempfile::{TempDir, tempdir};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixture() -> TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts").join("intro.md"), "intro").unwrap();
        fs::write(dir.path().join("speech.txt"), "speech").unwrap();
        fs::write(dir.path().join("photo.png"), "png").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
        dir
    }

    fn options(dir: &Path) -> BrowserOptions {
        BrowserOptions {
            allowed_extensions: vec!["txt".to_string(), ".md".to_string()],
            ..BrowserOptions::new(dir.to_path_buf())
        }
    }

    fn names(browser: &DirBrowser) -> Vec<&str> {
        browser.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_sorts_dirs_first_and_hides_dotfiles() {
        let dir = fixture();
        let browser = DirBrowser::open(options(dir.path()));
        assert_eq!(names(&browser), vec!["drafts", "photo.png", "speech.txt"]);
        assert!(browser.status().is_none());
    }

    #[test]
    fn test_show_hidden_lists_dotfiles() {
        let dir = fixture();
        let browser = DirBrowser::open(BrowserOptions {
            show_hidden: true,
            ..options(dir.path())
        });
        assert!(names(&browser).contains(&".hidden.txt"));
    }

    #[test]
    fn test_enter_on_allowed_file_selects_it() {
        let dir = fixture();
        let mut browser = DirBrowser::open(options(dir.path()));
        browser.update(key(KeyCode::End));
        let outcome = browser.update(key(KeyCode::Enter));
        assert_eq!(
            outcome.did_select_file(),
            Some(dir.path().join("speech.txt").as_path())
        );
    }

    #[test]
    fn test_enter_on_filtered_file_is_disabled() {
        let dir = fixture();
        let mut browser = DirBrowser::open(options(dir.path()));
        browser.update(key(KeyCode::Down));
        let outcome = browser.update(key(KeyCode::Enter));
        assert_eq!(
            outcome.did_select_disabled_file(),
            Some(dir.path().join("photo.png").as_path())
        );
        assert!(outcome.did_select_file().is_none());
    }

    #[test]
    fn test_enter_on_directory_navigates_and_back_restores_cursor() {
        let dir = fixture();
        let mut browser = DirBrowser::open(options(dir.path()));

        let outcome = browser.update(key(KeyCode::Enter));
        assert_eq!(outcome, BrowserOutcome::Idle);
        assert_eq!(browser.current_dir(), dir.path().join("drafts"));
        assert_eq!(names(&browser), vec!["intro.md"]);

        browser.update(key(KeyCode::Backspace));
        assert_eq!(browser.current_dir(), dir.path());
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn test_dir_not_allowed_reports_disabled_on_enter() {
        let dir = fixture();
        let mut browser = DirBrowser::open(BrowserOptions {
            dir_allowed: false,
            ..options(dir.path())
        });
        let outcome = browser.update(key(KeyCode::Enter));
        assert!(outcome.did_select_disabled_file().is_some());

        // `l` still opens it.
        browser.update(key(KeyCode::Char('l')));
        assert_eq!(browser.current_dir(), dir.path().join("drafts"));
    }

    #[test]
    fn test_file_not_allowed_disables_every_file() {
        let dir = fixture();
        let browser = DirBrowser::open(BrowserOptions {
            file_allowed: false,
            ..options(dir.path())
        });
        assert!(
            browser
                .entries()
                .iter()
                .filter(|e| !e.is_dir)
                .all(|e| !e.enabled)
        );
    }

    #[test]
    fn test_parent_above_start_highlights_previous_dir() {
        let dir = fixture();
        let mut browser = DirBrowser::open(options(&dir.path().join("drafts")));
        browser.update(key(KeyCode::Char('h')));
        assert_eq!(browser.current_dir(), dir.path());
        let selected = &browser.entries()[browser.selected()];
        assert_eq!(selected.name, "drafts");
    }

    #[test]
    fn test_cursor_scrolls_window() {
        let dir = tempdir().unwrap();
        for i in 0..10 {
            fs::write(dir.path().join(format!("file{i}.txt")), "x").unwrap();
        }
        let mut browser = DirBrowser::open(BrowserOptions {
            height: 3,
            ..options(dir.path())
        });
        for _ in 0..5 {
            browser.update(key(KeyCode::Char('j')));
        }
        assert_eq!(browser.selected(), 5);
        assert_eq!(browser.offset(), 3);

        browser.update(key(KeyCode::Char('g')));
        assert_eq!(browser.offset(), 0);

        browser.update(key(KeyCode::PageDown));
        assert_eq!(browser.selected(), 3);
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        browser.update(key(KeyCode::Down));
        assert_eq!(browser.selected(), 9);
    }

    #[test]
    fn test_unreadable_dir_sets_status() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let browser = DirBrowser::open(options(&missing));
        assert!(browser.entries().is_empty());
        assert!(browser.status().is_some());
    }
}
