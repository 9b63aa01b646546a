//! Repository scanner contracts
//!
//! Scanners map a checked out repository to the components it exports. The
//! directory walking itself is left to implementations; this module fixes
//! how scanners compose.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use uisim_core::{Error, UiFramework};
use uisim_corpus::{ComponentSourceRef, RepoId};

pub trait RepoScanner: Send + Sync {
    fn scan_repo(&self, repo: &RepoId, root: &Path) -> Vec<ComponentSourceRef>;
}

/// Scanner bound to one framework
pub trait FrameworkRepoScanner: RepoScanner {
    fn framework(&self) -> UiFramework;
}

/// An external scan attempt, e.g. an AST tool run out of process
///
/// `None` means the attempt did not produce a usable answer.
pub trait ScanEngine: Send + Sync {
    fn try_scan(&self, repo: &RepoId, root: &Path) -> Option<Vec<ComponentSourceRef>>;
}

/// How components are discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMode {
    /// Built-in scanners only
    #[default]
    Simple,
    /// External engine only
    Ast,
    /// External engine, built-in scanner when it gives no answer
    Hybrid,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Simple => "simple",
            ExtractionMode::Ast => "ast",
            ExtractionMode::Hybrid => "hybrid",
        }
    }

    pub fn uses_engine(&self) -> bool {
        !matches!(self, ExtractionMode::Simple)
    }

    pub fn allows_fallback(&self) -> bool {
        !matches!(self, ExtractionMode::Ast)
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(ExtractionMode::Simple),
            "ast" => Ok(ExtractionMode::Ast),
            "hybrid" => Ok(ExtractionMode::Hybrid),
            _ => Err(Error::InvalidConfig(format!(
                "Unsupported mode '{}'. Expected one of: simple, ast, hybrid",
                s
            ))),
        }
    }
}

/// Engine attempt first, then the fallback scanner
///
/// The fallback runs when there is no engine or the engine returns `None`,
/// unless fallback has been disabled.
pub struct FallbackScanner<E, S> {
    engine: Option<E>,
    fallback: S,
    allow_fallback: bool,
}

impl<E: ScanEngine, S: RepoScanner> FallbackScanner<E, S> {
    pub fn new(engine: Option<E>, fallback: S) -> Self {
        Self {
            engine,
            fallback,
            allow_fallback: true,
        }
    }

    /// Wire engine and fallback the way `mode` asks for
    pub fn for_mode(mode: ExtractionMode, engine: E, fallback: S) -> Self {
        let engine = mode.uses_engine().then_some(engine);
        Self {
            engine,
            fallback,
            allow_fallback: mode.allows_fallback(),
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, allow_fallback: bool) -> Self {
        self.allow_fallback = allow_fallback;
        self
    }
}

impl<E: ScanEngine, S: RepoScanner> RepoScanner for FallbackScanner<E, S> {
    fn scan_repo(&self, repo: &RepoId, root: &Path) -> Vec<ComponentSourceRef> {
        if let Some(found) = self.engine.as_ref().and_then(|e| e.try_scan(repo, root)) {
            debug!(repo = %repo, components = found.len(), "Engine scan succeeded");
            return found;
        }
        if !self.allow_fallback {
            debug!(repo = %repo, "Engine gave no result and fallback is disabled");
            return Vec::new();
        }
        self.fallback.scan_repo(repo, root)
    }
}

impl<E: ScanEngine, S: FrameworkRepoScanner> FrameworkRepoScanner for FallbackScanner<E, S> {
    fn framework(&self) -> UiFramework {
        self.fallback.framework()
    }
}

/// Engine that never answers
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEngine;

impl ScanEngine for NoopEngine {
    fn try_scan(&self, _repo: &RepoId, _root: &Path) -> Option<Vec<ComponentSourceRef>> {
        None
    }
}

/// Delegates to the first scanner registered for a framework
#[derive(Default)]
pub struct CompositeRepoScanner {
    scanners: Vec<Box<dyn FrameworkRepoScanner>>,
}

impl CompositeRepoScanner {
    pub fn new(scanners: Vec<Box<dyn FrameworkRepoScanner>>) -> Self {
        Self { scanners }
    }

    pub fn push(&mut self, scanner: impl FrameworkRepoScanner + 'static) {
        self.scanners.push(Box::new(scanner));
    }

    /// Frameworks with a registered scanner, in registration order
    pub fn frameworks(&self) -> Vec<UiFramework> {
        self.scanners.iter().map(|s| s.framework()).collect()
    }

    /// Scan with the scanner for `framework`; `Unknown` or an unregistered
    /// framework yields no components
    pub fn scan_as(&self, framework: UiFramework, repo: &RepoId, root: &Path) -> Vec<ComponentSourceRef> {
        if framework == UiFramework::Unknown {
            debug!(repo = %repo, "Framework unknown, nothing to scan");
            return Vec::new();
        }
        match self.scanners.iter().find(|s| s.framework() == framework) {
            Some(scanner) => scanner.scan_repo(repo, root),
            None => {
                debug!(repo = %repo, framework = %framework, "No scanner registered");
                Vec::new()
            }
        }
    }
}
