use crate::registry::TypeRegistry;
use crate::serde::{Diagnostic, DiagnosticKind, Diagnostics, JsonError};

// -----------------------------------------------------------------------------
// JsonConfig

/// Runtime options of a [`JsonSerializer`](crate::serde::JsonSerializer).
///
/// ```
/// use jm_json::serde::JsonConfig;
///
/// const QUIET: JsonConfig = JsonConfig::new().with_max_depth(8).with_log_diagnostics(false);
///
/// assert_eq!(QUIET.max_depth(), 8);
/// assert!(JsonConfig::default().log_diagnostics());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonConfig {
    max_depth: usize,
    log_diagnostics: bool,
}

impl JsonConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            log_diagnostics: true,
        }
    }

    /// Sets how many records deep the mapping may nest.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets whether diagnostics are also sent to the `log` facade.
    #[inline]
    pub const fn with_log_diagnostics(mut self, log_diagnostics: bool) -> Self {
        self.log_diagnostics = log_diagnostics;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub const fn log_diagnostics(&self) -> bool {
        self.log_diagnostics
    }
}

impl Default for JsonConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// SerdeContext

/// What every mapping call needs: the registry, the config and the current
/// record depth.
///
/// Nested records are mapped with a [`nested`](Self::nested) child context.
#[derive(Debug, Clone, Copy)]
pub struct SerdeContext<'a> {
    registry: &'a TypeRegistry,
    config: JsonConfig,
    depth: usize,
}

impl<'a> SerdeContext<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry, config: JsonConfig) -> Self {
        Self {
            registry,
            config,
            depth: 0,
        }
    }

    #[inline]
    pub const fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    #[inline]
    pub const fn config(&self) -> &JsonConfig {
        &self.config
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the context of a nested record.
    pub fn nested(&self) -> Result<Self, JsonError> {
        if self.depth >= self.config.max_depth {
            return Err(JsonError::DepthLimitExceeded(self.config.max_depth));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    /// Records a diagnostic, mirroring it to the log if configured.
    pub fn report(&self, diags: &mut Diagnostics, diagnostic: Diagnostic) {
        if self.config.log_diagnostics {
            match diagnostic.kind {
                DiagnosticKind::SkippedOptional { .. } => log::warn!("{diagnostic}"),
                DiagnosticKind::NullValue => log::info!("{diagnostic}"),
            }
        }
        diags.push(diagnostic);
    }
}
