//! Rolldown plugin implementation for import aliases
//!
//! This module provides a Rolldown plugin that rewrites import specifiers
//! according to a static alias table. It uses the `resolve_id` hook to answer
//! for aliased imports and returns `None` for everything else, so Rolldown's
//! default resolution still handles regular imports.
//!
//! ## Architecture
//!
//! ```text
//! import edge → resolve_id() → AliasResolver::resolve → Some(id) → Rolldown loads id
//!                                                     → None     → default resolution
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fob_plugin_alias::FobAliasPlugin;
//! use fob_alias::AliasOptions;
//! use std::sync::Arc;
//!
//! let options = AliasOptions::new()
//!     .alias("react", "preact/compat")
//!     .alias("@utils", "./src/utils");
//!
//! // Use with your Rolldown bundler configuration
//! let plugin = Arc::new(FobAliasPlugin::new(options));
//! ```

use fob_alias::{AliasError, AliasOptions, AliasResolver};
use rolldown_plugin::{
    HookResolveIdArgs, HookResolveIdOutput, HookResolveIdReturn, Plugin, PluginContext,
};
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub use fob_alias;

/// Rolldown plugin that redirects aliased imports
///
/// The alias table is built once at construction and shared between hook
/// invocations, so cloning the plugin is cheap.
#[derive(Debug, Clone)]
pub struct FobAliasPlugin {
    resolver: Arc<AliasResolver>,
}

impl FobAliasPlugin {
    /// Create a new FobAliasPlugin that probes the real filesystem for
    /// extension inference
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_alias::FobAliasPlugin;
    /// use fob_alias::AliasOptions;
    ///
    /// let plugin = FobAliasPlugin::new(AliasOptions::new().alias("foo", "bar"));
    /// ```
    pub fn new(options: AliasOptions) -> Self {
        Self::with_resolver(Arc::new(AliasResolver::new(options)))
    }

    /// Create a plugin around an existing resolver (e.g. one backed by a
    /// virtual filesystem)
    pub fn with_resolver(resolver: Arc<AliasResolver>) -> Self {
        Self { resolver }
    }

    /// Create a plugin from dynamically shaped options
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_alias::FobAliasPlugin;
    /// use serde_json::json;
    ///
    /// let plugin = FobAliasPlugin::from_value(json!({
    ///     "ember": "./folder/hipster",
    ///     "resolve": [".js", ".jsx"]
    /// }))
    /// .unwrap();
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, AliasError> {
        Ok(Self::new(AliasOptions::from_value(value)?))
    }

    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    /// Compute the hook output for one import edge
    ///
    /// # Returns
    ///
    /// - `Some(output)` - The specifier is aliased, `output.id` replaces it
    /// - `None` - No alias applies, let Rolldown resolve it
    pub fn resolve_output(
        &self,
        specifier: &str,
        importer: Option<&str>,
    ) -> Option<HookResolveIdOutput> {
        let resolved = match importer {
            Some(importer) => self.resolver.resolve(specifier, Path::new(importer)),
            None => self.resolver.resolve_entry(specifier),
        }?;

        let id = resolved.into_string();
        debug!(
            "[fob-alias] Aliased '{}' -> '{}' (importer: {})",
            specifier,
            id,
            importer.unwrap_or("<entry>")
        );

        Some(HookResolveIdOutput {
            id: id.into(),
            ..Default::default()
        })
    }
}

impl Plugin for FobAliasPlugin {
    /// Returns the plugin name for debugging and logging
    fn name(&self) -> Cow<'static, str> {
        "fob-alias".into()
    }

    /// Declare which hooks this plugin uses
    ///
    /// This allows Rolldown to optimize by skipping unused hooks.
    fn register_hook_usage(&self) -> rolldown_plugin::HookUsage {
        use rolldown_plugin::HookUsage;
        // We only rewrite specifiers
        HookUsage::ResolveId
    }

    /// Resolve ID hook - rewrites aliased specifiers
    ///
    /// # Returns
    ///
    /// - `Ok(Some(output))` - The import was aliased
    /// - `Ok(None)` - Not aliased, let Rolldown handle it
    fn resolve_id(
        &self,
        _ctx: &PluginContext,
        args: &HookResolveIdArgs<'_>,
    ) -> impl std::future::Future<Output = HookResolveIdReturn> + Send {
        // Resolution is synchronous; compute before entering the future
        let specifier = args.specifier.to_string();
        let importer = args.importer.map(|s| s.to_string());
        let output = self.resolve_output(&specifier, importer.as_deref());

        async move { Ok(output) }
    }
}
