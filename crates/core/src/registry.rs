//! Registry of widget kinds
//!
//! Each kind is registered once with its builder and its metadata bundle
//! (validations, derived/default/meta property maps, optional property
//! pane config). All artifacts of a kind live in one entry, so the
//! per-kind maps cannot drift apart.
//!
//! Reads never fail: a kind with no entry logs the gap and gets an empty
//! fallback. Writes are conservative: a second registration of a kind is
//! rejected and the first one kept.

use crate::annotate::annotate_pane_config;
use crate::builder::WidgetBuilder;
use crate::error::{MetadataMap, RegistryError};
use crate::validation::BASE_WIDGET_VALIDATION;
use log::{debug, error};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use widgetry_types::{
    DefaultPropertiesMap, DerivedPropertiesMap, MetaPropertiesMap, PropertyPaneConfig,
    ValidationMap, WidgetConfig, WidgetKind,
};

static EMPTY_DERIVED: DerivedPropertiesMap = BTreeMap::new();
static EMPTY_DEFAULTS: DefaultPropertiesMap = BTreeMap::new();
static EMPTY_META: MetaPropertiesMap = BTreeMap::new();

/// Everything a widget module supplies when registering its kind
pub struct WidgetRegistration {
    kind: WidgetKind,
    builder: Box<dyn WidgetBuilder>,
    validations: ValidationMap,
    derived_properties: DerivedPropertiesMap,
    default_properties: DefaultPropertiesMap,
    meta_properties: MetaPropertiesMap,
    pane_config: Option<Vec<PropertyPaneConfig>>,
}

impl WidgetRegistration {
    /// Start a registration with the baseline validation and empty maps
    pub fn new(kind: WidgetKind, builder: impl WidgetBuilder + 'static) -> Self {
        Self {
            kind,
            builder: Box::new(builder),
            validations: BASE_WIDGET_VALIDATION.clone(),
            derived_properties: DerivedPropertiesMap::new(),
            default_properties: DefaultPropertiesMap::new(),
            meta_properties: MetaPropertiesMap::new(),
            pane_config: None,
        }
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn with_validations(mut self, validations: ValidationMap) -> Self {
        self.validations = validations;
        self
    }

    pub fn with_derived_properties(mut self, derived: DerivedPropertiesMap) -> Self {
        self.derived_properties = derived;
        self
    }

    pub fn with_default_properties(mut self, defaults: DefaultPropertiesMap) -> Self {
        self.default_properties = defaults;
        self
    }

    pub fn with_meta_properties(mut self, meta: MetaPropertiesMap) -> Self {
        self.meta_properties = meta;
        self
    }

    pub fn with_pane_config(mut self, pane_config: Vec<PropertyPaneConfig>) -> Self {
        self.pane_config = Some(pane_config);
        self
    }
}

struct RegisteredWidget {
    builder: Box<dyn WidgetBuilder>,
    validations: ValidationMap,
    derived_properties: DerivedPropertiesMap,
    default_properties: DefaultPropertiesMap,
    meta_properties: MetaPropertiesMap,
    /// Annotated and frozen at registration
    pane_config: Option<Arc<[PropertyPaneConfig]>>,
}

/// Catalog of widget kinds
///
/// Constructed once at startup, populated by widget modules, then sealed
/// and shared read-only with the rendering layer.
pub struct WidgetRegistry {
    /// Kinds in registration order
    widget_types: Vec<WidgetKind>,
    widgets: HashMap<WidgetKind, RegisteredWidget>,
    widget_configs: HashMap<WidgetKind, Arc<WidgetConfig>>,
    sealed: bool,
}

impl WidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            widget_types: Vec::new(),
            widgets: HashMap::new(),
            widget_configs: HashMap::new(),
            sealed: false,
        }
    }

    /// Register a widget kind.
    ///
    /// A kind that is already present is rejected with
    /// [`RegistryError::DuplicateRegistration`]; the earlier registration
    /// is left untouched. The error is logged, so callers may drop it.
    pub fn register(&mut self, registration: WidgetRegistration) -> Result<(), RegistryError> {
        let WidgetRegistration {
            kind,
            builder,
            validations,
            derived_properties,
            default_properties,
            meta_properties,
            pane_config,
        } = registration;

        if self.sealed {
            let err = RegistryError::Sealed(kind);
            error!("{}", err);
            return Err(err);
        }
        if self.widgets.contains_key(&kind) {
            let err = RegistryError::DuplicateRegistration(kind);
            error!("{}", err);
            return Err(err);
        }

        let pane_config = pane_config.map(|config| Arc::from(annotate_pane_config(config)));

        debug!(
            "Registered widget {} (pane config: {})",
            kind,
            pane_config.is_some()
        );
        self.widgets.insert(
            kind.clone(),
            RegisteredWidget {
                builder,
                validations,
                derived_properties,
                default_properties,
                meta_properties,
                pane_config,
            },
        );
        self.widget_types.push(kind);
        Ok(())
    }

    /// Store the default configuration for a kind, replacing any earlier one
    pub fn store_widget_config(
        &mut self,
        kind: WidgetKind,
        config: WidgetConfig,
    ) -> Result<(), RegistryError> {
        if self.sealed {
            let err = RegistryError::Sealed(kind);
            error!("{}", err);
            return Err(err);
        }
        self.widget_configs.insert(kind, Arc::new(config));
        Ok(())
    }

    /// Reject all further writes
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Seal the registry and wrap it for shared read-only use
    pub fn into_shared(mut self) -> Arc<Self> {
        self.seal();
        Arc::new(self)
    }

    /// All registered kinds, in registration order
    pub fn widget_types(&self) -> &[WidgetKind] {
        &self.widget_types
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.widgets.contains_key(kind)
    }

    /// Resolve a raw tag to its registered kind
    pub fn widget_type(&self, tag: &str) -> Option<&WidgetKind> {
        self.widgets.get_key_value(tag).map(|(kind, _)| kind)
    }

    pub fn validation_map(&self, kind: &WidgetKind) -> &ValidationMap {
        match self.widgets.get(kind) {
            Some(widget) => &widget.validations,
            None => {
                log_missing(kind, MetadataMap::Validation);
                &*BASE_WIDGET_VALIDATION
            }
        }
    }

    pub fn derived_properties_map(&self, kind: &WidgetKind) -> &DerivedPropertiesMap {
        match self.widgets.get(kind) {
            Some(widget) => &widget.derived_properties,
            None => {
                log_missing(kind, MetadataMap::DerivedProperties);
                &EMPTY_DERIVED
            }
        }
    }

    pub fn default_properties_map(&self, kind: &WidgetKind) -> &DefaultPropertiesMap {
        match self.widgets.get(kind) {
            Some(widget) => &widget.default_properties,
            None => {
                log_missing(kind, MetadataMap::DefaultProperties);
                &EMPTY_DEFAULTS
            }
        }
    }

    pub fn meta_properties_map(&self, kind: &WidgetKind) -> &MetaPropertiesMap {
        match self.widgets.get(kind) {
            Some(widget) => &widget.meta_properties,
            None => {
                log_missing(kind, MetadataMap::MetaProperties);
                &EMPTY_META
            }
        }
    }

    /// Annotated property pane config, empty if the kind registered none
    pub fn pane_config(&self, kind: &WidgetKind) -> &[PropertyPaneConfig] {
        self.shared_pane_config(kind).map(|c| &**c).unwrap_or(&[])
    }

    /// Annotated property pane config as a shared handle
    pub fn shared_pane_config(&self, kind: &WidgetKind) -> Option<&Arc<[PropertyPaneConfig]>> {
        let config = self
            .widgets
            .get(kind)
            .and_then(|widget| widget.pane_config.as_ref());
        if config.is_none() {
            log_missing(kind, MetadataMap::PaneConfig);
        }
        config
    }

    /// Default configuration stored for a kind
    pub fn widget_config(&self, kind: &WidgetKind) -> Option<&Arc<WidgetConfig>> {
        self.widget_configs.get(kind)
    }

    /// All stored default configurations
    pub fn widget_configs(&self) -> impl Iterator<Item = (&WidgetKind, &Arc<WidgetConfig>)> {
        self.widget_configs.iter()
    }

    pub(crate) fn builder(&self, kind: &WidgetKind) -> Option<&dyn WidgetBuilder> {
        self.widgets.get(kind).map(|widget| widget.builder.as_ref())
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("widget_types", &self.widget_types)
            .field("widget_configs", &self.widget_configs.len())
            .field("sealed", &self.sealed)
            .finish()
    }
}

fn log_missing(kind: &WidgetKind, map: MetadataMap) {
    error!(
        "{}",
        RegistryError::MissingMetadata {
            kind: kind.clone(),
            map,
        }
    );
}
