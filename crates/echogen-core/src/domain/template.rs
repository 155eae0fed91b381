//! The fixed feature-slice template catalog.
//!
//! A feature slice is seven Go files: one per architectural layer plus a
//! model file named after the feature itself. The catalog is a pure function
//! of the [`FeatureName`]; nothing is loaded, cached, or registered at runtime.
//!
//! ```text
//! order/
//! ├── datasource.go   DataSource  (database access)
//! ├── repository.go   Repository  (wraps DataSource)
//! ├── usecase.go      UseCase     (wraps Repository)
//! ├── handler.go      Handler     (wraps UseCase)
//! ├── router.go       Router      (binds Handler to echo)
//! ├── provider.go     wire.ProviderSet
//! └── order.go        type Order struct
//! ```

use std::fmt;
use std::slice;

use serde::Serialize;

use super::{FeatureName, RenderContext};

/// File extension of every generated file.
pub const EXTENSION: &str = "go";

/// One architectural layer of a feature slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    DataSource,
    Handler,
    Provider,
    Repository,
    Router,
    UseCase,
    Model,
}

impl Layer {
    /// Every layer, in catalog order.
    pub const ALL: [Layer; 7] = [
        Layer::DataSource,
        Layer::Handler,
        Layer::Provider,
        Layer::Repository,
        Layer::Router,
        Layer::UseCase,
        Layer::Model,
    ];

    /// File stem for this layer. The model layer has no fixed stem: its file
    /// is named after the feature.
    pub const fn fixed_stem(self) -> Option<&'static str> {
        match self {
            Self::DataSource => Some("datasource"),
            Self::Handler => Some("handler"),
            Self::Provider => Some("provider"),
            Self::Repository => Some("repository"),
            Self::Router => Some("router"),
            Self::UseCase => Some("usecase"),
            Self::Model => None,
        }
    }

    /// Output filename for this layer within `feature`'s slice.
    pub fn filename(self, feature: &FeatureName) -> String {
        let stem = self.fixed_stem().unwrap_or(feature.as_str());
        format!("{stem}.{EXTENSION}")
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataSource => "datasource",
            Self::Handler => "handler",
            Self::Provider => "provider",
            Self::Repository => "repository",
            Self::Router => "router",
            Self::UseCase => "usecase",
            Self::Model => "model",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::DataSource => DATASOURCE,
            Self::Handler => HANDLER,
            Self::Provider => PROVIDER,
            Self::Repository => REPOSITORY,
            Self::Router => ROUTER,
            Self::UseCase => USECASE,
            Self::Model => MODEL,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub layer: Layer,
    pub filename: String,
    pub content: String,
}

/// The complete, rendered template set for one feature.
///
/// Always holds exactly one file per [`Layer`], in [`Layer::ALL`] order.
/// Callers must not depend on that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    files: Vec<TemplateFile>,
}

impl TemplateSet {
    /// Render every layer for `feature`.
    pub fn for_feature(feature: &FeatureName) -> Self {
        let ctx = RenderContext::new(feature);
        let files = Layer::ALL
            .iter()
            .map(|&layer| TemplateFile {
                layer,
                filename: layer.filename(feature),
                content: ctx.render(layer.source()),
            })
            .collect();

        Self { files }
    }

    /// Look up a file by its output filename.
    pub fn get(&self, filename: &str) -> Option<&TemplateFile> {
        self.files.iter().find(|f| f.filename == filename)
    }

    pub fn by_layer(&self, layer: Layer) -> &TemplateFile {
        // files are built in Layer::ALL order, which is declaration order
        &self.files[layer as usize]
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.filename.as_str())
    }

    pub fn iter(&self) -> slice::Iter<'_, TemplateFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a TemplateFile;
    type IntoIter = slice::Iter<'a, TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

// ============================================================================
// Sources
// ============================================================================

const DATASOURCE: &str = r#"package {{PACKAGE}}

type DataSource interface {
}

type dataSource struct {
	DbSource database.DataSource
}

func NewDataSource(dbSource database.DataSource) DataSource {
	return &dataSource{
		DbSource: dbSource,
	}
}"#;

const HANDLER: &str = r#"package {{PACKAGE}}

type Handler interface {
}

type handler struct {
	Uc UseCase
}

func NewHandler(uc UseCase) Handler {
	return &handler{
		Uc: uc,
	}
}"#;

const PROVIDER: &str = r#"package {{PACKAGE}}

import "github.com/google/wire"

var ProviderSet = wire.NewSet(
	NewDataSource,
	NewRepository,
	NewUseCase,
	NewHandler,
	NewRouter,
)"#;

const REPOSITORY: &str = r#"package {{PACKAGE}}

type Repository interface {
}

type repository struct {
	Ds DataSource
}

func NewRepository(ds DataSource) Repository {
	return &repository{
		Ds: ds,
	}
}"#;

const ROUTER: &str = r#"package {{PACKAGE}}

import "github.com/labstack/echo"

type Router interface {
	Initial(e *echo.Echo)
}

type router struct {
	Handle Handler
}

func (r *router) Initial(e *echo.Echo) {

}

func NewRouter(handle Handler) Router {
	return &router{Handle: handle}
}"#;

const USECASE: &str = r#"package {{PACKAGE}}

type UseCase interface {
}

type useCase struct {
	Repo Repository
}

func NewUseCase(repo Repository) UseCase {
	return &useCase{
		Repo: repo,
	}
}"#;

const MODEL: &str = r#"package {{PACKAGE}}

type {{MODEL_NAME}} struct {

}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str) -> TemplateSet {
        TemplateSet::for_feature(&FeatureName::parse(name).unwrap())
    }

    #[test]
    fn always_seven_files() {
        for name in ["order", "user", "Payment", "x"] {
            assert_eq!(set(name).len(), 7, "for {name}");
        }
    }

    #[test]
    fn filenames_for_order() {
        let set = set("order");
        let mut names: Vec<_> = set.filenames().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "datasource.go",
                "handler.go",
                "order.go",
                "provider.go",
                "repository.go",
                "router.go",
                "usecase.go",
            ]
        );
    }

    #[test]
    fn every_file_declares_the_package() {
        for file in &set("order") {
            assert!(
                file.content.starts_with("package order\n"),
                "{} has wrong package",
                file.filename
            );
        }
    }

    #[test]
    fn model_declares_capitalized_type() {
        let set = set("order");
        let model = set.get("order.go").unwrap();
        assert_eq!(model.layer, Layer::Model);
        assert!(model.content.contains("type Order struct"));
    }

    #[test]
    fn no_placeholders_survive_rendering() {
        for file in &set("order") {
            assert!(!file.content.contains("{{"), "{}", file.filename);
        }
    }

    #[test]
    fn unknown_filename_is_none() {
        assert!(set("order").get("service.go").is_none());
        assert!(set("order").get("").is_none());
    }

    #[test]
    fn by_layer_matches_filename() {
        let set = set("order");
        for layer in Layer::ALL {
            assert_eq!(set.by_layer(layer).layer, layer);
        }
        assert_eq!(set.by_layer(Layer::Router).filename, "router.go");
        assert_eq!(set.by_layer(Layer::Model).filename, "order.go");
    }

    #[test]
    fn derivation_is_pure() {
        assert_eq!(set("order"), set("order"));
    }

    #[test]
    fn router_binds_echo_and_provider_wires_every_constructor() {
        let set = set("order");
        assert!(set.by_layer(Layer::Router).content.contains("github.com/labstack/echo"));

        let provider = &set.by_layer(Layer::Provider).content;
        for ctor in [
            "NewDataSource",
            "NewRepository",
            "NewUseCase",
            "NewHandler",
            "NewRouter",
        ] {
            assert!(provider.contains(ctor), "provider misses {ctor}");
        }
    }
}
