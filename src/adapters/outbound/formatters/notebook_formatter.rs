use crate::application::read_models::ModelReadModel;
use crate::ports::outbound::ArtifactFormatter;
use crate::shared::Result;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct Notebook {
    cells: Vec<Cell>,
    metadata: NotebookMetadata,
    nbformat: u32,
    nbformat_minor: u32,
}

#[derive(Debug, Serialize)]
struct NotebookMetadata {
    kernelspec: KernelSpec,
    language_info: LanguageInfo,
}

#[derive(Debug, Serialize)]
struct KernelSpec {
    display_name: &'static str,
    language: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    codemirror_mode: &'static str,
    file_extension: &'static str,
    mimetype: &'static str,
    name: &'static str,
    pygments_lexer: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
enum Cell {
    Code {
        execution_count: Option<u32>,
        id: String,
        metadata: CellMetadata,
        outputs: Vec<serde_json::Value>,
        source: Vec<String>,
    },
    Markdown {
        id: String,
        metadata: CellMetadata,
        source: Vec<String>,
    },
}

/// Every generated cell is tagged under the `sysml_deps` key
#[derive(Debug, Serialize)]
struct CellMetadata {
    #[serde(rename = "sysml_deps")]
    tag: CellTag,
}

#[derive(Debug, Serialize)]
struct CellTag {
    kind: CellKind,
    name: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum CellKind {
    Package,
    ViewTitle,
    View,
}

impl Cell {
    fn code(kind: CellKind, name: &str, source: &str) -> Self {
        Cell::Code {
            execution_count: None,
            id: new_cell_id(),
            metadata: CellMetadata::new(kind, name),
            outputs: Vec::new(),
            source: split_source(source),
        }
    }

    fn markdown(kind: CellKind, name: &str, source: &str) -> Self {
        Cell::Markdown {
            id: new_cell_id(),
            metadata: CellMetadata::new(kind, name),
            source: split_source(source),
        }
    }
}

impl CellMetadata {
    fn new(kind: CellKind, name: &str) -> Self {
        Self {
            tag: CellTag {
                kind,
                name: name.to_string(),
            },
        }
    }
}

fn new_cell_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// nbformat stores cell sources as lines that keep their terminators
fn split_source(source: &str) -> Vec<String> {
    source.split_inclusive('\n').map(str::to_string).collect()
}

/// NotebookFormatter adapter for the Jupyter notebook artifact
///
/// Emits nbformat 4.5 JSON bound to the SysML kernel: one code cell per
/// package in order, then a title cell and a `%view` cell per view. The
/// notebook is only written, never executed.
pub struct NotebookFormatter;

impl NotebookFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_cells(model: &ModelReadModel) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(model.packages.len() + 2 * model.views.len());

        for package in &model.packages {
            let body = format!("{}\n", package.text.trim_end());
            cells.push(Cell::code(CellKind::Package, &package.name, &body));
        }

        for view in &model.views {
            cells.push(Cell::markdown(
                CellKind::ViewTitle,
                view,
                &format!("# {}\n", view),
            ));
            cells.push(Cell::code(CellKind::View, view, &format!("%view {}\n", view)));
        }

        cells
    }
}

impl Default for NotebookFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactFormatter for NotebookFormatter {
    fn format(&self, model: &ModelReadModel) -> Result<String> {
        let notebook = Notebook {
            cells: Self::build_cells(model),
            metadata: NotebookMetadata {
                kernelspec: KernelSpec {
                    display_name: "SysML",
                    language: "sysml",
                    name: "sysml",
                },
                language_info: LanguageInfo {
                    codemirror_mode: "sysml",
                    file_extension: ".sysml",
                    mimetype: "text/x-sysml",
                    name: "SysML",
                    pygments_lexer: "java",
                    version: "1.0.0",
                },
            },
            nbformat: 4,
            nbformat_minor: 5,
        };

        let json = serde_json::to_string_pretty(&notebook)?;
        tracing::debug!(cells = notebook.cells.len(), "notebook rendered");
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::PackageView;
    use crate::model_scan::domain::DependencyGraph;
    use serde_json::Value;

    fn model() -> ModelReadModel {
        ModelReadModel {
            packages: vec![
                PackageView {
                    name: "Lib".to_string(),
                    text: "package Lib {\n  part def Wheel;\n}   \n".to_string(),
                },
                PackageView {
                    name: "App".to_string(),
                    text: "package App;".to_string(),
                },
            ],
            views: vec!["App::Overview".to_string()],
            node_count: 2,
            edge_count: 1,
            unresolved_imports: Vec::new(),
            scanned_files: 2,
            skipped_files: 0,
            graph: DependencyGraph::from_edges([("App", "Lib")]),
        }
    }

    fn render(model: &ModelReadModel) -> Value {
        let json = NotebookFormatter::new().format(model).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_notebook_header() {
        let notebook = render(&model());

        assert_eq!(notebook["nbformat"], 4);
        assert_eq!(notebook["nbformat_minor"], 5);
        assert_eq!(notebook["metadata"]["kernelspec"]["name"], "sysml");
        assert_eq!(notebook["metadata"]["language_info"]["file_extension"], ".sysml");
    }

    #[test]
    fn test_package_cells_in_model_order() {
        let notebook = render(&model());
        let cells = notebook["cells"].as_array().unwrap();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0]["cell_type"], "code");
        assert_eq!(cells[0]["metadata"]["sysml_deps"]["kind"], "package");
        assert_eq!(cells[0]["metadata"]["sysml_deps"]["name"], "Lib");
        assert_eq!(
            cells[0]["source"],
            serde_json::json!(["package Lib {\n", "  part def Wheel;\n", "}\n"])
        );
        assert_eq!(cells[0]["execution_count"], Value::Null);
        assert_eq!(cells[1]["metadata"]["sysml_deps"]["name"], "App");
        assert_eq!(cells[1]["source"], serde_json::json!(["package App;\n"]));
    }

    #[test]
    fn test_view_cells_follow_packages() {
        let notebook = render(&model());
        let cells = notebook["cells"].as_array().unwrap();

        assert_eq!(cells[2]["cell_type"], "markdown");
        assert_eq!(cells[2]["metadata"]["sysml_deps"]["kind"], "view_title");
        assert_eq!(cells[2]["source"], serde_json::json!(["# App::Overview\n"]));
        assert!(cells[2].get("outputs").is_none());

        assert_eq!(cells[3]["cell_type"], "code");
        assert_eq!(cells[3]["metadata"]["sysml_deps"]["kind"], "view");
        assert_eq!(cells[3]["source"], serde_json::json!(["%view App::Overview\n"]));
    }

    #[test]
    fn test_cell_ids_are_unique() {
        let notebook = render(&model());
        let ids: std::collections::HashSet<&str> = notebook["cells"]
            .as_array()
            .unwrap()
            .iter()
            .map(|cell| cell["id"].as_str().unwrap())
            .collect();

        assert_eq!(ids.len(), 4);
        assert!(ids.iter().all(|id| id.len() == 32));
    }

    #[test]
    fn test_empty_model_yields_empty_cell_list() {
        let mut empty = model();
        empty.packages.clear();
        empty.views.clear();

        let notebook = render(&empty);
        assert_eq!(notebook["cells"], serde_json::json!([]));
    }
}
