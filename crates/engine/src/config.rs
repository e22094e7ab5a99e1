use shared_types::AutomationCatalog;
use std::sync::OnceLock;

static CATALOG: OnceLock<AutomationCatalog> = OnceLock::new();

/// Path to the catalog config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Load the deadline-type and procedure-type catalogs.
///
/// Reads `config.toml` on the first call and memoizes the result. A
/// missing or unparseable file, or one defining no catalog entries,
/// falls back to the built-in Brazilian catalog. Service operations take
/// the catalog as an argument; this is the convenience loader for hosts
/// that run with the file-based or default configuration.
pub fn load_catalog() -> &'static AutomationCatalog {
    CATALOG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match toml::from_str::<AutomationCatalog>(&contents) {
            Ok(catalog)
                if !catalog.deadline_types.is_empty()
                    || !catalog.procedure_types.is_empty() =>
            {
                tracing::info!(
                    deadline_types = catalog.deadline_types.len(),
                    procedure_types = catalog.procedure_types.len(),
                    "loaded catalog from {CONFIG_PATH}"
                );
                catalog
            }
            Ok(_) => AutomationCatalog::builtin(),
            Err(e) => {
                tracing::warn!("failed to parse {CONFIG_PATH}: {e}; using built-in catalog");
                AutomationCatalog::builtin()
            }
        },
        Err(_) => AutomationCatalog::builtin(),
    })
}
