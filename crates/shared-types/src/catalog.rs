use serde::{Deserialize, Serialize};

/// How a deadline period is counted.
///
/// `Calendar` counts every day (dias corridos); `Business` counts only
/// weekdays that are not national holidays (dias úteis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    Calendar,
    Business,
}

/// A catalog entry defining the day count and counting mode for a
/// procedural obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineTypeDefinition {
    pub code: String,
    pub description: String,
    pub days: i32,
    pub counting: CountingMode,
}

/// A catalog entry defining a case's expected duration and ordered phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureTypeDefinition {
    pub code: String,
    pub name: String,
    /// One of the service-type vocabulary values (civil, labor, ...).
    pub classification: String,
    pub estimated_duration_days: i32,
    pub phases: Vec<String>,
}

/// Immutable deadline-type and procedure-type catalogs, injected into the
/// engine at construction. Deserializable from `config.toml`; falls back
/// to the built-in Brazilian catalog when no file is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationCatalog {
    #[serde(default)]
    pub deadline_types: Vec<DeadlineTypeDefinition>,
    #[serde(default)]
    pub procedure_types: Vec<ProcedureTypeDefinition>,
}

impl Default for AutomationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn deadline_type(
    code: &str,
    description: &str,
    days: i32,
    counting: CountingMode,
) -> DeadlineTypeDefinition {
    DeadlineTypeDefinition {
        code: code.to_string(),
        description: description.to_string(),
        days,
        counting,
    }
}

fn procedure_type(
    code: &str,
    name: &str,
    classification: &str,
    estimated_duration_days: i32,
    phases: &[&str],
) -> ProcedureTypeDefinition {
    ProcedureTypeDefinition {
        code: code.to_string(),
        name: name.to_string(),
        classification: classification.to_string(),
        estimated_duration_days,
        phases: phases.iter().map(|p| p.to_string()).collect(),
    }
}

impl AutomationCatalog {
    /// Built-in catalog covering the common procedural deadlines (CPC/CLT
    /// counted in dias úteis, CDC decadence in dias corridos) and the
    /// procedure types the practice handles.
    pub fn builtin() -> Self {
        Self {
            deadline_types: vec![
                deadline_type(
                    "CONTESTACAO",
                    "Contestação (CPC art. 335)",
                    15,
                    CountingMode::Business,
                ),
                deadline_type(
                    "APELACAO",
                    "Recurso de apelação (CPC art. 1.003, §5º)",
                    15,
                    CountingMode::Business,
                ),
                deadline_type(
                    "AGRAVO_INSTRUMENTO",
                    "Agravo de instrumento (CPC art. 1.003, §5º)",
                    15,
                    CountingMode::Business,
                ),
                deadline_type(
                    "EMBARGOS_DECLARACAO",
                    "Embargos de declaração (CPC art. 1.023)",
                    5,
                    CountingMode::Business,
                ),
                deadline_type(
                    "RECURSO_ORDINARIO",
                    "Recurso ordinário trabalhista (CLT art. 895)",
                    8,
                    CountingMode::Business,
                ),
                deadline_type(
                    "IMPUGNACAO_CUMPRIMENTO",
                    "Impugnação ao cumprimento de sentença (CPC art. 525)",
                    15,
                    CountingMode::Business,
                ),
                deadline_type(
                    "MANIFESTACAO_PROVAS",
                    "Manifestação sobre provas",
                    5,
                    CountingMode::Business,
                ),
                deadline_type(
                    "RECURSO_INOMINADO",
                    "Recurso inominado (Lei 9.099/95, art. 42)",
                    10,
                    CountingMode::Business,
                ),
                deadline_type(
                    "RECLAMACAO_CDC_NAO_DURAVEIS",
                    "Reclamação por vício aparente, bens não duráveis (CDC art. 26, I)",
                    30,
                    CountingMode::Calendar,
                ),
                deadline_type(
                    "RECLAMACAO_CDC_DURAVEIS",
                    "Reclamação por vício aparente, bens duráveis (CDC art. 26, II)",
                    90,
                    CountingMode::Calendar,
                ),
                deadline_type(
                    "PAGAMENTO_ACORDO",
                    "Pagamento de parcela de acordo homologado",
                    30,
                    CountingMode::Calendar,
                ),
            ],
            procedure_types: vec![
                procedure_type(
                    "CIVIL_ORDINARY",
                    "Procedimento Comum Cível",
                    "civil",
                    720,
                    &[
                        "Petição Inicial",
                        "Citação e Contestação",
                        "Réplica",
                        "Saneamento",
                        "Instrução",
                        "Sentença",
                        "Fase Recursal",
                    ],
                ),
                procedure_type(
                    "LABOR_ORDINARY",
                    "Reclamação Trabalhista, Rito Ordinário",
                    "labor",
                    360,
                    &[
                        "Petição Inicial",
                        "Audiência Inaugural",
                        "Instrução",
                        "Sentença",
                    ],
                ),
                procedure_type(
                    "SMALL_CLAIMS",
                    "Juizado Especial Cível",
                    "civil",
                    180,
                    &[
                        "Petição Inicial",
                        "Audiência de Conciliação",
                        "Audiência de Instrução e Julgamento",
                        "Sentença",
                    ],
                ),
                procedure_type(
                    "CORPORATE_FORMATION",
                    "Constituição de Sociedade",
                    "corporate",
                    90,
                    &[
                        "Elaboração dos Atos Constitutivos",
                        "Registro na Junta Comercial",
                        "Inscrições Fiscais",
                        "Licenças e Alvarás",
                    ],
                ),
                procedure_type(
                    "FAMILY_DIVORCE",
                    "Divórcio Consensual",
                    "family",
                    120,
                    &[
                        "Petição Inicial",
                        "Homologação",
                        "Averbação no Registro Civil",
                    ],
                ),
            ],
        }
    }

    /// Look up a deadline type by code.
    pub fn deadline_type(&self, code: &str) -> Option<&DeadlineTypeDefinition> {
        self.deadline_types.iter().find(|d| d.code == code)
    }

    /// Look up a procedure type by code.
    pub fn procedure_type(&self, code: &str) -> Option<&ProcedureTypeDefinition> {
        self.procedure_types.iter().find(|p| p.code == code)
    }
}
