//! Application constants for the IDP processor
//!
//! This module contains default labels, rule tables, file names and template
//! content used throughout the IDP processor application.

// =============================================================================
// Default Record Values
// =============================================================================

/// Status assigned to rows without a status column
pub const DEFAULT_STATUS: &str = "Pending";

/// Category assigned to rows without a category column
pub const DEFAULT_CATEGORY: &str = "General";

/// Skill-type dimension member used when a record carries no skill type
pub const UNCLASSIFIED_SKILL_TYPE: &str = "Unclassified";

/// Prefix for synthesized collaborator codes
pub const FALLBACK_CODE_PREFIX: &str = "IDP-";

/// Number of random characters after the fallback prefix
pub const FALLBACK_CODE_SUFFIX_LEN: usize = 5;

/// Byte-order mark accepted at the start of uploads and written on export
pub const BOM: char = '\u{FEFF}';

// =============================================================================
// Skill-Type Classification
// =============================================================================

/// Skill-type labels and keyword sets, checked in order
pub mod skill_types {
    pub const CLOUD_DEVOPS: &str = "Cloud/DevOps";
    pub const SOFT_SKILLS_AGILE: &str = "Soft Skills/Agile";
    pub const TECHNICAL_CORE: &str = "Technical/Core";

    pub const CLOUD_KEYWORDS: &[&str] = &[
        "cloud",
        "aws",
        "azure",
        "gcp",
        "devops",
        "docker",
        "kubernetes",
        "k8s",
        "terraform",
        "ci/cd",
        "pipeline",
        "infraestructura",
        "linux",
        "server",
    ];

    pub const SOFT_KEYWORDS: &[&str] = &[
        "liderazgo",
        "gestión",
        "gestion",
        "management",
        "comunicación",
        "agile",
        "scrum",
        "kanban",
        "negociación",
        "feedback",
        "coaching",
        "soft",
        "blanda",
        "equipo",
        "presentación",
        "inteligencia emocional",
    ];
}

// =============================================================================
// Country Normalization
// =============================================================================

/// Two-letter codes and the upper-cased fragments that identify them
pub const COUNTRY_RULES: &[(&str, &[&str])] = &[
    ("PE", &["PER"]),
    ("EC", &["ECU"]),
    ("CR", &["COS"]),
    ("RD", &["DOM"]),
];

// =============================================================================
// Analytics Defaults
// =============================================================================

/// Progress below this value counts as at-risk
pub const DEFAULT_RISK_THRESHOLD: f64 = 40.0;

/// Status fragments meaning the activity is done
pub const COMPLETED_STATUS_KEYWORDS: &[&str] = &["completado", "completed"];

/// Status fragments meaning the activity has not started
pub const PENDING_STATUS_KEYWORDS: &[&str] = &["pendiente", "pending"];

/// Placeholder shown for a mode over an empty dataset
pub const NO_VALUE: &str = "-";

/// Number of competencies sampled into the insight request
pub const INSIGHT_COMPETENCY_SAMPLE: usize = 10;

/// Number of records sampled into the insight request
pub const INSIGHT_RECORD_SAMPLE: usize = 8;

/// The filtered subset is analysed only when it has more rows than this
pub const INSIGHT_MIN_SUBSET: usize = 5;

/// Default length of the collaborator ranking
pub const DEFAULT_RANKING_LIMIT: usize = 7;

/// Heatmap category buckets and the lower-cased fragments that select them
pub mod heatmap_buckets {
    pub const COURSES: &str = "Cursos talleres y lecturas";
    pub const CRITICAL_EXPERIENCE: &str = "Experiencia critica";
    pub const MENTORING: &str = "Mentoring / Coaching";
    pub const OTHER: &str = "Otros";

    pub const RULES: &[(&str, &[&str])] = &[
        (
            COURSES,
            &["curso", "taller", "lectura", "training", "capacitacion"],
        ),
        (
            CRITICAL_EXPERIENCE,
            &["experiencia", "critica", "crítica", "proyecto", "asignacion"],
        ),
        (MENTORING, &["mentor", "coach", "acompañamiento"]),
    ];
}

// =============================================================================
// Template and Output Files
// =============================================================================

/// Canonical upload header row
pub const TEMPLATE_HEADERS: &[&str] = &[
    "Código",
    "Nombre",
    "Jefe",
    "País",
    "Función",
    "Objetivo de Desarrollo",
    "Competencia a desarrollar",
    "Tipo Habilidad",
    "Descripción",
    "Fecha Inicio",
    "Fecha Fin",
    "Estatus",
    "Categoría",
    "Progreso (%)",
];

/// Example row shipped with the template
pub const TEMPLATE_EXAMPLE_ROW: &[&str] = &[
    "IDP001",
    "Juan Perez",
    "Maria Lopez",
    "PE",
    "Desarrollador",
    "Mejorar Skills",
    "React Avanzado",
    "Technical/Core",
    "Curso online completo",
    "01/01/2025",
    "30/03/2025",
    "En Progreso",
    "Cursos",
    "45%",
];

/// Default template filename
pub const TEMPLATE_FILENAME: &str = "plantilla_idp_2025.csv";

/// Default output directory for exported tables
pub const DEFAULT_OUTPUT_DIR: &str = "star_schema";

/// Configuration directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "idp-processor";

/// Configuration filename
pub const CONFIG_FILENAME: &str = "config.toml";

// =============================================================================
// Star Schema Table Names
// =============================================================================

pub mod tables {
    pub const FACT_DEVELOPMENT: &str = "Fact_Development";
    pub const DIM_COUNTRY: &str = "Dim_Country";
    pub const DIM_MANAGER: &str = "Dim_Manager";
    pub const DIM_CATEGORY: &str = "Dim_Category";
    pub const DIM_COMPETENCY: &str = "Dim_Competency";
    pub const DIM_SKILL_TYPE: &str = "Dim_SkillType";
    pub const DIM_COLLABORATOR: &str = "Dim_Collaborator";
}
