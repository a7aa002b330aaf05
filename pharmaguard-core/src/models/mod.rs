pub mod annotation;
pub mod diplotype;
pub mod drug;
pub mod phenotype;
pub mod risk;
pub mod variant;

// re-export for cleaner imports
pub use self::annotation::PhenotypeAnnotation;
pub use self::diplotype::GeneDiplotype;
pub use self::drug::Drug;
pub use self::phenotype::Phenotype;
pub use self::risk::{RiskAssessment, RiskLabel, RiskRule, Severity};
pub use self::variant::VariantRecord;
