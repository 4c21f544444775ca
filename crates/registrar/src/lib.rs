//! Facade crate for the registrar workspace.
//! Re-exports domain/kernel primitives and the enrollment slice, and builds the registry
//! an application starts from.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use registrar_domain as domain;
pub use registrar_enrollment as enrollment;
pub use registrar_kernel as kernel;

use registrar_domain::config::RegistrarConfig;
use registrar_enrollment::{Registry, RegistryError};

/// Builds the process-wide registry and loads the configured seed data into it.
///
/// The caller owns the returned registry and passes it to whatever drives it; there is
/// no global instance.
///
/// # Errors
/// Returns the first [`RegistryError`] raised while seeding.
pub fn init(config: &RegistrarConfig) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    let summary = registry.seed(&config.seed)?;
    tracing::debug!(?summary, "Registry ready");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::config::{SeedCourse, SeedStudent};

    #[test]
    fn init_without_seed_is_empty() {
        let registry = init(&RegistrarConfig::default()).expect("empty seed");
        assert_eq!(registry.courses().len(), 0);
        assert_eq!(registry.students().len(), 0);
    }

    #[test]
    fn init_applies_seed() {
        let mut config = RegistrarConfig::default();
        config.seed.courses.push(SeedCourse {
            code: "CS101".into(),
            title: "Intro".to_owned(),
            description: String::new(),
            capacity: 1,
            schedule: String::new(),
        });
        config.seed.students.push(SeedStudent { id: "S1".into(), name: "Ada".to_owned() });

        let mut registry = init(&config).expect("seed should load");
        registry.register("S1", "CS101").expect("seeded entities are registrable");
        assert_eq!(registry.list_courses()[0].enrolled, 1);
    }
}
