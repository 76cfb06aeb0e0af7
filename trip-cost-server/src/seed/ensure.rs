//! Startup seeding.

use tracing::info;

use crate::fares::{FareDataError, FareTables, files};

use super::config::{FareDataConfig, SeedConfig};
use super::generate::generate;

/// Make sure fare data is available and return it.
///
/// Existing files are loaded as-is when both tables have rows and no
/// reseed is requested. Otherwise any old files are removed and a fresh
/// dataset is generated, written out and returned.
pub fn ensure_seeded(
    data: &FareDataConfig,
    seed: &SeedConfig,
) -> Result<FareTables, FareDataError> {
    if data.reseed {
        info!(dir = %data.dir.display(), "reseed requested, clearing fare data");
    } else if files::tables_exist(&data.dir) {
        let tables = files::load_tables(&data.dir)?;
        if tables.counts().is_populated() {
            return Ok(tables);
        }
        info!(dir = %data.dir.display(), "fare data incomplete, regenerating");
    }

    files::clear_tables(&data.dir)?;
    let tables = generate(seed);
    files::save_tables(&data.dir, &tables)?;

    let counts = tables.counts();
    info!(
        dir = %data.dir.display(),
        seed = seed.seed,
        bus = counts.bus,
        train = counts.train,
        "seeded fare data"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;
    use tempfile::tempdir;

    fn seed() -> SeedConfig {
        SeedConfig::new(42).with_rows_per_mode(50)
    }

    #[test]
    fn seeds_empty_directory() {
        let dir = tempdir().unwrap();
        let data = FareDataConfig::new(dir.path().join("data"));

        let tables = ensure_seeded(&data, &seed()).unwrap();

        assert_eq!(tables.counts().bus, 50);
        assert_eq!(tables.counts().train, 50);
        assert!(files::tables_exist(&data.dir));
    }

    #[test]
    fn keeps_existing_data() {
        let dir = tempdir().unwrap();
        let data = FareDataConfig::new(dir.path());
        ensure_seeded(&data, &seed()).unwrap();

        // a different seed must not replace the files
        let again = ensure_seeded(&data, &SeedConfig::new(7).with_rows_per_mode(10)).unwrap();
        assert_eq!(again.counts().bus, 50);
        assert_eq!(
            again.table(Mode::Bus).rows(),
            generate(&seed()).table(Mode::Bus).rows()
        );
    }

    #[test]
    fn reseed_replaces_data() {
        let dir = tempdir().unwrap();
        let data = FareDataConfig::new(dir.path());
        ensure_seeded(&data, &seed()).unwrap();

        let forced = data.clone().with_reseed(true);
        let tables = ensure_seeded(&forced, &SeedConfig::new(7).with_rows_per_mode(10)).unwrap();

        assert_eq!(tables.counts().bus, 10);
        assert_eq!(files::load_tables(dir.path()).unwrap().counts().train, 10);
    }

    #[test]
    fn regenerates_when_a_table_is_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(
            files::table_path(dir.path(), Mode::Bus),
            "origin,destination,category,cost,timing\n",
        )
        .unwrap();
        std::fs::write(
            files::table_path(dir.path(), Mode::Train),
            "origin,destination,category,cost,timing\nSalem,Erode,General,120,05:00\n",
        )
        .unwrap();

        let tables = ensure_seeded(&FareDataConfig::new(dir.path()), &seed()).unwrap();

        assert_eq!(tables.counts().bus, 50);
        assert_eq!(tables.counts().train, 50);
    }

    #[test]
    fn corrupt_files_are_reported() {
        let dir = tempdir().unwrap();
        for mode in Mode::ALL {
            std::fs::write(
                files::table_path(dir.path(), mode),
                "origin,destination,category,cost,timing\nSalem,Erode,General,lots,05:00\n",
            )
            .unwrap();
        }

        assert!(ensure_seeded(&FareDataConfig::new(dir.path()), &seed()).is_err());
    }
}
