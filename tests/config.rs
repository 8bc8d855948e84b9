#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo::libs::config::{Config, DEFAULT_EXPORT_DIR};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext { temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.store_path.is_none());
        assert_eq!(config.export_dir(), PathBuf::from(DEFAULT_EXPORT_DIR));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            store_path: Some(ctx.temp_dir.path().join("mine.json")),
            export_dir: Some(PathBuf::from("out")),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::read_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.export_dir(), PathBuf::from("out"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_store_path_resolution_order(ctx: &mut ConfigTestContext) {
        let configured = ctx.temp_dir.path().join("configured.json");
        let explicit = ctx.temp_dir.path().join("explicit.json");
        let config = Config {
            store_path: Some(configured.clone()),
            export_dir: None,
        };

        assert_eq!(config.resolve_store_path(Some(explicit.clone())).unwrap(), explicit);
        assert_eq!(config.resolve_store_path(None).unwrap(), configured);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }
}
