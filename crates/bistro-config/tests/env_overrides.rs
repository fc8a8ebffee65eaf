use bistro_config::{BistroConfig, ConfigError, OutputMode};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("BISTRO_CMS__URL", "http://localhost:1337");
        jail.set_env("BISTRO_CMS__TIMEOUT_SECS", "4");
        jail.set_env("BISTRO_SITE__OUTPUT", "server");

        let config = BistroConfig::load().expect("config loads");
        assert_eq!(config.cms.url, "http://localhost:1337");
        assert_eq!(config.cms.timeout_secs, 4);
        assert_eq!(config.site.output, OutputMode::Server);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bistro")?;
        jail.create_file(
            ".bistro/config.toml",
            "[cms]\nurl = \"http://file.example.com\"\napi_token = \"from-file\"\n",
        )?;
        jail.set_env("BISTRO_CMS__URL", "https://env.example.com");

        let config = BistroConfig::load().expect("config loads");
        assert_eq!(config.cms.url, "https://env.example.com");
        assert_eq!(config.cms.api_token, "from-file");
        Ok(())
    });
}

#[test]
fn zero_page_size_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("BISTRO_CMS__PAGE_SIZE", "0");

        let err = BistroConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "cms.page_size"));
        Ok(())
    });
}
